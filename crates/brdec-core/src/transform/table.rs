//! Transform table and prefix/suffix pool (RFC 7932 Appendix B)

use super::TransformKind::{self, *};
use super::{NUM_TRANSFORMS, Transform};

/// NUL-separated prefix and suffix fragments, addressed by byte offset
pub static PREFIX_SUFFIX: [u8; 208] = *b"\0 \0, \0 of the \0 of \0s \0.\0 and \0 in \0\"\0 to \0\">\0\n\0. \0]\0 \
for \0 a \0 that \0'\0 with \0 from \0 by \0(\0. The \0 on \0 as \0 \
is \0ing \0\n\t\0:\0ed \0=\"\0 at \0ly \0,\0='\0.com/\0. This \0 \
not \0er \0al \0ful \0ive \0less \0est \0ize \0\xc2\xa0\0ous \0";

/// Offsets of the fragments in `PREFIX_SUFFIX`
mod affix {
    pub const EMPTY: u8 = 0;
    pub const SP: u8 = 1;
    pub const COMMA_SP: u8 = 3;
    pub const SP_OF_SP_THE_SP: u8 = 6;
    pub const SP_THE_SP: u8 = 9;
    pub const E_SP: u8 = 12;
    pub const SP_OF_SP: u8 = 15;
    pub const S_SP: u8 = 20;
    pub const DOT: u8 = 23;
    pub const SP_AND_SP: u8 = 25;
    pub const SP_IN_SP: u8 = 31;
    pub const DQUOT: u8 = 36;
    pub const SP_TO_SP: u8 = 38;
    pub const DQUOT_GT: u8 = 43;
    pub const NEWLINE: u8 = 46;
    pub const DOT_SP: u8 = 48;
    pub const CLOSE_BR: u8 = 51;
    pub const SP_FOR_SP: u8 = 53;
    pub const SP_A_SP: u8 = 59;
    pub const SP_THAT_SP: u8 = 63;
    pub const SQUOT: u8 = 70;
    pub const SP_WITH_SP: u8 = 72;
    pub const SP_FROM_SP: u8 = 79;
    pub const SP_BY_SP: u8 = 86;
    pub const OPEN: u8 = 91;
    pub const DOT_SP_THE_SP: u8 = 93;
    pub const SP_ON_SP: u8 = 100;
    pub const SP_AS_SP: u8 = 105;
    pub const SP_IS_SP: u8 = 110;
    pub const ING_SP: u8 = 115;
    pub const NEWLINE_TAB: u8 = 120;
    pub const COLON: u8 = 123;
    pub const ED_SP: u8 = 125;
    pub const EQ_DQUOT: u8 = 129;
    pub const SP_AT_SP: u8 = 132;
    pub const LY_SP: u8 = 137;
    pub const COMMA: u8 = 141;
    pub const EQ_SQUOT: u8 = 143;
    pub const DOT_COM_SLASH: u8 = 146;
    pub const DOT_SP_THIS_SP: u8 = 152;
    pub const SP_NOT_SP: u8 = 160;
    pub const ER_SP: u8 = 166;
    pub const AL_SP: u8 = 170;
    pub const FUL_SP: u8 = 174;
    pub const IVE_SP: u8 = 179;
    pub const LESS_SP: u8 = 184;
    pub const EST_SP: u8 = 190;
    pub const IZE_SP: u8 = 195;
    pub const NBSP: u8 = 200;
    pub const OUS_SP: u8 = 203;
}

use affix::*;

const fn t(prefix_id: u8, kind: TransformKind, suffix_id: u8) -> Transform {
    Transform { prefix_id, kind, suffix_id }
}

pub static TRANSFORMS: [Transform; NUM_TRANSFORMS] = [
    t(EMPTY, Identity, EMPTY),
    t(EMPTY, Identity, SP),
    t(SP, Identity, SP),
    t(EMPTY, OmitFirst1, EMPTY),
    t(EMPTY, UppercaseFirst, SP),
    t(EMPTY, Identity, SP_THE_SP),
    t(SP, Identity, EMPTY),
    t(S_SP, Identity, SP),
    t(EMPTY, Identity, SP_OF_SP),
    t(EMPTY, UppercaseFirst, EMPTY),
    t(EMPTY, Identity, SP_AND_SP),
    t(EMPTY, OmitFirst2, EMPTY),
    t(EMPTY, OmitLast1, EMPTY),
    t(COMMA_SP, Identity, SP),
    t(EMPTY, Identity, COMMA_SP),
    t(SP, UppercaseFirst, SP),
    t(EMPTY, Identity, SP_IN_SP),
    t(EMPTY, Identity, SP_TO_SP),
    t(E_SP, Identity, SP),
    t(EMPTY, Identity, DQUOT),
    t(EMPTY, Identity, DOT),
    t(EMPTY, Identity, DQUOT_GT),
    t(EMPTY, Identity, NEWLINE),
    t(EMPTY, OmitLast3, EMPTY),
    t(EMPTY, Identity, CLOSE_BR),
    t(EMPTY, Identity, SP_FOR_SP),
    t(EMPTY, OmitFirst3, EMPTY),
    t(EMPTY, OmitLast2, EMPTY),
    t(EMPTY, Identity, SP_A_SP),
    t(EMPTY, Identity, SP_THAT_SP),
    t(SP, UppercaseFirst, EMPTY),
    t(EMPTY, Identity, DOT_SP),
    t(DOT, Identity, EMPTY),
    t(SP, Identity, COMMA_SP),
    t(EMPTY, OmitFirst4, EMPTY),
    t(EMPTY, Identity, SP_WITH_SP),
    t(EMPTY, Identity, SQUOT),
    t(EMPTY, Identity, SP_FROM_SP),
    t(EMPTY, Identity, SP_BY_SP),
    t(EMPTY, OmitFirst5, EMPTY),
    t(EMPTY, OmitFirst6, EMPTY),
    t(SP_THE_SP, Identity, EMPTY),
    t(EMPTY, OmitLast4, EMPTY),
    t(EMPTY, Identity, DOT_SP_THE_SP),
    t(EMPTY, UppercaseAll, EMPTY),
    t(EMPTY, Identity, SP_ON_SP),
    t(EMPTY, Identity, SP_AS_SP),
    t(EMPTY, Identity, SP_IS_SP),
    t(EMPTY, OmitLast7, EMPTY),
    t(EMPTY, OmitLast1, ING_SP),
    t(EMPTY, Identity, NEWLINE_TAB),
    t(EMPTY, Identity, COLON),
    t(SP, Identity, DOT_SP),
    t(EMPTY, Identity, ED_SP),
    t(EMPTY, OmitFirst9, EMPTY),
    t(EMPTY, OmitFirst7, EMPTY),
    t(EMPTY, OmitLast6, EMPTY),
    t(EMPTY, Identity, OPEN),
    t(EMPTY, UppercaseFirst, COMMA_SP),
    t(EMPTY, OmitLast8, EMPTY),
    t(EMPTY, Identity, SP_AT_SP),
    t(EMPTY, Identity, LY_SP),
    t(SP_THE_SP, Identity, SP_OF_SP),
    t(EMPTY, OmitLast5, EMPTY),
    t(EMPTY, OmitLast9, EMPTY),
    t(SP, UppercaseFirst, COMMA_SP),
    t(EMPTY, UppercaseFirst, DQUOT),
    t(DOT, Identity, OPEN),
    t(EMPTY, UppercaseAll, SP),
    t(EMPTY, UppercaseFirst, DQUOT_GT),
    t(EMPTY, Identity, EQ_DQUOT),
    t(SP, Identity, DOT),
    t(DOT_COM_SLASH, Identity, EMPTY),
    t(SP_THE_SP, Identity, SP_OF_SP_THE_SP),
    t(EMPTY, UppercaseFirst, SQUOT),
    t(EMPTY, Identity, DOT_SP_THIS_SP),
    t(EMPTY, Identity, COMMA),
    t(DOT, Identity, SP),
    t(EMPTY, UppercaseFirst, OPEN),
    t(EMPTY, UppercaseFirst, DOT),
    t(EMPTY, Identity, SP_NOT_SP),
    t(SP, Identity, EQ_DQUOT),
    t(EMPTY, Identity, ER_SP),
    t(SP, UppercaseAll, SP),
    t(EMPTY, Identity, AL_SP),
    t(SP, UppercaseAll, EMPTY),
    t(EMPTY, Identity, EQ_SQUOT),
    t(EMPTY, UppercaseAll, DQUOT),
    t(EMPTY, UppercaseFirst, DOT_SP),
    t(SP, Identity, OPEN),
    t(EMPTY, Identity, FUL_SP),
    t(SP, UppercaseFirst, DOT_SP),
    t(EMPTY, Identity, IVE_SP),
    t(EMPTY, Identity, LESS_SP),
    t(EMPTY, UppercaseAll, SQUOT),
    t(EMPTY, Identity, EST_SP),
    t(SP, UppercaseFirst, DOT),
    t(EMPTY, UppercaseAll, DQUOT_GT),
    t(SP, Identity, EQ_SQUOT),
    t(EMPTY, UppercaseFirst, COMMA),
    t(EMPTY, Identity, IZE_SP),
    t(EMPTY, UppercaseAll, DOT),
    t(NBSP, Identity, EMPTY),
    t(SP, Identity, COMMA),
    t(EMPTY, UppercaseFirst, EQ_DQUOT),
    t(EMPTY, UppercaseAll, EQ_DQUOT),
    t(EMPTY, Identity, OUS_SP),
    t(EMPTY, UppercaseAll, COMMA_SP),
    t(EMPTY, UppercaseFirst, EQ_SQUOT),
    t(SP, UppercaseFirst, COMMA),
    t(SP, UppercaseAll, EQ_DQUOT),
    t(SP, UppercaseAll, COMMA_SP),
    t(EMPTY, UppercaseAll, COMMA),
    t(EMPTY, UppercaseAll, OPEN),
    t(EMPTY, UppercaseAll, DOT_SP),
    t(SP, UppercaseAll, DOT),
    t(EMPTY, UppercaseAll, EQ_SQUOT),
    t(SP, UppercaseAll, DOT_SP),
    t(SP, UppercaseFirst, EQ_DQUOT),
    t(SP, UppercaseAll, EQ_SQUOT),
    t(SP, UppercaseFirst, EQ_SQUOT),
];
