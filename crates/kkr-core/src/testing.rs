//! Shared fixtures for unit tests.

use crate::core::io::kkr::parse_str;
use crate::core::models::document::Document;

/// A YBa2Cu3O7 cell: 8 type definitions, 13 positions, two `Ba_2t_0` sites.
pub(crate) const YBCO_INPUT: &str = r#"c------------------------------------------------------------
     go    data/ybco
c------------------------------------------------------------
c   brvtyp     a        c/a   b/a   alpha   beta   gamma
     prm     7.2246   3.2407  1.0156   ,       ,      ,
c------------------------------------------------------------
c   edelt    ewidth    reltyp   sdftyp   magtyp   record
    0.001     1.0      nrl      mjw      nmag     init
c------------------------------------------------------------
c   outtyp    bzqlty   maxitr   pmix
    update      4        200    0.02
c------------------------------------------------------------
c    ntyp
     8
c------------------------------------------------------------
c   typ     ncmp    rmt    field   mxl  [anclr   conc]
    Ba_2t_0   1   0.0   0.0   2
                              56  100.0
    Y_1h_2   1   0.0   0.0   2
                              39  100.0
    Cu_1a_5   1   0.0   0.0   2
                              29  100.0
    Cu_2q_3   1   0.0   0.0   2
                              29  100.0
    O4_2q_4   1   0.0   0.0   1
                              8  100.0
    O2_1e_6   1   0.0   0.0   1
                              8  100.0
    O1_2s_8   1   0.0   0.0   1
                              8  100.0
    O3_2r_7   1   0.0   0.0   1
                              8	100.0
c------------------------------------------------------------
c   natm
     13
c------------------------------------------------------------
c   atmicx(in the unit of a)                 atmtyp
c------------------------------------------------------------
    0.50000000a  0.50000000b  0.18430000c  Ba_2t_0
    0.50000000a  0.50000000b  0.81570000c  Ba_2t_0
    0.50000000a  0.50000000b  0.50000000c  Y_1h_2
    0.00000000a  0.00000000b  0.00000000c  Cu_1a_5
    0.00000000a  0.00000000b  0.35560000c  Cu_2q_3
    0.00000000a  0.00000000b  0.64440000c  Cu_2q_3
    0.00000000a  0.00000000b  0.15840000c  O4_2q_4
    0.00000000a  0.00000000b  0.84160000c  O4_2q_4
    0.00000000a  0.50000000b  0.00000000c  O2_1e_6
    0.00000000a  0.50000000b  0.37830000c  O1_2s_8
    0.00000000a  0.50000000b  0.62170000c  O1_2s_8
    0.50000000a  0.00000000b  0.37830000c  O3_2r_7
    0.50000000a  0.00000000b  0.62170000c  O3_2r_7
end
c------------------------------------------------------------
"#;

pub(crate) fn ybco() -> Document {
    parse_str(YBCO_INPUT).expect("fixture parses")
}
