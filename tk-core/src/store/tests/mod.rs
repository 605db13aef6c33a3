mod types_test;

use rstest::*;
use tk_api::TaskKind;
use tk_testutils::*;

use super::*;
