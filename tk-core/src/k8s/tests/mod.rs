
use rstest::*;
use tk_testutils::*;

use super::*;
