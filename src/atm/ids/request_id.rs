use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one withdrawal request within an input file
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u32);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "#{}", self.0);
    }
}
