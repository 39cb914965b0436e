//! Machine lanes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two machines every job visits, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Machine {
    /// Upstream machine. Runs jobs back-to-back from t=0.
    First,
    /// Downstream machine. Waits for each job to leave Machine 1.
    Second,
}

impl Machine {
    /// Both machines in flow order.
    pub const ALL: [Machine; 2] = [Machine::First, Machine::Second];

    /// Zero-based lane index (0 = Machine 1).
    pub fn index(self) -> usize {
        match self {
            Machine::First => 0,
            Machine::Second => 1,
        }
    }

    /// Short lane label (`"M1"`, `"M2"`).
    pub fn label(self) -> &'static str {
        match self {
            Machine::First => "M1",
            Machine::Second => "M2",
        }
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Machine::First => write!(f, "Machine 1"),
            Machine::Second => write!(f, "Machine 2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_order() {
        assert_eq!(Machine::ALL[0].index(), 0);
        assert_eq!(Machine::ALL[1].index(), 1);
    }

    #[test]
    fn test_machine_labels() {
        assert_eq!(Machine::First.label(), "M1");
        assert_eq!(Machine::Second.label(), "M2");
        assert_eq!(Machine::Second.to_string(), "Machine 2");
    }
}
