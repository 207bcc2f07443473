//! Display of navigation and submission outcomes.

use std::fmt;

use crate::wizard::Advance;

impl fmt::Display for Advance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advance::Moved { index } => writeln!(f, "Moved to step {}", index + 1),
            Advance::Submitted(program) => {
                writeln!(f, "Created program with ID: {}", program.id)?;
                writeln!(f)?;
                write!(f, "{program}")
            }
            Advance::Rejected { reason } => writeln!(f, "Error: {reason}"),
        }
    }
}
