//! Display implementations for domain models.
//!
//! Output is markdown, rendered by the CLI's terminal renderer.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{AccessType, Phase, PhaseRequest, Program, ProgramDraft};

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (weeks {}-{})",
            self.name, self.start_week, self.end_week
        )
    }
}

impl fmt::Display for PhaseRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (weeks {}-{})",
            self.name, self.start_week, self.end_week
        )
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn tag_list(types: &[String]) -> String {
    if types.is_empty() {
        "none".to_string()
    } else {
        types.join(", ")
    }
}

/// Review summary of a draft, shown before submitting.
impl fmt::Display for ProgramDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() {
            "(untitled)"
        } else {
            self.name.as_str()
        };
        writeln!(f, "# {name}")?;
        writeln!(f)?;
        writeln!(f, "- Types: {}", tag_list(&self.types))?;
        writeln!(f, "- Weeks: {}", self.weeks)?;
        writeln!(f, "- Nutrition program: {}", yes_no(self.includes_nutrition))?;
        writeln!(f, "- Access: {}", AccessType::from(self.is_public))?;

        if !self.phases.is_empty() {
            writeln!(f, "\n## Phases")?;
            writeln!(f)?;
            for (position, phase) in self.phases.iter().enumerate() {
                writeln!(f, "{}. {phase}", position + 1)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details = &self.details;
        writeln!(f, "# {}. {}", self.id, details.name)?;
        writeln!(f)?;
        writeln!(f, "- Types: {}", tag_list(&details.types))?;
        writeln!(f, "- Weeks: {}", details.num_weeks)?;
        writeln!(
            f,
            "- Nutrition program: {}",
            yes_no(details.has_nutrition_program)
        )?;
        writeln!(f, "- Access: {}", details.access_type)?;
        writeln!(f, "- Created by: {}", details.created_by)?;
        if let Some(created_at) = &self.created_at {
            writeln!(f, "- Created: {}", LocalDateTime(created_at))?;
        }

        if details.phases.is_empty() {
            writeln!(f, "\nNo phases in this program.")?;
        } else {
            writeln!(f, "\n## Phases")?;
            writeln!(f)?;
            for (position, phase) in details.phases.iter().enumerate() {
                writeln!(f, "{}. {phase}", position + 1)?;
            }
        }
        Ok(())
    }
}
