//! Markdown rendering of step views.
//!
//! Each field is printed with the hint a terminal user needs to change it,
//! e.g. `name <text>` or `toggle <tag>`.

use std::fmt;

use crate::steps::{Field, OptionView, StepView};

impl fmt::Display for StepView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        for field in &self.fields {
            writeln!(f)?;
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Text {
                label,
                value,
                required,
            } => {
                let marker = if *required { " *" } else { "" };
                let value = if value.is_empty() {
                    "_(empty)_"
                } else {
                    value.as_str()
                };
                writeln!(f, "**{label}**{marker}: {value}")
            }
            Field::Number {
                label,
                value,
                min,
                max,
            } => writeln!(f, "**{label}** ({min}-{max}): {value}"),
            Field::Tags { label, options } => {
                writeln!(f, "**{label}**")?;
                for option in options {
                    writeln!(f, "- {option}")?;
                }
                Ok(())
            }
            Field::Choice { label, options } => {
                writeln!(f, "**{label}**")?;
                writeln!(f, "{}   {}", options[0], options[1])
            }
            Field::Phases { phases, weeks } => {
                writeln!(f, "**Phases** ({weeks} weeks total)")?;
                for (position, phase) in phases.iter().enumerate() {
                    writeln!(
                        f,
                        "{}. {} (weeks {}-{}) `id: {}`",
                        position + 1,
                        phase.name,
                        phase.start_week,
                        phase.end_week,
                        phase.id
                    )?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for OptionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.selected { "[x]" } else { "[ ]" };
        write!(f, "{mark} {}", self.label)
    }
}
