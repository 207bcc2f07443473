//! Line commands understood by the interactive wizard.

use stride_core::StepInput;

/// One line typed at the wizard prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCommand {
    Input(StepInput),
    Next,
    Back,
    Review,
    Cancel,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
- `name <text>`: set the program name
- `toggle <tag>`: select or deselect a program type
- `weeks <n>`: set the program length
- `nutrition yes|no`: include a nutrition program
- `add-phase`, `remove-phase <id>`: add or remove a phase
- `rename-phase <id> <name>`: rename a phase
- `phase-weeks <id> <start> <end>`: set the weeks a phase covers
- `public`, `private`: choose who can see the program
- `next`, `back`: move between steps (`next` on the last step submits)
- `review`: show everything entered so far
- `cancel`: leave the wizard for the program list
- `quit`: exit without submitting
";

/// Parses a prompt line. Blank lines are `None`.
pub fn parse(line: &str) -> Option<Result<PromptCommand, String>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    Some(parse_verb(&verb.to_lowercase(), rest))
}

fn parse_verb(verb: &str, rest: &str) -> Result<PromptCommand, String> {
    let input = match verb {
        "next" | "n" => return Ok(PromptCommand::Next),
        "back" | "b" => return Ok(PromptCommand::Back),
        "review" | "r" => return Ok(PromptCommand::Review),
        "cancel" => return Ok(PromptCommand::Cancel),
        "help" | "?" => return Ok(PromptCommand::Help),
        "quit" | "q" | "exit" => return Ok(PromptCommand::Quit),
        "name" => StepInput::SetName(rest.to_string()),
        "toggle" => StepInput::ToggleType(required(rest, "toggle <tag>")?.to_string()),
        "weeks" => StepInput::SetWeeks(rest.to_string()),
        "nutrition" => StepInput::SetNutrition(yes_no(rest)?),
        "public" => StepInput::SetPublic(true),
        "private" => StepInput::SetPublic(false),
        "add-phase" => StepInput::AddPhase,
        "remove-phase" => StepInput::RemovePhase {
            id: required(rest, "remove-phase <id>")?.to_string(),
        },
        "rename-phase" => {
            let (id, name) = rest
                .split_once(char::is_whitespace)
                .ok_or("usage: rename-phase <id> <name>")?;
            StepInput::RenamePhase {
                id: id.to_string(),
                name: name.trim().to_string(),
            }
        }
        "phase-weeks" => {
            let parts: Vec<&str> = rest.split_whitespace().collect();
            let [id, start, end] = parts.as_slice() else {
                return Err("usage: phase-weeks <id> <start> <end>".to_string());
            };
            StepInput::SetPhaseWeeks {
                id: id.to_string(),
                start: start.to_string(),
                end: end.to_string(),
            }
        }
        other => return Err(format!("unknown command '{other}', type `help`")),
    };
    Ok(PromptCommand::Input(input))
}

fn required<'a>(value: &'a str, usage: &str) -> Result<&'a str, String> {
    if value.is_empty() {
        Err(format!("usage: {usage}"))
    } else {
        Ok(value)
    }
}

fn yes_no(value: &str) -> Result<bool, String> {
    match value.to_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        _ => Err("usage: nutrition yes|no".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> Result<PromptCommand, String> {
        parse(line).expect("line should not be blank")
    }

    #[test]
    fn test_blank_line() {
        assert!(parse("   ").is_none());
    }

    #[test]
    fn test_navigation_commands() {
        assert_eq!(parsed("next"), Ok(PromptCommand::Next));
        assert_eq!(parsed("B"), Ok(PromptCommand::Back));
        assert_eq!(parsed("quit"), Ok(PromptCommand::Quit));
    }

    #[test]
    fn test_name_keeps_spaces() {
        assert_eq!(
            parsed("name  Couch to 5k "),
            Ok(PromptCommand::Input(StepInput::SetName(
                "Couch to 5k".to_string()
            )))
        );
    }

    #[test]
    fn test_toggle_multi_word_tag() {
        assert_eq!(
            parsed("toggle Weight Loss"),
            Ok(PromptCommand::Input(StepInput::ToggleType(
                "Weight Loss".to_string()
            )))
        );
        assert!(parsed("toggle").is_err());
    }

    #[test]
    fn test_weeks_passes_raw_text() {
        assert_eq!(
            parsed("weeks abc"),
            Ok(PromptCommand::Input(StepInput::SetWeeks("abc".to_string())))
        );
    }

    #[test]
    fn test_nutrition_choice() {
        assert_eq!(
            parsed("nutrition yes"),
            Ok(PromptCommand::Input(StepInput::SetNutrition(true)))
        );
        assert!(parsed("nutrition maybe").is_err());
    }

    #[test]
    fn test_phase_commands() {
        assert_eq!(
            parsed("rename-phase 2 Deload Week"),
            Ok(PromptCommand::Input(StepInput::RenamePhase {
                id: "2".to_string(),
                name: "Deload Week".to_string(),
            }))
        );
        assert_eq!(
            parsed("phase-weeks 2 5 8"),
            Ok(PromptCommand::Input(StepInput::SetPhaseWeeks {
                id: "2".to_string(),
                start: "5".to_string(),
                end: "8".to_string(),
            }))
        );
        assert!(parsed("phase-weeks 2 5").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert!(parsed("jump").unwrap_err().contains("unknown command"));
    }
}
