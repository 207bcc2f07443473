//! Command handlers driving the wizard controller from the terminal.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use log::debug;
use stride_core::{Advance, CreateProgramRequest, Step, StepInput, WizardController};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    args::ProgramArgs,
    prompt::{self, PromptCommand},
    renderer::TerminalRenderer,
    services::TerminalNavigator,
};

pub struct Cli {
    wizard: WizardController,
    navigator: Arc<TerminalNavigator>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(
        wizard: WizardController,
        navigator: Arc<TerminalNavigator>,
        renderer: TerminalRenderer,
    ) -> Self {
        Self {
            wizard,
            navigator,
            renderer,
        }
    }

    /// Walk the wizard interactively, reading commands from stdin.
    ///
    /// End of input leaves without submitting.
    pub async fn run_interactive(&self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        self.show_step()?;
        self.renderer.render("Type `help` for commands.\n")?;

        loop {
            self.renderer.prompt()?;
            let Some(line) = lines.next_line().await? else {
                debug!("Input closed, leaving the wizard");
                return Ok(());
            };

            let command = match prompt::parse(&line) {
                None => continue,
                Some(Err(message)) => {
                    self.renderer.error(&message)?;
                    continue;
                }
                Some(Ok(command)) => command,
            };

            match command {
                PromptCommand::Input(input) => {
                    if self.wizard.apply_input(input)? {
                        self.show_step()?;
                    } else {
                        self.renderer.error("nothing changed on this step")?;
                    }
                }
                PromptCommand::Next => match self.wizard.advance().await? {
                    Advance::Moved { .. } => self.show_step()?,
                    outcome @ Advance::Submitted(_) => {
                        self.renderer.render(&outcome.to_string())?;
                        return Ok(());
                    }
                    Advance::Rejected { reason } => {
                        self.renderer.error(&reason)?;
                        self.renderer.render("Type `next` to try again.\n")?;
                    }
                },
                PromptCommand::Back => {
                    self.wizard.retreat()?;
                    self.show_step()?;
                }
                PromptCommand::Review => self.renderer.render(&self.wizard.draft().to_string())?,
                PromptCommand::Cancel => {
                    self.wizard.cancel()?;
                    let path = self.navigator.last_path().unwrap_or_default();
                    self.renderer.render(&format!("Cancelled, back to {path}\n"))?;
                    return Ok(());
                }
                PromptCommand::Help => self.renderer.render(prompt::HELP)?,
                PromptCommand::Quit => return Ok(()),
            }
        }
    }

    /// Fill the wizard from flags and submit.
    pub async fn create(&self, program: &ProgramArgs) -> Result<()> {
        self.fill(program).await?;

        match self.wizard.advance().await? {
            outcome @ Advance::Submitted(_) => self.renderer.render(&outcome.to_string()),
            Advance::Rejected { reason } => bail!(reason),
            Advance::Moved { index } => bail!("wizard stopped at step {} before submitting", index + 1),
        }
    }

    /// Fill the wizard from flags and show what would be submitted.
    pub async fn preview(&self, program: &ProgramArgs) -> Result<()> {
        self.fill(program).await?;

        let request = self
            .wizard
            .preview_request()
            .context("Cannot build the request")?;
        let json = serde_json::to_string_pretty(&request)?;

        self.renderer.render(&self.wizard.draft().to_string())?;
        self.renderer.render(&format!("\n## Request\n\n{json}\n"))
    }

    /// Print the JSON schema of the create-program request.
    pub fn schema(renderer: &TerminalRenderer) -> Result<()> {
        let schema = schemars::schema_for!(CreateProgramRequest);
        renderer.render(&format!("{}\n", serde_json::to_string_pretty(&schema)?))
    }

    fn show_step(&self) -> Result<()> {
        let markdown = format!("\n{}\n{}", self.wizard.progress(), self.wizard.view());
        self.renderer.render(&markdown)
    }

    fn apply(&self, input: StepInput) -> Result<()> {
        self.wizard.apply_input(input)?;
        Ok(())
    }

    /// Feed every step the inputs `program` implies, stopping on the last
    /// step without submitting.
    async fn fill(&self, program: &ProgramArgs) -> Result<()> {
        loop {
            match self.wizard.current_step().step {
                Step::NameAndType => {
                    self.apply(StepInput::SetName(program.name.clone()))?;
                    for tag in &program.types {
                        if !self.wizard.draft().types.contains(tag) {
                            self.apply(StepInput::ToggleType(tag.clone()))?;
                        }
                    }
                }
                Step::Frequency => self.apply(StepInput::SetWeeks(program.weeks.clone()))?,
                Step::Nutrition => self.apply(StepInput::SetNutrition(program.nutrition))?,
                Step::Phases => self.fill_phases(program)?,
                Step::Visibility => self.apply(StepInput::SetPublic(program.public))?,
            }

            if self.wizard.is_last_step() {
                return Ok(());
            }
            self.wizard.advance().await?;
        }
    }

    fn fill_phases(&self, program: &ProgramArgs) -> Result<()> {
        for (position, phase) in program.phases.iter().enumerate() {
            if position > 0 {
                self.apply(StepInput::AddPhase)?;
            }
            let draft = self.wizard.draft();
            let target = if position == 0 {
                draft.phases.first()
            } else {
                draft.phases.last()
            };
            let Some(id) = target.map(|p| p.id.clone()) else {
                bail!("program has no phase to edit");
            };

            self.apply(StepInput::RenamePhase {
                id: id.clone(),
                name: phase.name.clone(),
            })?;
            self.apply(StepInput::SetPhaseWeeks {
                id,
                start: phase.start.clone(),
                end: phase.end.clone(),
            })?;
        }
        Ok(())
    }
}
