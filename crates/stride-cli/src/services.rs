//! Program service and navigator implementations for the terminal.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use async_trait::async_trait;
use jiff::Timestamp;
use log::{debug, info};
use stride_core::{CreateProgramRequest, Navigator, Program, ProgramService, WizardError};
use tokio::task;

/// Default location of the outbox file.
pub fn default_data_file() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix("stride")
        .place_data_file("programs.json")
        .context("Failed to resolve the XDG data directory")
}

/// Submits programs to the program API over HTTP.
pub struct HttpProgramService {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl HttpProgramService {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ProgramService for HttpProgramService {
    async fn create_program(
        &self,
        request: CreateProgramRequest,
    ) -> stride_core::Result<Program> {
        let url = format!("{}/programs", self.base_url);
        debug!("POST {url}");

        let mut call = self.client.post(&url).json(&request);
        if let Some(token) = &self.token {
            call = call.bearer_auth(token);
        }

        let response = call
            .send()
            .await
            .map_err(|e| WizardError::submission(format!("failed to call {url}: {e}")))?;

        if !response.status().is_success() {
            return Err(WizardError::submission(format!(
                "{url} returned {}",
                response.status()
            )));
        }

        response
            .json::<Program>()
            .await
            .map_err(|e| WizardError::submission(format!("invalid program from {url}: {e}")))
    }
}

/// Appends created programs to a local JSON file.
///
/// Used when no API is configured, so the builder can be exercised offline.
pub struct OutboxProgramService {
    path: PathBuf,
}

impl OutboxProgramService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Programs written so far, oldest first.
    pub fn load(path: &Path) -> stride_core::Result<Vec<Program>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(|e| WizardError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn append(path: &Path, request: CreateProgramRequest) -> stride_core::Result<Program> {
        let mut programs = Self::load(path)?;
        let program = Program {
            id: (programs.len() + 1).to_string(),
            details: request,
            created_at: Some(Timestamp::now()),
        };
        programs.push(program.clone());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| WizardError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let content = serde_json::to_string_pretty(&programs)?;
        fs::write(path, content).map_err(|e| WizardError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(program)
    }
}

#[async_trait]
impl ProgramService for OutboxProgramService {
    async fn create_program(
        &self,
        request: CreateProgramRequest,
    ) -> stride_core::Result<Program> {
        let path = self.path.clone();

        task::spawn_blocking(move || Self::append(&path, request))
            .await
            .map_err(|e| WizardError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }
}

/// Remembers where the wizard asked to go; the terminal has no router.
#[derive(Default)]
pub struct TerminalNavigator {
    last: Mutex<Option<String>>,
}

impl TerminalNavigator {
    pub fn last_path(&self) -> Option<String> {
        self.last.lock().ok().and_then(|last| last.clone())
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, path: &str) {
        info!("Navigating to {path}");
        if let Ok(mut last) = self.last.lock() {
            *last = Some(path.to_string());
        }
    }
}
