use std::process::{Command, Stdio};

use crate::{CaptureCommand, LaunchError};

/// Identity of a spawned capture process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureProcess {
    pub pid: u32,
}

/// Starts capture processes.
pub trait CaptureSpawner {
    fn spawn(&self, command: &CaptureCommand) -> Result<CaptureProcess, LaunchError>;
}

/// Spawns the real process in the background.
///
/// stdin is closed; stdout and stderr are inherited, so whatever the capture program reports
/// lands in our terminal. The child handle is dropped right away: nobody waits on it and its
/// exit status is never collected.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl CaptureSpawner for SystemSpawner {
    fn spawn(&self, command: &CaptureCommand) -> Result<CaptureProcess, LaunchError> {
        let child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        Ok(CaptureProcess { pid: child.id() })
    }
}
