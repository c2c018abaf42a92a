//! Capture process launching.
//!
//! Builds the capture command for a region and starts it in the background. Waiting for the
//! capture window is the host's job (see `bs_app::watcher`).

use std::io;

use bs_app::RectI32;
use thiserror::Error;

pub mod command;
pub mod spawner;

pub use command::{CaptureCommand, CaptureCommandBuilder};
pub use spawner::{CaptureProcess, CaptureSpawner, SystemSpawner};

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("region {width}x{height} has no area")]
    DegenerateRegion { width: i64, height: i64 },

    #[error("failed to start {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// A running capture: the process and the region it records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureSession {
    pub process: CaptureProcess,
    pub region: RectI32,
}

/// Launches capture processes with a fixed program and frame rate.
pub struct Launcher {
    program: String,
    fps: u32,
    spawner: Box<dyn CaptureSpawner>,
}

impl Launcher {
    pub fn new(program: impl Into<String>, fps: u32, spawner: Box<dyn CaptureSpawner>) -> Self {
        Self {
            program: program.into(),
            fps,
            spawner,
        }
    }

    /// Build the command for `region` without spawning anything.
    pub fn command_for(&self, region: RectI32) -> CaptureCommand {
        CaptureCommandBuilder::new(region)
            .with_program(self.program.clone())
            .with_fps(self.fps)
            .build()
    }

    /// Spawn a capture of `region`.
    ///
    /// Regions with no positive area are rejected before anything is spawned.
    pub fn launch(&self, region: RectI32) -> Result<CaptureSession, LaunchError> {
        if region.is_degenerate() {
            return Err(LaunchError::DegenerateRegion {
                width: region.width(),
                height: region.height(),
            });
        }

        let command = self.command_for(region);
        log::info!("launching capture: {}", command.command_line());

        let process = self.spawner.spawn(&command)?;
        log::debug!("capture process started (pid {})", process.pid);

        Ok(CaptureSession { process, region })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct RecordingSpawner {
        spawned: Rc<RefCell<Vec<CaptureCommand>>>,
        fail: bool,
    }

    impl CaptureSpawner for RecordingSpawner {
        fn spawn(&self, command: &CaptureCommand) -> Result<CaptureProcess, LaunchError> {
            if self.fail {
                return Err(LaunchError::Spawn {
                    program: command.program.clone(),
                    source: io::Error::new(io::ErrorKind::NotFound, "not found"),
                });
            }
            self.spawned.borrow_mut().push(command.clone());
            Ok(CaptureProcess { pid: 4242 })
        }
    }

    fn launcher(fail: bool) -> (Launcher, Rc<RefCell<Vec<CaptureCommand>>>) {
        let spawned = Rc::new(RefCell::new(Vec::new()));
        let spawner = RecordingSpawner {
            spawned: Rc::clone(&spawned),
            fail,
        };
        (Launcher::new("vlc", 30, Box::new(spawner)), spawned)
    }

    #[test]
    fn launch_spawns_command_for_region() {
        let (launcher, spawned) = launcher(false);
        let region = RectI32::new(0, 0, 1920, 1080);

        let session = launcher.launch(region).unwrap();

        assert_eq!(session.region, region);
        assert_eq!(session.process.pid, 4242);
        assert_eq!(spawned.borrow().as_slice(), &[launcher.command_for(region)]);
    }

    #[test]
    fn degenerate_region_is_rejected_before_spawning() {
        let (launcher, spawned) = launcher(false);

        for region in [RectI32::new(5, 5, 5, 5), RectI32::new(10, 0, 0, 10)] {
            assert!(matches!(
                launcher.launch(region),
                Err(LaunchError::DegenerateRegion { .. })
            ));
        }
        assert!(spawned.borrow().is_empty());
    }

    #[test]
    fn spawn_failure_is_reported() {
        let (launcher, _) = launcher(true);
        let err = launcher.launch(RectI32::new(0, 0, 10, 10)).unwrap_err();
        assert!(matches!(err, LaunchError::Spawn { ref program, .. } if program == "vlc"));
    }

    #[test]
    fn extreme_preset_geometry_is_passed_through() {
        let (launcher, spawned) = launcher(false);
        let region = RectI32::new(-10, 0, i32::MAX, 10);

        let command = launcher.command_for(region);
        assert!(command.args.iter().any(|a| a == "--screen-width=2147483657"));
        assert!(command.args.iter().any(|a| a == "--screen-left=-10"));

        launcher.launch(region).unwrap();
        assert_eq!(spawned.borrow().len(), 1);
    }

    #[test]
    fn spawn_error_names_the_cause_once() {
        let err = LaunchError::Spawn {
            program: "vlc".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "failed to start vlc");
        assert_eq!(
            std::error::Error::source(&err).map(ToString::to_string),
            Some("no such file".to_string())
        );
    }

    #[test]
    fn system_spawner_reports_missing_binary() {
        let cmd = CaptureCommandBuilder::new(RectI32::new(0, 0, 10, 10))
            .with_program("definitely-not-a-real-capture-binary-7f3a")
            .build();
        assert!(matches!(
            SystemSpawner.spawn(&cmd),
            Err(LaunchError::Spawn { .. })
        ));
    }
}
