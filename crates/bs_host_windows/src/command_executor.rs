use std::collections::VecDeque;

use bs_platform::WindowId;

use crate::Command;
use crate::app::App;
use crate::constants::APP_TITLE;

/// Command queue.
///
/// Commands run in FIFO order; commands produced while executing one are appended to the back,
/// so nothing recurses.
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn push_batch(&mut self, commands: impl IntoIterator<Item = Command>) {
        for cmd in commands {
            self.push(cmd);
        }
    }

    /// Run queued commands until the queue drains.
    pub fn process_all<E: CommandExecutor + ?Sized>(&mut self, executor: &mut E, window: WindowId) {
        const MAX_ITERATIONS: usize = 1000;
        let mut iteration = 0;

        while let Some(command) = self.pending.pop_front() {
            let new_commands = executor.execute_command(command, window);
            self.push_batch(new_commands);

            iteration += 1;
            if iteration >= MAX_ITERATIONS {
                log::warn!(
                    "command queue exceeded {MAX_ITERATIONS} iterations, dropping {} pending",
                    self.pending.len()
                );
                break;
            }
        }
    }
}

pub trait CommandExecutor {
    /// Execute one command and return any follow-up commands.
    fn execute_command(&mut self, command: Command, window: WindowId) -> Vec<Command>;

    /// Execute `commands` and everything they produce, breadth-first.
    fn execute_command_chain(&mut self, commands: Vec<Command>, window: WindowId) {
        let mut queue = CommandQueue::new();
        queue.push_batch(commands);
        queue.process_all(self, window);
    }
}

impl CommandExecutor for App {
    fn execute_command(&mut self, command: Command, window: WindowId) -> Vec<Command> {
        match command {
            Command::Selection(action) => self.dispatch_selection(action),
            Command::Watcher(action) => self.dispatch_watcher(action),
            Command::ShowOverlay => match self.show_overlay(window) {
                Ok(()) => vec![Command::RequestRedraw],
                Err(e) => vec![
                    Command::ShowError(format!("Could not show the selection overlay: {e}")),
                    Command::Quit,
                ],
            },
            Command::HideOverlay => {
                self.hide_overlay(window);
                vec![]
            }
            Command::RequestRedraw => {
                let _ = self.host_platform().request_redraw(window);
                vec![]
            }
            Command::CaptureMouse => {
                self.host_platform().capture_mouse(window);
                vec![]
            }
            Command::ReleaseMouse => {
                self.host_platform().release_mouse();
                vec![]
            }
            Command::Launch(region) => self.launch(window, region),
            Command::PollWindows => self.poll_windows(),
            Command::LowerWindow(target) => {
                self.lower_window(target);
                vec![]
            }
            Command::Finish(outcome) => self.finish(outcome),
            Command::Cancel => {
                log::info!("selection cancelled");
                vec![
                    Command::Selection(bs_app::selection::Action::ResetToIdle),
                    Command::HideOverlay,
                    Command::Quit,
                ]
            }
            Command::Quit => {
                if let Err(e) = self.host_platform().request_close(window) {
                    log::error!("failed to close the overlay window: {e}");
                }
                vec![]
            }
            Command::StartTimer(timer_id, interval_ms) => {
                if let Err(e) = self
                    .host_platform()
                    .start_timer(window, timer_id, interval_ms)
                {
                    log::warn!("failed to start timer {timer_id}: {e}");
                }
                vec![]
            }
            Command::StopTimer(timer_id) => {
                let _ = self.host_platform().stop_timer(window, timer_id);
                vec![]
            }
            Command::ShowError(msg) => {
                log::error!("{msg}");
                self.host_platform()
                    .show_error_message(window, APP_TITLE, &msg);
                vec![]
            }
        }
    }
}
