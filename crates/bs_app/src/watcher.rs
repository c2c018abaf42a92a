use bs_platform::{TopLevelWindow, WindowId};

/// Poll interval used when the host has no settings override.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 100;

/// How a watch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A matching window appeared and was lowered.
    Demoted,
    /// No matching window appeared within the attempt budget.
    TimedOut,
    /// The capture process could not be started.
    SpawnFailed,
}

/// Watcher lifecycle phase.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Process spawn requested but not confirmed yet.
    #[default]
    Launching,
    WaitingForWindow {
        attempts: u32,
    },
    Demoted {
        windows: Vec<WindowId>,
    },
    Failed {
        outcome: Outcome,
        attempts: u32,
    },
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Demoted { .. } | Phase::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The capture process was started.
    Spawned,
    /// The capture process could not be started.
    SpawnFailed,
    /// One poll tick with a freshly enumerated top-level window list.
    Poll { windows: Vec<TopLevelWindow> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    StartPolling { interval_ms: u32 },
    StopPolling,
    LowerWindow { window: WindowId },
    Finished(Outcome),
}

/// Waits for the capture window and demotes it.
///
/// Driven by a single UI-thread interval timer: each tick the host re-enumerates windows and
/// feeds them in through [`Action::Poll`].
#[derive(Debug)]
pub struct Model {
    phase: Phase,
    /// Lowercased title substring identifying the capture window.
    marker: String,
    interval_ms: u32,
    /// 0 = wait forever.
    max_attempts: u32,
}

impl Model {
    pub fn new(marker: &str, interval_ms: u32, max_attempts: u32) -> Self {
        Self {
            phase: Phase::Launching,
            marker: marker.to_lowercase(),
            interval_ms,
            max_attempts,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Case-insensitive substring match against the capture process name.
    pub fn matches(&self, title: &str) -> bool {
        !self.marker.is_empty() && title.to_lowercase().contains(&self.marker)
    }

    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        if self.phase.is_terminal() {
            return Vec::new();
        }

        match action {
            Action::Spawned => {
                if self.phase != Phase::Launching {
                    return Vec::new();
                }
                self.phase = Phase::WaitingForWindow { attempts: 0 };
                vec![Effect::StartPolling {
                    interval_ms: self.interval_ms,
                }]
            }

            Action::SpawnFailed => {
                let attempts = match self.phase {
                    Phase::WaitingForWindow { attempts } => attempts,
                    _ => 0,
                };
                let was_polling = matches!(self.phase, Phase::WaitingForWindow { .. });
                self.phase = Phase::Failed {
                    outcome: Outcome::SpawnFailed,
                    attempts,
                };

                let mut effects = Vec::new();
                if was_polling {
                    effects.push(Effect::StopPolling);
                }
                effects.push(Effect::Finished(Outcome::SpawnFailed));
                effects
            }

            Action::Poll { windows } => {
                let Phase::WaitingForWindow { attempts } = self.phase else {
                    return Vec::new();
                };

                let matched: Vec<WindowId> = windows
                    .iter()
                    .filter(|w| self.matches(&w.title))
                    .map(|w| w.id)
                    .collect();

                if !matched.is_empty() {
                    let mut effects = vec![Effect::StopPolling];
                    effects.extend(
                        matched
                            .iter()
                            .map(|&window| Effect::LowerWindow { window }),
                    );
                    effects.push(Effect::Finished(Outcome::Demoted));
                    self.phase = Phase::Demoted { windows: matched };
                    return effects;
                }

                let attempts = attempts.saturating_add(1);
                if self.max_attempts > 0 && attempts >= self.max_attempts {
                    self.phase = Phase::Failed {
                        outcome: Outcome::TimedOut,
                        attempts,
                    };
                    return vec![Effect::StopPolling, Effect::Finished(Outcome::TimedOut)];
                }

                self.phase = Phase::WaitingForWindow { attempts };
                Vec::new()
            }
        }
    }
}
