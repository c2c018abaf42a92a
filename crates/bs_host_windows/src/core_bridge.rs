use bs_app::{selection, watcher};

use crate::Command;
use crate::constants::TIMER_WATCH_POLL_ID;

pub fn command_from_selection_effect(effect: selection::Effect) -> Command {
    match effect {
        selection::Effect::CreateMarker { .. }
        | selection::Effect::UpdateMarker { .. }
        | selection::Effect::RemoveMarker { .. } => Command::RequestRedraw,
        selection::Effect::Confirm { selection } => Command::Launch(selection),
    }
}

pub fn command_from_watcher_effect(effect: watcher::Effect) -> Command {
    match effect {
        watcher::Effect::StartPolling { interval_ms } => {
            Command::StartTimer(TIMER_WATCH_POLL_ID, interval_ms)
        }
        watcher::Effect::StopPolling => Command::StopTimer(TIMER_WATCH_POLL_ID),
        watcher::Effect::LowerWindow { window } => Command::LowerWindow(window),
        watcher::Effect::Finished(outcome) => Command::Finish(outcome),
    }
}

pub fn dispatch_selection(core: &mut selection::Model, action: selection::Action) -> Vec<Command> {
    core.reduce(action)
        .into_iter()
        .map(command_from_selection_effect)
        .collect()
}

pub fn dispatch_watcher(core: &mut watcher::Model, action: watcher::Action) -> Vec<Command> {
    core.reduce(action)
        .into_iter()
        .map(command_from_watcher_effect)
        .collect()
}
