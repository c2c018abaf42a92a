pub mod app;
pub mod command;
pub mod command_executor;
pub mod constants;
pub mod context;
pub mod core_bridge;
pub mod error;

#[cfg(windows)]
mod run;

pub use crate::constants::WINDOW_CLASS_NAME;
pub use app::App;
pub use command::Command;
pub use command_executor::CommandExecutor;
pub use context::AppContext;
pub use error::{AppError, AppResult};
#[cfg(windows)]
pub use run::run;
