pub mod events;
pub mod host;
pub mod traits;

pub use events::*;
pub use host::*;
pub use traits::*;
