//! Embassy async tasks
//!
//! Each task runs independently; the only shared state is the asset
//! selection byte in [`crate::selection`].

pub mod button;
pub mod ticker;

pub use button::button_task;
pub use ticker::ticker_task;
