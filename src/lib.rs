// Library surface shared by the `soundtrack` and `setup-commands` binaries
// and by the headless integration tests.
pub mod app;
pub mod catalog;
pub mod command;
pub mod config;
pub mod error;
pub mod icon;
pub mod logging;
pub mod notifier;
pub mod render;
pub mod session;
pub mod setup;

pub use error::{Result, SoundtrackError};
