//! Telegram integration
//!
//! ```text
//! telegram/
//! ├── mod.rs         # public API
//! ├── commands.rs    # command parsing + reply handlers
//! ├── formatters.rs  # USD / percentage formatters
//! └── polling.rs     # getUpdates long-polling loop
//! ```

pub mod commands;
pub mod formatters;
pub mod polling;

pub use commands::Command;
pub use polling::start_polling;
