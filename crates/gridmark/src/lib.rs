//! Gridmark terminal front end.
//!
//! Reads moves from a text stream, drives a [`gridmark_engine::GameEngine`]
//! and prints the board after every move.
//!
//! # Architecture
//!
//! - **Cli**: command-line flags
//! - **Settings**: optional TOML file with glyphs and the board size range
//! - **Input**: parsing of sizes, moves and commands
//! - **Session**: the prompt/apply/print loop over any `BufRead` + `Write`

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod banner;
mod cli;
mod input;
mod session;
mod settings;

pub use banner::{WELCOME, rules};
pub use cli::Cli;
pub use input::{Command, InputError, is_yes, parse_size};
pub use session::Session;
pub use settings::{Settings, SettingsError};
