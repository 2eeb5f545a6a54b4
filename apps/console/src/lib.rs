//! Text console for the zoo registry.
//!
//! The binary parses [`Args`], loads the configuration, installs the logger
//! and hands a seeded registry to [`App`], which runs the numbered menu on a
//! [`Terminal`](zoo::kernel::terminal::Terminal).

mod app;
mod args;
mod error;
mod form;
pub mod logging;
mod menu;
mod render;

pub use crate::app::App;
pub use crate::args::{AdmissionArg, Args};
pub use crate::error::{ConsoleError, ConsoleErrorExt};
