//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain and provides config
//! loading plus the [`terminal::Terminal`] capability used for interactive I/O.
//!
//! ## Config loading
//! ```rust,no_run
//! use zoo_kernel::config::load_config;
//! use zoo_kernel::domain::config::ZooConfig;
//!
//! let cfg: ZooConfig = load_config(Some("zoo.toml")).unwrap();
//! println!("admission mode: {:?}", cfg.admission.mode);
//! ```
//!
//! ## Terminal scripting
//! ```rust
//! use zoo_kernel::terminal::{BufferedTerminal, Terminal};
//!
//! let mut term = BufferedTerminal::new(&b"y\n"[..], Vec::new());
//! assert_eq!(term.prompt("Healthy? ").unwrap().as_deref(), Some("y"));
//! assert_eq!(term.output(), "Healthy? ");
//! ```
pub mod config;
pub mod terminal;

pub use zoo_domain as domain;
