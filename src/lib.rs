//! mctetris (workspace facade crate).
//!
//! Re-exports the member crates as `mctetris::{core,input,term,types}` and
//! hosts the application shell used by the binary.

pub use mctetris_core as core;
pub use mctetris_input as input;
pub use mctetris_term as term;
pub use mctetris_types as types;

pub mod app;
pub mod config;

pub use app::{App, MenuItem, Screen};
pub use config::AppConfig;
