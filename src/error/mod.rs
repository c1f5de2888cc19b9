//! Error handling for gopherdoc
//!
//! This module provides the error type shared by the loader, analyser,
//! walker and output layers, together with context and recovery helpers.

pub mod context;
pub mod types;

pub use context::{OptionExt, ResultExt, handle_error, try_with_recovery};
pub use types::{DocError, ErrorSeverity, Result};
