//! Diagnostic system for Mono.
//!
//! A [`Diagnostic`] pairs an [`ErrorCode`] with a message and the span it
//! refers to. Rendering follows one fixed shape:
//!
//! ```text
//! Illegal Character: Illegal character '$' at line 1, column 5
//!
//! x = $y
//!     ^
//! ```
//!
//! The excerpt is produced by [`snippet::render_excerpt`]; emitters in
//! [`emitter`] write rendered diagnostics to a terminal or any writer.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod snippet;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
