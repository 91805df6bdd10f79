//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns. Currently only request
//! correlation via [`trace::Trace`].

pub mod trace;

pub use trace::{TRACE_ID_HEADER, Trace, TraceId};
