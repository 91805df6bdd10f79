//! Inbound adapters that translate external input into domain calls while
//! keeping framework details at the edge.
//!
//! - [`http`]: the REST surface served by `todo-backend`.
//! - [`cli`]: the line-oriented terminal front end of `todo-cli`.

pub mod cli;
pub mod http;
