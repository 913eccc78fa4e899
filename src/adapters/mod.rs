//! Adapters implementing the port traits.
//!
//! `live` talks to the real environment; `fixed` returns predetermined
//! values for tests and reproducible sessions.

pub mod fixed;
pub mod live;
