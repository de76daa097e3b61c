//! Key-value persistence, keyed by integer id.
//!
//! Services depend on the [`UserStore`] and [`TaskStore`] contracts only; the
//! in-memory implementations here are constructed once in `main` and injected.
//! Nothing survives a restart.

pub mod tasks;
pub mod users;

pub use tasks::{InMemoryTaskStore, TaskStore};
pub use users::{InMemoryUserStore, UserStore};
