//! A session-persistent countdown timer widget for the browser.
//!
//! The countdown itself ([`timer`], [`controller`]) is plain Rust with no
//! browser dependency at runtime, so it tests on the host. The Yew layer
//! ([`hooks`], [`components`]) owns the one-second `Interval`, the toast
//! timeout and `sessionStorage`.

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod hooks;
pub mod notification;
pub mod snapshot;
pub mod storage;
pub mod ticker;
pub mod timer;
pub mod utils;

pub use components::CountdownTimer;
pub use controller::{TimerController, Transition};
pub use error::StorageError;
pub use snapshot::{SnapshotError, TimerSnapshot};
pub use storage::{BrowserSessionStorage, MemoryStore, SessionStore};
pub use timer::{Countdown, Phase, TickOutcome};
