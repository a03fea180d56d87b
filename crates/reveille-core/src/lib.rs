//! # Reveille Core Library
//!
//! This library provides the core engine for the Reveille alarm clock:
//! alarm records with weekday recurrence, trigger detection against the
//! wall clock, and the snooze/ring lifecycle. The interactive CLI binary
//! is a thin presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Alarm Scheduler**: A wall-clock-based state machine that requires
//!   the caller to periodically invoke `tick()` (once per second)
//! - **Events**: Every ring/snooze/dismiss transition produces an [`Event`]
//! - **Notifications**: Trigger events fan out to subscribers over a
//!   broadcast channel; with no subscribers they are simply dropped
//! - **Storage**: TOML-based configuration for snooze and polling defaults
//!
//! ## Key Components
//!
//! - [`AlarmScheduler`]: Alarm registry, trigger detector, and ring/snooze
//!   state machine
//! - [`Alarm`]: A single wake-up entry
//! - [`Config`]: Application configuration management

pub mod alarm;
pub mod error;
pub mod events;
pub mod scheduler;
pub mod storage;

pub use alarm::Alarm;
pub use error::{Result, SchedulerError};
pub use events::{Event, RingNotification};
pub use scheduler::{AlarmScheduler, DEFAULT_SNOOZE_BUDGET, DEFAULT_SNOOZE_MINUTES};
pub use storage::{Config, SnoozeConfig, TickConfig};
