mod engine;

pub use engine::{AlarmScheduler, DEFAULT_SNOOZE_BUDGET, DEFAULT_SNOOZE_MINUTES};
