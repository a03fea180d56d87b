//! Alarm scheduler engine.
//!
//! The scheduler is a wall-clock-based state machine. It does not use
//! internal threads - the caller is responsible for calling `tick()` once
//! per polling period (one second).
//!
//! ## State Transitions
//!
//! ```text
//! Armed -> Ringing -> (Armed via snooze | Dismissed)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut scheduler = AlarmScheduler::default();
//! let index = scheduler.register(time, days);
//! // In a loop, once per second:
//! scheduler.tick(); // Returns trigger events for the current second
//! ```

use chrono::{Duration, Local, NaiveDateTime, NaiveTime, Timelike, Utc};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::alarm::Alarm;
use crate::error::{Result, SchedulerError};
use crate::events::{Event, RingNotification};

/// Minutes added to the current time when an alarm is snoozed.
pub const DEFAULT_SNOOZE_MINUTES: u32 = 5;
/// Snoozes granted to each alarm at registration.
pub const DEFAULT_SNOOZE_BUDGET: u32 = 3;

/// Capacity of the ring-notification channel. A lagging subscriber loses
/// the oldest notifications rather than blocking the tick.
const RING_CHANNEL_CAPACITY: usize = 16;

/// Core alarm scheduler.
///
/// Owns the ordered alarm collection and the ring-notification channel.
/// Alarms are addressed by their current position; removing index `i`
/// shifts every later alarm down by one.
#[derive(Debug)]
pub struct AlarmScheduler {
    alarms: Vec<Alarm>,
    snooze_minutes: u32,
    snooze_budget: u32,
    ring_tx: broadcast::Sender<RingNotification>,
}

impl AlarmScheduler {
    pub fn new(snooze_minutes: u32, snooze_budget: u32) -> Self {
        let (ring_tx, _) = broadcast::channel(RING_CHANNEL_CAPACITY);
        Self {
            alarms: Vec::new(),
            snooze_minutes,
            snooze_budget,
            ring_tx,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Ordered snapshot of the current alarms, for display.
    pub fn alarms(&self) -> &[Alarm] {
        &self.alarms
    }

    pub fn len(&self) -> usize {
        self.alarms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alarms.is_empty()
    }

    pub fn is_any_ringing(&self) -> bool {
        self.alarms.iter().any(|a| a.ringing)
    }

    /// Indices of the alarms currently ringing, in collection order.
    ///
    /// Derived from the records on every call; there is no separate
    /// ringing store to fall out of sync.
    pub fn ringing_indices(&self) -> Vec<usize> {
        self.alarms
            .iter()
            .enumerate()
            .filter(|(_, a)| a.ringing)
            .map(|(i, _)| i)
            .collect()
    }

    /// Subscribe to ring notifications.
    ///
    /// Each subscriber receives every subsequent trigger event. With no
    /// subscribers, trigger events are dropped.
    pub fn subscribe(&self) -> broadcast::Receiver<RingNotification> {
        self.ring_tx.subscribe()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Register a new alarm. Always succeeds; returns the new index.
    ///
    /// `days` holds weekday numbers (0 = Sunday .. 6 = Saturday); values
    /// are assumed well-formed by this layer.
    pub fn register(&mut self, time: NaiveTime, days: Vec<u8>) -> usize {
        debug!(%time, ?days, "alarm registered");
        self.alarms
            .push(Alarm::new(time, days, self.snooze_budget));
        self.alarms.len() - 1
    }

    /// Remove the alarm at `index`, shifting later indices down by one.
    /// Returns the removed record.
    pub fn remove(&mut self, index: usize) -> Result<Alarm> {
        self.check_index(index)?;
        debug!(index, "alarm removed");
        Ok(self.alarms.remove(index))
    }

    /// Re-arm the alarm at `index` for the current time plus the snooze
    /// offset, consuming one snooze from its budget.
    pub fn snooze(&mut self, index: usize) -> Result<Event> {
        self.snooze_at(index, Local::now().naive_local())
    }

    /// Clock-explicit variant of [`snooze`](Self::snooze).
    pub fn snooze_at(&mut self, index: usize, now: NaiveDateTime) -> Result<Event> {
        self.check_index(index)?;
        let alarm = &mut self.alarms[index];
        if alarm.snoozes_left == 0 {
            warn!(index, "snooze refused: no snoozes left");
            return Err(SchedulerError::SnoozeExhausted { index });
        }
        let new_time = (now + Duration::minutes(i64::from(self.snooze_minutes))).time();
        // One-second resolution; drop any sub-second residue from the clock.
        let new_time = new_time.with_nanosecond(0).unwrap_or(new_time);
        alarm.time = new_time;
        alarm.active = true;
        alarm.ringing = false;
        alarm.snoozes_left -= 1;
        debug!(index, %new_time, snoozes_left = alarm.snoozes_left, "alarm snoozed");
        Ok(Event::AlarmSnoozed {
            index,
            new_time,
            snoozes_left: alarm.snoozes_left,
            at: Utc::now(),
        })
    }

    /// Stop the alarm at `index` ringing. The alarm stays inactive; it
    /// does not re-arm itself.
    pub fn dismiss(&mut self, index: usize) -> Result<Event> {
        self.check_index(index)?;
        let alarm = &mut self.alarms[index];
        if !alarm.ringing {
            warn!(index, "dismiss refused: alarm not ringing");
            return Err(SchedulerError::NotRinging { index });
        }
        alarm.ringing = false;
        debug!(index, "alarm dismissed");
        Ok(Event::AlarmDismissed {
            index,
            at: Utc::now(),
        })
    }

    /// Call once per polling period. Compares the local wall clock
    /// against every armed alarm and returns the trigger events for this
    /// second.
    pub fn tick(&mut self) -> Vec<Event> {
        self.check_at(Local::now().naive_local())
    }

    /// Clock-explicit variant of [`tick`](Self::tick).
    ///
    /// An alarm fires at most once per calendar second: firing clears
    /// `active`, so a detector running faster than once per second cannot
    /// double-fire the same alarm.
    pub fn check_at(&mut self, now: NaiveDateTime) -> Vec<Event> {
        let mut events = Vec::new();
        for (index, alarm) in self.alarms.iter_mut().enumerate() {
            if !alarm.matches(now) {
                continue;
            }
            alarm.active = false;
            alarm.ringing = true;
            info!(index, time = %alarm.time, "alarm ringing");
            // Fire and forget: with no subscribers the notification is dropped.
            let _ = self.ring_tx.send(RingNotification {
                index,
                time: alarm.time,
                days: alarm.days.clone(),
                at: Utc::now(),
            });
            events.push(Event::AlarmTriggered {
                index,
                time: alarm.time,
                days: alarm.days.clone(),
                at: Utc::now(),
            });
        }
        events
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.alarms.len() {
            return Err(SchedulerError::InvalidIndex {
                index,
                len: self.alarms.len(),
            });
        }
        Ok(())
    }
}

impl Default for AlarmScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_SNOOZE_MINUTES, DEFAULT_SNOOZE_BUDGET)
    }
}
