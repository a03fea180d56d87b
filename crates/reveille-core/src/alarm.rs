//! Alarm record and weekday matching.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// A single wake-up entry.
///
/// The time is a wall-clock time of day, re-evaluated daily. `days` holds
/// the weekday numbers (0 = Sunday .. 6 = Saturday) on which the alarm is
/// eligible to fire. Well-formedness of `days` is the caller's
/// responsibility; the core does not re-validate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alarm {
    pub time: NaiveTime,
    pub days: Vec<u8>,
    /// Eligible for trigger checks. Cleared when the alarm fires.
    pub active: bool,
    /// Currently ringing, awaiting snooze or dismiss.
    pub ringing: bool,
    /// Remaining snooze budget.
    pub snoozes_left: u32,
}

impl Alarm {
    pub(crate) fn new(time: NaiveTime, days: Vec<u8>, snooze_budget: u32) -> Self {
        Self {
            time,
            days,
            active: true,
            ringing: false,
            snoozes_left: snooze_budget,
        }
    }

    /// Whether the alarm recurs on the given weekday.
    pub fn is_scheduled_on(&self, weekday: Weekday) -> bool {
        self.days.contains(&(weekday.num_days_from_sunday() as u8))
    }

    /// Exact-second trigger match against a local timestamp.
    ///
    /// Only armed alarms match. A second that goes unchecked (e.g. the
    /// host was suspended) is never fired retroactively.
    pub fn matches(&self, now: NaiveDateTime) -> bool {
        self.active
            && self.is_scheduled_on(now.weekday())
            && self.time.hour() == now.hour()
            && self.time.minute() == now.minute()
            && self.time.second() == now.second()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    // 2024-01-01 was a Monday.
    fn monday(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn scheduled_days_use_sunday_zero_numbering() {
        let alarm = Alarm::new(at(7, 0, 0), vec![0, 6], 3);
        assert!(alarm.is_scheduled_on(Weekday::Sun));
        assert!(alarm.is_scheduled_on(Weekday::Sat));
        assert!(!alarm.is_scheduled_on(Weekday::Mon));
    }

    #[test]
    fn matches_requires_exact_second() {
        let alarm = Alarm::new(at(7, 0, 0), vec![1], 3);
        assert!(alarm.matches(monday(7, 0, 0)));
        assert!(!alarm.matches(monday(7, 0, 1)));
        assert!(!alarm.matches(monday(7, 1, 0)));
        assert!(!alarm.matches(monday(6, 59, 59)));
    }

    #[test]
    fn matches_requires_scheduled_weekday() {
        // Tuesday-only alarm checked on a Monday.
        let alarm = Alarm::new(at(7, 0, 0), vec![2], 3);
        assert!(!alarm.matches(monday(7, 0, 0)));
    }

    #[test]
    fn inactive_alarm_never_matches() {
        let mut alarm = Alarm::new(at(7, 0, 0), vec![1], 3);
        alarm.active = false;
        assert!(!alarm.matches(monday(7, 0, 0)));
    }

    #[test]
    fn empty_day_set_never_matches() {
        let alarm = Alarm::new(at(7, 0, 0), vec![], 3);
        assert!(!alarm.matches(monday(7, 0, 0)));
    }
}
