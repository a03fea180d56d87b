use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Every ring/snooze/dismiss transition in the scheduler produces an Event.
/// The CLI renders them; ring subscribers receive [`RingNotification`]s.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    AlarmTriggered {
        index: usize,
        time: NaiveTime,
        days: Vec<u8>,
        at: DateTime<Utc>,
    },
    AlarmSnoozed {
        index: usize,
        new_time: NaiveTime,
        snoozes_left: u32,
        at: DateTime<Utc>,
    },
    AlarmDismissed {
        index: usize,
        at: DateTime<Utc>,
    },
}

/// Payload delivered to ring subscribers at the moment of trigger.
///
/// Fire-and-forget: if nobody is subscribed when an alarm fires, the
/// notification is dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingNotification {
    pub index: usize,
    pub time: NaiveTime,
    pub days: Vec<u8>,
    pub at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_tag() {
        let event = Event::AlarmTriggered {
            index: 0,
            time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            days: vec![1, 2, 3, 4, 5],
            at: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"AlarmTriggered""#));
        assert!(json.contains(r#""time":"07:00:00""#));
    }

    #[test]
    fn snoozed_event_roundtrip() {
        let event = Event::AlarmSnoozed {
            index: 2,
            new_time: NaiveTime::from_hms_opt(7, 5, 0).unwrap(),
            snoozes_left: 1,
            at: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let parsed: Event = serde_json::from_str(&json).unwrap();
        match parsed {
            Event::AlarmSnoozed {
                index, snoozes_left, ..
            } => {
                assert_eq!(index, 2);
                assert_eq!(snoozes_left, 1);
            }
            _ => panic!("Expected AlarmSnoozed"),
        }
    }
}
