//! Interactive menu loop.
//!
//! Thin presentation layer over the scheduler core: renders either the
//! ringing prompt or the main menu, parses keystrokes, and translates
//! them into scheduler calls. All state lives in the core; this module
//! only reads lines and prints.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{Local, NaiveTime};
use reveille_core::{AlarmScheduler, Event};

type Shared = Arc<Mutex<AlarmScheduler>>;

/// Lock the shared scheduler, recovering from a poisoned lock.
pub fn lock(scheduler: &Shared) -> MutexGuard<'_, AlarmScheduler> {
    scheduler.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Run the menu until the user exits or stdin closes.
pub fn run(scheduler: &Shared) -> io::Result<()> {
    loop {
        render_menu(scheduler)?;
        let Some(choice) = read_line()? else {
            return Ok(());
        };

        let ringing = lock(scheduler).ringing_indices();
        if !ringing.is_empty() {
            match choice.as_str() {
                "1" => ring_action(scheduler, &ringing, Action::Snooze)?,
                "2" => ring_action(scheduler, &ringing, Action::Stop)?,
                _ => println!("Invalid option. Please try again."),
            }
        } else {
            match choice.as_str() {
                "1" => println!("Current Time: {}", Local::now().format("%a %Y-%m-%d %H:%M:%S")),
                "2" => set_alarm(scheduler)?,
                "3" => delete_alarm(scheduler)?,
                "4" => display_alarms(scheduler),
                "5" => return Ok(()),
                _ => println!("Invalid option. Please try again."),
            }
        }
    }
}

enum Action {
    Snooze,
    Stop,
}

fn render_menu(scheduler: &Shared) -> io::Result<()> {
    let guard = lock(scheduler);
    println!();
    if guard.is_any_ringing() {
        println!("Alarms ringing!");
        for index in guard.ringing_indices() {
            println!("Alarm {index} is ringing!");
        }
        println!("  1. Snooze Alarm");
        println!("  2. Stop Ringing Alarm");
    } else {
        println!("  1. Display Current Time");
        println!("  2. Set Alarm");
        println!("  3. Delete Alarm");
        println!("  4. Display Alarms");
        println!("  5. Exit");
    }
    drop(guard);
    print!("Choose an option: ");
    io::stdout().flush()
}

/// Read one trimmed line from stdin; `None` means stdin closed.
fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt(text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    read_line()
}

fn ring_action(scheduler: &Shared, ringing: &[usize], action: Action) -> io::Result<()> {
    let index = if ringing.len() == 1 {
        ringing[0]
    } else {
        let label = ringing
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let Some(input) = prompt(&format!("Enter alarm index to snooze or stop ({label}): "))?
        else {
            return Ok(());
        };
        match input.parse() {
            Ok(index) => index,
            Err(_) => {
                println!("Invalid alarm index.");
                return Ok(());
            }
        }
    };

    let result = match action {
        Action::Snooze => lock(scheduler).snooze(index),
        Action::Stop => lock(scheduler).dismiss(index),
    };
    match result {
        Ok(Event::AlarmSnoozed {
            new_time,
            snoozes_left,
            ..
        }) => println!("Alarm {index} snoozed to {new_time}. Snoozes left: {snoozes_left}"),
        Ok(Event::AlarmDismissed { .. }) => println!("Alarm {index} stopped."),
        Ok(_) => {}
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn set_alarm(scheduler: &Shared) -> io::Result<()> {
    let Some(input) = prompt("Enter alarm time (HH:MM:SS): ")? else {
        return Ok(());
    };
    let Ok(time) = NaiveTime::parse_from_str(&input, "%H:%M:%S") else {
        println!("Invalid time. Expected HH:MM:SS.");
        return Ok(());
    };

    let Some(input) = prompt("Enter days (comma-separated, 0 for Sunday, 6 for Saturday): ")?
    else {
        return Ok(());
    };
    let days: Result<Vec<u8>, _> = input.split(',').map(|part| part.trim().parse()).collect();
    let days = match days {
        Ok(days) if days.iter().all(|d| *d <= 6) => days,
        _ => {
            println!("Invalid days. Expected comma-separated numbers 0-6.");
            return Ok(());
        }
    };

    let label = days_label(&days);
    let index = lock(scheduler).register(time, days);
    println!("Alarm {index} set for {time} on {label}");
    Ok(())
}

fn delete_alarm(scheduler: &Shared) -> io::Result<()> {
    let Some(input) = prompt("Enter alarm index to delete: ")? else {
        return Ok(());
    };
    let Ok(index) = input.parse::<usize>() else {
        println!("Invalid alarm index.");
        return Ok(());
    };
    match lock(scheduler).remove(index) {
        Ok(_) => println!("Alarm {index} deleted."),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn display_alarms(scheduler: &Shared) {
    let guard = lock(scheduler);
    let alarms = guard.alarms();
    if alarms.is_empty() {
        println!("No alarms set.");
        return;
    }
    for (index, alarm) in alarms.iter().enumerate() {
        println!(
            "{index}: Alarm set for {} on {} - {} - Snoozes left: {}",
            alarm.time.format("%H:%M:%S"),
            days_label(&alarm.days),
            if alarm.active { "Active" } else { "Inactive" },
            alarm.snoozes_left,
        );
    }
}

fn days_label(days: &[u8]) -> String {
    days.iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_label_joins_with_commas() {
        assert_eq!(days_label(&[1, 2, 3]), "1, 2, 3");
        assert_eq!(days_label(&[]), "");
    }
}
