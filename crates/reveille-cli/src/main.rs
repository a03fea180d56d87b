use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use reveille_core::{AlarmScheduler, Config};
use tracing_subscriber::EnvFilter;

mod menu;

/// Seconds between re-announcements while an alarm stays ringing.
const REANNOUNCE_PERIOD_SECS: u64 = 8;

#[derive(Parser)]
#[command(name = "reveille", version, about = "Reveille alarm clock")]
struct Cli {
    /// Path to an alternate config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so they do not interleave with the menu on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let scheduler = Arc::new(Mutex::new(AlarmScheduler::new(
        config.snooze.minutes,
        config.snooze.budget,
    )));

    // Announce each trigger as it happens.
    let mut ring_rx = menu::lock(&scheduler).subscribe();
    tokio::spawn(async move {
        while let Ok(note) = ring_rx.recv().await {
            println!("Alarm {} ringing! Time to wake up!", note.index);
        }
    });

    // Trigger scan, once per polling period.
    let tick_scheduler = Arc::clone(&scheduler);
    let period = config.tick.period_secs.max(1);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(period));
        loop {
            interval.tick().await;
            menu::lock(&tick_scheduler).tick();
        }
    });

    // Re-announce alarms that stay ringing.
    let announce_scheduler = Arc::clone(&scheduler);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(REANNOUNCE_PERIOD_SECS));
        loop {
            interval.tick().await;
            for index in menu::lock(&announce_scheduler).ringing_indices() {
                println!("Alarm {index} ringing! Time to wake up!");
            }
        }
    });

    // The menu blocks on stdin, so it runs on a blocking thread.
    let menu_scheduler = Arc::clone(&scheduler);
    match tokio::task::spawn_blocking(move || menu::run(&menu_scheduler)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
