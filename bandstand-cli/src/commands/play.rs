//! Simulated playback of the featured track.

use anyhow::Result;
use bandstand_core::player::{self, Playback};
use indicatif::{ProgressBar, ProgressStyle};

pub async fn run(seconds: u64) -> Result<()> {
    let mut playback = Playback::new();
    playback.toggle();

    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("▶ {bar:40} {percent}%")
            .unwrap(),
    );

    let ticks = seconds * 1000 / player::PROGRESS_TICK.as_millis() as u64;
    for _ in 0..ticks {
        tokio::time::sleep(player::PROGRESS_TICK).await;
        playback.tick();
        bar.set_position(playback.progress() as u64);
    }

    playback.toggle();
    bar.finish_and_clear();
    println!("⏸ Paused at {:.1}%", playback.progress());

    Ok(())
}
