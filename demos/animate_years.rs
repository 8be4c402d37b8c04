//! demos/animate_years.rs
//!
//! Plays the year animation for a few ticks and prints the tile template of
//! every year it lands on.
//!
//! To run this demo:
//! cargo run --example animate_years

use atmoscope::{build_true_color_tile_template, AnimationDriver, TICK_INTERVAL};
use std::time::Duration;

#[tokio::main]
async fn main() {
    env_logger::init();

    let mut animation = AnimationDriver::new();
    println!("{}", animation.status());
    animation.play();
    println!("{}", animation.status());

    // Tick faster than the dashboard does so the demo finishes quickly.
    let mut interval = tokio::time::interval(TICK_INTERVAL / 20);
    interval.tick().await;
    for _ in 0..12 {
        interval.tick().await;
        if let Some(year) = animation.tick() {
            println!("{} -> {}", year, build_true_color_tile_template(year));
        }
    }

    animation.pause();
    println!("{}", animation.status());
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(animation.tick(), None);
}
