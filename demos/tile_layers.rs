//! demos/tile_layers.rs
//!
//! Prints the map layer stack for every instrument combination of one year.
//!
//! To run this demo:
//! cargo run --example tile_layers

use atmoscope::{compose_layers, Instrument, ViewMode};
use chrono::Utc;

fn main() {
    let now = Utc::now();
    let combinations: [&[Instrument]; 4] = [
        &[],
        &[Instrument::Modis],
        &[Instrument::Mopitt],
        &[Instrument::Modis, Instrument::Mopitt],
    ];

    for instruments in combinations {
        for view_mode in [ViewMode::SatelliteOnly, ViewMode::WithBorders] {
            let layer_set = compose_layers(2022, instruments, view_mode, now);
            println!("{:?} / {:?}: {}", instruments, view_mode, layer_set.indicator);
            for layer in &layer_set.layers {
                println!("  [{:.1}] {} ({})", layer.opacity, layer.url, layer.attribution);
            }
        }
    }
}
