//! demos/fetch_beijing.rs
//!
//! Fetches one observation for Beijing from the Meteomatics API and prints it.
//! Credentials are read from `METEOMATICS_USERNAME` / `METEOMATICS_PASSWORD`
//! (a `.env` file works too).
//!
//! To run this demo:
//! RUST_LOG=info cargo run --example fetch_beijing

use atmoscope::{format_reading, Atmoscope, AtmoscopeError, Config};

#[tokio::main]
async fn main() -> Result<(), AtmoscopeError> {
    env_logger::init();

    let config = Config::from_env()?;
    let atmoscope = Atmoscope::from_config(&config)?;

    for year in [2016, 2020, 2024] {
        let record = atmoscope
            .fetch_observation()
            .region("Beijing China")
            .year(year)
            .include_carbon_monoxide(true)
            .call()
            .await;

        if let Some(message) = record.error_message() {
            eprintln!("{}", message);
            continue;
        }

        println!("{} {} ({})", record.region, record.year, record.coordinates);
        println!("  Temperature:   {}", format_reading(record.temperature, "°C"));
        println!("  Precipitation: {}", format_reading(record.precipitation, "mm"));
        println!("  Wind speed:    {}", format_reading(record.wind_speed, "m/s"));
        println!("  CO:            {}", format_reading(record.carbon_monoxide, "µg/m³"));
    }

    println!(
        "Years stored for Beijing China: {:?}",
        atmoscope.all_years("Beijing China").await
    );
    Ok(())
}
