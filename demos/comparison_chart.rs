//! demos/comparison_chart.rs
//!
//! Fetches every year of one region and plots the comparison series.
//!
//! To run this demo:
//! cargo run --example comparison_chart --features examples

use std::error::Error;

use atmoscope::{Atmoscope, FIRST_YEAR, LAST_YEAR};
use plotlars::{Axis, Legend, Line, Plot, Rgb, Shape, Text, TimeSeriesPlot};
use polars::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let region = "Delhi India";

    let atmoscope = Atmoscope::from_env()?;
    for year in FIRST_YEAR..=LAST_YEAR {
        let record = atmoscope
            .fetch_observation()
            .region(region)
            .year(year)
            .include_carbon_monoxide(true)
            .call()
            .await;
        if let Some(message) = record.error_message() {
            eprintln!("{}", message);
        }
    }

    let chart = atmoscope.comparison_chart(region).await;
    if chart.is_empty() {
        println!("{}", chart.hint.unwrap_or_default());
        return Ok(());
    }

    let data = chart.to_frame()?;
    println!("{}", data);
    plot_comparison(&chart.title, &data);
    Ok(())
}

/// Temperature and precipitation, plus carbon monoxide when the frame has that column.
fn plot_comparison(title: &str, data: &DataFrame) {
    let mut series = vec!["precipitation"];
    let mut y_title = String::from("Temperature (°C) / Precipitation (mm)");
    if data.column("carbon_monoxide").is_ok() {
        series.push("carbon_monoxide");
        y_title.push_str(" / CO (µg/m³)");
    }

    TimeSeriesPlot::builder()
        .data(data)
        .x("year")
        .y("temperature")
        .additional_series(series)
        .size(8)
        .colors(vec![Rgb(231, 76, 60), Rgb(52, 152, 219), Rgb(230, 126, 34)])
        .lines(vec![Line::Solid, Line::Dash, Line::Dot])
        .with_shape(true)
        .shapes(vec![Shape::Circle, Shape::Square, Shape::Diamond])
        .plot_title(Text::from(title).font("Arial").size(18))
        .legend(&Legend::new().x(0.05).y(0.9))
        .x_title("Year")
        .y_title(Text::from(y_title.as_str()))
        .y_axis(&Axis::new().show_grid(false))
        .build()
        .plot();
}
