use atmoscope::{
    build_carbon_monoxide_tile_template_at, build_true_color_tile_template, compose_layers,
    ComparisonChart, Instrument, LatLon, ObservationRecord, RawReadings, ViewMode, YearlyRecords,
};
use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn history() -> YearlyRecords {
    (2016..=2024)
        .map(|year| {
            let readings = RawReadings {
                temperature: Some(20.0 + f64::from(year - 2016)),
                precipitation_rate: Some(0.2),
                wind_speed: Some(3.0),
                carbon_monoxide: Some(120.0),
            };
            let record = ObservationRecord::from_readings(
                "Beijing China",
                LatLon(39.9042, 116.4074),
                year,
                readings,
                true,
            );
            (year, record)
        })
        .collect()
}

fn bench_dashboard(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    let history = history();

    c.bench_function("true_color_template", |b| {
        b.iter(|| build_true_color_tile_template(black_box(2020)))
    });
    c.bench_function("carbon_monoxide_template_current_year", |b| {
        b.iter(|| build_carbon_monoxide_tile_template_at(black_box(2024), now))
    });
    c.bench_function("compose_layers", |b| {
        b.iter(|| {
            compose_layers(
                black_box(2021),
                &[Instrument::Modis, Instrument::Mopitt],
                ViewMode::WithBorders,
                now,
            )
        })
    });
    c.bench_function("comparison_chart", |b| {
        b.iter(|| ComparisonChart::from_history(black_box("Beijing China"), Some(&history)))
    });
}

criterion_group!(benches, bench_dashboard);
criterion_main!(benches);
