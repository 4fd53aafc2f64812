//! Print a full sidereal chart.
//!
//! ```text
//! cargo run --example chart -- 1979-07-30 19:30 12.97 77.59 5.5
//! RUST_LOG=vedic_ephemeris=trace cargo run --example chart
//! ```

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use vedic_ephemeris::{compute_chart, Body};

const DEFAULT_FILTER: &str = "vedic_ephemeris=info";

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg = |i: usize, default: &'static str| args.get(i).map(String::as_str).unwrap_or(default);
    let number = |i: usize, default: &'static str| arg(i, default).parse::<f64>().unwrap_or(f64::NAN);

    let chart = match compute_chart(
        arg(0, "1979-07-30"),
        arg(1, "19:30"),
        number(2, "12.97"),
        number(3, "77.59"),
        number(4, "5.5"),
    ) {
        Ok(chart) => chart,
        Err(err) => {
            tracing::error!(%err, "cannot compute chart");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", chart.julian_day);
    println!("Ayanamsa (Lahiri): {:.4}°\n", chart.ayanamsa);
    println!(
        "{:<10} {:>9} {:<12} {:>7} {:<18} {:>4} {:>9} {:>5}",
        "Body", "Longitude", "Sign", "Degree", "Nakshatra", "Pada", "Speed", "House"
    );
    for (body, p) in chart.iter() {
        let retro = if body.can_retrograde() && p.is_retrograde() { " R" } else { "" };
        println!(
            "{:<10} {:>9.4} {:<12} {:>7.3} {:<18} {:>4} {:>9.4} {:>5}{retro}",
            body.name(),
            p.longitude(),
            p.sign().name(),
            p.degree_in_sign(),
            p.nakshatra().name(),
            p.pada(),
            p.speed(),
            chart.house_of(body),
        );
    }
    println!("\nLagna: {}", chart.get(Body::Ascendant).sign().sanskrit_name());
    ExitCode::SUCCESS
}
