use chrono::Utc;
use vedic_ephemeris::{compute_chart_for, BirthData, ModifiedJulianDate};

fn main() -> Result<(), vedic_ephemeris::ChartError> {
    // The sky right now, seen from Greenwich.
    let birth = BirthData::from_datetime(Utc::now().fixed_offset(), 51.4779, 0.0)?;
    let chart = compute_chart_for(&birth);
    let mjd: ModifiedJulianDate = chart.julian_day.into();

    println!("{}", chart.julian_day);
    println!("{mjd}");
    println!("Ayanamsa: {:.4}°", chart.ayanamsa);
    println!("Sun: {} {:.2}°", chart.sun.sign(), chart.sun.degree_in_sign());
    println!("Moon: {} ({})", chart.moon.sign(), chart.moon.nakshatra());
    println!("Ascendant: {}", chart.ascendant.sign());
    Ok(())
}
