//! CLI-specific utilities for bridge-triage
//!
//! Progress display and argument parsing helpers, kept out of the library.

pub mod progress;

pub use progress::ProgressManager;

/// Parse an inspector location given as `LAT,LON`
pub fn parse_location(value: &str) -> Result<bridge_triage::Location, String> {
    let (lat, lon) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON but got '{value}'"))?;

    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{lat}'"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{lon}'"))?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(format!("location '{value}' is out of range"));
    }

    Ok(bridge_triage::Location::new(lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location() {
        let loc = parse_location("43.10,-80.15").unwrap();
        assert_eq!(loc, bridge_triage::Location::new(43.10, -80.15));

        let loc = parse_location(" 45.0368 , -81.34 ").unwrap();
        assert_eq!(loc, bridge_triage::Location::new(45.0368, -81.34));
    }

    #[test]
    fn test_parse_location_errors() {
        assert!(parse_location("43.10").is_err());
        assert!(parse_location("north,-80.15").is_err());
        assert!(parse_location("95.0,10.0").is_err());
    }
}
