// src/nmea/coords.rs
//! Sexagesimal coordinate conversion
//!
//! NMEA encodes latitude as `ddmm.mmmm` and longitude as `dddmm.mmmm`:
//! a fixed-width whole-degree prefix followed by decimal minutes. Hemisphere
//! is carried in a separate indicator field.

/// Width of the degree prefix in a latitude token.
const LAT_DEGREE_WIDTH: usize = 2;

/// Width of the degree prefix in a longitude token.
const LON_DEGREE_WIDTH: usize = 3;

/// Convert a raw latitude/longitude token pair plus hemisphere indicators
/// into signed decimal degrees.
///
/// Southern latitudes and western longitudes are negated; any other
/// indicator value is taken as positive without complaint, since some
/// receivers emit blanks while acquiring. Returns `None` if either token
/// is not parseable as the fixed-width numeric format; partial pairs are
/// never returned.
pub fn convert_lat_lon(lat: &str, ns: &str, lon: &str, ew: &str) -> Option<(f64, f64)> {
    let mut lat_dd = decimal_degrees(lat, LAT_DEGREE_WIDTH)?;
    let mut lon_dd = decimal_degrees(lon, LON_DEGREE_WIDTH)?;

    if ns == "S" {
        lat_dd = -lat_dd;
    }
    if ew == "W" {
        lon_dd = -lon_dd;
    }

    Some((lat_dd, lon_dd))
}

/// Split a token into its degree prefix and minutes suffix and combine them.
fn decimal_degrees(token: &str, degree_width: usize) -> Option<f64> {
    let degrees: f64 = token.get(..degree_width)?.parse().ok()?;
    let minutes: f64 = token.get(degree_width..)?.parse().ok()?;
    Some(degrees + minutes / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_northern_eastern() {
        let (lat, lon) = convert_lat_lon("4807.038", "N", "01131.000", "E").unwrap();
        assert!((lat - 48.1173).abs() < 1e-4);
        assert!((lon - 11.5167).abs() < 1e-4);
    }

    #[test]
    fn test_southern_western() {
        let (lat, lon) = convert_lat_lon("4807.038", "S", "01131.000", "W").unwrap();
        assert!((lat + 48.1173).abs() < 1e-4);
        assert!((lon + 11.5167).abs() < 1e-4);
    }

    #[test]
    fn test_reference_computation() {
        let (lat, lon) = convert_lat_lon("4807.038", "S", "01131.000", "E").unwrap();
        assert!((lat - -(48.0 + 7.038 / 60.0)).abs() < 1e-6);
        assert!((lon - (11.0 + 31.0 / 60.0)).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_indicator_is_positive() {
        // Blank or garbage hemisphere indicators fall through as positive
        let (lat, lon) = convert_lat_lon("4807.038", "", "01131.000", "X").unwrap();
        assert!(lat > 0.0);
        assert!(lon > 0.0);
    }

    #[test]
    fn test_non_numeric_token() {
        assert!(convert_lat_lon("abcd.ef", "N", "01131.000", "E").is_none());
        assert!(convert_lat_lon("4807.038", "N", "abcde.fg", "E").is_none());
    }

    #[test]
    fn test_short_token() {
        // Shorter than the degree prefix
        assert!(convert_lat_lon("4", "N", "01131.000", "E").is_none());
        // Exactly the prefix width leaves an empty minutes part
        assert!(convert_lat_lon("48", "N", "01131.000", "E").is_none());
    }

    #[test]
    fn test_empty_tokens() {
        assert!(convert_lat_lon("", "N", "", "E").is_none());
    }

    #[test]
    fn test_all_or_nothing() {
        // A bad longitude must not leak a good latitude
        assert!(convert_lat_lon("4807.038", "N", "bad", "E").is_none());
    }
}
