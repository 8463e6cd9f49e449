// src/nmea/records.rs
//! Parsed sentence records

use serde::Serialize;

/// Position fix data extracted from a GGA sentence.
///
/// Non-coordinate fields are carried as the raw tokens from the wire;
/// receivers disagree on precision and padding, so formatting is left to
/// the consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixRecord {
    /// UTC time of fix as transmitted (`hhmmss.ss`)
    pub time_utc: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Fix quality indicator (0=invalid, 1=GPS, 2=DGPS, ...)
    pub fix_quality: String,
    /// Number of satellites used in the fix
    pub satellites: String,
    /// Horizontal dilution of precision
    pub hdop: String,
    /// Altitude above mean sea level in meters
    pub altitude_m: String,
}

/// Recommended-minimum navigation data extracted from an RMC sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationRecord {
    /// Receiver status: 'A' = active/valid, 'V' = void
    pub status: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Speed over ground in knots
    pub speed_knots: String,
    /// Course over ground in degrees true
    pub course_deg: String,
}

/// A successfully parsed NMEA sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParsedSentence {
    Fix(FixRecord),
    Navigation(NavigationRecord),
}

impl FixRecord {
    /// Whether both coordinates converted successfully.
    pub fn has_position(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// Human-readable name for the fix quality indicator.
    pub fn fix_description(&self) -> String {
        match self.fix_quality.as_str() {
            "0" => "No fix".to_string(),
            "1" => "GPS".to_string(),
            "2" => "DGPS".to_string(),
            "3" => "PPS".to_string(),
            "4" => "RTK".to_string(),
            "5" => "Float RTK".to_string(),
            "6" => "Estimated".to_string(),
            "7" => "Manual".to_string(),
            "8" => "Simulation".to_string(),
            other => format!("Unknown ({})", other),
        }
    }
}

impl NavigationRecord {
    /// Whether both coordinates converted successfully.
    pub fn has_position(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// Whether the receiver reports the fix as valid.
    pub fn is_active(&self) -> bool {
        self.status == "A"
    }
}

/// Format an optional coordinate for display.
pub fn format_coordinate(coord: Option<f64>) -> String {
    match coord {
        Some(val) => format!("{:>12.6}°", val),
        None => "No fix".to_string(),
    }
}

/// Format a raw token with a unit for display, or a placeholder when empty.
pub fn format_token(token: &str, unit: &str) -> String {
    if token.is_empty() {
        "Unknown".to_string()
    } else {
        format!("{:>12} {}", token, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_description() {
        let mut record = FixRecord {
            time_utc: "123519".to_string(),
            latitude: Some(48.1173),
            longitude: Some(11.5167),
            fix_quality: "1".to_string(),
            satellites: "08".to_string(),
            hdop: "0.9".to_string(),
            altitude_m: "545.4".to_string(),
        };
        assert_eq!(record.fix_description(), "GPS");

        record.fix_quality = "0".to_string();
        assert_eq!(record.fix_description(), "No fix");

        record.fix_quality = "9".to_string();
        assert_eq!(record.fix_description(), "Unknown (9)");
    }

    #[test]
    fn test_navigation_status() {
        let record = NavigationRecord {
            status: "A".to_string(),
            latitude: None,
            longitude: None,
            speed_knots: "022.4".to_string(),
            course_deg: "084.4".to_string(),
        };
        assert!(record.is_active());
        assert!(!record.has_position());
    }

    #[test]
    fn test_record_json_shape() {
        let record = ParsedSentence::Navigation(NavigationRecord {
            status: "A".to_string(),
            latitude: Some(-48.1173),
            longitude: Some(11.5167),
            speed_knots: "022.4".to_string(),
            course_deg: "084.4".to_string(),
        });

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"type\":\"navigation\""));
        assert!(json.contains("\"status\":\"A\""));
    }
}
