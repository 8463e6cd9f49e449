// src/nmea/parser.rs
//! NMEA sentence parsing

use super::coords::convert_lat_lon;
use super::records::{FixRecord, NavigationRecord, ParsedSentence};

/// Minimum comma-separated fields for a usable GGA sentence.
const GGA_MIN_FIELDS: usize = 15;

/// Minimum comma-separated fields for a usable RMC sentence.
const RMC_MIN_FIELDS: usize = 12;

/// Parse a single NMEA sentence line into a record.
///
/// Only GGA (fix data) and RMC (recommended minimum) sentences from the
/// `$GP` and `$GN` talkers are handled. Anything else (unknown sentence
/// types, truncated sentences, empty lines) yields `None`; bad input from
/// a noisy serial stream is dropped rather than reported. Pure function,
/// safe to call from anywhere.
pub fn parse(line: &str) -> Option<ParsedSentence> {
    if line.trim().is_empty() {
        return None;
    }

    if line.contains("$GPGGA") || line.contains("$GNGGA") {
        let fields: Vec<&str> = line.split(',').collect();
        parse_gga(&fields).map(ParsedSentence::Fix)
    } else if line.contains("$GPRMC") || line.contains("$GNRMC") {
        let fields: Vec<&str> = line.split(',').collect();
        parse_rmc(&fields).map(ParsedSentence::Navigation)
    } else {
        None
    }
}

/// Extract a FixRecord from tokenized GGA fields.
///
/// A coordinate that fails to convert leaves lat/lon as `None` without
/// discarding the rest of the record; quality and altitude data are still
/// worth displaying while the receiver acquires.
fn parse_gga(fields: &[&str]) -> Option<FixRecord> {
    if fields.len() < GGA_MIN_FIELDS {
        return None;
    }

    let (latitude, longitude) = match convert_lat_lon(fields[2], fields[3], fields[4], fields[5]) {
        Some((lat, lon)) => (Some(lat), Some(lon)),
        None => (None, None),
    };

    Some(FixRecord {
        time_utc: fields[1].to_string(),
        latitude,
        longitude,
        fix_quality: fields[6].to_string(),
        satellites: fields[7].to_string(),
        hdop: fields[8].to_string(),
        altitude_m: fields[9].to_string(),
    })
}

/// Extract a NavigationRecord from tokenized RMC fields.
fn parse_rmc(fields: &[&str]) -> Option<NavigationRecord> {
    if fields.len() < RMC_MIN_FIELDS {
        return None;
    }

    let (latitude, longitude) = match convert_lat_lon(fields[3], fields[4], fields[5], fields[6]) {
        Some((lat, lon)) => (Some(lat), Some(lon)),
        None => (None, None),
    };

    Some(NavigationRecord {
        status: fields[2].to_string(),
        latitude,
        longitude,
        speed_knots: fields[7].to_string(),
        course_deg: fields[8].to_string(),
    })
}
