//! Detail-text extraction
//!
//! Blocks report live status through free-form, host-generated "detail"
//! text. The kind views never scrape that text themselves; both grammars
//! live here, compiled once. A miss is soft: extraction yields `None` and
//! never an error.
//!
//! Grammars, first match wins:
//! - piston position: one-or-more digits, a literal dot, one-or-more
//!   digits, immediately followed by `m` (`"Current position: 3.5m"` -> 3.5)
//! - motor angle: optional leading minus, one-or-more digits, immediately
//!   followed by the degree sign (`"Current angle: -42°"` -> -42.0)

use std::sync::OnceLock;

use regex::Regex;

fn piston_position_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+\.\d+)m").expect("piston position pattern is valid"))
}

fn motor_angle_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(-?\d+)°").expect("motor angle pattern is valid"))
}

/// Extract a piston's current position in meters from detail text
pub fn piston_position(text: &str) -> Option<f32> {
    extract(piston_position_pattern(), text)
}

/// Extract a motor's current angle in degrees from detail text
pub fn motor_angle(text: &str) -> Option<f32> {
    extract(motor_angle_pattern(), text)
}

fn extract(pattern: &Regex, text: &str) -> Option<f32> {
    pattern
        .captures(text)?
        .get(1)
        .and_then(|m| m.as_str().parse().ok())
}
