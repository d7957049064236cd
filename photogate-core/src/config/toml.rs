//! Simple TOML parser for speedometer configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! Photogate configuration. It does NOT support the full TOML syntax and
//! does not allocate.
//!
//! Supported features:
//! - [section] headers
//! - Key = value pairs with unsigned integer values (`_` separators allowed)
//! - Comments (# ...), whole-line or trailing
//!
//! Unknown sections and keys are errors so a typo never silently falls
//! back to a default.

use super::types::SpeedometerConfig;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection { line: usize },
    /// Line is neither a header nor `key = value`
    InvalidLine { line: usize },
    /// Key not known in its section
    UnknownKey { line: usize },
    /// Value is not a positive integer
    InvalidValue { line: usize },
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Sensors,
    Timeouts,
}

/// Parse TOML configuration into SpeedometerConfig
///
/// Keys that are not present keep their default value.
pub fn parse_config(input: &str) -> Result<SpeedometerConfig, ParseError> {
    let mut config = SpeedometerConfig::default();
    let mut section = Section::Root;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_comment(raw).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        // Check for section header
        if line.starts_with('[') {
            if !line.ends_with(']') {
                return Err(ParseError::InvalidSection { line: line_no });
            }
            section = parse_section_header(&line[1..line.len() - 1])
                .ok_or(ParseError::InvalidSection { line: line_no })?;
            continue;
        }

        let (key, value) =
            parse_key_value(line).ok_or(ParseError::InvalidLine { line: line_no })?;
        let slot =
            field(&mut config, section, key).ok_or(ParseError::UnknownKey { line: line_no })?;
        *slot = parse_positive(value).ok_or(ParseError::InvalidValue { line: line_no })?;
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Option<Section> {
    match header.trim() {
        "sensors" => Some(Section::Sensors),
        "timeouts" => Some(Section::Timeouts),
        _ => None,
    }
}

fn field<'c>(config: &'c mut SpeedometerConfig, section: Section, key: &str) -> Option<&'c mut u32> {
    match (section, key) {
        (Section::Sensors, "spacing_mm") => Some(&mut config.spacing_mm),
        (Section::Timeouts, "sensor_ms") => Some(&mut config.sensor_timeout_ms),
        (Section::Timeouts, "reset_ms") => Some(&mut config.sensor_reset_ms),
        (Section::Timeouts, "display_ms") => Some(&mut config.display_timeout_ms),
        (Section::Timeouts, "unit_change_ms") => Some(&mut config.unit_change_ms),
        (Section::Timeouts, "debounce_ms") => Some(&mut config.debounce_ms),
        _ => None,
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a non-zero integer, allowing `_` digit separators
fn parse_positive(value: &str) -> Option<u32> {
    if value.starts_with('_') || value.ends_with('_') {
        return None;
    }

    let mut result: u32 = 0;
    let mut digits = 0;
    for c in value.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(10)?;
        result = result.checked_mul(10)?.checked_add(digit)?;
        digits += 1;
    }

    if digits == 0 || result == 0 {
        return None;
    }
    Some(result)
}
