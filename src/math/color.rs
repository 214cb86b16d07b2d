use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical 8-bit RGB value. Only `parse_color` constructs one, so
/// channels are validated once at the boundary and downstream math never
/// needs to clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Malformed color input. Carried as a value inside unevaluable records
/// rather than propagated, so one bad element never aborts a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "input", rename_all = "camelCase")]
pub enum ParseError {
    #[error("unrecognized color format: `{0}`")]
    UnrecognizedFormat(String),
    #[error("color channel `{0}` outside 0-255")]
    ChannelOutOfRange(String),
    #[error("invalid hex color: `{0}`")]
    InvalidHex(String),
}

/// Parse a computed-style color string into a canonical RGB value.
///
/// Accepted forms, matching what the extraction script hands over:
/// - `rgb(r, g, b)` / `rgba(r, g, b, a)` with integer channels 0-255.
///   The alpha component must parse but is ignored; contrast is computed
///   on opaque channels.
/// - 3- or 6-digit hex, `#` optional, case-insensitive.
pub fn parse_color(value: &str) -> Result<Rgb, ParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ParseError::UnrecognizedFormat(value.to_string()));
    }
    let lowered = trimmed.to_ascii_lowercase();
    if lowered.starts_with("rgb(") || lowered.starts_with("rgba(") {
        parse_rgb_functional(trimmed)
    } else if trimmed.starts_with('#') || trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
        parse_hex(trimmed)
    } else {
        Err(ParseError::UnrecognizedFormat(trimmed.to_string()))
    }
}

fn parse_rgb_functional(value: &str) -> Result<Rgb, ParseError> {
    let unrecognized = || ParseError::UnrecognizedFormat(value.to_string());

    let open = value.find('(').ok_or_else(unrecognized)?;
    let inner = value[open + 1..]
        .trim_end()
        .strip_suffix(')')
        .ok_or_else(unrecognized)?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(unrecognized());
    }
    if let Some(alpha) = parts.get(3) {
        // rgba alpha: must be a number, contributes nothing to the ratio.
        alpha.parse::<f64>().map_err(|_| unrecognized())?;
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts[..3]) {
        let raw: i64 = part.parse().map_err(|_| unrecognized())?;
        if !(0..=255).contains(&raw) {
            return Err(ParseError::ChannelOutOfRange(part.to_string()));
        }
        *slot = raw as u8;
    }
    Ok(Rgb {
        r: channels[0],
        g: channels[1],
        b: channels[2],
    })
}

fn parse_hex(value: &str) -> Result<Rgb, ParseError> {
    let invalid = || ParseError::InvalidHex(value.to_string());

    let raw = value.strip_prefix('#').unwrap_or(value);
    if !raw.is_ascii() {
        return Err(invalid());
    }
    match raw.len() {
        // 3-digit shorthand: each digit doubles (f -> ff)
        3 => {
            let mut digits = raw.chars().map(|c| c.to_digit(16));
            let mut next = || {
                digits
                    .next()
                    .flatten()
                    .map(|d| (d * 17) as u8)
                    .ok_or_else(invalid)
            };
            Ok(Rgb {
                r: next()?,
                g: next()?,
                b: next()?,
            })
        }
        6 => {
            let channel =
                |lo: usize| u8::from_str_radix(&raw[lo..lo + 2], 16).map_err(|_| invalid());
            Ok(Rgb {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
            })
        }
        _ => Err(invalid()),
    }
}
