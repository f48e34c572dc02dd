// File: crates/wealth-health/src/region.rs
// Summary: World regions and their fixed display colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Accepts `#rgb`, `#rrggbb` and `rgb(r, g, b)`.
impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if !hex.is_ascii() {
                return Err(format!("bad hex color '{s}'"));
            }
            let channel = |h: &str| u8::from_str_radix(h, 16).map_err(|_| format!("bad hex color '{s}'"));
            return match hex.len() {
                3 => {
                    let c: Vec<u8> = hex
                        .chars()
                        .map(|ch| channel(&ch.to_string()).map(|v| v * 17))
                        .collect::<Result<_, _>>()?;
                    Ok(Self::new(c[0], c[1], c[2]))
                }
                6 => Ok(Self::new(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
                _ => Err(format!("bad hex color '{s}'")),
            };
        }
        let inner = s
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| format!("unrecognized color '{s}'"))?;
        let parts = inner
            .split(',')
            .map(|p| p.trim().parse::<u8>().map_err(|_| format!("bad channel in '{s}'")))
            .collect::<Result<Vec<_>, _>>()?;
        match parts.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => Err(format!("expected three channels in '{s}'")),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self { c.to_string() }
}

pub const AMERICAS: Rgb = Rgb::new(127, 235, 0);
pub const EUROPE: Rgb = Rgb::new(255, 231, 0);
pub const AFRICA: Rgb = Rgb::new(0, 213, 233);
pub const ASIA: Rgb = Rgb::new(255, 88, 114);
/// Fill for regions outside the table.
pub const UNKNOWN: Rgb = Rgb::new(170, 170, 170);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Region {
    Americas,
    Europe,
    Africa,
    Asia,
    /// Anything else; the raw string is kept for diagnostics.
    Unknown(String),
}

impl Region {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "americas" => Region::Americas,
            "europe" => Region::Europe,
            "africa" => Region::Africa,
            "asia" => Region::Asia,
            _ => Region::Unknown(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Region::Americas => "americas",
            Region::Europe => "europe",
            Region::Africa => "africa",
            Region::Asia => "asia",
            Region::Unknown(raw) => raw,
        }
    }

    /// Table color, `None` for unknown regions.
    pub fn color(&self) -> Option<Rgb> {
        match self {
            Region::Americas => Some(AMERICAS),
            Region::Europe => Some(EUROPE),
            Region::Africa => Some(AFRICA),
            Region::Asia => Some(ASIA),
            Region::Unknown(_) => None,
        }
    }

    pub fn color_or(&self, fallback: Rgb) -> Rgb {
        self.color().unwrap_or(fallback)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Region::Unknown(_))
    }
}

impl From<String> for Region {
    fn from(s: String) -> Self { Region::parse(&s) }
}

impl From<Region> for String {
    fn from(r: Region) -> Self { r.as_str().to_string() }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
