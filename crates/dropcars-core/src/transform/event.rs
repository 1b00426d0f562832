use std::fmt;
use std::str::FromStr;

use crate::error::{DropCarsError, Result};

/// One signal from the pinch or pan recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    PinchBegin,
    /// Scale multiplier relative to the start of the pinch.
    PinchUpdate { multiplier: f32 },
    PinchEnd,
    PanBegin,
    /// Translation relative to the start of the pan.
    PanUpdate { dx: f32, dy: f32 },
    PanEnd,
}

impl fmt::Display for GestureEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PinchBegin => write!(f, "pinch-begin"),
            Self::PinchUpdate { multiplier } => write!(f, "pinch:{multiplier}"),
            Self::PinchEnd => write!(f, "pinch-end"),
            Self::PanBegin => write!(f, "pan-begin"),
            Self::PanUpdate { dx, dy } => write!(f, "pan:{dx},{dy}"),
            Self::PanEnd => write!(f, "pan-end"),
        }
    }
}

impl FromStr for GestureEvent {
    type Err = DropCarsError;

    /// Parses the token form produced by `Display`, e.g. `pinch:2`, `pan:30,-4`.
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        match token {
            "pinch-begin" => return Ok(Self::PinchBegin),
            "pinch-end" => return Ok(Self::PinchEnd),
            "pan-begin" => return Ok(Self::PanBegin),
            "pan-end" => return Ok(Self::PanEnd),
            _ => {}
        }

        let (kind, args) = token
            .split_once(':')
            .ok_or_else(|| invalid(token, "unknown gesture"))?;
        match kind {
            "pinch" => Ok(Self::PinchUpdate {
                multiplier: parse_number(token, args)?,
            }),
            "pan" => {
                let (dx, dy) = args
                    .split_once(',')
                    .ok_or_else(|| invalid(token, "expected pan:<dx>,<dy>"))?;
                Ok(Self::PanUpdate {
                    dx: parse_number(token, dx)?,
                    dy: parse_number(token, dy)?,
                })
            }
            _ => Err(invalid(token, "unknown gesture")),
        }
    }
}

fn parse_number(token: &str, raw: &str) -> Result<f32> {
    raw.trim()
        .parse::<f32>()
        .map_err(|_| invalid(token, "not a number"))
}

fn invalid(token: &str, reason: &str) -> DropCarsError {
    DropCarsError::InvalidInput(format!("'{token}': {reason}"))
}

/// Parse a whitespace-separated gesture script. `#` starts a line comment.
pub fn parse_script(script: &str) -> Result<Vec<GestureEvent>> {
    script
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(str::split_whitespace)
        .map(str::parse)
        .collect()
}
