use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{VizjoinError, VizjoinResult};

/// Easing functions used to map normalized transition progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out; the default for chart transitions.
    #[default]
    InOutCubic,
    /// Sinusoidal ease-in/out.
    InOutSin,
    /// Overshoots slightly past the end before settling.
    OutBack,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InOutSin => (1.0 - (std::f64::consts::PI * t).cos()) / 2.0,
            Self::OutBack => {
                const C1: f64 = 1.70158;
                const C3: f64 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
        }
    }

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "in_quad",
            Self::OutQuad => "out_quad",
            Self::InOutQuad => "in_out_quad",
            Self::InCubic => "in_cubic",
            Self::OutCubic => "out_cubic",
            Self::InOutCubic => "in_out_cubic",
            Self::InOutSin => "in_out_sin",
            Self::OutBack => "out_back",
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ease {
    type Err = VizjoinError;

    /// Accepts snake_case names plus the common `easeQuadInOut` / `quad_in_out` spellings.
    fn from_str(s: &str) -> VizjoinResult<Self> {
        let norm: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        let norm = norm.strip_prefix("ease").unwrap_or(&norm);
        let ease = match norm {
            "linear" => Self::Linear,
            "inquad" | "quadin" => Self::InQuad,
            "outquad" | "quadout" => Self::OutQuad,
            "inoutquad" | "quadinout" | "quad" => Self::InOutQuad,
            "incubic" | "cubicin" => Self::InCubic,
            "outcubic" | "cubicout" => Self::OutCubic,
            "inoutcubic" | "cubicinout" | "cubic" => Self::InOutCubic,
            "inoutsin" | "sininout" | "sin" => Self::InOutSin,
            "outback" | "backout" => Self::OutBack,
            _ => {
                return Err(VizjoinError::validation(format!(
                    "unknown easing '{}'",
                    s.trim()
                )));
            }
        };
        Ok(ease)
    }
}

impl<'de> serde::Deserialize<'de> for Ease {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Easing given either by name or as a caller function.
#[derive(Clone, Copy, Debug)]
pub enum Easing {
    /// Built-in curve.
    Named(Ease),
    /// Caller curve over `[0, 1]`; should return 0 at 0 and 1 at 1.
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Apply to normalized progress, clamping the input.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Named(e) => e.apply(t),
            Self::Custom(f) => f(t.clamp(0.0, 1.0)),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::Named(Ease::default())
    }
}

impl From<Ease> for Easing {
    fn from(value: Ease) -> Self {
        Self::Named(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
