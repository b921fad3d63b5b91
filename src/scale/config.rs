use crate::{
    animation::attr::AttrValue,
    data::key::Key,
    foundation::core::Rgba8,
    foundation::error::{VizjoinError, VizjoinResult},
    scale::{
        band::BandScale, interpolate::Interpolator, linear::LinearScale, ordinal::OrdinalScale,
        quantize::QuantizeScale, sequential::SequentialScale,
    },
};

fn centered() -> f64 {
    0.5
}

/// Explicit scale configuration: kind, domain values and range specification.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum ScaleConfig {
    /// Discrete keys to slots.
    Band {
        /// Ordered keys.
        domain: Vec<Key>,
        /// `[r0, r1]` interval.
        range: [f64; 2],
        /// Sets both inner and outer padding when present.
        #[serde(default)]
        padding: Option<f64>,
        /// Inner padding fraction.
        #[serde(default)]
        padding_inner: f64,
        /// Outer padding fraction.
        #[serde(default)]
        padding_outer: f64,
        /// Outer space distribution in `[0, 1]`.
        #[serde(default = "centered")]
        align: f64,
    },
    /// Numeric interval to numeric interval.
    Linear {
        /// `[lo, hi]`.
        domain: [f64; 2],
        /// `[a, b]`.
        range: [f64; 2],
        /// Clamp outputs to the range.
        #[serde(default)]
        clamp: bool,
    },
    /// Numeric interval to a color ramp.
    Sequential {
        /// `[lo, hi]`, or `[hi, lo]` for an inverted ramp.
        domain: [f64; 2],
        /// Ramp.
        interpolator: Interpolator,
    },
    /// Categories to palette entries, positionally.
    Ordinal {
        /// Ordered categories.
        domain: Vec<Key>,
        /// Palette.
        palette: Vec<Rgba8>,
    },
    /// Numeric interval to discrete numeric steps.
    Quantize {
        /// `[lo, hi]`.
        domain: [f64; 2],
        /// Outputs, one per segment.
        range: Vec<f64>,
    },
}

/// Scale built from a [`ScaleConfig`].
#[derive(Clone, Debug, PartialEq)]
pub enum Scale {
    /// See [`BandScale`].
    Band(BandScale<Key>),
    /// See [`LinearScale`].
    Linear(LinearScale),
    /// See [`SequentialScale`].
    Sequential(SequentialScale),
    /// See [`OrdinalScale`].
    Ordinal(OrdinalScale<Key, Rgba8>),
    /// See [`QuantizeScale`].
    Quantize(QuantizeScale<f64>),
}

/// Build a scale from configuration.
pub fn make_scale(config: &ScaleConfig) -> VizjoinResult<Scale> {
    match config {
        ScaleConfig::Band {
            domain,
            range,
            padding,
            padding_inner,
            padding_outer,
            align,
        } => {
            let (inner, outer) = match padding {
                Some(p) => (*p, *p),
                None => (*padding_inner, *padding_outer),
            };
            let band = BandScale::new(domain.iter().cloned(), *range)?
                .with_padding_inner(inner)?
                .with_padding_outer(outer)?
                .with_align(*align)?;
            Ok(Scale::Band(band))
        }
        ScaleConfig::Linear {
            domain,
            range,
            clamp,
        } => Ok(Scale::Linear(
            LinearScale::new(*domain, *range)?.with_clamp(*clamp),
        )),
        ScaleConfig::Sequential {
            domain,
            interpolator,
        } => Ok(Scale::Sequential(SequentialScale::new(
            *domain,
            interpolator.clone(),
        )?)),
        ScaleConfig::Ordinal { domain, palette } => Ok(Scale::Ordinal(OrdinalScale::new(
            domain.iter().cloned(),
            palette.clone(),
        )?)),
        ScaleConfig::Quantize { domain, range } => {
            if range.iter().any(|v| !v.is_finite()) {
                return Err(VizjoinError::validation(
                    "quantize outputs must be finite numbers",
                ));
            }
            Ok(Scale::Quantize(QuantizeScale::new(*domain, range.clone())?))
        }
    }
}

impl Scale {
    /// Kind name as used in configuration.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Band(_) => "band",
            Self::Linear(_) => "linear",
            Self::Sequential(_) => "sequential",
            Self::Ordinal(_) => "ordinal",
            Self::Quantize(_) => "quantize",
        }
    }

    /// Map a discrete key (band slot start or ordinal color).
    pub fn map_key(&self, key: &Key) -> VizjoinResult<AttrValue> {
        match self {
            Self::Band(s) => s.position(key).map(AttrValue::Number),
            Self::Ordinal(s) => s.get(key).map(|c| AttrValue::Color(*c)),
            Self::Linear(_) | Self::Sequential(_) | Self::Quantize(_) => match key {
                Key::Int(v) => self.map_number(*v as f64),
                Key::Str(_) => Err(VizjoinError::validation(format!(
                    "{} scale expects numeric input, got {key:?}",
                    self.kind()
                ))),
            },
        }
    }

    /// Map a continuous value (linear position, sequential color or quantized step).
    pub fn map_number(&self, x: f64) -> VizjoinResult<AttrValue> {
        match self {
            Self::Linear(s) => Ok(AttrValue::Number(s.apply(x))),
            Self::Sequential(s) => Ok(AttrValue::Color(s.apply(x))),
            Self::Quantize(s) => s
                .apply(x)
                .map(|v| AttrValue::Number(*v))
                .ok_or_else(|| VizjoinError::validation("quantize input must not be NaN")),
            Self::Band(_) | Self::Ordinal(_) => Err(VizjoinError::validation(format!(
                "{} scale expects a key, not a number",
                self.kind()
            ))),
        }
    }

    /// Slot width for band scales.
    pub fn bandwidth(&self) -> Option<f64> {
        match self {
            Self::Band(s) => Some(s.bandwidth()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/config.rs"]
mod tests;
