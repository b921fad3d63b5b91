use crate::{
    animation::attr::{Attr, AttrMap},
    animation::transition::{Step, TransitionConfig},
    foundation::core::{Rgba8, Vec2},
    foundation::error::{VizjoinError, VizjoinResult},
    pointer::coordinator::DEFAULT_TOOLTIP_OFFSET,
    pointer::throttle::DEFAULT_THROTTLE_MS,
};

/// Space reserved around the plot area.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Margin {
    /// Top.
    pub top: f64,
    /// Right.
    pub right: f64,
    /// Bottom.
    pub bottom: f64,
    /// Left.
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 5.0,
            bottom: 20.0,
            left: 35.0,
        }
    }
}

/// Stroke applied to the hovered element and restored on leave.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightStyle {
    /// Stroke while hovered.
    pub stroke: Rgba8,
    /// Stroke otherwise.
    pub idle_stroke: Rgba8,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            stroke: Rgba8::BLACK,
            idle_stroke: Rgba8::transparent(),
        }
    }
}

/// Stroke pulse played on every updated element: jump to `from`, ease back to `to`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlashStyle {
    /// Stroke color written at update time.
    pub from_stroke: Rgba8,
    /// Stroke width written at update time.
    pub from_width: f64,
    /// Stroke color settled on.
    pub to_stroke: Rgba8,
    /// Stroke width settled on.
    pub to_width: f64,
    /// Timing of the settle.
    pub transition: TransitionConfig,
}

impl Default for FlashStyle {
    fn default() -> Self {
        Self {
            from_stroke: Rgba8::WHITE,
            from_width: 4.0,
            to_stroke: Rgba8::BLACK,
            to_width: 2.0,
            transition: TransitionConfig::millis(1000.0),
        }
    }
}

impl FlashStyle {
    /// The pulse as a scheduler step.
    pub fn step(&self) -> Step {
        Step::from_to(
            AttrMap::new()
                .with(Attr::Stroke, self.from_stroke)
                .with(Attr::StrokeWidth, self.from_width),
            AttrMap::new()
                .with(Attr::Stroke, self.to_stroke)
                .with(Attr::StrokeWidth, self.to_width),
            self.transition,
        )
    }
}

/// Per-chart configuration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Total width.
    pub width: f64,
    /// Total height.
    pub height: f64,
    /// Plot margins.
    pub margin: Margin,
    /// Enter/update/exit timing.
    pub transition: TransitionConfig,
    /// Pointer-move throttle window.
    pub throttle_ms: f64,
    /// Tooltip offset from the pointer.
    pub tooltip_offset: [f64; 2],
    /// Hover stroke.
    pub highlight: HighlightStyle,
    /// Optional stroke pulse on UPDATE.
    pub update_flash: Option<FlashStyle>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            margin: Margin::default(),
            transition: TransitionConfig::millis(1000.0),
            throttle_ms: DEFAULT_THROTTLE_MS,
            tooltip_offset: [DEFAULT_TOOLTIP_OFFSET.x, DEFAULT_TOOLTIP_OFFSET.y],
            highlight: HighlightStyle::default(),
            update_flash: None,
        }
    }
}

impl ChartConfig {
    /// Parse and validate.
    pub fn from_json_str(s: &str) -> VizjoinResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty JSON.
    pub fn to_json_string(&self) -> VizjoinResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plot width inside the margins.
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Plot height inside the margins.
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// Tooltip offset as a vector.
    pub fn tooltip_offset(&self) -> Vec2 {
        Vec2::new(self.tooltip_offset[0], self.tooltip_offset[1])
    }

    /// Check sizes, margins and timings.
    pub fn validate(&self) -> VizjoinResult<()> {
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            return Err(VizjoinError::validation("chart width/height must be > 0"));
        }
        let m = self.margin;
        if [m.top, m.right, m.bottom, m.left]
            .iter()
            .any(|v| !(v.is_finite() && *v >= 0.0))
        {
            return Err(VizjoinError::validation("chart margins must be >= 0"));
        }
        if self.inner_width() <= 0.0 || self.inner_height() <= 0.0 {
            return Err(VizjoinError::validation(
                "chart margins leave no room for the plot",
            ));
        }
        self.transition.validate()?;
        if !(self.throttle_ms.is_finite() && self.throttle_ms >= 0.0) {
            return Err(VizjoinError::validation("throttle_ms must be >= 0"));
        }
        if !self.tooltip_offset.iter().all(|v| v.is_finite()) {
            return Err(VizjoinError::validation("tooltip_offset must be finite"));
        }
        if let Some(flash) = &self.update_flash {
            flash.transition.validate()?;
            if !(flash.from_width.is_finite() && flash.to_width.is_finite())
                || flash.from_width < 0.0
                || flash.to_width < 0.0
            {
                return Err(VizjoinError::validation(
                    "update_flash widths must be >= 0",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/config.rs"]
mod tests;
