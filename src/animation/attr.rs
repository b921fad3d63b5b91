use std::collections::BTreeMap;
use std::fmt;

use crate::foundation::{
    core::{Point, Rgba8},
    error::{VizjoinError, VizjoinResult},
};

/// Interpolation contract for attribute value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

/// Value kind an attribute accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttrKind {
    /// Scalar (position, size, opacity, angle ...).
    Number,
    /// RGBA color.
    Color,
    /// 2D point.
    Point,
}

/// Named visual attribute of a bound element.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attr {
    /// Horizontal position.
    X,
    /// Vertical position.
    Y,
    /// Width.
    Width,
    /// Height.
    Height,
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Fill color.
    Fill,
    /// Stroke color.
    Stroke,
    /// Stroke width.
    StrokeWidth,
    /// Circle radius.
    Radius,
    /// Rotation in degrees.
    Rotate,
    /// Uniform scale factor.
    Scale,
    /// Translation of a glyph group.
    Translate,
    /// Arc inner radius.
    InnerRadius,
    /// Arc outer radius.
    OuterRadius,
    /// Arc start angle in radians.
    StartAngle,
    /// Arc end angle in radians.
    EndAngle,
    /// Caller-defined scalar attribute.
    Custom(String),
}

impl Attr {
    /// Declared value kind.
    pub fn kind(&self) -> AttrKind {
        match self {
            Self::Fill | Self::Stroke => AttrKind::Color,
            Self::Translate => AttrKind::Point,
            _ => AttrKind::Number,
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(name) => write!(f, "custom:{name}"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Current or target value of one attribute.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Scalar.
    Number(f64),
    /// Color.
    Color(Rgba8),
    /// Point.
    Point(Point),
}

impl AttrValue {
    /// Kind of this value.
    pub fn kind(&self) -> AttrKind {
        match self {
            Self::Number(_) => AttrKind::Number,
            Self::Color(_) => AttrKind::Color,
            Self::Point(_) => AttrKind::Point,
        }
    }

    /// Scalar payload, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Color payload, if any.
    pub fn as_color(&self) -> Option<Rgba8> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Point payload, if any.
    pub fn as_point(&self) -> Option<Point> {
        match self {
            Self::Point(p) => Some(*p),
            _ => None,
        }
    }

    /// Check that `self` can be stored in (and interpolated on) `attr`.
    pub fn check_for(&self, attr: &Attr) -> VizjoinResult<()> {
        if self.kind() != attr.kind() {
            return Err(VizjoinError::invalid_attribute(format!(
                "{attr} expects {:?}, got {:?}",
                attr.kind(),
                self.kind()
            )));
        }
        let finite = match self {
            Self::Number(v) => v.is_finite(),
            Self::Point(p) => p.x.is_finite() && p.y.is_finite(),
            Self::Color(_) => true,
        };
        if !finite {
            return Err(VizjoinError::invalid_attribute(format!(
                "{attr} value must be finite, got {self:?}"
            )));
        }
        Ok(())
    }

    /// Interpolate toward `to`. Both values must have the same kind.
    pub fn interpolate(&self, to: &Self, t: f64) -> VizjoinResult<Self> {
        match (self, to) {
            (Self::Number(a), Self::Number(b)) => Ok(Self::Number(Lerp::lerp(a, b, t))),
            (Self::Color(a), Self::Color(b)) => Ok(Self::Color(Lerp::lerp(a, b, t))),
            (Self::Point(a), Self::Point(b)) => Ok(Self::Point(Lerp::lerp(a, b, t))),
            _ => Err(VizjoinError::invalid_attribute(format!(
                "cannot interpolate {:?} into {:?}",
                self.kind(),
                to.kind()
            ))),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Rgba8> for AttrValue {
    fn from(value: Rgba8) -> Self {
        Self::Color(value)
    }
}

impl From<Point> for AttrValue {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

/// Ordered attribute -> value map.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AttrMap(BTreeMap<Attr, AttrValue>);

impl AttrMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Kinds are checked by [`AttrMap::validate`] or by the consumer.
    pub fn with(mut self, attr: Attr, value: impl Into<AttrValue>) -> Self {
        self.0.insert(attr, value.into());
        self
    }

    /// Insert or replace, rejecting values of the wrong kind.
    pub fn set(&mut self, attr: Attr, value: impl Into<AttrValue>) -> VizjoinResult<()> {
        let value = value.into();
        value.check_for(&attr)?;
        self.0.insert(attr, value);
        Ok(())
    }

    /// Current value of `attr`.
    pub fn get(&self, attr: &Attr) -> Option<&AttrValue> {
        self.0.get(attr)
    }

    /// Scalar value of `attr`.
    pub fn number(&self, attr: &Attr) -> Option<f64> {
        self.get(attr).and_then(AttrValue::as_number)
    }

    /// Color value of `attr`.
    pub fn color(&self, attr: &Attr) -> Option<Rgba8> {
        self.get(attr).and_then(AttrValue::as_color)
    }

    /// Remove `attr`, returning its value.
    pub fn remove(&mut self, attr: &Attr) -> Option<AttrValue> {
        self.0.remove(attr)
    }

    /// Check every entry against its attribute's kind.
    pub fn validate(&self) -> VizjoinResult<()> {
        self.0.iter().try_for_each(|(a, v)| v.check_for(a))
    }

    /// Iterate in attribute order.
    pub fn iter(&self) -> impl Iterator<Item = (&Attr, &AttrValue)> {
        self.0.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert_unchecked(&mut self, attr: Attr, value: AttrValue) {
        self.0.insert(attr, value);
    }
}

impl FromIterator<(Attr, AttrValue)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (Attr, AttrValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/attr.rs"]
mod tests;
