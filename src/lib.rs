//! Vizjoin is a keyed data-join and transition engine for data-driven charts.
//!
//! A chart pass is a chain of explicit calls:
//!
//! - rebuild pure scales ([`BandScale`], [`LinearScale`], [`SequentialScale`], [`OrdinalScale`])
//!   from the current dataset
//! - place repeated motifs with the layout helpers ([`position_for`], [`RadialLayout`])
//! - diff the dataset against the live elements ([`reconcile`], [`Bindings`])
//! - animate the enter/update/exit sets on a caller-driven clock ([`Scheduler`])
//! - layer hover, highlight and tooltip state on top ([`Coordinator`])
//!
//! [`ChartInstance`] wires these together for one chart. Nothing here draws; the caller reads
//! the sampled attribute values back and renders them however it likes.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod chart;
pub(crate) mod data;
pub(crate) mod join;
pub(crate) mod layout;
pub(crate) mod pointer;
pub(crate) mod scale;

pub use crate::foundation::core::{ElementId, Millis, Point, Rgba8, Vec2};
pub use crate::foundation::error::{VizjoinError, VizjoinResult};
pub use crate::foundation::math::extent;

pub use crate::data::category::{CategoryColor, CategoryTable, LegendEntry};
pub use crate::data::group::{count_by, uniq_by};
pub use crate::data::key::Key;

pub use crate::scale::band::BandScale;
pub use crate::scale::config::{Scale, ScaleConfig, make_scale};
pub use crate::scale::interpolate::{Interpolator, sample_interpolator};
pub use crate::scale::linear::LinearScale;
pub use crate::scale::ordinal::OrdinalScale;
pub use crate::scale::quantize::QuantizeScale;
pub use crate::scale::sequential::SequentialScale;

pub use crate::animation::attr::{Attr, AttrKind, AttrMap, AttrValue, Lerp};
pub use crate::animation::ease::{Ease, Easing};
pub use crate::animation::scheduler::{AttrStore, Completion, Scheduler, TickReport};
pub use crate::animation::transition::{
    OnEnd, Step, Transition, TransitionConfig, TransitionGroupId, TransitionOpts, TransitionState,
};

pub use crate::join::bindings::{Bindings, BoundElement, Phase, Rebind};
pub use crate::join::reconcile::{DuplicateKeyWarning, Enter, Exit, Join, Update, reconcile};

pub use crate::pointer::coordinator::{
    Coordinator, DEFAULT_TOOLTIP_OFFSET, Effects, HoverState, PointerEffect,
};
pub use crate::pointer::throttle::{DEFAULT_THROTTLE_MS, Throttle};

pub use crate::layout::glyph::{
    MAX_PETALS, MIN_PETALS, SATELLITE_COUNT, SATELLITE_RADIUS, petal_count_scale,
    petal_rotations, satellite_offsets,
};
pub use crate::layout::grid::{GridLayout, position_for};
pub use crate::layout::radial::{
    ArcSlot, DEFAULT_LABEL_GAP, DEFAULT_PAD_ANGLE, LabelArc, RadialLayout,
};

pub use crate::chart::config::{ChartConfig, FlashStyle, HighlightStyle, Margin};
pub use crate::chart::instance::{ChartInstance, Encoder, FrameReport, RenderReport};
