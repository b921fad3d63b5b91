pub(crate) mod band;
pub(crate) mod config;
pub(crate) mod interpolate;
pub(crate) mod linear;
pub(crate) mod ordinal;
pub(crate) mod quantize;
pub(crate) mod sequential;
