pub(crate) mod glyph;
pub(crate) mod grid;
pub(crate) mod radial;
