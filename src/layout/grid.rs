use crate::foundation::{
    core::Point,
    error::{VizjoinError, VizjoinResult},
};

/// Centre of cell `index` in a row-major grid of square cells.
///
/// `row = index / row_capacity`, `col = index % row_capacity`, `x = (col + 0.5) * item_size`,
/// `y = (row + 0.5) * item_size + row * row_gap`.
pub fn position_for(
    index: usize,
    item_size: f64,
    row_capacity: usize,
    row_gap: f64,
) -> VizjoinResult<Point> {
    if row_capacity == 0 {
        return Err(VizjoinError::validation("row_capacity must be >= 1"));
    }
    let row = (index / row_capacity) as f64;
    let col = (index % row_capacity) as f64;
    Ok(Point::new(
        (col + 0.5) * item_size,
        (row + 0.5) * item_size + row * row_gap,
    ))
}

/// Grid of equally sized glyph cells.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridLayout {
    /// Cell edge length.
    pub item_size: f64,
    /// Cells per row.
    pub row_capacity: usize,
    /// Extra vertical space between rows.
    #[serde(default)]
    pub row_gap: f64,
}

impl GridLayout {
    /// Grid with an explicit row capacity.
    pub fn new(item_size: f64, row_capacity: usize, row_gap: f64) -> VizjoinResult<Self> {
        let grid = Self {
            item_size,
            row_capacity,
            row_gap,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// As many cells per row as fit in `width`, never fewer than one.
    pub fn fit(width: f64, item_size: f64, row_gap: f64) -> VizjoinResult<Self> {
        if !(item_size.is_finite() && item_size > 0.0) {
            return Err(VizjoinError::validation("grid item_size must be > 0"));
        }
        let capacity = if width.is_finite() && width > 0.0 {
            (width / item_size).floor() as usize
        } else {
            0
        };
        Self::new(item_size, capacity.max(1), row_gap)
    }

    /// Reject zero capacity and non-finite or negative sizes.
    pub fn validate(&self) -> VizjoinResult<()> {
        if !(self.item_size.is_finite() && self.item_size > 0.0) {
            return Err(VizjoinError::validation("grid item_size must be > 0"));
        }
        if !(self.row_gap.is_finite() && self.row_gap >= 0.0) {
            return Err(VizjoinError::validation("grid row_gap must be >= 0"));
        }
        if self.row_capacity == 0 {
            return Err(VizjoinError::validation("row_capacity must be >= 1"));
        }
        Ok(())
    }

    /// Centre of cell `index`.
    pub fn position(&self, index: usize) -> VizjoinResult<Point> {
        position_for(index, self.item_size, self.row_capacity, self.row_gap)
    }

    /// Rows needed for `count` cells.
    pub fn rows(&self, count: usize) -> usize {
        count.div_ceil(self.row_capacity.max(1))
    }

    /// Height reserved for `count` cells.
    pub fn content_height(&self, count: usize) -> f64 {
        let rows = self.rows(count) as f64;
        (rows + 0.5) * self.item_size + (rows - 1.0).max(0.0) * self.row_gap
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
