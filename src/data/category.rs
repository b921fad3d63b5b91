use std::collections::HashMap;

use crate::{
    foundation::core::Rgba8,
    foundation::error::{VizjoinError, VizjoinResult},
};

/// One `name -> color` row of a static category table.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CategoryColor {
    /// Category name as it appears in records.
    pub name: String,
    /// Assigned color.
    pub color: Rgba8,
}

/// Legend row: a category seen in the data, how often, and its color.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LegendEntry {
    /// Category name.
    pub name: String,
    /// Number of records in the category.
    pub count: usize,
    /// Assigned color.
    pub color: Rgba8,
}

/// Caller-supplied category color table, indexed once at construction.
///
/// Lookups of names absent from the table fail with [`VizjoinError::UnknownCategory`]; there is
/// no fallback color.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTable {
    entries: Vec<CategoryColor>,
    index: HashMap<String, usize>,
}

impl CategoryTable {
    /// Build from explicit rows. Duplicate names are rejected.
    pub fn new(entries: Vec<CategoryColor>) -> VizjoinResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, e) in entries.iter().enumerate() {
            if index.insert(e.name.clone(), i).is_some() {
                return Err(VizjoinError::validation(format!(
                    "duplicate category '{}'",
                    e.name
                )));
            }
        }
        Ok(Self { entries, index })
    }

    /// Assign `palette` positionally to `names` (k-th name gets the k-th color, cycling).
    pub fn from_palette<S: AsRef<str>>(names: &[S], palette: &[Rgba8]) -> VizjoinResult<Self> {
        if palette.is_empty() {
            return Err(VizjoinError::validation("category palette must not be empty"));
        }
        let entries = names
            .iter()
            .enumerate()
            .map(|(i, n)| CategoryColor {
                name: n.as_ref().to_owned(),
                color: palette[i % palette.len()],
            })
            .collect();
        Self::new(entries)
    }

    /// Color for `name`.
    pub fn color(&self, name: &str) -> VizjoinResult<Rgba8> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].color)
            .ok_or_else(|| VizjoinError::unknown_category(format!("'{name}' is not in the table")))
    }

    /// Table rows in declaration order.
    pub fn entries(&self) -> &[CategoryColor] {
        &self.entries
    }

    /// Legend for the categories present in `data`, most frequent first.
    ///
    /// Ties keep first-appearance order. Fails if any record names an unknown category.
    pub fn legend<R>(
        &self,
        data: &[R],
        category: impl Fn(&R) -> &str,
    ) -> VizjoinResult<Vec<LegendEntry>> {
        let mut order = Vec::<&str>::new();
        let mut counts = HashMap::<&str, usize>::new();
        for r in data {
            let name = category(r);
            let n = counts.entry(name).or_insert(0);
            if *n == 0 {
                order.push(name);
            }
            *n += 1;
        }

        let mut out = order
            .into_iter()
            .map(|name| {
                Ok(LegendEntry {
                    name: name.to_owned(),
                    count: counts[name],
                    color: self.color(name)?,
                })
            })
            .collect::<VizjoinResult<Vec<_>>>()?;
        out.sort_by(|a, b| b.count.cmp(&a.count));
        Ok(out)
    }
}

impl<'de> serde::Deserialize<'de> for CategoryTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<CategoryColor>::deserialize(deserializer)?;
        Self::new(entries).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/category.rs"]
mod tests;
