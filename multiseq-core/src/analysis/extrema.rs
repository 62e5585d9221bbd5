use crate::error::{BioError, BioResult};
use crate::seq::PerSequence;
use std::fmt;
use std::str::FromStr;

/// Which end of a range to select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExtremaMode {
    Min,
    Max,
}

impl ExtremaMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ExtremaMode::Min => "min",
            ExtremaMode::Max => "max",
        }
    }

    pub(crate) fn extreme<I: Iterator<Item = usize>>(self, values: I) -> Option<usize> {
        match self {
            ExtremaMode::Min => values.min(),
            ExtremaMode::Max => values.max(),
        }
    }
}

impl FromStr for ExtremaMode {
    type Err = BioError;

    fn from_str(s: &str) -> BioResult<Self> {
        match s {
            "min" => Ok(ExtremaMode::Min),
            "max" => Ok(ExtremaMode::Max),
            _ => Err(BioError::InvalidMode { mode: s.to_string() }),
        }
    }
}

impl fmt::Display for ExtremaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An extreme value with every item achieving it, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extrema<T> {
    pub value: usize,
    pub items: Vec<T>,
}

/// A global extreme value with the sequences whose local extreme matches it.
///
/// Every list in `hits` is non-empty and every record in it has `value` as
/// its key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlobalExtrema<T> {
    pub value: usize,
    pub hits: PerSequence<Vec<T>>,
}

impl<T> GlobalExtrema<T> {
    /// Total number of records across all sequences.
    pub fn record_count(&self) -> usize {
        self.hits.values().map(Vec::len).sum()
    }
}

/// Items of `items` whose key equals the extreme key; empty when `items` is.
pub(crate) fn select_local<T: Clone>(
    items: &[T],
    mode: ExtremaMode,
    key: impl Fn(&T) -> usize,
) -> Vec<T> {
    match mode.extreme(items.iter().map(&key)) {
        Some(target) => items.iter().filter(|t| key(t) == target).cloned().collect(),
        None => Vec::new(),
    }
}

/// Reduce per-sequence local extrema to the global extreme.
///
/// Every list in `local` must already hold records sharing one key.
pub(crate) fn reduce_global<T>(
    local: PerSequence<Vec<T>>,
    mode: ExtremaMode,
    key: impl Fn(&T) -> usize,
    what: &'static str,
) -> BioResult<GlobalExtrema<T>> {
    let value = mode
        .extreme(local.values().filter_map(|v| v.first()).map(&key))
        .ok_or(BioError::EmptyInput { what })?;

    let hits = local
        .into_iter()
        .filter(|(_, v)| v.first().is_some_and(|t| key(t) == value))
        .collect();

    Ok(GlobalExtrema { value, hits })
}
