use crate::analysis::extrema::{Extrema, ExtremaMode};
use crate::error::{BioError, BioResult};
use crate::seq::{PerSequence, SequenceCollection};

pub fn count_sequences(collection: &SequenceCollection) -> usize {
    collection.len()
}

/// Byte length of every sequence, in collection order.
pub fn sequence_lengths(collection: &SequenceCollection) -> PerSequence<usize> {
    collection.iter().map(|(id, seq)| (id, seq.len())).collect()
}

/// Shortest or longest length, with every id at that length.
pub fn length_extrema(
    lengths: &PerSequence<usize>,
    mode: ExtremaMode,
) -> BioResult<Extrema<Box<str>>> {
    let value = mode
        .extreme(lengths.values().copied())
        .ok_or(BioError::EmptyInput {
            what: "sequence lengths",
        })?;

    let items = lengths
        .iter()
        .filter(|&(_, &len)| len == value)
        .map(|(id, _)| id.into())
        .collect();

    Ok(Extrema { value, items })
}
