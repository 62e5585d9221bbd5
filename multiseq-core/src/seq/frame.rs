use crate::error::{BioError, BioResult};
use std::fmt;

/// One of the three forward reading frames.
///
/// Frame `n` starts reading codons at 0-based offset `n - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReadingFrame {
    One,
    Two,
    Three,
}

impl ReadingFrame {
    pub const ALL: [ReadingFrame; 3] = [ReadingFrame::One, ReadingFrame::Two, ReadingFrame::Three];

    pub fn new(frame: usize) -> BioResult<Self> {
        match frame {
            1 => Ok(ReadingFrame::One),
            2 => Ok(ReadingFrame::Two),
            3 => Ok(ReadingFrame::Three),
            _ => Err(BioError::InvalidFrame { frame }),
        }
    }

    /// The frame number, 1..=3.
    pub fn number(self) -> usize {
        match self {
            ReadingFrame::One => 1,
            ReadingFrame::Two => 2,
            ReadingFrame::Three => 3,
        }
    }

    /// 0-based offset of the first codon.
    pub fn offset(self) -> usize {
        self.number() - 1
    }
}

impl TryFrom<usize> for ReadingFrame {
    type Error = BioError;

    fn try_from(frame: usize) -> BioResult<Self> {
        ReadingFrame::new(frame)
    }
}

impl fmt::Display for ReadingFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
