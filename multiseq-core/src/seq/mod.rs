pub mod collection;
pub mod frame;
pub mod record;

pub use collection::{PerSequence, SequenceCollection};
pub use frame::ReadingFrame;
pub use record::SeqRecord;
