pub use crate::database::DatabaseBuilder;
pub use crate::error::{Error, Result};
pub use crate::matcher::find_match;
pub use crate::repeat::{longest_run, observe};
pub use crate::sequence::{read_sequence, read_sequence_path, Trim};
pub use crate::{identify, Locus, ObservedCounts, Profile, ProfileDatabase, RepeatCount};
