use crate::prelude::*;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Whitespace handling applied to a sequence before it is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trim {
    /// Keep the content exactly as read.
    None,
    /// Strip leading and trailing whitespace, such as a final newline.
    Ends,
    /// Remove all whitespace, joining line-wrapped sequences.
    All,
}

impl Trim {
    fn apply(self, raw: String) -> String {
        match self {
            Trim::None => raw,
            Trim::Ends => raw.trim().to_owned(),
            Trim::All => raw.chars().filter(|c| !c.is_ascii_whitespace()).collect(),
        }
    }
}

impl Default for Trim {
    fn default() -> Self {
        Trim::Ends
    }
}

impl FromStr for Trim {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Trim::None),
            "ends" => Ok(Trim::Ends),
            "all" => Ok(Trim::All),
            other => Err(format!(
                "unknown trim policy {:?}, expected none, ends or all",
                other
            )),
        }
    }
}

impl fmt::Display for Trim {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Trim::None => "none",
            Trim::Ends => "ends",
            Trim::All => "all",
        };
        f.write_str(name)
    }
}

/// Reads the whole of `reader` as one DNA sequence.
pub fn read_sequence<R: Read>(mut reader: R, trim: Trim) -> Result<String> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    let sequence = trim.apply(raw);
    debug!(len = sequence.len(), %trim, "read sequence");
    Ok(sequence)
}

pub fn read_sequence_path<P: AsRef<Path>>(path: P, trim: Trim) -> Result<String> {
    read_sequence(File::open(path)?, trim)
}
