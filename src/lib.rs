#![crate_name = "strprofile"]
//! Identify individuals from a DNA sequence by short tandem repeat (STR) counts.
//!
//! A [`ProfileDatabase`] holds one row of repeat counts per known individual.
//! The sequence under test is reduced to an [`ObservedCounts`] table by
//! [`repeat::observe`], and [`matcher::find_match`] returns the first profile
//! whose counts agree on every locus.
//!
//! ```
//! use strprofile::prelude::*;
//!
//! let database = DatabaseBuilder::new()
//!     .from_reader("name,AGAT,AATG\nAlice,2,1\nBob,3,2\n".as_bytes())?;
//! let found = identify(&database, "TTAGATAGATAGATCAATGAATGC")?;
//! assert_eq!(found.map(|p| p.name().to_string()), Some("Bob".to_string()));
//! # Ok::<(), strprofile::Error>(())
//! ```
use ndarray;
use std::collections::HashSet;
use std::iter::FromIterator;

pub mod prelude;

pub mod database;
pub mod error;
pub mod matcher;
pub mod repeat;
pub mod sequence;

pub use error::{Error, Result};

pub type RepeatCount = usize;
pub type Locus = String;

/// Longest run of each STR found in a sequence, in locus order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservedCounts {
    counts: Vec<(Locus, RepeatCount)>,
}

impl ObservedCounts {
    pub fn new() -> Self {
        Self { counts: vec![] }
    }

    /// Records `count` for `locus`, replacing any earlier count for it.
    pub fn insert(&mut self, locus: &str, count: RepeatCount) {
        match self.counts.iter_mut().find(|(l, _)| l == locus) {
            Some(entry) => entry.1 = count,
            None => self.counts.push((locus.to_owned(), count)),
        }
    }

    pub fn get(&self, locus: &str) -> Option<RepeatCount> {
        self.counts
            .iter()
            .find(|(l, _)| l == locus)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, RepeatCount)> {
        self.counts.iter().map(|(l, c)| (l.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, RepeatCount)> for ObservedCounts {
    fn from_iter<I: IntoIterator<Item = (&'a str, RepeatCount)>>(iter: I) -> Self {
        let mut observed = Self::new();
        for (locus, count) in iter {
            observed.insert(locus, count);
        }
        observed
    }
}

/// A borrowed view of one row of a [`ProfileDatabase`].
#[derive(Debug, Clone, PartialEq)]
pub struct Profile<'db> {
    name: &'db str,
    loci: &'db [Locus],
    counts: ndarray::ArrayView1<'db, RepeatCount>,
}

impl<'db> Profile<'db> {
    pub fn name(&self) -> &'db str {
        self.name
    }

    pub fn count(&self, locus: &str) -> Option<RepeatCount> {
        self.loci
            .iter()
            .position(|l| l == locus)
            .map(|idx| self.counts[idx])
    }

    /// Pairs of locus and count, in database column order.
    pub fn counts(&self) -> impl Iterator<Item = (&'db str, RepeatCount)> + '_ {
        self.loci
            .iter()
            .zip(self.counts.iter())
            .map(|(l, c)| (l.as_str(), *c))
    }
}

/// Known STR profiles, one row per individual in input order.
///
/// Counts are stored as an individuals x loci matrix. Construction validates
/// the shape once, so lookups never re-parse or re-check fields.
#[derive(Debug, Clone)]
pub struct ProfileDatabase {
    loci: Vec<Locus>,
    names: Vec<String>,
    counts: ndarray::Array2<RepeatCount>,
}

impl ProfileDatabase {
    /// Builds a database from typed rows.
    ///
    /// Every row must carry exactly one count per locus and locus names must be
    /// non-empty and unique.
    pub fn from_rows<I>(loci: Vec<Locus>, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<RepeatCount>)>,
    {
        {
            let mut seen = HashSet::new();
            for locus in &loci {
                if locus.is_empty() || !seen.insert(locus.as_str()) {
                    return Err(Error::InvalidLocus(locus.clone()));
                }
            }
        }

        let mut names = vec![];
        let mut data = vec![];
        for (idx, (name, counts)) in rows.into_iter().enumerate() {
            if counts.len() < loci.len() {
                return Err(Error::MissingField {
                    record: Some(idx + 1),
                    field: loci[counts.len()].clone(),
                });
            }
            if counts.len() > loci.len() {
                return Err(Error::TooManyFields {
                    record: idx + 1,
                    expected: loci.len(),
                    found: counts.len(),
                });
            }
            names.push(name);
            data.extend(counts);
        }

        let width = loci.len();
        let counts =
            ndarray::Array2::from_shape_fn((names.len(), width), |(i, j)| data[i * width + j]);
        Ok(Self {
            loci,
            names,
            counts,
        })
    }

    /// STR names, in column order.
    pub fn loci(&self) -> &[Locus] {
        &self.loci
    }

    /// Column index of `locus` in the count matrix.
    pub fn column(&self, locus: &str) -> Option<usize> {
        self.loci.iter().position(|l| l == locus)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn profile(&self, idx: usize) -> Option<Profile<'_>> {
        let name = self.names.get(idx)?;
        Some(Profile {
            name: name.as_str(),
            loci: &self.loci,
            counts: self.counts.row(idx),
        })
    }

    pub fn profiles(&self) -> impl Iterator<Item = Profile<'_>> + '_ {
        (0..self.len()).filter_map(move |idx| self.profile(idx))
    }

    /// The individuals x loci count matrix.
    pub fn counts(&self) -> ndarray::ArrayView2<'_, RepeatCount> {
        self.counts.view()
    }

    /// See [`matcher::find_match`].
    pub fn find_match(&self, observed: &ObservedCounts) -> Result<Option<Profile<'_>>> {
        matcher::find_match(observed, self)
    }
}

/// Counts every locus of `database` in `sequence` and returns the first
/// profile that matches all of them.
pub fn identify<'db>(
    database: &'db ProfileDatabase,
    sequence: &str,
) -> Result<Option<Profile<'db>>> {
    let observed = repeat::observe(sequence, database.loci())?;
    database.find_match(&observed)
}
