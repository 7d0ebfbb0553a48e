use crate::prelude::*;
use ndarray::{Array1, Axis};
use tracing::{debug, info};

/// Returns the first profile whose count equals the observed count at every
/// observed locus.
///
/// Profiles are scanned in database order and the scan stops at the first full
/// match. `Ok(None)` means no profile matched. An observed locus the database
/// has no column for is an [`Error::MissingField`].
pub fn find_match<'db>(
    observed: &ObservedCounts,
    database: &'db ProfileDatabase,
) -> Result<Option<Profile<'db>>> {
    let columns = observed
        .iter()
        .map(|(locus, _)| {
            database.column(locus).ok_or_else(|| Error::MissingField {
                record: None,
                field: locus.to_owned(),
            })
        })
        .collect::<Result<Vec<usize>>>()?;

    if columns.is_empty() {
        return Ok(database.profile(0));
    }

    let expected: Array1<RepeatCount> = observed.iter().map(|(_, count)| count).collect();
    let candidates = database.counts().select(Axis(1), &columns);
    debug!(
        candidates = candidates.nrows(),
        loci = columns.len(),
        "scanning profiles"
    );

    let found = candidates
        .outer_iter()
        .position(|row| row == expected)
        .and_then(|idx| database.profile(idx));
    if let Some(profile) = &found {
        info!(name = profile.name(), "profile matched");
    }
    Ok(found)
}
