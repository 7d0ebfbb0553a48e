use crate::prelude::*;
use tracing::debug;

/// Returns the longest run of back-to-back copies of `pattern` in `sequence`.
///
/// Every start offset is tried, so a run need not be aligned to a multiple of
/// the pattern length. Copies do not overlap: `"AAAA"` holds two runs of
/// `"AA"`, not three. A sequence without `pattern` yields 0.
///
/// ```
/// use strprofile::repeat::longest_run;
///
/// assert_eq!(longest_run("TTAGATAGATAGATC", "AGAT")?, 3);
/// assert_eq!(longest_run("AAAA", "AA")?, 2);
/// # Ok::<(), strprofile::Error>(())
/// ```
pub fn longest_run(sequence: &str, pattern: &str) -> Result<RepeatCount> {
    let pattern = pattern.as_bytes();
    if pattern.is_empty() {
        return Err(Error::EmptyPattern);
    }

    let sequence = sequence.as_bytes();
    Ok((0..sequence.len())
        .map(|start| {
            sequence[start..]
                .chunks_exact(pattern.len())
                .take_while(|copy| *copy == pattern)
                .count()
        })
        .max()
        .unwrap_or(0))
}

/// Counts the longest run of every locus in `sequence`.
///
/// The table is complete, one entry per locus in the given order, before it is
/// returned.
pub fn observe<L: AsRef<str>>(sequence: &str, loci: &[L]) -> Result<ObservedCounts> {
    let mut observed = ObservedCounts::new();
    for locus in loci {
        let locus = locus.as_ref();
        let count = longest_run(sequence, locus)?;
        debug!(locus, count, "counted longest run");
        observed.insert(locus, count);
    }
    Ok(observed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::error::Error;

    #[test]
    fn test_longest_run_finds_unaligned_run() -> Result<(), Box<dyn Error>> {
        assert_eq!(longest_run("CAGATAGATAGATAGATT", "AGAT")?, 4);
        Ok(())
    }

    #[test]
    fn test_longest_run_picks_the_longest_of_several() -> Result<(), Box<dyn Error>> {
        let sequence = "TCTGTCTGAATTTCTGTCTGTCTGTCTGCTCTG";
        assert_eq!(longest_run(sequence, "TCTG")?, 4);
        Ok(())
    }

    #[test]
    fn test_longest_run_does_not_overlap() -> Result<(), Box<dyn Error>> {
        assert_eq!(longest_run("AAAA", "AA")?, 2);
        assert_eq!(longest_run("AAAAA", "AA")?, 2);
        Ok(())
    }

    #[test]
    fn test_longest_run_of_absent_pattern_is_zero() -> Result<(), Box<dyn Error>> {
        assert_eq!(longest_run("GATTACA", "AGAT")?, 0);
        assert_eq!(longest_run("", "AGAT")?, 0);
        assert_eq!(longest_run("AGA", "AGAT")?, 0);
        Ok(())
    }

    #[test]
    fn test_longest_run_is_case_sensitive() -> Result<(), Box<dyn Error>> {
        assert_eq!(longest_run("agatagat", "AGAT")?, 0);
        Ok(())
    }

    #[test]
    fn test_longest_run_rejects_empty_pattern() {
        assert!(matches!(
            longest_run("AGAT", ""),
            Err(crate::Error::EmptyPattern)
        ));
    }

    #[test]
    fn test_observe_keeps_locus_order() -> Result<(), Box<dyn Error>> {
        let sequence = "AGATAGATAGATTTTTTTTCTGCTGCTGCTGCTGAATTTATCTATC";
        let observed = observe(sequence, &["TATC", "AGAT", "AATG"])?;
        assert_eq!(
            observed.iter().collect::<Vec<_>>(),
            vec![("TATC", 2), ("AGAT", 3), ("AATG", 0)]
        );
        Ok(())
    }

    #[test]
    fn test_observe_propagates_empty_pattern() {
        assert!(observe("AGAT", &["AGAT", ""]).is_err());
    }

    proptest! {
        #[test]
        fn longest_run_counts_an_isolated_run(
            pattern in "[ACGT]{2,6}",
            copies in 0usize..20,
            prefix in "[N]{0,10}",
            suffix in "[N]{0,10}",
        ) {
            let sequence = format!("{}{}{}", prefix, pattern.repeat(copies), suffix);
            prop_assert_eq!(longest_run(&sequence, &pattern).unwrap(), copies);
        }

        #[test]
        fn longest_run_is_zero_without_an_occurrence(
            sequence in "[ACG]{0,64}",
            pattern in "[ACGT]{0,3}T[ACGT]{0,3}",
        ) {
            prop_assert_eq!(longest_run(&sequence, &pattern).unwrap(), 0);
        }

        #[test]
        fn longest_run_is_deterministic(
            sequence in "[ACGT]{0,128}",
            pattern in "[ACGT]{1,4}",
        ) {
            prop_assert_eq!(
                longest_run(&sequence, &pattern).unwrap(),
                longest_run(&sequence, &pattern).unwrap()
            );
        }
    }
}
