//! Extraction of the distinct class labels in a target vector.

use std::{
    collections::HashSet,
    io::{self, Write},
};

use crate::{Error, Label, Result};

/// Return every distinct label exactly once, in order of first appearance.
///
/// The result is not sorted: `unique(&[3, 1, 3, 2, 1])` is `[3, 1, 2]`.
pub fn unique(labels: &[Label]) -> Result<Vec<Label>> {
    if labels.is_empty() {
        return Err(Error::Empty("labels"));
    }
    let mut seen = HashSet::with_capacity(labels.len());
    let uniques: Vec<_> = labels.iter().copied().filter(|l| seen.insert(*l)).collect();
    log::trace!("{} unique labels among {}", uniques.len(), labels.len());
    Ok(uniques)
}

/// Return the number of distinct labels.
pub fn count_unique(labels: &[Label]) -> Result<usize> {
    unique(labels).map(|u| u.len())
}

/// Write each unique label on its own line.
pub fn write_unique<W>(labels: &[Label], mut out: W) -> Result<()>
where
    W: Write,
{
    for label in unique(labels)? {
        writeln!(out, "{label}")?;
    }
    out.flush()?;
    Ok(())
}

/// Print each unique label on its own line to standard output.
pub fn print_unique(labels: &[Label]) -> Result<()> {
    write_unique(labels, io::stdout().lock())
}
