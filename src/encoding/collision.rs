//! Cross-instruction decodability checks.

use super::error::EncodingError;
use super::instruction::{Encoding, InstructionRecord};
use super::table::InstructionTable;

/// Rejects `encoding` if any accepted non-pseudo instruction claims a common bit pattern.
///
/// Existing records are visited in declaration order, so the reported partner is the
/// earliest conflicting definition.
pub fn check_collision(encoding: Encoding, table: &InstructionTable) -> Result<(), EncodingError> {
    match table
        .iter()
        .filter(|other| !other.is_pseudo)
        .find(|other| encoding.overlaps(other.encoding))
    {
        Some(other) => Err(EncodingError::EncodingCollision {
            other: other.name.clone(),
        }),
        None => Ok(()),
    }
}

/// All-pairs pass over a finished record list, returning every pair of non-pseudo
/// instructions whose encodings overlap as `(earlier, later)` names.
pub fn pairwise_collisions(records: &[InstructionRecord]) -> Vec<(String, String)> {
    overlapping_pairs(records, |record| !record.is_pseudo)
}

/// Pairs of pseudo instructions that claim a common bit pattern.
///
/// Pseudo instructions are exempt from [`check_collision`]; this pass only reports them so
/// the driver can warn.
pub fn pseudo_overlaps(records: &[InstructionRecord]) -> Vec<(String, String)> {
    overlapping_pairs(records, |record| record.is_pseudo)
}

fn overlapping_pairs(
    records: &[InstructionRecord],
    include: impl Fn(&InstructionRecord) -> bool,
) -> Vec<(String, String)> {
    let selected: Vec<&InstructionRecord> = records.iter().filter(|r| include(r)).collect();
    let mut pairs = Vec::new();
    for (idx, first) in selected.iter().enumerate() {
        for second in &selected[idx + 1..] {
            if first.encoding.overlaps(second.encoding) {
                pairs.push((first.name.clone(), second.name.clone()));
            }
        }
    }
    pairs
}
