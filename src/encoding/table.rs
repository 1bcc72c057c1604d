//! The canonical encoding model: an append-only, declaration-ordered instruction table.

use std::collections::BTreeSet;

use ahash::AHashMap;
use sha2::{Digest, Sha256};

use super::collision::pairwise_collisions;
use super::error::{EncodingError, OpcodeError};
use super::instruction::InstructionRecord;
use super::registry::Field;

#[derive(Debug, Clone, Default)]
pub struct InstructionTable {
    records: Vec<InstructionRecord>,
    index: AHashMap<String, usize>,
}

impl InstructionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. Names must be unique; encodings are not checked here.
    pub fn insert(&mut self, record: InstructionRecord) -> Result<(), EncodingError> {
        if self.index.contains_key(&record.name) {
            return Err(EncodingError::DuplicateName);
        }
        self.index.insert(record.name.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&InstructionRecord> {
        self.index.get(name).map(|&idx| &self.records[idx])
    }

    /// Instruction names in declaration order.
    pub fn all_instructions(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InstructionRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[InstructionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn pseudo_count(&self) -> usize {
        self.records.iter().filter(|record| record.is_pseudo).count()
    }

    /// Fields referenced by at least one instruction, in registry order.
    pub fn fields_used(&self) -> BTreeSet<Field> {
        self.records
            .iter()
            .flat_map(|record| record.fields.iter().copied())
            .collect()
    }

    /// SHA-256 over the canonical serialization of every record, in declaration order.
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for record in &self.records {
            hasher.update(record.name.as_bytes());
            hasher.update([0u8, u8::from(record.is_pseudo)]);
            hasher.update(record.encoding.match_value.to_be_bytes());
            hasher.update(record.encoding.mask.to_be_bytes());
            hasher.update([record.format.bits(), record.fields.len() as u8]);
            for field in &record.fields {
                hasher.update(field.name().as_bytes());
                hasher.update([0u8]);
            }
            hasher.update([record.literal_ranges.len() as u8]);
            for literal in &record.literal_ranges {
                hasher.update([literal.range.high(), literal.range.low()]);
                hasher.update(literal.value.to_be_bytes());
            }
            hasher.update([record.ignored_ranges.len() as u8]);
            for range in &record.ignored_ranges {
                hasher.update([range.high(), range.low()]);
            }
        }
        hasher.finalize().into()
    }

    /// Lower-case hex rendering of [`InstructionTable::fingerprint`].
    pub fn fingerprint_hex(&self) -> String {
        self.fingerprint()
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect()
    }

    /// Re-checks every invariant of the finished table: complete and non-overlapping
    /// coverage per record, and pairwise decodability of non-pseudo records.
    pub fn verify(&self) -> Result<(), OpcodeError> {
        let mut diagnostics = Vec::new();
        for record in &self.records {
            let claimed_bits: u32 = record
                .fields
                .iter()
                .map(|field| field.range())
                .chain(record.literal_ranges.iter().map(|lit| lit.range))
                .chain(record.ignored_ranges.iter().copied())
                .map(|range| u32::from(range.width()))
                .sum();
            let coverage = record.coverage();
            if claimed_bits != coverage.count_ones() {
                diagnostics.push(
                    EncodingError::Overspecified { bits: coverage }
                        .to_diagnostic(&record.name, record.span.clone()),
                );
            } else if coverage != record.format.coverage() {
                diagnostics.push(
                    EncodingError::IncompleteCoverage { coverage }
                        .to_diagnostic(&record.name, record.span.clone()),
                );
            }
        }
        for (first, second) in pairwise_collisions(&self.records) {
            let span = self.get(&second).and_then(|record| record.span.clone());
            diagnostics.push(
                EncodingError::EncodingCollision { other: first }.to_diagnostic(&second, span),
            );
        }
        if diagnostics.is_empty() {
            Ok(())
        } else {
            Err(OpcodeError::Diagnostics { diagnostics })
        }
    }
}

impl<'a> IntoIterator for &'a InstructionTable {
    type Item = &'a InstructionRecord;
    type IntoIter = std::slice::Iter<'a, InstructionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
