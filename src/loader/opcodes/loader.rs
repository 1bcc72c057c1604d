//! Compilation driver: streams definition lines through the parser, the coverage checker and
//! the collision checker into an [`InstructionTable`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::encoding::collision::{check_collision, pseudo_overlaps};
use crate::encoding::coverage::validate_coverage;
use crate::encoding::diagnostic::{DiagnosticPhase, OpcodeDiagnostic, SourceSpan};
use crate::encoding::error::{EncodingError, OpcodeError};
use crate::encoding::instruction::{InstructionRecord, ParsedInstruction};
use crate::encoding::table::InstructionTable;

use super::parser::Parser;

/// How the loader reacts to an invalid definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Abort on the first invalid line.
    #[default]
    FailFast,
    /// Keep going, skip invalid lines, and report every problem at the end.
    CollectAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompileOptions {
    pub error_mode: ErrorMode,
}

impl CompileOptions {
    pub fn collect_all() -> Self {
        Self {
            error_mode: ErrorMode::CollectAll,
        }
    }
}

/// Successful compilation: the table plus any warnings raised along the way.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub table: InstructionTable,
    pub warnings: Vec<OpcodeDiagnostic>,
}

#[derive(Default)]
pub struct OpcodeLoader {
    options: CompileOptions,
}

impl OpcodeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> CompileOptions {
        self.options
    }

    /// Compiles the listing stored at `path`.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Compilation, OpcodeError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        self.load_reader(path, BufReader::new(file))
    }

    /// Compiles an in-memory listing; `path` is only used for diagnostics.
    pub fn load_str<P: Into<PathBuf>>(&self, path: P, src: &str) -> Result<Compilation, OpcodeError> {
        self.load_reader(path, src.as_bytes())
    }

    /// Compiles a listing pulled line by line from `reader`.
    pub fn load_reader<P: Into<PathBuf>, R: BufRead>(
        &self,
        path: P,
        reader: R,
    ) -> Result<Compilation, OpcodeError> {
        let parser = Parser::new(path);
        let mut table = InstructionTable::new();
        let mut diagnostics = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let outcome = parser
                .parse_line(&line, idx + 1)
                .and_then(|parsed| match parsed {
                    Some(parsed) => accept(&mut table, parsed),
                    None => Ok(()),
                });
            match outcome {
                Ok(()) => {}
                Err(err @ OpcodeError::Encoding { .. }) => match self.options.error_mode {
                    ErrorMode::FailFast => return Err(err),
                    ErrorMode::CollectAll => diagnostics.extend(err.diagnostics()),
                },
                Err(other) => return Err(other),
            }
        }

        if !diagnostics.is_empty() {
            return Err(OpcodeError::Diagnostics { diagnostics });
        }

        let warnings = pseudo_overlap_warnings(&table);
        for warning in &warnings {
            tracing::warn!("{}", warning.format_human());
        }
        tracing::info!(
            instructions = table.len(),
            pseudo = table.pseudo_count(),
            "compiled {}",
            parser.file_path().display()
        );
        Ok(Compilation { table, warnings })
    }
}

/// Runs the table-level checks on a parsed line and appends it.
fn accept(table: &mut InstructionTable, parsed: ParsedInstruction) -> Result<(), OpcodeError> {
    let fail = |error: EncodingError, parsed: &ParsedInstruction| OpcodeError::Encoding {
        instruction: parsed.name.clone(),
        error,
        span: parsed.span.clone(),
    };
    let format = validate_coverage(parsed.coverage).map_err(|err| fail(err, &parsed))?;
    if !parsed.is_pseudo {
        check_collision(parsed.encoding, table).map_err(|err| fail(err, &parsed))?;
    }
    let record = InstructionRecord::from_parsed(parsed, format);
    tracing::debug!(
        name = %record.name,
        pseudo = record.is_pseudo,
        "match={:#010x} mask={:#010x}",
        record.encoding.match_value,
        record.encoding.mask
    );
    let name = record.name.clone();
    let span = record.span.clone();
    table.insert(record).map_err(|error| OpcodeError::Encoding {
        instruction: name,
        error,
        span,
    })
}

fn pseudo_overlap_warnings(table: &InstructionTable) -> Vec<OpcodeDiagnostic> {
    pseudo_overlaps(table.records())
        .into_iter()
        .map(|(first, second)| {
            let span: Option<SourceSpan> = table.get(&second).and_then(|r| r.span.clone());
            OpcodeDiagnostic::warning(
                DiagnosticPhase::Collision,
                "collision.pseudo-overlap",
                second,
                format!("pseudo instruction overlaps pseudo instruction {first}"),
                span,
            )
        })
        .collect()
}

/// Convenience helper: compiles `src` with default options and returns the table.
pub fn compile_str(src: &str) -> Result<InstructionTable, OpcodeError> {
    OpcodeLoader::new()
        .load_str("<input>", src)
        .map(|compilation| compilation.table)
}
