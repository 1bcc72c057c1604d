mod common;

use std::io::Write;

use hex_literal::hex;
use ise_opcodes::encoding::{EncodingError, Field, OpcodeError, WordFormat};
use ise_opcodes::loader::opcodes::{CompileOptions, OpcodeLoader};

use common::{fixture, load_fixture};

#[test]
fn crypto_listing_compiles_and_verifies() {
    let compilation = load_fixture("xcrypto.opcodes");
    let table = &compilation.table;
    assert_eq!(table.len(), 23);
    assert_eq!(table.pseudo_count(), 1);
    assert!(compilation.warnings.is_empty());
    table.verify().expect("table invariants hold");

    let padd = table.get("xc.padd").expect("xc.padd");
    assert_eq!(padd.match_value().to_le_bytes(), hex!("2b 10 00 04"));
    assert_eq!(padd.mask().to_le_bytes(), hex!("7f 70 00 fe"));
    assert_eq!(
        padd.fields.as_slice(),
        &[Field::Ca, Field::Cb, Field::Cc, Field::Crs2, Field::Crs1, Field::Crd]
    );
    assert!(table.iter().all(|record| record.format == WordFormat::Full));
}

#[test]
fn every_real_match_value_decodes_to_exactly_one_instruction() {
    for name in ["xcrypto.opcodes", "rv32i.opcodes"] {
        let table = load_fixture(name).table;
        let real: Vec<_> = table.iter().filter(|record| !record.is_pseudo).collect();
        for record in &real {
            let word = record.match_value();
            let decoded: Vec<&str> = real
                .iter()
                .filter(|other| other.encoding.matches(word))
                .map(|other| other.name.as_str())
                .collect();
            assert_eq!(decoded, [record.name.as_str()], "{name}: {word:#010x}");
        }
    }
}

#[test]
fn pseudo_overlaps_surface_as_warnings() {
    let compilation = load_fixture("rv32i.opcodes");
    assert_eq!(compilation.table.pseudo_count(), 3);
    let warned: Vec<_> = compilation
        .warnings
        .iter()
        .map(|diag| diag.instruction.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(warned, ["mv"]);
    let span = compilation.warnings[0].span.as_ref().expect("span");
    assert_eq!(span.path, fixture("rv32i.opcodes"));
}

#[test]
fn named_selectors_match_explicit_ranges() {
    let table = load_fixture("rv32i.opcodes").table;
    let sub = table.get("sub").expect("sub");
    assert_eq!(sub.match_value(), 0x4000_0033);
    assert_eq!(sub.mask(), 0xFE00_707F);
    let jalr = table.get("jalr").expect("jalr");
    assert_eq!(jalr.mask(), table.get("addi").expect("addi").mask());
}

#[test]
fn fingerprint_is_stable_across_loads() {
    let first = load_fixture("xcrypto.opcodes").table;
    let second = load_fixture("xcrypto.opcodes").table;
    assert_eq!(first.fingerprint(), second.fingerprint());
    assert_eq!(first.fingerprint_hex().len(), 64);
}

#[test]
fn file_errors_point_into_the_listing() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "ok rd rs1 imm12 14..12=0 6..0=0x13").expect("write");
    writeln!(file, "# spacer").expect("write");
    writeln!(file, "bad rd rs1 imm12 14..12=0 6..0=0x13 2=1").expect("write");
    file.flush().expect("flush");

    match OpcodeLoader::new().load_file(file.path()) {
        Err(OpcodeError::Encoding {
            instruction,
            error,
            span,
        }) => {
            assert_eq!(instruction, "bad");
            assert_eq!(error, EncodingError::Overspecified { bits: 0x4 });
            let span = span.expect("span");
            assert_eq!(span.path, file.path());
            assert_eq!((span.start.line, span.start.column), (3, 37));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn collect_all_mode_reports_each_bad_line_of_a_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        "\
first 31..0=0x12345678
second 31..0=0x12345678
third 31..0=0x12345678
fourth 31..4=0 3..0=16
"
    )
    .expect("write");
    file.flush().expect("flush");

    let loader = OpcodeLoader::with_options(CompileOptions::collect_all());
    match loader.load_file(file.path()) {
        Err(OpcodeError::Diagnostics { diagnostics }) => {
            let summary: Vec<_> = diagnostics
                .iter()
                .map(|diag| (diag.instruction.as_deref().unwrap_or_default(), diag.code))
                .collect();
            assert_eq!(
                summary,
                [
                    ("second", "collision.overlap"),
                    ("third", "collision.overlap"),
                    ("fourth", "parse.bad-value"),
                ]
            );
            assert!(diagnostics[0].message.contains("first"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = OpcodeLoader::new()
        .load_file(dir.path().join("absent.opcodes"))
        .unwrap_err();
    assert!(matches!(err, OpcodeError::Io(_)));
    assert!(err.diagnostics().is_empty());
}
