use crate::encoding::coverage::WordFormat;
use crate::encoding::diagnostic::DiagnosticPhase;
use crate::encoding::error::{EncodingError, OpcodeError};
use crate::encoding::registry::Field;
use crate::encoding::table::InstructionTable;
use crate::loader::opcodes::{CompileOptions, OpcodeLoader, compile_str};

fn first_error(src: &str) -> (String, EncodingError) {
    match compile_str(src) {
        Err(OpcodeError::Encoding {
            instruction, error, ..
        }) => (instruction, error),
        other => panic!("expected an encoding error, got {other:?}"),
    }
}

#[test]
fn named_selectors_compile_to_i_type_encoding() {
    let table = compile_str("addi rd rs1 imm12=0 opcode=0x13 funct3=0").expect("addi compiles");
    let addi = table.get("addi").expect("addi recorded");
    assert_eq!(addi.match_value() & 0x7F, 0x13);
    assert_eq!(addi.match_value() >> 12 & 0x7, 0);
    assert_eq!(addi.match_value(), 0x0000_0013);
    assert_eq!(addi.mask(), 0xFFF0_707F);
    assert_eq!(addi.fields.as_slice(), &[Field::Rd, Field::Rs1]);
    assert_eq!(addi.format, WordFormat::Full);
    assert_eq!(addi.coverage(), 0xFFFF_FFFF);
}

#[test]
fn identical_fixed_patterns_collide() {
    let (name, error) = first_error("foo 31..0=0x12345678\nbar 31..0=0x12345678\n");
    assert_eq!(name, "bar");
    assert_eq!(error, EncodingError::EncodingCollision { other: "foo".into() });
}

#[test]
fn pseudo_sharing_bits_with_its_expansion_compiles() {
    let table = compile_str(
        "\
addi rd rs1 imm12 14..12=0 6..2=0x04 1..0=3
@mv rd rs1 31..20=0 14..12=0 6..2=0x04 1..0=3
",
    )
    .expect("pseudo is exempt from collision checks");
    assert_eq!(table.len(), 2);
    assert!(table.get("mv").expect("mv recorded").is_pseudo);
    assert!(table.verify().is_ok());
}

#[test]
fn real_instruction_after_pseudo_is_not_blocked_by_it() {
    let table = compile_str(
        "\
@nop 31..0=0x13
addi rd rs1 imm12 14..12=0 6..2=0x04 1..0=3
",
    )
    .expect("pseudo records never block later definitions");
    assert_eq!(table.all_instructions().collect::<Vec<_>>(), ["nop", "addi"]);
}

#[test]
fn compressed_words_are_accepted() {
    let table = compile_str("c.nop 15..13=0 12=0 11..7=0 6..2=0 1..0=1").expect("c.nop compiles");
    let record = table.get("c.nop").expect("c.nop recorded");
    assert_eq!(record.format, WordFormat::Compressed);
    assert_eq!(record.encoding.mask, 0x0000_FFFF);
    assert_eq!(record.encoding.match_value, 0x0000_0001);
}

#[test]
fn every_accepted_record_covers_a_whole_word() {
    let table = compile_str(
        "\
lui rd imm20 6..2=0x0D 1..0=3
jal rd jimm20 6..2=0x1b 1..0=3
fence.tso 31..28=8 27..24=3 23..20=3 19..15=ignore 14..12=0 11..7=ignore 6..2=0x03 1..0=3
",
    )
    .expect("listing compiles");
    for record in &table {
        assert_eq!(record.coverage(), record.format.coverage(), "{}", record.name);
    }
    let fence = table.get("fence.tso").expect("fence.tso recorded");
    assert_eq!(fence.ignored_ranges.len(), 2);
    assert_eq!(fence.mask() & 0x000F_8F80, 0);
}

#[test]
fn rejects_partial_coverage() {
    let (name, error) = first_error("half rd 6..0=0x33");
    assert_eq!(name, "half");
    assert_eq!(
        error,
        EncodingError::IncompleteCoverage {
            coverage: 0x0000_0FFF
        }
    );
}

#[test]
fn rejects_overlapping_tokens() {
    let (_, error) = first_error("xc.bad rd 5=1 11..7=0");
    assert!(matches!(error, EncodingError::Overspecified { .. }));
}

#[test]
fn rejects_reversed_range_with_oversized_value() {
    let (_, error) = first_error("x 0..3=16");
    assert!(matches!(error, EncodingError::BadValue { .. }));
}

#[test]
fn duplicate_definitions_are_rejected() {
    let (_, error) = first_error(
        "\
add rd rs1 rs2 31..25=0 14..12=0 6..2=0x0C 1..0=3
add rd rs1 rs2 31..25=0 14..12=0 6..2=0x0C 1..0=3
",
    );
    assert_eq!(error, EncodingError::EncodingCollision { other: "add".into() });

    let (name, error) = first_error(
        "\
@mv rd rs1 31..20=0 14..12=0 6..2=0x04 1..0=3
@mv rd rs1 31..20=1 14..12=0 6..2=0x04 1..0=3
",
    );
    assert_eq!(name, "mv");
    assert_eq!(error, EncodingError::DuplicateName);
}

#[test]
fn fail_fast_stops_at_first_error_with_location() {
    let src = "\
# header comment

ok rd rs1 imm12 14..12=0 6..0=0x13
bad rd 6..0=0x33
worse zz 31..0=0
";
    match OpcodeLoader::new().load_str("rv.opcodes", src) {
        Err(OpcodeError::Encoding {
            instruction, span, ..
        }) => {
            assert_eq!(instruction, "bad");
            let span = span.expect("span");
            assert_eq!(span.start.line, 4);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn collect_all_reports_every_failing_line() {
    let src = "\
ok rd rs1 imm12 14..12=0 6..0=0x13
bad rd 6..0=0x33
worse zz 31..0=0
clash rd rs1 imm12 14..12=0 6..0=0x13
";
    let loader = OpcodeLoader::with_options(CompileOptions::collect_all());
    match loader.load_str("rv.opcodes", src) {
        Err(OpcodeError::Diagnostics { diagnostics }) => {
            let codes: Vec<_> = diagnostics.iter().map(|diag| diag.code).collect();
            assert_eq!(
                codes,
                ["coverage.incomplete", "parse.unknown-token", "collision.overlap"]
            );
            assert_eq!(diagnostics[2].phase, DiagnosticPhase::Collision);
            assert_eq!(diagnostics[2].instruction.as_deref(), Some("clash"));
            let lines: Vec<_> = diagnostics
                .iter()
                .map(|diag| diag.span.as_ref().expect("span").start.line)
                .collect();
            assert_eq!(lines, [2, 3, 4]);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn collect_all_succeeds_on_a_clean_listing() {
    let loader = OpcodeLoader::with_options(CompileOptions::collect_all());
    let compilation = loader
        .load_str("rv.opcodes", "@a 31..0=1\n@b 31..1=ignore 0=1\n")
        .expect("pseudo-only listing compiles");
    assert_eq!(compilation.table.len(), 2);
    assert_eq!(compilation.warnings.len(), 1);
    assert_eq!(compilation.warnings[0].code, "collision.pseudo-overlap");
    assert_eq!(compilation.warnings[0].instruction.as_deref(), Some("b"));
}

#[test]
fn same_input_yields_same_fingerprint() {
    let src = "\
addi rd rs1 imm12 14..12=0 6..2=0x04 1..0=3
@mv rd rs1 31..20=0 14..12=0 6..2=0x04 1..0=3
";
    let first = compile_str(src).expect("compiles");
    let second = compile_str(src).expect("compiles");
    assert_eq!(first.fingerprint(), second.fingerprint());

    let reordered = compile_str(
        "\
@mv rd rs1 31..20=0 14..12=0 6..2=0x04 1..0=3
addi rd rs1 imm12 14..12=0 6..2=0x04 1..0=3
",
    )
    .expect("compiles");
    assert_ne!(first.fingerprint(), reordered.fingerprint());
}

#[test]
fn empty_listing_produces_empty_table() {
    let table = compile_str("# nothing here\n\n   \n").expect("empty listing compiles");
    assert!(table.is_empty());
    assert_eq!(table.fingerprint(), InstructionTable::new().fingerprint());
}
