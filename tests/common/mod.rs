use std::path::PathBuf;

use ise_opcodes::encoding::InstructionTable;
use ise_opcodes::loader::opcodes::{Compilation, OpcodeLoader};

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("defs").join(name)
}

pub fn load_fixture(name: &str) -> Compilation {
    OpcodeLoader::new()
        .load_file(fixture(name))
        .unwrap_or_else(|err| panic!("{name} should compile: {err}"))
}

#[allow(dead_code)]
pub fn fixture_table(name: &str) -> InstructionTable {
    load_fixture(name).table
}
