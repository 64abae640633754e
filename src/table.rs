// table.rs - Two-stage compact codepoint property table.
//
// The codepoint space [0, 0x110000) is partitioned into 256-codepoint
// blocks. stage1 maps a block number to a deduplicated block layout in
// stage2; stage2 maps the codepoint's offset within the block to a
// deduplicated property record. Lookup is two indexed loads.

use std::sync::OnceLock;

use crate::ucd::{Codepoint, CodepointProperties, CODEPOINT_LIMIT};

/// Number of codepoints per block. Must be a power of two.
pub const BLOCK_SIZE: usize = 256;

/// Number of blocks covering the full codepoint space.
pub const BLOCK_COUNT: usize = CODEPOINT_LIMIT / BLOCK_SIZE;

/// Immutable two-stage map from codepoint to [`CodepointProperties`].
///
/// Built once by [`crate::loader`] and then only read. Shareable across
/// threads without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointPropertiesTable {
    stage1: Vec<u16>,
    stage2: Vec<u16>,
    properties: Vec<CodepointProperties>,
}

impl CodepointPropertiesTable {
    pub(crate) fn from_parts(
        stage1: Vec<u16>,
        stage2: Vec<u16>,
        properties: Vec<CodepointProperties>,
    ) -> CodepointPropertiesTable {
        debug_assert_eq!(stage1.len(), BLOCK_COUNT);
        debug_assert_eq!(stage2.len() % BLOCK_SIZE, 0);
        CodepointPropertiesTable {
            stage1,
            stage2,
            properties,
        }
    }

    /// Properties of `codepoint`, which must be below 0x110000.
    #[inline]
    pub fn lookup(&self, codepoint: Codepoint) -> &CodepointProperties {
        let codepoint = codepoint as usize;
        debug_assert!(codepoint < CODEPOINT_LIMIT);
        let block = self.stage1[codepoint / BLOCK_SIZE] as usize;
        let index = self.stage2[block * BLOCK_SIZE + codepoint % BLOCK_SIZE] as usize;
        &self.properties[index]
    }

    /// The block-number indirection array. Length is [`BLOCK_COUNT`].
    pub fn stage1(&self) -> &[u16] {
        &self.stage1
    }

    /// The per-block property indices. Length is a multiple of
    /// [`BLOCK_SIZE`]; each chunk is one unique block layout.
    pub fn stage2(&self) -> &[u16] {
        &self.stage2
    }

    /// The deduplicated property records.
    pub fn properties(&self) -> &[CodepointProperties] {
        &self.properties
    }
}

static SHARED_TABLE: OnceLock<CodepointPropertiesTable> = OnceLock::new();

/// Installs `table` as the process-wide shared instance and returns a
/// `'static` reference to it. If a table was installed before, that earlier
/// table wins and is returned; the argument is dropped.
pub fn install_shared(table: CodepointPropertiesTable) -> &'static CodepointPropertiesTable {
    SHARED_TABLE.get_or_init(|| table)
}

/// The process-wide shared table, if one has been installed.
pub fn shared() -> Option<&'static CodepointPropertiesTable> {
    SHARED_TABLE.get()
}
