// loader.rs - Builds the two-stage property table from UCD text files.
//
// Line grammar (shared by every file we read):
//   HHHH           ; Value   # comment
//   HHHH..HHHH     ; Value   # comment
// Comments run from '#' to end of line. Blank lines, malformed lines and
// unknown property values are skipped. Extra semicolon-separated fields
// after the value are ignored.

use std::io;
use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::error::UcdError;
use crate::table::{CodepointPropertiesTable, BLOCK_COUNT, BLOCK_SIZE};
use crate::ucd::{
    emoji_segmentation_category, Codepoint, CodepointProperties, EastAsianWidth, GeneralCategory,
    GraphemeClusterBreak, PropertyFlags, Script, CODEPOINT_LIMIT,
};

/// Incrementally applies UCD property files to a dense per-codepoint array,
/// then builds the deduplicated two-stage table.
///
/// [`load_from_directory`] drives this against the six standard files; the
/// `load_*` methods also accept file contents directly, which is how the
/// test fixtures use it.
pub struct UcdLoader {
    codepoints: Vec<CodepointProperties>,
}

impl UcdLoader {
    pub fn new() -> UcdLoader {
        UcdLoader {
            codepoints: vec![CodepointProperties::default(); CODEPOINT_LIMIT],
        }
    }

    /// Applies Scripts.txt contents.
    pub fn load_scripts(&mut self, text: &str) {
        let started = Instant::now();
        let codepoints = &mut self.codepoints;
        process_properties(text, |codepoint, value| {
            if let Some(script) = Script::from_name(value) {
                codepoints[codepoint as usize].script = script;
            }
        });
        debug!(elapsed = ?started.elapsed(), "applied script assignments");
    }

    /// Applies DerivedCoreProperties.txt contents. Only Grapheme_Extend is
    /// consumed; every other core property is ignored.
    pub fn load_core_properties(&mut self, text: &str) {
        let started = Instant::now();
        let codepoints = &mut self.codepoints;
        process_properties(text, |codepoint, value| {
            if value == "Grapheme_Extend" {
                codepoints[codepoint as usize].flags |= PropertyFlags::GRAPHEME_EXTEND;
            }
        });
        debug!(elapsed = ?started.elapsed(), "applied core properties");
    }

    /// Applies extracted/DerivedGeneralCategory.txt contents.
    pub fn load_general_categories(&mut self, text: &str) {
        let started = Instant::now();
        let codepoints = &mut self.codepoints;
        process_properties(text, |codepoint, value| {
            if let Some(category) = GeneralCategory::from_abbreviation(value) {
                codepoints[codepoint as usize].general_category = category;
            }
        });
        debug!(elapsed = ?started.elapsed(), "applied general categories");
    }

    /// Applies auxiliary/GraphemeBreakProperty.txt contents.
    pub fn load_grapheme_breaks(&mut self, text: &str) {
        let started = Instant::now();
        let codepoints = &mut self.codepoints;
        process_properties(text, |codepoint, value| {
            if let Some(class) = GraphemeClusterBreak::from_name(value) {
                codepoints[codepoint as usize].grapheme_cluster_break = class;
            }
        });
        debug!(elapsed = ?started.elapsed(), "applied grapheme break classes");
    }

    /// Applies EastAsianWidth.txt contents.
    pub fn load_east_asian_widths(&mut self, text: &str) {
        let started = Instant::now();
        let codepoints = &mut self.codepoints;
        process_properties(text, |codepoint, value| {
            if let Some(width) = EastAsianWidth::from_abbreviation(value) {
                codepoints[codepoint as usize].east_asian_width = width;
            }
        });
        debug!(elapsed = ?started.elapsed(), "applied East Asian widths");
    }

    /// Applies emoji/emoji-data.txt contents. Flags are OR-merged.
    pub fn load_emoji_data(&mut self, text: &str) {
        let started = Instant::now();
        let codepoints = &mut self.codepoints;
        process_properties(text, |codepoint, value| {
            if let Some(flag) = PropertyFlags::from_emoji_property(value) {
                codepoints[codepoint as usize].flags |= flag;
            }
        });
        debug!(elapsed = ?started.elapsed(), "applied emoji data");
    }

    /// Derives the emoji segmentation categories, deduplicates blocks and
    /// property records, and produces the immutable table.
    pub fn build(mut self) -> CodepointPropertiesTable {
        let started = Instant::now();
        for codepoint in 0..CODEPOINT_LIMIT {
            self.codepoints[codepoint].emoji_segmentation_category =
                emoji_segmentation_category(codepoint as Codepoint, &self.codepoints[codepoint]);
        }
        debug!(elapsed = ?started.elapsed(), "derived emoji segmentation categories");

        let started = Instant::now();
        let mut stage1 = vec![0u16; BLOCK_COUNT];
        let mut stage2: Vec<u16> = Vec::new();
        let mut properties: Vec<CodepointProperties> = Vec::new();

        for block in 0..BLOCK_COUNT {
            let block_start = block * BLOCK_SIZE;
            stage1[block] = match self.find_same_block(block_start) {
                Some(earlier_block) => stage1[earlier_block],
                None => {
                    let stage2_block = stage2.len() / BLOCK_SIZE;
                    assert!(stage2_block <= u16::MAX as usize);
                    for codepoint in block_start..block_start + BLOCK_SIZE {
                        stage2.push(get_or_create_index_to_property(
                            &mut properties,
                            self.codepoints[codepoint],
                        ));
                    }
                    stage2_block as u16
                }
            };
        }
        debug!(
            elapsed = ?started.elapsed(),
            stage2_blocks = stage2.len() / BLOCK_SIZE,
            unique_properties = properties.len(),
            "built two-stage property table"
        );

        let table = CodepointPropertiesTable::from_parts(stage1, stage2, properties);
        #[cfg(debug_assertions)]
        self.verify(&table);
        table
    }

    /// Earliest earlier block whose 256 records equal the block starting at
    /// `block_start`, if any.
    fn find_same_block(&self, block_start: usize) -> Option<usize> {
        (0..block_start)
            .step_by(BLOCK_SIZE)
            .find(|&other_start| self.is_same_block(other_start, block_start))
            .map(|other_start| other_start / BLOCK_SIZE)
    }

    fn is_same_block(&self, a: usize, b: usize) -> bool {
        self.codepoints[a..a + BLOCK_SIZE] == self.codepoints[b..b + BLOCK_SIZE]
    }

    #[cfg(debug_assertions)]
    fn verify(&self, table: &CodepointPropertiesTable) {
        for codepoint in 0..CODEPOINT_LIMIT {
            let expected = &self.codepoints[codepoint];
            let actual = table.lookup(codepoint as Codepoint);
            assert!(
                expected == actual,
                "U+{:X} mismatch in properties. Expected: {:?}; Actual: {:?}",
                codepoint,
                expected,
                actual
            );
        }
    }
}

impl Default for UcdLoader {
    fn default() -> UcdLoader {
        UcdLoader::new()
    }
}

fn get_or_create_index_to_property(
    properties: &mut Vec<CodepointProperties>,
    record: CodepointProperties,
) -> u16 {
    if let Some(index) = properties.iter().position(|existing| *existing == record) {
        return index as u16;
    }
    properties.push(record);
    let index = properties.len() - 1;
    assert!(index <= u16::MAX as usize);
    index as u16
}

/// Builds a table from the six standard UCD files under `dir`:
/// `Scripts.txt`, `DerivedCoreProperties.txt`,
/// `extracted/DerivedGeneralCategory.txt`,
/// `auxiliary/GraphemeBreakProperty.txt`, `EastAsianWidth.txt`, and
/// `emoji/emoji-data.txt`. A missing or unreadable file is fatal.
pub fn load_from_directory<P: AsRef<Path>>(dir: P) -> Result<CodepointPropertiesTable, UcdError> {
    let dir = dir.as_ref();
    let mut loader = UcdLoader::new();
    loader.load_scripts(&read_ucd_file(dir, "Scripts.txt")?);
    loader.load_core_properties(&read_ucd_file(dir, "DerivedCoreProperties.txt")?);
    loader.load_general_categories(&read_ucd_file(dir, "extracted/DerivedGeneralCategory.txt")?);
    loader.load_grapheme_breaks(&read_ucd_file(dir, "auxiliary/GraphemeBreakProperty.txt")?);
    loader.load_east_asian_widths(&read_ucd_file(dir, "EastAsianWidth.txt")?);
    loader.load_emoji_data(&read_ucd_file(dir, "emoji/emoji-data.txt")?);
    Ok(loader.build())
}

fn read_ucd_file(dir: &Path, name: &str) -> Result<String, UcdError> {
    let path = dir.join(name);
    debug!(path = %path.display(), "loading UCD file");
    std::fs::read_to_string(&path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            UcdError::MissingFile { path, source }
        } else {
            UcdError::Read { path, source }
        }
    })
}

/// Parses `text` line by line and invokes `apply` once per codepoint of
/// every well-formed data line.
fn process_properties<F>(text: &str, mut apply: F)
where
    F: FnMut(Codepoint, &str),
{
    for line in text.lines() {
        let line = match line.find('#') {
            Some(comment) => &line[..comment],
            None => line,
        };
        let mut fields = line.split(';');
        let Some(codepoints) = fields.next() else {
            continue;
        };
        let Some(value) = fields.next() else {
            continue; // no value field at all
        };
        let Some((first, last)) = parse_codepoint_or_range(codepoints.trim()) else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        let last = last.min(CODEPOINT_LIMIT as u32 - 1);
        for codepoint in first..=last {
            apply(codepoint, value);
        }
    }
}

/// Parses `HHHH` or `HHHH..HHHH` into an inclusive codepoint range.
fn parse_codepoint_or_range(field: &str) -> Option<(u32, u32)> {
    if let Some((first, last)) = field.split_once("..") {
        let first = u32::from_str_radix(first, 16).ok()?;
        let last = u32::from_str_radix(last, 16).ok()?;
        if first > last || first >= CODEPOINT_LIMIT as u32 {
            return None;
        }
        Some((first, last))
    } else {
        let codepoint = u32::from_str_radix(field, 16).ok()?;
        if codepoint >= CODEPOINT_LIMIT as u32 {
            return None;
        }
        Some((codepoint, codepoint))
    }
}
