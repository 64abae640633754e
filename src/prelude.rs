// prelude.rs - Convenient re-exports for the common API surface.
//
//! # Prelude
//!
//! ```no_run
//! use unicol::prelude::*;
//!
//! let table = load_from_directory("/usr/share/unicode").unwrap();
//! let mut state = ScanState::default();
//! let result = scan_text(&table, &mut state, "hello".as_bytes(), 80, &mut NullReceiver);
//! assert_eq!(result.count, 5);
//! ```

pub use crate::error::UcdError;
pub use crate::loader::{load_from_directory, UcdLoader};
pub use crate::scan::{
    scan_text, GraphemeClusterReceiver, NullReceiver, RecordingReceiver, ScanEvent, ScanResult,
    ScanState,
};
pub use crate::table::{CodepointPropertiesTable, BLOCK_SIZE};
pub use crate::ucd::{Codepoint, CodepointProperties};
