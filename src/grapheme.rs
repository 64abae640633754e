// grapheme.rs - Pairwise grapheme cluster boundary predicate.
//
// Implements the Grapheme Cluster Boundary rules of UAX #29 over the break
// classes stored in the property table, with the two standard pairwise
// simplifications:
//   GB11:      ZWJ x Extended_Pictographic
//              (instead of \p{ExtPict} Extend* ZWJ x \p{ExtPict})
//   GB12/13:   RI x RI never breaks, without counting preceding RIs
// Both keep valid emoji sequences intact; degenerate inputs (an odd run of
// regional indicators) join greedily instead of alternating.

use crate::table::CodepointPropertiesTable;
use crate::ucd::{Codepoint, GraphemeClusterBreak};

/// True when a grapheme cluster boundary lies between `prev` and `next`.
///
/// `prev == 0` is the start-of-stream sentinel and always breaks: there is
/// no current cluster to extend.
pub fn breakable(table: &CodepointPropertiesTable, prev: Codepoint, next: Codepoint) -> bool {
    use GraphemeClusterBreak::*;

    // GB1: break before the first codepoint of the stream.
    if prev == 0 {
        return true;
    }

    let prev_props = table.lookup(prev);
    let next_props = table.lookup(next);
    let p = prev_props.grapheme_cluster_break;
    let n = next_props.grapheme_cluster_break;

    // GB3: do not break between a CR and LF.
    if p == CR && n == LF {
        return false;
    }
    // GB4, GB5: otherwise, break before and after controls.
    if matches!(p, Control | CR | LF) || matches!(n, Control | CR | LF) {
        return true;
    }
    // GB6: do not break Hangul syllable sequences.
    if p == L && matches!(n, L | V | LV | LVT) {
        return false;
    }
    // GB7
    if matches!(p, LV | V) && matches!(n, V | T) {
        return false;
    }
    // GB8
    if matches!(p, LVT | T) && n == T {
        return false;
    }
    // GB9: do not break before extending characters or ZWJ.
    if matches!(n, Extend | ZWJ) {
        return false;
    }
    // GB9a: do not break before SpacingMarks.
    if n == SpacingMark {
        return false;
    }
    // GB9b: do not break after Prepend characters.
    if p == Prepend {
        return false;
    }
    // GB11, pairwise form.
    if p == ZWJ && next_props.extended_pictographic() {
        return false;
    }
    // GB12/GB13, greedy form.
    if p == RegionalIndicator && n == RegionalIndicator {
        return false;
    }

    // GB999: otherwise, break everywhere.
    true
}
