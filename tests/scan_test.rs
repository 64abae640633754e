// scan_test.rs - Integration tests for the column-bounded scanner.
//
// Runs against the fixture table built from testdata/ucd. Byte sequences
// in comments are spelled out where the UTF-8 matters.

mod common;

use common::fixture_table;
use smallvec::SmallVec;
use unicol::scan::{
    scan_text, GraphemeClusterReceiver, NullReceiver, RecordingReceiver, ScanEvent, ScanState,
};
use unicol::utf8::Utf8DecoderState;

fn scan_once(text: &[u8], budget: usize) -> (unicol::scan::ScanResult, Vec<ScanEvent>, ScanState) {
    let mut state = ScanState::default();
    let mut receiver = RecordingReceiver::new();
    let result = scan_text(fixture_table(), &mut state, text, budget, &mut receiver);
    (result, receiver.events, state)
}

// === The concrete scenarios of the scanning contract ===

#[test]
fn ascii_only() {
    let (result, events, state) = scan_once(b"hello", 10);
    assert_eq!(result.count, 5);
    assert_eq!(result.start, 0);
    assert_eq!(result.end, 5);
    assert_eq!(events, vec![ScanEvent::AsciiSequence(b"hello".to_vec())]);
    assert_eq!(state.next, 5);
}

#[test]
fn budget_cuts_mid_ascii() {
    let (result, events, state) = scan_once(b"hello world", 5);
    assert_eq!(result.count, 5);
    assert_eq!(events, vec![ScanEvent::AsciiSequence(b"hello".to_vec())]);
    assert_eq!(state.next, 5);
}

#[test]
fn wide_character_fits() {
    // "a" + U+6F22 (bytes 61 E6 BC A2)
    let (result, events, state) = scan_once(b"a\xE6\xBC\xA2", 3);
    assert_eq!(result.count, 3);
    assert_eq!(state.next, 4);
    // The trailing cluster is still in progress at end of input, so only
    // the ASCII run has reached the receiver.
    assert_eq!(events, vec![ScanEvent::AsciiSequence(b"a".to_vec())]);
}

#[test]
fn wide_cluster_flushes_when_a_break_follows() {
    // U+6F22 twice: the first ideograph is delivered once the second
    // starts a new cluster.
    let (result, events, _state) = scan_once(b"\xE6\xBC\xA2\xE6\xBC\xA2", 10);
    assert_eq!(result.count, 4);
    assert_eq!(
        events,
        vec![ScanEvent::GraphemeCluster {
            bytes: SmallVec::from_slice(b"\xE6\xBC\xA2"),
            width: 2,
        }]
    );
}

#[test]
fn wide_character_does_not_fit() {
    let (result, events, state) = scan_once(b"a\xE6\xBC\xA2", 2);
    assert_eq!(result.count, 1);
    assert_eq!(events, vec![ScanEvent::AsciiSequence(b"a".to_vec())]);
    // The ideograph was rewound, not consumed and not emitted.
    assert_eq!(state.next, 1);
    assert_eq!(result.end, 1);
}

#[test]
fn emoji_with_vs16_fits() {
    // U+2764 U+FE0F (bytes E2 9D A4 EF B8 8F): heart upgraded to 2 columns.
    let (result, events, state) = scan_once(b"\xE2\x9D\xA4\xEF\xB8\x8F", 2);
    assert_eq!(result.count, 2);
    assert_eq!(state.next, 6);
    assert!(events.is_empty()); // no break observed yet
}

#[test]
fn emoji_with_vs16_emits_all_six_bytes() {
    // Followed by an ideograph, the heart cluster arrives as one event
    // carrying all six bytes and the upgraded width.
    let (result, events, _state) = scan_once(b"\xE2\x9D\xA4\xEF\xB8\x8F\xE6\xBC\xA2", 10);
    assert_eq!(
        events,
        vec![ScanEvent::GraphemeCluster {
            bytes: SmallVec::from_slice(b"\xE2\x9D\xA4\xEF\xB8\x8F"),
            width: 2,
        }]
    );
    assert_eq!(result.count, 4);
}

#[test]
fn emoji_with_vs16_overflows() {
    let (result, events, state) = scan_once(b"\xE2\x9D\xA4\xEF\xB8\x8F", 1);
    assert_eq!(result.count, 0);
    assert_eq!(state.next, 0);
    assert_eq!(result.end, 0);
    assert!(events.is_empty());
}

#[test]
fn invalid_utf8_recovers() {
    let (result, events, state) = scan_once(b"\xFFx", 5);
    assert_eq!(result.count, 2);
    assert_eq!(
        events,
        vec![
            ScanEvent::InvalidCluster,
            ScanEvent::AsciiSequence(b"x".to_vec()),
        ]
    );
    assert_eq!(state.next, 2);
}

#[test]
fn partial_utf8_across_calls() {
    let mut state = ScanState::default();
    let mut receiver = RecordingReceiver::new();

    let result = scan_text(fixture_table(), &mut state, b"\xE6\xBC", 5, &mut receiver);
    assert_eq!(result.count, 0);
    assert_eq!(state.utf8.expected_length, 3);
    assert_eq!(state.utf8.current_length, 2);

    // The second call completes the ideograph; its two carried bytes sit
    // before this buffer (the virtual anchor).
    let result = scan_text(fixture_table(), &mut state, b"\xA2", 5, &mut receiver);
    assert_eq!(result.count, 2);
    assert_eq!(result.start, -2);
    assert_eq!(result.end, 1);
    assert_eq!(state.utf8, Utf8DecoderState::default());
    assert_eq!(state.last_codepoint_hint, 0x6F22);

    // A following ideograph in a later call observes the break. The
    // completed cluster's bytes all lived in earlier buffers, so there is
    // no slice left to deliver; its width was already counted.
    let result = scan_text(fixture_table(), &mut state, b"\xE6\xBC\xA2", 5, &mut receiver);
    assert_eq!(result.count, 2);
    assert_eq!(receiver.events.len(), 0);
}

// === Cluster composition ===

#[test]
fn regional_indicator_pair_is_one_narrow_cluster() {
    // U+1F1FA U+1F1F8 followed by an ideograph to force the flush.
    let text = "\u{1F1FA}\u{1F1F8}\u{6F22}".as_bytes();
    let (result, events, _state) = scan_once(text, 10);
    assert_eq!(
        events,
        vec![ScanEvent::GraphemeCluster {
            bytes: SmallVec::from_slice("\u{1F1FA}\u{1F1F8}".as_bytes()),
            width: 1,
        }]
    );
    // Flag pair (1, Neutral EAW) + trailing ideograph (2).
    assert_eq!(result.count, 3);
}

#[test]
fn hangul_jamo_join_into_one_wide_cluster() {
    // L (U+1100, Wide) + V (U+1161) + trailing ideograph.
    let text = "\u{1100}\u{1161}\u{6F22}".as_bytes();
    let (result, events, _state) = scan_once(text, 10);
    assert_eq!(
        events,
        vec![ScanEvent::GraphemeCluster {
            bytes: SmallVec::from_slice("\u{1100}\u{1161}".as_bytes()),
            width: 2,
        }]
    );
    assert_eq!(result.count, 4);
}

#[test]
fn combining_mark_extends_a_complex_base() {
    // U+00E9 + U+0301: the mark joins the cluster, width stays 1.
    let (result, _events, state) = scan_once("\u{E9}\u{301}".as_bytes(), 10);
    assert_eq!(result.count, 1);
    assert_eq!(state.next, 4);
}

#[test]
fn combining_mark_after_ascii_counts_separately() {
    // The ASCII fast path has already delivered "e" when the mark arrives,
    // so the mark starts its own cluster: two columns total.
    let (result, events, _state) = scan_once("e\u{301}".as_bytes(), 10);
    assert_eq!(result.count, 2);
    assert_eq!(events, vec![ScanEvent::AsciiSequence(b"e".to_vec())]);
}

#[test]
fn fullwidth_and_halfwidth_forms() {
    // U+FF01 FULLWIDTH EXCLAMATION MARK is 2 columns; U+20A9 WON SIGN
    // (Halfwidth) and U+00A1 (Ambiguous) are 1.
    let (result, _events, _state) = scan_once("\u{FF01}".as_bytes(), 10);
    assert_eq!(result.count, 2);
    let (result, _events, _state) = scan_once("\u{20A9}".as_bytes(), 10);
    assert_eq!(result.count, 1);
    let (result, _events, _state) = scan_once("\u{A1}".as_bytes(), 10);
    assert_eq!(result.count, 1);
}

#[test]
fn control_byte_terminates_the_scan() {
    let (result, events, state) = scan_once(b"ab\x1b[31m", 10);
    assert_eq!(result.count, 2);
    assert_eq!(events, vec![ScanEvent::AsciiSequence(b"ab".to_vec())]);
    assert_eq!(state.next, 2);
}

#[test]
fn control_byte_inside_partial_sequence() {
    let mut state = ScanState::default();
    let mut receiver = RecordingReceiver::new();
    scan_text(fixture_table(), &mut state, b"\xE6\xBC", 5, &mut receiver);

    let result = scan_text(fixture_table(), &mut state, b"\n", 5, &mut receiver);
    assert_eq!(result.count, 1);
    assert_eq!(receiver.events, vec![ScanEvent::InvalidCluster]);
    // The decoder was reset; the control byte itself was not consumed.
    assert_eq!(state.utf8, Utf8DecoderState::default());
    assert_eq!(state.next, 0);
}

// === Invariants ===

#[test]
fn count_stays_within_budget() {
    let text = "ab\u{6F22}c\u{1F600}\u{2764}\u{FE0F}d\u{FF01}".as_bytes();
    for budget in 0..14 {
        let (result, _events, _state) = scan_once(text, budget);
        assert!(
            result.count <= budget,
            "budget {budget} produced count {}",
            result.count
        );
    }
}

#[test]
fn offsets_are_ordered() {
    let text = "x\u{2764}\u{FE0F}\u{6F22}y".as_bytes();
    for budget in 0..10 {
        let (result, _events, state) = scan_once(text, budget);
        assert!(result.start <= result.end, "budget {budget}");
        assert!(result.end <= state.next as isize, "budget {budget}");
    }
}

#[test]
fn emitted_bytes_reassemble_the_consumed_text() {
    // One complex run of three ideographs followed by ASCII. Every emitted
    // slice is exact; the final in-progress cluster (the third ideograph,
    // interrupted by 'x') is counted but never emitted.
    let text = b"\xE6\xBC\xA2\xE6\xBC\xA3\xE6\xBC\xA4x";
    let (result, events, state) = scan_once(text, 100);
    assert_eq!(result.count, 7);
    assert_eq!(state.next, 10);

    let mut emitted: Vec<u8> = Vec::new();
    let mut width_sum = 0;
    for event in &events {
        match event {
            ScanEvent::AsciiSequence(bytes) => {
                width_sum += bytes.len();
                emitted.extend_from_slice(bytes);
            }
            ScanEvent::GraphemeCluster { bytes, width } => {
                width_sum += width;
                emitted.extend_from_slice(bytes);
            }
            ScanEvent::InvalidCluster => width_sum += 1,
        }
    }
    assert_eq!(emitted, b"\xE6\xBC\xA2\xE6\xBC\xA3x");
    // count = emitted widths + the in-progress cluster's width.
    assert_eq!(result.count, width_sum + 2);
}

#[test]
fn line_wrapping_preserves_total_width() {
    // Re-invoking with a fresh budget per line from state.next consumes
    // everything and the per-line counts sum to the total display width.
    let text = "hello\u{6F22}\u{5B57}world\u{1F642}\u{1F642}end".as_bytes();
    let total_width = 5 + 2 + 2 + 5 + 2 + 2 + 3;

    let mut remaining = text;
    let mut consumed_columns = 0;
    let mut lines = 0;
    while !remaining.is_empty() {
        let mut state = ScanState::default();
        let result = scan_text(fixture_table(), &mut state, remaining, 10, &mut NullReceiver);
        assert!(result.count <= 10);
        assert!(state.next > 0, "no forward progress");
        consumed_columns += result.count;
        remaining = &remaining[state.next..];
        lines += 1;
        assert!(lines < 100);
    }
    assert_eq!(consumed_columns, total_width);
    assert_eq!(lines, 3);
}

#[test]
fn null_receiver_matches_recording_receiver_counts() {
    let text = "mixed \u{6F22}\u{2764}\u{FE0F} content \u{1F600}!".as_bytes();
    let mut state = ScanState::default();
    let with_null = scan_text(fixture_table(), &mut state, text, 50, &mut NullReceiver);

    let mut state = ScanState::default();
    let mut recorder = RecordingReceiver::new();
    let with_recorder = scan_text(fixture_table(), &mut state, text, 50, &mut recorder);

    assert_eq!(with_null, with_recorder);
}

#[test]
fn custom_receiver_observes_widths() {
    // A receiver that tallies columns the way a terminal cell filler
    // would; ASCII bytes are one column each.
    struct Tally {
        columns: usize,
    }
    impl GraphemeClusterReceiver for Tally {
        fn receive_ascii_sequence(&mut self, bytes: &[u8]) {
            self.columns += bytes.len();
        }
        fn receive_grapheme_cluster(&mut self, _bytes: &[u8], width: usize) {
            self.columns += width;
        }
        fn receive_invalid_grapheme_cluster(&mut self) {
            self.columns += 1;
        }
    }

    // Ends in ASCII so no cluster is left in flight except ones already
    // counted; the tally then matches result.count exactly.
    let text = "ab\u{6F22}\u{6F22}cd".as_bytes();
    let mut state = ScanState::default();
    let mut tally = Tally { columns: 0 };
    let result = scan_text(fixture_table(), &mut state, text, 100, &mut tally);
    assert_eq!(result.count, 8);
    // The second ideograph's cluster was cut off by 'c' and never emitted:
    // its two columns are in count but not in the tally.
    assert_eq!(tally.columns, 6);
}
