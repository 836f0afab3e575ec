//! Configuration comparison.
//!
//! Two pure functions over the golden image (`a`, the reference) and the
//! running config (`b`, the candidate): a character-level similarity ratio
//! and a line-level list of changed lines. Both are whitespace-sensitive
//! and deterministic; no normalization is applied, callers canonicalize
//! beforehand if they need to.

mod matcher;

pub use matcher::{Match, OpTag, Opcode, SequenceMatcher};

/// Similarity ratio between the two full texts, in `[0, 1]`.
///
/// Computed from the total length of the longest matching blocks common to
/// both inputs: `2 * matched / (len(a) + len(b))`. Multiply by 100 for the
/// percentage reported to the monitoring server.
pub fn similarity_ratio(golden: &str, running: &str) -> f64 {
    let a: Vec<char> = golden.chars().collect();
    let b: Vec<char> = running.chars().collect();
    SequenceMatcher::new(&a, &b).ratio()
}

/// Lines present in the running config but not matched in the golden image,
/// in running-config order.
///
/// Pure deletions (lines present only in the golden image) are not
/// surfaced: the point is to flag new or changed values, not removed ones.
pub fn changed_lines(golden: &str, running: &str) -> Vec<String> {
    let a: Vec<&str> = golden.split('\n').collect();
    let b: Vec<&str> = running.split('\n').collect();
    let matcher = SequenceMatcher::new(&a, &b);

    let mut changed = Vec::new();
    for op in matcher.opcodes() {
        if matches!(op.tag, OpTag::Insert | OpTag::Replace) {
            changed.extend(b[op.b_start..op.b_end].iter().map(|line| line.to_string()));
        }
    }
    changed
}
