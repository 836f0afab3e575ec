//! Longest-matching-blocks sequence alignment.
//!
//! The matcher repeatedly finds the longest contiguous run of elements
//! common to both sequences, then recurses on the unmatched stretches to
//! the left and right of it. Ties are broken toward the earliest start in
//! the reference sequence `a`, then in the candidate `b`, so results are
//! stable across runs and compatible with baselines scored by the
//! original tooling.

use std::collections::HashMap;
use std::hash::Hash;

/// A maximal matching run: `a[a_start..a_start + len] == b[b_start..b_start + len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

/// Alignment operation between two half-open windows of `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpTag {
    /// `a[a_start..a_end] == b[b_start..b_end]`
    Equal,
    /// `b[b_start..b_end]` has no counterpart in `a`
    Insert,
    /// `a[a_start..a_end]` has no counterpart in `b`
    Delete,
    /// `a[a_start..a_end]` was rewritten as `b[b_start..b_end]`
    Replace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub tag: OpTag,
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

/// Pairwise sequence matcher over any hashable element type.
pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    /// Positions of each element value within `b`, in ascending order.
    b_index: HashMap<T, Vec<usize>>,
}

impl<'a, T: Copy + Eq + Hash> SequenceMatcher<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let mut b_index: HashMap<T, Vec<usize>> = HashMap::new();
        for (j, &item) in b.iter().enumerate() {
            b_index.entry(item).or_default().push(j);
        }
        Self { a, b, b_index }
    }

    /// Longest contiguous match inside `a[a_lo..a_hi]` x `b[b_lo..b_hi]`.
    ///
    /// Returns a zero-length match anchored at the window start when the
    /// windows share no elements.
    fn longest_match(&self, a_lo: usize, a_hi: usize, b_lo: usize, b_hi: usize) -> Match {
        let mut best = Match {
            a_start: a_lo,
            b_start: b_lo,
            len: 0,
        };
        // run_len[j] = length of the matching run ending at b[j] for the
        // previous row of a.
        let mut run_len: HashMap<usize, usize> = HashMap::new();
        for i in a_lo..a_hi {
            let mut next_run: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b_index.get(&self.a[i]) {
                for &j in positions {
                    if j < b_lo {
                        continue;
                    }
                    if j >= b_hi {
                        break;
                    }
                    let len = if j == 0 {
                        1
                    } else {
                        run_len.get(&(j - 1)).copied().unwrap_or(0) + 1
                    };
                    next_run.insert(j, len);
                    // Strict comparison keeps the earliest match on ties.
                    if len > best.len {
                        best = Match {
                            a_start: i + 1 - len,
                            b_start: j + 1 - len,
                            len,
                        };
                    }
                }
            }
            run_len = next_run;
        }
        best
    }

    /// All matching runs in sequence order, adjacent runs merged, terminated
    /// by a zero-length sentinel at `(a.len(), b.len())`.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let mut windows = vec![(0, self.a.len(), 0, self.b.len())];
        let mut raw: Vec<Match> = Vec::new();
        while let Some((a_lo, a_hi, b_lo, b_hi)) = windows.pop() {
            let m = self.longest_match(a_lo, a_hi, b_lo, b_hi);
            if m.len == 0 {
                continue;
            }
            if a_lo < m.a_start && b_lo < m.b_start {
                windows.push((a_lo, m.a_start, b_lo, m.b_start));
            }
            if m.a_start + m.len < a_hi && m.b_start + m.len < b_hi {
                windows.push((m.a_start + m.len, a_hi, m.b_start + m.len, b_hi));
            }
            raw.push(m);
        }
        raw.sort_by_key(|m| (m.a_start, m.b_start));

        let mut blocks: Vec<Match> = Vec::new();
        for m in raw {
            match blocks.last_mut() {
                Some(last)
                    if last.a_start + last.len == m.a_start
                        && last.b_start + last.len == m.b_start =>
                {
                    last.len += m.len;
                }
                _ => blocks.push(m),
            }
        }
        blocks.push(Match {
            a_start: self.a.len(),
            b_start: self.b.len(),
            len: 0,
        });
        blocks
    }

    /// Ratio of matched elements to total elements, in `[0, 1]`.
    ///
    /// Two empty sequences compare as identical.
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matched: usize = self.matching_blocks().iter().map(|m| m.len).sum();
        2.0 * matched as f64 / total as f64
    }

    /// Ordered edit script turning `a` into `b`.
    pub fn opcodes(&self) -> Vec<Opcode> {
        let mut out = Vec::new();
        let (mut i, mut j) = (0, 0);
        for m in self.matching_blocks() {
            let tag = if i < m.a_start && j < m.b_start {
                Some(OpTag::Replace)
            } else if i < m.a_start {
                Some(OpTag::Delete)
            } else if j < m.b_start {
                Some(OpTag::Insert)
            } else {
                None
            };
            if let Some(tag) = tag {
                out.push(Opcode {
                    tag,
                    a_start: i,
                    a_end: m.a_start,
                    b_start: j,
                    b_end: m.b_start,
                });
            }
            if m.len > 0 {
                out.push(Opcode {
                    tag: OpTag::Equal,
                    a_start: m.a_start,
                    a_end: m.a_start + m.len,
                    b_start: m.b_start,
                    b_end: m.b_start + m.len,
                });
            }
            i = m.a_start + m.len;
            j = m.b_start + m.len;
        }
        out
    }
}
