use smallvec::SmallVec;

/// Default length of a rolling row in a matrix of edit operations. When a
/// row fits, it lives on the stack; otherwise the buffer spills to a single
/// heap allocation that is released before the metric returns. Debug builds
/// use a capacity of 1 so the spill path is exercised by the tests.
#[cfg(not(debug_assertions))]
pub(crate) const DEFAULT_COLUMN_LEN: usize = 256;
#[cfg(debug_assertions)]
pub(crate) const DEFAULT_COLUMN_LEN: usize = 1;

pub(crate) type Column = SmallVec<[i32; DEFAULT_COLUMN_LEN]>;
pub(crate) type MatchFlags = SmallVec<[bool; DEFAULT_COLUMN_LEN * 2]>;

pub(crate) fn in_range(len: usize) -> bool {
    len <= crate::MAX_SEQ_LEN
}

/// Orders a pair of sequences so that the first one is at least as long as
/// the second.
pub(crate) fn order_by_len<'a>(
    seq1: &'a [char],
    seq2: &'a [char],
) -> (&'a [char], &'a [char]) {
    if seq1.len() < seq2.len() {
        (seq2, seq1)
    } else {
        (seq1, seq2)
    }
}

/// Strips the common prefix and the common suffix of two sequences.
/// `seq1` must not be shorter than `seq2`.
pub(crate) fn strip_common_affixes<'a>(
    seq1: &'a [char],
    seq2: &'a [char],
) -> (&'a [char], &'a [char]) {
    debug_assert!(seq1.len() >= seq2.len());

    let mut start = 0;
    while start < seq2.len() && seq1[start] == seq2[start] {
        start += 1;
    }

    let mut end1 = seq1.len();
    let mut end2 = seq2.len();
    while end2 > start && seq1[end1 - 1] == seq2[end2 - 1] {
        end1 -= 1;
        end2 -= 1;
    }

    (&seq1[start..end1], &seq2[start..end2])
}

/// True when the cell `(i, j)` closes an adjacent transposition, with `i`
/// and `j` one-based as in the distance recurrences.
pub(crate) fn transposed(seq1: &[char], seq2: &[char], i: usize, j: usize) -> bool {
    i > 1 && j > 1 && seq1[i - 2] == seq2[j - 1] && seq1[i - 1] == seq2[j - 2]
}
