//! Memoized sequence metrics.
//!
//! A [`Memo`] is bound to one metric and one reference sequence, and
//! amortizes the cost of comparing that reference against a stream of
//! related queries. The full dynamic-programming matrix is retained across
//! calls; when a query shares a prefix with its predecessor, the columns
//! covering that prefix are still valid and only the remaining columns are
//! recomputed. Feeding the queries in sorted order maximizes the reuse.

use crate::utils::{in_range, transposed};
use std::cmp::min;

/// The metrics a [`Memo`] can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Levenshtein,
    Damerau,
    LongestCommonSubstring,
    LongestCommonSubsequence,
}

/// Number of available metrics.
pub const METRIC_NR: usize = 4;

/// A memoized comparator.
///
/// The reference sequence is borrowed, not copied; the query buffer and
/// the matrix are owned and allocated once at construction, and never
/// resized afterwards.
///
/// ```
/// use seqsim::{codepoints, Memo, Metric};
///
/// let reference = codepoints::from_str("expeditor");
/// let mut memo = Memo::new(Metric::LongestCommonSubstring, 50, 0);
/// memo.set_ref(&reference);
///
/// let mut lengths = Vec::new();
/// for word in ["expecting", "expediter", "expeditor", "expel"] {
///     lengths.push(memo.compute(&codepoints::from_str(word)));
/// }
/// assert_eq!(vec![4, 7, 9, 4], lengths);
/// ```
pub struct Memo<'a> {
    metric: Metric,
    /// Matrix dimension, `max_len + 1`.
    mdim: usize,
    /// Maximum allowed distance. Only consulted by Levenshtein and
    /// Damerau.
    max_dist: i32,
    matrix: Vec<i32>,
    reference: Option<&'a [char]>,
    /// The previous query, kept for shared-prefix detection.
    prev: Vec<char>,
}

impl<'a> Memo<'a> {
    /// Creates a comparator for `metric` able to handle sequences of up to
    /// `max_len` codepoints. `max_dist` is the maximum allowed edit
    /// distance (the lower, the faster); it is ignored by the longest
    /// common substring/subsequence metrics.
    pub fn new(metric: Metric, max_len: usize, max_dist: i32) -> Memo<'a> {
        assert!(in_range(max_len), "max_len out of range: {max_len}");

        let mdim = max_len + 1;
        let matrix = match metric {
            Metric::Levenshtein | Metric::Damerau => {
                // identity frontier in row 0 and column 0; these cells are
                // read but never written by compute calls
                let mut matrix = vec![0; mdim * mdim];
                for i in 0..mdim {
                    matrix[i * mdim] = i as i32;
                }
                for j in 1..mdim {
                    matrix[j] = j as i32;
                }
                matrix
            }
            // One additional row below the matrix stores the length of the
            // longest common substring seen up to each column, because the
            // last row does not necessarily contain it.
            Metric::LongestCommonSubstring => vec![0; (mdim + 1) * mdim],
            Metric::LongestCommonSubsequence => vec![0; mdim * mdim],
        };

        Memo {
            metric,
            mdim,
            max_dist,
            matrix,
            reference: None,
            prev: Vec::with_capacity(max_len),
        }
    }

    /// Returns the metric chosen at construction.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Binds the reference sequence. It is not copied; it must stay
    /// available until it is replaced or the comparator is dropped. The
    /// reference can be changed any number of times, but doing so forfeits
    /// the shared-prefix reuse for the next compute call.
    pub fn set_ref(&mut self, reference: &'a [char]) {
        debug_assert!(reference.len() < self.mdim);

        self.reference = Some(reference);
        self.prev.clear();
    }

    /// Compares the reference sequence to a new query.
    ///
    /// For Levenshtein and Damerau, returns `i32::MAX` as soon as the
    /// distance is known to exceed `max_dist`. Panics if no reference has
    /// been set.
    pub fn compute(&mut self, seq: &[char]) -> i32 {
        assert!(seq.len() < self.mdim, "query too long: {}", seq.len());

        match self.metric {
            Metric::Levenshtein => self.compute_distance(seq, false),
            Metric::Damerau => self.compute_distance(seq, true),
            Metric::LongestCommonSubstring => self.compute_substring(seq),
            Metric::LongestCommonSubsequence => self.compute_subsequence(seq),
        }
    }

    fn reference(&self) -> &'a [char] {
        match self.reference {
            Some(reference) => reference,
            None => panic!("reference sequence not set"),
        }
    }

    /// Length of the common prefix of the previous query and the new one.
    /// The matrix columns covering it are valid as they stand.
    fn shared_prefix(&self, seq: &[char]) -> usize {
        self.prev
            .iter()
            .zip(seq)
            .take_while(|(a, b)| a == b)
            .count()
    }

    fn remember(&mut self, seq: &[char], skip: usize) {
        self.prev.truncate(skip);
        self.prev.extend_from_slice(&seq[skip..]);
    }

    fn compute_distance(&mut self, seq2: &[char], transpos: bool) -> i32 {
        let seq1 = self.reference();
        let (len1, len2) = (seq1.len(), seq2.len());
        let mdim = self.mdim;

        if (len1 as i32 - len2 as i32).abs() > self.max_dist {
            return i32::MAX;
        }

        let skip = self.shared_prefix(seq2);
        if skip > 0 {
            // We could repeat this check after computing each column and
            // break out early once no completion can stay within max_dist.
            // Contrary to intuition, that is generally slower than running
            // to the end, at least for the short sequences expected here:
            // tracking the running minimum costs one more check per cell.
            let mut low = i32::MAX;
            for i in 0..=len1 {
                low = min(low, self.matrix[i * mdim + skip]);
            }
            if low > self.max_dist {
                return i32::MAX;
            }
        }
        self.remember(seq2, skip);

        for i in 1..=len1 {
            for j in skip + 1..=len2 {
                let at = i * mdim + j;
                if seq1[i - 1] == seq2[j - 1] {
                    self.matrix[at] = self.matrix[at - mdim - 1];
                } else {
                    let ic = self.matrix[at - 1] + 1;
                    let dc = self.matrix[at - mdim] + 1;
                    let rc = self.matrix[at - mdim - 1] + 1;
                    let mut cell = min(ic, min(dc, rc));
                    if transpos && transposed(seq1, seq2, i, j) {
                        cell = min(cell, self.matrix[at - 2 * mdim - 2] + 1);
                    }
                    self.matrix[at] = cell;
                }
            }
        }

        self.matrix[len1 * mdim + len2]
    }

    // The indices are swapped here: the query walks the rows and the
    // reference walks the columns. The running-maximum row is keyed by
    // query position, which is what makes resuming from `skip` possible.
    fn compute_substring(&mut self, seq2: &[char]) -> i32 {
        let seq1 = self.reference();
        let (len1, len2) = (seq1.len(), seq2.len());
        let mdim = self.mdim;
        let max_lens = mdim * mdim;

        let skip = self.shared_prefix(seq2);
        self.remember(seq2, skip);

        let mut max_len = self.matrix[max_lens + skip];

        for i in skip + 1..=len2 {
            for j in 1..=len1 {
                let at = i * mdim + j;
                if seq1[j - 1] == seq2[i - 1] {
                    let up_left = self.matrix[at - mdim - 1] + 1;
                    self.matrix[at] = up_left;
                    if max_len < up_left {
                        max_len = up_left;
                    }
                } else {
                    self.matrix[at] = 0;
                }
            }
            self.matrix[max_lens + i] = max_len;
        }

        max_len
    }

    fn compute_subsequence(&mut self, seq2: &[char]) -> i32 {
        let seq1 = self.reference();
        let (len1, len2) = (seq1.len(), seq2.len());
        let mdim = self.mdim;

        let skip = self.shared_prefix(seq2);
        self.remember(seq2, skip);

        for i in 1..=len1 {
            for j in skip + 1..=len2 {
                let at = i * mdim + j;
                if seq1[i - 1] == seq2[j - 1] {
                    self.matrix[at] = self.matrix[at - mdim - 1] + 1;
                } else {
                    let up = self.matrix[at - mdim];
                    let left = self.matrix[at - 1];
                    self.matrix[at] = up.max(left);
                }
            }
        }

        self.matrix[len1 * mdim + len2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn metric_is_kept() {
        let memo = Memo::new(Metric::Damerau, 8, 2);
        assert_eq!(Metric::Damerau, memo.metric());
    }

    #[test]
    fn substring_walks_a_lexicon() {
        let reference = cp("expeditor");
        let mut memo = Memo::new(Metric::LongestCommonSubstring, 50, 0);
        memo.set_ref(&reference);

        let expected = [4, 7, 9, 4];
        for (word, expected) in ["expecting", "expediter", "expeditor", "expel"]
            .iter()
            .zip(expected)
        {
            assert_eq!(expected, memo.compute(&cp(word)), "query {word}");
        }
    }

    #[test]
    fn levenshtein_reuses_shared_prefixes() {
        let reference = cp("kitten");
        let mut memo = Memo::new(Metric::Levenshtein, 16, i32::MAX);
        memo.set_ref(&reference);

        assert_eq!(3, memo.compute(&cp("sitting")));
        assert_eq!(1, memo.compute(&cp("sitten")));
        assert_eq!(1, memo.compute(&cp("mitten")));
        assert_eq!(0, memo.compute(&cp("kitten")));
        assert_eq!(0, memo.compute(&cp("kitten")));
        assert_eq!(6, memo.compute(&[]));
    }

    #[test]
    fn damerau_counts_transpositions() {
        let reference = cp("ca");
        let mut memo = Memo::new(Metric::Damerau, 8, i32::MAX);
        memo.set_ref(&reference);

        assert_eq!(1, memo.compute(&cp("ac")));
        assert_eq!(0, memo.compute(&cp("ca")));
    }

    #[test]
    fn length_gap_rejects_without_computing() {
        let reference = cp("abcdef");
        let mut memo = Memo::new(Metric::Levenshtein, 16, 1);
        memo.set_ref(&reference);

        assert_eq!(i32::MAX, memo.compute(&cp("abc")));
    }

    #[test]
    fn shared_prefix_column_rejects_hopeless_queries() {
        let reference = cp("abcdef");
        let mut memo = Memo::new(Metric::Levenshtein, 16, 1);
        memo.set_ref(&reference);

        // distance 3 is past the bound, but still computed in full
        assert_eq!(3, memo.compute(&cp("zzzdef")));
        // shares "zzzd" with the previous query; the minimum of the
        // matrix column at the split already exceeds max_dist
        assert_eq!(i32::MAX, memo.compute(&cp("zzzdXf")));
    }

    #[test]
    fn rebinding_the_reference_invalidates_the_prefix() {
        let first = cp("abab");
        let second = cp("baba");
        let mut memo = Memo::new(Metric::LongestCommonSubsequence, 8, 0);

        memo.set_ref(&first);
        assert_eq!(4, memo.compute(&cp("abab")));

        memo.set_ref(&second);
        assert_eq!(3, memo.compute(&cp("abab")));
    }

    #[test]
    fn subsequence_matches_interleaved_queries() {
        let reference = cp("abcdef");
        let mut memo = Memo::new(Metric::LongestCommonSubsequence, 16, 0);
        memo.set_ref(&reference);

        assert_eq!(3, memo.compute(&cp("axcxex")));
        assert_eq!(4, memo.compute(&cp("axcdex")));
        assert_eq!(0, memo.compute(&[]));
    }

    #[test]
    #[should_panic(expected = "reference sequence not set")]
    fn compute_without_reference_panics() {
        let mut memo = Memo::new(Metric::Levenshtein, 8, 2);
        memo.compute(&cp("oops"));
    }

    #[test]
    #[should_panic(expected = "query too long")]
    fn oversized_query_panics() {
        let reference = cp("ab");
        let mut memo = Memo::new(Metric::Levenshtein, 2, 2);
        memo.set_ref(&reference);
        memo.compute(&cp("abc"));
    }
}
