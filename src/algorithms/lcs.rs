use crate::utils::{in_range, order_by_len, Column};
use smallvec::smallvec;

/// Calculates the length of the longest common substring of two sequences.
///
/// ```
/// use seqsim::{codepoints, lcs_substring};
///
/// let a = codepoints::from_str("expediter");
/// let b = codepoints::from_str("expeditor");
/// assert_eq!(7, lcs_substring(&a, &b));
/// ```
pub fn lcs_substring(seq1: &[char], seq2: &[char]) -> i32 {
    lcs_substring_extract(seq1, seq2).0
}

/// Like [`lcs_substring`], but also extracts a longest common substring:
/// the returned slice is the leftmost longest occurrence in `seq1`, and is
/// empty (anchored at the end of `seq1`) when the sequences share nothing.
///
/// The sequences are never reordered here, whatever their lengths: the
/// witness must borrow from `seq1`. This can cost a larger scratch row.
pub fn lcs_substring_extract<'a>(seq1: &'a [char], seq2: &[char]) -> (i32, &'a [char]) {
    debug_assert!(in_range(seq1.len()) && in_range(seq2.len()));

    let (len1, len2) = (seq1.len(), seq2.len());
    let mut column: Column = smallvec![0; len2];

    let mut max_len: i32 = 0;
    let mut max_row = 0;

    for i in 0..len1 {
        let mut last = 0;
        for j in 0..len2 {
            let old = column[j];
            if seq1[i] == seq2[j] {
                column[j] = last + 1;
                if max_len < column[j] {
                    max_len = column[j];
                    max_row = i;
                }
            } else {
                column[j] = 0;
            }
            last = old;
        }
    }

    let witness = if max_len > 0 {
        &seq1[max_row + 1 - max_len as usize..=max_row]
    } else {
        &seq1[len1..]
    };
    (max_len, witness)
}

/// Calculates the length of the longest common subsequence of two
/// sequences.
///
/// ```
/// use seqsim::{codepoints, lcs_subsequence};
///
/// let a = codepoints::from_str("abcdef");
/// let b = codepoints::from_str("axcxex");
/// assert_eq!(3, lcs_subsequence(&a, &b));
/// ```
pub fn lcs_subsequence(seq1: &[char], seq2: &[char]) -> i32 {
    debug_assert!(in_range(seq1.len()) && in_range(seq2.len()));

    let (seq1, seq2) = order_by_len(seq1, seq2);
    let (len1, len2) = (seq1.len(), seq2.len());

    if len2 == 0 {
        return 0;
    }

    let mut column: Column = smallvec![0; len2 + 1];

    for i in 1..=len1 {
        let mut last = 0;
        for j in 1..=len2 {
            let old = column[j];
            if seq1[i - 1] == seq2[j - 1] {
                column[j] = last + 1;
            } else if column[j] < column[j - 1] {
                column[j] = column[j - 1];
            }
            last = old;
        }
    }

    column[len2]
}

/// Normalized version of [`lcs_subsequence`]: `1 - 2*lcs / (len1 + len2)`,
/// so 0.0 means identical. A pair of empty sequences is identical by
/// convention.
pub fn normalized_lcs_subsequence(seq1: &[char], seq2: &[char]) -> f64 {
    debug_assert!(in_range(seq1.len()) && in_range(seq2.len()));

    if seq1.is_empty() && seq2.is_empty() {
        return 1.0;
    }

    let lcs = lcs_subsequence(seq1, seq2);
    1.0 - (2.0 * f64::from(lcs)) / (seq1.len() + seq2.len()) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn substring_empty() {
        assert_eq!(0, lcs_substring(&[], &[]));
        assert_eq!(0, lcs_substring(&cp("abc"), &[]));
        assert_eq!(0, lcs_substring(&[], &cp("abc")));
    }

    #[test]
    fn substring_same() {
        assert_eq!(9, lcs_substring(&cp("expeditor"), &cp("expeditor")));
    }

    #[test]
    fn substring_partial_overlap() {
        assert_eq!(7, lcs_substring(&cp("expediter"), &cp("expeditor")));
        assert_eq!(4, lcs_substring(&cp("expeditor"), &cp("expecting")));
        assert_eq!(4, lcs_substring(&cp("expeditor"), &cp("expel")));
    }

    #[test]
    fn substring_symmetric() {
        assert_eq!(
            lcs_substring(&cp("expediter"), &cp("expeditor")),
            lcs_substring(&cp("expeditor"), &cp("expediter"))
        );
    }

    #[test]
    fn substring_witness_is_leftmost() {
        let a = cp("xxabyyab");
        let b = cp("ab");
        let (len, witness) = lcs_substring_extract(&a, &b);
        assert_eq!(2, len);
        assert_eq!(&a[2..4], witness);

        let a = cp("expediter");
        let b = cp("expeditor");
        let (len, witness) = lcs_substring_extract(&a, &b);
        assert_eq!(7, len);
        assert_eq!(&a[..7], witness);
    }

    #[test]
    fn substring_witness_for_disjoint_sequences() {
        let a = cp("abc");
        let b = cp("xyz");
        let (len, witness) = lcs_substring_extract(&a, &b);
        assert_eq!(0, len);
        assert!(witness.is_empty());
    }

    #[test]
    fn subsequence_empty() {
        assert_eq!(0, lcs_subsequence(&[], &[]));
        assert_eq!(0, lcs_subsequence(&cp("abc"), &[]));
    }

    #[test]
    fn subsequence_same() {
        assert_eq!(8, lcs_subsequence(&cp("identity"), &cp("identity")));
    }

    #[test]
    fn subsequence_interleaved() {
        assert_eq!(3, lcs_subsequence(&cp("abcdef"), &cp("axcxex")));
        assert_eq!(2, lcs_subsequence(&cp("gac"), &cp("agcat")));
        assert_eq!(2, lcs_subsequence(&cp("agcat"), &cp("gac")));
    }

    #[test]
    fn subsequence_bounded_by_shorter() {
        let a = cp("longer sequence");
        let b = cp("short");
        assert!(lcs_subsequence(&a, &b) <= b.len() as i32);
    }

    #[test]
    fn normalized_subsequence_range() {
        assert_delta!(1.0, normalized_lcs_subsequence(&[], &[]));
        assert_delta!(
            0.0,
            normalized_lcs_subsequence(&cp("same"), &cp("same"))
        );
        assert_delta!(1.0, normalized_lcs_subsequence(&cp("abc"), &cp("xyz")));
        assert_delta!(
            1.0 - 8.0 / 13.0,
            normalized_lcs_subsequence(&cp("kitten"), &cp("sitting")),
            1e-9
        );
    }
}
