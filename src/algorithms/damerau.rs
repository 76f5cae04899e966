use crate::algorithms::NormMethod;
use crate::utils::{in_range, order_by_len, strip_common_affixes, transposed, Column};
use smallvec::smallvec;
use std::cmp::min;
use std::mem;

/// Calculates the minimum number of insertions, deletions, substitutions,
/// and adjacent transpositions required to change one sequence into the
/// other.
///
/// The transposition term reads the cell two rows and two columns back, so
/// the recurrence keeps three rolling rows instead of one.
///
/// ```
/// use seqsim::{codepoints, damerau};
///
/// let a = codepoints::from_str("ca");
/// let b = codepoints::from_str("ac");
/// assert_eq!(1, damerau(&a, &b));
/// ```
pub fn damerau(seq1: &[char], seq2: &[char]) -> i32 {
    debug_assert!(in_range(seq1.len()) && in_range(seq2.len()));

    let (seq1, seq2) = order_by_len(seq1, seq2);
    let (seq1, seq2) = strip_common_affixes(seq1, seq2);
    let (len1, len2) = (seq1.len(), seq2.len());

    if len2 == 0 {
        return len1 as i32;
    }

    let mut transpos: Column = smallvec![0; len2 + 1];
    let mut previous: Column = (0..=len2).map(|j| j as i32).collect();
    let mut current: Column = smallvec![0; len2 + 1];

    for i in 1..=len1 {
        current[0] = i as i32;

        for j in 1..=len2 {
            if seq1[i - 1] == seq2[j - 1] {
                current[j] = previous[j - 1];
            } else {
                let ic = current[j - 1] + 1;
                let dc = previous[j] + 1;
                let rc = previous[j - 1] + 1;
                current[j] = min(ic, min(dc, rc));

                if transposed(seq1, seq2, i, j) {
                    current[j] = min(current[j], transpos[j - 2] + 1);
                }
            }
        }
        // transpos, previous, current = previous, current, transpos
        mem::swap(&mut transpos, &mut previous);
        mem::swap(&mut previous, &mut current);
    }

    previous[len2]
}

/// Calculates a normalized Damerau distance between 0.0 and 1.0
/// (inclusive), where 0.0 means the sequences are the same.
///
/// The [`NormMethod::LongestAlign`] variant mirrors the one in
/// [`normalized_levenshtein`](crate::normalized_levenshtein), with three
/// extra rolling rows for the alignment lengths.
pub fn normalized_damerau(method: NormMethod, seq1: &[char], seq2: &[char]) -> f64 {
    debug_assert!(in_range(seq1.len()) && in_range(seq2.len()));

    let (seq1, seq2) = order_by_len(seq1, seq2);
    let (len1, len2) = (seq1.len(), seq2.len());

    if len2 == 0 {
        return if len1 == 0 { 0.0 } else { 1.0 };
    }

    if method == NormMethod::LongestSeq {
        return f64::from(damerau(seq1, seq2)) / len1 as f64;
    }

    let mut ltranspos: Column = smallvec![0; len2 + 1];
    let mut lprevious: Column = (0..=len2).map(|j| j as i32).collect();
    let mut lcurrent: Column = smallvec![0; len2 + 1];
    let mut transpos: Column = smallvec![0; len2 + 1];
    let mut previous: Column = (0..=len2).map(|j| j as i32).collect();
    let mut current: Column = smallvec![0; len2 + 1];

    for i in 1..=len1 {
        current[0] = i as i32;
        lcurrent[0] = i as i32;

        for j in 1..=len2 {
            let has_transpos = transposed(seq1, seq2, i, j);

            let ic = current[j - 1] + 1;
            let dc = previous[j] + 1;
            let rc = previous[j - 1] + i32::from(seq1[i - 1] != seq2[j - 1]);
            current[j] = min(ic, min(dc, rc));

            let mut tc = 0;
            if has_transpos {
                tc = transpos[j - 2] + 1;
                current[j] = min(current[j], tc);
            }

            let lic = if ic == current[j] { lcurrent[j - 1] + 1 } else { 0 };
            let ldc = if dc == current[j] { lprevious[j] + 1 } else { 0 };
            let lrc = if rc == current[j] { lprevious[j - 1] + 1 } else { 0 };
            lcurrent[j] = lic.max(ldc).max(lrc);

            if has_transpos {
                let ltc = if tc == current[j] { ltranspos[j - 2] + 1 } else { 0 };
                lcurrent[j] = lcurrent[j].max(ltc);
            }
        }

        mem::swap(&mut transpos, &mut previous);
        mem::swap(&mut previous, &mut current);
        mem::swap(&mut ltranspos, &mut lprevious);
        mem::swap(&mut lprevious, &mut lcurrent);
    }

    f64::from(previous[len2]) / f64::from(lprevious[len2])
}
