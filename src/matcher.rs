use crate::memo::{Memo, Metric};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Returns a list of the best matches to a collection of choices.
///
/// Every choice is scored against the query with a memoized comparator
/// bound to `metric`, so choices sharing prefixes (a sorted word list, for
/// instance) are compared at a fraction of the one-shot cost. The raw
/// result is normalized to a similarity in `[0, 1]`, where 1.0 means the
/// strings are the same.
///
/// # Arguments
///
/// * `query` - A string to match against.
/// * `choices` - A list of choices to compare against the query.
/// * `cutoff` - A score threshold. No matches with a score less than this number will be returned. Defaults to 0.7.
/// * `n` - Optional maximum for the number of elements returned. Defaults to 3.
/// * `metric` - The metric used for scoring.
///
/// # Returns
///
/// * A vector of the top 'n' matches from the given choices.
///
/// # Example
///
/// ```
/// use seqsim::{get_top_n, Metric};
///
/// let matches = get_top_n(
///     "apple",
///     &["apply", "apples", "ape", "applet", "applesauce"],
///     Some(0.8),
///     Some(3),
///     Metric::Levenshtein,
/// );
/// assert_eq!(matches, ["apples", "applet", "apply"]);
/// ```
pub fn get_top_n<'a>(
    query: &str,
    choices: &[&'a str],
    cutoff: Option<f64>,
    n: Option<usize>,
    metric: Metric,
) -> Vec<&'a str> {
    let cutoff = cutoff.unwrap_or(0.7);
    let n = n.unwrap_or(3);

    let query: Vec<char> = query.chars().collect();
    let max_len = choices
        .iter()
        .map(|choice| choice.chars().count())
        .chain([query.len()])
        .max()
        .unwrap_or(0);

    let mut memo = Memo::new(metric, max_len, i32::MAX);
    memo.set_ref(&query);

    let mut matches = BinaryHeap::new();

    for &choice in choices {
        let codepoints: Vec<char> = choice.chars().collect();
        let raw = memo.compute(&codepoints);
        let ratio = similarity(metric, raw, query.len(), codepoints.len());
        if ratio >= cutoff {
            // the choice itself goes in reversed so that equal scores come
            // out in lexicographical order
            let int_ratio = (ratio * f64::from(u32::MAX)) as i64;
            matches.push((int_ratio, Reverse(choice)));
        }
    }

    let mut rv = vec![];
    for _ in 0..n {
        if let Some((_, elt)) = matches.pop() {
            rv.push(elt.0);
        } else {
            break;
        }
    }
    rv
}

/// Folds a raw metric result into a similarity in `[0, 1]`.
fn similarity(metric: Metric, raw: i32, len1: usize, len2: usize) -> f64 {
    let longest = len1.max(len2);
    if longest == 0 {
        return 1.0;
    }

    match metric {
        Metric::Levenshtein | Metric::Damerau => 1.0 - f64::from(raw) / longest as f64,
        Metric::LongestCommonSubstring => f64::from(raw) / longest as f64,
        Metric::LongestCommonSubsequence => 2.0 * f64::from(raw) / (len1 + len2) as f64,
    }
}
