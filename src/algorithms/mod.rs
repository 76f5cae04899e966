#[macro_export]
macro_rules! assert_delta {
    ($x:expr, $y:expr) => {
        assert_delta!($x, $y, 1e-5);
    };
    ($x:expr, $y:expr, $d:expr) => {
        if ($x - $y).abs() > $d {
            panic!(
                "assertion failed: actual: `{}`, expected: `{}`: \
                    actual not within < {} of expected",
                $x, $y, $d
            );
        }
    };
}

/// Normalization strategies for the edit distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormMethod {
    /// Normalize by the length of the longest sequence.
    LongestSeq,
    /// Normalize by the length of the longest optimal alignment between
    /// the two sequences. More expensive than `LongestSeq`, both in space
    /// and time, but arguably more accurate. For details, see Heeringa,
    /// "Measuring Dialect Pronunciation Differences using Levenshtein
    /// Distance".
    LongestAlign,
}

#[cfg(feature = "bounded")]
pub mod bounded;

#[cfg(feature = "damerau")]
pub mod damerau;

#[cfg(feature = "jaro")]
pub mod jaro;

#[cfg(feature = "lcs")]
pub mod lcs;

#[cfg(feature = "levenshtein")]
pub mod levenshtein;
