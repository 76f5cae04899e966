//! This library implements approximate string matching and sequence
//! similarity metrics over sequences of Unicode codepoints.
//!
//! Every metric takes already-decoded codepoint slices; the [`codepoints`]
//! module converts to and from UTF-8 at the boundary. Distances are `i32`
//! with `i32::MAX` as the out-of-bound sentinel, normalized metrics return
//! an `f64` in `[0, 1]`.

#![forbid(unsafe_code)]
#![allow(
    // lengths are bounded by MAX_SEQ_LEN, so the i32 casts cannot wrap
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    // not practical
    clippy::similar_names,
    // noisy
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

mod algorithms;
mod utils;

pub mod codepoints;

#[cfg(feature = "glob")]
mod glob;
#[cfg(feature = "matcher")]
mod matcher;
#[cfg(feature = "memo")]
mod memo;

pub use algorithms::NormMethod;

#[cfg(feature = "bounded")]
pub use algorithms::bounded::{lev_bounded1, lev_bounded2, LEV_BOUNDED};
#[cfg(feature = "damerau")]
pub use algorithms::damerau::{damerau, normalized_damerau};
#[cfg(feature = "jaro")]
pub use algorithms::jaro::jaro;
#[cfg(feature = "lcs")]
pub use algorithms::lcs::{
    lcs_subsequence, lcs_substring, lcs_substring_extract, normalized_lcs_subsequence,
};
#[cfg(feature = "levenshtein")]
pub use algorithms::levenshtein::{levenshtein, normalized_levenshtein};
#[cfg(feature = "glob")]
pub use glob::glob;
#[cfg(feature = "matcher")]
pub use matcher::get_top_n;
#[cfg(feature = "memo")]
pub use memo::{Memo, Metric, METRIC_NR};

/// Maximum allowed length of a sequence. Not checked inside the inner
/// loops; callers are expected to respect it. It could be larger, but with
/// this value the worst-case memoizer allocation stays at 64M.
pub const MAX_SEQ_LEN: usize = 4096;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
