//! Usufy Fuzz - Username permutation generator.
//!
//! Expands base identifiers into plausible variants before they are looked
//! up on third-party platforms. Generation is deterministic for a given
//! configuration and reference year.
//!
//! # Architecture
//!
//! - **Case** ([`case`]): lower, upper and title-case forms
//! - **Suffixes** ([`suffix`]): separator plus numeric, year and word suffixes
//! - **Leet** ([`leet`]): one look-alike digit substitution per variant
//! - **Patterns** ([`patterns`]): `<USERNAME>` templates loaded from a file
//! - **Fuzzer** ([`fuzzer`]): runs the families in order with per-identifier dedup
//! - **Errors** ([`error`]): fuzzing-specific error types
//!
//! # Example
//!
//! ```rust
//! use usufy_fuzz::{fuzz_usernames, Fuzzer};
//! use usufy_core::FuzzConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let results = fuzz_usernames(["alice"], None);
//! let variants = results.get("alice").expect("entry for alice");
//! assert!(variants.contains("ALICE"));
//! assert!(variants.contains("alice_dev"));
//!
//! // Pin the year window for reproducible output
//! let fuzzer = Fuzzer::new(FuzzConfig::default())?.with_reference_year(2020);
//! assert!(fuzzer.fuzz("bob").contains("bob.2015"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod case;
pub mod error;
pub mod fuzzer;
pub mod leet;
pub mod patterns;
pub mod suffix;
pub mod variants;

// Re-export commonly used types
pub use case::{case_variants, title_case};
pub use error::{FuzzError, Result};
pub use fuzzer::{fuzz_usernames, Fuzzer};
pub use leet::{leet_variants, LeetTable};
pub use patterns::{load_patterns, parse_patterns, try_load_patterns};
pub use suffix::{suffix_variants, year_suffixes};
pub use variants::{FuzzResults, VariantSet};
