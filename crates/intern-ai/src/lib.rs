//! Recommendation engine and offline evaluation harness for internship
//! matching.
//!
//! The crate is split along the data flow:
//!
//! - [`skills`] — normalized skill sets and the Jaccard similarity they are
//!   compared with.
//! - [`recommend`] — the three scoring strategies (content-based,
//!   collaborative, hybrid merge) over typed domain records.
//! - [`dataset`] — the read-only store the engine consumes; callers
//!   materialize their tables up front, no call here performs I/O.
//! - [`evaluation`] — ranking metrics, the offline harness replaying
//!   historical applications against each strategy, and report generation.
//!
//! Every scoring entry point is a total function over well-typed input:
//! empty profiles, cold-start students, and empty ground truth all produce
//! empty lists or zero-valued metrics rather than errors.

pub mod dataset;
pub mod evaluation;
pub mod recommend;
pub mod skills;
