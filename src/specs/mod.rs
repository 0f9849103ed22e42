// src/specs/mod.rs
//! # Page "specs" module
//!
//! Page-specific knowledge lives here: *where the ground truth sits in the
//! HTML* and *how to decode it*. Specs only extract; fetching is `core::net`'s
//! job and persistence belongs to `store`, driven by the `runner`.
//!
//! Specs are testable offline against captured page fixtures.
pub mod daily;
