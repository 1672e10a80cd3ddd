//! Domain layer for sand-replacement field density testing
//!
//! Models carry raw field readings and lab reference values; services turn
//! them into densities and a compaction verdict. Nothing here does I/O.

pub mod model;
pub mod service;
