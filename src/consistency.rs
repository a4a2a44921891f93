//! Consistency detection for termcheck.
//!
//! This module holds the core algorithm: candidate extraction,
//! canonicalization, grouping of surface forms by canonical identity,
//! redundancy resolution, and report building. Data flows strictly
//! forward: sentences → candidates → groups → report.

pub mod candidate;
pub mod canonical;
pub mod checker;
pub mod group;
pub mod report;
pub mod resolver;
