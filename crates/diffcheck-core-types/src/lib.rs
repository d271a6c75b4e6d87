//! Core types shared across diffcheck facilities
//!
//! This crate provides the canonical field keys and event names used by the
//! logging facility in `diffcheck-core` and by every crate that emits
//! structured events through its macros.

pub mod schema;
