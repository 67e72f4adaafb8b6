#![forbid(unsafe_code)]

//! Vanilla IDs — Runtime
//!
//! The persistence-loader side of the vanilla id tables: reads saved
//! registry data, migrates legacy keys, writes it back, and exports the
//! table fingerprint.
//!
//! No mapping logic lives here — every key decision is delegated to the
//! `vanilla_ids` kernel.

pub mod config;
pub mod document;
pub mod export;
pub mod logging;
pub mod migrate;
pub mod report;
