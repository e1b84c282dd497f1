#![doc = include_str!("../README.md")]
//! painel-middleware
//!
//! Caching wrapper around dashboard snapshot builds.

mod cache;

pub use crate::cache::{ResultCache, SLOT_KEY};
