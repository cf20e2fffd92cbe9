//! Data types shared across the masking pipeline.

pub mod config;
pub mod outcome;
pub mod replacement;
pub mod token;
