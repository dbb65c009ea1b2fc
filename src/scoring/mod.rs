//! Remote scoring service client.

pub mod client;

pub use client::{ScoreService, ScoringClient};
