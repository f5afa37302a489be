//! Shared fixtures and helpers for the integration suite.

pub mod go_fixtures;
pub mod unit_helpers;
