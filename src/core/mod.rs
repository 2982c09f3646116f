//! Core business logic
//!
//! This module contains the export coordination engine and state tracking:
//!
//! - [`export`] - Target assembly, export range decisions, deadline policy,
//!   and the coordinator that drives export tasks to completion
//! - [`state`] - Watermark model and in-memory collection

pub mod export;
pub mod state;
