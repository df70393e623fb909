//! CLI infrastructure for the noughts engine
//!
//! This module provides the command-line interface for playing against the
//! engine and for comparing the two search strategies.

pub mod commands;
pub mod output;
