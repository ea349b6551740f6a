//! Medroute Core Library
//!
//! Core domain logic for the medroute delivery planner: graph search
//! strategies, the hospital layout, heuristic tables and the delivery agent.

pub mod agent;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod search;
