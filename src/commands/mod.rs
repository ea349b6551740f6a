//! CLI commands for medroute

pub mod compare;
pub mod dispatch;
pub mod graph;
pub mod heuristics;
pub mod mission;
pub mod route;
