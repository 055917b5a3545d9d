pub mod algorithm;
pub mod colony;
pub mod common;
pub mod config;
pub mod output;
pub mod solver;
pub mod stat;
