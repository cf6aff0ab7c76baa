pub mod api;
pub mod config;
pub mod error;
pub mod providers;
pub mod strategies;

pub use strategies::{evaluate, Evaluator, Inputs, StrategyResult};
