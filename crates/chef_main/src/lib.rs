pub mod cli;
pub mod config;
pub mod domain;
mod executor;
pub mod print;
pub mod run;
mod widgets;

pub use executor::*;
