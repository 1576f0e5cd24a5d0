mod client;
mod config;
mod dto;

pub use client::*;
pub use config::*;
