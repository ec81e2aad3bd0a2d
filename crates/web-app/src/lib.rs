#![warn(clippy::pedantic)]

mod config;
pub mod log;
mod presentation;

pub use config::*;
pub use presentation::*;
