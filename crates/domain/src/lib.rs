#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod exercise;
mod exercise_detail;
mod id;
mod invite;
mod member;
mod page;
mod service;

pub use error::*;
pub use exercise::*;
pub use exercise_detail::*;
pub use invite::*;
pub use member::*;
pub use page::*;
pub use service::*;
