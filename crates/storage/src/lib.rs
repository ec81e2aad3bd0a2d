#![warn(clippy::pedantic)]

pub mod rest;
