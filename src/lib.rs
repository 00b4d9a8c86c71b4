// src/lib.rs
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod util;
pub mod logging;
pub mod config;
pub mod pattern;

pub mod walk;
pub mod scan;
pub mod rewrite;
pub mod verify;

pub mod report;

pub mod commands;
