//! ffscript - generate scripts that run ffmpeg over a directory of videos
//!
//! This library crate exposes the planning pipeline for integration testing.

pub mod cli;
pub mod command;
pub mod config;
pub mod planner;
pub mod scanner;
pub mod tools;
