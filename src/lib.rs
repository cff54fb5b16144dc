//! Strmforged - IPTV playlist automation tool
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod library;
pub mod playlist;
pub mod sync;
pub mod task;
