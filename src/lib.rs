// ABOUTME: Library crate for Macromind exposing the public API for testing

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod fixtures;
pub mod models;
