// src/lib.rs
pub mod api;
pub mod banner;
pub mod config;
pub mod errors;
pub mod executor;
pub mod fixer;
pub mod languages;
pub mod models;
pub mod providers;
pub mod runner;
