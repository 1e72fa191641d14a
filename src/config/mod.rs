// src/config/mod.rs
//! Runtime configuration (environment driven).

pub mod app;

pub use app::{AppConfig, LogFormat};
