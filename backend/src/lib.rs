//! Lifestyle Hub Backend Library
//!
//! Workout and recipe tracking API with an AI assistant. The modules are
//! exposed for the binary and the integration tests.

pub mod ai;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
