//! Networking modules for the backend HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the request plumbing (base URL, bearer credential, the global
//! 401 invalidation hook); the per-resource modules are thin facades that map
//! one UI action to one HTTP call; `types` defines the wire schema and
//! `error` the failure taxonomy surfaced to pages.

pub mod api;
pub mod error;
pub mod food;
pub mod http;
pub mod meal_plan;
pub mod progress;
pub mod types;
pub mod workouts;
