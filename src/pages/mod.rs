//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (its own `loading`/`error`
//! signals, form state, and facade calls) and delegates shared rendering to
//! `components`. Pages do not coordinate or de-duplicate requests, and a
//! request outliving a navigation away still resolves into the page-local
//! signals; this mirrors the upstream behavior and is a known limitation.

pub mod dashboard;
pub mod login;
pub mod profile;
pub mod progress;
pub mod register;
pub mod videos;
pub mod workouts;
