//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome (navigation, cards, dialogs, error
//! banners) while reading shared state from Leptos context providers.
//! Form-specific dialogs stay local to their page modules.

pub mod card;
pub mod error_banner;
pub mod modal;
pub mod navigation;
