//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure text helpers (validation, initials, timestamps, escaping) kept apart
//! from state and components so they can be tested without a browser.

pub mod initials;
pub mod markup;
pub mod timestamp;
pub mod validate;
