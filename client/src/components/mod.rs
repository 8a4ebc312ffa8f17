//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the per-flow state signals provided by `App`
//! and render their display models. Transitions live in `state`.

pub mod message_card;
pub mod message_form;
pub mod message_list;
pub mod user_lookup;
