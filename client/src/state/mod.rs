//! Page state modules.
//!
//! DESIGN
//! ======
//! State is split by flow (`form`, `board`, `lookup`) so each can be driven
//! and inspected without a browser. Components only hold `RwSignal`s of
//! these types and render their `view()` output.

pub mod board;
pub mod form;
pub mod lookup;
