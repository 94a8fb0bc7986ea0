//! # Boundcast Core
//!
//! * **[`reader`]**: pulls one numeric token per prompt out of a line based input.
//! * **[`caster`]**: range-checked narrowing of `f64` into `i32`.
//! * **[`report`]**: the user facing lines a round prints.
//! * **[`session`]**: the round loop tying the three together, plus the
//!   [`session::Terminal`] port that the CLI implements.

pub mod caster;
pub mod reader;
pub mod report;
pub mod session;
