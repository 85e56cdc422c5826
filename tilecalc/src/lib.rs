//! tilecalc — a four-function keypad calculator
//!
//! Digits build up the accumulator, an operator press is held until the
//! next digit, `=` applies it. Keyboard characters fire the matching key.

pub mod app;
pub mod display;
pub mod engine;
pub mod keypad;

pub use app::CalcApp;
pub use engine::{Action, Calculator, Operation};
