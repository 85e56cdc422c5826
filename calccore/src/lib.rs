//! calccore — shared plumbing for the keypad calculator
//!
//! Theme, dithered drawing, the keypad button widget, repaint control,
//! the per-action panic guard, logging setup and config loading.

pub mod config;
pub mod dither;
pub mod logging;
pub mod repaint;
pub mod safety;
pub mod theme;
pub mod widgets;

pub use config::CalcConfig;
pub use repaint::RepaintController;
pub use theme::SlowTheme;
