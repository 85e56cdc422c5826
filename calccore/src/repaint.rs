//! Input-driven repaint controller
//!
//! egui is an immediate-mode GUI: every frame redraws everything. On an
//! e-ink display each refresh is visible and slow, so the calculator paints
//! only when it has a reason to:
//!
//! 1. **Init** — the first frame.
//! 2. **Input** — a click or key press arrived this frame.
//! 3. **StateChange** — the accumulator changed during the previous frame
//!    and the display has not caught up yet.
//!
//! With none of those, no repaint is scheduled and egui sleeps until the
//! next input event.

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame — always paint.
    Init,
    /// User input (mouse move, key press, scroll).
    Input,
    /// App-requested repaint (state changed while handling input).
    StateChange,
}

/// Controls when the egui context should request repaints.
///
/// Call [`RepaintController::begin_frame`] at the top of `update()` and
/// [`RepaintController::end_frame`] at the bottom.
#[derive(Debug)]
pub struct RepaintController {
    needs_repaint: bool,
    frame: u64,
    reason: RepaintReason,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            needs_repaint: false,
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    /// Request a single repaint on the next opportunity.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.pointer.is_moving()
        });
        self.begin_with(had_input);
        tracing::trace!(frame = self.frame, reason = ?self.reason, "paint");
    }

    fn begin_with(&mut self, had_input: bool) {
        self.reason = if self.frame == 0 {
            RepaintReason::Init
        } else if had_input {
            RepaintReason::Input
        } else if self.needs_repaint {
            RepaintReason::StateChange
        } else {
            // Woken by something egui knows about and we don't (focus,
            // resize). Treat it as input.
            RepaintReason::Input
        };
        self.needs_repaint = false;
    }

    pub fn end_frame(&mut self, ctx: &egui::Context) {
        if self.finish() {
            ctx.request_repaint();
        }
    }

    /// Advance the frame counter; true if another frame is wanted.
    fn finish(&mut self) -> bool {
        self.frame += 1;
        self.needs_repaint
    }
}
