//! Calculator window: display, keypad and input routing
//!
//! The app owns the [`Calculator`]. Rendering only reads it; clicks and key
//! presses become [`Action`]s collected over the frame and dispatched once
//! the UI has been laid out.

use calccore::safety;
use calccore::theme::consume_special_keys;
use calccore::widgets::KeypadButton;
use calccore::{CalcConfig, RepaintController, SlowTheme};
use egui::Context;

use crate::display::format_value;
use crate::engine::{Action, Calculator, Operation};
use crate::keypad::{self, KeyKind, COLUMNS, ROWS, TEMPLATE};

/// Vertical gap between the display and the keypad.
const DISPLAY_GAP: f32 = 30.0;

pub struct CalcApp {
    calc: Calculator,
    config: CalcConfig,
    theme: SlowTheme,
    repaint: RepaintController,
}

impl CalcApp {
    pub fn new(config: CalcConfig) -> Self {
        Self {
            calc: Calculator::new(),
            theme: SlowTheme::from_config(&config),
            config,
            repaint: RepaintController::new(),
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    pub fn theme(&self) -> &SlowTheme {
        &self.theme
    }

    /// Inner window size that fits the display and the full grid.
    pub fn window_size(config: &CalcConfig) -> egui::Vec2 {
        let theme = SlowTheme::from_config(config);
        let [bw, bh] = config.button_size;
        let gap = config.button_gap;
        let grid_w = bw * COLUMNS as f32 + gap * (COLUMNS - 1) as f32;
        let grid_h = bh * ROWS as f32 + gap * (ROWS - 1) as f32;
        egui::vec2(
            grid_w + theme.window_padding * 2.0,
            display_height(&theme) + DISPLAY_GAP + grid_h + theme.window_padding * 2.0,
        )
    }

    /// Lay out one frame and apply whatever the user did during it.
    pub fn show(&mut self, ctx: &Context) {
        consume_special_keys(ctx);
        let mut actions = ctx.input(keypad::actions_from_input);

        let calc = &self.calc;
        let config = &self.config;
        let theme = &self.theme;
        egui::CentralPanel::default()
            .frame(theme.panel_frame())
            .show(ctx, |ui| {
                render_display(ui, calc, theme);
                ui.add_space(DISPLAY_GAP);
                render_keypad(ui, calc, config, &mut actions);
            });

        self.apply(actions);
    }

    fn apply(&mut self, actions: Vec<Action>) {
        for action in actions {
            let calc = &mut self.calc;
            let changed = safety::catch_or(false, "keypad action", || calc.dispatch(action));
            if changed {
                self.repaint.mark_needs_repaint();
            }
        }
    }
}

impl eframe::App for CalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        self.show(ctx);
        self.repaint.end_frame(ctx);
    }
}

fn display_height(theme: &SlowTheme) -> f32 {
    theme.font_size_display * 1.5 + 8.0
}

/// Whether the key for `action` shows as held down: the pending operator does.
fn key_selected(calc: &Calculator, action: Action) -> bool {
    let pending = calc.pending_op();
    pending != Operation::None && action == Action::Operation(pending)
}

fn render_display(ui: &mut egui::Ui, calc: &Calculator, theme: &SlowTheme) {
    let height = display_height(theme);
    SlowTheme::display_frame().show(ui, |ui| {
        ui.set_min_height(height - 8.0);
        ui.set_max_height(height - 8.0);
        ui.set_width(ui.available_width());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format_value(calc.value()))
                    .font(egui::FontId::proportional(theme.font_size_display))
                    .strong(),
            );
        });
    });
}

fn render_keypad(ui: &mut egui::Ui, calc: &Calculator, config: &CalcConfig, actions: &mut Vec<Action>) {
    let size = egui::Vec2::from(config.button_size);
    ui.spacing_mut().item_spacing = egui::vec2(config.button_gap, config.button_gap);

    for row in TEMPLATE {
        ui.horizontal(|ui| {
            for label in row {
                let Some(action) = keypad::action_for_label(label) else {
                    continue;
                };
                let button = KeypadButton::new(label, size)
                    .accent(KeyKind::of(action).accent())
                    .selected(key_selected(calc, action));
                if ui.add(button).clicked() {
                    actions.push(action);
                }
            }
        });
    }
}
