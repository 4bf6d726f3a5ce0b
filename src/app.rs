use eframe::egui;
use eframe::egui::{Color32, Id, Key, Response, Sense, ViewportCommand, Visuals};
use tracing::info;

use crate::clock::{self, ClockFace, HandAngles};
use crate::drag::DragController;
use crate::sound::TickSound;
use crate::ticker::{RepaintTicker, TICK_PERIOD};

pub const WINDOW_TITLE: &str = "Clock";
pub const WINDOW_SIZE: [f32; 2] = [530.0, 530.0];

/// Borderless, transparent, fixed-size window centered on the primary display.
pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(false),
        centered: true,
        ..Default::default()
    }
}

pub struct ClockApp {
    face: ClockFace,
    drag: DragController,
    _ticker: RepaintTicker,
    _sound: Option<TickSound>,
}

impl ClockApp {
    /// Must be called from within a tokio runtime; the repaint ticker is a tokio task.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(Visuals::light());

        let ticker = RepaintTicker::start(cc.egui_ctx.clone(), TICK_PERIOD);
        let sound = TickSound::try_start_default();

        Self {
            face: ClockFace::default(),
            drag: DragController::default(),
            _ticker: ticker,
            _sound: sound,
        }
    }

    fn follow_pointer(&mut self, ctx: &egui::Context, response: &Response) {
        let (press_origin, pointer, window_origin) = ctx.input(|i| {
            (
                i.pointer.press_origin(),
                i.pointer.interact_pos(),
                i.viewport().outer_rect.map(|rect| rect.min),
            )
        });

        if response.drag_started() {
            if let Some(grab) = press_origin.or(pointer) {
                self.drag.on_press(grab);
            }
        }

        if response.dragged() {
            if let (Some(pointer), Some(window_origin)) = (pointer, window_origin) {
                let cursor_on_screen = window_origin + pointer.to_vec2();
                if let Some(target) = self.drag.on_drag(cursor_on_screen) {
                    if target != window_origin {
                        ctx.send_viewport_cmd(ViewportCommand::OuterPosition(target));
                    }
                }
            }
        }

        if response.drag_stopped() {
            self.drag.on_release();
        }
    }
}

impl eframe::App for ClockApp {
    /// Called on every tick of the repaint ticker and on input events.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            info!("escape pressed, closing");
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        let angles = HandAngles::at(&chrono::Local::now());
        let display_list = self.face.render(&angles);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::TRANSPARENT))
            .show(ctx, |ui| {
                let app_rect = ui.max_rect();
                let response = ui.interact(app_rect, Id::new("app"), Sense::drag());
                self.follow_pointer(ctx, &response);

                clock::paint(ui.painter(), app_rect.min.to_vec2(), &display_list);
            });
    }

    fn clear_color(&self, _visuals: &Visuals) -> [f32; 4] {
        Color32::TRANSPARENT.to_normalized_gamma_f32()
    }
}
