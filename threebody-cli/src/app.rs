//! Window frontend: maps keys to session commands and paints stars with egui.

use eframe::egui;
use std::time::Instant;
use threebody_core::{Command, FrameClock, Rgb, Session, Surface};

/// Outline width for the smooth circle style
const OUTLINE_WIDTH: f32 = 1.0;

pub struct ThreeBodyApp {
    session: Session,
    clock: FrameClock,
    dt: f32,
}

impl ThreeBodyApp {
    pub fn new(session: Session) -> Self {
        let clock = FrameClock::new(session.config().fps);
        Self {
            session,
            clock,
            dt: 0.0,
        }
    }

    fn commands(ctx: &egui::Context) -> Vec<Command> {
        ctx.input(|i| {
            let mut commands = Vec::new();
            if i.viewport().close_requested()
                || i.key_pressed(egui::Key::Escape)
                || i.key_pressed(egui::Key::Q)
            {
                commands.push(Command::Quit);
            }
            if i.key_pressed(egui::Key::R) {
                commands.push(Command::Reset);
            }
            if i.key_pressed(egui::Key::Space) || i.key_pressed(egui::Key::P) {
                commands.push(Command::TogglePause);
            }
            if i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals) {
                commands.push(Command::ZoomIn);
            }
            if i.key_pressed(egui::Key::Minus) {
                commands.push(Command::ZoomOut);
            }
            commands
        })
    }
}

fn color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.0, color.1, color.2)
}

/// Paints onto the central panel, offset by the panel's top-left corner
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl PainterSurface<'_> {
    fn pos(&self, p: glam::Vec2) -> egui::Pos2 {
        self.origin + egui::vec2(p.x, p.y)
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, color: Rgb) {
        self.painter
            .rect_filled(self.painter.clip_rect(), 0.0, color32(color));
    }

    fn filled_circle(&mut self, center: glam::Vec2, radius: f32, color: Rgb) {
        self.painter
            .circle_filled(self.pos(center), radius, color32(color));
    }

    fn aa_circle(&mut self, center: glam::Vec2, radius: f32, color: Rgb) {
        self.painter.circle_stroke(
            self.pos(center),
            radius,
            egui::Stroke::new(OUTLINE_WIDTH, color32(color)),
        );
    }
}

impl eframe::App for ThreeBodyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for command in Self::commands(ctx) {
            if let Err(e) = self.session.apply(command) {
                log::error!("{}", e);
            }
        }

        if !self.session.is_running() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let mut surface = PainterSurface {
                    painter: ui.painter(),
                    origin: rect.min,
                };
                self.session.frame(self.dt, &mut surface);

                if self.session.is_paused() {
                    ui.label(
                        egui::RichText::new("paused")
                            .color(egui::Color32::GRAY)
                            .size(16.0),
                    );
                }
            });

        // The measured duration of this frame drives the next update
        self.dt = self.clock.tick(Instant::now());
        ctx.request_repaint_after(self.clock.until_next_frame(Instant::now()));
    }
}
