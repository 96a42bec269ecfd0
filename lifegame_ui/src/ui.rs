// ui.rs - egui front end: input source and paint target for the board

use anyhow::Result;
use eframe::egui;
use egui::{Color32, Event, Pos2, Rect, Stroke, Vec2};
use lifegame::{DrawCommand, LifeConfig, PATTERNS, Pattern, RecordingSurface, Session};
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

pub struct LifeApp {
    session: Session<RecordingSurface>,
    selected_pattern: usize,

    // Single-threaded runtime for the playback task, driven once per frame.
    runtime: Runtime,
    local: LocalSet,
}

impl LifeApp {
    pub fn new(config: LifeConfig, pattern: Option<Pattern>) -> Result<Self> {
        let session = Session::new(config, RecordingSurface::new())?;
        let mut selected_pattern = 0;
        if let Some(pattern) = pattern {
            session.apply_pattern(&pattern, centred(&session, &pattern));
            selected_pattern = PATTERNS.iter().position(|p| p.name == pattern.name).unwrap_or(0);
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;

        Ok(Self {
            session,
            selected_pattern,
            runtime,
            local: LocalSet::new(),
        })
    }

    pub fn board_size(&self) -> Vec2 {
        self.session.game().config().surface_size()
    }

    fn toggle_run(&self) {
        let session = self.session.clone();
        self.local.block_on(&self.runtime, async move { session.toggle_run() });
    }

    /// Feeds this frame's pointer events to the game in board coordinates.
    fn handle_pointer(&self, ctx: &egui::Context, board: Rect) {
        let to_board = |pos: Pos2| (pos - board.min).to_pos2();
        let events = ctx.input(|i| i.events.clone());
        for event in events {
            match event {
                Event::PointerButton { pos, button, pressed: true, .. } if board.contains(pos) => {
                    self.session.on_pointer_down(button, to_board(pos));
                }
                Event::PointerButton { button, pressed: false, .. } => {
                    self.session.on_pointer_up(button);
                }
                Event::PointerMoved(pos) if board.contains(pos) => {
                    self.session.on_pointer_move(to_board(pos));
                }
                Event::PointerMoved(_) | Event::PointerGone => self.session.on_pointer_leave(),
                _ => {}
            }
        }
    }

    /// Replays the last recorded redraw onto the painter.
    fn paint_board(&self, painter: &egui::Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        let game = self.session.game();
        for command in game.surface().commands() {
            match command {
                DrawCommand::Clear { width, height } => {
                    let area = Rect::from_min_size(origin, Vec2::new(*width, *height));
                    painter.rect_filled(area, 0.0, Color32::WHITE);
                }
                DrawCommand::FillRects { rects, color } => {
                    for rect in rects {
                        painter.rect_filled(rect.translate(offset), 0.0, *color);
                    }
                }
                DrawCommand::StrokeLines { lines, color } => {
                    let stroke = Stroke::new(1.0, *color);
                    for [from, to] in lines {
                        painter.line_segment([*from + offset, *to + offset], stroke);
                    }
                }
            }
        }
    }
}

fn centred(session: &Session<RecordingSurface>, pattern: &Pattern) -> (usize, usize) {
    let game = session.game();
    let (width, height) = pattern.extent();
    (
        game.grid().columns().saturating_sub(width) / 2,
        game.grid().rows().saturating_sub(height) / 2,
    )
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Let any playback ticks that came due since the last frame run.
        self.local.block_on(&self.runtime, tokio::task::yield_now());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("step").clicked() {
                    self.session.step();
                }

                let label = self.session.game().run_label();
                if ui.button(label).clicked() {
                    self.toggle_run();
                }

                if ui.button("clear").clicked() {
                    self.session.clear();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("apply").clicked() {
                    let pattern = PATTERNS[self.selected_pattern];
                    let origin = centred(&self.session, &pattern);
                    self.session.apply_pattern(&pattern, origin);
                }
            });

            ui.separator();

            let (response, painter) =
                ui.allocate_painter(self.board_size(), egui::Sense::click_and_drag());
            self.handle_pointer(ctx, response.rect);
            self.paint_board(&painter, response.rect.min);

            ui.separator();

            let game = self.session.game();
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", game.generation()));
                ui.label(format!("Live cells: {}", game.population()));
            });
        });

        if self.session.is_running() {
            ctx.request_repaint();
        }
    }
}
