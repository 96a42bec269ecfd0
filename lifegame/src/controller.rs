// controller.rs - Owns the board, the pointer flags and the playback flag

use egui::{PointerButton, Pos2, Rect, Vec2, pos2};
use tracing::{debug, info, trace};

use crate::config::LifeConfig;
use crate::error::LifeResult;
use crate::grid::Grid;
use crate::patterns::{self, Pattern};
use crate::surface::Surface;

/// An interactive Game of Life session drawn onto `S`.
///
/// All state changes go through methods here; input sources never touch the
/// flags directly. Every operation that changes the board redraws it in full.
pub struct LifeGame<S> {
    config: LifeConfig,
    grid: Grid,
    surface: S,
    generation: u64,

    running: bool,
    run_epoch: u64,

    primary_held: bool,
    secondary_held: bool,
}

impl<S: Surface> LifeGame<S> {
    /// Validates `config`, builds an all-dead board and draws it once.
    pub fn new(config: LifeConfig, surface: S) -> LifeResult<Self> {
        config.validate()?;
        let grid = Grid::new(config.columns, config.rows)?;
        let mut game = Self {
            config,
            grid,
            surface,
            generation: 0,
            running: false,
            run_epoch: 0,
            primary_held: false,
            secondary_held: false,
        };
        game.render();
        Ok(game)
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Label for a run/stop control: what pressing it would do next.
    pub fn run_label(&self) -> &'static str {
        if self.running { "stop" } else { "run" }
    }

    /// Board cell under a surface position, if there is one.
    pub fn cell_at(&self, pos: Pos2) -> Option<(usize, usize)> {
        let x = (pos.x / self.config.cell_size).floor();
        let y = (pos.y / self.config.cell_size).floor();
        if !(x.is_finite() && y.is_finite()) {
            return None;
        }
        let (x, y) = (x as isize, y as isize);
        self.grid.contains(x, y).then_some((x as usize, y as usize))
    }

    /// Sets the cell under `pos` and redraws.
    ///
    /// Positions that fall off the board are ignored. Returns whether a cell
    /// was painted.
    pub fn paint_cell(&mut self, pos: Pos2, alive: bool) -> bool {
        let Some((x, y)) = self.cell_at(pos) else {
            trace!(?pos, "paint outside the board ignored");
            return false;
        };
        debug!(x, y, alive, "paint cell");
        self.grid.set(x, y, alive);
        self.render();
        true
    }

    /// Advances one generation and redraws.
    pub fn step(&mut self) {
        self.grid.advance();
        self.generation += 1;
        debug!(generation = self.generation, population = self.grid.population(), "step");
        self.render();
    }

    /// Kills every cell, resets the generation counter and redraws.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        info!("board cleared");
        self.render();
    }

    /// Replaces the board with `pattern` placed at `origin`.
    ///
    /// Returns how many of its cells fit on the board.
    pub fn apply_pattern(&mut self, pattern: &Pattern, origin: (usize, usize)) -> usize {
        self.grid.clear();
        let placed = patterns::stamp(&mut self.grid, pattern, origin);
        self.generation = 0;
        info!(pattern = pattern.name, ?origin, placed, "pattern applied");
        self.render();
        placed
    }

    /// Flips the running flag and returns the new value.
    ///
    /// Stopping only lowers the flag; a pending tick sees it and exits.
    /// Every start opens a new run epoch so a tick left over from an earlier
    /// run cannot keep stepping after a quick stop/start.
    pub fn toggle_run(&mut self) -> bool {
        self.running = !self.running;
        if self.running {
            self.run_epoch += 1;
            info!(epoch = self.run_epoch, "running");
        } else {
            info!(generation = self.generation, "stopped");
        }
        self.running
    }

    pub fn run_epoch(&self) -> u64 {
        self.run_epoch
    }

    /// Whether a playback loop started in `epoch` should take another step.
    pub fn is_current_run(&self, epoch: u64) -> bool {
        self.running && self.run_epoch == epoch
    }

    /// Button press over the board. Paints immediately, even without motion.
    pub fn on_pointer_down(&mut self, button: PointerButton, pos: Pos2) {
        match button {
            PointerButton::Primary => {
                self.primary_held = true;
                self.paint_cell(pos, true);
            }
            PointerButton::Secondary => {
                self.secondary_held = true;
                self.paint_cell(pos, false);
            }
            _ => {}
        }
    }

    /// Pointer motion. Drags paint live with the primary button and dead
    /// with the secondary one; primary wins if both are held.
    pub fn on_pointer_move(&mut self, pos: Pos2) {
        if self.primary_held {
            self.paint_cell(pos, true);
        } else if self.secondary_held {
            self.paint_cell(pos, false);
        }
    }

    pub fn on_pointer_up(&mut self, button: PointerButton) {
        match button {
            PointerButton::Primary => self.primary_held = false,
            PointerButton::Secondary => self.secondary_held = false,
            _ => {}
        }
    }

    /// The pointer left the board: both buttons count as released.
    pub fn on_pointer_leave(&mut self) {
        self.primary_held = false;
        self.secondary_held = false;
    }

    pub fn is_held(&self, button: PointerButton) -> bool {
        match button {
            PointerButton::Primary => self.primary_held,
            PointerButton::Secondary => self.secondary_held,
            _ => false,
        }
    }

    /// Redraws the whole board: clear, fill live cells, stroke the lattice.
    pub fn render(&mut self) {
        let cell = self.config.cell_size;
        let size = self.config.surface_size();

        self.surface.clear_region(size.x, size.y);

        let rects: Vec<Rect> = self
            .grid
            .live_cells()
            .map(|(x, y)| {
                Rect::from_min_size(pos2(x as f32 * cell, y as f32 * cell), Vec2::splat(cell))
            })
            .collect();
        self.surface.fill_rects(&rects, self.config.live_color);

        let mut lines = Vec::with_capacity(self.grid.rows() + self.grid.columns() + 2);
        for y in 0..=self.grid.rows() {
            let py = y as f32 * cell;
            lines.push([pos2(0.0, py), pos2(size.x, py)]);
        }
        for x in 0..=self.grid.columns() {
            let px = x as f32 * cell;
            lines.push([pos2(px, 0.0), pos2(px, size.y)]);
        }
        self.surface.stroke_lines(&lines, self.config.grid_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;
    use crate::error::LifeError;
    use crate::surface::{DrawCommand, RecordingSurface};

    fn game(columns: usize, rows: usize) -> LifeGame<RecordingSurface> {
        let config = LifeConfig { columns, rows, cell_size: 10.0, ..Default::default() };
        LifeGame::new(config, RecordingSurface::new()).unwrap()
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = LifeConfig { columns: 0, ..Default::default() };
        assert_eq!(
            LifeGame::new(config, RecordingSurface::new()).err(),
            Some(LifeError::InvalidDimensions { columns: 0, rows: 25 })
        );
    }

    #[test]
    fn new_draws_the_empty_board() {
        let game = game(3, 2);
        assert_eq!(game.surface().redraws(), 1);
        assert_eq!(game.population(), 0);
    }

    #[test]
    fn paint_maps_pixels_to_cells() {
        let mut game = game(5, 5);
        assert!(game.paint_cell(pos2(25.0, 9.99), true));
        assert!(game.grid().get(2, 0));
        assert!(game.paint_cell(pos2(49.9, 49.9), true));
        assert!(game.grid().get(4, 4));
        assert!(game.paint_cell(pos2(25.0, 0.0), false));
        assert!(!game.grid().get(2, 0));
        assert_eq!(game.surface().redraws(), 4);
    }

    #[test]
    fn paint_off_board_is_ignored() {
        let mut game = game(5, 5);
        assert!(!game.paint_cell(pos2(50.0, 10.0), true));
        assert!(!game.paint_cell(pos2(-0.5, 10.0), true));
        assert!(!game.paint_cell(pos2(f32::NAN, 10.0), true));
        assert!(!game.paint_cell(pos2(10.0, f32::INFINITY), true));
        assert_eq!(game.population(), 0);
        assert_eq!(game.surface().redraws(), 1);
    }

    #[test]
    fn render_issues_one_ordered_batch() {
        let mut game = game(3, 2);
        game.paint_cell(pos2(15.0, 5.0), true);

        let commands = game.surface().commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], DrawCommand::Clear { width: 30.0, height: 20.0 });
        assert_eq!(
            commands[1],
            DrawCommand::FillRects {
                rects: vec![Rect::from_min_size(pos2(10.0, 0.0), Vec2::splat(10.0))],
                color: game.config().live_color,
            }
        );
        let DrawCommand::StrokeLines { lines, color } = &commands[2] else {
            panic!("expected grid lines, got {:?}", commands[2]);
        };
        assert_eq!(*color, Color32::BLACK);
        // rows + 1 horizontal, then columns + 1 vertical
        assert_eq!(lines.len(), 3 + 4);
        assert_eq!(lines[0], [pos2(0.0, 0.0), pos2(30.0, 0.0)]);
        assert_eq!(lines[2], [pos2(0.0, 20.0), pos2(30.0, 20.0)]);
        assert_eq!(lines[3], [pos2(0.0, 0.0), pos2(0.0, 20.0)]);
        assert_eq!(lines[6], [pos2(30.0, 0.0), pos2(30.0, 20.0)]);
    }

    #[test]
    fn render_fills_nothing_on_an_empty_board() {
        let game = game(2, 2);
        assert_eq!(
            game.surface().commands()[1],
            DrawCommand::FillRects { rects: Vec::new(), color: game.config().live_color }
        );
    }

    #[test]
    fn press_paints_without_motion() {
        let mut game = game(5, 5);
        game.on_pointer_down(PointerButton::Primary, pos2(12.0, 12.0));
        assert!(game.grid().get(1, 1));
        game.on_pointer_up(PointerButton::Primary);

        game.on_pointer_down(PointerButton::Secondary, pos2(12.0, 12.0));
        assert!(!game.grid().get(1, 1));
    }

    #[test]
    fn drag_paints_every_visited_cell() {
        let mut game = game(5, 5);
        game.on_pointer_down(PointerButton::Primary, pos2(5.0, 5.0));
        game.on_pointer_move(pos2(15.0, 5.0));
        game.on_pointer_move(pos2(25.0, 5.0));
        game.on_pointer_up(PointerButton::Primary);
        game.on_pointer_move(pos2(35.0, 5.0));
        let live: Vec<_> = game.grid().live_cells().collect();
        assert_eq!(live, vec![(0, 0), (1, 0), (2, 0)]);

        game.on_pointer_down(PointerButton::Secondary, pos2(5.0, 5.0));
        game.on_pointer_move(pos2(15.0, 5.0));
        game.on_pointer_up(PointerButton::Secondary);
        let live: Vec<_> = game.grid().live_cells().collect();
        assert_eq!(live, vec![(2, 0)]);
    }

    #[test]
    fn primary_wins_when_both_are_held() {
        let mut game = game(5, 5);
        game.on_pointer_down(PointerButton::Secondary, pos2(45.0, 45.0));
        game.on_pointer_down(PointerButton::Primary, pos2(5.0, 5.0));
        game.on_pointer_move(pos2(15.0, 5.0));
        assert!(game.grid().get(1, 0));
    }

    #[test]
    fn leaving_releases_both_buttons() {
        let mut game = game(5, 5);
        game.on_pointer_down(PointerButton::Primary, pos2(5.0, 5.0));
        game.on_pointer_down(PointerButton::Secondary, pos2(5.0, 5.0));
        game.on_pointer_leave();
        assert!(!game.is_held(PointerButton::Primary));
        assert!(!game.is_held(PointerButton::Secondary));

        let before = game.grid().clone();
        game.on_pointer_move(pos2(25.0, 25.0));
        assert_eq!(game.grid(), &before);
    }

    #[test]
    fn middle_button_does_nothing() {
        let mut game = game(5, 5);
        game.on_pointer_down(PointerButton::Middle, pos2(5.0, 5.0));
        game.on_pointer_move(pos2(15.0, 5.0));
        assert_eq!(game.population(), 0);
    }

    #[test]
    fn step_counts_generations_and_redraws() {
        let mut game = game(5, 5);
        game.apply_pattern(&patterns::BLINKER, (1, 2));
        let redraws = game.surface().redraws();
        game.step();
        assert_eq!(game.generation(), 1);
        assert_eq!(game.surface().redraws(), redraws + 1);
        let live: Vec<_> = game.grid().live_cells().collect();
        assert_eq!(live, vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn clear_kills_everything() {
        let mut game = game(5, 5);
        game.apply_pattern(&patterns::BLOCK, (0, 0));
        game.step();
        game.clear();
        assert_eq!(game.population(), 0);
        assert_eq!(game.generation(), 0);
        assert_eq!(
            game.surface().commands()[1],
            DrawCommand::FillRects { rects: Vec::new(), color: game.config().live_color }
        );
    }

    #[test]
    fn toggle_twice_restores_the_flag() {
        let mut game = game(5, 5);
        game.apply_pattern(&patterns::GLIDER, (0, 0));
        let before = game.grid().clone();

        assert!(game.toggle_run());
        assert_eq!(game.run_label(), "stop");
        assert!(!game.toggle_run());
        assert_eq!(game.run_label(), "run");
        assert_eq!(game.grid(), &before);
    }

    #[test]
    fn restart_opens_a_new_epoch() {
        let mut game = game(5, 5);
        game.toggle_run();
        let first = game.run_epoch();
        assert!(game.is_current_run(first));
        game.toggle_run();
        assert!(!game.is_current_run(first));
        game.toggle_run();
        assert!(!game.is_current_run(first));
        assert!(game.is_current_run(game.run_epoch()));
    }
}
