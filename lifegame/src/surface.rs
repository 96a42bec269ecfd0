// surface.rs - The drawing surface the board renders onto

use egui::{Color32, Pos2, Rect};

/// A 2D paint target.
///
/// The game only ever issues three primitives per redraw, in order: clear the
/// board area, fill the live cells, stroke the grid lines. Coordinates are
/// board-local pixels with the origin at the top-left corner.
pub trait Surface {
    /// Erases a `width x height` region anchored at the origin.
    fn clear_region(&mut self, width: f32, height: f32);

    fn fill_rects(&mut self, rects: &[Rect], color: Color32);

    /// Strokes straight segments, each given by its two end points.
    fn stroke_lines(&mut self, lines: &[[Pos2; 2]], color: Color32);
}

/// One recorded paint primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    FillRects { rects: Vec<Rect>, color: Color32 },
    StrokeLines { lines: Vec<[Pos2; 2]>, color: Color32 },
}

/// Keeps the most recent redraw as a list of commands.
///
/// Immediate-mode front ends replay [`RecordingSurface::commands`] every
/// frame. A `clear_region` starts a new batch, so the list never holds more
/// than one redraw.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    redraws: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// How many batches have been started so far.
    pub fn redraws(&self) -> u64 {
        self.redraws
    }
}

impl Surface for RecordingSurface {
    fn clear_region(&mut self, width: f32, height: f32) {
        self.commands.clear();
        self.redraws += 1;
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rects(&mut self, rects: &[Rect], color: Color32) {
        self.commands.push(DrawCommand::FillRects { rects: rects.to_vec(), color });
    }

    fn stroke_lines(&mut self, lines: &[[Pos2; 2]], color: Color32) {
        self.commands.push(DrawCommand::StrokeLines { lines: lines.to_vec(), color });
    }
}
