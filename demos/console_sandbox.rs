use gravity_sandbox::{
    core::hooks,
    driver::FrameDriver,
    math::Vector2,
    render::{arrowhead, Canvas, Color, GradientStop, Glow},
    ForceMode, Scene, SceneConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{stdout, Stdout, Write};
use crossterm::{
    ExecutableCommand, QueueableCommand,
    terminal::{Clear, ClearType},
    cursor::{Hide, Show, MoveTo},
    style::{self, Print, SetForegroundColor, ResetColor},
};

// Each terminal cell stands for a block of canvas pixels
const CELL_WIDTH: f64 = 8.0;
const CELL_HEIGHT: f64 = 16.0;
const SURFACE_FRAMES: u64 = 600;
const SPACE_FRAMES: u64 = 900;
const NUM_BALLS: usize = 12;

// Terminal size detection
fn get_terminal_size() -> (usize, usize) {
    match term_size::dimensions() {
        Some((w, h)) => (w, h),
        None => (80, 24),
    }
}

#[derive(Clone, Copy)]
struct Cell {
    glyph: char,
    color: style::Color,
}

const BLANK: Cell = Cell { glyph: ' ', color: style::Color::Reset };

/// Text-mode canvas: rasterises draw calls into a grid of coloured glyphs
struct AsciiCanvas {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl AsciiCanvas {
    fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cells: vec![BLANK; columns * rows],
        }
    }

    fn pixel_size(&self) -> (f64, f64) {
        (self.columns as f64 * CELL_WIDTH, self.rows as f64 * CELL_HEIGHT)
    }

    fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn plot(&mut self, point: Vector2, glyph: char, color: Color) {
        let column = (point.x / CELL_WIDTH).floor();
        let row = (point.y / CELL_HEIGHT).floor();
        if column < 0.0 || row < 0.0 {
            return;
        }
        let (column, row) = (column as usize, row as usize);
        if column >= self.columns || row >= self.rows {
            return;
        }
        self.cells[row * self.columns + column] = Cell { glyph, color: to_terminal(color) };
    }

    fn disc(&mut self, center: Vector2, radius: f64, glyph: char, color: Color) {
        // Cover every cell whose center falls inside the disc, and at least the center cell
        self.plot(center, glyph, color);
        let reach_x = (radius / CELL_WIDTH).ceil() as i64;
        let reach_y = (radius / CELL_HEIGHT).ceil() as i64;
        for dy in -reach_y..=reach_y {
            for dx in -reach_x..=reach_x {
                let offset = Vector2::new(dx as f64 * CELL_WIDTH, dy as f64 * CELL_HEIGHT);
                if offset.magnitude() <= radius {
                    self.plot(center + offset, glyph, color);
                }
            }
        }
    }

    fn present(&self, out: &mut Stdout) -> std::io::Result<()> {
        for row in 0..self.rows {
            out.queue(MoveTo(0, row as u16))?;
            for cell in &self.cells[row * self.columns..(row + 1) * self.columns] {
                out.queue(SetForegroundColor(cell.color))?
                    .queue(Print(cell.glyph))?;
            }
        }
        out.queue(ResetColor)?;
        out.flush()
    }
}

impl Canvas for AsciiCanvas {
    fn fill_circle(&mut self, center: Vector2, radius: f64, color: Color) {
        if radius <= 1.0 {
            // trail dots fade out as '.'
            let glyph = if color.a < 0.5 { '.' } else { '·' };
            self.plot(center, glyph, color);
        } else {
            self.disc(center, radius, '●', color);
        }
    }

    fn fill_radial_gradient(&mut self, center: Vector2, radius: f64, stops: &[GradientStop], glow: Glow) {
        self.disc(center, radius + glow.blur / 4.0, '░', glow.color);
        let core = stops.first().map(|stop| stop.color).unwrap_or(Color::YELLOW);
        self.disc(center, radius, '@', core);
    }

    fn draw_arrow(&mut self, from: Vector2, to: Vector2, color: Color, _line_width: f64, head_radius: f64) {
        let length = Vector2::between(from, to).magnitude();
        let steps = (length / CELL_WIDTH).ceil().max(1.0) as usize;
        for i in 1..steps {
            let t = i as f64 / steps as f64;
            self.plot(from + (to - from) * t, '-', color);
        }
        let [tip, _, _] = arrowhead(from, to, head_radius);
        self.plot(tip, '>', color);
    }
}

fn to_terminal(color: Color) -> style::Color {
    style::Color::Rgb { r: color.r, g: color.g, b: color.b }
}

fn run_mode(
    out: &mut Stdout,
    canvas: &mut AsciiCanvas,
    mode: ForceMode,
    frames: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = canvas.pixel_size();
    let config = SceneConfig {
        show_velocity_vector: mode == ForceMode::SurfaceGravity,
        ..SceneConfig::for_mode(mode)
    };
    let mut scene = Scene::with_config(width, height, config)?;
    scene.set_post_step(hooks::lock_anchor());

    let mut rng = StdRng::seed_from_u64(7);
    let count = if mode == ForceMode::SurfaceGravity { NUM_BALLS } else { NUM_BALLS * 2 };
    scene.populate(&mut rng, count)?;

    let driver = FrameDriver::default();
    let mut io_error = None;
    driver.run_for(&mut scene, canvas, frames, |scene, canvas| {
        if io_error.is_some() {
            return;
        }
        if let Err(err) = canvas.present(out) {
            io_error = Some(err);
        }
        canvas.clear();
        // no audio in a terminal
        scene.events_mut().drain_sound_cues();
        scene.events_mut().drain_object_events();
    });
    match io_error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (columns, rows) = get_terminal_size();
    let mut canvas = AsciiCanvas::new(columns, rows.saturating_sub(1).max(1));

    let mut out = stdout();
    out.execute(Hide)?;
    out.execute(Clear(ClearType::All))?;

    let result = run_mode(&mut out, &mut canvas, ForceMode::SurfaceGravity, SURFACE_FRAMES)
        .and_then(|_| run_mode(&mut out, &mut canvas, ForceMode::SpaceGravity, SPACE_FRAMES));

    out.execute(Show)?;
    out.execute(MoveTo(0, rows as u16))?;
    result
}
