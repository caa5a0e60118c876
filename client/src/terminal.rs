use std::io::{self, stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute, queue,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use engine::{Canvas, Color, Font, GameConfig};
use log::{info, warn};

/// below this the field is unreadable and ticks are skipped.
pub const MIN_COLUMNS: u16 = 32;
pub const MIN_ROWS: u16 = 9;

const BACKGROUND: Rgb = Rgb(255, 255, 255);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Rgb(0, 0, 0),
            Color::Green => Rgb(0, 128, 0),
            Color::Red => Rgb(255, 0, 0),
        }
    }
}

impl From<Rgb> for style::Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        style::Color::Rgb { r, g, b }
    }
}

/// raw mode and the alternate screen for as long as the game runs.
pub struct TerminalSession {
    reports_releases: bool,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut session = Self {
            reports_releases: false,
        };
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            session.reports_releases = true;
        } else {
            info!("terminal does not report key releases, falling back to hold timeouts");
        }
        Ok(session)
    }

    pub fn reports_releases(&self) -> bool {
        self.reports_releases
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = stdout();
        if self.reports_releases {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(stdout, ResetColor, LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
    }
}

/// the drawing context, present only while the terminal is large enough.
pub struct TerminalSurface {
    field_width: f64,
    field_height: f64,
    canvas: Option<TerminalCanvas>,
}

impl TerminalSurface {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            field_width: config.width,
            field_height: config.height,
            canvas: None,
        }
    }

    pub fn refresh(&mut self) -> io::Result<()> {
        let (columns, rows) = terminal::size()?;
        self.resize(columns, rows);
        Ok(())
    }

    pub fn resize(&mut self, columns: u16, rows: u16) {
        if columns < MIN_COLUMNS || rows < MIN_ROWS {
            if self.canvas.take().is_some() {
                warn!("terminal shrank to {columns}x{rows}, pausing");
            }
            return;
        }
        if self.canvas.as_ref().map(TerminalCanvas::size) != Some((columns, rows)) {
            info!("drawing on a {columns}x{rows} terminal");
            self.canvas = Some(TerminalCanvas::new(
                columns,
                rows,
                self.field_width,
                self.field_height,
            ));
        }
    }

    pub fn context(&mut self) -> Option<&mut TerminalCanvas> {
        self.canvas.as_mut()
    }

    pub fn present<W: Write>(&self, w: &mut W) -> io::Result<()> {
        match &self.canvas {
            Some(canvas) => canvas.render(w),
            None => Ok(()),
        }
    }
}

/// a pixel buffer drawn with half blocks, two pixels per terminal cell.
pub struct TerminalCanvas {
    columns: u16,
    rows: u16,
    scale_x: f64,
    scale_y: f64,
    pixels: Vec<Rgb>,
    text: Vec<Option<(char, Rgb)>>,
    fill: Rgb,
}

impl TerminalCanvas {
    pub fn new(columns: u16, rows: u16, field_width: f64, field_height: f64) -> Self {
        let cells = columns as usize * rows as usize;
        Self {
            columns,
            rows,
            scale_x: columns as f64 / field_width,
            scale_y: (rows as f64 * 2.0) / field_height,
            pixels: vec![BACKGROUND; cells * 2],
            text: vec![None; cells],
            fill: Rgb::from(Color::Black),
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.columns, self.rows)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.columns as usize + x]
    }

    pub fn text_at(&self, column: usize, row: usize) -> Option<char> {
        self.text[row * self.columns as usize + column].map(|(c, _)| c)
    }

    pub fn render<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let columns = self.columns as usize;
        let mut fg = None;
        let mut bg = None;
        for row in 0..self.rows as usize {
            queue!(w, MoveTo(0, row as u16))?;
            for column in 0..columns {
                let top = self.pixel(column, row * 2);
                let bottom = self.pixel(column, row * 2 + 1);
                let (glyph, glyph_fg, glyph_bg) = match self.text[row * columns + column] {
                    Some((c, colour)) => (c, colour, top),
                    None if top == bottom => (' ', top, top),
                    None => ('\u{2580}', top, bottom),
                };
                if glyph != ' ' && fg != Some(glyph_fg) {
                    queue!(w, SetForegroundColor(glyph_fg.into()))?;
                    fg = Some(glyph_fg);
                }
                if bg != Some(glyph_bg) {
                    queue!(w, SetBackgroundColor(glyph_bg.into()))?;
                    bg = Some(glyph_bg);
                }
                queue!(w, Print(glyph))?;
            }
        }
        queue!(w, ResetColor)?;
        w.flush()
    }
}

fn span(start: f64, end: f64, len: usize) -> std::ops::Range<usize> {
    let start = start.clamp(0.0, len as f64) as usize;
    let end = end.clamp(0.0, len as f64) as usize;
    start..end.max(start)
}

impl Canvas for TerminalCanvas {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.pixels.fill(BACKGROUND);
        self.text.fill(None);
    }

    fn set_fill(&mut self, color: Color) {
        self.fill = color.into();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let x0 = (x * self.scale_x).floor();
        let y0 = (y * self.scale_y).floor();
        // anything visible on the field covers at least one pixel.
        let x1 = ((x + width) * self.scale_x).ceil().max(x0 + 1.0);
        let y1 = ((y + height) * self.scale_y).ceil().max(y0 + 1.0);
        let columns = self.columns as usize;
        for py in span(y0, y1, self.rows as usize * 2) {
            for px in span(x0, x1, columns) {
                self.pixels[py * columns + px] = self.fill;
            }
        }
    }

    // cells have a fixed size.
    fn set_font(&mut self, _font: Font) {}

    fn fill_text_centered(&mut self, text: &str, x: f64, y: f64) {
        let columns = self.columns as usize;
        let last_row = (self.rows as usize).saturating_sub(1);
        let row = ((y * self.scale_y / 2.0).floor().max(0.0) as usize).min(last_row);
        let len = text.chars().count() as f64;
        let start = (x * self.scale_x - len / 2.0).round().max(0.0) as usize;
        for (column, c) in (start..columns).zip(text.chars()) {
            self.text[row * columns + column] = Some((c, self.fill));
        }
    }
}
