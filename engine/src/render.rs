use crate::{GameConfig, GameState, Outcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    Green,
    Red,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub size_px: f64,
    pub family: &'static str,
}

impl Font {
    pub fn sans_serif(size_px: f64) -> Self {
        Self {
            size_px,
            family: "sans-serif",
        }
    }
}

/// a 2D drawing surface in field coordinates.
pub trait Canvas {
    fn clear(&mut self, width: f64, height: f64);
    fn set_fill(&mut self, color: Color);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_font(&mut self, font: Font);
    /// draws `text` horizontally centred on `x`.
    fn fill_text_centered(&mut self, text: &str, x: f64, y: f64);
}

/// repaints the whole field from `state`.
pub fn draw_scene(state: &GameState, config: &GameConfig, canvas: &mut dyn Canvas) {
    canvas.clear(config.width, config.height);

    let step = config.lives_spacing + config.lives_size;

    canvas.set_fill(Color::Black);
    let player = &state.player;
    canvas.fill_rect(player.x, player.y, config.paddle_width, config.paddle_height);
    canvas.set_fill(Color::Green);
    for i in 0..player.lives {
        canvas.fill_rect(
            config.lives_x_offset + i as f64 * step,
            config.lives_y_offset,
            config.lives_size,
            config.lives_size,
        );
    }

    canvas.set_fill(Color::Black);
    let enemy = &state.enemy;
    canvas.fill_rect(enemy.x, enemy.y, config.paddle_width, config.paddle_height);
    canvas.set_fill(Color::Red);
    for i in 0..enemy.lives {
        canvas.fill_rect(
            config.width - (config.lives_x_offset + config.lives_size) - i as f64 * step,
            config.lives_y_offset,
            config.lives_size,
            config.lives_size,
        );
    }

    canvas.set_fill(Color::Black);
    if let Some(ball) = &state.ball {
        canvas.fill_rect(ball.x, ball.y, config.ball_size, config.ball_size);
    }
}

/// writes the end message over whatever is already on the canvas.
pub fn draw_end(outcome: Outcome, config: &GameConfig, canvas: &mut dyn Canvas) {
    canvas.set_font(Font::sans_serif(config.end_font_size));
    canvas.fill_text_centered(outcome.message(), config.width / 2.0, config.height / 2.0);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    Fill(Color),
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Font(Font),
    Text { text: String, x: f64, y: f64 },
}

/// a canvas that keeps every draw call instead of drawing.
#[derive(Debug, Default)]
pub struct Recording {
    pub commands: Vec<DrawCommand>,
}

impl Recording {
    /// the rectangles drawn in `color`, in draw order.
    pub fn rects(&self, color: Color) -> Vec<(f64, f64, f64, f64)> {
        let mut fill = None;
        let mut rects = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::Fill(c) => fill = Some(*c),
                DrawCommand::Rect {
                    x,
                    y,
                    width,
                    height,
                } if fill == Some(color) => rects.push((*x, *y, *width, *height)),
                _ => {}
            }
        }
        rects
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for Recording {
    fn clear(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn set_fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn set_font(&mut self, font: Font) {
        self.commands.push(DrawCommand::Font(font));
    }

    fn fill_text_centered(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
        });
    }
}
