use std::time::Duration;

use crate::ConfigError;

pub const FIELD_WIDTH: f64 = 1280.0;
pub const FIELD_HEIGHT: f64 = 720.0;
pub const BORDER_OFFSET: f64 = 20.0;
pub const PADDLE_WIDTH: f64 = 10.0;
pub const PADDLE_HEIGHT: f64 = 300.0;
pub const MOVE_SPEED: f64 = 5.0;
pub const BALL_SIZE: f64 = 8.0;
pub const STARTING_LIVES: u32 = 3;
pub const TICK_RATE: u32 = 60;

const _CHECKS: () = {
    assert!(
        PADDLE_HEIGHT < FIELD_HEIGHT,
        "paddles must be shorter than the field or they can never move"
    );
    assert!(
        2.0 * (BORDER_OFFSET + PADDLE_WIDTH) < FIELD_WIDTH,
        "field is too narrow to fit both paddles"
    );
    assert!(
        BALL_SIZE < BORDER_OFFSET,
        "the scoring boundary must sit behind the paddles"
    );
};

/// every tunable of the game. [`GameConfig::default`] reproduces the reference game.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub width: f64,
    pub height: f64,
    /// gap between a side wall and the outer edge of its paddle.
    pub border_offset: f64,
    pub paddle_width: f64,
    pub paddle_height: f64,
    /// distance a paddle moves per tick. also the base ball speed.
    pub move_speed: f64,
    pub ball_size: f64,
    /// the ball is launched at `move_speed * launch_factor` on both axes.
    pub launch_factor: f64,
    /// applied to both velocity components on every paddle hit.
    pub rebound_factor: f64,
    pub enemy_dead_zone: f64,
    /// fraction of the field width the ball must cross before the enemy chases it.
    pub enemy_tracking_threshold: f64,
    pub starting_lives: u32,
    pub lives_x_offset: f64,
    pub lives_y_offset: f64,
    pub lives_spacing: f64,
    pub lives_size: f64,
    pub end_font_size: f64,
    pub tick_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            border_offset: BORDER_OFFSET,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            move_speed: MOVE_SPEED,
            ball_size: BALL_SIZE,
            launch_factor: 1.5,
            rebound_factor: 1.1,
            enemy_dead_zone: 20.0,
            enemy_tracking_threshold: 0.4,
            starting_lives: STARTING_LIVES,
            lives_x_offset: 50.0,
            lives_y_offset: 40.0,
            lives_spacing: 15.0,
            lives_size: 20.0,
            end_font_size: 60.0,
            tick_rate: TICK_RATE,
        }
    }
}

impl GameConfig {
    pub fn with_starting_lives(mut self, lives: u32) -> Self {
        self.starting_lives = lives;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: u32) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    /// horizontal position of the player's paddle.
    pub fn player_x(&self) -> f64 {
        self.border_offset
    }

    /// horizontal position of the enemy's paddle.
    pub fn enemy_x(&self) -> f64 {
        self.width - self.border_offset - self.paddle_width
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.width) || !is_positive(self.height) {
            return Err(ConfigError::InvalidFieldSize);
        }
        if !is_positive(self.paddle_width) || !is_positive(self.paddle_height) {
            return Err(ConfigError::InvalidPaddleSize);
        }
        if self.paddle_height > self.height {
            return Err(ConfigError::PaddleTallerThanField);
        }
        if !self.border_offset.is_finite()
            || self.border_offset < 0.0
            || 2.0 * (self.border_offset + self.paddle_width) >= self.width
        {
            return Err(ConfigError::PaddlesOverlap);
        }
        if !is_positive(self.ball_size) {
            return Err(ConfigError::InvalidBallSize);
        }
        if !is_positive(self.move_speed) {
            return Err(ConfigError::InvalidMoveSpeed);
        }
        if !is_positive(self.launch_factor) || !is_positive(self.rebound_factor) {
            return Err(ConfigError::InvalidSpeedFactor);
        }
        if !(0.0..=1.0).contains(&self.enemy_tracking_threshold) {
            return Err(ConfigError::InvalidTrackingThreshold);
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::InvalidTickRate);
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
