use std::{error::Error, fmt::Display};

pub mod ball;
pub mod config;
pub mod enemy;
pub mod game;
pub mod game_state;
pub mod input;
pub mod player;
pub mod render;
pub mod update;

pub use config::GameConfig;
pub use game::{Game, Phase};
pub use game_state::{Ball, GameState, Outcome, Paddle, Side};
pub use input::{Input, InputTracker, Key};
pub use render::{Canvas, Color, Font};

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ConfigError {
    InvalidFieldSize,
    InvalidPaddleSize,
    PaddleTallerThanField,
    PaddlesOverlap,
    InvalidBallSize,
    InvalidMoveSpeed,
    InvalidSpeedFactor,
    InvalidTrackingThreshold,
    NoLives,
    InvalidTickRate,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidFieldSize => {
                Display::fmt("field width and height must be positive", f)
            }
            ConfigError::InvalidPaddleSize => {
                Display::fmt("paddle width and height must be positive", f)
            }
            ConfigError::PaddleTallerThanField => {
                Display::fmt("paddle is taller than the field", f)
            }
            ConfigError::PaddlesOverlap => {
                Display::fmt("field is too narrow to keep the paddles apart", f)
            }
            ConfigError::InvalidBallSize => Display::fmt("ball size must be positive", f),
            ConfigError::InvalidMoveSpeed => Display::fmt("move speed must be positive", f),
            ConfigError::InvalidSpeedFactor => {
                Display::fmt("launch and rebound factors must be positive", f)
            }
            ConfigError::InvalidTrackingThreshold => {
                Display::fmt("enemy tracking threshold must be between 0 and 1", f)
            }
            ConfigError::NoLives => Display::fmt("at least one life is required", f),
            ConfigError::InvalidTickRate => Display::fmt("tick rate must be at least 1 Hz", f),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
#[macro_export]
macro_rules! assert_approx {
    ($left:expr, $right:expr $(,)?) => {
        assert!(
            float_cmp::approx_eq!(f64, $left, $right, epsilon = 0.000001),
            "{} is not approximately {}",
            $left,
            $right
        )
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! assert_ball {
    ($ball:expr, ($x:expr, $y:expr), ($x_speed:expr, $y_speed:expr) $(,)?) => {{
        let ball = $ball.expect("ball should be in play");
        $crate::assert_approx!(ball.x, $x);
        $crate::assert_approx!(ball.y, $y);
        $crate::assert_approx!(ball.x_speed, $x_speed);
        $crate::assert_approx!(ball.y_speed, $y_speed);
    }};
}
