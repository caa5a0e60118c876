use crate::{Ball, GameConfig, GameState};

/// what the enemy paddle is doing this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyMode {
    /// no ball, or the ball is still on the player's side: drift back to the middle.
    Idle,
    /// chase the ball's height.
    Tracking,
}

impl EnemyMode {
    pub fn select(ball: Option<&Ball>, config: &GameConfig) -> Self {
        match ball {
            Some(ball) if ball.x >= config.width * config.enemy_tracking_threshold => {
                EnemyMode::Tracking
            }
            _ => EnemyMode::Idle,
        }
    }
}

pub fn move_enemy(state: &mut GameState, config: &GameConfig) -> EnemyMode {
    let mode = EnemyMode::select(state.ball.as_ref(), config);
    let enemy = &mut state.enemy;
    let center = enemy.center(config.paddle_height);
    match (mode, state.ball.as_ref()) {
        (EnemyMode::Tracking, Some(ball)) => {
            if center > ball.y && enemy.y > 0.0 {
                enemy.y -= config.move_speed;
            } else if enemy.bottom(config.paddle_height) < config.height {
                enemy.y += config.move_speed;
            }
        }
        _ => {
            let middle = config.height / 2.0;
            if center < middle - config.enemy_dead_zone {
                enemy.y += config.move_speed;
            } else if center > middle + config.enemy_dead_zone {
                enemy.y -= config.move_speed;
            }
        }
    }
    mode
}
