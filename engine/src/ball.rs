use log::debug;

use crate::{Ball, GameConfig, GameState, Paddle, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BallEvent {
    /// the ball left the field behind this side, costing it a life.
    Missed(Side),
    WallBounce,
    PaddleHit(Side),
}

/// advances the ball by one tick: scoring, wall bounces, paddle hits and then
/// integration, in that order. does nothing without a ball.
pub fn advance_ball(state: &mut GameState, config: &GameConfig) -> Vec<BallEvent> {
    let mut events = Vec::new();
    let Some(mut ball) = state.ball else {
        return events;
    };

    if let Some(side) = missed_side(&ball, config) {
        state.ball = None;
        state.paddle_mut(side).lose_life();
        debug!("{side:?} missed the ball");
        events.push(BallEvent::Missed(side));
        return events;
    }

    if ball.moving_up() && ball.y < config.ball_size {
        ball.y_speed = -ball.y_speed;
        events.push(BallEvent::WallBounce);
    }
    if ball.moving_down() && ball.y > config.height - config.ball_size {
        ball.y_speed = -ball.y_speed;
        events.push(BallEvent::WallBounce);
    }

    if ball.moving_left() && hits_paddle(&ball, &state.player, config) {
        rebound(&mut ball, config);
        events.push(BallEvent::PaddleHit(Side::Player));
    }
    if ball.moving_right() && hits_paddle(&ball, &state.enemy, config) {
        rebound(&mut ball, config);
        events.push(BallEvent::PaddleHit(Side::Enemy));
    }

    ball.x += ball.x_speed;
    ball.y += ball.y_speed;
    state.ball = Some(ball);
    events
}

fn missed_side(ball: &Ball, config: &GameConfig) -> Option<Side> {
    if ball.moving_left() && ball.x < config.ball_size {
        Some(Side::Player)
    } else if ball.moving_right() && ball.x > config.width - config.ball_size {
        Some(Side::Enemy)
    } else {
        None
    }
}

/// edges of the paddle's height are exclusive.
fn hits_paddle(ball: &Ball, paddle: &Paddle, config: &GameConfig) -> bool {
    ball.x + config.ball_size > paddle.x
        && ball.x < paddle.x + config.paddle_width
        && ball.y > paddle.y
        && ball.y < paddle.bottom(config.paddle_height)
}

fn rebound(ball: &mut Ball, config: &GameConfig) {
    ball.x_speed *= -config.rebound_factor;
    ball.y_speed *= config.rebound_factor;
    debug!(
        "paddle hit, ball speed now ({}, {})",
        ball.x_speed, ball.y_speed
    );
}
