use log::debug;

use crate::{Ball, GameConfig, GameState, Input};

/// applies one tick of player input. returns `true` if a ball was launched.
pub fn move_player(state: &mut GameState, input: Input, config: &GameConfig) -> bool {
    let player = &mut state.player;
    match input {
        Input::Up if player.y > 0.0 => {
            player.y -= config.move_speed;
        }
        Input::Down if player.bottom(config.paddle_height) < config.height => {
            player.y += config.move_speed;
        }
        Input::Shoot if state.ball.is_none() => {
            let speed = config.move_speed * config.launch_factor;
            let ball = Ball {
                x: player.x + config.paddle_width,
                y: player.center(config.paddle_height),
                x_speed: speed,
                y_speed: speed,
            };
            debug!("ball launched from ({}, {})", ball.x, ball.y);
            state.ball = Some(ball);
            return true;
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod test {
    use super::*;

    fn setup() -> (GameState, GameConfig) {
        let config = GameConfig::default();
        (GameState::new(&config), config)
    }

    #[test]
    fn up_and_down() {
        let (mut state, config) = setup();
        move_player(&mut state, Input::Up, &config);
        crate::assert_approx!(state.player.y, 205.0);
        move_player(&mut state, Input::Down, &config);
        move_player(&mut state, Input::Down, &config);
        crate::assert_approx!(state.player.y, 215.0);
        move_player(&mut state, Input::None, &config);
        crate::assert_approx!(state.player.y, 215.0);
    }

    #[test]
    fn stays_inside_the_field() {
        let (mut state, config) = setup();
        for _ in 0..1000 {
            move_player(&mut state, Input::Up, &config);
            assert!(state.player.y >= 0.0);
        }
        crate::assert_approx!(state.player.y, 0.0);
        for _ in 0..1000 {
            move_player(&mut state, Input::Down, &config);
            assert!(state.player.bottom(config.paddle_height) <= config.height);
        }
        crate::assert_approx!(state.player.y, 420.0);
    }

    #[test]
    fn shoot_spawns_a_ball() {
        let (mut state, config) = setup();
        assert!(move_player(&mut state, Input::Shoot, &config));
        crate::assert_ball!(state.ball, (30.0, 360.0), (7.5, 7.5));
        // the paddle does not move while shooting.
        crate::assert_approx!(state.player.y, 210.0);
    }

    #[test]
    fn shoot_with_a_ball_in_play_is_a_no_op() {
        let (mut state, config) = setup();
        let ball = Ball {
            x: 600.0,
            y: 100.0,
            x_speed: -3.0,
            y_speed: 2.0,
        };
        state.ball = Some(ball);
        assert!(!move_player(&mut state, Input::Shoot, &config));
        assert_eq!(state.ball, Some(ball));
    }
}
