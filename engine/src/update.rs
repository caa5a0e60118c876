use crate::{
    ball::{advance_ball, BallEvent},
    enemy::{move_enemy, EnemyMode},
    player::move_player,
    GameConfig, GameState, Input,
};

/// what happened during a single [`step`].
#[derive(Debug, PartialEq)]
pub struct TickReport {
    pub launched: bool,
    pub enemy_mode: EnemyMode,
    pub ball_events: Vec<BallEvent>,
}

/// advances the game by one tick: player input, then the enemy, then the ball.
pub fn step(mut state: GameState, input: Input, config: &GameConfig) -> (GameState, TickReport) {
    let launched = move_player(&mut state, input, config);
    let enemy_mode = move_enemy(&mut state, config);
    let ball_events = advance_ball(&mut state, config);
    (
        state,
        TickReport {
            launched,
            enemy_mode,
            ball_events,
        },
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Ball, Side};

    #[test]
    fn shoot_from_a_fresh_state() {
        let config = GameConfig::default();
        let (state, report) = step(GameState::new(&config), Input::Shoot, &config);
        assert_eq!(
            report,
            TickReport {
                launched: true,
                enemy_mode: EnemyMode::Idle,
                ball_events: vec![],
            }
        );
        // the new ball is integrated in the same tick it is launched.
        crate::assert_ball!(state.ball, (37.5, 367.5), (7.5, 7.5));
        assert_eq!(state.player.lives, 3);
        assert_eq!(state.enemy.lives, 3);
    }

    #[test]
    fn only_one_ball_at_a_time() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        let mut launches = 0;
        for _ in 0..5000 {
            let had_ball = state.ball.is_some();
            let (next, report) = step(state, Input::Shoot, &config);
            assert!(!(had_ball && report.launched));
            if report.launched {
                launches += 1;
            }
            state = next;
            if state.outcome().is_some() {
                break;
            }
        }
        assert!(launches > 1);
    }

    #[test]
    fn miss_skips_the_rest_of_the_ball_logic() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.ball = Some(Ball {
            x: 3.0,
            y: 4.0,
            x_speed: -7.5,
            y_speed: -7.5,
        });
        let (state, report) = step(state, Input::None, &config);
        assert_eq!(report.ball_events, vec![BallEvent::Missed(Side::Player)]);
        assert_eq!(state.ball, None);
        assert_eq!(state.player.lives, 2);
    }

    #[test]
    fn enemy_tracks_once_the_ball_crosses_the_threshold() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.ball = Some(Ball {
            x: 600.0,
            y: 50.0,
            x_speed: 7.5,
            y_speed: 7.5,
        });
        let (state, report) = step(state, Input::None, &config);
        assert_eq!(report.enemy_mode, EnemyMode::Tracking);
        crate::assert_approx!(state.enemy.y, 205.0);
    }
}
