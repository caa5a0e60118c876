use log::{debug, info};

use crate::{
    ball::BallEvent,
    render::{draw_end, draw_scene},
    update::step,
    Canvas, ConfigError, GameConfig, GameState, InputTracker, Key, Outcome,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// terminal. nothing changes once a game has ended.
    Ended(Outcome),
}

/// drives a game one tick at a time. the host decides when to tick and
/// what to draw on.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    state: GameState,
    input: InputTracker,
    phase: Phase,
    ticks: u64,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config);
        Ok(Self {
            config,
            state,
            input: InputTracker::default(),
            phase: Phase::Running,
            ticks: 0,
        })
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// runs one tick. without a canvas the tick is skipped entirely.
    pub fn tick(&mut self, canvas: Option<&mut dyn Canvas>) -> Phase {
        let Some(canvas) = canvas else {
            return self.phase;
        };
        if let Phase::Ended(_) = self.phase {
            return self.phase;
        }
        if let Some(outcome) = self.state.outcome() {
            self.input.detach();
            self.phase = Phase::Ended(outcome);
            info!(
                "game over after {} ticks: {} (player {} lives, enemy {} lives)",
                self.ticks,
                outcome.message(),
                self.state.player.lives,
                self.state.enemy.lives
            );
            draw_end(outcome, &self.config, canvas);
            return self.phase;
        }

        let (state, report) = step(self.state.clone(), self.input.current(), &self.config);
        self.state = state;
        self.ticks += 1;
        for event in &report.ball_events {
            if let BallEvent::Missed(side) = event {
                info!(
                    "{side:?} lost a life (player {}, enemy {})",
                    self.state.player.lives, self.state.enemy.lives
                );
            }
        }
        if report.launched {
            debug!("rally started on tick {}", self.ticks);
        }

        draw_scene(&self.state, &self.config, canvas);
        self.phase
    }

    /// draws the current frame again without advancing, e.g. onto a fresh
    /// canvas after a resize. an ended game keeps its end message.
    pub fn redraw(&self, canvas: &mut dyn Canvas) {
        draw_scene(&self.state, &self.config, canvas);
        if let Phase::Ended(outcome) = self.phase {
            draw_end(outcome, &self.config, canvas);
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// number of ticks that advanced the game.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{render::Recording, Ball, Color, Input};

    #[test]
    fn invalid_config_is_rejected() {
        assert_eq!(
            Game::new(GameConfig::default().with_tick_rate(0)).err(),
            Some(ConfigError::InvalidTickRate)
        );
    }

    #[test]
    fn tick_without_canvas_is_a_no_op() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        game.key_down(Key::Space);
        assert_eq!(game.tick(None), Phase::Running);
        assert_eq!(game.ticks(), 0);
        assert_eq!(game.state(), &GameState::new(game.config()));
    }

    #[test]
    fn tick_updates_then_draws() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        game.key_down(Key::ArrowUp);
        let mut canvas = Recording::default();
        assert_eq!(game.tick(Some(&mut canvas)), Phase::Running);
        crate::assert_approx!(game.state().player.y, 205.0);
        assert_eq!(canvas.rects(Color::Black)[0], (20.0, 205.0, 10.0, 300.0));
        game.key_up(Key::ArrowUp);
        game.tick(Some(&mut canvas));
        crate::assert_approx!(game.state().player.y, 205.0);
        assert_eq!(game.ticks(), 2);
    }

    #[test]
    fn ends_when_a_side_runs_out_of_lives() {
        let config = GameConfig::default().with_starting_lives(1);
        let mut game = Game::new(config).unwrap();
        game.state.ball = Some(Ball {
            x: 3.0,
            y: 300.0,
            x_speed: -7.5,
            y_speed: 7.5,
        });
        let mut canvas = Recording::default();
        // the miss itself is a normal tick.
        assert_eq!(game.tick(Some(&mut canvas)), Phase::Running);
        assert_eq!(game.state().player.lives, 0);
        let mut canvas = Recording::default();
        assert_eq!(
            game.tick(Some(&mut canvas)),
            Phase::Ended(Outcome::PlayerLost)
        );
        assert_eq!(canvas.texts(), vec!["You lose!"]);
        assert_eq!(game.input.current(), Input::None);
        assert!(!game.input.is_attached());
    }

    #[test]
    fn nothing_changes_after_the_end() {
        let config = GameConfig::default().with_starting_lives(1);
        let mut game = Game::new(config).unwrap();
        game.state.enemy.lives = 0;
        let mut canvas = Recording::default();
        assert_eq!(
            game.tick(Some(&mut canvas)),
            Phase::Ended(Outcome::PlayerWon)
        );
        assert_eq!(canvas.texts(), vec!["You win!"]);
        let ended = game.state().clone();
        let ticks = game.ticks();
        game.key_down(Key::Space);
        for _ in 0..10 {
            let mut canvas = Recording::default();
            assert_eq!(
                game.tick(Some(&mut canvas)),
                Phase::Ended(Outcome::PlayerWon)
            );
            assert!(canvas.commands.is_empty());
        }
        assert_eq!(game.state(), &ended);
        assert_eq!(game.ticks(), ticks);
    }

    #[test]
    fn redraw_repeats_the_frame_without_ticking() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        let mut canvas = Recording::default();
        game.redraw(&mut canvas);
        assert_eq!(canvas.rects(Color::Black).len(), 2);
        assert!(canvas.texts().is_empty());
        assert_eq!(game.ticks(), 0);

        game.state.enemy.lives = 0;
        game.tick(Some(&mut Recording::default()));
        let ended = game.state().clone();
        let mut canvas = Recording::default();
        game.redraw(&mut canvas);
        assert_eq!(canvas.rects(Color::Black).len(), 2);
        assert_eq!(canvas.texts(), vec!["You win!"]);
        assert_eq!(game.state(), &ended);
        assert_eq!(game.phase(), Phase::Ended(Outcome::PlayerWon));
    }

    #[test]
    fn scripted_game_reaches_the_end() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        let mut canvas = Recording::default();
        let mut phase = Phase::Running;
        // serve every rally and never move the paddle.
        for _ in 0..20_000 {
            canvas.commands.clear();
            if game.state().ball.is_none() {
                game.key_down(Key::Space);
            } else {
                game.key_up(Key::Space);
            }
            phase = game.tick(Some(&mut canvas));
            if phase != Phase::Running {
                break;
            }
            // two paddles plus at most one ball.
            assert!(canvas.rects(Color::Black).len() <= 3);
        }
        assert!(matches!(phase, Phase::Ended(_)));
        let state = game.state();
        assert!(state.player.lives == 0 || state.enemy.lives == 0);
    }
}
