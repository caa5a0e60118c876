use crate::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Player,
    Enemy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    PlayerWon,
    PlayerLost,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::PlayerWon => "You win!",
            Outcome::PlayerLost => "You lose!",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paddle {
    pub x: f64,
    /// top edge.
    pub y: f64,
    pub lives: u32,
}

impl Paddle {
    pub fn center(&self, paddle_height: f64) -> f64 {
        self.y + paddle_height / 2.0
    }

    pub fn bottom(&self, paddle_height: f64) -> f64 {
        self.y + paddle_height
    }

    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub x_speed: f64,
    pub y_speed: f64,
}

impl Ball {
    pub fn moving_left(&self) -> bool {
        self.x_speed < 0.0
    }

    pub fn moving_right(&self) -> bool {
        self.x_speed > 0.0
    }

    pub fn moving_up(&self) -> bool {
        self.y_speed < 0.0
    }

    pub fn moving_down(&self) -> bool {
        self.y_speed > 0.0
    }
}

/// the whole mutable state of a game. owned by the loop driver and threaded
/// through [`crate::update::step`] once per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Paddle,
    pub enemy: Paddle,
    pub ball: Option<Ball>,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        let y = config.height / 2.0 - config.paddle_height / 2.0;
        Self {
            player: Paddle {
                x: config.player_x(),
                y,
                lives: config.starting_lives,
            },
            enemy: Paddle {
                x: config.enemy_x(),
                y,
                lives: config.starting_lives,
            },
            ball: None,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    /// `None` while both sides still have lives left.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.player.lives == 0 {
            Some(Outcome::PlayerLost)
        } else if self.enemy.lives == 0 {
            Some(Outcome::PlayerWon)
        } else {
            None
        }
    }
}
