use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info, trace};

use super::{
    action::Command,
    config::GameConfig,
    error::ConfigError,
    food::place_food,
    position::Position,
    snake::{CollisionType, Snake},
};

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    Collision(CollisionType),
    /// The snake covers every cell, so no food can be placed
    BoardFilled,
}

/// Round state machine: `Playing` until a collision, then frozen until restart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver(GameOverCause),
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Collision that ended the round, if one occurred
    pub collision: Option<CollisionType>,
}

/// The game: owns the snake, the food, the score and the round status
///
/// A host advances it with [`Game::tick`] and feeds player intent through
/// [`Game::handle_input`]. Both take `&mut self`, so input and ticks are
/// serialized by whoever owns the value.
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    config: GameConfig,
    snake: Snake,
    food: Position,
    score: u32,
    ticks: u64,
    status: GameStatus,
    rng: R,
}

impl Game<StdRng> {
    /// Create a game seeded from system entropy
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a game whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let snake = config.spawn_snake();
        // validate() guarantees a free cell next to the spawn body
        let food = place_food(&snake, config.grid_size, &mut rng).ok_or(
            ConfigError::SnakeDoesNotFit {
                length: config.initial_snake_length,
                grid_size: config.grid_size,
            },
        )?;

        Ok(Self {
            config,
            snake,
            food,
            score: 0,
            ticks: 0,
            status: GameStatus::Playing,
            rng,
        })
    }

    /// Advance the simulation by one cell
    ///
    /// Order matters: the buffered direction is committed before moving,
    /// food is replaced before anything else reads it, and collision is
    /// judged on the body after the move. A no-op once the game is over.
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::default();
        }

        self.snake.commit_direction();
        let ate_food = self.snake.advance(self.food);
        self.ticks += 1;

        if ate_food {
            self.score += self.config.food_score;
            debug!(score = self.score, length = self.snake.len(), "food eaten");

            match self.generate_food() {
                Some(food) => self.food = food,
                None => self.end_round(GameOverCause::BoardFilled),
            }
        }

        let collision = self.snake.collision(self.config.grid_size);
        if let Some(kind) = collision {
            self.end_round(GameOverCause::Collision(kind));
        }

        trace!(
            tick = self.ticks,
            head = ?self.snake.head(),
            direction = ?self.snake.direction(),
            "tick"
        );

        TickOutcome {
            ate_food,
            collision,
        }
    }

    /// Choose a free cell for the next food
    ///
    /// The result never overlaps the current body. `None` means the snake
    /// occupies the whole grid.
    pub fn generate_food(&mut self) -> Option<Position> {
        let food = place_food(&self.snake, self.config.grid_size, &mut self.rng);
        if let Some(pos) = food {
            debug!(x = pos.x, y = pos.y, "food placed");
        }
        food
    }

    /// Apply one player intent
    ///
    /// While playing, moves are buffered on the snake and restart is ignored.
    /// Once over, only restart is accepted. Rejected inputs are dropped
    /// silently.
    pub fn handle_input(&mut self, command: Command) {
        match (command, self.is_over()) {
            (Command::Move(direction), false) => self.snake.set_pending_direction(direction),
            (Command::Restart, true) => self.restart(),
            (command, over) => trace!(?command, over, "input ignored"),
        }
    }

    /// Reset to a fresh round: new snake, new food, zero score
    pub fn restart(&mut self) {
        self.snake = self.config.spawn_snake();
        self.score = 0;
        self.ticks = 0;
        self.status = GameStatus::Playing;
        info!("game restarted");

        // Unreachable for a validated config, whose spawn body leaves a free cell
        match self.generate_food() {
            Some(food) => self.food = food,
            None => self.end_round(GameOverCause::BoardFilled),
        }
    }

    fn end_round(&mut self, cause: GameOverCause) {
        if self.is_over() {
            return;
        }
        self.status = GameStatus::GameOver(cause);
        info!(
            ?cause,
            score = self.score,
            length = self.snake.len(),
            ticks = self.ticks,
            "game over"
        );
    }
}

impl<R> Game<R> {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid_size(&self) -> usize {
        self.config.grid_size
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Body segments, head first
    pub fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.snake.body().iter().copied()
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Ticks applied since the last restart
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver(_))
    }
}
