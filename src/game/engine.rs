use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    config::GameConfig,
    direction::Direction,
    grid::CellId,
    snake::Segment,
    state::{FoodItem, GameState},
};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Snake left the grid
    Wall,
    /// Snake hit its own body
    SelfCollision,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Whether the eaten food reversed the snake
    pub reversed: bool,
    /// Collision that ended the run, if one occurred
    pub collision: Option<CollisionKind>,
}

impl StepOutcome {
    fn advanced(ate_food: bool, reversed: bool) -> Self {
        Self {
            ate_food,
            reversed,
            collision: None,
        }
    }

    fn collided(kind: CollisionKind) -> Self {
        Self {
            ate_food: false,
            reversed: false,
            collision: Some(kind),
        }
    }
}

/// The game engine. Owns the state and the RNG; all rules live here.
///
/// There are no recoverable errors: every invalid condition is a state
/// transition, and a dead engine ignores input until [`reset`](Self::reset).
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
    state: GameState,
}

impl GameEngine {
    /// Create an engine with entropy-seeded randomness.
    pub fn new(config: GameConfig) -> Self {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Create an engine with a fixed seed, for reproducible runs.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: GameConfig, rng: StdRng) -> Self {
        let state = GameState::new(&config);
        Self { config, rng, state }
    }

    /// Read-only view of the current state, for rendering.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Overwrite the direction used by the next step. No-op once dead.
    ///
    /// Opposite-direction input is not rejected here; the step resolves it,
    /// since an accidental about-face must be told apart from a
    /// food-triggered reversal.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.state.alive {
            self.state.direction = direction;
        }
    }

    /// Replace the state with the construction-time one.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.config);
    }

    /// Advance the game by one tick.
    pub fn step(&mut self) -> StepOutcome {
        if !self.state.alive {
            return StepOutcome::advanced(false, false);
        }

        let head = self.state.body.head();
        let mut next_coord = head.coord.stepped(self.state.direction);
        if !self.state.grid.contains(next_coord) {
            self.game_over();
            return StepOutcome::collided(CollisionKind::Wall);
        }
        let mut next_cell = self.state.grid.cell_id(next_coord);

        let length = self.state.body.len();
        let tail_cell = self.state.body.tail().cell;
        let probe_hit = {
            let occupied = self.state.body.occupied();
            occupied.from_latest(1) == Some(next_cell)
                || occupied.from_latest(2) == Some(next_cell)
                || occupied.first_inserted() == Some(next_cell)
        };

        if length > 2 && next_cell == tail_cell {
            self.game_over();
            return StepOutcome::collided(CollisionKind::SelfCollision);
        } else if length > 1 && probe_hit {
            // The head is about to double back into a recently occupied
            // cell: reinterpret the input as continuing forward.
            let flipped = self.state.direction.opposite();
            self.state.direction = flipped;
            next_coord = head.coord.stepped(flipped);
            if !self.state.grid.contains(next_coord) {
                self.game_over();
                return StepOutcome::collided(CollisionKind::Wall);
            }
            next_cell = self.state.grid.cell_id(next_coord);
            if self.state.body.occupied().contains(next_cell) {
                self.game_over();
                return StepOutcome::collided(CollisionKind::SelfCollision);
            }
        } else if self.state.body.occupied().contains(next_cell) {
            self.game_over();
            return StepOutcome::collided(CollisionKind::SelfCollision);
        }

        self.state
            .body
            .advance(Segment::new(next_coord, next_cell));

        let ate_food = next_cell == self.state.food.cell;
        let mut reversed = false;
        if ate_food {
            self.grow();
            if self.state.food.reverses_direction {
                self.reverse_snake();
                reversed = true;
            }
            let eaten = self.state.food.cell;
            self.spawn_food(eaten);
            self.state.score += 1;
        }

        StepOutcome::advanced(ate_food, reversed)
    }

    /// Prepend a tail segment one cell behind the tail, along the reverse of
    /// the tail-to-successor direction. Skipped silently when that cell is
    /// off the grid or still occupied.
    fn grow(&mut self) {
        let tail = self.state.body.tail();
        let toward_head = self
            .state
            .body
            .tail_successor()
            .and_then(|next| Direction::between(tail.coord, next.coord))
            .unwrap_or(self.state.direction);

        let growth_coord = tail.coord.stepped(toward_head.opposite());
        if !self.state.grid.contains(growth_coord) {
            // Snake is positioned such that it can't grow; don't do anything.
            return;
        }
        let growth_cell = self.state.grid.cell_id(growth_coord);
        if self.state.body.occupied().contains(growth_cell) {
            return;
        }
        self.state
            .body
            .grow(Segment::new(growth_coord, growth_cell));
    }

    /// Swap head and tail roles: the former tail leads afterward, traveling
    /// opposite to the direction it was linked in.
    fn reverse_snake(&mut self) {
        let tail = self.state.body.tail();
        let toward_head = self
            .state
            .body
            .tail_successor()
            .and_then(|next| Direction::between(tail.coord, next.coord))
            .unwrap_or(self.state.direction);
        self.state.direction = toward_head.opposite();
        self.state.body.reverse();
    }

    /// Place new food uniformly at random, excluding occupied cells and the
    /// just-eaten cell. A body covering the whole grid ends the run instead
    /// of looping.
    fn spawn_food(&mut self, eaten: CellId) {
        let total = self.state.grid.cell_count();
        if self.state.body.len() as u32 >= total {
            self.game_over();
            return;
        }
        loop {
            let candidate = self.rng.gen_range(1..=total);
            if candidate == eaten || self.state.body.occupied().contains(candidate) {
                continue;
            }
            self.state.food = FoodItem {
                cell: candidate,
                reverses_direction: self.rng.gen_bool(self.config.reversal_probability),
            };
            return;
        }
    }

    fn game_over(&mut self) {
        self.state.alive = false;
        self.state.hit_cells = self.state.body.occupied().insertion_order().to_vec();
    }
}
