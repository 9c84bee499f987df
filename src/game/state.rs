use crate::game::config::GameConfig;
use crate::game::direction::Direction;
use crate::game::grid::{CellId, Coord, Grid};
use crate::game::snake::{Segment, SnakeBody};

/// The single active food cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodItem {
    pub cell: CellId,
    /// Decided at spawn time; eating this food reverses the snake.
    pub reverses_direction: bool,
}

/// Render classification of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Food,
    FoodReversing,
    SnakeBody,
    /// Body cell while the game is over, outside the frozen hit list.
    SnakeBodyHit,
    /// Cell frozen in the hit list at the moment of death.
    DeadCellHit,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub body: SnakeBody,
    pub food: FoodItem,
    pub direction: Direction,
    pub score: u32,
    pub alive: bool,
    /// Occupied cells at the moment of death, in insertion order. Empty
    /// while alive.
    pub hit_cells: Vec<CellId>,
}

impl GameState {
    /// The construction-time state: a length-1 body a third of the way into
    /// the grid, food 5 cell ids ahead of the head, traveling right.
    pub fn new(config: &GameConfig) -> Self {
        let grid = Grid::new(config.grid_height, config.grid_width);
        let seed = Coord::new(
            (config.grid_height as f64 / 3.0).round() as i32,
            (config.grid_width as f64 / 3.0).round() as i32,
        );
        let seed_cell = grid.cell_id(seed);

        Self {
            grid,
            body: SnakeBody::new(Segment::new(seed, seed_cell)),
            food: FoodItem {
                cell: seed_cell + 5,
                reverses_direction: false,
            },
            direction: Direction::Right,
            score: 0,
            alive: true,
            hit_cells: Vec::new(),
        }
    }

    /// Classify one cell for rendering. Body cells win over the food cell;
    /// once dead, the frozen hit cells win over everything.
    pub fn classify(&self, cell: CellId) -> CellKind {
        if !self.alive && self.hit_cells.contains(&cell) {
            return CellKind::DeadCellHit;
        }
        if self.body.occupied().contains(cell) {
            return if self.alive {
                CellKind::SnakeBody
            } else {
                CellKind::SnakeBodyHit
            };
        }
        if cell == self.food.cell {
            return if self.food.reverses_direction {
                CellKind::FoodReversing
            } else {
                CellKind::Food
            };
        }
        CellKind::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(&GameConfig::default());
        // round(13 / 3) = 4, round(25 / 3) = 8, cell id 109
        assert_eq!(state.body.len(), 1);
        assert_eq!(state.body.head().coord, Coord::new(4, 8));
        assert_eq!(state.body.head().cell, 109);
        assert_eq!(state.food.cell, 114);
        assert!(!state.food.reverses_direction);
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.score, 0);
        assert!(state.alive);
        assert!(state.hit_cells.is_empty());
    }

    #[test]
    fn test_classify_alive() {
        let state = GameState::new(&GameConfig::default());
        assert_eq!(state.classify(109), CellKind::SnakeBody);
        assert_eq!(state.classify(114), CellKind::Food);
        assert_eq!(state.classify(1), CellKind::Empty);
    }

    #[test]
    fn test_classify_reversing_food() {
        let mut state = GameState::new(&GameConfig::default());
        state.food.reverses_direction = true;
        assert_eq!(state.classify(114), CellKind::FoodReversing);
    }

    #[test]
    fn test_classify_dead() {
        let mut state = GameState::new(&GameConfig::default());
        state.alive = false;
        state.hit_cells = vec![109];
        assert_eq!(state.classify(109), CellKind::DeadCellHit);
        // Food stays visible while the hit cells flash
        assert_eq!(state.classify(114), CellKind::Food);
        assert_eq!(state.classify(1), CellKind::Empty);
    }

    #[test]
    fn test_classify_dead_body_outside_hit_list() {
        let mut state = GameState::new(&GameConfig::default());
        state.alive = false;
        assert_eq!(state.classify(109), CellKind::SnakeBodyHit);
    }

    #[test]
    fn test_seed_rounding() {
        let state = GameState::new(&GameConfig::new(10, 10));
        // round(10 / 3) = 3
        assert_eq!(state.body.head().coord, Coord::new(3, 3));
    }
}
