use std::collections::HashSet;

use crate::error::GameError;

use super::grid::Grid;
use super::session_rng::SessionRng;
use super::types::Point;

const MAX_RANDOM_ATTEMPTS: usize = 100;

/// Picks a random unoccupied cell for food.
pub struct FoodSpawner;

impl FoodSpawner {
    /// Draws random cells until one misses `occupied`, capped at
    /// `MAX_RANDOM_ATTEMPTS`. After the cap the free cells are enumerated
    /// and one is picked uniformly, so a crowded grid still terminates.
    /// A fully occupied grid is unreachable under normal play but must not
    /// hang, so it fails with a `Configuration` error.
    pub fn spawn(
        grid: &Grid,
        occupied: &HashSet<Point>,
        rng: &mut SessionRng,
    ) -> Result<Point, GameError> {
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let cell = grid.random_cell(rng);
            if !occupied.contains(&cell) {
                return Ok(cell);
            }
        }

        let free: Vec<Point> = (0..grid.height())
            .flat_map(|y| (0..grid.width()).map(move |x| Point::new(x, y)))
            .filter(|cell| !occupied.contains(cell))
            .collect();

        if free.is_empty() {
            return Err(GameError::Configuration(
                "grid is fully occupied, nowhere to spawn food".to_string(),
            ));
        }

        Ok(free[rng.random_range(0..free.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_avoids_occupied_cells() {
        let grid = Grid::new(5, 5);
        let mut rng = SessionRng::new(42);
        let occupied: HashSet<Point> =
            (0..5).flat_map(|y| (0..4).map(move |x| Point::new(x, y))).collect();

        for _ in 0..50 {
            let cell = FoodSpawner::spawn(&grid, &occupied, &mut rng).unwrap();
            assert!(!occupied.contains(&cell));
            assert!(grid.contains(&cell));
        }
    }

    #[test]
    fn test_spawn_finds_single_free_cell() {
        let grid = Grid::new(3, 3);
        let mut rng = SessionRng::new(7);
        let mut occupied: HashSet<Point> =
            (0..3).flat_map(|y| (0..3).map(move |x| Point::new(x, y))).collect();
        occupied.remove(&Point::new(2, 2));

        let cell = FoodSpawner::spawn(&grid, &occupied, &mut rng).unwrap();
        assert_eq!(cell, Point::new(2, 2));
    }

    #[test]
    fn test_spawn_fails_on_full_grid() {
        let grid = Grid::new(2, 2);
        let mut rng = SessionRng::new(7);
        let occupied: HashSet<Point> =
            (0..2).flat_map(|y| (0..2).map(move |x| Point::new(x, y))).collect();

        let result = FoodSpawner::spawn(&grid, &occupied, &mut rng);
        assert!(matches!(result, Err(GameError::Configuration(_))));
    }
}
