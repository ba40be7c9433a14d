use super::session_rng::SessionRng;
use super::types::Point;

/// Fixed-size discrete coordinate space. Pure geometry; dimensions are
/// validated by `GameConfig` before a grid is ever built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    pub fn random_cell(&self, rng: &mut SessionRng) -> Point {
        let x = rng.random_range(0..self.width);
        let y = rng.random_range(0..self.height);
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_rejects_out_of_bounds() {
        let grid = Grid::new(20, 20);
        assert!(grid.contains(&Point::new(0, 0)));
        assert!(grid.contains(&Point::new(19, 19)));
        assert!(!grid.contains(&Point::new(-1, 0)));
        assert!(!grid.contains(&Point::new(0, -1)));
        assert!(!grid.contains(&Point::new(20, 0)));
        assert!(!grid.contains(&Point::new(0, 20)));
    }

    #[test]
    fn test_random_cell_always_in_bounds() {
        let grid = Grid::new(7, 3);
        let mut rng = SessionRng::new(42);
        for _ in 0..200 {
            let cell = grid.random_cell(&mut rng);
            assert!(grid.contains(&cell));
        }
    }
}
