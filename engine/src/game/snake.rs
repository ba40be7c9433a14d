use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

/// Ordered body segments, head at the front, with a set mirror for O(1)
/// collision checks. The body is never empty.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    /// Head at `start`, remaining segments trailing opposite `direction`.
    /// Config validation guarantees the trailing segments fit on the grid.
    pub fn new(start: Point, direction: Direction, length: usize) -> Self {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();

        let mut segment = start;
        for _ in 0..length.max(1) {
            body.push_back(segment);
            body_set.insert(segment);
            segment = segment.offset(direction.opposite());
        }

        Self { body, body_set }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn occupied(&self) -> &HashSet<Point> {
        &self.body_set
    }

    /// Head cell offset one unit in `direction`. Pure; the result may be
    /// off-board and must be bounds-checked by the caller.
    pub fn peek_next_head(&self, direction: Direction) -> Point {
        self.head().offset(direction)
    }

    /// True if `cell` hits the current body. When not growing, the tail is
    /// exempt: it vacates its cell in the same step the head arrives.
    pub fn collides_with(&self, cell: &Point, will_grow: bool) -> bool {
        if !self.body_set.contains(cell) {
            return false;
        }
        if !will_grow && *cell == self.tail() {
            return false;
        }
        true
    }

    /// Prepends `next_head`; pops the tail unless `grew`. The deque and the
    /// set mirror are updated together so partial motion is never observable.
    pub fn advance(&mut self, next_head: Point, grew: bool) {
        self.body.push_front(next_head);
        self.body_set.insert(next_head);

        if !grew {
            let tail = self
                .body
                .pop_back()
                .expect("Snake body should never be empty");
            // The head may have just re-entered the vacated tail cell.
            if tail != next_head {
                self.body_set.remove(&tail);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lays_segments_opposite_direction() {
        let snake = Snake::new(Point::new(10, 10), Direction::Right, 3);
        let segments: Vec<Point> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![Point::new(10, 10), Point::new(9, 10), Point::new(8, 10)]
        );
    }

    #[test]
    fn test_advance_without_growth_keeps_length() {
        let mut snake = Snake::new(Point::new(5, 5), Direction::Right, 3);
        snake.advance(Point::new(6, 5), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Point::new(6, 5));
        assert_eq!(snake.tail(), Point::new(4, 5));
        assert!(!snake.occupied().contains(&Point::new(3, 5)));
    }

    #[test]
    fn test_advance_with_growth_retains_tail() {
        let mut snake = Snake::new(Point::new(5, 5), Direction::Right, 2);
        snake.advance(Point::new(6, 5), true);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.tail(), Point::new(4, 5));
        assert!(snake.occupied().contains(&Point::new(4, 5)));
    }

    #[test]
    fn test_collides_with_body_segment() {
        let snake = Snake::new(Point::new(5, 5), Direction::Right, 3);
        assert!(snake.collides_with(&Point::new(4, 5), false));
        assert!(!snake.collides_with(&Point::new(6, 5), false));
    }

    #[test]
    fn test_vacated_tail_is_not_a_collision_when_moving() {
        let snake = Snake::new(Point::new(5, 5), Direction::Right, 3);
        // Tail at (3,5) empties this step, so the head may enter it.
        assert!(!snake.collides_with(&Point::new(3, 5), false));
    }

    #[test]
    fn test_tail_is_a_collision_when_growing() {
        let snake = Snake::new(Point::new(5, 5), Direction::Right, 3);
        assert!(snake.collides_with(&Point::new(3, 5), true));
    }

    #[test]
    fn test_advance_onto_vacated_tail_keeps_cell_occupied() {
        // Length-4 snake closed into a 2x2 loop, head adjacent to tail.
        let mut snake = Snake::new(Point::new(0, 0), Direction::Right, 1);
        snake.advance(Point::new(1, 0), true);
        snake.advance(Point::new(1, 1), true);
        snake.advance(Point::new(0, 1), true);
        assert_eq!(snake.head(), Point::new(0, 1));
        assert_eq!(snake.tail(), Point::new(0, 0));

        // Stepping onto the tail cell while it vacates is legal.
        assert!(!snake.collides_with(&Point::new(0, 0), false));
        snake.advance(Point::new(0, 0), false);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Point::new(0, 0));
        assert!(snake.occupied().contains(&Point::new(0, 0)));
    }
}
