use std::collections::{HashSet, VecDeque};

use crate::grid::Point;

/// Snake body, head first. `body_set` mirrors `body` so collision checks
/// stay O(1) regardless of length.
#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    pub fn new(head: Point) -> Self {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();
        body.push_back(head);
        body_set.insert(head);

        Self { body, body_set }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("snake body is never empty")
    }

    pub fn contains(&self, point: Point) -> bool {
        self.body_set.contains(&point)
    }

    pub fn push_head(&mut self, point: Point) {
        self.body.push_front(point);
        self.body_set.insert(point);
    }

    pub fn drop_tail(&mut self) {
        let tail = self.body.pop_back().expect("snake body is never empty");
        self.body_set.remove(&tail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_is_a_single_cell() {
        let snake = Snake::new(Point::new(10, 10));

        assert_eq!(snake.body.len(), 1);
        assert_eq!(snake.head(), Point::new(10, 10));
        assert!(snake.contains(Point::new(10, 10)));
    }

    #[test]
    fn test_push_head_prepends() {
        let mut snake = Snake::new(Point::new(10, 10));
        snake.push_head(Point::new(11, 10));

        assert_eq!(snake.head(), Point::new(11, 10));
        assert_eq!(snake.body.len(), 2);
        assert!(snake.contains(Point::new(10, 10)));
    }

    #[test]
    fn test_drop_tail_removes_membership() {
        let mut snake = Snake::new(Point::new(10, 10));
        snake.push_head(Point::new(11, 10));
        snake.drop_tail();

        assert_eq!(snake.body.len(), 1);
        assert!(!snake.contains(Point::new(10, 10)));
        assert!(snake.contains(Point::new(11, 10)));
    }
}
