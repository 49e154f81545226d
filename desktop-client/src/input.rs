use common::Direction;
use eframe::egui;

/// Maps an arrow key to a steering direction. Every other key is ignored.
pub fn direction_for_key(key: egui::Key) -> Option<Direction> {
    match key {
        egui::Key::ArrowUp => Some(Direction::Up),
        egui::Key::ArrowDown => Some(Direction::Down),
        egui::Key::ArrowLeft => Some(Direction::Left),
        egui::Key::ArrowRight => Some(Direction::Right),
        _ => None,
    }
}

/// Client-side steering filter. Drops reversals of the committed
/// direction and repeats of the last sent turn. The engine re-checks the
/// reversal when the turn is consumed, so a pair of same-tick inputs
/// that slips past this filter is still nulled there.
pub struct InputTracker {
    last_sent: Option<Direction>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self { last_sent: None }
    }

    pub fn accept(&mut self, pressed: Direction, committed: Direction) -> Option<Direction> {
        if pressed.is_opposite(&committed) {
            return None;
        }
        if self.last_sent == Some(pressed) {
            return None;
        }

        self.last_sent = Some(pressed);
        Some(pressed)
    }

    pub fn reset(&mut self) {
        self.last_sent = None;
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_directions() {
        assert_eq!(direction_for_key(egui::Key::ArrowUp), Some(Direction::Up));
        assert_eq!(
            direction_for_key(egui::Key::ArrowDown),
            Some(Direction::Down)
        );
        assert_eq!(
            direction_for_key(egui::Key::ArrowLeft),
            Some(Direction::Left)
        );
        assert_eq!(
            direction_for_key(egui::Key::ArrowRight),
            Some(Direction::Right)
        );
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(direction_for_key(egui::Key::A), None);
        assert_eq!(direction_for_key(egui::Key::Space), None);
        assert_eq!(direction_for_key(egui::Key::Enter), None);
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut tracker = InputTracker::new();

        assert_eq!(tracker.accept(Direction::Left, Direction::Right), None);
        assert_eq!(tracker.accept(Direction::Down, Direction::Up), None);
    }

    #[test]
    fn test_perpendicular_turn_is_accepted() {
        let mut tracker = InputTracker::new();

        assert_eq!(
            tracker.accept(Direction::Up, Direction::Right),
            Some(Direction::Up)
        );
    }

    #[test]
    fn test_repeated_turn_is_sent_once() {
        let mut tracker = InputTracker::new();

        assert_eq!(
            tracker.accept(Direction::Up, Direction::Right),
            Some(Direction::Up)
        );
        assert_eq!(tracker.accept(Direction::Up, Direction::Right), None);
    }

    #[test]
    fn test_reset_clears_the_last_sent_turn() {
        let mut tracker = InputTracker::new();
        tracker.accept(Direction::Up, Direction::Right);

        tracker.reset();

        assert_eq!(
            tracker.accept(Direction::Up, Direction::Right),
            Some(Direction::Up)
        );
    }
}
