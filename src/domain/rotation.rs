use std::time::Duration;

pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_secs(5);

/// Index of the image currently shown by the home page rotator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.current() == Some(index)
    }

    /// Nothing to rotate with fewer than two images.
    pub fn needs_timer(&self) -> bool {
        self.len > 1
    }

    /// Adopts a new image count, keeping the shown image while it still exists.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_image_active_and_wraps() {
        let mut rotation = Rotation::new(3);
        assert!(rotation.is_active(0));
        rotation.advance();
        rotation.advance();
        assert_eq!(rotation.current(), Some(2));
        rotation.advance();
        assert_eq!(rotation.current(), Some(0));
    }

    #[test]
    fn resize_keeps_position_or_restarts() {
        let mut rotation = Rotation::new(0);
        rotation.resize(3);
        assert_eq!(rotation.current(), Some(0));
        assert!(rotation.needs_timer());

        rotation.advance();
        rotation.advance();
        rotation.resize(4);
        assert_eq!(rotation.current(), Some(2));

        rotation.resize(2);
        assert_eq!(rotation.current(), Some(0));
        rotation.resize(1);
        assert!(!rotation.needs_timer());
    }

    #[test]
    fn empty_rotation_is_inert() {
        let mut rotation = Rotation::new(0);
        rotation.advance();
        assert_eq!(rotation.current(), None);
        assert!(!rotation.needs_timer());
        assert!(!Rotation::new(1).needs_timer());
    }
}
