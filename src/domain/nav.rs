/// Open/closed state of the hamburger overlay menu.
///
/// The class names match the slide transitions in `assets/main.css`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn hamburger_class(&self) -> &'static str {
        if self.open {
            "hamburger-menu active"
        } else {
            "hamburger-menu"
        }
    }

    pub fn overlay_class(&self) -> &'static str {
        if self.open {
            "overlay overlay-active overlay-slide-right"
        } else {
            "overlay overlay-slide-left"
        }
    }

    /// Class for the nav item at zero-based `index`.
    pub fn item_class(&self, index: usize) -> String {
        let direction = if self.open { "in" } else { "out" };
        format!("nav-item slide-{direction}-{}", index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_by_default() {
        let nav = NavState::default();
        assert!(!nav.is_open());
        assert_eq!(nav.hamburger_class(), "hamburger-menu");
        assert_eq!(nav.overlay_class(), "overlay overlay-slide-left");
        assert_eq!(nav.item_class(0), "nav-item slide-out-1");
    }

    #[test]
    fn toggle_slides_items_in_and_out() {
        let mut nav = NavState::default();
        nav.toggle();
        assert_eq!(nav.hamburger_class(), "hamburger-menu active");
        assert_eq!(nav.overlay_class(), "overlay overlay-active overlay-slide-right");
        assert_eq!(nav.item_class(2), "nav-item slide-in-3");

        nav.toggle();
        assert!(!nav.is_open());
        assert_eq!(nav.item_class(2), "nav-item slide-out-3");
    }
}
