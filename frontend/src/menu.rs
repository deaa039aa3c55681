// Mobile navigation menu state.
// Toggled by the hamburger control, closed by choosing any destination.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Result of choosing a destination: the menu is closed and the view moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<D> {
    pub state: MenuState,
    pub navigate_to: D,
}

/// State-dependent classes for the three hamburger bars, applied on top of `BAR_CLASS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub top: &'static str,
    pub middle: &'static str,
    pub bottom: &'static str,
}

pub const BAR_CLASS: &str = "block w-full h-0.5 bg-[#2C4A3F]";

impl MenuState {
    pub fn is_open(&self) -> bool {
        *self == MenuState::Open
    }

    pub fn toggle(self) -> MenuState {
        let next = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        debug!("menu toggled: {:?} -> {:?}", self, next);
        next
    }

    pub fn select<D>(self, destination: D) -> Selection<D> {
        debug!("menu selection closes {:?} menu", self);
        Selection {
            state: MenuState::Closed,
            navigate_to: destination,
        }
    }

    pub fn glyph(&self) -> Glyph {
        match self {
            MenuState::Closed => Glyph {
                top: "transition-transform duration-300",
                middle: "transition-opacity duration-300",
                bottom: "transition-transform duration-300",
            },
            MenuState::Open => Glyph {
                top: "transition-transform duration-300 rotate-45 translate-y-[5px]",
                middle: "transition-opacity duration-300 opacity-0",
                bottom: "transition-transform duration-300 -rotate-45 -translate-y-[5px]",
            },
        }
    }

    /// Slide position of the full-screen overlay.
    pub fn overlay_class(&self) -> &'static str {
        match self {
            MenuState::Closed => "-translate-y-full",
            MenuState::Open => "translate-y-0",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn states() -> impl Strategy<Value = MenuState> {
        prop_oneof![Just(MenuState::Closed), Just(MenuState::Open)]
    }

    #[test]
    fn test_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle_flips() {
        assert_eq!(MenuState::Closed.toggle(), MenuState::Open);
        assert_eq!(MenuState::Open.toggle(), MenuState::Closed);
    }

    #[test]
    fn test_open_then_pick_link() {
        let menu = MenuState::default().toggle();
        assert!(menu.is_open());

        let selection = menu.select("/#services");
        assert_eq!(selection.state, MenuState::Closed);
        assert_eq!(selection.navigate_to, "/#services");
    }

    #[test]
    fn test_hamburger_twice_closes_without_navigation() {
        // Toggling never yields a destination; only select does.
        let menu = MenuState::default().toggle();
        let menu = menu.toggle();
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn test_glyph_reflects_state() {
        let closed = MenuState::Closed.glyph();
        assert!(!closed.top.contains("rotate-45"));
        assert!(!closed.middle.contains("opacity-0"));

        let open = MenuState::Open.glyph();
        assert!(open.top.contains("rotate-45 translate-y-[5px]"));
        assert!(open.middle.contains("opacity-0"));
        assert!(open.bottom.contains("-rotate-45 -translate-y-[5px]"));

        // Closing reverts the glyph.
        assert_eq!(MenuState::Open.toggle().glyph(), closed);
    }

    #[test]
    fn test_overlay_position() {
        assert_eq!(MenuState::Closed.overlay_class(), "-translate-y-full");
        assert_eq!(MenuState::Open.overlay_class(), "translate-y-0");
    }

    proptest! {
        #[test]
        fn prop_toggle_is_involution(state in states()) {
            prop_assert_eq!(state.toggle().toggle(), state);
            prop_assert_ne!(state.toggle(), state);
        }

        #[test]
        fn prop_select_always_closes(state in states(), destination in "[a-z/#]{0,16}") {
            let selection = state.select(destination.clone());
            prop_assert_eq!(selection.state, MenuState::Closed);
            prop_assert_eq!(selection.navigate_to, destination);
        }
    }
}
