//! Open/closed state of the mobile navigation menu.

use std::rc::Rc;

use yew::functional::Reducible;

/// Below this viewport width the menu collapses behind the hamburger.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    /// The hamburger was clicked.
    Toggle,
    /// A click or touch landed outside both the menu and the hamburger.
    OutsideClick,
    Escape,
    LinkActivated { viewport_width: f64 },
    Resized { viewport_width: f64 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn apply(self, event: MenuEvent) -> Self {
        let open = match event {
            MenuEvent::Toggle => !self.open,
            MenuEvent::OutsideClick | MenuEvent::Escape => false,
            MenuEvent::LinkActivated { viewport_width } => {
                self.open && viewport_width >= MOBILE_BREAKPOINT_PX
            }
            MenuEvent::Resized { viewport_width } => {
                self.open && viewport_width < MOBILE_BREAKPOINT_PX
            }
        };
        Self { open }
    }

    pub fn class(self) -> Option<&'static str> {
        self.open.then_some("open")
    }
}

impl Reducible for MenuState {
    type Action = MenuEvent;

    fn reduce(self: Rc<Self>, event: MenuEvent) -> Rc<Self> {
        Rc::new(self.apply(event))
    }
}
