/// Share of a section that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Visibility of a `.fade-in-section`. Once visible it stays visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Hidden,
    Visible,
}

impl Reveal {
    /// Starting state: sections are only hidden when something can later
    /// reveal them.
    pub fn initial(observer_supported: bool) -> Self {
        if observer_supported {
            Reveal::Hidden
        } else {
            Reveal::Visible
        }
    }

    pub fn observe(self, is_intersecting: bool) -> Self {
        match self {
            Reveal::Visible => Reveal::Visible,
            Reveal::Hidden if is_intersecting => Reveal::Visible,
            Reveal::Hidden => Reveal::Hidden,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Reveal::Visible
    }

    pub fn class(self) -> &'static str {
        match self {
            Reveal::Hidden => "hidden",
            Reveal::Visible => "visible",
        }
    }
}
