//! Outcome of feeding one input into the controller.

/// What the frontend loop has to do after an input was handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
    /// The player confirmed quitting.
    pub quit: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
            quit: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
            quit: false,
        }
    }

    pub const fn quit() -> Self {
        Self {
            requires_redraw: false,
            quit: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
            quit: self.quit || other.quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_keeps_any_request() {
        assert_eq!(EventImpact::none().combine(EventImpact::none()), EventImpact::none());
        assert_eq!(
            EventImpact::redraw().combine(EventImpact::quit()),
            EventImpact {
                requires_redraw: true,
                quit: true
            }
        );
    }
}
