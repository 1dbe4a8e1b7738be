//! Route queries.

use cn_core::Location;

/// A request for a walking route.
///
/// `origin` and `destination` are `None` until the user picks them.
/// `show_alternatives` is accepted but reserved; it does not change the
/// computed route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouteQuery {
    pub origin:                 Option<Location>,
    pub destination:            Option<Location>,
    pub accessibility_required: bool,
    pub show_alternatives:      bool,
}

impl RouteQuery {
    pub fn new(origin: impl Into<Location>, destination: impl Into<Location>) -> Self {
        Self {
            origin:      Some(origin.into()),
            destination: Some(destination.into()),
            ..Self::default()
        }
    }

    pub fn accessible(mut self, required: bool) -> Self {
        self.accessibility_required = required;
        self
    }

    pub fn alternatives(mut self, show: bool) -> Self {
        self.show_alternatives = show;
        self
    }

    /// Both endpoints, if both are selected and non-blank.
    pub fn selection(&self) -> Option<(&Location, &Location)> {
        let origin = self.origin.as_ref().filter(|l| !l.is_blank())?;
        let destination = self.destination.as_ref().filter(|l| !l.is_blank())?;
        Some((origin, destination))
    }
}
