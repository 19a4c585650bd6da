//! Question / Success flow.
//!
//! `CardFlow` is the single owner of the card's transient state. The browser
//! runtime forwards events here and renders whatever comes back; nothing in
//! this module touches the DOM.

use rand::Rng;

use crate::config::CalendarEvent;
use crate::placement::{PlacementInput, Position, place_evasive};

/// Where the evasive button currently lives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TargetPlacement {
    /// Still in the normal button row.
    Inline,
    /// Absolutely positioned inside the page container. Never left again.
    Free(Position),
}

/// Evasive button state. `instance` only ever grows; a new value means the
/// button must be rendered as a fresh element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvasiveTarget {
    pub placement: TargetPlacement,
    pub instance: u32,
}

impl Default for EvasiveTarget {
    fn default() -> Self {
        Self {
            placement: TargetPlacement::Inline,
            instance: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalendarState {
    NotAdded,
    Added,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum View {
    Question(EvasiveTarget),
    Success(CalendarState),
}

/// Result of a successful relocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Relocation {
    pub position: Position,
    pub instance: u32,
    /// True for the move out of the inline row.
    pub first: bool,
}

pub struct CardFlow {
    view: View,
    calendar: CalendarEvent,
}

impl CardFlow {
    pub fn new(calendar: CalendarEvent) -> Self {
        Self {
            view: View::Question(EvasiveTarget::default()),
            calendar,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// The evasive button was hovered or clicked. Returns the new position, or
    /// `None` if nothing changed (no room, or the question is already answered).
    pub fn evade<R: Rng + ?Sized>(&mut self, input: &PlacementInput, rng: &mut R) -> Option<Relocation> {
        let View::Question(target) = &mut self.view else {
            return None;
        };
        let position = place_evasive(input, rng)?;
        let first = target.placement == TargetPlacement::Inline;
        target.placement = TargetPlacement::Free(position);
        target.instance += 1;
        Some(Relocation {
            position,
            instance: target.instance,
            first,
        })
    }

    /// "Yes". Returns true on the one transition into Success.
    pub fn confirm(&mut self) -> bool {
        match self.view {
            View::Question(_) => {
                self.view = View::Success(CalendarState::NotAdded);
                true
            }
            View::Success(_) => false,
        }
    }

    /// Calendar button. Returns the link to open the first time only.
    pub fn add_to_calendar(&mut self) -> Option<String> {
        match self.view {
            View::Success(CalendarState::NotAdded) => {
                self.view = View::Success(CalendarState::Added);
                Some(self.calendar.url())
            }
            _ => None,
        }
    }
}
