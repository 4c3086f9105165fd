//! Drag session state machine.

use tracing::{debug, trace};

/// Where an active drag started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOrigin {
    /// From the palette. The payload is a *new* token type, materialized
    /// only on a successful drop; the palette token itself is never
    /// consumed.
    Palette {
        /// Token type to materialize on drop
        token_type: String,
    },
    /// From an existing position inside a dropzone of the same editor.
    Existing {
        /// Owning dropzone: the variant id for composition editors, the
        /// empty string for single-list editors
        zone: String,
        /// Index within the zone at drag start
        index: usize,
    },
}

/// Lifecycle of one drag gesture.
///
/// `Idle → Active → Idle`. Commit and cancel both resolve synchronously
/// on pointer-up, so a new pointer-down always observes `Idle` — at most
/// one drag is active per editor instance by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress
    #[default]
    Idle,
    /// A drag is in progress
    Active {
        /// Where the drag started
        origin: DragOrigin,
    },
}

/// Short-lived state describing an in-progress drag.
///
/// The session never mutates a model itself; it only records the origin
/// until the owning editor commits or cancels the gesture.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is currently active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, DragState::Active { .. })
    }

    /// The origin of the active drag, if any.
    #[must_use]
    pub fn origin(&self) -> Option<&DragOrigin> {
        match &self.state {
            DragState::Idle => None,
            DragState::Active { origin } => Some(origin),
        }
    }

    /// Starts a drag. Returns whether the session transitioned to
    /// `Active`; a start while another drag is active is refused.
    pub fn start(&mut self, origin: DragOrigin) -> bool {
        if self.is_active() {
            debug!("refusing drag start while another drag is active");
            return false;
        }
        trace!(?origin, "drag started");
        self.state = DragState::Active { origin };
        true
    }

    /// Resolves the session back to `Idle`, returning the origin so the
    /// owning editor can commit the drop. Returns `None` when idle.
    pub fn take(&mut self) -> Option<DragOrigin> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Active { origin } => {
                trace!(?origin, "drag resolved");
                Some(origin)
            }
        }
    }

    /// Abandons the active drag with no effect on any model.
    pub fn cancel(&mut self) {
        if self.is_active() {
            trace!("drag cancelled");
        }
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = DragSession::new();
        assert!(!session.is_active());
        assert_eq!(session.origin(), None);
    }

    #[test]
    fn test_start_palette_drag() {
        let mut session = DragSession::new();
        assert!(session.start(DragOrigin::Palette {
            token_type: "loco".to_string(),
        }));
        assert!(session.is_active());
        assert_eq!(
            session.origin(),
            Some(&DragOrigin::Palette {
                token_type: "loco".to_string(),
            })
        );
    }

    #[test]
    fn test_start_refused_while_active() {
        let mut session = DragSession::new();
        assert!(session.start(DragOrigin::Palette {
            token_type: "loco".to_string(),
        }));
        assert!(!session.start(DragOrigin::Existing {
            zone: "v1".to_string(),
            index: 0,
        }));
        // Original drag unchanged
        assert!(matches!(
            session.origin(),
            Some(DragOrigin::Palette { .. })
        ));
    }

    #[test]
    fn test_take_resolves_to_idle() {
        let mut session = DragSession::new();
        session.start(DragOrigin::Existing {
            zone: "v1".to_string(),
            index: 2,
        });

        let origin = session.take();
        assert_eq!(
            origin,
            Some(DragOrigin::Existing {
                zone: "v1".to_string(),
                index: 2,
            })
        );
        assert!(!session.is_active());
        assert_eq!(session.take(), None);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut session = DragSession::new();
        session.start(DragOrigin::Palette {
            token_type: "car".to_string(),
        });
        session.cancel();
        assert!(!session.is_active());

        // Cancelling an idle session is harmless
        session.cancel();
        assert!(!session.is_active());
    }
}
