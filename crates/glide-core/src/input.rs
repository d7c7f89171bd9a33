use crate::geometry::Vec2;

/// One step of the slider's inbound gesture contract.
///
/// `dx`/`dy` are cumulative pixel deltas from the gesture origin, not
/// frame-to-frame deltas. Events of one drag arrive strictly in the order
/// `Start, Move*, End` (or `Cancel` in place of `End`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    Start,
    Move { dx: f32, dy: f32 },
    End,
    /// Forced termination (responder taken away, window defocused). Handled
    /// exactly like `End` so the state machine cannot stay stuck dragging.
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Raw pointer input as delivered by a platform backend. Positions are
/// absolute; `glide-ui`'s `DragTracker` converts these into [`GestureEvent`]s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Vec2,
}
