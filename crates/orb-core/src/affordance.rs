use crate::state::Mode;

/// Cursor hint shown over the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Affordance {
    #[default]
    None,
    Pointer,
    CanGrab,
    Grabbing,
}

impl Affordance {
    /// Class name applied to the canvas element.
    pub fn class_name(self) -> &'static str {
        match self {
            Affordance::None => "",
            Affordance::Pointer => "pointer",
            Affordance::CanGrab => "can-grab",
            Affordance::Grabbing => "grabbing",
        }
    }
}

pub fn affordance(mode: Mode, hovering: bool, dragging: bool) -> Affordance {
    match mode {
        Mode::Move if dragging => Affordance::Grabbing,
        Mode::Move if hovering => Affordance::CanGrab,
        Mode::Color if hovering => Affordance::Pointer,
        _ => Affordance::None,
    }
}
