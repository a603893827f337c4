#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SliderState {
    Resting,       // One layer fully visible, text matches current_index
    Transitioning, // Layers are sliding, a single queued target may be pending
}

/// Travel direction of a transition, derived from the raw index comparison.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn between(current: usize, target: usize) -> Self {
        if target > current { Direction::Forward } else { Direction::Backward }
    }

    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}
