use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: String,        // Stable, unique within a batch
    pub image_url: String, // Resolvable by the image loaders
}

impl Card {
    pub fn new(id: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self { id: id.into(), image_url: image_url.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Resolves the side a horizontal offset points to. Zero counts as left.
    pub fn from_offset(offset_x: f32) -> Self {
        if offset_x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    pub fn is_like(&self) -> bool {
        matches!(self, Direction::Right)
    }

    /// Horizontal sign of the direction: -1.0 for left, 1.0 for right.
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Left => "nope",
            Direction::Right => "like",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Browsing,
    Summary,
    Failed { message: String },
}

impl SessionPhase {
    pub fn name(&self) -> &'static str {
        match self {
            SessionPhase::Loading => "loading",
            SessionPhase::Browsing => "browsing",
            SessionPhase::Summary => "summary",
            SessionPhase::Failed { .. } => "failed",
        }
    }
}
