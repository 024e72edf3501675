pub mod core;
pub mod gui;
pub mod persistence;
pub mod settings;
pub mod source;

pub use crate::core::{
    Card,
    Direction,
    GestureTracker,
    Session,
    SessionPhase,
    SwipeError,
};
pub use settings::SwipeSettings;
