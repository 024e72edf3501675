pub mod errors;
pub mod gesture;
pub mod models;
pub mod session;
pub mod tasks;

pub use errors::SwipeError;
pub use gesture::{
    CardVisuals,
    GestureOutcome,
    GestureTracker,
    PointerEvent,
};
pub use models::{
    Card,
    Direction,
    SessionPhase,
};
pub use session::{
    FetchRequest,
    ScheduleSettle,
    Session,
};
