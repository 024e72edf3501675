pub mod app;
pub mod card_stack;
pub mod error_panel;
pub mod loading_overlay;
pub mod summary;
pub mod theme;

pub use app::SwipeApp;
