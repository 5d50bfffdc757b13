pub mod controller;
pub mod duration;
pub mod errors;
pub mod events;
pub mod models;
pub mod session;

pub use controller::LessonPlaybackController;
pub use session::PlayerSession;
