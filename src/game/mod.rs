//! The live game: state, the controller that drives it, background searches
//! and a text front end.

pub mod controller;
pub mod display;
pub mod engine;
pub mod error;
pub mod r#loop; // `loop` is reserved keyword, need to escape with `r#`
pub mod mode;
pub mod state;
pub mod task;

pub use controller::{ControllerConfig, GameController, PendingSelection, Phase, Suggestion};
pub use engine::{Engine, EngineConfig, SearchStats};
pub use error::ControllerError;
pub use mode::Mode;
pub use state::GameState;
