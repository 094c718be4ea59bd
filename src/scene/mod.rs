//! Scene controller: collaborator wiring and the per-frame driver.

pub mod controller;
pub mod deps;
pub mod text;

pub use controller::{FrameInput, FrameReport, SceneController};
pub use deps::SceneDependencies;
pub use text::{score_text, time_text};
