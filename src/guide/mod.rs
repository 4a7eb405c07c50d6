//! Walk guiding orchestration

pub mod engine;
pub mod events;

pub use engine::GuideEngine;
pub use events::GuideEvent;
