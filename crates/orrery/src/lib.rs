pub mod api;
pub mod core;
pub mod error;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{BodyConfig, CentralConfig, Color, SimConfig};
pub use api::types::{
    BodyView, FrameView, GameEvent, HoverView, OrbitView, SunView,
    CUSTOM_SET_PAUSED, EVENT_BODY_REMOVED, EVENT_HOVER, EVENT_PAUSE_CHANGED, EVENT_SUN_REMOVED,
};
pub use crate::core::bodies::{Appearance, BodyRegistry, CentralBody, OrbitingBody};
pub use crate::core::motion::{MotionModel, Regime};
pub use crate::core::time::FrameClock;
pub use crate::core::world::World;
pub use error::{ConfigError, ConfigResult};
pub use input::controller::{ClickOutcome, InteractionController};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::sdf_instance::{SdfBuffer, SdfInstance};
pub use systems::captions::{hover_caption, instructions};
pub use systems::sdf_render::build_body_buffer;
pub use systems::starfield::{Rng, Starfield};

#[cfg(feature = "vectors")]
pub use systems::overlay::{OverlayPainter, VectorVertex};
