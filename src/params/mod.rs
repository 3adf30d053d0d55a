//! Parameter definitions with physical units and documented semantics.
//!
//! All magic numbers of the scene live here with:
//! - Units (pixels of the 1920px reference canvas, frames, meters, seconds)
//! - Documented ranges and meanings
//! - Fixed seeds for every stable random layout

mod atmosphere;
mod creature;
mod playback;
mod render;

// Re-export all types
pub use atmosphere::{
    AtmosphereParams, BioluminescenceParams, KelpParams, LightRayParams, MarineSnowParams,
    SedimentParams, VentParams,
};
pub use creature::CreatureParams;
pub use playback::PlaybackConfig;
pub use render::{RecordingConfig, RenderConfig};
