//! Atmosphere effect parameters: counts, rates and layout seeds.
//!
//! Lengths are in reference pixels (1920px canvas) and are scaled by the scene's
//! pixel unit at draw time. Rates are per frame of scene time.

/// Marine snow: drifting particulate re-randomized every frame
#[derive(Debug, Clone)]
pub struct MarineSnowParams {
    /// Particles drawn in calm water
    pub base_count: u32,

    /// Extra particles per meter of wave height
    pub count_per_meter: f32,

    /// Frame seed is `t mod seed_period`, so the burst pattern repeats after this many frames
    pub seed_period: u64,

    /// Downward fall (pixels per frame) in still water
    pub fall_px: f32,

    /// Extra fall (pixels per frame) per m/s of current
    pub fall_px_per_current: f32,

    /// Horizontal-phase drift amplitude (pixels) per m/s of current
    pub drift_px_per_current: f32,
}

impl Default for MarineSnowParams {
    fn default() -> Self {
        Self {
            base_count: 250,
            count_per_meter: 80.0,
            seed_period: 1000,
            fall_px: 1.2,
            fall_px_per_current: 0.8,
            drift_px_per_current: 40.0,
        }
    }
}

/// Distant bioluminescent creatures: fixed positions, pulsing intensity
#[derive(Debug, Clone)]
pub struct BioluminescenceParams {
    /// Number of glow points
    pub count: u32,

    /// Layout seed (positions and base brightness)
    pub seed: u64,

    /// Pulse angular rate (radians per frame)
    pub pulse_rate: f32,
}

impl Default for BioluminescenceParams {
    fn default() -> Self {
        Self {
            count: 75,
            seed: 42,
            pulse_rate: 0.12,
        }
    }
}

/// Filtered sunlight shafts from the surface
#[derive(Debug, Clone)]
pub struct LightRayParams {
    /// Number of rays
    pub count: u32,

    /// Horizontal sway amplitude (pixels)
    pub sway_px: f32,

    /// Fraction of the canvas height the rays reach before fading out
    pub depth_fraction: f32,
}

impl Default for LightRayParams {
    fn default() -> Self {
        Self {
            count: 15,
            sway_px: 80.0,
            depth_fraction: 2.0 / 3.0,
        }
    }
}

/// Kelp forest silhouettes
#[derive(Debug, Clone)]
pub struct KelpParams {
    /// Number of fronds
    pub fronds: u32,

    /// Segments per frond
    pub segments: u32,

    /// Layout seed (base, height, sway amplitude and rate)
    pub seed: u64,
}

impl Default for KelpParams {
    fn default() -> Self {
        Self {
            fronds: 20,
            segments: 35,
            seed: 123,
        }
    }
}

/// Hydrothermal vents along the sea floor
#[derive(Debug, Clone)]
pub struct VentParams {
    /// Number of vents
    pub count: u32,

    /// Layout seed (per-vent horizontal jitter)
    pub seed: u64,

    /// Plume particle lifetime (frames)
    pub particle_lifetime: u32,

    /// Maximum fixed horizontal jitter of a vent (pixels)
    pub jitter_px: f32,
}

impl Default for VentParams {
    fn default() -> Self {
        Self {
            count: 5,
            seed: 456,
            particle_lifetime: 300,
            jitter_px: 24.0,
        }
    }
}

/// Sediment band along the bottom edge
#[derive(Debug, Clone)]
pub struct SedimentParams {
    /// Layout seed (debris size and brightness)
    pub seed: u64,

    /// Distance of the floor line above the bottom edge (pixels)
    pub floor_offset_px: f32,

    /// Horizontal step between sediment grains (pixels)
    pub step_px: f32,

    /// A debris ellipse is drawn every this many grains
    pub debris_every: u32,

    /// Canvases this short (pixels) get no sediment band
    pub min_canvas_height: u32,
}

impl Default for SedimentParams {
    fn default() -> Self {
        Self {
            seed: 789,
            floor_offset_px: 30.0,
            step_px: 4.0,
            debris_every: 10,
            min_canvas_height: 100,
        }
    }
}

/// All atmosphere effects, in paint order
#[derive(Debug, Clone, Default)]
pub struct AtmosphereParams {
    pub marine_snow: MarineSnowParams,
    pub bioluminescence: BioluminescenceParams,
    pub light_rays: LightRayParams,
    pub kelp: KelpParams,
    pub vents: VentParams,
    pub sediment: SedimentParams,
}
