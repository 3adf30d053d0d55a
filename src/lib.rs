//! Jellytide library - deep-sea jellyfish scene driven by ocean wave data

pub mod canvas;
pub mod cli;
pub mod display;
pub mod error;
pub mod font;
pub mod frame;
pub mod params;
pub mod playback;
pub mod postfx;
pub mod recording;
pub mod scene;
pub mod wave;
