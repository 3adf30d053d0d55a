//! Error types for the wave record, the scene, presentation and recording.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the scene core
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    /// No samples to interpolate between; playback cannot start
    #[error("wave dataset is empty")]
    EmptyDataset,
}

/// Errors raised while loading a wave record
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read wave data from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was readable but held no usable rows
    #[error("no valid wave samples in {path} ({skipped} rows skipped)")]
    NoSamples { path: PathBuf, skipped: usize },
}

/// Errors raised while bringing up the window surface and GPU
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("failed to create surface")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter")]
    NoAdapter,

    #[error("failed to request device")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

/// Errors raised while writing recorded frames
#[derive(Debug, Error)]
pub enum RecordingError {
    #[error("failed to create frame directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to save frame {path}")]
    SaveFrame {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Scene(#[from] SceneError),
}
