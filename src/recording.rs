//! Headless recording: render a fixed number of frames to numbered PNG files.

use std::fs;

use log::{debug, info};

use crate::error::RecordingError;
use crate::frame::FrameSource;
use crate::params::RecordingConfig;

/// Render `config.total_frames()` frames into `config.frames_dir()`; returns the frame count
pub fn record(source: &mut FrameSource, config: &RecordingConfig) -> Result<usize, RecordingError> {
    let frames_dir = config.frames_dir();
    fs::create_dir_all(&frames_dir).map_err(|source| RecordingError::CreateDir {
        path: frames_dir.clone(),
        source,
    })?;

    let total = config.total_frames();
    info!(
        "Recording {} frames ({:.1}s @ {} FPS) to {}",
        total,
        config.duration_secs,
        config.fps,
        frames_dir.display()
    );

    for frame_num in 0..total {
        let canvas = source.next_frame()?;
        let path = config.frame_path(frame_num);
        canvas
            .image()
            .save(&path)
            .map_err(|source| RecordingError::SaveFrame {
                path: path.clone(),
                source,
            })?;

        if frame_num % config.fps.max(1) as usize == 0 {
            info!("Recorded {}/{} frames", frame_num, total);
        } else {
            debug!("Saved {}", path.display());
        }
    }

    info!("Recording complete: {} frames", total);
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::RenderConfig;
    use crate::playback::Playback;
    use crate::scene::SceneRenderer;
    use crate::wave::WaveSample;

    #[test]
    fn test_records_numbered_frames() {
        let samples = vec![WaveSample {
            timestamp: "2024-01-01T00:00".to_string(),
            wave_height: 0.2,
            wave_direction: 270.0,
            wave_period: 5.0,
            current_speed: 0.1,
        }];
        let render = RenderConfig {
            canvas_size: 48,
            blur_sigma: 1.0,
            ..RenderConfig::default()
        };
        let mut source = FrameSource::new(Playback::new(samples, 60).unwrap(), SceneRenderer::default(), render);

        let dir = std::env::temp_dir().join(format!("jellytide-record-{}", std::process::id()));
        let config = RecordingConfig::new(0.1, dir.clone(), 30);
        assert_eq!(record(&mut source, &config).unwrap(), 3);

        let frame = image::open(config.frame_path(2)).unwrap();
        assert_eq!((frame.width(), frame.height()), (48, 48));
        assert!(!config.frame_path(3).exists());
        fs::remove_dir_all(&dir).ok();
    }
}
