//! Produces finished frames: playback state, scene and post-processing together.

use crate::canvas::Canvas;
use crate::error::SceneError;
use crate::params::RenderConfig;
use crate::playback::Playback;
use crate::postfx;
use crate::scene::SceneRenderer;

/// Frame producer shared by the window and the recorder
pub struct FrameSource {
    pub playback: Playback,
    renderer: SceneRenderer,
    config: RenderConfig,
}

impl FrameSource {
    pub fn new(playback: Playback, renderer: SceneRenderer, config: RenderConfig) -> Self {
        Self {
            playback,
            renderer,
            config,
        }
    }

    /// Canvas edge length in pixels
    pub fn size(&self) -> u32 {
        self.config.canvas_size
    }

    /// Render the current frame, blurred, without advancing playback
    pub fn render(&self) -> Result<Canvas, SceneError> {
        let size = self.config.canvas_size;
        let params = self.playback.params()?;
        let center = self.playback.bell_center(size, size);

        let mut canvas = Canvas::new(size, size);
        self.renderer
            .render_frame(&mut canvas, center, &params, self.playback.time());
        postfx::apply_blur(&mut canvas, self.config.blur_sigma);
        Ok(canvas)
    }

    /// Render the current frame then step playback
    pub fn next_frame(&mut self) -> Result<Canvas, SceneError> {
        let canvas = self.render()?;
        self.playback.advance();
        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::{SceneTime, WaveSample};

    fn source() -> FrameSource {
        let samples = vec![WaveSample {
            timestamp: "2024-01-01T00:00".to_string(),
            wave_height: 0.5,
            wave_direction: 45.0,
            wave_period: 7.0,
            current_speed: 0.2,
        }];
        let config = RenderConfig {
            canvas_size: 96,
            blur_sigma: 0.0,
            ..RenderConfig::default()
        };
        FrameSource::new(Playback::new(samples, 60).unwrap(), SceneRenderer::default(), config)
    }

    #[test]
    fn test_next_frame_advances_time() {
        let mut source = source();
        let canvas = source.next_frame().unwrap();
        assert_eq!(canvas.width(), 96);
        assert_eq!(source.playback.time(), SceneTime(1));
    }

    #[test]
    fn test_render_is_repeatable() {
        let source = source();
        assert_eq!(source.render().unwrap().image(), source.render().unwrap().image());
    }
}
