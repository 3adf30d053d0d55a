//! Post-processing applied to the finished frame.

use image::imageops;

use crate::canvas::Canvas;

/// Soften the frame with a Gaussian blur; non-positive or non-finite sigma leaves it untouched
pub fn apply_blur(canvas: &mut Canvas, sigma: f32) {
    if !(sigma.is_finite() && sigma > 0.0) {
        return;
    }
    let blurred = imageops::blur(canvas.image(), sigma);
    canvas.set_image(blurred);
}
