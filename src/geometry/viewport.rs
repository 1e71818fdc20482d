use super::Bounds;

/// Fits world bounds into a fixed screen viewport
///
/// The scale is uniform - the smaller of the horizontal and vertical fit
/// ratios, so aspect ratio is preserved - and the scaled bounds are
/// centered inside the margin. The vertical axis is flipped on the way
/// through: input coordinates are Cartesian (y grows up), screen
/// coordinates grow down.
#[derive(Debug, Clone)]
pub struct ViewTransform {
    /// Screen units per world unit
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    viewport_height: f64,
}

impl ViewTransform {
    /// Build a transform that fits `bounds` into a viewport with a
    /// uniform margin on all sides
    ///
    /// # Arguments
    /// * `bounds` - World-space bounding box, non-degenerate
    /// * `viewport_width`, `viewport_height` - Target size in screen units
    /// * `margin` - Reserved border inside the viewport, screen units
    pub fn fit(bounds: &Bounds, viewport_width: f64, viewport_height: f64, margin: f64) -> Self {
        let usable_width = viewport_width - 2.0 * margin;
        let usable_height = viewport_height - 2.0 * margin;

        let scale = if bounds.width() > 0.0 && bounds.height() > 0.0 {
            (usable_width / bounds.width()).min(usable_height / bounds.height())
        } else {
            1.0
        };

        let scaled_width = bounds.width() * scale;
        let scaled_height = bounds.height() * scale;

        let offset_x = (viewport_width - scaled_width) / 2.0 - bounds.min_x * scale;
        let offset_y = (viewport_height - scaled_height) / 2.0 - bounds.min_y * scale;

        Self {
            scale,
            offset_x,
            offset_y,
            viewport_height,
        }
    }

    /// World point -> screen point, flipping y
    pub fn project(&self, x: f64, y: f64) -> (f64, f64) {
        let sx = x * self.scale + self.offset_x;
        let sy = self.viewport_height - (y * self.scale + self.offset_y);
        (sx, sy)
    }

    /// Exact inverse of [`ViewTransform::project`]
    pub fn unproject(&self, sx: f64, sy: f64) -> (f64, f64) {
        let x = (sx - self.offset_x) / self.scale;
        let y = (self.viewport_height - sy - self.offset_y) / self.scale;
        (x, y)
    }

    /// Project a slice of world points
    pub fn project_points(&self, points: &[(f64, f64)]) -> Vec<(f64, f64)> {
        points.iter().map(|&(x, y)| self.project(x, y)).collect()
    }

    /// Screen units per world unit
    pub fn scale_factor(&self) -> f64 {
        self.scale
    }
}
