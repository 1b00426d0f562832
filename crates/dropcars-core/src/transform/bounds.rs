use super::geometry::{ContentSize, Translation};

/// Symmetric pan limits for one zoom level.
///
/// Panning may move the image at most half of the overscan on each axis:
/// `max_x = width * (scale - 1) / 2`, `max_y = height * (scale - 1) / 2`.
/// At scale 1 both limits are zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanBounds {
    pub max_x: f32,
    pub max_y: f32,
}

impl PanBounds {
    pub fn for_scale(content: ContentSize, scale: f32) -> Self {
        let overscan = (scale - 1.0).max(0.0);
        Self {
            max_x: content.width() * overscan / 2.0,
            max_y: content.height() * overscan / 2.0,
        }
    }

    pub fn clamp(&self, t: Translation) -> Translation {
        Translation {
            x: t.x.clamp(-self.max_x, self.max_x),
            y: t.y.clamp(-self.max_y, self.max_y),
        }
    }
}
