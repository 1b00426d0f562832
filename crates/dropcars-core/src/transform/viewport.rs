use tracing::trace;

use crate::consts::MIN_SCALE;

use super::bounds::PanBounds;
use super::event::GestureEvent;
use super::geometry::{clamp_scale, ContentSize, DisplayRect, Translation};

/// Latch state of one gesture recognizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    #[default]
    Idle,
    Active,
}

/// The externally observable transform, sampled once per rendered frame.
///
/// Applied as translate-then-scale around the center of the content box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformSnapshot {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
}

impl TransformSnapshot {
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: MIN_SCALE,
    };

    /// Map a point in box-local coordinates to where it is drawn.
    pub fn map_point(&self, content: ContentSize, x: f32, y: f32) -> (f32, f32) {
        let (cx, cy) = content.center();
        (
            cx + self.translate_x + self.scale * (x - cx),
            cy + self.translate_y + self.scale * (y - cy),
        )
    }

    /// Rect the image layer occupies when the box's top-left corner sits at
    /// `(origin_x, origin_y)`.
    pub fn image_rect(&self, content: ContentSize, origin_x: f32, origin_y: f32) -> DisplayRect {
        let (left, top) = self.map_point(content, 0.0, 0.0);
        DisplayRect {
            x: origin_x + left,
            y: origin_y + top,
            width: content.width() * self.scale,
            height: content.height() * self.scale,
        }
    }
}

/// Pinch/pan transform for one image instance.
///
/// Pinch multipliers and pan deltas are relative to the start of their
/// gesture and are applied on top of the values committed when the previous
/// gesture ended.
#[derive(Clone, Debug)]
pub struct ViewportTransform {
    content: ContentSize,
    scale: f32,
    translation: Translation,
    saved_scale: f32,
    saved_translation: Translation,
    pinch: GesturePhase,
    pan: GesturePhase,
}

impl ViewportTransform {
    pub fn new(content: ContentSize) -> Self {
        Self {
            content,
            scale: MIN_SCALE,
            translation: Translation::ZERO,
            saved_scale: MIN_SCALE,
            saved_translation: Translation::ZERO,
            pinch: GesturePhase::Idle,
            pan: GesturePhase::Idle,
        }
    }

    pub fn content(&self) -> ContentSize {
        self.content
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn translation(&self) -> Translation {
        self.translation
    }

    pub fn saved_scale(&self) -> f32 {
        self.saved_scale
    }

    pub fn saved_translation(&self) -> Translation {
        self.saved_translation
    }

    pub fn pinch_phase(&self) -> GesturePhase {
        self.pinch
    }

    pub fn pan_phase(&self) -> GesturePhase {
        self.pan
    }

    pub fn is_idle(&self) -> bool {
        self.pinch == GesturePhase::Idle && self.pan == GesturePhase::Idle
    }

    /// Pan limits for the current (live) scale.
    pub fn bounds(&self) -> PanBounds {
        PanBounds::for_scale(self.content, self.scale)
    }

    pub fn snapshot(&self) -> TransformSnapshot {
        TransformSnapshot {
            translate_x: self.translation.x,
            translate_y: self.translation.y,
            scale: self.scale,
        }
    }

    pub fn apply(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::PinchBegin => self.pinch_begin(),
            GestureEvent::PinchUpdate { multiplier } => self.pinch_update(multiplier),
            GestureEvent::PinchEnd => self.pinch_end(),
            GestureEvent::PanBegin => self.pan_begin(),
            GestureEvent::PanUpdate { dx, dy } => self.pan_update(dx, dy),
            GestureEvent::PanEnd => self.pan_end(),
        }
    }

    pub fn pinch_begin(&mut self) {
        self.pinch = GesturePhase::Active;
    }

    /// `multiplier` is the scale reported by the recognizer since the pinch
    /// started. Non-finite values are ignored.
    pub fn pinch_update(&mut self, multiplier: f32) {
        if !multiplier.is_finite() {
            return;
        }
        self.pinch = GesturePhase::Active;
        self.scale = clamp_scale(self.saved_scale * multiplier);
        // Zooming out shrinks the bounds; pull translation in on the same update.
        self.translation = self.bounds().clamp(self.translation);
    }

    /// Also used for a cancelled pinch.
    pub fn pinch_end(&mut self) {
        self.pinch = GesturePhase::Idle;
        self.saved_scale = self.scale;
        self.translation = self.bounds().clamp(self.translation);
        self.saved_translation = self.translation;
        trace!(
            scale = self.saved_scale,
            tx = self.saved_translation.x,
            ty = self.saved_translation.y,
            "pinch committed"
        );
    }

    pub fn pan_begin(&mut self) {
        self.pan = GesturePhase::Active;
    }

    /// `(dx, dy)` is the translation reported since the pan started.
    /// Non-finite values are ignored.
    pub fn pan_update(&mut self, dx: f32, dy: f32) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.pan = GesturePhase::Active;
        let candidate = self.saved_translation.offset(dx, dy);
        self.translation = self.bounds().clamp(candidate);
    }

    /// Also used for a cancelled pan. No inertia: the image stays where it is.
    pub fn pan_end(&mut self) {
        self.pan = GesturePhase::Idle;
        self.saved_translation = self.translation;
        trace!(
            tx = self.saved_translation.x,
            ty = self.saved_translation.y,
            "pan committed"
        );
    }
}
