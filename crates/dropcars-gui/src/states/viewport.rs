use dropcars_core::config::ViewerConfig;
use dropcars_core::transform::{ContentSize, GestureEvent, ViewportTransform};

/// Viewport display state.
///
/// egui reports pinch and drag as per-frame increments while the transform
/// expects values relative to the start of the gesture, so the running
/// totals are kept here.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Natural size of the loaded image.
    pub image_size: Option<[usize; 2]>,
    pub viewing_label: String,
    pub transform: ViewportTransform,
    pinch_total: Option<f32>,
    pan_total: Option<egui::Vec2>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(ViewerConfig::default().content_size())
    }
}

impl ViewportState {
    pub fn new(content: ContentSize) -> Self {
        Self {
            texture: None,
            image_size: None,
            viewing_label: String::new(),
            transform: ViewportTransform::new(content),
            pinch_total: None,
            pan_total: None,
        }
    }

    pub fn content(&self) -> ContentSize {
        self.transform.content()
    }

    /// Back to scale 1 with no offset. Any gesture in flight is dropped.
    pub fn reset(&mut self) {
        self.transform = ViewportTransform::new(self.transform.content());
        self.pinch_total = None;
        self.pan_total = None;
    }

    /// Switch to a new box size, discarding the current transform.
    pub fn resize(&mut self, content: ContentSize) {
        self.transform = ViewportTransform::new(content);
        self.pinch_total = None;
        self.pan_total = None;
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch_total.is_some()
    }

    pub fn is_panning(&self) -> bool {
        self.pan_total.is_some()
    }

    pub fn begin_pinch(&mut self) {
        self.pinch_total = Some(1.0);
        self.transform.apply(GestureEvent::PinchBegin);
    }

    /// Fold one frame's zoom factor into the running pinch multiplier.
    pub fn pinch_by(&mut self, factor: f32) {
        if !self.is_pinching() {
            self.begin_pinch();
        }
        if let Some(total) = self.pinch_total.as_mut() {
            *total *= factor;
            let multiplier = *total;
            self.transform.apply(GestureEvent::PinchUpdate { multiplier });
        }
    }

    pub fn end_pinch(&mut self) {
        if self.pinch_total.take().is_some() {
            self.transform.apply(GestureEvent::PinchEnd);
            // The committed translation already holds the drag so far, so a
            // drag still in progress continues from zero.
            if let Some(total) = self.pan_total.as_mut() {
                *total = egui::Vec2::ZERO;
            }
        }
    }

    /// A complete pinch in one step, for mouse-wheel zoom.
    pub fn zoom_step(&mut self, factor: f32) {
        self.begin_pinch();
        self.pinch_by(factor);
        self.end_pinch();
    }

    pub fn begin_pan(&mut self) {
        self.pan_total = Some(egui::Vec2::ZERO);
        self.transform.apply(GestureEvent::PanBegin);
    }

    /// Fold one frame's drag delta into the running pan offset.
    pub fn pan_by(&mut self, delta: egui::Vec2) {
        if !self.is_panning() {
            self.begin_pan();
        }
        if let Some(total) = self.pan_total.as_mut() {
            *total += delta;
            let (dx, dy) = (total.x, total.y);
            self.transform.apply(GestureEvent::PanUpdate { dx, dy });
        }
    }

    pub fn end_pan(&mut self) {
        if self.pan_total.take().is_some() {
            self.transform.apply(GestureEvent::PanEnd);
        }
    }
}
