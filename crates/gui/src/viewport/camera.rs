use glam::Vec2;

/// Smallest allowed zoom factor
pub const MIN_ZOOM: f32 = 0.15;
/// Largest allowed zoom factor
pub const MAX_ZOOM: f32 = 6.0;
/// Multiplicative zoom step per wheel tick towards the cursor
pub const ZOOM_STEP_IN: f32 = 1.1;
/// Multiplicative zoom step per wheel tick away from the cursor
pub const ZOOM_STEP_OUT: f32 = 0.9;

/// Pan/zoom camera for the 2D viewport.
///
/// `x`/`y` are the pan offset in screen pixels; world coordinates map to the
/// screen as `screen = world * zoom + (viewport center + offset)`.
pub struct Camera2D {
    pub x: f32,
    pub y: f32,
    /// Zoom factor, clamped to [`MIN_ZOOM`, `MAX_ZOOM`]
    pub zoom: f32,
}

impl Camera2D {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }

    fn view_center(&self, rect: egui::Rect) -> egui::Pos2 {
        egui::pos2(rect.center().x + self.x, rect.center().y + self.y)
    }

    /// Project a world point to screen coords within the viewport rect.
    pub fn world_to_screen(&self, world: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let c = self.view_center(rect);
        egui::pos2(world.x * self.zoom + c.x, world.y * self.zoom + c.y)
    }

    /// Unproject a screen position back to world coords. Exact inverse of
    /// [`Camera2D::world_to_screen`] up to floating-point tolerance.
    pub fn screen_to_world(&self, screen: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let c = self.view_center(rect);
        Vec2::new((screen.x - c.x) / self.zoom, (screen.y - c.y) / self.zoom)
    }

    /// Shift the camera by a screen-pixel delta.
    pub fn pan(&mut self, delta: egui::Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Zoom towards a screen point: the world point under the pointer stays
    /// under the pointer after the zoom change.
    pub fn zoom_about(&mut self, pointer: egui::Pos2, rect: egui::Rect, factor: f32) {
        let before = self.screen_to_world(pointer, rect);
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let after = self.screen_to_world(pointer, rect);

        self.x += (after.x - before.x) * self.zoom;
        self.y += (after.y - before.y) * self.zoom;
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
