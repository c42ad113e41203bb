use glam::Vec2;

/// Supplies the half-width and half-height of the confining rectangle.
/// Movers read this once at init and never again.
pub trait Viewport {
    fn half_extent(&self) -> Vec2;
}

/// A viewport with known extents, for hosts that compute them elsewhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport(pub Vec2);

impl Viewport for FixedViewport {
    fn half_extent(&self) -> Vec2 {
        self.0
    }
}

/// Orthographic 2D camera.
/// Origin at center, Y-up; world units match mover positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Visible width in world units.
    pub width: f32,
    /// Visible height in world units.
    pub height: f32,
    /// Camera center position in world space.
    pub center: Vec2,
}

impl Camera2D {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            center: Vec2::ZERO,
        }
    }

    pub fn with_center(mut self, center: Vec2) -> Self {
        self.center = center;
        self
    }

    /// Map viewport coordinates (0,0 bottom-left to 1,1 top-right) into world space.
    pub fn viewport_to_world(&self, viewport: Vec2) -> Vec2 {
        let size = Vec2::new(self.width, self.height);
        self.center + (viewport - Vec2::splat(0.5)) * size
    }

    /// Resize the visible area (e.g. on window resize).
    /// Maintains aspect ratio by fitting the game area.
    pub fn resize(
        &mut self,
        viewport_width: f32,
        viewport_height: f32,
        game_width: f32,
        game_height: f32,
    ) {
        let horiz_ratio = viewport_width / game_width;
        let vert_ratio = viewport_height / game_height;
        let scale = horiz_ratio.min(vert_ratio);
        self.width = viewport_width / scale;
        self.height = viewport_height / scale;
    }
}

impl Viewport for Camera2D {
    /// Half-extents of the visible area. The bounce checks are relative to
    /// the origin, so the camera center does not shift them.
    fn half_extent(&self) -> Vec2 {
        self.viewport_to_world(Vec2::ONE) - self.center
    }
}
