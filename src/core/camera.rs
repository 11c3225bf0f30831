use super::constants::*;
use glam::{Mat4, Vec2, Vec3, Vec4};

// Keeps look_at away from the degenerate straight-up/down case.
const POLAR_EPSILON: f32 = 1e-3;

/// Viewport-dependent starting distance and vertical field of view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    pub distance: f32,
    pub fov_deg: f32,
}

/// Breakpoints by CSS width, pulled back and widened in portrait.
pub fn camera_for_viewport(width: f32, height: f32) -> CameraSettings {
    let (distance, fov_deg) = if width <= SMALL_SCREEN_MAX_WIDTH {
        (10.0, 100.0)
    } else if width <= TABLET_MAX_WIDTH {
        (8.0, 95.0)
    } else if width <= LAPTOP_MAX_WIDTH {
        (7.5, 90.0)
    } else {
        (7.0, 85.0)
    };
    let mut settings = CameraSettings { distance, fov_deg };
    if height > 0.0 && width / height < PORTRAIT_ASPECT {
        settings.distance += PORTRAIT_EXTRA_Z;
        settings.fov_deg += PORTRAIT_EXTRA_FOV_DEG;
    }
    settings
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitLimits {
    pub min_distance: f32,
    pub max_distance: f32,
}

pub fn orbit_limits(width: f32) -> OrbitLimits {
    if width <= SMALL_SCREEN_MAX_WIDTH {
        OrbitLimits {
            min_distance: 5.0,
            max_distance: 20.0,
        }
    } else {
        OrbitLimits {
            min_distance: 3.0,
            max_distance: 15.0,
        }
    }
}

/// Orbit camera around a pannable target. Yaw 0 / polar π/2 looks down -z.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    target: Vec3,
    yaw: f32,
    polar: f32,
    distance: f32,
    fov_deg: f32,
    limits: OrbitLimits,
}

impl OrbitCamera {
    pub fn for_viewport(width: f32, height: f32) -> Self {
        let settings = camera_for_viewport(width, height);
        let limits = orbit_limits(width);
        Self {
            target: Vec3::ZERO,
            yaw: 0.0,
            polar: std::f32::consts::FRAC_PI_2,
            distance: settings.distance,
            fov_deg: settings.fov_deg,
            limits,
        }
    }

    /// Re-apply breakpoints after a resize. The user's zoom is kept but
    /// clamped to the new limits.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.fov_deg = camera_for_viewport(width, height).fov_deg;
        self.limits = orbit_limits(width);
        self.distance = self.clamp_distance(self.distance);
    }

    /// Drag rotation in CSS pixels.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32) {
        self.yaw -= dx_px * ORBIT_RADIANS_PER_PX;
        self.polar = (self.polar - dy_px * ORBIT_RADIANS_PER_PX)
            .clamp(POLAR_EPSILON, std::f32::consts::PI - POLAR_EPSILON);
    }

    /// Drag panning in CSS pixels: slides the target in the view's right/up
    /// plane so the point under the cursor follows it at target depth.
    pub fn pan(&mut self, dx_px: f32, dy_px: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let world_per_px =
            2.0 * self.distance * (self.fov_deg.to_radians() * 0.5).tan() / viewport_height;
        let (right, up) = self.screen_axes();
        self.target += (up * dy_px - right * dx_px) * world_per_px;
    }

    /// World-space right and up directions of the view.
    pub fn screen_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye()).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        (right, right.cross(forward))
    }

    /// Wheel zoom; positive `delta` moves away.
    pub fn zoom(&mut self, delta: f32) {
        let scaled = self.distance * (1.0 + delta * ORBIT_ZOOM_PER_WHEEL_UNIT);
        self.distance = self.clamp_distance(scaled);
    }

    fn clamp_distance(&self, d: f32) -> f32 {
        d.clamp(self.limits.min_distance, self.limits.max_distance)
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn fov_deg(&self) -> f32 {
        self.fov_deg
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sy, cy) = self.yaw.sin_cos();
        self.target + self.distance * Vec3::new(sp * sy, cp, sp * cy)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_deg.to_radians(),
            aspect.max(1e-3),
            CAMERA_ZNEAR,
            CAMERA_ZFAR,
        )
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Project a world point to pixel coordinates (origin top-left). `None`
    /// when the point is behind the camera.
    pub fn project(&self, world: Vec3, width: f32, height: f32) -> Option<Vec2> {
        let clip = self.view_proj(width / height.max(1.0)) * Vec4::new(world.x, world.y, world.z, 1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x * 0.5 + 0.5) * width,
            (1.0 - (ndc.y * 0.5 + 0.5)) * height,
        ))
    }
}
