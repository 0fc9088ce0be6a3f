use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::options::CameraOptions;
use crate::section::SectionId;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera placed for `section`, looking at the origin.
    ///
    /// Close-ups (bigbang, humano) sit at z = 8, the wider shots at z = 10,
    /// and newton is raised to y = 2 to look down at the falling apple.
    #[must_use]
    pub fn for_section(
        section: SectionId,
        options: &CameraOptions,
        aspect: f32,
    ) -> Self {
        let eye = match section {
            SectionId::BigBang | SectionId::Humano => Vec3::new(0.0, 0.0, 8.0),
            SectionId::Adn | SectionId::Vitruvio => Vec3::new(0.0, 0.0, 10.0),
            SectionId::Newton => Vec3::new(0.0, 2.0, 10.0),
        };
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Update the aspect ratio from a container's pixel size. A zero height
    /// keeps the previous aspect.
    pub fn set_aspect_from(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Projection matrix alone.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
}
