//! Affine maps between bitmap pixel space and unit texture space.
//!
//! Points and vectors in the plane are carried as homogeneous 4-vectors:
//! `(x, y, 0, 1)` for points and `(x, y, 0, 0)` for vectors, so a single
//! 4x4 matrix holds both the linear part and the translation.

use core::ops::Mul;

use glam::{Mat4, Vec2, Vec4};

use crate::buffer::PixelBuffer;

/// 2D affine transform stored as a 4x4 homogeneous matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform(Mat4);

/// Homogeneous point `(x, y, 0, 1)`.
#[inline]
pub fn point(x: f32, y: f32) -> Vec4 {
    Vec4::new(x, y, 0.0, 1.0)
}

/// Homogeneous vector `(x, y, 0, 0)`.
#[inline]
pub fn vector(x: f32, y: f32) -> Vec4 {
    Vec4::new(x, y, 0.0, 0.0)
}

impl Transform {
    pub const IDENTITY: Self = Self(Mat4::IDENTITY);

    /// Non-uniform scale about the origin.
    pub fn scale(sx: f32, sy: f32) -> Self {
        Self(Mat4::from_cols(
            vector(sx, 0.0),
            vector(0.0, sy),
            Vec4::Z,
            point(0.0, 0.0),
        ))
    }

    /// Map the standard basis onto `u` and `v` and the origin onto `origin`.
    pub fn affine(u: Vec2, v: Vec2, origin: Vec2) -> Self {
        Self(Mat4::from_cols(
            vector(u.x, u.y),
            vector(v.x, v.y),
            Vec4::Z,
            point(origin.x, origin.y),
        ))
    }

    pub fn from_matrix(m: Mat4) -> Self {
        Self(m)
    }

    pub fn matrix(&self) -> Mat4 {
        self.0
    }

    pub fn apply_point(&self, p: Vec2) -> Vec2 {
        let r = self.0 * point(p.x, p.y);
        Vec2::new(r.x, r.y)
    }

    /// Linear part only; translation does not apply to vectors.
    pub fn apply_vector(&self, v: Vec2) -> Vec2 {
        let r = self.0 * vector(v.x, v.y);
        Vec2::new(r.x, r.y)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `self * rhs` applies `rhs` first.
impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        Transform(self.0 * rhs.0)
    }
}

/// Bitmap coordinates to texture coordinates for `buffer`.
///
/// Pixel `(i, j)` maps to its center, `((i + 0.5) / width, (j + 0.5) / height)`.
pub fn bitmap_to_texture(buffer: &PixelBuffer) -> Transform {
    let scale = Transform::scale(1.0 / buffer.width() as f32, 1.0 / buffer.height() as f32);
    let center = Transform::affine(Vec2::X, Vec2::Y, Vec2::splat(0.5));
    scale * center
}

/// Texture coordinates to bitmap coordinates for `buffer`.
///
/// Built directly as `(width * u - 0.5, height * v - 0.5)`; it is the exact
/// inverse of [`bitmap_to_texture`].
pub fn texture_to_bitmap(buffer: &PixelBuffer) -> Transform {
    Transform::affine(
        Vec2::new(buffer.width() as f32, 0.0),
        Vec2::new(0.0, buffer.height() as f32),
        Vec2::splat(-0.5),
    )
}
