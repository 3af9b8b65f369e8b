use glam::Mat4;

use crate::math::Quaternion;

/// How far the camera sits back from the object along the view axis.
pub const DEFAULT_CAMERA_DISTANCE: f32 = 8.0;

/// Projection and view matrices for one frame, ready to upload verbatim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    /// Viewport-scaled projection with the reversed-depth perspective term.
    pub projection: Mat4,
    /// Object rotation plus the fixed camera back-off.
    pub view: Mat4,
}

impl FrameMatrices {
    /// Build both matrices for a `width` × `height` viewport in physical
    /// pixels.
    #[must_use]
    pub fn build(
        viewport: (u32, u32),
        orientation: Quaternion,
        camera_distance: f32,
    ) -> Self {
        Self {
            projection: projection_matrix(viewport.0, viewport.1),
            view: view_matrix(orientation, camera_distance),
        }
    }

    /// Projection as 16 column-major floats.
    #[must_use]
    pub fn projection_cols(&self) -> [f32; 16] {
        self.projection.to_cols_array()
    }

    /// View as 16 column-major floats.
    #[must_use]
    pub fn view_cols(&self) -> [f32; 16] {
        self.view.to_cols_array()
    }
}

/// Scales x by `1/width`, y by `1/height`, and maps view-space depth to
/// `w = -z / diagonal` with a constant `1 / diagonal` in clip z, so nearer
/// geometry ends up with a larger depth value.
///
/// ```text
/// 1/w  0    0     0
/// 0    1/h  0     0
/// 0    0    0     1/f
/// 0    0   -1/f   0      f = sqrt(w² + h²)
/// ```
#[must_use]
pub fn projection_matrix(width: u32, height: u32) -> Mat4 {
    let w = f64::from(width);
    let h = f64::from(height);
    let f = (w * w + h * h).sqrt();
    let (sx, sy, sf) = ((1.0 / w) as f32, (1.0 / h) as f32, (1.0 / f) as f32);
    Mat4::from_cols_array(&[
        sx, 0.0, 0.0, 0.0, //
        0.0, sy, 0.0, 0.0, //
        0.0, 0.0, 0.0, -sf, //
        0.0, 0.0, sf, 0.0,
    ])
}

/// Element `n` of the rotation lands at `v[(n % 3) * 4 + n / 3]`: the
/// first three rotation values fill row 0. Translation is
/// `(0, 0, -camera_distance)`.
#[must_use]
pub fn view_matrix(orientation: Quaternion, camera_distance: f32) -> Mat4 {
    let mut v = [0.0_f32; 16];
    for (n, value) in orientation.as_rotation_matrix().into_iter().enumerate()
    {
        v[(n % 3) * 4 + n / 3] = value as f32;
    }
    v[14] = -camera_distance;
    v[15] = 1.0;
    Mat4::from_cols_array(&v)
}
