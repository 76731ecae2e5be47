use crate::math::turns_to_rad;
use crate::math::vec::Vec4;
use std::fmt;

/// 4x4 transform matrix with row-major layout:
///
/// ```text
///  0       1       2       3
///  4       5       6       7
///  8       9       10      11
///  12      13      14      15
/// ```
///
/// Element `(row, col)` lives at `data[row * 4 + col]`; the translation of an
/// affine transform occupies indices 3, 7, and 11. Every operation returns a
/// new matrix; values are never mutated in place.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat4(pub [f32; 16]);

impl Mat4 {
    /// Returns the multiplicative identity.
    pub fn identity() -> Mat4 {
        Mat4([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Returns a rotation matrix in the XY plane, rotating by the given
    /// number of turns. Used for roll.
    pub fn rotation_xy(turns: f32) -> Mat4 {
        let rot = turns_to_rad(turns);
        let (s, c) = rot.sin_cos();

        Mat4([
            c, s, 0.0, 0.0, //
            -s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Returns a rotation matrix in the XZ plane, rotating by the given
    /// number of turns. Used for yaw.
    pub fn rotation_xz(turns: f32) -> Mat4 {
        let rot = turns_to_rad(turns);
        let (s, c) = rot.sin_cos();

        Mat4([
            c, 0.0, s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Returns a rotation matrix in the YZ plane, rotating by the given
    /// number of turns. Used for pitch.
    pub fn rotation_yz(turns: f32) -> Mat4 {
        let rot = turns_to_rad(turns);
        let (s, c) = rot.sin_cos();

        Mat4([
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, s, 0.0, //
            0.0, -s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Returns a translation matrix moving points by `(dx, dy, dz)`.
    pub fn translation(dx: f32, dy: f32, dz: f32) -> Mat4 {
        Mat4([
            1.0, 0.0, 0.0, dx, //
            0.0, 1.0, 0.0, dy, //
            0.0, 0.0, 1.0, dz, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Returns a non-uniform scale matrix.
    pub fn scale(sx: f32, sy: f32, sz: f32) -> Mat4 {
        Mat4([
            sx, 0.0, 0.0, 0.0, //
            0.0, sy, 0.0, 0.0, //
            0.0, 0.0, sz, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Returns the matrix product `self × right`.
    ///
    /// Matrix multiplication is not commutative: the order encodes composition
    /// direction. `parent.mul(&local)` takes local-space coordinates to the
    /// parent's space.
    pub fn mul(&self, right: &Mat4) -> Mat4 {
        let mut res = [0.0; 16];

        for row in 0..4 {
            for col in 0..4 {
                let mut cell = 0.0;
                for k in 0..4 {
                    cell += self.0[row * 4 + k] * right.0[k * 4 + col];
                }

                res[row * 4 + col] = cell;
            }
        }

        Mat4(res)
    }

    /// Right-multiplies by the column vector `(x, y, z, w)`.
    pub fn transform(&self, x: f32, y: f32, z: f32, w: f32) -> Vec4 {
        self.transform_vec(&Vec4::new(x, y, z, w))
    }

    /// Right-multiplies by `vec` treated as a column vector:
    /// `result[row] = Σ_col data[row * 4 + col] * vec[col]`.
    pub fn transform_vec(&self, vec: &Vec4) -> Vec4 {
        let m = &self.0;
        let (x, y, z, w) = (vec.x(), vec.y(), vec.z(), vec.w());

        Vec4::new(
            m[0] * x + m[1] * y + m[2] * z + m[3] * w,
            m[4] * x + m[5] * y + m[6] * z + m[7] * w,
            m[8] * x + m[9] * y + m[10] * z + m[11] * w,
            m[12] * x + m[13] * y + m[14] * z + m[15] * w,
        )
    }

    /// Returns the element at `(row, col)`.
    pub fn rc(&self, row: usize, col: usize) -> f32 {
        self.0[row * 4 + col]
    }

    // Inverting a 4x4 matrix takes a pile of 2x2 sub-determinants; the
    // cofactor expansion below is the standard closed form, shared by
    // inverse() and try_inverse(). Returns (determinant, adjugate).
    fn det_and_adjugate(&self) -> (f32, [f32; 16]) {
        let a2323 = self.rc(2, 2) * self.rc(3, 3) - self.rc(2, 3) * self.rc(3, 2);
        let a1323 = self.rc(2, 1) * self.rc(3, 3) - self.rc(2, 3) * self.rc(3, 1);
        let a1223 = self.rc(2, 1) * self.rc(3, 2) - self.rc(2, 2) * self.rc(3, 1);
        let a0323 = self.rc(2, 0) * self.rc(3, 3) - self.rc(2, 3) * self.rc(3, 0);
        let a0223 = self.rc(2, 0) * self.rc(3, 2) - self.rc(2, 2) * self.rc(3, 0);
        let a0123 = self.rc(2, 0) * self.rc(3, 1) - self.rc(2, 1) * self.rc(3, 0);
        let a2313 = self.rc(1, 2) * self.rc(3, 3) - self.rc(1, 3) * self.rc(3, 2);
        let a1313 = self.rc(1, 1) * self.rc(3, 3) - self.rc(1, 3) * self.rc(3, 1);
        let a1213 = self.rc(1, 1) * self.rc(3, 2) - self.rc(1, 2) * self.rc(3, 1);
        let a2312 = self.rc(1, 2) * self.rc(2, 3) - self.rc(1, 3) * self.rc(2, 2);
        let a1312 = self.rc(1, 1) * self.rc(2, 3) - self.rc(1, 3) * self.rc(2, 1);
        let a1212 = self.rc(1, 1) * self.rc(2, 2) - self.rc(1, 2) * self.rc(2, 1);
        let a0313 = self.rc(1, 0) * self.rc(3, 3) - self.rc(1, 3) * self.rc(3, 0);
        let a0213 = self.rc(1, 0) * self.rc(3, 2) - self.rc(1, 2) * self.rc(3, 0);
        let a0312 = self.rc(1, 0) * self.rc(2, 3) - self.rc(1, 3) * self.rc(2, 0);
        let a0212 = self.rc(1, 0) * self.rc(2, 2) - self.rc(1, 2) * self.rc(2, 0);
        let a0113 = self.rc(1, 0) * self.rc(3, 1) - self.rc(1, 1) * self.rc(3, 0);
        let a0112 = self.rc(1, 0) * self.rc(2, 1) - self.rc(1, 1) * self.rc(2, 0);

        let det = self.rc(0, 0) * (self.rc(1, 1) * a2323 - self.rc(1, 2) * a1323 + self.rc(1, 3) * a1223)
            - self.rc(0, 1) * (self.rc(1, 0) * a2323 - self.rc(1, 2) * a0323 + self.rc(1, 3) * a0223)
            + self.rc(0, 2) * (self.rc(1, 0) * a1323 - self.rc(1, 1) * a0323 + self.rc(1, 3) * a0123)
            - self.rc(0, 3) * (self.rc(1, 0) * a1223 - self.rc(1, 1) * a0223 + self.rc(1, 2) * a0123);

        let adj = [
            self.rc(1, 1) * a2323 - self.rc(1, 2) * a1323 + self.rc(1, 3) * a1223,
            -(self.rc(0, 1) * a2323 - self.rc(0, 2) * a1323 + self.rc(0, 3) * a1223),
            self.rc(0, 1) * a2313 - self.rc(0, 2) * a1313 + self.rc(0, 3) * a1213,
            -(self.rc(0, 1) * a2312 - self.rc(0, 2) * a1312 + self.rc(0, 3) * a1212),
            //
            -(self.rc(1, 0) * a2323 - self.rc(1, 2) * a0323 + self.rc(1, 3) * a0223),
            self.rc(0, 0) * a2323 - self.rc(0, 2) * a0323 + self.rc(0, 3) * a0223,
            -(self.rc(0, 0) * a2313 - self.rc(0, 2) * a0313 + self.rc(0, 3) * a0213),
            self.rc(0, 0) * a2312 - self.rc(0, 2) * a0312 + self.rc(0, 3) * a0212,
            //
            self.rc(1, 0) * a1323 - self.rc(1, 1) * a0323 + self.rc(1, 3) * a0123,
            -(self.rc(0, 0) * a1323 - self.rc(0, 1) * a0323 + self.rc(0, 3) * a0123),
            self.rc(0, 0) * a1313 - self.rc(0, 1) * a0313 + self.rc(0, 3) * a0113,
            -(self.rc(0, 0) * a1312 - self.rc(0, 1) * a0312 + self.rc(0, 3) * a0112),
            //
            -(self.rc(1, 0) * a1223 - self.rc(1, 1) * a0223 + self.rc(1, 2) * a0123),
            self.rc(0, 0) * a1223 - self.rc(0, 1) * a0223 + self.rc(0, 2) * a0123,
            -(self.rc(0, 0) * a1213 - self.rc(0, 1) * a0213 + self.rc(0, 2) * a0113),
            self.rc(0, 0) * a1212 - self.rc(0, 1) * a0212 + self.rc(0, 2) * a0112,
        ];

        (det, adj)
    }

    /// Returns the general analytic inverse of this matrix.
    ///
    /// Singular matrices have no inverse; passing one produces NaN/Infinity
    /// components rather than an error. Every matrix composed from
    /// translation, rotation, and non-zero scale is invertible, so callers
    /// working with well-formed transforms never hit that case. Use
    /// [`Mat4::try_inverse`] when singularity is a live possibility.
    pub fn inverse(&self) -> Mat4 {
        let (det, adj) = self.det_and_adjugate();
        let dr = 1.0 / det;

        Mat4(adj.map(|c| c * dr))
    }

    /// Returns the inverse of this matrix, or `None` if it is singular.
    pub fn try_inverse(&self) -> Option<Mat4> {
        let (det, adj) = self.det_and_adjugate();
        if det.abs() < f32::EPSILON {
            return None;
        }

        let dr = 1.0 / det;
        Some(Mat4(adj.map(|c| c * dr)))
    }

    /// Returns a perspective projection for the given frustum planes.
    ///
    /// `near` and `far` must both be strictly positive with `far > near`;
    /// this is not checked, and violating it yields a degenerate or inverted
    /// projection.
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
        // these scalars will scale x,y values to the near plane
        let scale_x = 2.0 * near / (right - left);
        let scale_y = 2.0 * near / (top - bottom);

        // shift the eye depending on the right/left and top/bottom planes.
        // only really used for VR (left eye and right eye shifted differently).
        let t_x = (right + left) / (right - left);
        let t_y = (top + bottom) / (top - bottom);

        // map z into the range [-1, 1] with a non-linear ramp. The w
        // coordinate of an incoming point is 1, so row 2's last column is
        // added to z after scaling. Left-handed convention: row 3 copies +z
        // into w for the perspective divide.
        let c2 = (far + near) / (far - near);
        let c1 = 2.0 * far * near / (far - near);

        Mat4([
            scale_x, 0.0, t_x, 0.0, //
            0.0, scale_y, t_y, 0.0, //
            0.0, 0.0, c2, -c1, //
            0.0, 0.0, 1.0, 0.0,
        ])
    }

    /// Returns a symmetric perspective projection.
    ///
    /// `fov` is the total vertical field of view in turns; `aspect_ratio` is
    /// width over height. `near`/`far` follow the [`Mat4::frustum`] contract.
    pub fn perspective(fov: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
        let rot = turns_to_rad(fov);

        let top = (rot / 2.0).tan() * near;
        let bottom = -top;
        let right = top * aspect_ratio;
        let left = -right;

        Mat4::frustum(left, right, bottom, top, near, far)
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(data: [f32; 16]) -> Self {
        Mat4(data)
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(matrix: Mat4) -> Self {
        matrix.0
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..4 {
            write!(f, "[")?;
            for col in 0..4 {
                write!(f, " {}", self.rc(row, col))?;
            }
            write!(f, " ]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn assert_mat_eq(a: &Mat4, b: &Mat4, eps: f32) {
        for i in 0..16 {
            assert!(
                (a.0[i] - b.0[i]).abs() <= eps,
                "element {} differs: {} vs {}\n  left: {}\n right: {}",
                i,
                a.0[i],
                b.0[i],
                a,
                b
            );
        }
    }

    fn sample_trs() -> Mat4 {
        Mat4::translation(1.0, 2.0, 3.0)
            .mul(&Mat4::rotation_xz(0.13))
            .mul(&Mat4::rotation_yz(0.08))
            .mul(&Mat4::rotation_xy(0.21))
            .mul(&Mat4::scale(2.0, 0.5, 1.5))
    }

    #[test]
    fn test_identity_law() {
        let m = sample_trs();
        assert_mat_eq(&Mat4::identity().mul(&m), &m, 1e-9);
        assert_mat_eq(&m.mul(&Mat4::identity()), &m, 1e-9);
    }

    #[test]
    fn test_translation_composition() {
        let composed = Mat4::translation(1.0, 2.0, 3.0).mul(&Mat4::translation(4.0, 5.0, 6.0));
        assert_mat_eq(&composed, &Mat4::translation(5.0, 7.0, 9.0), 1e-9);
    }

    #[test]
    fn test_translation_applies_to_points_only() {
        let m = Mat4::translation(1.0, 2.0, 3.0);
        assert_eq!(m.transform(0.0, 0.0, 0.0, 1.0), Vec4::point(1.0, 2.0, 3.0));
        assert_eq!(m.transform(1.0, 0.0, 0.0, 0.0), Vec4::direction(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_rotation_xz_quarter_turn() {
        let m = Mat4::rotation_xz(0.25);
        let v = m.transform(0.0, 0.0, 1.0, 0.0);
        assert!((v.x() - 1.0).abs() < 1e-6);
        assert!(v.y().abs() < 1e-6);
        assert!(v.z().abs() < 1e-6);
    }

    #[test]
    fn test_full_turn_is_identity() {
        assert_mat_eq(&Mat4::rotation_xy(1.0), &Mat4::identity(), 1e-6);
        assert_mat_eq(&Mat4::rotation_yz(1.0), &Mat4::identity(), 1e-6);
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = sample_trs();
        assert_mat_eq(&m.mul(&m.inverse()), &Mat4::identity(), 1e-4);
        assert_mat_eq(&m.inverse().mul(&m), &Mat4::identity(), 1e-4);
    }

    #[test]
    fn test_inverse_round_trip_random_trs() {
        let mut rng = rand::thread_rng();

        for _ in 0..32 {
            let m = Mat4::translation(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            )
            .mul(&Mat4::rotation_xz(rng.gen_range(0.0..1.0)))
            .mul(&Mat4::rotation_yz(rng.gen_range(-0.24..0.24)))
            .mul(&Mat4::rotation_xy(rng.gen_range(-0.5..0.5)))
            .mul(&Mat4::scale(
                rng.gen_range(0.5..2.0),
                rng.gen_range(0.5..2.0),
                rng.gen_range(0.5..2.0),
            ));

            assert_mat_eq(&m.mul(&m.inverse()), &Mat4::identity(), 1e-3);
        }
    }

    #[test]
    fn test_try_inverse_singular() {
        // zero scale on one axis collapses a dimension
        let m = Mat4::scale(1.0, 0.0, 1.0);
        assert!(m.try_inverse().is_none());
        assert!(Mat4::translation(3.0, 0.0, 0.0).try_inverse().is_some());
    }

    #[test]
    fn test_perspective_depth_range() {
        let (near, far) = (0.1, 100.0);
        let proj = Mat4::perspective(0.25, 1.0, near, far);

        let at_near = proj.transform(0.0, 0.0, near, 1.0);
        assert!((at_near.z() / at_near.w() + 1.0).abs() < 1e-4);

        let at_far = proj.transform(0.0, 0.0, far, 1.0);
        assert!((at_far.z() / at_far.w() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_perspective_near_plane_scale() {
        // fov of a quarter turn puts the top of the near plane at y = near
        let near = 0.1;
        let proj = Mat4::perspective(0.25, 1.0, near, 100.0);
        let v = proj.transform(0.0, near, near, 1.0);
        assert!((v.y() / v.w() - 1.0).abs() < 1e-4);
    }
}
