use std::ops::Mul;

use glam::DQuat;

/// Quaternion with vector part `(i, j, k)` and scalar part `l`.
///
/// Unit quaternions represent rotations; the exp/log maps also pass general
/// (non-unit) values through this type, so construction never validates.
/// Every operation returns a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    /// First vector component (x axis).
    pub i: f64,
    /// Second vector component (y axis).
    pub j: f64,
    /// Third vector component (z axis).
    pub k: f64,
    /// Scalar component.
    pub l: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Build a quaternion from its four components.
    #[must_use]
    pub const fn new(i: f64, j: f64, k: f64, l: f64) -> Self {
        Self { i, j, k, l }
    }

    /// Build from `[i, j, k, l]`.
    #[must_use]
    pub const fn from_array(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    /// Components as `[i, j, k, l]`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.i, self.j, self.k, self.l]
    }

    /// Rotation of `angle` radians about `axis`. The axis does not need to
    /// be normalized; a zero axis yields the identity.
    #[must_use]
    pub fn from_axis_angle(axis: [f64; 3], angle: f64) -> Self {
        let len = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2])
            .sqrt();
        if len == 0.0 {
            return Self::IDENTITY;
        }
        let (sin, cos) = (angle / 2.0).sin_cos();
        let s = sin / len;
        Self::new(s * axis[0], s * axis[1], s * axis[2], cos)
    }

    /// Squared length of the vector part.
    #[must_use]
    pub fn vector_norm_squared(self) -> f64 {
        self.i * self.i + self.j * self.j + self.k * self.k
    }

    /// Four-component dot product.
    #[must_use]
    pub fn dot(self, that: Self) -> f64 {
        self.i * that.i + self.j * that.j + self.k * that.k + self.l * that.l
    }

    /// Euclidean norm over all four components.
    #[must_use]
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Scale to unit norm. The zero quaternion maps to the identity.
    #[must_use]
    pub fn normalized(self) -> Self {
        let n = self.norm();
        if n == 0.0 || !n.is_finite() {
            return Self::IDENTITY;
        }
        Self::new(self.i / n, self.j / n, self.k / n, self.l / n)
    }

    /// Negate the vector part. For unit quaternions this is the inverse
    /// rotation.
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self::new(-self.i, -self.j, -self.k, self.l)
    }

    /// Exponential map.
    ///
    /// With `r = |(i, j, k)|` the result is
    /// `e^l * (sin(r) * (i, j, k) / r, cos(r))`. A zero vector part gives
    /// the pure scalar `e^l`.
    #[must_use]
    pub fn exp(self) -> Self {
        let r = self.vector_norm_squared().sqrt();
        let mag = self.l.exp();
        if r == 0.0 {
            return Self::new(0.0, 0.0, 0.0, mag);
        }
        let (sin, cos) = r.sin_cos();
        let s = mag * sin / r;
        Self::new(s * self.i, s * self.j, s * self.k, mag * cos)
    }

    /// Logarithm map, the inverse of [`exp`](Self::exp).
    ///
    /// The vector part is the rotation axis scaled by
    /// `atan2(|(i, j, k)|, l)`; the scalar part is `ln |q|`. A zero vector
    /// part gives a zero vector. The sign of `l` is kept, so a negative
    /// scalar part maps to an angle past `π/2` and `exp` restores it.
    #[must_use]
    pub fn log(self) -> Self {
        let rr = self.vector_norm_squared();
        let ll = self.l * self.l;
        let scalar = 0.5 * (ll + rr).ln();
        if rr == 0.0 {
            return Self::new(0.0, 0.0, 0.0, scalar);
        }
        let r = rr.sqrt();
        let s = r.atan2(self.l) / r;
        Self::new(s * self.i, s * self.j, s * self.k, scalar)
    }

    /// All sixteen component products `self[row] * that[col]`, row-major.
    pub(crate) fn outer(self, that: Self) -> [f64; 16] {
        let a = self.to_array();
        let b = that.to_array();
        let mut out = [0.0; 16];
        for (row, x) in a.iter().enumerate() {
            for (col, y) in b.iter().enumerate() {
                out[row * 4 + col] = x * y;
            }
        }
        out
    }

    /// Hamilton product `self * that`.
    ///
    /// Acting on vectors by conjugation, the result applies `that` first
    /// and then `self`.
    #[must_use]
    pub fn compose(self, that: Self) -> Self {
        let [ii, ij, ik, il, ji, jj, jk, jl, ki, kj, kk, kl, li, lj, lk, ll] =
            self.outer(that);
        Self::new(
            li - kj + jk + il,
            lj + ki + jl - ik,
            lk + kl - ji + ij,
            ll - kk - jj - ii,
        )
    }

    /// The 3×3 rotation matrix equivalent to conjugation by `self`, as nine
    /// column-major values (first three are column 0).
    ///
    /// Only meaningful for unit quaternions.
    #[must_use]
    pub fn as_rotation_matrix(self) -> [f64; 9] {
        let [ii, ij, ik, il, ji, jj, jk, jl, ki, kj, kk, kl, li, lj, lk, ll] =
            self.outer(self);
        [
            (ll + ii) - (jj + kk),
            (ij + ji) + (lk + kl),
            (ki + ik) - (lj + jl),
            (ij + ji) - (lk + kl),
            (ll + jj) - (kk + ii),
            (jk + kj) + (li + il),
            (ki + ik) + (lj + jl),
            (jk + kj) - (li + il),
            (ll + kk) - (ii + jj),
        ]
    }

    /// Rotate a vector by this (unit) quaternion.
    #[must_use]
    pub fn rotate_vector(self, v: [f64; 3]) -> [f64; 3] {
        let m = self.as_rotation_matrix();
        let mut out = [0.0; 3];
        for (row, value) in out.iter_mut().enumerate() {
            *value = m[row] * v[0] + m[3 + row] * v[1] + m[6 + row] * v[2];
        }
        out
    }

    /// Angle in radians of the rotation taking `self` to `that`, in
    /// `[0, π]`. `q` and `-q` are the same rotation.
    #[must_use]
    pub fn angle_to(self, that: Self) -> f64 {
        let rel = self.conjugate().compose(that);
        2.0 * rel.vector_norm_squared().sqrt().atan2(rel.l.abs())
    }

    /// Component-wise comparison within `eps`.
    #[must_use]
    pub fn approx_eq(self, that: Self, eps: f64) -> bool {
        self.to_array()
            .iter()
            .zip(that.to_array())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(rhs)
    }
}

impl From<DQuat> for Quaternion {
    fn from(q: DQuat) -> Self {
        Self::from_array(q.to_array())
    }
}

impl From<Quaternion> for DQuat {
    fn from(q: Quaternion) -> Self {
        Self::from_xyzw(q.i, q.j, q.k, q.l)
    }
}

#[cfg(test)]
mod tests {
    use glam::DMat3;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    const EPS: f64 = 1e-12;

    fn random_quat(rng: &mut StdRng) -> Quaternion {
        Quaternion::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        )
    }

    fn random_unit(rng: &mut StdRng) -> Quaternion {
        loop {
            let q = random_quat(rng);
            if q.norm() > 0.1 {
                return q.normalized();
            }
        }
    }

    #[test]
    fn identity_is_neutral_on_both_sides() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let q = random_quat(&mut rng);
            assert!(q.compose(Quaternion::IDENTITY).approx_eq(q, EPS));
            assert!(Quaternion::IDENTITY.compose(q).approx_eq(q, EPS));
        }
    }

    #[test]
    fn compose_matches_hamilton_product() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let a = random_quat(&mut rng);
            let b = random_quat(&mut rng);
            let expected = Quaternion::from(DQuat::from(a) * DQuat::from(b));
            assert!((a * b).approx_eq(expected, EPS));
        }
    }

    #[test]
    fn basis_units_multiply_like_hamilton() {
        let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(j * i, Quaternion::new(0.0, 0.0, -1.0, 0.0));
        assert_eq!(i * i, Quaternion::new(0.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn outer_is_row_major_by_left_operand() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(10.0, 20.0, 30.0, 40.0);
        let o = a.outer(b);
        assert_eq!(o[0], 10.0);
        assert_eq!(o[1], 20.0);
        assert_eq!(o[4], 20.0);
        assert_eq!(o[7], 80.0);
        assert_eq!(o[12], 40.0);
        assert_eq!(o[15], 160.0);
    }

    #[test]
    fn rotation_matrix_matches_glam() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let q = random_unit(&mut rng);
            let expected = DMat3::from_quat(DQuat::from(q)).to_cols_array();
            for (a, b) in q.as_rotation_matrix().iter().zip(expected) {
                assert!((a - b).abs() < 1e-12, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn rotation_matrix_is_orthonormal() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..200 {
            let m = random_unit(&mut rng).as_rotation_matrix();
            let col = |c: usize| [m[c * 3], m[c * 3 + 1], m[c * 3 + 2]];
            let dot = |a: [f64; 3], b: [f64; 3]| {
                a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
            };
            for a in 0..3 {
                assert!((dot(col(a), col(a)) - 1.0).abs() < 1e-12);
                for b in (a + 1)..3 {
                    assert!(dot(col(a), col(b)).abs() < 1e-12);
                }
            }
            let det = DMat3::from_cols_array(&m).determinant();
            assert!((det - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn axis_angle_rotates_x_onto_y() {
        let q = Quaternion::from_axis_angle(
            [0.0, 0.0, 2.0],
            std::f64::consts::FRAC_PI_2,
        );
        let v = q.rotate_vector([1.0, 0.0, 0.0]);
        assert!(v[0].abs() < EPS);
        assert!((v[1] - 1.0).abs() < EPS);
        assert!(v[2].abs() < EPS);
        assert_eq!(
            Quaternion::from_axis_angle([0.0; 3], 1.0),
            Quaternion::IDENTITY
        );
    }

    #[test]
    fn exp_of_log_round_trips_unit_quaternions() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let q = random_unit(&mut rng);
            if q.vector_norm_squared() < 1e-6 {
                continue;
            }
            let back = q.log().exp();
            assert!(back.approx_eq(q, 1e-10), "{q:?} -> {back:?}");
        }
    }

    #[test]
    fn log_keeps_the_sign_of_the_scalar_part() {
        let q = Quaternion::new(0.6, 0.0, 0.0, -0.8);
        let log = q.log();
        let angle = std::f64::consts::PI - 0.75_f64.atan();
        assert!((log.i - angle).abs() < 1e-12, "{log:?}");
        assert!((0.6_f64.atan2(0.8) - log.i).abs() > 1.0);
        assert_eq!((log.j, log.k), (0.0, 0.0));
        assert!(log.l.abs() < 1e-15);
        assert!(log.exp().approx_eq(q, 1e-12));

        let flipped = Quaternion::new(0.6, 0.0, 0.0, 0.8).log();
        assert!((flipped.i - 0.75_f64.atan()).abs() < 1e-12);
    }

    #[test]
    fn log_of_exp_round_trips_below_pi() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..200 {
            let dir = random_unit(&mut rng);
            let len = dir.vector_norm_squared().sqrt();
            if len < 1e-3 {
                continue;
            }
            let r = rng.random_range(0.01..3.0) / len;
            let q = Quaternion::new(
                dir.i * r,
                dir.j * r,
                dir.k * r,
                rng.random_range(-2.0..2.0),
            );
            let back = q.exp().log();
            assert!(back.approx_eq(q, 1e-9), "{q:?} -> {back:?}");
        }
    }

    #[test]
    fn exp_and_log_are_finite_at_zero_vector_part() {
        let e = Quaternion::new(0.0, 0.0, 0.0, 0.5).exp();
        assert_eq!(e, Quaternion::new(0.0, 0.0, 0.0, 0.5_f64.exp()));

        let l = Quaternion::new(0.0, 0.0, 0.0, 2.0).log();
        assert!(l.approx_eq(Quaternion::new(0.0, 0.0, 0.0, 2.0_f64.ln()), EPS));

        assert_eq!(
            Quaternion::IDENTITY.log(),
            Quaternion::new(0.0, 0.0, 0.0, 0.0)
        );
        assert_eq!(Quaternion::new(0.0, 0.0, 0.0, 0.0).exp(), Quaternion::IDENTITY);

        let flipped = Quaternion::new(0.0, 0.0, 0.0, -1.0).log();
        assert!(flipped.to_array().iter().all(|c| c.is_finite()));
    }

    #[test]
    fn normalized_zero_is_identity() {
        assert_eq!(
            Quaternion::new(0.0, 0.0, 0.0, 0.0).normalized(),
            Quaternion::IDENTITY
        );
        let q = Quaternion::new(0.0, 3.0, 0.0, 4.0).normalized();
        assert!(q.approx_eq(Quaternion::new(0.0, 0.6, 0.0, 0.8), EPS));
    }

    #[test]
    fn angle_to_ignores_sign() {
        let q = Quaternion::from_axis_angle([1.0, 1.0, 0.0], 0.7);
        let neg = Quaternion::new(-q.i, -q.j, -q.k, -q.l);
        assert!(q.angle_to(neg) < 1e-7);
        let r = q * Quaternion::from_axis_angle([0.0, 0.0, 1.0], 0.25);
        assert!((q.angle_to(r) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn renormalized_small_steps_track_net_rotation() {
        let mut rng = StdRng::seed_from_u64(7);
        let axis = [0.3, -0.8, 0.5];
        let mut acc = Quaternion::IDENTITY;
        let mut total = 0.0;
        for _ in 0..10_000 {
            let step = rng.random_range(-0.01..0.01);
            total += step;
            acc = acc
                .compose(Quaternion::from_axis_angle(axis, step))
                .normalized();
        }
        let direct = Quaternion::from_axis_angle(axis, total);
        assert!(acc.angle_to(direct) < 1e-9);
        assert!((acc.norm() - 1.0).abs() < 1e-14);
    }
}
