//! src/motor.rs
//!
//! Rigid motions in SE(3) as dual quaternions `r + ε d`.
//!
//! `r` is the unit rotation quaternion; `d` carries the translation coupled
//! to `r` (`d = ½ t r`). Composition multiplies the pairs with the
//! dual-number rule, so a chain of joint motors collapses into one motor that
//! can be applied to points ([`Motor3::act_point`]) or free vectors
//! ([`Motor3::act_dir`]).
//!
//! Nothing here renormalises implicitly. Long products drift away from unit
//! `r`; call [`Motor3::normalized`] when that matters.

use std::ops::Mul;

use approx::AbsDiffEq;

use crate::quaternion::Quat;
use crate::vector::Vec3;

/// A 3-D rigid-body motor: rotation + translation packed as a dual quaternion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Motor3 {
    r: Quat,
    d: Quat,
}

impl Default for Motor3 {
    fn default() -> Self { Self::identity() }
}

impl Motor3 {
    /// The motion that leaves everything in place.
    pub fn identity() -> Self {
        Self { r: Quat::IDENTITY, d: Quat::ZERO }
    }

    /// Rotation by `theta` radians about the line through the origin with
    /// direction `axis`. The axis is normalised first; a zero axis produces a
    /// motor whose `r` is not unit length (see [`Vec3::normalized`]).
    pub fn from_axis_angle(axis: Vec3, theta: f64) -> Self {
        let u = axis.normalized();
        let (s, c) = (0.5 * theta).sin_cos();
        Self {
            r: Quat::new(c, u.x * s, u.y * s, u.z * s),
            d: Quat::ZERO,
        }
    }

    /// Pure translation by `t`.
    pub fn translator(t: Vec3) -> Self {
        // d = ½ t r with r = 1
        Self {
            r: Quat::IDENTITY,
            d: Quat::pure(t.scale(0.5)),
        }
    }

    /// Screw motion: rotate by `theta` about the line through `point` with
    /// direction `axis`, then slide `pitch * theta` along the axis.
    ///
    /// `pitch` is distance per radian.
    pub fn screw(point: Vec3, axis: Vec3, theta: f64, pitch: f64) -> Self {
        let u = axis.normalized();
        let rotation = Self::from_axis_angle(u, theta);
        let slide = Self::translator(u.scale(pitch * theta));

        // T(p) · R · T(-p) · T(h θ u)
        Self::translator(point)
            .mul(rotation)
            .mul(Self::translator(-point))
            .mul(slide)
    }

    /// Compose: `self`'s motion, then `other`'s, in chain order.
    ///
    /// `(r1 + ε d1)(r2 + ε d2) = r1 r2 + ε (r1 d2 + d1 r2)`
    pub fn mul(self, other: Motor3) -> Motor3 {
        Motor3 {
            r: self.r * other.r,
            d: self.r * other.d + self.d * other.r,
        }
    }

    /// Inverse motion, valid when `r` is unit length.
    pub fn inverse(&self) -> Motor3 {
        let rc = self.r.conj();
        Motor3 {
            r: rc,
            d: -(rc * self.d * rc),
        }
    }

    /// Apply the full rigid motion (rotation and translation) to a point.
    pub fn act_point(&self, p: Vec3) -> Vec3 {
        self.act_dir(p) + self.translation()
    }

    /// Apply only the rotation, for directions, axes and velocities.
    pub fn act_dir(&self, v: Vec3) -> Vec3 {
        (self.r * Quat::pure(v) * self.r.conj()).vector()
    }

    /// Translation this motor applies after rotating: `2 · vec(d r*)`.
    pub fn translation(&self) -> Vec3 {
        (self.d * self.r.conj()).vector().scale(2.0)
    }

    /// Length of the rotation quaternion; 1 for a well-formed motor.
    pub fn rotation_norm(&self) -> f64 { self.r.norm() }

    /// Rotation quaternion as `[w, x, y, z]`.
    pub fn real_part(&self) -> [f64; 4] { [self.r.w, self.r.x, self.r.y, self.r.z] }

    /// Dual quaternion part as `[w, x, y, z]`.
    pub fn dual_part(&self) -> [f64; 4] { [self.d.w, self.d.x, self.d.y, self.d.z] }

    /// Project back onto the unit dual quaternions: `r` gets unit length and
    /// `d` loses its component along `r`.
    ///
    /// Only for callers fighting drift after long products; composition
    /// never does this on its own.
    pub fn normalized(&self) -> Motor3 {
        let n = self.r.norm();
        if n == 0.0 {
            return Self::identity();
        }
        let r = self.r.normalize();
        let d = self.d.scale(1.0 / n);
        Motor3 {
            r,
            d: d - r.scale(r.dot(&d)),
        }
    }
}

impl Mul for Motor3 {
    type Output = Motor3;
    fn mul(self, rhs: Motor3) -> Motor3 { Motor3::mul(self, rhs) }
}

impl AbsDiffEq for Motor3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 { f64::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.real_part()
            .iter()
            .chain(self.dual_part().iter())
            .zip(other.real_part().iter().chain(other.dual_part().iter()))
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}
