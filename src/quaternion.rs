//! src/quaternion.rs
//!
//! Hamilton quaternions `w + xi + yj + zk`, the building block of [`Motor3`].
//! Not exported: consumers only ever see motors and vectors.
//!
//! [`Motor3`]: crate::motor::Motor3

use std::ops::{Add, Mul, Neg, Sub};

use crate::vector::Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Quat {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quat {
    pub const IDENTITY: Quat = Quat::new(1.0, 0.0, 0.0, 0.0);
    pub const ZERO: Quat = Quat::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self { Self { w, x, y, z } }

    /// Embed a vector as a zero-scalar quaternion `(0, v)`.
    pub fn pure(v: Vec3) -> Self { Self::new(0.0, v.x, v.y, v.z) }

    /// Imaginary part as a vector.
    pub fn vector(&self) -> Vec3 { Vec3::new(self.x, self.y, self.z) }

    pub fn conj(&self) -> Self { Self::new(self.w, -self.x, -self.y, -self.z) }

    pub fn dot(&self, other: &Self) -> f64 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn norm(&self) -> f64 { self.dot(self).sqrt() }

    pub fn scale(&self, s: f64) -> Self { Self::new(self.w * s, self.x * s, self.y * s, self.z * s) }

    /// Unit quaternion in the same direction; a zero quaternion becomes the
    /// identity (unlike [`Vec3::normalized`], which keeps the zero vector).
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            return Self::IDENTITY;
        }
        self.scale(1.0 / n)
    }
}

/// Hamilton product (non-commutative).
impl Mul for Quat {
    type Output = Quat;
    fn mul(self, b: Quat) -> Quat {
        let a = self;
        Quat {
            w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            y: a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            z: a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        }
    }
}

impl Add for Quat {
    type Output = Quat;
    fn add(self, b: Quat) -> Quat { Quat::new(self.w + b.w, self.x + b.x, self.y + b.y, self.z + b.z) }
}

impl Sub for Quat {
    type Output = Quat;
    fn sub(self, b: Quat) -> Quat { Quat::new(self.w - b.w, self.x - b.x, self.y - b.y, self.z - b.z) }
}

impl Neg for Quat {
    type Output = Quat;
    fn neg(self) -> Quat { Quat::new(-self.w, -self.x, -self.y, -self.z) }
}
