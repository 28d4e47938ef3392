// src/vector.rs

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

/// A 3-D Euclidean vector.
///
/// Used for points, free directions and joint axes alike; the type does not
/// tell them apart, so callers pick [`Motor3::act_point`] or
/// [`Motor3::act_dir`] according to what the value means.
///
/// [`Motor3::act_point`]: crate::motor::Motor3::act_point
/// [`Motor3::act_dir`]: crate::motor::Motor3::act_dir
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const X: Vec3 = Vec3 { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 1.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z } }
    pub const fn zero() -> Self { Self::new(0.0, 0.0, 0.0) }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`.
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn norm(&self) -> f64 { self.dot(self).sqrt() }
    pub fn scale(&self, s: f64) -> Self { Self::new(self.x * s, self.y * s, self.z * s) }

    /// Unit vector in the same direction.
    ///
    /// A zero-length vector comes back unchanged (still zero) instead of
    /// turning into NaNs, so a degenerate axis yields zero-magnitude results
    /// downstream.
    pub fn normalized(&self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            return *self;
        }
        self.scale(1.0 / n)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 { Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z) }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 { Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z) }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f64) -> Vec3 { self.scale(rhs) }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 { Vec3::new(-self.x, -self.y, -self.z) }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 { f64::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

/// A tiny wrapper for printing a Vec3 rounded to `decimals` places.
pub struct Rounded<'a>(pub &'a Vec3, pub usize);

impl<'a> fmt::Display for Rounded<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Rounded(v, dec) = *self;
        write!(
            f,
            "({x:+.dec$}, {y:+.dec$}, {z:+.dec$})",
            x = v.x,
            y = v.y,
            z = v.z,
            dec = dec
        )
    }
}

impl<'a> Rounded<'a> {
    /// Wrap a `&Vec3` for pretty-printing with `decimals` digits.
    pub fn new(v: &'a Vec3, decimals: usize) -> Self {
        Rounded(v, decimals)
    }
}
