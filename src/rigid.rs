//! src/rigid.rs
//!
//! The operations a rigid-motion backend has to provide.
//!
//! [`KinematicChain`](crate::chain::KinematicChain) evaluates poses through
//! this trait only, so another representation (an isometry, a conformal
//! rotor, ...) can stand in for [`Motor3`] without touching chain code.

use crate::motor::Motor3;
use crate::vector::Vec3;

pub trait RigidMotion: Copy {
    fn identity() -> Self;
    fn from_axis_angle(axis: Vec3, theta: f64) -> Self;
    fn translator(t: Vec3) -> Self;
    /// Rotation by `theta` about the line through `point` along `axis`,
    /// plus `pitch * theta` of travel along the axis.
    fn screw(point: Vec3, axis: Vec3, theta: f64, pitch: f64) -> Self;
    /// `self` then `other`, in chain order.
    fn compose(&self, other: &Self) -> Self;
    fn inverse(&self) -> Self;
    fn act_point(&self, p: Vec3) -> Vec3;
    fn act_dir(&self, v: Vec3) -> Vec3;
}

impl RigidMotion for Motor3 {
    fn identity() -> Self { Motor3::identity() }

    fn from_axis_angle(axis: Vec3, theta: f64) -> Self { Motor3::from_axis_angle(axis, theta) }

    fn translator(t: Vec3) -> Self { Motor3::translator(t) }

    fn screw(point: Vec3, axis: Vec3, theta: f64, pitch: f64) -> Self {
        Motor3::screw(point, axis, theta, pitch)
    }

    fn compose(&self, other: &Self) -> Self { self.mul(*other) }

    fn inverse(&self) -> Self { Motor3::inverse(self) }

    fn act_point(&self, p: Vec3) -> Vec3 { Motor3::act_point(self, p) }

    fn act_dir(&self, v: Vec3) -> Vec3 { Motor3::act_dir(self, v) }
}
