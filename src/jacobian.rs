//! src/jacobian.rs
//!
//! Linear-velocity Jacobian columns for single joints.
//!
//! Both helpers are evaluated at one configuration: the caller passes the
//! joint's *current* world anchor and axis together with the end-effector
//! point, and recomputes them whenever the joint values change.

use crate::vector::Vec3;

/// Velocity of `toe` per unit angular rate about the line through
/// `axis_point` with direction `axis_dir`: `û × (toe − c)`.
///
/// A zero `axis_dir` gives a zero column.
pub fn revolute_column(axis_point: Vec3, axis_dir: Vec3, toe: Vec3) -> Vec3 {
    let u = axis_dir.normalized();
    u.cross(&(toe - axis_point))
}

/// Velocity per unit sliding rate of a prismatic joint: the unit axis.
pub fn prismatic_column(axis_dir: Vec3) -> Vec3 {
    axis_dir.normalized()
}
