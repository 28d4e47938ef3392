//! `use ga_kinematics::prelude::*;` for the common types and helpers.

pub use crate::chain::{Joint, JointKind, KinematicChain};
pub use crate::jacobian::{prismatic_column, revolute_column};
pub use crate::motor::Motor3;
pub use crate::rigid::RigidMotion;
pub use crate::vector::{Rounded, Vec3};
