#![doc = include_str!("../README.md")]

pub mod vector;
mod quaternion;
pub mod motor;
pub mod rigid;
pub mod jacobian;
pub mod chain;
pub mod config;
pub mod error;
pub mod prelude;

pub use vector::{Vec3, Rounded};
pub use motor::Motor3;
pub use rigid::RigidMotion;
pub use jacobian::{prismatic_column, revolute_column};
pub use chain::{Joint, JointFrame, JointKind, KinematicChain};
pub use config::{JointConfig, LegConfig};
pub use error::ChainError;
