//! src/chain.rs
//!
//! Serial kinematic chains evaluated with rigid-motion backends.
//!
//! Every joint is described in the *home* configuration (all joint values
//! zero) by an anchor point and an axis. Joint `i` contributes the motor
//! `screw(anchor, axis, q_i, 0)` (revolute) or `translator(û q_i)`
//! (prismatic), and the pose is
//!
//! ```text
//! identity · M1(q1) · M2(q2) · … · Mn(qn) · translator(ee_offset)
//! ```
//!
//! in exactly that order. The end effector is that pose applied to the
//! origin.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ChainError;
use crate::jacobian::{prismatic_column, revolute_column};
use crate::motor::Motor3;
use crate::rigid::RigidMotion;
use crate::vector::Vec3;

/// What a joint's configuration variable means.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JointKind {
    /// Rotation about the joint axis, value in radians.
    Revolute,
    /// Sliding along the joint axis, value in length units.
    Prismatic,
}

/// A single joint, given in the home configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    pub name: String,
    pub kind: JointKind,
    /// A point on the joint axis.
    pub anchor: Vec3,
    /// Joint axis direction; need not be unit length.
    pub axis: Vec3,
}

impl Joint {
    pub fn revolute(name: impl Into<String>, anchor: Vec3, axis: Vec3) -> Self {
        Self { name: name.into(), kind: JointKind::Revolute, anchor, axis }
    }

    pub fn prismatic(name: impl Into<String>, anchor: Vec3, axis: Vec3) -> Self {
        Self { name: name.into(), kind: JointKind::Prismatic, anchor, axis }
    }

    /// Motion of this joint at `value`, in home coordinates.
    pub fn motor_with<M: RigidMotion>(&self, value: f64) -> M {
        match self.kind {
            JointKind::Revolute => M::screw(self.anchor, self.axis, value, 0.0),
            JointKind::Prismatic => M::translator(self.axis.normalized().scale(value)),
        }
    }

    pub fn motor(&self, value: f64) -> Motor3 {
        self.motor_with::<Motor3>(value)
    }

    /// Jacobian column of this joint for an axis placed at `frame`.
    pub fn column(&self, frame: &JointFrame, toe: Vec3) -> Vec3 {
        match self.kind {
            JointKind::Revolute => revolute_column(frame.anchor, frame.axis, toe),
            JointKind::Prismatic => prismatic_column(frame.axis),
        }
    }
}

/// World placement of a joint axis at some configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct JointFrame {
    pub anchor: Vec3,
    pub axis: Vec3,
}

/// An ordered chain of joints from base to end effector.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicChain {
    joints: Vec<Joint>,
    /// Translation from the last joint to the end effector, applied last.
    ee_offset: Vec3,
}

impl KinematicChain {
    /// Build a chain. Zero-length axes are accepted but reported, since they
    /// silently produce degenerate motors and zero Jacobian columns.
    pub fn new(joints: Vec<Joint>, ee_offset: Vec3) -> Result<Self, ChainError> {
        if joints.is_empty() {
            return Err(ChainError::EmptyChain);
        }
        for joint in joints.iter().filter(|j| j.axis.norm() == 0.0) {
            warn!(joint = %joint.name, "zero-length joint axis");
        }
        Ok(Self { joints, ee_offset })
    }

    /// Number of joint values the chain expects.
    pub fn dof(&self) -> usize {
        self.joints.len()
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn joint_names(&self) -> Vec<&str> {
        self.joints.iter().map(|j| j.name.as_str()).collect()
    }

    pub fn ee_offset(&self) -> Vec3 {
        self.ee_offset
    }

    fn check(&self, q: &[f64]) -> Result<(), ChainError> {
        if q.len() != self.dof() {
            return Err(ChainError::JointCountMismatch { expected: self.dof(), got: q.len() });
        }
        Ok(())
    }

    /// End-effector pose for joint values `q`.
    pub fn pose_with<M: RigidMotion>(&self, q: &[f64]) -> Result<M, ChainError> {
        self.check(q)?;
        let pose = self
            .joints
            .iter()
            .zip(q)
            .fold(M::identity(), |acc, (joint, &value)| acc.compose(&joint.motor_with::<M>(value)));
        Ok(pose.compose(&M::translator(self.ee_offset)))
    }

    pub fn pose(&self, q: &[f64]) -> Result<Motor3, ChainError> {
        self.pose_with::<Motor3>(q)
    }

    pub fn end_effector_with<M: RigidMotion>(&self, q: &[f64]) -> Result<Vec3, ChainError> {
        Ok(self.pose_with::<M>(q)?.act_point(Vec3::zero()))
    }

    /// World position of the end effector for joint values `q`.
    pub fn end_effector(&self, q: &[f64]) -> Result<Vec3, ChainError> {
        self.end_effector_with::<Motor3>(q)
    }

    /// Current world frame of every joint axis, plus the end effector.
    ///
    /// Joint `i`'s home anchor and axis are moved by the motors of joints
    /// `0..i`; its own motion does not move its axis.
    pub fn joint_frames_with<M: RigidMotion>(
        &self,
        q: &[f64],
    ) -> Result<(Vec<JointFrame>, Vec3), ChainError> {
        self.check(q)?;
        let mut transform = M::identity();
        let mut frames = Vec::with_capacity(self.dof());

        for (joint, &value) in self.joints.iter().zip(q) {
            frames.push(JointFrame {
                anchor: transform.act_point(joint.anchor),
                axis: transform.act_dir(joint.axis),
            });
            transform = transform.compose(&joint.motor_with::<M>(value));
        }

        let ee = transform
            .compose(&M::translator(self.ee_offset))
            .act_point(Vec3::zero());
        Ok((frames, ee))
    }

    pub fn joint_frames(&self, q: &[f64]) -> Result<(Vec<JointFrame>, Vec3), ChainError> {
        self.joint_frames_with::<Motor3>(q)
    }

    /// Linear-velocity Jacobian at `q`, one column per joint, using the
    /// joints' current world frames.
    pub fn jacobian_with<M: RigidMotion>(&self, q: &[f64]) -> Result<Vec<Vec3>, ChainError> {
        let (frames, ee) = self.joint_frames_with::<M>(q)?;
        Ok(self
            .joints
            .iter()
            .zip(&frames)
            .map(|(joint, frame)| joint.column(frame, ee))
            .collect())
    }

    pub fn jacobian(&self, q: &[f64]) -> Result<Vec<Vec3>, ChainError> {
        self.jacobian_with::<Motor3>(q)
    }

    /// Jacobian columns taken about the home anchors and axes, with only the
    /// end effector evaluated at `q`. Matches the current-frame Jacobian
    /// when every preceding joint is at zero.
    pub fn jacobian_home_frames(&self, q: &[f64]) -> Result<Vec<Vec3>, ChainError> {
        let ee = self.end_effector(q)?;
        Ok(self
            .joints
            .iter()
            .map(|joint| {
                let home = JointFrame { anchor: joint.anchor, axis: joint.axis };
                joint.column(&home, ee)
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-12;

    fn hexapod_leg() -> KinematicChain {
        KinematicChain::new(
            vec![
                Joint::revolute("hip_yaw", Vec3::zero(), Vec3::Z),
                Joint::revolute("thigh_pitch", Vec3::new(0.05, 0.0, 0.0), Vec3::Y),
                Joint::revolute("knee_pitch", Vec3::new(0.25, 0.0, 0.0), Vec3::Y),
            ],
            Vec3::new(0.20, 0.0, 0.0),
        )
        .unwrap()
    }

    fn example_angles() -> [f64; 3] {
        [20f64.to_radians(), (-10f64).to_radians(), 30f64.to_radians()]
    }

    #[test]
    fn chain_metadata() {
        let chain = hexapod_leg();
        assert_eq!(chain.dof(), 3);
        assert_eq!(chain.joint_names(), vec!["hip_yaw", "thigh_pitch", "knee_pitch"]);
        assert_eq!(chain.ee_offset(), Vec3::new(0.20, 0.0, 0.0));
    }

    #[test]
    fn empty_chain_is_rejected() {
        let err = KinematicChain::new(Vec::new(), Vec3::zero()).unwrap_err();
        assert!(matches!(err, ChainError::EmptyChain));
    }

    #[test]
    fn wrong_joint_count_is_rejected() {
        let chain = hexapod_leg();
        let err = chain.end_effector(&[0.0, 0.0]).unwrap_err();
        assert!(matches!(err, ChainError::JointCountMismatch { expected: 3, got: 2 }));
        assert!(chain.jacobian(&[0.0; 4]).is_err());
    }

    #[test]
    fn home_pose_is_offset_only() {
        let ee = hexapod_leg().end_effector(&[0.0; 3]).unwrap();
        assert_abs_diff_eq!(ee, Vec3::new(0.20, 0.0, 0.0), epsilon = EPS);
    }

    #[test]
    fn end_effector_matches_example() {
        let ee = hexapod_leg().end_effector(&example_angles()).unwrap();
        assert_abs_diff_eq!(
            ee,
            Vec3::new(0.18791683564098569, 0.068396134690813, 0.0518306426996695),
            epsilon = 1e-12
        );
    }

    #[test]
    fn home_frame_jacobian_matches_example() {
        let cols = hexapod_leg().jacobian_home_frames(&example_angles()).unwrap();
        assert_abs_diff_eq!(cols[0], Vec3::new(-0.068396134690813, 0.18791683564098569, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(cols[1], Vec3::new(0.0518306426996695, 0.0, -0.13791683564098567), epsilon = 1e-12);
        assert_abs_diff_eq!(cols[2], Vec3::new(0.0518306426996695, 0.0, 0.062083164359014315), epsilon = 1e-12);
    }

    #[test]
    fn first_frame_is_home_frame() {
        let chain = hexapod_leg();
        let (frames, ee) = chain.joint_frames(&example_angles()).unwrap();
        assert_eq!(frames.len(), 3);
        assert_abs_diff_eq!(frames[0].anchor, Vec3::zero(), epsilon = EPS);
        assert_abs_diff_eq!(frames[0].axis, Vec3::Z, epsilon = EPS);
        assert_abs_diff_eq!(ee, chain.end_effector(&example_angles()).unwrap(), epsilon = EPS);
    }

    #[test]
    fn thigh_frame_follows_hip_yaw() {
        let yaw = 20f64.to_radians();
        let (frames, _) = hexapod_leg().joint_frames(&[yaw, 0.0, 0.0]).unwrap();
        let expected = Vec3::new(0.05 * yaw.cos(), 0.05 * yaw.sin(), 0.0);
        assert_abs_diff_eq!(frames[1].anchor, expected, epsilon = EPS);
        assert_abs_diff_eq!(frames[1].axis, Vec3::new(-yaw.sin(), yaw.cos(), 0.0), epsilon = EPS);
    }

    #[test]
    fn current_frame_jacobian_matches_finite_differences() {
        let chain = hexapod_leg();
        let q = example_angles();
        let cols = chain.jacobian(&q).unwrap();
        let h = 1e-6;
        for i in 0..3 {
            let mut plus = q;
            let mut minus = q;
            plus[i] += h;
            minus[i] -= h;
            let numeric = (chain.end_effector(&plus).unwrap() - chain.end_effector(&minus).unwrap())
                .scale(0.5 / h);
            assert_abs_diff_eq!(cols[i], numeric, epsilon = 1e-8);
        }
    }

    #[test]
    fn frames_agree_at_zero() {
        let chain = hexapod_leg();
        let current = chain.jacobian(&[0.0; 3]).unwrap();
        let home = chain.jacobian_home_frames(&[0.0; 3]).unwrap();
        for (a, b) in current.iter().zip(&home) {
            assert_abs_diff_eq!(*a, *b, epsilon = EPS);
        }
    }

    #[test]
    fn prismatic_joint_slides_along_axis() {
        let chain = KinematicChain::new(
            vec![
                Joint::prismatic("lift", Vec3::zero(), Vec3::new(0.0, 0.0, 2.0)),
                Joint::revolute("yaw", Vec3::zero(), Vec3::Z),
            ],
            Vec3::new(0.5, 0.0, 0.0),
        )
        .unwrap();
        let q = [0.3, std::f64::consts::FRAC_PI_2];
        assert_abs_diff_eq!(chain.end_effector(&q).unwrap(), Vec3::new(0.0, 0.5, 0.3), epsilon = EPS);

        let cols = chain.jacobian(&q).unwrap();
        assert_abs_diff_eq!(cols[0], Vec3::Z, epsilon = EPS);
        // yaw axis rides up with the lift but stays vertical
        assert_abs_diff_eq!(cols[1], Vec3::new(-0.5, 0.0, 0.0), epsilon = EPS);
    }

    #[test]
    fn zero_axis_joint_gives_zero_column() {
        let chain = KinematicChain::new(
            vec![Joint::revolute("broken", Vec3::zero(), Vec3::zero())],
            Vec3::X,
        )
        .unwrap();
        let cols = chain.jacobian(&[0.4]).unwrap();
        assert_eq!(cols[0], Vec3::zero());
    }
}
