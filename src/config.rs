//! Leg descriptions loaded from JSON.
//!
//! ```json
//! {
//!   "joints": [
//!     { "name": "hip_yaw", "kind": "revolute",
//!       "anchor": { "x": 0.0, "y": 0.0, "z": 0.0 },
//!       "axis":   { "x": 0.0, "y": 0.0, "z": 1.0 } }
//!   ],
//!   "toe_offset": { "x": 0.2, "y": 0.0, "z": 0.0 },
//!   "angles_deg": [20.0]
//! }
//! ```
//!
//! `angles_deg` holds one value per joint: degrees for revolute joints,
//! plain length units for prismatic ones. It may be omitted, meaning the
//! home configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chain::{Joint, JointKind, KinematicChain};
use crate::error::ChainError;
use crate::vector::Vec3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointConfig {
    pub name: String,
    pub kind: JointKind,
    pub anchor: Vec3,
    pub axis: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegConfig {
    pub joints: Vec<JointConfig>,
    #[serde(default)]
    pub toe_offset: Vec3,
    #[serde(default)]
    pub angles_deg: Vec<f64>,
}

impl LegConfig {
    /// Three-joint hexapod leg: hip yaw about +Z at the origin, thigh and
    /// knee pitch about +Y at 0.05 m and 0.25 m, toe 0.20 m past the chain,
    /// posed at 20°, −10°, 30°.
    pub fn hexapod_example() -> Self {
        let l1 = 0.05;
        let l2 = 0.20;
        let l3 = 0.20;
        let hip = Vec3::zero();
        let thigh = hip + Vec3::new(l1, 0.0, 0.0);
        let knee = thigh + Vec3::new(l2, 0.0, 0.0);

        let revolute = |name: &str, anchor: Vec3, axis: Vec3| JointConfig {
            name: name.to_string(),
            kind: JointKind::Revolute,
            anchor,
            axis,
        };

        Self {
            joints: vec![
                revolute("hip_yaw", hip, Vec3::Z),
                revolute("thigh_pitch", thigh, Vec3::Y),
                revolute("knee_pitch", knee, Vec3::Y),
            ],
            toe_offset: Vec3::new(l3, 0.0, 0.0),
            angles_deg: vec![20.0, -10.0, 30.0],
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ChainError> {
        let config: LegConfig = serde_json::from_str(json)?;
        debug!(joints = config.joints.len(), "parsed leg config");
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChainError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ChainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading leg config");
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, ChainError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn chain(&self) -> Result<KinematicChain, ChainError> {
        let joints = self
            .joints
            .iter()
            .map(|j| Joint {
                name: j.name.clone(),
                kind: j.kind,
                anchor: j.anchor,
                axis: j.axis,
            })
            .collect();
        KinematicChain::new(joints, self.toe_offset)
    }

    /// Joint values in chain units: radians for revolute joints, unchanged
    /// for prismatic ones. An empty `angles_deg` means all zeros.
    pub fn joint_values(&self) -> Result<Vec<f64>, ChainError> {
        if self.angles_deg.is_empty() {
            return Ok(vec![0.0; self.joints.len()]);
        }
        if self.angles_deg.len() != self.joints.len() {
            return Err(ChainError::JointCountMismatch {
                expected: self.joints.len(),
                got: self.angles_deg.len(),
            });
        }
        Ok(self
            .joints
            .iter()
            .zip(&self.angles_deg)
            .map(|(joint, &value)| match joint.kind {
                JointKind::Revolute => value.to_radians(),
                JointKind::Prismatic => value,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    const SLIDER_LEG: &str = r#"
        {
            "joints": [
                { "name": "lift", "kind": "prismatic",
                  "anchor": { "x": 0.0, "y": 0.0, "z": 0.0 },
                  "axis": { "x": 0.0, "y": 0.0, "z": 1.0 } },
                { "name": "yaw", "kind": "revolute",
                  "anchor": { "x": 0.0, "y": 0.0, "z": 0.0 },
                  "axis": { "x": 0.0, "y": 0.0, "z": 1.0 } }
            ],
            "toe_offset": { "x": 0.1, "y": 0.0, "z": 0.0 },
            "angles_deg": [0.25, 90.0]
        }
    "#;

    #[test]
    fn parses_mixed_joint_kinds() {
        let config = LegConfig::from_json_str(SLIDER_LEG).unwrap();
        assert_eq!(config.joints.len(), 2);
        assert_eq!(config.joints[0].kind, JointKind::Prismatic);
        assert_eq!(config.joints[1].kind, JointKind::Revolute);

        let q = config.joint_values().unwrap();
        assert!((q[0] - 0.25).abs() < EPS);
        assert!((q[1] - std::f64::consts::FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn missing_angles_mean_home() {
        let json = r#"{ "joints": [ { "name": "j", "kind": "revolute",
            "anchor": { "x": 0.0, "y": 0.0, "z": 0.0 },
            "axis": { "x": 1.0, "y": 0.0, "z": 0.0 } } ] }"#;
        let config = LegConfig::from_json_str(json).unwrap();
        assert_eq!(config.toe_offset, Vec3::zero());
        assert_eq!(config.joint_values().unwrap(), vec![0.0]);
    }

    #[test]
    fn angle_count_must_match() {
        let mut config = LegConfig::hexapod_example();
        config.angles_deg.pop();
        assert!(matches!(
            config.joint_values(),
            Err(ChainError::JointCountMismatch { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn unknown_joint_kind_is_a_parse_error() {
        let json = SLIDER_LEG.replace("prismatic", "ball");
        assert!(matches!(LegConfig::from_json_str(&json), Err(ChainError::Parse(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = LegConfig::from_path("/nonexistent/leg.json").unwrap_err();
        assert!(matches!(err, ChainError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/leg.json"));
    }

    #[test]
    fn json_roundtrip_keeps_example() {
        let config = LegConfig::hexapod_example();
        let json = config.to_json_pretty().unwrap();
        assert!(json.contains("\"revolute\""));
        assert_eq!(LegConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn example_chain_builds() {
        let chain = LegConfig::hexapod_example().chain().unwrap();
        assert_eq!(chain.dof(), 3);
        assert_eq!(chain.ee_offset(), Vec3::new(0.20, 0.0, 0.0));
    }

    #[test]
    fn empty_joint_list_is_rejected() {
        let config = LegConfig { joints: Vec::new(), toe_offset: Vec3::zero(), angles_deg: Vec::new() };
        assert!(matches!(config.chain(), Err(ChainError::EmptyChain)));
    }
}
