//! Geometric value types shared by perception inputs and scene outputs
//!
//! Field names follow `geometry_msgs` / `foxglove` so messages decode from
//! either side without renaming. All types are fixed-size `Pod` values.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 3D point (meters)
///
/// Size: 24 bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// 2D point in image pixel space
///
/// Size: 16 bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Create a new pixel-space point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 3D vector, used for object extents and primitive sizes
///
/// Size: 24 bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Create a new vector
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Vector with the same value on every axis
    pub fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }
}

/// Rotation quaternion [x, y, z, w] (Hamilton convention)
///
/// Size: 32 bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quaternion {
    /// Create a new quaternion (not normalized)
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Identity rotation
    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }

    /// Rotation about the Z axis by `yaw` radians
    pub fn from_yaw(yaw: f64) -> Self {
        let half = yaw * 0.5;
        Self {
            x: 0.0,
            y: 0.0,
            z: half.sin(),
            w: half.cos(),
        }
    }
}

/// Position + orientation
///
/// Size: 56 bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Pose {
    pub position: Point,
    pub orientation: Quaternion,
}

impl Pose {
    /// Create a pose from a position and orientation
    pub fn new(position: Point, orientation: Quaternion) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Pose at `(x, y, z)` with identity orientation
    pub fn from_position(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Point::new(x, y, z),
            orientation: Quaternion::identity(),
        }
    }
}

/// Pose with 6x6 row-major covariance (x, y, z, roll, pitch, yaw)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseWithCovariance {
    pub pose: Pose,
    #[serde(with = "serde_arrays", default = "zero_covariance")]
    pub covariance: [f64; 36],
}

fn zero_covariance() -> [f64; 36] {
    [0.0; 36]
}

impl Default for PoseWithCovariance {
    fn default() -> Self {
        Self {
            pose: Pose::default(),
            covariance: zero_covariance(),
        }
    }
}

impl PoseWithCovariance {
    /// Wrap a pose with zero covariance
    pub fn from_pose(pose: Pose) -> Self {
        Self {
            pose,
            covariance: zero_covariance(),
        }
    }
}

/// RGBA color, each component in [0, 1]
///
/// Size: 32 bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new color
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque white
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Same color with a different alpha
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}
