//! Point cloud message (`sensor_msgs/PointCloud2`)
//!
//! Carried inside [`Feature`](crate::Feature) as the cluster of points
//! belonging to a detection. The payload is kept as raw bytes.

use crate::log_summary::LogSummary;
use crate::types::header::Header;
use serde::{Deserialize, Serialize};

/// Point field descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointField {
    /// Field name ("x", "y", "z", "intensity", etc.)
    pub name: String,
    /// Byte offset in point data structure
    pub offset: u32,
    /// Data type of this field (see associated constants)
    pub datatype: u8,
    /// Number of elements (1 for scalar, >1 for vector/array)
    pub count: u32,
}

impl PointField {
    pub const INT8: u8 = 1;
    pub const UINT8: u8 = 2;
    pub const INT16: u8 = 3;
    pub const UINT16: u8 = 4;
    pub const INT32: u8 = 5;
    pub const UINT32: u8 = 6;
    pub const FLOAT32: u8 = 7;
    pub const FLOAT64: u8 = 8;

    /// Create a new point field
    pub fn new(name: &str, offset: u32, datatype: u8, count: u32) -> Self {
        Self {
            name: name.to_string(),
            offset,
            datatype,
            count,
        }
    }

    /// Size in bytes of this field, 0 for unknown datatypes
    pub fn field_size(&self) -> u32 {
        let element = match self.datatype {
            Self::INT8 | Self::UINT8 => 1,
            Self::INT16 | Self::UINT16 => 2,
            Self::INT32 | Self::UINT32 | Self::FLOAT32 => 4,
            Self::FLOAT64 => 8,
            _ => 0,
        };
        element * self.count
    }
}

/// Unordered or organized point cloud
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointCloud2 {
    pub header: Header,
    pub height: u32,
    pub width: u32,
    pub fields: Vec<PointField>,
    pub is_bigendian: bool,
    /// Bytes per point
    pub point_step: u32,
    /// Bytes per row
    pub row_step: u32,
    pub data: Vec<u8>,
    pub is_dense: bool,
}

impl PointCloud2 {
    /// Number of points (`width * height`)
    pub fn point_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&PointField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether the cloud holds no points
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}

impl LogSummary for PointCloud2 {
    fn log_summary(&self) -> String {
        format!(
            "PointCloud2({} points, {} fields, {} bytes)",
            self.point_count(),
            self.fields.len(),
            self.data.len()
        )
    }
}
