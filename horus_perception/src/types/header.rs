//! Message header, timestamp and duration types
//!
//! `Time` and `Duration` accept both the ROS 2 (`nanosec`) and Foxglove
//! (`nsec`) spelling of the nanoseconds field when decoding, and write the
//! ROS 2 spelling. Foxglove output shapes opt into `{sec, nsec}` with
//! `#[serde(with = "foxglove_time")]`.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Point in time (seconds + nanoseconds since epoch)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Time {
    pub sec: i32,
    #[serde(alias = "nsec")]
    pub nanosec: u32,
}

impl Time {
    /// Create a new timestamp
    pub fn new(sec: i32, nanosec: u32) -> Self {
        Self { sec, nanosec }
    }

    /// Total nanoseconds
    pub fn as_nanos(&self) -> i64 {
        self.sec as i64 * 1_000_000_000 + self.nanosec as i64
    }
}

/// Time span (seconds + nanoseconds)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Duration {
    pub sec: i32,
    #[serde(alias = "nsec")]
    pub nanosec: u32,
}

impl Duration {
    /// Create a new duration
    pub fn new(sec: i32, nanosec: u32) -> Self {
        Self { sec, nanosec }
    }

    /// Whole-second duration
    pub fn from_secs(sec: i32) -> Self {
        Self { sec, nanosec: 0 }
    }

    /// Duration as fractional seconds
    pub fn as_secs_f64(&self) -> f64 {
        self.sec as f64 + self.nanosec as f64 * 1e-9
    }
}

/// Seconds + nanoseconds pair shared by [`Time`] and [`Duration`]
pub trait SecNsec: Copy {
    fn to_parts(self) -> (i32, u32);
    fn from_parts(sec: i32, nsec: u32) -> Self;
}

impl SecNsec for Time {
    fn to_parts(self) -> (i32, u32) {
        (self.sec, self.nanosec)
    }

    fn from_parts(sec: i32, nsec: u32) -> Self {
        Self::new(sec, nsec)
    }
}

impl SecNsec for Duration {
    fn to_parts(self) -> (i32, u32) {
        (self.sec, self.nanosec)
    }

    fn from_parts(sec: i32, nsec: u32) -> Self {
        Self::new(sec, nsec)
    }
}

/// Foxglove `{sec, nsec}` encoding for output schemas
pub mod foxglove_time {
    use super::SecNsec;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Stamp {
        sec: i32,
        #[serde(alias = "nanosec")]
        nsec: u32,
    }

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: SecNsec,
        S: Serializer,
    {
        let (sec, nsec) = value.to_parts();
        Stamp { sec, nsec }.serialize(serializer)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: SecNsec,
        D: Deserializer<'de>,
    {
        let stamp = Stamp::deserialize(deserializer)?;
        Ok(T::from_parts(stamp.sec, stamp.nsec))
    }
}

/// Standard message header (`std_msgs/Header`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Acquisition time of the source data
    pub stamp: Time,
    /// Coordinate frame the data is expressed in
    #[serde(default)]
    pub frame_id: String,
}

impl Header {
    /// Create a header
    pub fn new(stamp: Time, frame_id: impl Into<String>) -> Self {
        Self {
            stamp,
            frame_id: frame_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_accepts_both_spellings() {
        let ros: Time = serde_json::from_str(r#"{"sec":3,"nanosec":5}"#).unwrap();
        let fox: Time = serde_json::from_str(r#"{"sec":3,"nsec":5}"#).unwrap();
        assert_eq!(ros, fox);
        assert_eq!(ros.as_nanos(), 3_000_000_005);
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "foxglove_time")]
        timestamp: Time,
        #[serde(with = "foxglove_time")]
        lifetime: Duration,
    }

    #[test]
    fn test_foxglove_time_writes_nsec() {
        let stamped = Stamped {
            timestamp: Time::new(3, 7),
            lifetime: Duration::from_secs(1),
        };
        let value = serde_json::to_value(&stamped).unwrap();
        assert_eq!(value["timestamp"], serde_json::json!({ "sec": 3, "nsec": 7 }));
        assert_eq!(value["lifetime"], serde_json::json!({ "sec": 1, "nsec": 0 }));

        let back: Stamped = serde_json::from_value(value).unwrap();
        assert_eq!(back, stamped);
    }

    #[test]
    fn test_ros_time_writes_nanosec() {
        let value = serde_json::to_value(Time::new(3, 7)).unwrap();
        assert_eq!(value, serde_json::json!({ "sec": 3, "nanosec": 7 }));
    }

    #[test]
    fn test_duration_seconds() {
        assert_eq!(Duration::from_secs(1).as_secs_f64(), 1.0);
        assert!((Duration::new(0, 500_000_000).as_secs_f64() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_header_missing_frame_id() {
        let h: Header = serde_json::from_str(r#"{"stamp":{"sec":1,"nanosec":0}}"#).unwrap();
        assert!(h.frame_id.is_empty());
    }
}
