//! Perception and visualization message modules

pub mod annotations;
pub mod geometry;
pub mod header;
pub mod objects;
pub mod pointcloud;
pub mod roi;
pub mod scene;
