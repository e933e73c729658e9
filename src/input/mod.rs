//! Input processing module
//! Handles file detection and loading job lists

pub mod file_detector;
pub mod manager;

pub use manager::JobLoader;
