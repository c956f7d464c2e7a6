//! # Domain Models
//!
//! Pure data shared by every crate: domain descriptors, the merged manifest, and
//! configuration structs. No I/O, networking, or heavy logic lives here.

pub mod config;
pub mod descriptor;
pub mod manifest;
