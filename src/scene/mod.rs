//! Scene-side object data management

pub mod registry;

pub use registry::{NodeId, ObjectData, ObjectRegistry};
