//! Use-Cases der Application-Layer-Orchestrierung.

pub mod location;
pub mod markers;
pub mod notice;
pub mod routing;
