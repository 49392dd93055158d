//! Types shared between the logic thread and the render side.

pub mod snapshot;
