//! View components and the diagram rendering pipeline.

pub mod detail;
pub mod diagram;
pub mod legend;
