//! Text formatting shared by the report renderers

pub mod report;
