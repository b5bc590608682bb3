//! Tests for the metrics model
//!
//! Tests are organized by topic:
//! - `fixture` - The built-in records
//! - `scale` - Axis domains and bar heights
//! - `chart` - Chart categories and tooltips
//! - `cards` - Card rows and grid layout
//! - `validation` - Rejection of malformed injected records

mod fixture;
mod scale;
