#![forbid(unsafe_code)]

//! Core primitives for cellgrid.
//!
//! Geometry is expressed in host points (`f32`), origin at top-left.

pub mod geometry;

pub use geometry::{Rect, Size};
