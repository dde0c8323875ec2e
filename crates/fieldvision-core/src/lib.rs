//! Core types and utilities for single-camera field perception.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete image type or vision library; contours arrive as
//! plain point lists and colors as plain channel triples.

mod angle;
mod color;
mod contour;
mod frame;
mod logger;
mod pose;

pub use angle::{angle_diff, wrap_angle};
pub use color::{rgb_to_hsv, ColorRange, Hsv};
pub use contour::{largest_contour, BoundingRect, Contour};
pub use frame::{FrameError, FrameSize, Scale};
pub use pose::Pose2d;

pub use logger::init_with_level;
