//! Render output: page frames for the host to draw

mod frames;

pub use frames::{build_frames, visible_frames, PageFrame};
