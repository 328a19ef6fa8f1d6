//! Core types for Go.
//!
//! This crate provides the fundamental types used across the Go engine:
//! - [`Color`] for the two players
//! - [`Point`] for board intersections, with vertex notation ("D4")
//! - [`Board`] for immutable 19x19 board snapshots and text diagrams

mod board;
mod color;
mod point;

pub use board::{Board, DiagramError};
pub use color::Color;
pub use point::{Point, BOARD_SIZE, NUM_POINTS};
