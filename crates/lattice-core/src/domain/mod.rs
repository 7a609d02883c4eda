//! Domain Layer - lattice points, boxes and their traversal
//!
//! This layer contains:
//! - `Point`: fixed-dimension integer coordinates
//! - `HyperRectDomain`: validated closed box of lattice points
//! - `DomainCursor`: bidirectional odometer over a box
//! - `Points`: std iterator adaptor over a box
//!
//! RULES:
//! - No I/O operations
//! - No shared mutable state; every type here is a plain value

pub mod cursor;
pub mod hyper_rect;
pub mod point;
pub mod points;

pub use cursor::{CursorState, DomainCursor};
pub use hyper_rect::HyperRectDomain;
pub use point::{Coordinate, Point};
pub use points::Points;
