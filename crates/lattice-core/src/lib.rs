//! # Lattice Core
//!
//! Enumeration of integer points inside axis-aligned boxes of any dimension.
//!
//! ## Components
//!
//! - `domain::point` - `Point<D>`, a tuple of `D` signed coordinates
//! - `domain::hyper_rect` - `HyperRectDomain<D>`, the closed box `[lower, upper]`
//! - `domain::cursor` - `DomainCursor<D>`, the odometer that walks a box
//! - `domain::points` - `Points<D>`, std `Iterator` over a box
//! - `errors` - `DomainError`
//!
//! ## Traversal order
//!
//! Axis 0 varies fastest. Consumers lay out rows of samples in this order,
//! so it must not change:
//!
//! ```
//! use lattice_core::{Domain2, Point2};
//!
//! let domain = Domain2::new(Point2::new([0, 0]), Point2::new([1, 1])).unwrap();
//! let order: Vec<_> = domain.iter().map(|p| p.into_inner()).collect();
//! assert_eq!(order, vec![[0, 0], [1, 0], [0, 1], [1, 1]]);
//! ```
//!
//! ## Cursor idiom
//!
//! ```
//! use lattice_core::{Domain3, Point3};
//!
//! let domain = Domain3::new(Point3::new([0, 0, 0]), Point3::new([2, 2, 2])).unwrap();
//! let mut it = domain.begin();
//! let end = domain.end();
//! let mut visited = 0;
//! while it != end {
//!     assert!(domain.contains(it.current()));
//!     visited += 1;
//!     it.advance();
//! }
//! assert_eq!(visited, domain.size().unwrap());
//! ```
//!
//! ## Invariants
//!
//! - **Count**: a full traversal yields exactly `size()` distinct points
//! - **Containment**: every yielded point satisfies `contains()`
//! - **Sentinels**: `end()` never equals the cursor on the last point

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod errors;

pub use domain::{Coordinate, CursorState, DomainCursor, HyperRectDomain, Point, Points};
pub use errors::DomainError;

/// Point of `Z^2`.
pub type Point2 = Point<2>;
/// Point of `Z^3`.
pub type Point3 = Point<3>;
/// Box of `Z^2`.
pub type Domain2 = HyperRectDomain<2>;
/// Box of `Z^3`.
pub type Domain3 = HyperRectDomain<3>;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
