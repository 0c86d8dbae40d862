//! Free-space allocator for tiling window placement.
//!
//! A tiling pass walks the windows on a monitor and asks, once per window,
//! where to put it. [`Spaces`] answers: it tracks the unoccupied rectangles
//! of a bounding region, picks the leftmost free rectangle that can hold the
//! request (lowest-of-the-leftmost on ties), and carves the placed footprint
//! out of the free set so later placements never overlap earlier ones.
//!
//! The allocator is deliberately windowing-system agnostic: the caller reads
//! the work area and window sizes from its display server and applies the
//! returned geometries back through it.
//!
//! Quick example:
//! ```
//! use tile_space::{Geometry, Size, Spaces};
//!
//! # fn main() -> tile_space::Result<()> {
//! // One monitor's work area.
//! let monitor = Geometry::new(Size::new(1920, 1080), 0, 0);
//! let mut spaces = Spaces::new(monitor)?;
//! let a = spaces.fit(Size::new(800, 600))?;
//! let b = spaces.fit(Size::new(800, 600))?;
//! assert_ne!((a.x, a.y), (b.x, b.y));
//! # Ok(()) }
//! ```

pub mod allocator;
pub mod error;
pub mod model;

pub use allocator::*;
pub use error::*;
pub use model::*;

/// Convenience prelude for common types.
pub mod prelude {
    pub use crate::allocator::Spaces;
    pub use crate::error::{Result, SpaceError};
    pub use crate::model::{Geometry, Size, SpaceStats};
}
