use serde::{Deserialize, Serialize};
use std::fmt;

/// Width/height of a box to place (pixels). Dimensions are non-negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
    /// Returns true if a box of size `other` fits inside `self` on both axes.
    pub fn can_contain(&self, other: &Size) -> bool {
        self.width >= other.width && self.height >= other.height
    }
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis-aligned rectangle: a [`Size`] at a signed origin.
///
/// Ordering is over (size, x, y) so geometries can live in an ordered set;
/// two geometries are equal only if size and position both match, and the
/// ordering implies nothing about spatial containment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Geometry {
    pub size: Size,
    pub x: i32,
    pub y: i32,
}

impl Geometry {
    pub fn new(size: Size, x: i32, y: i32) -> Self {
        Self { size, x, y }
    }
    /// Exclusive right edge coordinate (`x + width`).
    pub fn endx(&self) -> i32 {
        self.x + self.size.width as i32
    }
    /// Exclusive bottom edge coordinate (`y + height`).
    pub fn endy(&self) -> i32 {
        self.y + self.size.height as i32
    }
}

impl fmt::Display for Geometry {
    /// X geometry string, e.g. `1280x1024+0+0` or `800x600-10+20`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:+}{:+}", self.size, self.x, self.y)
    }
}

/// Snapshot of allocator occupancy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpaceStats {
    /// Number of rectangles currently in the free set.
    pub free_rects: usize,
    /// Summed area of the free set. Occlusion remainders may overlap, so
    /// this can exceed the unoccupied area of the region.
    pub free_area: u64,
    /// Number of placements issued so far.
    pub placements: usize,
    /// Area of the bounding region.
    pub region_area: u64,
}

impl SpaceStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Free rects: {}, Free area: {} px², Placements: {}, Region: {} px²",
            self.free_rects, self.free_area, self.placements, self.region_area,
        )
    }
}
