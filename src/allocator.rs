use std::collections::BTreeSet;
use std::mem;

use tracing::{debug, instrument, trace};

use crate::error::{Result, SpaceError};
use crate::model::{Geometry, Size, SpaceStats};

/// Tracks unoccupied space within a bounding region and hands out
/// non-overlapping placements.
///
/// Occlusion splits free rectangles without merging the remainders, so the
/// free set may hold overlapping rectangles and no rectangle in it is
/// guaranteed to be maximal. That keeps the bookkeeping simple and is
/// sufficient for the placement contract; callers should not read the free
/// set as a partition of the unoccupied area.
#[derive(Debug)]
pub struct Spaces {
    region: Geometry,
    free: BTreeSet<Geometry>,
    placements: usize,
}

impl Spaces {
    /// Creates an allocator whose free space is exactly `region`, typically
    /// one monitor's work area.
    pub fn new(region: Geometry) -> Result<Self> {
        if region.size.area() == 0 {
            return Err(SpaceError::EmptyRegion(region));
        }
        let mut free = BTreeSet::new();
        free.insert(region);
        Ok(Self {
            region,
            free,
            placements: 0,
        })
    }

    /// Places a box of size `requested` in free space.
    ///
    /// Selects the leftmost free rectangle able to contain the request,
    /// breaking ties toward the greatest `y`, then marks the placed footprint
    /// as occupied. The returned geometry has exactly the requested size;
    /// any leftover space in the chosen rectangle stays free.
    ///
    /// Fails with [`SpaceError::OutOfSpace`] when no free rectangle can
    /// contain the request, leaving the free set untouched.
    #[instrument(skip(self), level = "debug")]
    pub fn fit(&mut self, requested: Size) -> Result<Geometry> {
        let mut best: Option<Geometry> = None;
        for candidate in &self.free {
            if !candidate.size.can_contain(&requested) {
                continue;
            }
            let better = match best {
                None => true,
                Some(b) => candidate.x < b.x || (candidate.x == b.x && candidate.y >= b.y),
            };
            if better {
                best = Some(*candidate);
            }
        }
        let chosen = best.ok_or(SpaceError::OutOfSpace(requested))?;
        let placement = Geometry::new(requested, chosen.x, chosen.y);
        self.occlude(&placement);
        self.placements += 1;
        debug!(%placement, free = self.free.len(), "placed");
        Ok(placement)
    }

    // Removing a rectangular area from a clearing leaves up to four separate
    // rectangular regions - to the left, right, top, and bottom of the taken
    // area, each spanning the clearing's full extent on the other axis.
    fn occlude(&mut self, taken: &Geometry) {
        let mut result = BTreeSet::new();
        for clearing in &self.free {
            let ix0 = taken.x.max(clearing.x);
            let iy0 = taken.y.max(clearing.y);
            let ix1 = taken.endx().min(clearing.endx());
            let iy1 = taken.endy().min(clearing.endy());

            if ix1 <= ix0 || iy1 <= iy0 {
                // no change - the taken area is disjoint from the clearing
                result.insert(*clearing);
                continue;
            }
            if ix0 > clearing.x {
                result.insert(Geometry::new(
                    Size::new((ix0 - clearing.x) as u32, clearing.size.height),
                    clearing.x,
                    clearing.y,
                ));
            }
            if ix1 < clearing.endx() {
                result.insert(Geometry::new(
                    Size::new((clearing.endx() - ix1) as u32, clearing.size.height),
                    ix1,
                    clearing.y,
                ));
            }
            if iy0 > clearing.y {
                result.insert(Geometry::new(
                    Size::new(clearing.size.width, (iy0 - clearing.y) as u32),
                    clearing.x,
                    clearing.y,
                ));
            }
            if iy1 < clearing.endy() {
                result.insert(Geometry::new(
                    Size::new(clearing.size.width, (clearing.endy() - iy1) as u32),
                    clearing.x,
                    iy1,
                ));
            }
        }
        trace!(before = self.free.len(), after = result.len(), "occluded");
        mem::swap(&mut self.free, &mut result);
    }

    /// Bounding region supplied at construction.
    pub fn region(&self) -> Geometry {
        self.region
    }

    /// Rectangles currently considered free. May overlap one another.
    pub fn free_rects(&self) -> impl Iterator<Item = &Geometry> {
        self.free.iter()
    }

    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Computes occupancy statistics for this allocator.
    pub fn stats(&self) -> SpaceStats {
        SpaceStats {
            free_rects: self.free.len(),
            free_area: self.free.iter().map(|g| g.size.area()).sum(),
            placements: self.placements,
            region_area: self.region.size.area(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom(x: i32, y: i32, w: u32, h: u32) -> Geometry {
        Geometry::new(Size::new(w, h), x, y)
    }

    #[test]
    fn disjoint_take_keeps_clearing() {
        let mut s = Spaces::new(geom(0, 0, 100, 100)).unwrap();
        s.occlude(&geom(200, 200, 10, 10));
        let free: Vec<_> = s.free.iter().copied().collect();
        assert_eq!(free, vec![geom(0, 0, 100, 100)]);
    }

    #[test]
    fn exact_take_consumes_clearing() {
        let mut s = Spaces::new(geom(0, 0, 100, 100)).unwrap();
        s.occlude(&geom(0, 0, 100, 100));
        assert!(s.free.is_empty());
    }

    #[test]
    fn centered_take_splits_four_ways() {
        let mut s = Spaces::new(geom(0, 0, 100, 100)).unwrap();
        s.occlude(&geom(25, 25, 50, 50));
        let expected: BTreeSet<Geometry> = [
            geom(0, 0, 25, 100),  // left
            geom(75, 0, 25, 100), // right
            geom(0, 0, 100, 25),  // top
            geom(0, 75, 100, 25), // bottom
        ]
        .into_iter()
        .collect();
        assert_eq!(s.free, expected);
    }

    #[test]
    fn edge_take_leaves_single_remainder() {
        let mut s = Spaces::new(geom(0, 0, 100, 40)).unwrap();
        s.occlude(&geom(0, 0, 30, 40));
        let free: Vec<_> = s.free.iter().copied().collect();
        assert_eq!(free, vec![geom(30, 0, 70, 40)]);
    }

    #[test]
    fn negative_origin_clearing_splits() {
        let mut s = Spaces::new(geom(-50, -50, 100, 100)).unwrap();
        s.occlude(&geom(-50, -50, 50, 50));
        let expected: BTreeSet<Geometry> =
            [geom(0, -50, 50, 100), geom(-50, 0, 100, 50)].into_iter().collect();
        assert_eq!(s.free, expected);
    }

    #[test]
    fn tie_break_prefers_greater_y() {
        let mut s = Spaces::new(geom(0, 0, 200, 200)).unwrap();
        s.free.clear();
        s.free.insert(geom(0, 10, 50, 50));
        s.free.insert(geom(0, 5, 50, 50));
        let got = s.fit(Size::new(10, 10)).unwrap();
        assert_eq!((got.x, got.y), (0, 10));
    }

    #[test]
    fn leftmost_candidate_wins() {
        let mut s = Spaces::new(geom(0, 0, 200, 200)).unwrap();
        s.free.clear();
        s.free.insert(geom(40, 0, 50, 50));
        s.free.insert(geom(10, 90, 50, 50));
        let got = s.fit(Size::new(10, 10)).unwrap();
        assert_eq!((got.x, got.y), (10, 90));
    }

    #[test]
    fn too_small_candidates_are_skipped() {
        let mut s = Spaces::new(geom(0, 0, 200, 200)).unwrap();
        s.free.clear();
        s.free.insert(geom(0, 0, 5, 5));
        s.free.insert(geom(100, 0, 50, 50));
        let got = s.fit(Size::new(20, 20)).unwrap();
        assert_eq!((got.x, got.y), (100, 0));
    }
}
