//! Region detection
//!
//! Partitions a sheet's used range into 8-connected clusters of populated
//! cells and reports each cluster's bounding rectangle.
//!
//! Ownership is decided by the visited set, not by rectangle containment: a
//! cell claimed by one cluster is never revisited, even when it lies inside
//! the bounding rectangle of a cluster discovered later. Interleaved clusters
//! can therefore yield overlapping rectangles while their cells stay disjoint.

use std::collections::VecDeque;

use ahash::AHashSet;
use log::{debug, trace};
use tablescan_core::{CellAddress, CellRange};

use crate::grid::Grid;

/// Neighbor offsets in enqueue order: row delta outer, column delta inner
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One connected cluster of populated cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Bounding rectangle of the cluster
    pub range: CellRange,
    /// Cells owned by the cluster, in visitation order (seed first)
    pub cells: Vec<CellAddress>,
}

impl Region {
    /// The cell the traversal started from
    pub fn seed(&self) -> CellAddress {
        self.cells.first().copied().unwrap_or(self.range.start)
    }
}

/// Detect all regions of a grid in discovery order
///
/// The grid's bounds are scanned row-major; every populated cell not yet
/// owned by a region seeds a breadth-first traversal. Discovery order is the
/// row-major order of the seeds.
pub fn detect_regions(grid: &Grid<'_>) -> Vec<Region> {
    let mut pass = DetectionPass::new(grid);
    let mut regions = Vec::new();

    for addr in grid.addresses() {
        if pass.visited.contains(&addr) || !grid.is_populated(addr) {
            continue;
        }
        let region = pass.flood(addr);
        debug!(
            "sheet '{}': region {} at {} ({} cells)",
            grid.sheet_name(),
            regions.len(),
            region.range,
            region.cells.len()
        );
        regions.push(region);
    }

    trace!(
        "sheet '{}': {} regions, {} cells visited, {} queue pushes",
        grid.sheet_name(),
        regions.len(),
        pass.visited.len(),
        pass.pushes
    );
    regions
}

/// Bounding rectangles of all regions of a grid, in discovery order
pub fn detect_ranges(grid: &Grid<'_>) -> Vec<CellRange> {
    detect_regions(grid)
        .into_iter()
        .map(|region| region.range)
        .collect()
}

/// State of one detection pass over one grid
///
/// The visited set lives only as long as the pass; nothing is shared
/// between sheets or between calls.
struct DetectionPass<'g, 'a> {
    grid: &'g Grid<'a>,
    visited: AHashSet<CellAddress>,
    queue: VecDeque<CellAddress>,
    pushes: usize,
}

impl<'g, 'a> DetectionPass<'g, 'a> {
    fn new(grid: &'g Grid<'a>) -> Self {
        Self {
            grid,
            visited: AHashSet::new(),
            queue: VecDeque::new(),
            pushes: 0,
        }
    }

    /// Breadth-first traversal from `seed`, claiming every reachable cell
    fn flood(&mut self, seed: CellAddress) -> Region {
        let mut range = CellRange::single(seed);
        let mut cells = Vec::new();

        self.queue.clear();
        self.queue.push_back(seed);

        while let Some(addr) = self.queue.pop_front() {
            // Neighbors are enqueued unconditionally and filtered here
            if !self.grid.contains(&addr)
                || self.visited.contains(&addr)
                || !self.grid.is_populated(addr)
            {
                continue;
            }

            self.visited.insert(addr);
            range.include(addr);
            cells.push(addr);

            for (dr, dc) in NEIGHBORS {
                // Coordinates off the sheet edge cannot be represented and
                // would be discarded anyway
                let row = addr.row.checked_add_signed(dr);
                let col = addr.col.checked_add_signed(dc as i16);
                if let (Some(row), Some(col)) = (row, col) {
                    self.queue.push_back(CellAddress::new(row, col));
                    self.pushes += 1;
                }
            }
        }

        Region { range, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tablescan_core::Worksheet;

    fn sheet_with(cells: &[&str]) -> Worksheet {
        let mut sheet = Worksheet::new("Sheet1");
        for addr in cells {
            sheet.set_cell_value(addr, *addr).unwrap();
        }
        sheet
    }

    fn ranges(sheet: &Worksheet) -> Vec<String> {
        detect_ranges(&Grid::new(sheet))
            .iter()
            .map(CellRange::to_a1_string)
            .collect()
    }

    #[test]
    fn test_empty_sheet_has_no_regions() {
        let sheet = Worksheet::new("Empty");
        assert!(detect_regions(&Grid::new(&sheet)).is_empty());
    }

    #[test]
    fn test_single_cell_region() {
        let sheet = sheet_with(&["C4"]);
        assert_eq!(ranges(&sheet), vec!["C4"]);
    }

    #[test]
    fn test_block_is_one_region() {
        let sheet = sheet_with(&["A1", "B1", "A2", "B2"]);
        assert_eq!(ranges(&sheet), vec!["A1:B2"]);
    }

    #[test]
    fn test_diagonal_cells_connect() {
        let sheet = sheet_with(&["A1", "B2", "C3", "B4"]);
        assert_eq!(ranges(&sheet), vec!["A1:C4"]);
    }

    #[test]
    fn test_separated_clusters_in_discovery_order() {
        // Lower-left cluster is seeded later than the upper-right one
        let sheet = sheet_with(&["A5", "B5", "A6", "B6", "E1", "F1", "E2", "F2"]);
        assert_eq!(ranges(&sheet), vec!["E1:F2", "A5:B6"]);
    }

    #[test]
    fn test_gap_of_one_row_separates() {
        let sheet = sheet_with(&["A1", "B1", "A3", "B3"]);
        assert_eq!(ranges(&sheet), vec!["A1:B1", "A3:B3"]);
    }

    #[test]
    fn test_interleaved_clusters_overlap_but_stay_disjoint() {
        // An L-shaped cluster wraps around an isolated cell at C3
        let sheet = sheet_with(&["A1", "A2", "A3", "A4", "A5", "B5", "C5", "D5", "C3"]);
        let regions = detect_regions(&Grid::new(&sheet));

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].range.to_a1_string(), "A1:D5");
        assert_eq!(regions[1].range.to_a1_string(), "C3");
        assert!(regions[0].range.overlaps(&regions[1].range));
        assert!(!regions[0].cells.contains(&CellAddress::new(2, 2)));
    }

    #[test]
    fn test_visitation_order_is_breadth_first() {
        let sheet = sheet_with(&["B2", "A1", "C1", "B3"]);
        let regions = detect_regions(&Grid::new(&sheet));
        let order: Vec<String> = regions[0].cells.iter().map(|a| a.to_a1_string()).collect();

        // A1 seeds; its only populated neighbor is B2, whose neighbors are
        // enqueued as (-1,-1), (-1,0), (-1,1), ... so C1 precedes B3
        assert_eq!(order, vec!["A1", "B2", "C1", "B3"]);
        assert_eq!(regions[0].seed(), CellAddress::new(0, 0));
    }

    #[test]
    fn test_scan_respects_declared_dimension() {
        let mut sheet = sheet_with(&["A1", "D4"]);
        sheet.set_dimension(Some(CellRange::parse("A1:B2").unwrap()));
        assert_eq!(ranges(&sheet), vec!["A1"]);
    }

    #[test]
    fn test_detection_is_idempotent() {
        let sheet = sheet_with(&["A1", "B2", "D1", "D2", "F6", "G8"]);
        let grid = Grid::new(&sheet);
        assert_eq!(detect_regions(&grid), detect_regions(&grid));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;
        use std::collections::BTreeSet;

        fn populated_cells() -> impl Strategy<Value = BTreeSet<(u32, u16)>> {
            proptest::collection::btree_set((0u32..12, 0u16..12), 0..60)
        }

        proptest! {
            #[test]
            fn test_regions_partition_populated_cells(cells in populated_cells()) {
                let mut sheet = Worksheet::new("P");
                for &(row, col) in &cells {
                    sheet.set_cell_value_at(row, col, 1).unwrap();
                }

                let regions = detect_regions(&Grid::new(&sheet));
                let mut owned = BTreeSet::new();
                for region in &regions {
                    for addr in &region.cells {
                        // Pairwise disjoint membership
                        prop_assert!(owned.insert((addr.row, addr.col)));
                        prop_assert!(region.range.contains(addr));
                    }
                }
                prop_assert_eq!(owned, cells);
            }

            #[test]
            fn test_detection_is_deterministic(cells in populated_cells()) {
                let mut sheet = Worksheet::new("P");
                for &(row, col) in &cells {
                    sheet.set_cell_value_at(row, col, "v").unwrap();
                }

                let grid = Grid::new(&sheet);
                prop_assert_eq!(detect_ranges(&grid), detect_ranges(&grid));
            }
        }
    }
}
