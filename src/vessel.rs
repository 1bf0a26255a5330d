//! Vessel and segment types: hull construction, fire resolution, adjacency.

use crate::config::BOARD_SIZE;

/// Grid coordinate as a `(row, column)` pair.
pub type Cell = (usize, usize);

/// A vessel placement given by its two endpoint cells.
pub type Placement = (Cell, Cell);

/// One size class of a fleet: hull length and how many vessels of that
/// length a legal fleet carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetClass {
    length: usize,
    count: usize,
}

impl FleetClass {
    /// Create a new fleet class.
    pub const fn new(length: usize, count: usize) -> Self {
        Self { length, count }
    }

    /// Hull length of vessels in this class.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of vessels of this length a legal fleet carries.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Display state of a single segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStatus {
    /// Not yet hit.
    Intact,
    /// Hit, but the owning vessel still floats.
    Hit,
    /// The owning vessel is sunk.
    Sunk,
}

impl SegmentStatus {
    /// Glyph used when rendering the field.
    pub fn glyph(&self) -> &'static str {
        match self {
            SegmentStatus::Intact => "\u{25A1}",
            SegmentStatus::Hit => "*",
            SegmentStatus::Sunk => "x",
        }
    }
}

/// One hull cell of a vessel, tracking its own hit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    row: usize,
    column: usize,
    alive: bool,
    status: SegmentStatus,
}

impl Segment {
    fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            alive: true,
            status: SegmentStatus::Intact,
        }
    }

    /// Row of this segment.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of this segment.
    pub fn column(&self) -> usize {
        self.column
    }

    /// `false` once the segment has been hit.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Current display state.
    pub fn status(&self) -> SegmentStatus {
        self.status
    }
}

/// A single vessel occupying a straight run of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vessel {
    start: Cell,
    end: Cell,
    sunk: bool,
    segments: Vec<Segment>,
}

impl Vessel {
    /// Build a vessel from its endpoint cells, one segment per cell
    /// inclusive of both endpoints. Equal rows step the column, otherwise
    /// the row; endpoints may be given in either order.
    ///
    /// The caller guarantees the endpoints describe an axis-aligned line;
    /// fleet-level validation happens on the board.
    pub fn build(start: Cell, end: Cell) -> Self {
        let mut segments = Vec::new();
        if start.0 == end.0 {
            let (lo, hi) = (start.1.min(end.1), start.1.max(end.1));
            for column in lo..=hi {
                segments.push(Segment::new(start.0, column));
            }
        } else {
            let (lo, hi) = (start.0.min(end.0), start.0.max(end.0));
            for row in lo..=hi {
                segments.push(Segment::new(row, start.1));
            }
        }
        Vessel {
            start,
            end,
            sunk: false,
            segments,
        }
    }

    /// First endpoint this vessel was built from.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Second endpoint this vessel was built from.
    pub fn end(&self) -> Cell {
        self.end
    }

    /// Hull segments in placement order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Hull length in cells.
    pub fn length(&self) -> usize {
        self.segments.len()
    }

    /// `true` once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Segment occupying the given cell, if any.
    pub fn find_segment(&self, row: usize, column: usize) -> Option<&Segment> {
        self.segments
            .iter()
            .find(|seg| seg.row == row && seg.column == column)
    }

    fn find_segment_mut(&mut self, row: usize, column: usize) -> Option<&mut Segment> {
        self.segments
            .iter_mut()
            .find(|seg| seg.row == row && seg.column == column)
    }

    /// Resolve a shot at the given cell. The struck segment is marked dead;
    /// once no segment remains alive the vessel sinks and every segment's
    /// status is overwritten accordingly. A cell outside the hull is a no-op.
    pub fn fire(&mut self, row: usize, column: usize) {
        if let Some(seg) = self.find_segment_mut(row, column) {
            seg.alive = false;
            seg.status = SegmentStatus::Hit;
            if self.segments.iter().all(|seg| !seg.alive) {
                self.sunk = true;
                for seg in &mut self.segments {
                    seg.status = SegmentStatus::Sunk;
                }
            }
        }
    }

    /// Cells surrounding any segment of this vessel, clipped to the board.
    ///
    /// Cells covered by the vessel's own hull may appear in the result, and
    /// duplicates are possible; adjacency checks only compare two distinct
    /// vessels, so both are harmless for membership testing.
    pub fn neighbor_cells(&self) -> Vec<Cell> {
        let mut neighbors = Vec::new();
        for seg in &self.segments {
            for dr in -1i32..=1 {
                for dc in -1i32..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let row = seg.row as i32 + dr;
                    let column = seg.column as i32 + dc;
                    if (0..BOARD_SIZE as i32).contains(&row)
                        && (0..BOARD_SIZE as i32).contains(&column)
                    {
                        neighbors.push((row as usize, column as usize));
                    }
                }
            }
        }
        neighbors
    }
}
