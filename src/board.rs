//! Field state: vessel arena, coordinate lookup, fire dispatch, validation.

use std::collections::HashMap;

use crate::common::{FieldValidationError, FireReport};
use crate::config::{BOARD_SIZE, FLEET_CLASSES, FLEET_VESSELS};
use crate::vessel::{Cell, Placement, Vessel};

/// Glyph rendered for a cell no vessel occupies.
const WATER_GLYPH: &str = "~";

/// Main field state: the fleet and a per-cell lookup into it.
#[derive(Debug)]
pub struct Board {
    /// Owning arena of placed vessels.
    vessels: Vec<Vessel>,
    /// Occupied cell to index of the owning vessel. Later placements
    /// overwrite earlier entries for shared cells; validation catches the
    /// damage through the count and tally rules.
    cells: HashMap<Cell, usize>,
}

impl Board {
    /// Build a board from endpoint placements and validate the fleet.
    /// No board is produced when the layout breaks a placement rule.
    pub fn new(placements: &[Placement]) -> Result<Self, FieldValidationError> {
        let mut vessels = Vec::with_capacity(placements.len());
        let mut cells = HashMap::new();
        for &(start, end) in placements {
            let vessel = Vessel::build(start, end);
            let index = vessels.len();
            for seg in vessel.segments() {
                cells.insert((seg.row(), seg.column()), index);
            }
            vessels.push(vessel);
        }
        let board = Board { vessels, cells };
        if !board.validate() {
            log::warn!("fleet layout rejected");
            return Err(FieldValidationError);
        }
        log::info!("fleet of {} vessels placed", board.vessels.len());
        Ok(board)
    }

    /// Resolve a fire command at the given cell.
    ///
    /// A cell no vessel occupies reports a miss and mutates nothing.
    /// Re-firing an already resolved cell repeats the prior report.
    pub fn fire(&mut self, cell: Cell) -> FireReport {
        let report = match self.cells.get(&cell) {
            Some(&index) => {
                let vessel = &mut self.vessels[index];
                vessel.fire(cell.0, cell.1);
                if vessel.is_sunk() {
                    FireReport::Sunk
                } else {
                    FireReport::Hit
                }
            }
            None => FireReport::Miss,
        };
        log::debug!("fire at ({}, {}) -> {}", cell.0, cell.1, report);
        report
    }

    /// Placed vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Vessel occupying the given cell, if any.
    pub fn vessel_at(&self, cell: Cell) -> Option<&Vessel> {
        self.cells.get(&cell).map(|&index| &self.vessels[index])
    }

    /// `true` once every vessel of the fleet is sunk.
    pub fn all_sunk(&self) -> bool {
        self.vessels.iter().all(|vessel| vessel.is_sunk())
    }

    /// Render the field as a grid of status glyphs, row-major. Each cell
    /// glyph is followed by two spaces, each row by a newline.
    pub fn render(&self) -> String {
        let mut output = String::new();
        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                let glyph = self
                    .vessel_at((row, column))
                    .and_then(|vessel| vessel.find_segment(row, column))
                    .map(|seg| seg.status().glyph())
                    .unwrap_or(WATER_GLYPH);
                output.push_str(glyph);
                output.push_str("  ");
            }
            output.push('\n');
        }
        output
    }

    /// Write the rendered field to stdout.
    pub fn display(&self) {
        print!("{}", self.render());
    }

    /// Check fleet legality: distinct vessel count, per-length tally, and
    /// the no-touch rule. Every rule category runs even after one has
    /// failed; the verdict is the conjunction of all three.
    fn validate(&self) -> bool {
        let mut verdict = true;

        // Vessels fully overwritten by a later placement are unreachable
        // through the cell map and drop out of every check below.
        let mut indices: Vec<usize> = self.cells.values().copied().collect();
        indices.sort_unstable();
        indices.dedup();

        if indices.len() != FLEET_VESSELS {
            verdict = false;
        }

        let mut tally: HashMap<usize, usize> = HashMap::new();
        for &index in &indices {
            *tally.entry(self.vessels[index].length()).or_insert(0) += 1;
        }
        // A length class absent from the layout counts as a tally of zero.
        if FLEET_CLASSES
            .iter()
            .any(|class| tally.get(&class.length()).copied().unwrap_or(0) != class.count())
        {
            verdict = false;
        }

        for &first in &indices {
            let neighbors = self.vessels[first].neighbor_cells();
            for &second in &indices {
                if first == second {
                    continue;
                }
                for seg in self.vessels[second].segments() {
                    if neighbors.contains(&(seg.row(), seg.column())) {
                        verdict = false;
                    }
                }
            }
        }

        verdict
    }
}
