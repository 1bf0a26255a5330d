use flotilla::{Board, Cell, FireReport, BOARD_SIZE, DEMO_LAYOUT};
use proptest::prelude::*;

fn all_cells() -> Vec<Cell> {
    (0..BOARD_SIZE)
        .flat_map(|row| (0..BOARD_SIZE).map(move |column| (row, column)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn firing_every_cell_sinks_the_fleet(order in Just(all_cells()).prop_shuffle()) {
        let mut board = Board::new(&DEMO_LAYOUT).unwrap();
        let mut hits = 0;
        let mut sunk = 0;
        for cell in order {
            match board.fire(cell) {
                FireReport::Hit => hits += 1,
                FireReport::Sunk => sunk += 1,
                FireReport::Miss => {}
            }
        }
        prop_assert!(board.all_sunk());
        // one sink report per vessel, one hit or sink per occupied cell
        prop_assert_eq!(sunk, 10);
        prop_assert_eq!(hits + sunk, 20);
    }

    #[test]
    fn repeat_fire_is_idempotent(
        prefix in proptest::collection::vec((0..BOARD_SIZE, 0..BOARD_SIZE), 0..30),
        cell in (0..BOARD_SIZE, 0..BOARD_SIZE),
    ) {
        let mut board = Board::new(&DEMO_LAYOUT).unwrap();
        for shot in prefix {
            board.fire(shot);
        }
        let first = board.fire(cell);
        let rendered = board.render();
        let second = board.fire(cell);
        prop_assert_eq!(first, second);
        prop_assert_eq!(board.render(), rendered);
    }

    #[test]
    fn a_miss_changes_nothing(
        prefix in proptest::collection::vec((0..BOARD_SIZE, 0..BOARD_SIZE), 0..30),
        pick in 0..(BOARD_SIZE * BOARD_SIZE - 20),
    ) {
        let mut board = Board::new(&DEMO_LAYOUT).unwrap();
        let water: Vec<Cell> = all_cells()
            .into_iter()
            .filter(|&cell| board.vessel_at(cell).is_none())
            .collect();
        for shot in prefix {
            board.fire(shot);
        }
        let rendered = board.render();
        prop_assert_eq!(board.fire(water[pick]), FireReport::Miss);
        prop_assert_eq!(board.render(), rendered);
    }
}
