//! Cascade tests - clear/compact/refill passes and loop termination

use gem_cascade::core::{find_matches, gravity, Board, MatchRegion, MatchSet, SimpleRng};
use gem_cascade::types::{GemKind, GemKind::*, BOARD_HEIGHT, BOARD_WIDTH, GEM_KINDS};

/// Full board with no matches: color(x, y) cycles over four kinds with a
/// two-step row offset, so rows and columns both alternate
fn quiet_board() -> Board {
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            let gem = GEM_KINDS[((x + 2 * (y % 2)) % 4) as usize];
            board.set(x, y, Some(gem));
        }
    }
    assert!(find_matches(&board).is_empty());
    board
}

fn region(kind: GemKind, cells: Vec<(i8, i8)>) -> MatchSet {
    MatchSet::from_regions(vec![MatchRegion { kind, cells }])
}

#[test]
fn test_column_compaction_is_stable() {
    // Column 3, top to bottom: Sap Ame Sap Sap Qua Ame Qua Ame over an
    // otherwise quiet full board. Clearing the three sapphires leaves
    // Ame Qua Ame Qua Ame compacted to the bottom, order preserved,
    // and the top three cells refilled.
    let mut board = quiet_board();
    let column = [Sapphire, Amethyst, Sapphire, Sapphire, Quartz, Amethyst, Quartz, Amethyst];
    for (y, gem) in column.into_iter().enumerate() {
        board.set(3, y as i8, Some(gem));
    }
    assert!(find_matches(&board).is_empty());

    let matched = region(Sapphire, vec![(3, 0), (3, 2), (3, 3)]);
    let mut rng = SimpleRng::new(99);
    let result = gravity::apply(&mut board, &matched, &mut rng);

    // Survivors slid down in their original relative order
    let expect_bottom = [Amethyst, Quartz, Amethyst, Quartz, Amethyst];
    for (i, gem) in expect_bottom.into_iter().enumerate() {
        assert_eq!(board.gem_at(3, (3 + i) as i8), Some(gem));
    }

    // Top of the column was refilled with fresh gems
    for y in 0..3 {
        assert!(board.gem_at(3, y).is_some());
    }

    assert_eq!(result.cleared, vec![(3, 0), (3, 2), (3, 3)]);
    assert_eq!(result.refilled, vec![(3, 0), (3, 1), (3, 2)]);
    assert_eq!(result.drops[3], 3);
    assert_eq!(result.score, 10);

    // No other column was touched
    for (x, &drop) in result.drops.iter().enumerate() {
        if x != 3 {
            assert_eq!(drop, 0);
        }
    }
}

#[test]
fn test_pass_preserves_column_gem_accounting() {
    // post-count(column) == pre-count(column) - matched-in-column + refilled-in-column
    let mut board = quiet_board();
    board.set(6, 0, None);
    board.set(6, 1, None); // pre-existing holes are compacted and refilled too

    let pre: Vec<usize> = (0..BOARD_WIDTH as i8).map(|x| board.column_gem_count(x)).collect();

    let matched = MatchSet::from_regions(vec![
        MatchRegion {
            kind: Ruby,
            cells: vec![(0, 4), (1, 4), (2, 4)],
        },
        MatchRegion {
            kind: Amber,
            cells: vec![(6, 5), (6, 6), (6, 7)],
        },
    ]);
    let mut rng = SimpleRng::new(5);
    let result = gravity::apply(&mut board, &matched, &mut rng);

    for x in 0..BOARD_WIDTH as usize {
        let matched_in_col = result.cleared.iter().filter(|&&(cx, _)| cx as usize == x).count();
        let refilled_in_col = result.refilled.iter().filter(|&&(cx, _)| cx as usize == x).count();
        let post = board.column_gem_count(x as i8);
        assert_eq!(
            post,
            pre[x] - matched_in_col + refilled_in_col,
            "column {x} accounting"
        );
    }
}

#[test]
fn test_refill_lands_at_column_tops() {
    let mut board = quiet_board();
    let matched = region(Ruby, vec![(2, 6), (3, 6), (4, 6)]);
    let mut rng = SimpleRng::new(17);
    let result = gravity::apply(&mut board, &matched, &mut rng);

    // One gem cleared per affected column, so exactly row 0 refills
    assert_eq!(result.refilled, vec![(2, 0), (3, 0), (4, 0)]);
    for x in 0..BOARD_WIDTH as i8 {
        assert_eq!(board.column_gem_count(x), BOARD_HEIGHT as usize);
    }
}

#[test]
fn test_refill_is_deterministic_per_seed() {
    let matched = region(Ruby, vec![(0, 0), (1, 0), (2, 0)]);

    let mut board_a = quiet_board();
    let mut board_b = quiet_board();
    let result_a = gravity::apply(&mut board_a, &matched, &mut SimpleRng::new(31));
    let result_b = gravity::apply(&mut board_b, &matched, &mut SimpleRng::new(31));

    assert_eq!(board_a, board_b);
    assert_eq!(result_a, result_b);
}

#[test]
fn test_cascade_loop_reaches_fixed_point() {
    // Worst case: the whole board is one gem kind, so the first scan matches
    // all 64 cells. Repeated passes must still reach an empty MatchSet.
    let mut board = Board::from_cells(vec![vec![Some(Ruby); 8]; 8]);
    let mut rng = SimpleRng::new(12345);

    let mut passes = 0;
    loop {
        let matched = find_matches(&board);
        if matched.is_empty() {
            break;
        }
        gravity::apply(&mut board, &matched, &mut rng);
        passes += 1;
        assert!(passes <= 256, "cascade failed to terminate");
    }

    assert!(passes >= 1);
    assert!(find_matches(&board).is_empty());
    for x in 0..BOARD_WIDTH as i8 {
        assert_eq!(board.column_gem_count(x), BOARD_HEIGHT as usize);
    }
}

#[test]
fn test_cleared_cells_reported_row_major() {
    let mut board = quiet_board();
    // Overwrite two disjoint rows' worth of cells to clear
    let matched = MatchSet::from_regions(vec![
        MatchRegion {
            kind: Ruby,
            cells: vec![(5, 2), (4, 2), (3, 2)], // deliberately unsorted
        },
        MatchRegion {
            kind: Amber,
            cells: vec![(0, 1), (1, 1), (2, 1)],
        },
    ]);
    let mut rng = SimpleRng::new(8);
    let result = gravity::apply(&mut board, &matched, &mut rng);

    assert_eq!(
        result.cleared,
        vec![(0, 1), (1, 1), (2, 1), (3, 2), (4, 2), (5, 2)]
    );
    assert_eq!(result.score, 20);
}
