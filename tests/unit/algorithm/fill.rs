//! Tests for the distribution fill pass

#[cfg(test)]
mod tests {
    use tilelayers::GenerationError;
    use tilelayers::algorithm::cancellation::{CancellationToken, Checkpoint};
    use tilelayers::algorithm::fill::{FillSummary, fill_layer};
    use tilelayers::math::random::{ScriptedRandom, SeededRandom};
    use tilelayers::model::distribution::Distribution;
    use tilelayers::spatial::grid::{Cell, Grid, Position};
    use tilelayers::spatial::region::Variant;

    // Tests that a certain leaf fills every cell
    // Verified by skipping the last row
    #[test]
    fn test_fill_covers_grid_with_certain_leaf() {
        let mut grid = Grid::new(4, 4);
        let distributions = vec![Distribution::leaf(1.0, 'x')];
        let mut random = SeededRandom::new(7);

        let summary = fill_layer(
            &mut grid,
            &distributions,
            &mut random,
            &Checkpoint::detached(0),
        );

        assert_eq!(
            summary,
            Ok(FillSummary {
                filled: 16,
                left_empty: 0,
                skipped: 0,
            })
        );
        assert!(grid.is_full());
        assert!(
            grid.occupied()
                .all(|(_, cell)| cell.value == 'x' && cell.variant.is_none())
        );
    }

    // Tests that a second pass changes nothing on a full grid
    // Verified by overwriting occupied cells
    #[test]
    fn test_fill_is_idempotent_on_full_grid() {
        let mut grid = Grid::new(4, 4);
        let distributions = vec![
            Distribution::leaf(0.5, 'a'),
            Distribution::leaf(0.5, 'b'),
        ];
        let mut random = SeededRandom::new(11);
        let checkpoint = Checkpoint::detached(0);

        assert!(fill_layer(&mut grid, &distributions, &mut random, &checkpoint).is_ok());
        let snapshot = grid.clone();

        let second = fill_layer(&mut grid, &distributions, &mut random, &checkpoint);

        assert_eq!(
            second,
            Ok(FillSummary {
                filled: 0,
                left_empty: 0,
                skipped: 16,
            })
        );
        assert_eq!(grid, snapshot);
    }

    // Tests that gaps leave cells empty
    // Verified by writing a default value when the walk returns nothing
    #[test]
    fn test_fill_gap_leaves_cells_empty() {
        let mut grid = Grid::new(3, 2);
        let distributions = vec![Distribution::leaf(0.5, 1_u8)];
        let mut random = ScriptedRandom::new([0.9]);

        let summary = fill_layer(
            &mut grid,
            &distributions,
            &mut random,
            &Checkpoint::detached(0),
        );

        assert_eq!(summary.map(|s| s.left_empty), Ok(6));
        assert!(grid.is_empty());
    }

    // Tests row-major draw order and preservation of existing content
    // Verified by iterating column-major
    #[test]
    fn test_fill_row_major_and_skips_occupied() {
        let mut grid = Grid::new(2, 2);
        grid.set(Position::new(0, 1), Cell::edged('#', Variant::Center));
        let distributions = vec![
            Distribution::leaf(0.5, 'a'),
            Distribution::leaf(0.5, 'b'),
        ];
        let mut random = ScriptedRandom::new([0.1, 0.9, 0.1]);

        let summary = fill_layer(
            &mut grid,
            &distributions,
            &mut random,
            &Checkpoint::detached(0),
        );

        assert_eq!(summary.map(|s| (s.filled, s.skipped)), Ok((3, 1)));
        assert_eq!(random.consumed(), 3);
        assert_eq!(grid.get(Position::new(0, 0)).map(|c| c.value), Some('a'));
        assert_eq!(
            grid.get(Position::new(0, 1)),
            Some(&Cell::edged('#', Variant::Center))
        );
        assert_eq!(grid.get(Position::new(1, 0)).map(|c| c.value), Some('b'));
        assert_eq!(grid.get(Position::new(1, 1)).map(|c| c.value), Some('a'));
    }

    // Tests that a cancelled checkpoint stops the pass before touching cells
    // Verified by checking cancellation only after the loop
    #[test]
    fn test_fill_stops_when_cancelled() {
        let mut grid = Grid::new(3, 3);
        let distributions = vec![Distribution::leaf(1.0, 0_u32)];
        let token = CancellationToken::new();
        token.cancel();

        let result = fill_layer(
            &mut grid,
            &distributions,
            &mut SeededRandom::new(1),
            &Checkpoint::new(2, Some(&token)),
        );

        assert_eq!(result, Err(GenerationError::Cancelled { layer: 2 }));
        assert!(grid.is_empty());
    }
}
