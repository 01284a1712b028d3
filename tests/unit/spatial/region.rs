//! Tests for rectangles and variant classification

#[cfg(test)]
mod tests {
    use tilelayers::spatial::grid::Position;
    use tilelayers::spatial::region::{Rect, Variant};

    // Tests rectangle extents and containment
    // Verified by making the end bounds inclusive
    #[test]
    fn test_rect_extent_and_contains() {
        let rect = Rect::new(Position::new(1, 2), 3, 2);

        assert_eq!(rect.area(), 6);
        assert_eq!(rect.row_end(), 3);
        assert_eq!(rect.column_end(), 5);
        assert!(rect.contains(Position::new(1, 2)));
        assert!(rect.contains(Position::new(2, 4)));
        assert!(!rect.contains(Position::new(3, 2)));
        assert!(!rect.contains(Position::new(1, 5)));
    }

    // Tests overlap symmetry and edge adjacency
    // Verified by treating touching rectangles as overlapping
    #[test]
    fn test_rect_overlaps() {
        let a = Rect::new(Position::new(0, 0), 2, 2);
        let b = Rect::new(Position::new(1, 1), 2, 2);
        let c = Rect::new(Position::new(0, 2), 2, 2);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    // Tests row-major position enumeration
    // Verified by enumerating columns first
    #[test]
    fn test_rect_positions() {
        let rect = Rect::new(Position::new(5, 5), 2, 2);

        let positions: Vec<Position> = rect.positions().collect();

        assert_eq!(
            positions,
            vec![
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(6, 5),
                Position::new(6, 6),
            ]
        );
    }

    // Tests all nine variants of a 3x3 rectangle
    // Verified by classifying the last row as a middle band
    #[test]
    fn test_classify_three_by_three() {
        let rect = Rect::new(Position::new(4, 4), 3, 3);

        let classified: Vec<Option<Variant>> = rect
            .positions()
            .map(|position| Variant::classify(&rect, position))
            .collect();

        assert_eq!(
            classified,
            Variant::ALL.iter().copied().map(Some).collect::<Vec<_>>()
        );
    }

    // Tests that a 2x2 rectangle only has corners
    // Verified by classifying the second cell as an edge
    #[test]
    fn test_classify_two_by_two_corners_only() {
        let rect = Rect::new(Position::new(0, 0), 2, 2);

        assert!(
            rect.positions()
                .filter_map(|position| Variant::classify(&rect, position))
                .all(Variant::is_corner)
        );
    }

    // Tests edges and centers of a larger rectangle
    // Verified by restricting edges to one cell
    #[test]
    fn test_classify_wide_rectangle() {
        let rect = Rect::new(Position::new(0, 0), 5, 4);

        assert_eq!(
            Variant::classify(&rect, Position::new(0, 3)),
            Some(Variant::Top)
        );
        assert_eq!(
            Variant::classify(&rect, Position::new(2, 0)),
            Some(Variant::Left)
        );
        assert_eq!(
            Variant::classify(&rect, Position::new(2, 2)),
            Some(Variant::Center)
        );
        assert_eq!(
            Variant::classify(&rect, Position::new(3, 4)),
            Some(Variant::BottomRight)
        );
        assert_eq!(Variant::classify(&rect, Position::new(4, 0)), None);
    }

    // Tests that a single-row rectangle classifies as its top row
    // Verified by giving the last row precedence
    #[test]
    fn test_classify_single_row_prefers_top() {
        let rect = Rect::new(Position::new(0, 0), 3, 1);

        assert_eq!(
            Variant::classify(&rect, Position::new(0, 0)),
            Some(Variant::TopLeft)
        );
        assert_eq!(
            Variant::classify(&rect, Position::new(0, 2)),
            Some(Variant::TopRight)
        );
    }

    // Tests 3x3 scheme coordinates of each variant
    // Verified by swapping row and column accessors
    #[test]
    fn test_variant_scheme_coordinates() {
        for (index, variant) in Variant::ALL.iter().enumerate() {
            assert_eq!(variant.row() as usize, index / 3);
            assert_eq!(variant.column() as usize, index % 3);
        }
        assert_eq!(
            Variant::ALL.iter().filter(|variant| variant.is_corner()).count(),
            4
        );
    }
}
