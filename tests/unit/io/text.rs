//! Tests for text rendering and row order

#[cfg(test)]
mod tests {
    use routemaze::algorithm::carving::carve_route;
    use routemaze::io::text::{RowOrder, render_text};
    use routemaze::spatial::{Route, Tile};

    fn scenario() -> routemaze::MazeGrid {
        let route = Route::from_pairs(&[(0, 0), (0, 1), (1, 1)])
            .unwrap_or_else(|e| unreachable!("{e}"));
        carve_route(2, 2, &route)
    }

    // Tests top-down rendering of the carved scenario
    // Verified by emitting columns instead of rows
    #[test]
    fn test_top_down() {
        let text = render_text(&scenario(), RowOrder::TopDown);
        assert_eq!(text, "#####\n#S..#\n###.#\n###G#\n#####\n");
    }

    // Tests bottom-up rendering reverses the rows
    // Verified by skipping the reverse
    #[test]
    fn test_bottom_up_is_default() {
        let text = render_text(&scenario(), RowOrder::default());
        assert_eq!(text, "#####\n###G#\n###.#\n#S..#\n#####\n");
    }

    // Tests every character is a tile symbol
    // Verified by rendering walls as spaces
    #[test]
    fn test_only_tile_symbols_rendered() {
        let text = render_text(&scenario(), RowOrder::TopDown);
        let symbols = [Tile::Wall, Tile::Open, Tile::Start, Tile::Goal].map(Tile::symbol);
        assert!(text
            .chars()
            .filter(|c| *c != '\n')
            .all(|c| symbols.contains(&c)));
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().all(|line| line.len() == 5));
    }
}
