//! Tests for route file parsing and error line attribution

#[cfg(test)]
mod tests {
    use routemaze::MazeError;
    use routemaze::io::route_file::{parse_route, read_route};
    use routemaze::spatial::Cell;
    use std::path::Path;

    // Tests comments, blank lines and mixed separators
    // Verified by treating '#' lines as coordinates
    #[test]
    fn test_parse_mixed_separators() {
        let text = "# drawn route\n0,0\n\n0 1\n 1 ,\t1 \n";
        let route = parse_route(text, Path::new("mixed.route"));
        assert!(route.is_ok());
        if let Ok(route) = route {
            assert_eq!(
                route.cells(),
                &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]
            );
        }
    }

    // Tests malformed lines report their 1-based line number
    // Verified by reporting the zero-based index
    #[test]
    fn test_malformed_line_number() {
        let result = parse_route("0,0\n# note\n0,x\n", Path::new("bad.route"));
        match result {
            Err(MazeError::RouteParse { line, reason, .. }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("column"), "{reason}");
            }
            other => unreachable!("Expected RouteParse, got {other:?}"),
        }
    }

    // Tests lines with the wrong number of fields are rejected
    // Verified by ignoring a third field
    #[test]
    fn test_wrong_field_count() {
        assert!(parse_route("0,0,0\n", Path::new("a.route")).is_err());
        assert!(parse_route("7\n", Path::new("a.route")).is_err());
    }

    // Tests route validation errors map back to file lines
    // Verified by reporting the route index instead of the line
    #[test]
    fn test_invalid_route_maps_to_line() {
        let result = parse_route("# header\n0,0\n0,1\n\n2,1\n", Path::new("jump.route"));
        match result {
            Err(MazeError::RouteParse { line, reason, path }) => {
                assert_eq!(line, 5);
                assert!(reason.contains("not adjacent"), "{reason}");
                assert_eq!(path, Path::new("jump.route"));
            }
            other => unreachable!("Expected RouteParse, got {other:?}"),
        }
    }

    // Tests files with no coordinates are rejected
    // Verified by removing the empty check
    #[test]
    fn test_empty_file_rejected() {
        let result = parse_route("# nothing\n\n", Path::new("empty.route"));
        assert!(matches!(result, Err(MazeError::RouteParse { .. })));
    }

    // Tests reading from disk and missing files
    // Verified by swallowing read errors
    #[test]
    fn test_read_route_from_disk() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| unreachable!("{e}"));
        let path = dir.path().join("walk.route");
        std::fs::write(&path, "1,1\n1,2\n").unwrap_or_else(|e| unreachable!("{e}"));

        let route = read_route(&path);
        assert!(route.is_ok());

        let missing = read_route(&dir.path().join("missing.route"));
        assert!(matches!(missing, Err(MazeError::FileSystem { .. })));
    }

    // Tests repeated separators are rejected
    // Verified by filtering empty fields after splitting
    #[test]
    fn test_repeated_separator_rejected() {
        for text in ["1,,2\n", "1, ,2\n", "1  2\n", "1 \t2\n", ",1\n"] {
            let result = parse_route(text, Path::new("sep.route"));
            assert!(
                matches!(result, Err(MazeError::RouteParse { line: 1, .. })),
                "{text:?} parsed as {result:?}"
            );
        }
    }

    // Tests coordinates beyond the grid limit are rejected at parse time
    // Verified by accepting any usize
    #[test]
    fn test_huge_coordinate_rejected() {
        let result = parse_route("18446744073709551615,0\n", Path::new("huge.route"));
        match result {
            Err(MazeError::RouteParse { line, reason, .. }) => {
                assert_eq!(line, 1);
                assert!(reason.contains("row"), "{reason}");
            }
            other => unreachable!("Expected RouteParse, got {other:?}"),
        }

        let result = parse_route("0\t4096\n", Path::new("edge.route"));
        assert!(matches!(result, Err(MazeError::RouteParse { .. })));
        assert!(parse_route("0\t4095\n", Path::new("edge.route")).is_ok());
    }

    // Tests a route file that revisits a cell reports the revisiting line
    // Verified by allowing revisits
    #[test]
    fn test_revisit_maps_to_line() {
        let result = parse_route("0,0\n0,1\n1,1\n1,0\n# back home\n0,0\n", Path::new("loop.route"));
        match result {
            Err(MazeError::RouteParse { line, reason, .. }) => {
                assert_eq!(line, 6);
                assert!(reason.contains("revisits"), "{reason}");
            }
            other => unreachable!("Expected RouteParse, got {other:?}"),
        }
    }
}
