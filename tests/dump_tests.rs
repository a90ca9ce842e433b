//! Dump tests - the textual format and its parser

use pixel_grid::core::{Grid, GridError};
use pixel_grid::types::Color;

const SINGLE_PIXEL_DUMP: &str =
    "0, 0, 0, 0, 0, \n0, 1, 0, 0, 0, \n0, 0, 0, 0, 0, \n0, 0, 0, 0, 0, \n0, 0, 0, 0, 0, \n";

#[test]
fn test_dump_single_pixel() {
    let grid = Grid::from_rows(&[
        [0, 0, 0, 0, 0],
        [0, 1, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ])
    .unwrap();
    assert_eq!(grid.to_string(), SINGLE_PIXEL_DUMP);
}

#[test]
fn test_dump_after_painting() {
    let mut grid = Grid::new(5, 5);
    grid.paint_pixel(1, 1, Color(1)).unwrap();
    assert_eq!(format!("{}", grid), SINGLE_PIXEL_DUMP);
}

#[test]
fn test_dump_keeps_trailing_separator() {
    let grid = Grid::new(1, 1);
    assert_eq!(grid.to_string(), "0, \n");
}

#[test]
fn test_dump_multi_digit_colors() {
    let grid = Grid::from_rows(&[[10, 200], [3000, 0]]).unwrap();
    assert_eq!(grid.to_string(), "10, 200, \n3000, 0, \n");
}

#[test]
fn test_parse_reproduces_grid() {
    let grid: Grid = SINGLE_PIXEL_DUMP.parse().unwrap();
    assert_eq!(grid.width(), 5);
    assert_eq!(grid.height(), 5);
    assert_eq!(grid.get_pixel(1, 1), Ok(Color(1)));
    assert_eq!(grid.to_string(), SINGLE_PIXEL_DUMP);
}

#[test]
fn test_parse_hand_written_fixture() {
    let grid: Grid = "
        0, 1, 0
        1, 0, 1
    "
    .parse()
    .unwrap();
    assert_eq!(grid, Grid::from_rows(&[[0, 1, 0], [1, 0, 1]]).unwrap());
}

#[test]
fn test_parse_reports_line_of_bad_token() {
    let err = "0, 0, \n0, -3, \n".parse::<Grid>().unwrap_err();
    assert_eq!(
        err,
        GridError::Parse {
            line: 2,
            token: "-3".to_string()
        }
    );
    assert_eq!(err.to_string(), "line 2: invalid color \"-3\"");
}
