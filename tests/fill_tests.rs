//! Region fill tests

use pixel_grid::core::Grid;
use pixel_grid::types::Color;

fn fixture() -> Grid {
    Grid::from_rows(&[
        [0, 1, 0, 0, 0],
        [1, 0, 1, 1, 0],
        [1, 0, 0, 1, 0],
        [0, 1, 0, 0, 1],
        [0, 0, 1, 1, 0],
        [0, 0, 0, 0, 0],
    ])
    .unwrap()
}

#[test]
fn test_fill_respects_four_connectivity() {
    let mut grid = fixture();
    assert_eq!(grid.fill_region(1, 1, Color(2)), Ok(5));

    let expected = Grid::from_rows(&[
        [0, 1, 0, 0, 0],
        [1, 2, 1, 1, 0],
        [1, 2, 2, 1, 0],
        [0, 1, 2, 2, 1],
        [0, 0, 1, 1, 0],
        [0, 0, 0, 0, 0],
    ])
    .unwrap();
    assert_eq!(grid, expected);
    assert_eq!(grid.to_string(), expected.to_string());
}

#[test]
fn test_fill_is_idempotent() {
    let mut once = fixture();
    once.fill_region(1, 1, Color(2)).unwrap();

    let mut twice = once.clone();
    twice.fill_region(1, 1, Color(2)).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_fill_isolated_pixel() {
    let mut grid = fixture();
    // (0, 0) is boxed in by 1s on its right and below
    assert_eq!(grid.fill_region(0, 0, Color(9)), Ok(1));
    assert_eq!(grid.get_pixel(0, 0), Ok(Color(9)));
    assert_eq!(grid.get_pixel(0, 3), Ok(Color(0)));
}

#[test]
fn test_fill_wall_color() {
    let mut grid = fixture();
    // the 1s at (2, 1), (3, 1), (3, 2) touch each other, (1, 0) does not
    assert_eq!(grid.fill_region(2, 1, Color(5)), Ok(3));
    assert_eq!(grid.get_pixel(3, 2), Ok(Color(5)));
    assert_eq!(grid.get_pixel(1, 0), Ok(Color(1)));
    assert_eq!(grid.get_pixel(4, 3), Ok(Color(1)));
}

#[test]
fn test_fill_wraps_around_obstacles() {
    let mut grid = fixture();
    // outer zeros: top-right strip down the right edge, bottom-left area
    grid.fill_region(4, 0, Color(3)).unwrap();

    for (x, y) in [(2, 0), (3, 0), (4, 0), (4, 1), (4, 2)] {
        assert_eq!(grid.get_pixel(x, y), Ok(Color(3)), "({}, {})", x, y);
    }
    // (4, 3) is a 1, so the bottom rows are a separate region
    assert_eq!(grid.get_pixel(4, 4), Ok(Color(0)));
    assert_eq!(grid.get_pixel(0, 5), Ok(Color(0)));
}

#[test]
fn test_fill_uniform_grid() {
    let mut grid = Grid::new(7, 3);
    assert_eq!(grid.fill_region(6, 2, Color(4)), Ok(21));
    assert!(grid.cells().iter().all(|&c| c == Color(4)));
}

#[test]
fn test_fill_with_start_color_changes_nothing() {
    let mut grid = fixture();
    let before = grid.clone();
    assert_eq!(grid.fill_region(1, 1, Color(0)), Ok(0));
    assert_eq!(grid, before);
}

#[test]
fn test_fill_large_single_region() {
    let mut grid = Grid::new(600, 400);
    grid.paint_vertical(300, 0, 399, Color(1)).unwrap();

    assert_eq!(grid.fill_region(0, 0, Color(2)), Ok(300 * 400));
    assert_eq!(grid.get_pixel(299, 399), Ok(Color(2)));
    assert_eq!(grid.get_pixel(301, 0), Ok(Color(0)));
}
