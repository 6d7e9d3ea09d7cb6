use clip_canvas::geometry::{Point, rasterize};

fn line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
    rasterize(Point::new(x0, y0), Point::new(x1, y1)).collect()
}

fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
}

#[test]
fn test_horizontal_line() {
    assert_eq!(
        line(0, 0, 5, 0),
        pts(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)])
    );
}

#[test]
fn test_diagonal_line() {
    assert_eq!(line(0, 0, 3, 3), pts(&[(0, 0), (1, 1), (2, 2), (3, 3)]));
}

#[test]
fn test_shallow_line() {
    let pixels = line(0, 0, 5, 2);
    assert_eq!(
        pixels,
        pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)])
    );
    assert!(pixels.windows(2).all(|w| w[1].x == w[0].x + 1));
    assert!(pixels.windows(2).all(|w| w[1].y >= w[0].y));
}

#[test]
fn test_vertical_line_upwards() {
    assert_eq!(line(2, 3, 2, 0), pts(&[(2, 3), (2, 2), (2, 1), (2, 0)]));
}

#[test]
fn test_endpoints_and_connectivity() {
    for x0 in -4..=4 {
        for y0 in -4..=4 {
            for x1 in -4..=4 {
                for y1 in -4..=4 {
                    let p0 = Point::new(x0, y0);
                    let p1 = Point::new(x1, y1);
                    let pixels: Vec<_> = rasterize(p0, p1).collect();

                    assert_eq!(pixels.first(), Some(&p0));
                    assert_eq!(pixels.last(), Some(&p1));

                    let expected_len = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
                    assert_eq!(pixels.len(), expected_len, "{p0:?} -> {p1:?}");

                    for pair in pixels.windows(2) {
                        assert!((pair[1].x - pair[0].x).abs() <= 1);
                        assert!((pair[1].y - pair[0].y).abs() <= 1);
                        assert_ne!(pair[0], pair[1]);
                    }
                }
            }
        }
    }
}

#[test]
fn test_reversal_without_ties() {
    let cases = [(0, 0, 5, 2), (0, 0, 7, 0), (1, 1, 1, 9), (-3, 4, 2, -1)];
    for (x0, y0, x1, y1) in cases {
        let mut backward = line(x1, y1, x0, y0);
        backward.reverse();
        assert_eq!(line(x0, y0, x1, y1), backward);
    }
}

#[test]
fn test_rasterize_is_restartable() {
    let walk = rasterize(Point::new(-2, 7), Point::new(9, 1));
    let first: Vec<_> = walk.clone().collect();
    let second: Vec<_> = walk.collect();
    assert_eq!(first, second);
}

#[test]
fn test_zero_length_segment() {
    assert_eq!(line(4, 4, 4, 4), pts(&[(4, 4)]));
}

#[test]
fn test_long_line_starts_lazily() {
    let mut it = rasterize(Point::new(0, 0), Point::new(1_500_000_000, 0));
    assert_eq!(it.len(), 1_500_000_001);
    let head: Vec<_> = it.by_ref().take(3).collect();
    assert_eq!(head, pts(&[(0, 0), (1, 0), (2, 0)]));
    assert_eq!(it.len(), 1_499_999_998);
}

#[test]
fn test_extreme_coordinates() {
    let mut it = rasterize(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX));
    assert_eq!(it.len() as u64, 1 << 32);
    assert_eq!(it.next(), Some(Point::new(i32::MIN, i32::MIN)));
    assert_eq!(it.next(), Some(Point::new(i32::MIN + 1, i32::MIN + 1)));

    let m = i32::MAX;
    assert_eq!(line(m - 2, 0, m, 1), pts(&[(m - 2, 0), (m - 1, 0), (m, 1)]));
    assert_eq!(line(m, 1, m - 2, 0).len(), 3);
}
