use super::*;

/// Clockwise unit square starting at the origin.
fn square() -> Hull {
    Hull::from_boundary(vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 0.0),
    ])
}

#[test]
fn test_singleton() {
    let hull = Hull::singleton(Point::new(3.0, 4.0));
    assert_eq!(hull.len(), 1);
    assert!(!hull.is_empty());
    assert_eq!(hull.leftmost_index(), 0);
    assert_eq!(hull.rightmost_index(), 0);
    assert_eq!(hull.next_index(0), 0);
    assert_eq!(hull.previous_index(0), 0);
}

#[test]
fn test_circular_indexing() {
    let hull = square();
    assert_eq!(hull.next_index(0), 1);
    assert_eq!(hull.next_index(3), 0);
    assert_eq!(hull.previous_index(0), 3);
    assert_eq!(hull.previous_index(2), 1);
}

#[test]
fn test_extreme_indices_break_ties_by_y() {
    let hull = square();
    // (0,0) beats (0,1) on the left, (1,1) beats (1,0) on the right.
    assert_eq!(hull.leftmost_index(), 0);
    assert_eq!(hull.rightmost_index(), 2);
}

#[test]
fn test_contains_polygon() {
    let hull = square();
    assert!(hull.contains(Point::new(0.5, 0.5)));
    assert!(hull.contains(Point::new(0.0, 0.0)));
    assert!(hull.contains(Point::new(1.0, 0.5)));
    assert!(!hull.contains(Point::new(1.5, 0.5)));
    assert!(!hull.contains(Point::new(-0.1, 0.0)));
}

#[test]
fn test_contains_degenerate() {
    let point = Hull::singleton(Point::new(1.0, 1.0));
    assert!(point.contains(Point::new(1.0, 1.0)));
    assert!(!point.contains(Point::new(1.0, 1.5)));

    let segment = Hull::from_boundary(vec![Point::new(0.0, 0.0), Point::new(2.0, 2.0)]);
    assert!(segment.contains(Point::new(1.0, 1.0)));
    assert!(!segment.contains(Point::new(3.0, 3.0)));
    assert!(!segment.contains(Point::new(1.0, 0.0)));
}

#[test]
fn test_is_convex() {
    assert!(square().is_convex());

    let counterclockwise = Hull::from_boundary(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ]);
    assert!(!counterclockwise.is_convex());

    let with_collinear = Hull::from_boundary(vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(0.0, 2.0),
        Point::new(1.0, 0.0),
    ]);
    assert!(!with_collinear.is_convex());
}

#[test]
fn test_area() {
    approx::assert_relative_eq!(square().area(), 1.0);
    assert_eq!(Hull::singleton(Point::new(1.0, 2.0)).area(), 0.0);
}

#[test]
fn test_display() {
    let hull = Hull::from_boundary(vec![Point::new(0.0, 0.0), Point::new(1.5, -2.0)]);
    assert_eq!(hull.to_string(), "[(0, 0), (1.5, -2)]");
}

#[test]
fn test_into_points_preserves_order() {
    let hull = square();
    let expected = hull.points().to_vec();
    assert_eq!(hull.into_points(), expected);
}
