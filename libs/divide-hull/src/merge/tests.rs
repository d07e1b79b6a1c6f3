use super::*;
use crate::point::Point;

fn hull(points: &[(f64, f64)]) -> Hull {
    Hull::from_boundary(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

fn pts(points: &[(f64, f64)]) -> Vec<Point> {
    points.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn test_merge_singletons() {
    let merged = merge(&hull(&[(0.0, 0.0)]), &hull(&[(1.0, 1.0)]));
    assert_eq!(merged.points(), pts(&[(0.0, 0.0), (1.0, 1.0)]).as_slice());
}

#[test]
fn test_merge_identical_singletons() {
    let merged = merge(&hull(&[(2.0, 2.0)]), &hull(&[(2.0, 2.0)]));
    assert_eq!(merged.points(), pts(&[(2.0, 2.0)]).as_slice());
}

#[test]
fn test_merge_drops_inner_arcs() {
    let left = hull(&[(0.0, 0.0), (1.0, 1.0), (1.0, -1.0)]);
    let right = hull(&[(1.0, 2.0), (3.0, 2.0), (3.0, 0.0)]);
    let merged = merge(&left, &right);

    assert_eq!(
        merged.points(),
        pts(&[(0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (3.0, 0.0), (1.0, -1.0)]).as_slice()
    );
    assert!(!merged.points().contains(&Point::new(1.0, 1.0)));
    assert!(merged.contains(Point::new(1.0, 1.0)));
    assert!(merged.is_convex());
}

#[test]
fn test_merge_collinear_segments() {
    let merged = merge(&hull(&[(0.0, 0.0), (1.0, 0.0)]), &hull(&[(2.0, 0.0), (3.0, 0.0)]));
    assert_eq!(merged.points(), pts(&[(0.0, 0.0), (3.0, 0.0)]).as_slice());
}

#[test]
fn test_merge_point_with_collinear_segment() {
    let merged = merge(&hull(&[(0.0, 0.0)]), &hull(&[(1.0, 0.0), (2.0, 0.0)]));
    assert_eq!(merged.points(), pts(&[(0.0, 0.0), (2.0, 0.0)]).as_slice());
}

#[test]
fn test_merge_duplicate_across_split() {
    let merged = merge(&hull(&[(0.0, 0.0), (1.0, 1.0)]), &hull(&[(1.0, 1.0)]));
    assert_eq!(merged.points(), pts(&[(0.0, 0.0), (1.0, 1.0)]).as_slice());

    let merged = merge(&hull(&[(1.0, 1.0)]), &hull(&[(1.0, 1.0), (2.0, 0.0)]));
    assert_eq!(merged.points(), pts(&[(1.0, 1.0), (2.0, 0.0)]).as_slice());
}

#[test]
fn test_merge_segment_with_triangle_keeps_clockwise_order() {
    let left = hull(&[(0.0, -1.0), (0.0, 1.0)]);
    let right = hull(&[(2.0, 0.0)]);
    let merged = merge(&left, &right);
    assert_eq!(
        merged.points(),
        pts(&[(0.0, -1.0), (0.0, 1.0), (2.0, 0.0)]).as_slice()
    );
    assert!(merged.is_convex());
}

#[test]
fn test_merge_leaves_inputs_untouched() {
    let left = hull(&[(0.0, 0.0), (1.0, 2.0), (1.0, -1.0)]);
    let right = hull(&[(4.0, 1.0), (5.0, 3.0), (6.0, 0.0)]);
    let (left_before, right_before) = (left.clone(), right.clone());

    let merged = merge(&left, &right);
    assert_eq!(left, left_before);
    assert_eq!(right, right_before);
    assert_eq!(
        merged.points(),
        pts(&[(0.0, 0.0), (1.0, 2.0), (5.0, 3.0), (6.0, 0.0), (1.0, -1.0)]).as_slice()
    );
}
