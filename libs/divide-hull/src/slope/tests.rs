use super::*;

fn naive_slope(a: Point, b: Point) -> f64 {
    (b.y - a.y) / (b.x - a.x)
}

#[test]
fn test_matches_division_for_right_side_candidates() {
    let pivot = Point::new(1.0, 1.0);
    let candidates = [
        Point::new(2.0, 5.0),
        Point::new(3.0, 0.0),
        Point::new(4.0, 1.5),
        Point::new(10.0, -7.0),
    ];
    for &a in &candidates {
        for &b in &candidates {
            let expected = naive_slope(pivot, a)
                .partial_cmp(&naive_slope(pivot, b))
                .unwrap();
            assert_eq!(compare_slopes(pivot, a, b), expected, "{a} vs {b}");
        }
    }
}

#[test]
fn test_matches_division_for_left_side_candidates() {
    let pivot = Point::new(5.0, 0.0);
    let candidates = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 4.0),
        Point::new(4.0, -2.0),
        Point::new(-3.0, 9.0),
    ];
    for &a in &candidates {
        for &b in &candidates {
            let expected = naive_slope(pivot, a)
                .partial_cmp(&naive_slope(pivot, b))
                .unwrap();
            assert_eq!(compare_slopes(pivot, a, b), expected, "{a} vs {b}");
        }
    }
}

#[test]
fn test_vertical_candidates_are_extreme() {
    let pivot = Point::new(0.0, 0.0);
    let up = Point::new(0.0, 2.0);
    let down = Point::new(0.0, -2.0);

    let right = Point::new(1.0, 100.0);
    assert_eq!(compare_slopes(pivot, up, right), Ordering::Greater);
    assert_eq!(compare_slopes(pivot, down, Point::new(1.0, -100.0)), Ordering::Less);

    let left = Point::new(-1.0, 100.0);
    assert_eq!(compare_slopes(pivot, up, left), Ordering::Less);
    assert_eq!(compare_slopes(pivot, down, Point::new(-1.0, -100.0)), Ordering::Greater);
}

#[test]
fn test_collinear_candidates_compare_equal() {
    let pivot = Point::new(0.0, 0.0);
    assert_eq!(
        compare_slopes(pivot, Point::new(1.0, 2.0), Point::new(3.0, 6.0)),
        Ordering::Equal
    );
    assert_eq!(compare_slopes(pivot, pivot, Point::new(3.0, 6.0)), Ordering::Equal);
}
