use super::{Point, Rect};

#[test]
fn contains_interior_point() {
    let r = Rect::new(10.0, 20.0, 5.0, 8.0);
    assert!(r.contains(Point::new(12.0, 24.0)));
}

#[test]
fn left_and_top_edges_are_inside() {
    let r = Rect::new(10.0, 20.0, 5.0, 8.0);
    assert!(r.contains(Point::new(10.0, 20.0)));
}

#[test]
fn right_and_bottom_edges_are_outside() {
    let r = Rect::new(10.0, 20.0, 5.0, 8.0);
    assert!(!r.contains(Point::new(15.0, 24.0)));
    assert!(!r.contains(Point::new(12.0, 28.0)));
}

#[test]
fn adjacent_rects_do_not_share_a_point() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(10.0, 0.0, 10.0, 10.0);
    let p = Point::new(10.0, 5.0);
    assert!(!a.contains(p));
    assert!(b.contains(p));
}

#[test]
fn empty_rect_contains_nothing() {
    let r = Rect::new(0.0, 0.0, 0.0, 10.0);
    assert!(r.is_empty());
    assert!(!r.contains(Point::new(0.0, 0.0)));
}

#[test]
fn edges() {
    let r = Rect::new(1.5, 2.0, 3.0, 4.0);
    assert!((r.right() - 4.5).abs() < f32::EPSILON);
    assert!((r.bottom() - 6.0).abs() < f32::EPSILON);
}
