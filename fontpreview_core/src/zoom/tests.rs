use super::{ZoomController, ZoomDirection};

fn controller(len: usize, start: usize) -> ZoomController {
    let mut z = ZoomController::new();
    z.reset(len, start);
    z
}

#[test]
fn new_controller_is_at_both_bounds() {
    let z = ZoomController::new();
    assert!(z.is_empty());
    assert!(z.at_min());
    assert!(z.at_max());
}

#[test]
fn reset_uses_default_index() {
    let z = controller(9, 2);
    assert_eq!(z.index(), 2);
    assert!(!z.at_min());
    assert!(!z.at_max());
}

#[test]
fn reset_clamps_default_index() {
    let z = controller(3, 10);
    assert_eq!(z.index(), 2);
    assert!(z.at_max());
}

#[test]
fn zoom_in_advances_until_max() {
    let mut z = controller(3, 0);
    assert!(z.zoom_in());
    assert!(z.zoom_in());
    assert_eq!(z.index(), 2);
    assert!(z.at_max());
}

#[test]
fn zoom_in_at_max_is_noop() {
    let mut z = controller(3, 2);
    let before = z;
    assert!(!z.zoom_in());
    assert_eq!(z, before);
    assert!(z.at_max());
}

#[test]
fn zoom_out_at_min_is_noop() {
    let mut z = controller(3, 0);
    let before = z;
    assert!(!z.zoom_out());
    assert_eq!(z, before);
    assert!(z.at_min());
}

#[test]
fn single_entry_is_at_both_bounds() {
    let mut z = controller(1, 0);
    assert!(z.at_min());
    assert!(z.at_max());
    assert!(!z.zoom_in());
    assert!(!z.zoom_out());
    assert_eq!(z.index(), 0);
}

#[test]
fn empty_list_never_moves() {
    let mut z = controller(0, 4);
    assert_eq!(z.index(), 0);
    assert!(!z.zoom_in());
    assert!(!z.zoom_out());
}

#[test]
fn index_stays_in_range_under_any_sequence() {
    let mut z = controller(5, 2);
    let steps = [
        ZoomDirection::In,
        ZoomDirection::In,
        ZoomDirection::In,
        ZoomDirection::In,
        ZoomDirection::Out,
        ZoomDirection::Out,
        ZoomDirection::Out,
        ZoomDirection::Out,
        ZoomDirection::Out,
        ZoomDirection::Out,
        ZoomDirection::In,
    ];
    for dir in steps {
        z.step(dir);
        assert!(z.index() < z.len());
    }
    assert_eq!(z.index(), 1);
}

#[test]
fn clear_forgets_list() {
    let mut z = controller(5, 3);
    z.clear();
    assert!(z.is_empty());
    assert_eq!(z.index(), 0);
    assert!(z.at_min() && z.at_max());
}

#[test]
fn wheel_delta_direction() {
    assert_eq!(ZoomDirection::from_wheel(120.0), Some(ZoomDirection::In));
    assert_eq!(ZoomDirection::from_wheel(-1.0), Some(ZoomDirection::Out));
    assert_eq!(ZoomDirection::from_wheel(0.0), None);
}
