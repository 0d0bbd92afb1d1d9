use super::{SCALABLE_SIZES, SizeList, points_to_pixels};

fn strictly_ascending(list: &SizeList) -> bool {
    list.as_slice().windows(2).all(|w| w[0] < w[1])
}

#[test]
fn scalable_pixel_exact_matches_reference() {
    let list = SizeList::scalable(&SCALABLE_SIZES, None);
    assert_eq!(list.as_slice(), &SCALABLE_SIZES);
    assert!(strictly_ascending(&list));
}

#[test]
fn scalable_at_96_dpi_converts_points() {
    let list = SizeList::scalable(&SCALABLE_SIZES, Some(96));
    assert_eq!(list.as_slice(), &[11, 13, 16, 32, 48, 64, 85, 96, 128]);
    assert!(strictly_ascending(&list));
}

#[test]
fn scalable_at_72_dpi_is_identity() {
    let list = SizeList::scalable(&SCALABLE_SIZES, Some(72));
    assert_eq!(list.as_slice(), &SCALABLE_SIZES);
}

#[test]
fn low_dpi_collisions_are_deduplicated() {
    // At 9 dpi, 8pt and 10pt both round to 1px.
    let list = SizeList::scalable(&[8, 10, 96], Some(9));
    assert_eq!(list.as_slice(), &[1, 12]);
}

#[test]
fn points_to_pixels_rounds_to_nearest() {
    assert_eq!(points_to_pixels(10, 96), 13);
    assert_eq!(points_to_pixels(12, 96), 16);
    assert_eq!(points_to_pixels(64, 96), 85);
}

#[test]
fn strikes_are_sorted_ascending() {
    let list = SizeList::from_strikes([16, 10, 13]);
    assert_eq!(list.as_slice(), &[10, 13, 16]);
    assert_eq!(list.len(), 3);
}

#[test]
fn zero_sizes_are_dropped() {
    let list = SizeList::from_strikes([0, 12]);
    assert_eq!(list.as_slice(), &[12]);
}

#[test]
fn no_strikes_gives_empty_list() {
    let list = SizeList::from_strikes(std::iter::empty());
    assert!(list.is_empty());
    assert_eq!(list.first(), None);
}

#[test]
fn body_index_picks_largest_not_exceeding() {
    let list = SizeList::scalable(&SCALABLE_SIZES, None);
    assert_eq!(list.body_index(12), 2);
    assert_eq!(list.body_index(20), 2);
    assert_eq!(list.body_index(24), 3);
    assert_eq!(list.body_index(1000), 8);
}

#[test]
fn body_index_falls_back_to_zero() {
    let list = SizeList::from_strikes([20, 30]);
    assert_eq!(list.body_index(12), 0);
    assert_eq!(SizeList::default().body_index(12), 0);
}

#[test]
fn body_size_snaps_to_listed_size() {
    let strikes = SizeList::from_strikes([10, 13, 16]);
    assert_eq!(strikes.body_size(12), Some(10));
    assert_eq!(strikes.body_size(13), Some(13));
    assert_eq!(strikes.body_size(8), Some(10));
    let scalable = SizeList::scalable(&SCALABLE_SIZES, None);
    assert_eq!(scalable.body_size(12), Some(12));
    assert_eq!(SizeList::default().body_size(12), None);
}

#[test]
fn iterates_by_value() {
    let list = SizeList::from_sizes([3, 1, 2]);
    let collected: Vec<u32> = (&list).into_iter().collect();
    assert_eq!(collected, vec![1, 2, 3]);
    assert_eq!(list.iter().sum::<u32>(), 6);
    assert_eq!(list.get(1), Some(2));
    assert_eq!(list.get(3), None);
}
