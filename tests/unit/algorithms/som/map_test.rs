use super::*;
use crate::helpers::{constant_factory, scalar_averager, scalar_distance};
use crate::utils::{DefaultRandom, Random};

fn create_test_map(map_side: usize, initial: Float) -> SelfOrgMap<Float> {
    SelfOrgMap::new(
        SomConfig::new_with_defaults(map_side),
        constant_factory(initial),
        scalar_distance(),
        scalar_averager(),
    )
}

#[test]
fn can_populate_every_cell_from_factory() {
    let map = create_test_map(3, 7.);

    for x in 0..map.get_map_width() {
        for y in 0..map.get_map_height() {
            assert_eq!(*map.get_node(x, y), 7.);
        }
    }
}

#[test]
fn can_keep_dimensions_invariant_across_training() {
    let mut map = create_test_map(3, 0.);
    let random = DefaultRandom::default();

    for _ in 0..100 {
        map.train(&random.uniform_real(0., 10.));
    }

    assert_eq!(map.get_map_width(), 3);
    assert_eq!(map.get_map_height(), 3);
    assert_eq!(map.get_current_time(), 100);
}

#[test]
fn can_move_best_matching_prototype_towards_sample() {
    let mut map = create_test_map(3, 0.);
    let sample = 5.;

    let Coordinate(x, y) = map.best_for(&sample);
    let before = (sample - map.get_node(x, y)).abs();

    map.train(&sample);

    let Coordinate(x, y) = map.best_for(&sample);
    let after = (sample - map.get_node(x, y)).abs();

    assert!(after < before);
}

#[test]
fn can_prefer_first_minimum_in_scan_order_on_ties() {
    // all prototypes are identical, so every cell matches equally well
    let map = create_test_map(3, 1.);

    assert_eq!(map.best_for(&1.), Coordinate(0, 0));
    assert_eq!(map.best_for(&42.), Coordinate(0, 0));
}

#[test]
fn can_shrink_update_magnitude_as_training_proceeds() {
    let mut map = create_test_map(1, 0.);
    let sample = 1000.;

    let mut movements = vec![];
    for _ in 0..5 {
        let before = *map.get_node(0, 0);
        map.train(&sample);
        movements.push((map.get_node(0, 0) - before).abs());
    }

    assert!(movements.windows(2).all(|pair| pair[1] < pair[0]));
}
