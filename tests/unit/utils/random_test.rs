use super::*;

#[test]
fn can_generate_uniform_int_within_bounds() {
    let random = DefaultRandom::default();

    for _ in 0..100 {
        let value = random.uniform_int(-5, 5);
        assert!((-5..=5).contains(&value));
    }

    assert_eq!(random.uniform_int(3, 3), 3);
}

#[test]
fn can_generate_uniform_real_within_bounds() {
    let random = DefaultRandom::default();

    for _ in 0..100 {
        let value = random.uniform_real(0., 1.);
        assert!((0. ..1.).contains(&value));
    }
}

#[test]
fn can_reproduce_sequence_with_same_seed() {
    let mut first = RandomGen::new_with_seed(42);
    let mut second = RandomGen::new_with_seed(42);

    assert_eq!(first.next_u64(), second.next_u64());
    assert_eq!(first.next_u32(), second.next_u32());
}
