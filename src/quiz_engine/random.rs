//! Stateless random helpers used by question generators.
//!
//! Every function takes the RNG as an explicit `&mut impl Rng` so callers
//! stay in control of seeding — pass a seeded `StdRng` for reproducible
//! question sets, `thread_rng()` otherwise.

use rand::Rng;

/// Uniform integer in `[min(a, b), max(a, b)]` inclusive.
///
/// Argument order does not matter; `random_int(rng, 5, 1)` and
/// `random_int(rng, 1, 5)` draw from the same range.
pub fn random_int<R: Rng>(rng: &mut R, a: i64, b: i64) -> i64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.gen_range(lo..=hi)
}

/// Random lowercase letter `'a'..='z'`.
///
/// Drawn as a base-36 digit in `10..=35`, which map to 'a'..'z'.
pub fn random_char<R: Rng>(rng: &mut R) -> char {
    let digit = random_int(rng, 10, 35) as u8;
    (b'a' + (digit - 10)) as char
}

/// Return `items` with its elements uniformly reordered.
///
/// Fisher-Yates; replaces the biased comparator shuffle of the legacy
/// generator.
pub fn shuffled<R: Rng, T>(rng: &mut R, mut items: Vec<T>) -> Vec<T> {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
    items
}

/// Uniform pick from a slice; panics if the slice is empty.
pub fn random_element<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    assert!(!items.is_empty(), "random_element called on an empty slice");
    &items[rng.gen_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_int_ignores_argument_order() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = random_int(&mut rng, 5, 1);
            assert!((1..=5).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn random_int_covers_both_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let draws: Vec<i64> = (0..500).map(|_| random_int(&mut rng, 0, 3)).collect();
        assert!(draws.contains(&0));
        assert!(draws.contains(&3));
    }

    #[test]
    fn random_char_is_lowercase_letter() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let c = random_char(&mut rng);
            assert!(c.is_ascii_lowercase(), "not a-z: {}", c);
        }
    }

    #[test]
    fn shuffled_preserves_elements() {
        let mut rng = StdRng::seed_from_u64(1);
        let original: Vec<u32> = (0..20).collect();
        let mut reordered = shuffled(&mut rng, original.clone());
        reordered.sort_unstable();
        assert_eq!(reordered, original);
    }

    #[test]
    fn random_element_on_singleton_returns_it() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(*random_element(&mut rng, &["only"]), "only");
        }
    }
}
