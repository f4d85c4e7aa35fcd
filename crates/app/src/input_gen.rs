//! Sample data for the `demo` command.
//!
//! The generated bytes mix distributions that lead to very different code
//! tables, so the demo shows short codes, long codes and near-8-bit codes
//! in one run:
//! - Runs of a single byte (one dominant symbol)
//! - Text drawn from an English-like skewed letter distribution
//! - Uniform random bytes (close to 8 bits per byte)

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Rough English letter weights, space first.
const TEXT_WEIGHTS: &[(u8, u32)] = &[
    (b' ', 180),
    (b'e', 100),
    (b't', 72),
    (b'a', 65),
    (b'o', 60),
    (b'i', 56),
    (b'n', 54),
    (b's', 50),
    (b'h', 48),
    (b'r', 47),
    (b'd', 34),
    (b'l', 32),
    (b'u', 22),
    (b'c', 22),
    (b'm', 19),
    (b'w', 18),
    (b'f', 17),
    (b'g', 16),
    (b'y', 15),
    (b'p', 15),
    (b'b', 12),
    (b',', 10),
    (b'.', 9),
    (b'v', 8),
    (b'k', 6),
    (b'\n', 4),
    (b'x', 1),
    (b'j', 1),
    (b'q', 1),
    (b'z', 1),
];

/// Generate `size_bytes` of sample data, reproducible from `seed`.
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);
    let total_weight: u32 = TEXT_WEIGHTS.iter().map(|&(_, w)| w).sum();

    let mut remaining = size_bytes;
    while remaining > 0 {
        let chunk_size = remaining.min(4096);

        match rng.gen_range(0..10u8) {
            // 20% runs
            0..=1 => {
                let byte_value: u8 = rng.gen();
                data.extend(std::iter::repeat(byte_value).take(chunk_size));
            }

            // 60% text
            2..=7 => {
                for _ in 0..chunk_size {
                    data.push(pick_weighted(&mut rng, total_weight));
                }
            }

            // 20% noise
            _ => {
                data.extend((0..chunk_size).map(|_| rng.gen::<u8>()));
            }
        }

        remaining -= chunk_size;
    }

    data
}

fn pick_weighted(rng: &mut ChaCha8Rng, total_weight: u32) -> u8 {
    let mut roll = rng.gen_range(0..total_weight);
    for &(byte, weight) in TEXT_WEIGHTS {
        if roll < weight {
            return byte;
        }
        roll -= weight;
    }
    b' '
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_size() {
        for size in [0, 1, 100, 4096, 4097, 100_000] {
            assert_eq!(generate_sample_data(999, size).len(), size);
        }
    }

    #[test]
    fn test_determinism() {
        assert_eq!(generate_sample_data(12345, 5000), generate_sample_data(12345, 5000));
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(generate_sample_data(1, 1000), generate_sample_data(2, 1000));
    }

    #[test]
    fn test_weighted_pick_stays_in_alphabet() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let total: u32 = TEXT_WEIGHTS.iter().map(|&(_, w)| w).sum();
        for _ in 0..1000 {
            let byte = pick_weighted(&mut rng, total);
            assert!(TEXT_WEIGHTS.iter().any(|&(b, _)| b == byte));
        }
    }
}
