//! Deterministic inputs for benchmarks and tests.

use radar_content::ContentRegistry;
use radar_core::constants::{DIMENSION_COUNT, LEVEL_COUNT};
use radar_core::{Level, Locale, RiskVector};

/// Every possible risk vector (5^5), in lexicographic order.
pub fn all_vectors() -> Vec<RiskVector> {
    let total = LEVEL_COUNT.pow(DIMENSION_COUNT as u32);
    (0..total).map(vector_at).collect()
}

/// The `n`-th vector in lexicographic order; wraps past the last one.
pub fn vector_at(n: usize) -> RiskVector {
    let mut levels = [Level::MIN; DIMENSION_COUNT];
    let mut rest = n;
    for slot in levels.iter_mut().rev() {
        *slot = Level::saturating((rest % LEVEL_COUNT) as i64);
        rest /= LEVEL_COUNT;
    }
    RiskVector::new(levels)
}

/// `count` pseudo-random vectors. Same seed, same vectors.
pub fn random_vectors(count: usize, seed: u64) -> Vec<RiskVector> {
    let mut rng = SimpleRng::new(seed);
    (0..count)
        .map(|_| {
            let mut levels = [Level::MIN; DIMENSION_COUNT];
            for slot in &mut levels {
                *slot = Level::saturating((rng.next_u64() % LEVEL_COUNT as u64) as i64);
            }
            RiskVector::new(levels)
        })
        .collect()
}

/// Vectors of the built-in presets for `locale`.
pub fn preset_vectors(locale: Locale) -> Vec<(String, RiskVector)> {
    let registry = ContentRegistry::builtin();
    match registry.bundle(locale) {
        Ok(bundle) => bundle
            .presets()
            .iter()
            .map(|p| (p.slug.clone(), p.values))
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// xorshift64.
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}
