/// Source of uniformly distributed values used for score jitter and the
/// simulated image analysis.
pub trait NoiseSource: Send {
    /// Next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Integer in `[low, low + span)`, mirroring `floor(low + unit * span)`.
    fn next_in(&mut self, low: i32, span: u32) -> i32 {
        if span == 0 {
            return low;
        }
        let offset = (self.next_unit() * f64::from(span)).floor() as i64;
        let offset = offset.clamp(0, i64::from(span) - 1);
        (i64::from(low) + offset) as i32
    }
}

/// Deterministic splitmix64 generator.
#[derive(Debug, Clone)]
pub struct SeededNoise {
    state: u64,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn from_entropy() -> Self {
        let bits = uuid::Uuid::new_v4().as_u128();
        Self::new((bits >> 64) as u64 ^ bits as u64)
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl NoiseSource for SeededNoise {
    fn next_unit(&mut self) -> f64 {
        // 53 high bits give every representable double in [0, 1).
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Constant noise, handy for pinning the score in tests and audits.
#[derive(Debug, Clone, Copy)]
pub struct FixedNoise(f64);

impl FixedNoise {
    pub fn new(value: f64) -> Self {
        let value = if value.is_finite() {
            value.clamp(0.0, 0.999_999)
        } else {
            0.5
        };
        Self(value)
    }

    /// Zero jitter on the default `[-5, 4]` range and no suspicious image hits.
    pub fn neutral() -> Self {
        Self(0.5)
    }
}

impl NoiseSource for FixedNoise {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_noise_is_reproducible() {
        let mut first = SeededNoise::new(7);
        let mut second = SeededNoise::new(7);
        for _ in 0..32 {
            assert_eq!(first.next_unit().to_bits(), second.next_unit().to_bits());
        }
    }

    #[test]
    fn seeded_noise_stays_in_unit_interval() {
        let mut noise = SeededNoise::new(0xDEAD_BEEF);
        for _ in 0..1_000 {
            let value = noise.next_unit();
            assert!((0.0..1.0).contains(&value), "out of range: {value}");
        }
    }

    #[test]
    fn next_in_covers_the_requested_span() {
        let mut noise = SeededNoise::new(99);
        let mut seen = [false; 10];
        for _ in 0..2_000 {
            let value = noise.next_in(-5, 10);
            assert!((-5..=4).contains(&value));
            seen[(value + 5) as usize] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn neutral_noise_yields_zero_jitter() {
        let mut noise = FixedNoise::neutral();
        assert_eq!(noise.next_in(-5, 10), 0);
    }

    #[test]
    fn fixed_noise_clamps_out_of_range_values() {
        let mut high = FixedNoise::new(3.0);
        assert_eq!(high.next_in(-5, 10), 4);
        let mut low = FixedNoise::new(-1.0);
        assert_eq!(low.next_in(-5, 10), -5);
    }
}
