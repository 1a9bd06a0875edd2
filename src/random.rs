//! Random sources
//!
//!     Generation consumes randomness through the [`RandomSource`] capability: an
//!     inclusive bounded draw, reseeding, and the largest representable output. Given a
//!     fixed seed and call sequence, every provider is deterministic, which is what makes
//!     generated output reproducible.
//!
//!     Two providers are interchangeable behind the trait: a linear-congruential
//!     generator for cheap reproducible draws, and MT19937 for better statistical
//!     quality. The core never constructs a provider itself; callers inject one, and a
//!     shared provider is the caller's to serialize.

use std::collections::VecDeque;

/// The injected randomness capability the generator tree draws from.
pub trait RandomSource {
    /// A draw in `[min, max]`, inclusive on both ends. When `max <= min` the
    /// draw is `min`.
    fn generate(&mut self, min: u64, max: u64) -> u64;

    /// Resets the provider to a reproducible state.
    fn seed(&mut self, value: u64);

    /// The largest value the provider can produce.
    fn max_value(&self) -> u64;
}

/// Linear-congruential provider (glibc constants, modulus 2^31).
#[derive(Debug, Clone)]
pub struct SimpleRandom {
    state: u64,
}

impl SimpleRandom {
    const MULTIPLIER: u64 = 1_103_515_245;
    const INCREMENT: u64 = 12_345;
    const MODULUS: u64 = 1 << 31;

    pub fn new(seed: u64) -> Self {
        SimpleRandom {
            state: seed % Self::MODULUS,
        }
    }

    fn next(&mut self) -> u64 {
        self.state = (Self::MULTIPLIER * self.state + Self::INCREMENT) % Self::MODULUS;
        self.state
    }
}

impl RandomSource for SimpleRandom {
    fn generate(&mut self, min: u64, max: u64) -> u64 {
        if max <= min {
            return min;
        }
        let span = max - min + 1;
        min + self.next() % span
    }

    fn seed(&mut self, value: u64) {
        self.state = value % Self::MODULUS;
    }

    fn max_value(&self) -> u64 {
        Self::MODULUS - 1
    }
}

// MT19937 parameters.
const MT_N: usize = 624;
const MT_M: usize = 397;
const MT_MATRIX_A: u32 = 0x9908_b0df;
const MT_UPPER_MASK: u32 = 0x8000_0000;
const MT_LOWER_MASK: u32 = 0x7fff_ffff;

/// MT19937 provider (32-bit Mersenne Twister).
#[derive(Clone)]
pub struct MersenneTwister {
    state: [u32; MT_N],
    index: usize,
}

impl MersenneTwister {
    pub fn new(seed: u32) -> Self {
        let mut twister = MersenneTwister {
            state: [0; MT_N],
            index: MT_N,
        };
        twister.reseed(seed);
        twister
    }

    fn reseed(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..MT_N {
            let previous = self.state[i - 1];
            self.state[i] = 1_812_433_253u32
                .wrapping_mul(previous ^ (previous >> 30))
                .wrapping_add(i as u32);
        }
        self.index = MT_N;
    }

    fn twist(&mut self) {
        for i in 0..MT_N {
            let mixed =
                (self.state[i] & MT_UPPER_MASK) | (self.state[(i + 1) % MT_N] & MT_LOWER_MASK);
            let mut next = (mixed >> 1) ^ self.state[(i + MT_M) % MT_N];
            if mixed & 1 == 1 {
                next ^= MT_MATRIX_A;
            }
            self.state[i] = next;
        }
        self.index = 0;
    }

    fn next_u32(&mut self) -> u32 {
        if self.index >= MT_N {
            self.twist();
        }
        let mut value = self.state[self.index];
        self.index += 1;

        value ^= value >> 11;
        value ^= (value << 7) & 0x9d2c_5680;
        value ^= (value << 15) & 0xefc6_0000;
        value ^= value >> 18;
        value
    }
}

impl std::fmt::Debug for MersenneTwister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MersenneTwister")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl RandomSource for MersenneTwister {
    fn generate(&mut self, min: u64, max: u64) -> u64 {
        if max <= min {
            return min;
        }
        let span = max - min + 1;
        min + u64::from(self.next_u32()) % span
    }

    fn seed(&mut self, value: u64) {
        self.reseed(value as u32);
    }

    fn max_value(&self) -> u64 {
        u64::from(u32::MAX)
    }
}

/// Replays a fixed sequence of draws, then repeats the last one.
///
/// Not a random source at all; it exists so tests and bug reports can pin the exact
/// draw sequence a generation walk will see.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: VecDeque<u64>,
    last: u64,
}

impl SequenceRandom {
    pub fn new(values: &[u64]) -> Self {
        SequenceRandom {
            values: values.iter().copied().collect(),
            last: values.last().copied().unwrap_or(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn generate(&mut self, min: u64, max: u64) -> u64 {
        let raw = self.values.pop_front().unwrap_or(self.last);
        raw.clamp(min, max.max(min))
    }

    fn seed(&mut self, _value: u64) {}

    fn max_value(&self) -> u64 {
        u64::MAX
    }
}
