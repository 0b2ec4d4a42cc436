use std::hash::Hasher;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over little-endian encodings, so digests match across platforms.
///
/// Differently seeded instances give independent streams for wider digests.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64 {
    state: u64,
}

impl Default for Fnv1a64 {
    fn default() -> Self {
        Self::with_seed(FNV_OFFSET)
    }
}

impl Fnv1a64 {
    pub(crate) fn with_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    pub(crate) fn write_len(&mut self, len: usize) {
        self.write(&(len as u64).to_le_bytes());
    }

    /// Feed the bit pattern of `v`; `-0.0` is folded into `0.0`.
    pub(crate) fn write_coord(&mut self, v: f64) {
        let v = if v == 0.0 { 0.0 } else { v };
        self.write(&v.to_bits().to_le_bytes());
    }
}

impl Hasher for Fnv1a64 {
    fn write(&mut self, bytes: &[u8]) {
        self.state = bytes.iter().fold(self.state, |h, &b| {
            (h ^ u64::from(b)).wrapping_mul(FNV_PRIME)
        });
    }

    fn finish(&self) -> u64 {
        self.state
    }
}

/// Round a coordinate to the nearest device pixel boundary for `scale`.
pub(crate) fn snap_to_grid(v: f64, scale: f64) -> f64 {
    if !v.is_finite() {
        return v;
    }
    (v * scale).round() / scale
}
