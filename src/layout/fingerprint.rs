use std::hash::Hasher;

use crate::{foundation::math::Fnv1a64, layout::geometry::ContentGeometry};

/// 128-bit digest of a [`ContentGeometry`], used to check that a layout pass
/// reproduces the same geometry for the same inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GeometryFingerprint {
    /// First hash stream.
    pub hi: u64,
    /// Second, differently seeded hash stream.
    pub lo: u64,
}

/// Hash the ideal size and every frame origin and size of `geometry`.
pub fn fingerprint_geometry(geometry: &ContentGeometry) -> GeometryFingerprint {
    let mut streams = [Fnv1a64::default(), Fnv1a64::with_seed(0x9ae1_6a3b_2f90_404f)];

    let size = geometry.ideal_size;
    for h in &mut streams {
        h.write_len(geometry.frames.len());
        h.write_coord(size.width);
        h.write_coord(size.height);
        for f in &geometry.frames {
            for v in [f.origin.x, f.origin.y, f.size.width, f.size.height] {
                h.write_coord(v);
            }
        }
    }

    let [hi, lo] = streams.map(|h| h.finish());
    GeometryFingerprint { hi, lo }
}
