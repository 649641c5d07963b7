use xxhash_rust::xxh3::Xxh3;

use crate::{
    composition::model::SceneTree,
    foundation::error::{ReelError, ReelResult},
};

const XXH3_SEED: u64 = 0x7f4a_7c15_9e37_79b9;

/// Stable 128-bit digest of an evaluated scene tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Hash the canonical JSON encoding of `tree`.
///
/// Field order in the encoding is fixed by the type definitions, so equal trees always
/// produce equal fingerprints.
pub fn fingerprint_tree(tree: &SceneTree) -> ReelResult<FrameFingerprint> {
    let bytes = serde_json::to_vec(tree)
        .map_err(|e| ReelError::serde(format!("encode scene tree: {e}")))?;
    let mut h = Xxh3::with_seed(XXH3_SEED);
    h.update(&bytes);
    let v = h.digest128();
    Ok(FrameFingerprint {
        hi: (v >> 64) as u64,
        lo: v as u64,
    })
}

/// Fold per-frame fingerprints, in order, into one digest.
pub fn combine_fingerprints(prints: &[FrameFingerprint]) -> FrameFingerprint {
    let mut h = Xxh3::with_seed(XXH3_SEED);
    for p in prints {
        h.update(&p.hi.to_le_bytes());
        h.update(&p.lo.to_le_bytes());
    }
    let v = h.digest128();
    FrameFingerprint {
        hi: (v >> 64) as u64,
        lo: v as u64,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
