//! Deterministic feature-hashing embedder.
//!
//! No model weights, no network: each lowercased alphanumeric token is
//! hashed into one of `dimension` buckets with SipHash-1-3 under fixed
//! seeds, a second hash picks the sign, and the result is L2-normalized.
//! The same text always embeds to the same vector, which keeps scoring
//! reproducible across runs and in tests.

use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use siphasher::sip::SipHasher13;

use super::{EmbedError, Embedder};

// Fixed seeds. Changing either value changes every embedding, so the job
// catalog and résumé vectors must always come from the same build.
const HASH_SEED_K0: u64 = 0x7265_7375_6d65_6d61;
const HASH_SEED_K1: u64 = 0x6a6f_626d_6174_6368;

const DEFAULT_DIMENSION: usize = 256;

pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    fn hash_token(&self, token: &str) -> usize {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K0, HASH_SEED_K1);
        token.hash(&mut hasher);
        (hasher.finish() as usize) % self.dimension
    }

    fn embed_sync(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];

        for token in tokenize(text) {
            let idx = self.hash_token(&token);
            // Sign hashing: spreads colliding tokens across +/- so buckets
            // do not grow monotonically with document length.
            let sign = if self.hash_token(&format!("{token}#sign")) % 2 == 0 {
                1.0
            } else {
                -1.0
            };
            vector[idx] += sign;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        vector
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    fn name(&self) -> &'static str {
        "hash"
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        Ok(self.embed_sync(text))
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}
