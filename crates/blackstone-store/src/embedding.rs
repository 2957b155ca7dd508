//! Embedding models for text vectorization
//!
//! The pipeline normally delegates embedding to an external capability; the
//! synthetic model here is the deterministic fallback that keeps the
//! pipeline operable without it. Synthetic vectors carry no semantic
//! meaning - tests may assert determinism and shape, never semantic
//! similarity.

use blackstone_domain::traits::EmbeddingProvider;
use std::convert::Infallible;
use tracing::warn;

/// Default synthetic embedding dimension
pub const DEFAULT_DIMENSION: usize = 384;

/// Deterministic synthetic embedding model
///
/// Dimension `j` of the vector is the mean over the text's characters `c`
/// of `((codepoint(c) * (j + 1)) mod 256) / 256`, which keeps every
/// component in `[0, 1)`. Properties:
///
/// - **Deterministic**: same text always produces the same vector
/// - **Fixed shape**: always `dimension` components
/// - **Non-semantic**: similar meaning does not imply similar vectors
///
/// Empty text yields the zero vector; the vector store guards its undefined
/// cosine similarity to 0.0.
#[derive(Debug, Clone)]
pub struct SyntheticEmbedding {
    dimension: usize,
}

impl SyntheticEmbedding {
    /// Create a synthetic embedding model with the given dimension
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Default for SyntheticEmbedding {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl EmbeddingProvider for SyntheticEmbedding {
    type Error = Infallible;

    fn embed(&self, text: &str) -> Result<Vec<f32>, Self::Error> {
        let codepoints: Vec<u64> = text.chars().map(|c| c as u64).collect();
        if codepoints.is_empty() {
            return Ok(vec![0.0; self.dimension]);
        }

        let n = codepoints.len() as f64;
        let embedding = (0..self.dimension)
            .map(|j| {
                let sum: u64 = codepoints
                    .iter()
                    .map(|&cp| (cp * (j as u64 + 1)) % 256)
                    .sum();
                ((sum as f64 / n) / 256.0) as f32
            })
            .collect();

        Ok(embedding)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Embedding provider that falls back to the synthetic model
///
/// Tries the primary (typically remote) provider first; any failure is
/// logged and degrades to the synthetic model, so indexing and search keep
/// working when the external capability is unavailable.
#[derive(Debug, Clone)]
pub struct FallbackEmbedding<P> {
    primary: P,
    fallback: SyntheticEmbedding,
}

impl<P> FallbackEmbedding<P>
where
    P: EmbeddingProvider,
    P::Error: std::fmt::Display,
{
    /// Wrap a primary provider with a synthetic fallback
    ///
    /// The fallback uses the primary's dimension so records stay
    /// comparable regardless of which path produced them.
    pub fn new(primary: P) -> Self {
        let dimension = primary.dimension();
        Self {
            primary,
            fallback: SyntheticEmbedding::new(dimension),
        }
    }
}

impl<P> EmbeddingProvider for FallbackEmbedding<P>
where
    P: EmbeddingProvider,
    P::Error: std::fmt::Display,
{
    type Error = Infallible;

    fn embed(&self, text: &str) -> Result<Vec<f32>, Self::Error> {
        match self.primary.embed(text) {
            Ok(embedding) => Ok(embedding),
            Err(e) => {
                warn!("Embedding capability failed, using synthetic fallback: {}", e);
                self.fallback.embed(text)
            }
        }
    }

    fn dimension(&self) -> usize {
        self.primary.dimension()
    }
}

/// Calculate cosine similarity between two embedding vectors
///
/// Returns `dot(a, b) / (|a| * |b|)` in `[-1, 1]`. Zero-magnitude inputs
/// (and any non-finite intermediate) are guarded to 0.0 rather than
/// producing NaN.
///
/// # Panics
///
/// Panics if the vectors have different lengths.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vectors must have same length");

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    let similarity = dot_product / (magnitude_a * magnitude_b);
    if similarity.is_finite() {
        similarity
    } else {
        0.0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: embedding is deterministic and correctly shaped
        #[test]
        fn test_embedding_shape_and_determinism(text in ".{0,200}") {
            let model = SyntheticEmbedding::new(64);
            let a = model.embed(&text).unwrap();
            let b = model.embed(&text).unwrap();

            prop_assert_eq!(a.len(), 64);
            prop_assert_eq!(&a, &b);
            prop_assert!(a.iter().all(|v| (0.0..1.0).contains(v)));
        }
    }
}
