//! Fixed-stride overlapping chunking for indexing

use crate::error::ExtractorError;

/// Default chunk size in characters
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Default overlap between consecutive chunks in characters
pub const DEFAULT_OVERLAP: usize = 200;

/// Splits a document's text into overlapping fixed-size windows
///
/// Chunk boundaries are `start = i * (chunk_size - overlap)` for increasing
/// `i`; every chunk is at most `chunk_size` characters and consecutive
/// chunks share `overlap` characters of context. The final chunk may be
/// shorter. Concatenating the chunks with the overlap removed reconstructs
/// the input exactly.
///
/// Sizes are counted in Unicode scalar values, not bytes.
#[derive(Debug, Clone)]
pub struct Chunker {
    chunk_size: usize,
    overlap: usize,
}

impl Chunker {
    /// Create a chunker, enforcing `chunk_size > overlap > 0`
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self, ExtractorError> {
        if overlap == 0 {
            return Err(ExtractorError::InvalidChunking(
                "overlap must be greater than 0".to_string(),
            ));
        }
        if chunk_size <= overlap {
            return Err(ExtractorError::InvalidChunking(format!(
                "chunk_size {} must be greater than overlap {}",
                chunk_size, overlap
            )));
        }
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// The configured chunk size
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// The configured overlap
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Split text into overlapping chunks
    ///
    /// Empty text yields an empty sequence. Chunking stops once a chunk
    /// reaches the end of the text, so no pure-overlap tail chunk is
    /// emitted.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }

        let stride = self.chunk_size - self.overlap;
        let mut chunks = Vec::new();
        let mut start = 0;

        loop {
            let end = (start + self.chunk_size).min(chars.len());
            chunks.push(chars[start..end].iter().collect());

            if start + self.chunk_size >= chars.len() {
                break;
            }
            start += stride;
        }

        chunks
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reassemble chunks by dropping each subsequent chunk's leading overlap
    fn reconstruct(chunks: &[String], overlap: usize) -> String {
        let mut out = String::new();
        for (i, chunk) in chunks.iter().enumerate() {
            if i == 0 {
                out.push_str(chunk);
            } else {
                out.extend(chunk.chars().skip(overlap));
            }
        }
        out
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let chunker = Chunker::default();
        assert!(chunker.chunk("").is_empty());
    }

    #[test]
    fn test_short_text_yields_single_chunk() {
        let chunker = Chunker::default();
        let chunks = chunker.chunk("short text");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], "short text");
    }

    #[test]
    fn test_exact_chunk_size_yields_single_chunk() {
        let chunker = Chunker::new(10, 3).unwrap();
        let text = "a".repeat(10);
        let chunks = chunker.chunk(&text);
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn test_consecutive_chunks_share_overlap() {
        let chunker = Chunker::new(10, 4).unwrap();
        let text: String = ('a'..='z').collect();
        let chunks = chunker.chunk(&text);

        for pair in chunks.windows(2) {
            let tail: String = pair[0].chars().skip(pair[0].chars().count() - 4).collect();
            let head: String = pair[1].chars().take(4).collect();
            assert_eq!(tail, head);
        }
    }

    #[test]
    fn test_chunk_count_formula() {
        // len 1700, size 1000, overlap 200 -> ceil(1500 / 800) = 2
        let chunker = Chunker::default();
        let text = "x".repeat(1700);
        assert_eq!(chunker.chunk(&text).len(), 2);

        // len 1801 -> ceil(1601 / 800) = 3
        let text = "x".repeat(1801);
        assert_eq!(chunker.chunk(&text).len(), 3);
    }

    #[test]
    fn test_no_pure_overlap_tail_chunk() {
        // len 1000 exactly: the stride would land at 800, inside the final
        // overlap window, but the first chunk already covers the whole text
        let chunker = Chunker::default();
        let text = "x".repeat(1000);
        assert_eq!(chunker.chunk(&text).len(), 1);
    }

    #[test]
    fn test_every_chunk_within_size_limit() {
        let chunker = Chunker::new(50, 10).unwrap();
        let text = "lorem ipsum dolor sit amet ".repeat(20);
        for chunk in chunker.chunk(&text) {
            assert!(chunk.chars().count() <= 50);
        }
    }

    #[test]
    fn test_reconstruction() {
        let chunker = Chunker::new(12, 5).unwrap();
        let text = "The parties agree to the terms set forth herein.";
        let chunks = chunker.chunk(text);
        assert_eq!(reconstruct(&chunks, 5), text);
    }

    #[test]
    fn test_multibyte_text_chunked_by_chars() {
        let chunker = Chunker::new(4, 2).unwrap();
        let text = "héllø wörld ünïcode";
        let chunks = chunker.chunk(text);

        for chunk in &chunks {
            assert!(chunk.chars().count() <= 4);
        }
        assert_eq!(reconstruct(&chunks, 2), text);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(Chunker::new(10, 0).is_err());
        assert!(Chunker::new(10, 10).is_err());
        assert!(Chunker::new(5, 10).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: de-overlap concatenation reconstructs the input exactly
        #[test]
        fn test_reconstruction_property(
            text in ".{0,400}",
            chunk_size in 2usize..64,
            overlap_frac in 1usize..64,
        ) {
            let overlap = (overlap_frac % (chunk_size - 1)).max(1);
            let chunker = Chunker::new(chunk_size, overlap).unwrap();
            let chunks = chunker.chunk(&text);

            let mut out = String::new();
            for (i, chunk) in chunks.iter().enumerate() {
                if i == 0 {
                    out.push_str(chunk);
                } else {
                    out.extend(chunk.chars().skip(overlap));
                }
            }
            prop_assert_eq!(out, text);
        }

        /// Property: chunk count matches the closed-form formula
        #[test]
        fn test_chunk_count_property(
            len in 0usize..500,
            chunk_size in 2usize..64,
            overlap_frac in 1usize..64,
        ) {
            let overlap = (overlap_frac % (chunk_size - 1)).max(1);
            let stride = chunk_size - overlap;
            let text = "a".repeat(len);

            let chunker = Chunker::new(chunk_size, overlap).unwrap();
            let actual = chunker.chunk(&text).len();

            let expected = if len == 0 {
                0
            } else if len <= chunk_size {
                1
            } else {
                (len - overlap).div_ceil(stride)
            };
            prop_assert_eq!(actual, expected);
        }
    }
}
