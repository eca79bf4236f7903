//! Question vectorization
//!
//! This module turns catalog questions and incoming queries into vectors that
//! can be compared with cosine similarity. Two strategies are provided:
//! - TF-IDF, fit on the catalog questions at startup (always available)
//! - Dense sentence embeddings from `all-MiniLM-L6-v2` (requires the `dense` feature)
//!
//! # Examples
//!
//! ```rust
//! use faqbot::embeddings::create_vectorizer;
//! use faqbot::embeddings::Strategy;
//!
//! let questions = vec!["what is rust".to_string(), "bye".to_string()];
//! let vectorizer = create_vectorizer(Strategy::TfIdf, &questions).unwrap();
//! let corpus = vectorizer.embed_corpus(&questions).unwrap();
//! assert_eq!(corpus.len(), questions.len());
//! ```

#[cfg(feature = "dense")]
pub mod dense;
pub mod service_factory;
pub mod text_preprocessing;
pub mod tfidf;

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

#[cfg(feature = "dense")]
pub use dense::DenseVectorizer;
pub use service_factory::create_vectorizer;
pub use text_preprocessing::normalize_whitespace;
pub use tfidf::TfIdfVectorizer;

use crate::errors::Result;

/// Acceptance threshold for sentence-embedding similarity
pub const DENSE_THRESHOLD: f32 = 0.55;

/// Acceptance threshold for TF-IDF cosine similarity
pub const TFIDF_THRESHOLD: f32 = 0.20;

/// A single encoded text
pub type Vector = Vec<f32>;

/// One vector per catalog question, positionally aligned with the catalog
pub type VectorSet = Vec<Vector>;

/// Which vectorizer to build at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Strategy {
    /// Sparse TF-IDF vectors fit on the catalog
    #[default]
    #[serde(rename = "tfidf")]
    #[value(name = "tfidf")]
    TfIdf,
    /// Dense sentence embeddings (all-MiniLM-L6-v2)
    #[serde(rename = "dense")]
    #[value(name = "dense")]
    Dense,
}

impl Strategy {
    /// Threshold a best score must reach for its answer to be returned
    pub const fn threshold(self) -> f32 {
        match self {
            Self::TfIdf => TFIDF_THRESHOLD,
            Self::Dense => DENSE_THRESHOLD,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TfIdf => write!(f, "tfidf"),
            Self::Dense => write!(f, "dense"),
        }
    }
}

/// Common interface of the vectorization strategies.
///
/// Every vector produced by one vectorizer, from either method, lives in the
/// same space and can be compared with [`cosine_similarity`].
pub trait Vectorizer: Send + Sync {
    fn strategy(&self) -> Strategy;

    /// Minimum score for a match to be accepted
    fn threshold(&self) -> f32 {
        self.strategy().threshold()
    }

    /// Encode every text, preserving order
    fn embed_corpus(&self, texts: &[String]) -> Result<VectorSet>;

    /// Encode a single query
    fn embed_query(&self, text: &str) -> Result<Vector>;
}

/// Cosine similarity of two vectors.
///
/// Returns 0.0 when either vector has zero norm or the lengths differ.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
