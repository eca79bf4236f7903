//! Sentence-embedding vectorizer backed by `fastembed`.
//!
//! Only compiled with the `dense` feature. The ONNX weights for
//! `all-MiniLM-L6-v2` are fetched on first use and cached by fastembed.

use std::sync::Mutex;

use fastembed::EmbeddingModel;
use fastembed::InitOptions;
use fastembed::TextEmbedding;
use tracing::info;

use super::normalize_whitespace;
use super::Strategy;
use super::Vector;
use super::VectorSet;
use super::Vectorizer;
use crate::errors::FaqBotError;
use crate::errors::Result;

pub struct DenseVectorizer {
    // fastembed needs &mut for inference
    model: Mutex<TextEmbedding>,
}

impl DenseVectorizer {
    /// Load the sentence encoder
    pub fn new() -> Result<Self> {
        info!("🔧 Loading sentence encoder all-MiniLM-L6-v2...");

        let model = TextEmbedding::try_new(
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false),
        )
        .map_err(|e| FaqBotError::EmbeddingError(format!("Failed to load encoder: {e}")))?;

        info!("Sentence encoder ready");

        Ok(Self {
            model: Mutex::new(model),
        })
    }

    fn encode(&self, texts: Vec<String>) -> Result<VectorSet> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let mut model = self
            .model
            .lock()
            .map_err(|_| FaqBotError::EmbeddingError("encoder lock poisoned".to_string()))?;

        model
            .embed(texts, None)
            .map_err(|e| FaqBotError::EmbeddingError(format!("Failed to encode text: {e}")))
    }
}

impl Vectorizer for DenseVectorizer {
    fn strategy(&self) -> Strategy {
        Strategy::Dense
    }

    fn embed_corpus(&self, texts: &[String]) -> Result<VectorSet> {
        self.encode(texts.iter().map(|t| normalize_whitespace(t)).collect())
    }

    fn embed_query(&self, text: &str) -> Result<Vector> {
        self.encode(vec![normalize_whitespace(text)])?
            .into_iter()
            .next()
            .ok_or_else(|| FaqBotError::EmbeddingError("encoder returned no vector".to_string()))
    }
}
