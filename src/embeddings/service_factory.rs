//! Vectorizer factory used at startup
//!
//! The strategy is chosen once from configuration; nothing switches it while
//! the server is running.

use tracing::info;

use super::Strategy;
use super::TfIdfVectorizer;
use super::Vectorizer;
use crate::Result;

/// Build the vectorizer for `strategy`.
///
/// The TF-IDF strategy is fit on `questions`; the dense strategy loads its
/// pretrained encoder and ignores them.
pub fn create_vectorizer(strategy: Strategy, questions: &[String]) -> Result<Box<dyn Vectorizer>> {
    info!(
        "Creating {} vectorizer (threshold {:.2})",
        strategy,
        strategy.threshold()
    );

    match strategy {
        Strategy::TfIdf => Ok(Box::new(TfIdfVectorizer::fit(questions))),
        Strategy::Dense => create_dense_vectorizer(),
    }
}

#[cfg(feature = "dense")]
fn create_dense_vectorizer() -> Result<Box<dyn Vectorizer>> {
    Ok(Box::new(super::DenseVectorizer::new()?))
}

#[cfg(not(feature = "dense"))]
fn create_dense_vectorizer() -> Result<Box<dyn Vectorizer>> {
    Err(crate::FaqBotError::ConfigError(
        "the dense strategy requires building with `--features dense`".to_string(),
    ))
}
