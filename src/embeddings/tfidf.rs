//! TF-IDF vectorizer fit on the catalog questions.
//!
//! Vocabulary and IDF weights are computed once from the catalog and frozen.
//! Query terms outside the vocabulary contribute nothing, so a query with no
//! known terms encodes to the zero vector and scores 0.0 against everything.

use std::collections::HashMap;
use std::collections::HashSet;

use tracing::debug;

use super::text_preprocessing::tokenize;
use super::Strategy;
use super::Vector;
use super::VectorSet;
use super::Vectorizer;
use crate::errors::Result;

#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    /// term -> dimension index
    vocabulary: HashMap<String, usize>,
    /// smoothed IDF weight per dimension
    idf: Vec<f32>,
}

impl TfIdfVectorizer {
    /// Fit vocabulary and IDF weights on a corpus.
    ///
    /// Dimensions are assigned in order of first appearance in the corpus.
    ///
    /// IDF uses `ln((1 + n) / (1 + df)) + 1`, so terms present in every
    /// document keep a weight of 1.
    pub fn fit(documents: &[String]) -> Self {
        let n = documents.len() as f32;

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();

        for document in documents {
            let mut seen: HashSet<String> = HashSet::new();
            for term in tokenize(document) {
                if !seen.insert(term.clone()) {
                    continue;
                }
                let next = vocabulary.len();
                let idx = *vocabulary.entry(term).or_insert(next);
                if idx == doc_freq.len() {
                    doc_freq.push(0);
                }
                doc_freq[idx] += 1;
            }
        }

        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        debug!(
            "Fitted TF-IDF on {} documents, vocabulary size {}",
            documents.len(),
            vocabulary.len()
        );

        Self { vocabulary, idf }
    }

    /// Vocabulary size, which is also the vector dimension
    pub fn dimensions(&self) -> usize {
        self.idf.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    fn transform(&self, text: &str) -> Vector {
        let mut vector = vec![0.0_f32; self.dimensions()];

        for token in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                vector[idx] += 1.0;
            }
        }

        for (weight, idf) in vector.iter_mut().zip(&self.idf) {
            *weight *= idf;
        }

        l2_normalize(&mut vector);
        vector
    }
}

impl Vectorizer for TfIdfVectorizer {
    fn strategy(&self) -> Strategy {
        Strategy::TfIdf
    }

    fn embed_corpus(&self, texts: &[String]) -> Result<VectorSet> {
        Ok(texts.iter().map(|t| self.transform(t)).collect())
    }

    fn embed_query(&self, text: &str) -> Result<Vector> {
        Ok(self.transform(text))
    }
}

/// Scale to unit length in place; the zero vector is left unchanged
fn l2_normalize(v: &mut [f32]) {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
