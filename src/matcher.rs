//! Nearest-question matching over the catalog

use std::path::Path;

use tracing::debug;
use tracing::info;

use crate::catalog::load_catalog;
use crate::catalog::Catalog;
use crate::embeddings::cosine_similarity;
use crate::embeddings::create_vectorizer;
use crate::embeddings::Strategy;
use crate::embeddings::VectorSet;
use crate::embeddings::Vectorizer;
use crate::errors::FaqBotError;
use crate::errors::Result;

/// Reply sent when no catalog question scores above the threshold.
///
/// Frontends render this as raw HTML, so it must stay byte-for-byte stable.
pub const FALLBACK_REPLY: &str = "I can assist you better on \
<a href='https://wa.me/917009349232' target='_blank' \
style='text-decoration: underline; display: inline-flex; align-items: center; color:white; '>\
WhatsApp \
<img src='https://upload.wikimedia.org/wikipedia/commons/6/6b/WhatsApp.svg' \
alt='WhatsApp' style='width:24px; height:24px; margin-left:5px;'>\
</a>";

/// Best-scoring catalog entry for a query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    pub index: usize,
    pub score: f32,
}

/// Immutable matching context: catalog, its question vectors and the
/// vectorizer that produced them.
pub struct Matcher {
    catalog: Catalog,
    vectors: VectorSet,
    vectorizer: Box<dyn Vectorizer>,
}

impl Matcher {
    /// Encode every catalog question and build the matcher
    pub fn new(catalog: Catalog, vectorizer: Box<dyn Vectorizer>) -> Result<Self> {
        let vectors = vectorizer.embed_corpus(&catalog.questions())?;
        let matcher = Self::from_parts(catalog, vectors, vectorizer)?;

        info!(
            "✅ Matcher ready: {} entries, strategy {}, threshold {:.2}",
            matcher.len(),
            matcher.vectorizer.strategy(),
            matcher.threshold()
        );

        Ok(matcher)
    }

    /// Build from precomputed question vectors.
    ///
    /// Fails when the vector count differs from the catalog size.
    pub fn from_parts(
        catalog: Catalog,
        vectors: VectorSet,
        vectorizer: Box<dyn Vectorizer>,
    ) -> Result<Self> {
        if vectors.len() != catalog.len() {
            return Err(FaqBotError::VectorSpaceMismatch {
                vectors: vectors.len(),
                entries: catalog.len(),
            });
        }

        Ok(Self {
            catalog,
            vectors,
            vectorizer,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn vectors(&self) -> &VectorSet {
        &self.vectors
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn threshold(&self) -> f32 {
        self.vectorizer.threshold()
    }

    /// Score the query against every question and return the arg-max.
    ///
    /// Ties go to the lowest index. `None` only for an empty catalog.
    pub fn best_match(&self, query: &str) -> Result<Option<MatchResult>> {
        let query_vector = self.vectorizer.embed_query(query)?;

        let mut best: Option<MatchResult> = None;
        for (index, vector) in self.vectors.iter().enumerate() {
            let score = cosine_similarity(&query_vector, vector);
            if best.map_or(true, |b| score > b.score) {
                best = Some(MatchResult { index, score });
            }
        }

        Ok(best)
    }

    /// Answer for the query, or [`FALLBACK_REPLY`] below the threshold
    pub fn answer(&self, query: &str) -> Result<String> {
        let best = self.best_match(query)?;
        Ok(self.reply_for(best).to_string())
    }

    /// Reply for an already computed match
    pub fn reply_for(&self, best: Option<MatchResult>) -> &str {
        match best {
            Some(m) if m.score >= self.threshold() => {
                debug!("Matched entry {} with score {:.4}", m.index, m.score);
                self.catalog
                    .get(m.index)
                    .map_or(FALLBACK_REPLY, |entry| entry.answer.as_str())
            }
            Some(m) => {
                debug!(
                    "Best score {:.4} below threshold {:.2}, using fallback",
                    m.score,
                    self.threshold()
                );
                FALLBACK_REPLY
            }
            None => FALLBACK_REPLY,
        }
    }
}

/// Load the catalog, build the configured vectorizer and encode the questions
pub fn build_matcher<P: AsRef<Path>>(catalog_path: P, strategy: Strategy) -> Result<Matcher> {
    let catalog = load_catalog(catalog_path)?;
    let vectorizer = create_vectorizer(strategy, &catalog.questions())?;
    Matcher::new(catalog, vectorizer)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use super::*;
    use crate::catalog::builtin_entries;
    use crate::catalog::QaEntry;
    use crate::embeddings::TfIdfVectorizer;
    use crate::embeddings::Vector;

    fn tfidf_matcher(entries: Vec<QaEntry>) -> Matcher {
        let catalog = Catalog::new(entries);
        let vectorizer = TfIdfVectorizer::fit(&catalog.questions());
        Matcher::new(catalog, Box::new(vectorizer)).unwrap()
    }

    /// Returns fixed vectors so scores can be controlled exactly
    struct FixedVectorizer {
        query: Vector,
        threshold: f32,
    }

    impl Vectorizer for FixedVectorizer {
        fn strategy(&self) -> Strategy {
            Strategy::Dense
        }

        fn threshold(&self) -> f32 {
            self.threshold
        }

        fn embed_corpus(&self, texts: &[String]) -> Result<VectorSet> {
            Ok(texts.iter().map(|_| vec![1.0, 0.0]).collect())
        }

        fn embed_query(&self, _text: &str) -> Result<Vector> {
            Ok(self.query.clone())
        }
    }

    #[test]
    fn fallback_reply_is_exact() {
        assert_eq!(
            FALLBACK_REPLY,
            "I can assist you better on <a href='https://wa.me/917009349232' target='_blank' \
             style='text-decoration: underline; display: inline-flex; align-items: center; color:white; '>\
             WhatsApp <img src='https://upload.wikimedia.org/wikipedia/commons/6/6b/WhatsApp.svg' \
             alt='WhatsApp' style='width:24px; height:24px; margin-left:5px;'></a>"
        );
        assert!(FALLBACK_REPLY.contains("https://wa.me/917009349232"));
    }

    #[test]
    fn builtin_greetings_match() {
        let matcher = tfidf_matcher(builtin_entries());

        assert_eq!(
            matcher.answer("hello").unwrap(),
            "Hi! I'm Harsh Deep, a Python developer and tech enthusiast."
        );
        assert_eq!(
            matcher.answer("bye").unwrap(),
            "Goodbye! Feel free to reach out anytime."
        );
    }

    #[test]
    fn unknown_token_falls_back() {
        let matcher = tfidf_matcher(builtin_entries());
        assert_eq!(matcher.answer("zzqxw119").unwrap(), FALLBACK_REPLY);
    }

    #[test]
    fn empty_query_falls_back() {
        let matcher = tfidf_matcher(builtin_entries());
        assert_eq!(matcher.answer("").unwrap(), FALLBACK_REPLY);
    }

    #[test]
    fn every_question_matches_itself() {
        let mut entries = vec![
            QaEntry::new("what are your skills", "Python, Rust, ML"),
            QaEntry::new("what projects have you built", "A chatbot and a crawler"),
            QaEntry::new("how can I contact you", "Email or WhatsApp"),
        ];
        entries.extend(builtin_entries());
        let matcher = tfidf_matcher(entries.clone());

        for entry in &entries {
            assert_eq!(matcher.answer(&entry.question).unwrap(), entry.answer);
        }
    }

    #[test]
    fn ties_resolve_to_first_entry() {
        let matcher = tfidf_matcher(vec![
            QaEntry::new("hello", "first"),
            QaEntry::new("hello", "second"),
        ]);

        let best = matcher.best_match("hello").unwrap().unwrap();
        assert_eq!(best.index, 0);
        assert_eq!(matcher.answer("hello").unwrap(), "first");
    }

    #[test]
    fn last_entry_is_reachable() {
        let matcher = tfidf_matcher(vec![
            QaEntry::new("alpha", "a"),
            QaEntry::new("beta", "b"),
            QaEntry::new("gamma", "c"),
        ]);

        let best = matcher.best_match("gamma").unwrap().unwrap();
        assert_eq!(best.index, 2);
    }

    #[test]
    fn threshold_is_inclusive() {
        let catalog = Catalog::new(vec![QaEntry::new("q", "accepted")]);
        let vectorizer = FixedVectorizer {
            query: vec![1.0, 0.0],
            threshold: 1.0,
        };
        let matcher = Matcher::new(catalog, Box::new(vectorizer)).unwrap();

        assert_eq!(matcher.best_match("anything").unwrap().unwrap().score, 1.0);
        assert_eq!(matcher.answer("anything").unwrap(), "accepted");
    }

    #[test]
    fn below_threshold_falls_back() {
        let catalog = Catalog::new(vec![QaEntry::new("q", "never")]);
        let vectorizer = FixedVectorizer {
            query: vec![0.5, 0.866],
            threshold: 0.55,
        };
        let matcher = Matcher::new(catalog, Box::new(vectorizer)).unwrap();

        assert_eq!(matcher.answer("anything").unwrap(), FALLBACK_REPLY);
    }

    /// Counts query encodings
    struct CountingVectorizer {
        queries: AtomicUsize,
    }

    impl Vectorizer for CountingVectorizer {
        fn strategy(&self) -> Strategy {
            Strategy::Dense
        }

        fn embed_corpus(&self, texts: &[String]) -> Result<VectorSet> {
            Ok(texts.iter().map(|_| vec![1.0, 0.0]).collect())
        }

        fn embed_query(&self, _text: &str) -> Result<Vector> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            Ok(vec![1.0, 0.0])
        }
    }

    #[test]
    fn reply_for_reuses_computed_match() {
        let catalog = Catalog::new(vec![QaEntry::new("q", "reused")]);
        let vectorizer = Arc::new(CountingVectorizer {
            queries: AtomicUsize::new(0),
        });
        let shared = ArcVectorizer(Arc::clone(&vectorizer));
        let matcher = Matcher::new(catalog, Box::new(shared)).unwrap();

        let best = matcher.best_match("anything").unwrap();
        assert_eq!(matcher.reply_for(best), "reused");
        assert_eq!(vectorizer.queries.load(Ordering::SeqCst), 1);

        let low = Some(MatchResult {
            index: 0,
            score: 0.1,
        });
        assert_eq!(matcher.reply_for(low), FALLBACK_REPLY);
        assert_eq!(matcher.reply_for(None), FALLBACK_REPLY);
    }

    /// Shares a vectorizer with the test so its state stays observable
    struct ArcVectorizer(Arc<CountingVectorizer>);

    impl Vectorizer for ArcVectorizer {
        fn strategy(&self) -> Strategy {
            self.0.strategy()
        }

        fn embed_corpus(&self, texts: &[String]) -> Result<VectorSet> {
            self.0.embed_corpus(texts)
        }

        fn embed_query(&self, text: &str) -> Result<Vector> {
            self.0.embed_query(text)
        }
    }

    #[test]
    fn empty_catalog_falls_back() {
        let matcher = tfidf_matcher(Vec::new());
        assert!(matcher.is_empty());
        assert!(matcher.best_match("hello").unwrap().is_none());
        assert_eq!(matcher.answer("hello").unwrap(), FALLBACK_REPLY);
    }

    #[test]
    fn mismatched_vector_space_is_rejected() {
        let catalog = Catalog::new(builtin_entries());
        let vectorizer = TfIdfVectorizer::fit(&catalog.questions());
        let vectors = vec![vec![1.0]; catalog.len() - 1];

        let result = Matcher::from_parts(catalog, vectors, Box::new(vectorizer));
        assert!(matches!(
            result,
            Err(FaqBotError::VectorSpaceMismatch {
                vectors: 5,
                entries: 6
            })
        ));
    }

    #[test]
    fn vectors_align_with_catalog() {
        let matcher = tfidf_matcher(builtin_entries());
        assert_eq!(matcher.vectors().len(), matcher.catalog().len());
        assert_eq!(matcher.threshold(), 0.20);
    }

    #[test]
    fn build_matcher_without_file_uses_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let matcher = build_matcher(dir.path().join("data.json"), Strategy::TfIdf).unwrap();

        assert_eq!(matcher.len(), builtin_entries().len());
        assert_eq!(matcher.vectors().len(), matcher.len());
        assert_eq!(
            matcher.answer("who are you").unwrap(),
            "I'm Harsh Deep, Python developer and tech enthusiast."
        );
    }
}
