//! Classification of many documents at once
//!
//! Each document is still scanned sequentially; with the `parallel` feature
//! documents are spread over the rayon pool.

use crate::domain::{BoundaryFlag, LexicalToken, SentenceClassifier};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl SentenceClassifier {
    /// Classify every document, preserving input order
    #[cfg(feature = "parallel")]
    pub fn classify_batch<D, T>(&self, documents: &[D]) -> Vec<Vec<BoundaryFlag>>
    where
        D: AsRef<[T]> + Sync,
        T: LexicalToken + Sync,
    {
        tracing::debug!(documents = documents.len(), "classifying batch in parallel");
        documents
            .par_iter()
            .map(|doc| self.classify(doc.as_ref()))
            .collect()
    }

    /// Classify every document, preserving input order
    #[cfg(not(feature = "parallel"))]
    pub fn classify_batch<D, T>(&self, documents: &[D]) -> Vec<Vec<BoundaryFlag>>
    where
        D: AsRef<[T]>,
        T: LexicalToken,
    {
        tracing::debug!(documents = documents.len(), "classifying batch sequentially");
        documents
            .iter()
            .map(|doc| self.classify(doc.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{BoundaryFlag, Document, SentenceClassifier, Token};

    #[test]
    fn test_batch_matches_single_calls() {
        let classifier = SentenceClassifier::default();
        let documents = vec![
            Document::new(Token::from_texts(["Go", ".", "leave"])),
            Document::new(Vec::new()),
            Document::new(Token::from_texts(["end", "\n", "Next"])),
        ];

        let batch = classifier.classify_batch(&documents);

        assert_eq!(batch.len(), 3);
        for (doc, flags) in documents.iter().zip(&batch) {
            assert_eq!(flags, &classifier.classify(&doc.tokens));
        }
        assert!(batch[1].is_empty());
        assert_eq!(batch[2][2], BoundaryFlag::Start);
    }

    #[test]
    fn test_batch_of_token_vectors() {
        let classifier = SentenceClassifier::default();
        let documents: Vec<Vec<Token>> = (0..64)
            .map(|i| {
                let dose = i.to_string();
                Token::from_texts(["Dose", ".", dose.as_str()])
            })
            .collect();

        let batch = classifier.classify_batch(&documents);
        assert_eq!(batch.len(), 64);
        assert!(batch.iter().all(|flags| flags[2] == BoundaryFlag::Continue));
    }
}
