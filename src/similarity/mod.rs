// TF-IDF vectorization and cosine similarity.

pub mod tfidf;

pub use tfidf::{field_similarity, FieldSignal, TfIdfModel};
