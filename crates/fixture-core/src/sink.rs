//! Persistence collaborators and the fixture pairing.
//!
//! A [`DocumentSink`] is anywhere generated documents can be handed for
//! storage. The generation side treats sinks as opaque: errors come back
//! unmodified through [`SinkError`], and nothing a sink produces (driver
//! generated IDs included) flows back into the documents.

use crate::error::SinkError;
use crate::value::Document;
use async_trait::async_trait;
use std::sync::Mutex;

/// A persistence collaborator that accepts generated documents.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Insert one document.
    async fn insert(&self, document: &Document) -> Result<(), SinkError>;

    /// Insert a batch of documents.
    ///
    /// The default implementation inserts one at a time; sinks with a
    /// native batch operation should override it.
    async fn insert_many(&self, documents: &[Document]) -> Result<(), SinkError> {
        for document in documents {
            self.insert(document).await?;
        }
        Ok(())
    }
}

/// In-memory sink for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    documents: Mutex<Vec<Document>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything inserted so far, in insertion order.
    pub fn documents(&self) -> Vec<Document> {
        self.documents.lock().unwrap().clone()
    }

    /// Number of inserted documents.
    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DocumentSink for MemorySink {
    async fn insert(&self, document: &Document) -> Result<(), SinkError> {
        self.documents.lock().unwrap().push(document.clone());
        Ok(())
    }
}

/// A short-lived pairing of one generated document with a sink.
///
/// Created right before an insert and discarded after; the document can be
/// taken back out with [`into_document`](Fixture::into_document).
pub struct Fixture<'a, S: DocumentSink> {
    sink: &'a S,
    document: Document,
}

impl<'a, S: DocumentSink> Fixture<'a, S> {
    /// Pair `document` with `sink`.
    pub fn new(sink: &'a S, document: Document) -> Self {
        Self { sink, document }
    }

    /// The paired document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Hand the document to the sink.
    pub async fn insert(&self) -> Result<(), SinkError> {
        self.sink.insert(&self.document).await
    }

    /// Discard the pairing, keeping the document.
    pub fn into_document(self) -> Document {
        self.document
    }
}
