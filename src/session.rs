//! In-memory session state.
//!
//! One request/document pair for the whole process, owned by the web layer
//! and discarded on shutdown. There is no persistence.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use utoipa::ToSchema;

use crate::ai::TextGenerator;
use crate::document::models::{DocumentRequest, GeneratedDocument};

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    /// No generation in flight and no result yet.
    Idle,
    /// A generation call is outstanding; submission is refused.
    Loading,
    /// The last generation succeeded and its result is stored.
    Ready,
}

/// Shared application state.
pub struct AppState {
    pub request: RwLock<DocumentRequest>,
    pub document: RwLock<Option<GeneratedDocument>>,
    loading: AtomicBool,
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            request: RwLock::new(DocumentRequest::default()),
            document: RwLock::new(None),
            loading: AtomicBool::new(false),
            generator,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.loading.load(Ordering::SeqCst) {
            SessionPhase::Loading
        } else if self.document.read().is_some() {
            SessionPhase::Ready
        } else {
            SessionPhase::Idle
        }
    }

    /// Claim the loading flag. Returns false when a generation is already
    /// in flight, in which case the new submission must be refused.
    pub fn begin_generation(&self) -> bool {
        self.loading
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Clear the loading flag. The failure path calls this directly,
    /// leaving any prior document in place.
    pub fn finish_generation(&self) {
        self.loading.store(false, Ordering::SeqCst);
    }

    /// Store a successful result, replacing any prior document.
    pub fn store_document(&self, content: String) -> GeneratedDocument {
        let document = GeneratedDocument::new(content);
        *self.document.write() = Some(document.clone());
        document
    }

    /// Finish a successful attempt: the result is stored before the
    /// loading flag clears, so a concurrent status read moves straight
    /// from Loading to Ready and a new submission can only claim the flag
    /// once the document is in place.
    pub fn complete_generation(&self, content: String) -> GeneratedDocument {
        let document = self.store_document(content);
        self.finish_generation();
        document
    }
}
