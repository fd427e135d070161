//! A backend whose calls wait for the test to let them through.

// Not every test binary uses every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use notepad::backend::{BackendResult, MemoryBackend, NoteBackend};
use notepad::domain::{Note, NoteId, NoteInput};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;

/// Wraps a [`MemoryBackend`]; every call blocks until [`release`] hands it
/// a permit. Waiters are served in the order they started waiting.
///
/// [`release`]: GatedBackend::release
pub struct GatedBackend {
    inner: MemoryBackend,
    gate: Semaphore,
    waiting: AtomicUsize,
    gate_reads: bool,
}

impl GatedBackend {
    pub fn new(inner: MemoryBackend) -> Self {
        Self {
            inner,
            gate: Semaphore::new(0),
            waiting: AtomicUsize::new(0),
            gate_reads: true,
        }
    }

    /// Like [`new`](Self::new), but `list` is never held.
    pub fn writes_only(inner: MemoryBackend) -> Self {
        Self {
            gate_reads: false,
            ..Self::new(inner)
        }
    }

    /// Lets `n` pending or future calls through.
    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }

    /// Number of calls currently held at the gate.
    pub fn waiting(&self) -> usize {
        self.waiting.load(Ordering::SeqCst)
    }

    pub fn inner(&self) -> &MemoryBackend {
        &self.inner
    }

    async fn pass(&self) {
        self.waiting.fetch_add(1, Ordering::SeqCst);
        let permit = self.gate.acquire().await.expect("gate closed");
        permit.forget();
        self.waiting.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl NoteBackend for GatedBackend {
    async fn list(&self) -> BackendResult<Vec<Note>> {
        if self.gate_reads {
            self.pass().await;
        }
        self.inner.list().await
    }

    async fn create(&self, input: &NoteInput) -> BackendResult<Note> {
        self.pass().await;
        self.inner.create(input).await
    }

    async fn update(&self, id: &NoteId, input: &NoteInput) -> BackendResult<Note> {
        self.pass().await;
        self.inner.update(id, input).await
    }

    async fn delete(&self, id: &NoteId) -> BackendResult<()> {
        self.pass().await;
        self.inner.delete(id).await
    }
}
