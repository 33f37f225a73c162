//! Output side-channel for agent operations
//!
//! Agents stream their output into a queue that clients drain. Every route
//! operation clears the queue first so a request never sees output left
//! over from a previous one.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Capability passed into each agent operation.
///
/// Implementations synchronize themselves; `clear` may be called from
/// concurrent requests.
pub trait OutputChannel: Send + Sync {
    /// Drop everything buffered so far
    fn clear(&self);
}

/// Kind of message an agent emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    InternalMonologue,
    AssistantMessage,
    FunctionMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputMessage {
    pub kind: OutputKind,
    pub content: String,
}

/// Queue-backed [`OutputChannel`]
#[derive(Debug, Default)]
pub struct QueuingInterface {
    buffer: Mutex<VecDeque<OutputMessage>>,
}

impl QueuingInterface {
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self) -> MutexGuard<'_, VecDeque<OutputMessage>> {
        self.buffer
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    pub fn push(&self, kind: OutputKind, content: impl Into<String>) {
        self.buffer().push_back(OutputMessage {
            kind,
            content: content.into(),
        });
    }

    /// Take all buffered messages, oldest first
    pub fn drain(&self) -> Vec<OutputMessage> {
        self.buffer().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }
}

impl OutputChannel for QueuingInterface {
    fn clear(&self) {
        let mut buffer = self.buffer();
        if !buffer.is_empty() {
            debug!("Discarding {} buffered output messages", buffer.len());
        }
        buffer.clear();
    }
}
