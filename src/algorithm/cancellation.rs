//! Cooperative cancellation of generation passes

use crate::io::error::GenerationError;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag requesting that generation stop at its next checkpoint
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that has not been cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; every clone observes it
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Check if cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Abort point checked between cells and between placement attempts
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint<'a> {
    layer: usize,
    token: Option<&'a CancellationToken>,
}

impl<'a> Checkpoint<'a> {
    /// Checkpoint for `layer` observing `token`
    pub const fn new(layer: usize, token: Option<&'a CancellationToken>) -> Self {
        Self { layer, token }
    }

    /// Checkpoint for `layer` that never aborts
    pub const fn detached(layer: usize) -> Self {
        Self { layer, token: None }
    }

    /// Layer index reported in errors
    pub const fn layer(&self) -> usize {
        self.layer
    }

    /// Fail if cancellation was requested
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Cancelled`] once the token is cancelled
    pub fn check(&self) -> Result<(), GenerationError> {
        if self.token.is_some_and(CancellationToken::is_cancelled) {
            Err(GenerationError::Cancelled { layer: self.layer })
        } else {
            Ok(())
        }
    }
}
