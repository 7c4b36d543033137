use std::{future::Future, sync::Arc};

use tokio::sync::RwLock;

use crate::{client::model::error::ApiError, model::api::ItemResult};

/// Progress of one remote operation as seen by UI code.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum MethodState<T> {
    #[default]
    NotRun,
    Loading,
    Done(ItemResult<T>),
    Error(ApiError),
}

impl<T> MethodState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, MethodState::Loading)
    }

    pub fn was_successful(&self) -> bool {
        matches!(self, MethodState::Done(result) if result.was_successful)
    }

    /// The envelope's message, or the error message when the exchange itself failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            MethodState::Done(result) => result.message.as_deref(),
            MethodState::Error(error) => Some(error.message.as_str()),
            _ => None,
        }
    }

    pub fn object(&self) -> Option<&T> {
        match self {
            MethodState::Done(result) => result.object.as_ref(),
            _ => None,
        }
    }
}

/// Shared handle to the state of one remote operation.
///
/// Clones share the same state, so a view can poll `is_loading` while another task awaits
/// `run`. A later `run` replaces whatever an earlier one recorded.
#[derive(Debug)]
pub struct MethodCaller<T> {
    state: Arc<RwLock<MethodState<T>>>,
}

impl<T> Clone for MethodCaller<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> Default for MethodCaller<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MethodCaller<T> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MethodState::NotRun)),
        }
    }

    /// Marks the operation as loading, awaits `call` and records its outcome.
    ///
    /// The lock is released while `call` is pending.
    ///
    /// # Returns
    /// - `true` - The operation returned a successful envelope
    /// - `false` - A failed envelope or an `ApiError`
    pub async fn run<F>(&self, call: F) -> bool
    where
        F: Future<Output = Result<ItemResult<T>, ApiError>>,
    {
        *self.state.write().await = MethodState::Loading;

        let outcome = match call.await {
            Ok(result) => MethodState::Done(result),
            Err(error) => MethodState::Error(error),
        };
        let was_successful = outcome.was_successful();
        *self.state.write().await = outcome;

        was_successful
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading()
    }

    pub async fn was_successful(&self) -> bool {
        self.state.read().await.was_successful()
    }

    pub async fn reset(&self) {
        *self.state.write().await = MethodState::NotRun;
    }
}

impl<T: Clone> MethodCaller<T> {
    /// Copy of the current state for rendering.
    pub async fn state(&self) -> MethodState<T> {
        self.state.read().await.clone()
    }
}
