//! Latest-wins verification session
//!
//! Submitting a new route abandons whichever verification is still in
//! flight. The abandoned one never yields an outcome.

use crate::links::LinkSource;
use crate::route::Route;
use crate::verifier::{LinkChainVerifier, VerificationOutcome};
use futures::future::{AbortHandle, Abortable};
use std::future::Future;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// A verification replaced by a newer submission before it finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("verification superseded by a newer route")]
pub struct Superseded;

pub struct VerificationSession<S> {
    verifier: Arc<LinkChainVerifier<S>>,
    current: Mutex<Option<AbortHandle>>,
}

impl<S: LinkSource + 'static> VerificationSession<S> {
    pub fn new(verifier: LinkChainVerifier<S>) -> Self {
        Self {
            verifier: Arc::new(verifier),
            current: Mutex::new(None),
        }
    }

    /// Start verifying `route`, aborting the previous submission if any.
    ///
    /// The returned future owns everything it needs and can be spawned.
    pub fn submit(
        &self,
        route: Route,
    ) -> impl Future<Output = Result<VerificationOutcome, Superseded>> + Send + 'static {
        let (handle, registration) = AbortHandle::new_pair();
        {
            let mut current = self
                .current
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(previous) = current.replace(handle) {
                tracing::debug!("aborting previous verification");
                previous.abort();
            }
        }

        let verifier = Arc::clone(&self.verifier);
        let task = async move { verifier.verify_route(&route).await };
        async move {
            Abortable::new(task, registration)
                .await
                .map_err(|_| Superseded)
        }
    }

    /// Abort the in-flight verification without starting another.
    pub fn cancel(&self) {
        let mut current = self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(handle) = current.take() {
            handle.abort();
        }
    }
}
