//! Ordered fallback dispatch across delegate resolvers.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::destination::Destination;
use crate::error::{classify, ClassifiedError, DelegateError, NoDelegatesError, ResolveError};
use crate::options::ResolutionOptions;

use super::traits::DelegateResolver;

/// An ordered, short-circuiting chain of delegate resolvers.
///
/// Delegates are tried strictly in order; the first success wins and no
/// later delegate is invoked. Every failure is classified, and when all
/// delegates fail the classification of the last attempt is surfaced.
/// The chain holds no mutable state: every call is an independent run with
/// no retry, caching, or memory of earlier outcomes, so a chain can be
/// shared freely across tasks.
pub struct ResolutionChain {
    delegates: Vec<Arc<dyn DelegateResolver>>,
}

impl ResolutionChain {
    /// Chain over the given delegates, tried in the order given.
    ///
    /// The sequence is captured here and stays fixed for the lifetime of
    /// the chain.
    pub fn new(delegates: Vec<Arc<dyn DelegateResolver>>) -> Self {
        Self { delegates }
    }

    /// Number of delegates in the chain.
    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    /// Whether the chain has no delegates.
    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }

    /// Resolve a destination for the given options.
    ///
    /// Total: every outcome is a value, nothing panics. An empty chain
    /// fails with the shared [`NoDelegatesError`] instance; otherwise the
    /// result is the first delegate success, or the classification of the
    /// last delegate failure once the chain is exhausted. Earlier failures
    /// are dropped after being logged at debug level.
    pub async fn try_resolve(
        &self,
        options: &ResolutionOptions,
    ) -> Result<Destination, ResolveError> {
        let mut pending: Option<ClassifiedError> = None;

        for delegate in &self.delegates {
            debug!(delegate = delegate.name(), "attempting destination resolution");
            match delegate.resolve(options).await {
                Ok(destination) => return Ok(destination),
                Err(error) => {
                    debug!(delegate = delegate.name(), %error, "delegate failed");
                    pending = Some(classify(&error));
                }
            }
        }

        match pending {
            Some(classified) => Err(classified.into()),
            None => Err(ResolveError::NoDelegates(NoDelegatesError::shared())),
        }
    }
}

/// A chain is itself a delegate resolver, so chains can nest inside other
/// chains. The classified failure crosses the boundary as a delegate error
/// of the matching kind.
#[async_trait]
impl DelegateResolver for ResolutionChain {
    fn name(&self) -> &str {
        "resolution-chain"
    }

    async fn resolve(&self, options: &ResolutionOptions) -> Result<Destination, DelegateError> {
        self.try_resolve(options).await.map_err(DelegateError::from)
    }
}
