//! Delegate resolver capability.

use async_trait::async_trait;

use crate::destination::Destination;
use crate::error::DelegateError;
use crate::options::ResolutionOptions;

/// One participant in a resolution chain.
///
/// A delegate attempts to produce a [`Destination`] for the binding the
/// options describe. Delegates may fail with any [`DelegateError`]; the
/// chain classifies failures itself, so implementations do not need to
/// pre-categorize what they raise. Implementations must be safe for
/// concurrent invocation and should honor any cancellation signal carried
/// in the options themselves; the chain imposes no timeout of its own.
#[async_trait]
pub trait DelegateResolver: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &str {
        "delegate"
    }

    /// Attempt to resolve a destination for the given options.
    async fn resolve(&self, options: &ResolutionOptions) -> Result<Destination, DelegateError>;
}
