//! Error model for destination resolution.
//!
//! This module defines the failure shapes that flow through a resolution
//! chain: the free-form [`DelegateError`] a delegate raises, the two
//! canonical classified shapes ([`NotFoundError`] and [`AccessError`]),
//! and the structural [`NoDelegatesError`] for a chain with no participants.

pub mod classify;

pub use classify::classify;

use std::error::Error as StdError;
use std::fmt;
use std::sync::{Arc, OnceLock};

use thiserror::Error;

/// The failure categories a delegate error may carry.
///
/// Classification recognizes exactly `NotFound` and `Access`; everything
/// else a delegate raises is `Other` and falls back to the access category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested destination legitimately does not exist.
    NotFound,
    /// The destination could not be reached or the lookup was misconfigured.
    Access,
    /// Anything else a delegate raised.
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotFound => write!(f, "not_found"),
            ErrorKind::Access => write!(f, "access"),
            ErrorKind::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Clone)]
struct ErrorRepr {
    kind: ErrorKind,
    message: String,
    cause: Option<DelegateError>,
    suppressed: Vec<DelegateError>,
}

/// The error a delegate resolver raises on failure.
///
/// A `DelegateError` is a cheap-clone handle over a shared immutable
/// representation: clones refer to the same underlying error, so a failure
/// can be handed to a chain and later recognized again by identity via
/// [`DelegateError::ptr_eq`]. Each error optionally points at one underlying
/// cause, forming a singly-linked cause chain, and may carry suppressed
/// errors as non-causal diagnostic attachments.
///
/// The representation is frozen once constructed. Because cause links are
/// strong references with no interior mutability, a cause chain can never
/// form a cycle and walking it always terminates.
#[derive(Debug, Clone)]
pub struct DelegateError {
    repr: Arc<ErrorRepr>,
}

impl DelegateError {
    fn with_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            repr: Arc::new(ErrorRepr {
                kind,
                message: message.into(),
                cause: None,
                suppressed: Vec::new(),
            }),
        }
    }

    /// Error stating that the requested destination does not exist.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::NotFound, message)
    }

    /// Error stating that the destination could not be reached or used.
    pub fn access(message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Access, message)
    }

    /// Error of no recognized category.
    pub fn other(message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Other, message)
    }

    /// Attach the underlying cause of this error.
    ///
    /// Builder-style: finalize an error before sharing clones of it, since
    /// rebuilding a shared error produces a new instance.
    pub fn caused_by(self, cause: DelegateError) -> Self {
        let mut repr = self.into_repr();
        repr.cause = Some(cause);
        Self {
            repr: Arc::new(repr),
        }
    }

    /// Attach a suppressed error: diagnostic context that is not part of
    /// the cause chain.
    pub fn suppressing(self, suppressed: DelegateError) -> Self {
        let mut repr = self.into_repr();
        repr.suppressed.push(suppressed);
        Self {
            repr: Arc::new(repr),
        }
    }

    fn into_repr(self) -> ErrorRepr {
        match Arc::try_unwrap(self.repr) {
            Ok(repr) => repr,
            Err(shared) => (*shared).clone(),
        }
    }

    /// The category this error carries.
    pub fn kind(&self) -> ErrorKind {
        self.repr.kind
    }

    /// Human-readable description of the failure.
    pub fn message(&self) -> &str {
        &self.repr.message
    }

    /// The underlying cause, if any.
    pub fn cause(&self) -> Option<&DelegateError> {
        self.repr.cause.as_ref()
    }

    /// Suppressed errors attached for diagnostics.
    pub fn suppressed(&self) -> &[DelegateError] {
        &self.repr.suppressed
    }

    /// The deepest error reachable through the cause chain.
    ///
    /// Returns `self` when there is no cause.
    pub fn root_cause(&self) -> &DelegateError {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }

    /// Whether two handles refer to the same underlying error instance.
    pub fn ptr_eq(&self, other: &DelegateError) -> bool {
        Arc::ptr_eq(&self.repr, &other.repr)
    }
}

impl fmt::Display for DelegateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.repr.message)
    }
}

impl StdError for DelegateError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.repr
            .cause
            .as_ref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

/// Classified failure: the requested destination legitimately does not exist.
///
/// Wraps the not-found error promoted out of a delegate's failure chain,
/// by reference. When that error was found behind wrappers, the discarded
/// outer wrappers are recorded as suppressed entries so no diagnostic
/// context is lost.
#[derive(Debug, Clone)]
pub struct NotFoundError {
    error: DelegateError,
    suppressed: Vec<DelegateError>,
}

impl NotFoundError {
    pub(crate) fn promoted(error: DelegateError, suppressed: Vec<DelegateError>) -> Self {
        Self { error, suppressed }
    }

    /// The promoted not-found error, identity preserved.
    pub fn error(&self) -> &DelegateError {
        &self.error
    }

    /// The promoted error's own underlying cause, if any.
    pub fn cause(&self) -> Option<&DelegateError> {
        self.error.cause()
    }

    /// Wrappers discarded while unwrapping.
    ///
    /// Anything the promoted error itself already carried as suppressed
    /// stays on that error, untouched.
    pub fn suppressed(&self) -> &[DelegateError] {
        &self.suppressed
    }
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl StdError for NotFoundError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.error
            .cause()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

/// Classified failure: the destination could not be accessed.
///
/// Always a fresh value carrying the delegate's entire original failure
/// chain as its cause, untouched, so operators see full context.
#[derive(Debug, Clone)]
pub struct AccessError {
    message: String,
    cause: Option<DelegateError>,
    suppressed: Vec<DelegateError>,
}

impl AccessError {
    pub(crate) fn wrapping(origin: DelegateError) -> Self {
        Self {
            message: "failed to resolve a destination for the requested service binding"
                .to_string(),
            cause: Some(origin),
            suppressed: Vec::new(),
        }
    }

    /// The original failure chain, if any.
    pub fn cause(&self) -> Option<&DelegateError> {
        self.cause.as_ref()
    }

    /// Suppressed errors attached for diagnostics.
    pub fn suppressed(&self) -> &[DelegateError] {
        &self.suppressed
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for AccessError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

/// Structural failure: the chain was assembled without any delegates.
///
/// One process-wide instance exists, created lazily and never mutated;
/// every empty-chain failure hands out a clone of that instance, so the
/// failure is identity-stable across calls and chains.
#[derive(Debug, Clone)]
pub struct NoDelegatesError {
    repr: Arc<str>,
}

impl NoDelegatesError {
    pub(crate) fn shared() -> Self {
        static INSTANCE: OnceLock<NoDelegatesError> = OnceLock::new();
        INSTANCE
            .get_or_init(|| NoDelegatesError {
                repr: Arc::from("no delegate resolvers are registered in this resolution chain"),
            })
            .clone()
    }

    /// Whether two handles refer to the same underlying instance.
    pub fn ptr_eq(&self, other: &NoDelegatesError) -> bool {
        Arc::ptr_eq(&self.repr, &other.repr)
    }
}

impl fmt::Display for NoDelegatesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.repr)
    }
}

impl StdError for NoDelegatesError {}

/// Outcome of classifying a delegate failure: exactly one of the two
/// canonical categories.
#[derive(Debug, Clone, Error)]
pub enum ClassifiedError {
    /// The requested destination legitimately does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// The destination could not be accessed.
    #[error(transparent)]
    Access(#[from] AccessError),
}

/// Failure surfaced by a resolution chain.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// The requested destination legitimately does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// The destination could not be accessed.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// The chain has no delegate resolvers.
    #[error(transparent)]
    NoDelegates(#[from] NoDelegatesError),
}

impl ResolveError {
    /// Whether this failure means the destination does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound(_))
    }

    /// Whether this failure means the destination could not be accessed.
    pub fn is_access(&self) -> bool {
        matches!(self, ResolveError::Access(_))
    }

    /// Whether this failure means the chain has no delegates.
    pub fn is_no_delegates(&self) -> bool {
        matches!(self, ResolveError::NoDelegates(_))
    }
}

impl From<ClassifiedError> for ResolveError {
    fn from(classified: ClassifiedError) -> Self {
        match classified {
            ClassifiedError::NotFound(not_found) => ResolveError::NotFound(not_found),
            ClassifiedError::Access(access) => ResolveError::Access(access),
        }
    }
}

/// Boundary conversion used when a chain acts as a delegate inside another
/// chain: the classified failure is propagated as a delegate error of the
/// matching kind, cause chain preserved.
impl From<ResolveError> for DelegateError {
    fn from(error: ResolveError) -> Self {
        match error {
            ResolveError::NotFound(not_found) => {
                let mut delegate_error = not_found.error().clone();
                for wrapper in not_found.suppressed() {
                    delegate_error = delegate_error.suppressing(wrapper.clone());
                }
                delegate_error
            }
            ResolveError::Access(access) => {
                let delegate_error = DelegateError::access(access.to_string());
                match access.cause() {
                    Some(cause) => delegate_error.caused_by(cause.clone()),
                    None => delegate_error,
                }
            }
            ResolveError::NoDelegates(no_delegates) => {
                DelegateError::other(no_delegates.to_string())
            }
        }
    }
}
