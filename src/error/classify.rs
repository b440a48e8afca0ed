//! Classification of delegate failures into the canonical categories.
//!
//! A delegate may fail with anything: a bare categorized error, one buried
//! under layers of wrapping, or an error with no recognized kind anywhere in
//! its chain. Classification collapses every such failure into exactly one
//! of the two canonical shapes without losing diagnostic information.

use super::{AccessError, ClassifiedError, DelegateError, ErrorKind, NotFoundError};

/// Collapse a delegate failure into exactly one canonical category.
///
/// The cause chain is scanned outermost-first for the first error carrying
/// a recognized kind:
///
/// - [`ErrorKind::Access`] anywhere wins immediately: the result is a fresh
///   [`AccessError`] whose cause is the original failure with its whole
///   chain untouched. This holds even when the original failure itself is
///   the access error.
/// - [`ErrorKind::NotFound`] promotes the matched error. Found at the
///   surface, it is carried over unchanged; found behind wrappers, the
///   discarded outer wrapper is recorded as a suppressed entry on the
///   classified result so its context survives.
/// - No recognized kind in the whole chain falls back to the access shape:
///   an unrecognized failure is an operational problem, not absence.
///
/// Pure and total: no side effects, always returns a value.
pub fn classify(origin: &DelegateError) -> ClassifiedError {
    let mut position = 0usize;
    let mut current = Some(origin);

    while let Some(error) = current {
        match error.kind() {
            ErrorKind::Access => {
                return ClassifiedError::Access(AccessError::wrapping(origin.clone()));
            }
            ErrorKind::NotFound => {
                let not_found = if position == 0 {
                    NotFoundError::promoted(origin.clone(), Vec::new())
                } else {
                    NotFoundError::promoted(error.clone(), vec![origin.clone()])
                };
                return ClassifiedError::NotFound(not_found);
            }
            ErrorKind::Other => {}
        }
        current = error.cause();
        position += 1;
    }

    ClassifiedError::Access(AccessError::wrapping(origin.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_not_found(classified: ClassifiedError) -> NotFoundError {
        match classified {
            ClassifiedError::NotFound(not_found) => not_found,
            ClassifiedError::Access(_) => panic!("expected a not-found classification"),
        }
    }

    fn expect_access(classified: ClassifiedError) -> AccessError {
        match classified {
            ClassifiedError::Access(access) => access,
            ClassifiedError::NotFound(_) => panic!("expected an access classification"),
        }
    }

    #[test]
    fn test_bare_not_found_is_promoted_unchanged() {
        let missing = DelegateError::not_found("no binding for service");

        let not_found = expect_not_found(classify(&missing));

        assert!(not_found.error().ptr_eq(&missing));
        assert!(not_found.suppressed().is_empty());
    }

    #[test]
    fn test_bare_access_is_rewrapped() {
        let denied = DelegateError::access("endpoint unreachable");

        let access = expect_access(classify(&denied));

        assert!(access.cause().is_some_and(|cause| cause.ptr_eq(&denied)));
        assert!(access.suppressed().is_empty());
    }

    #[test]
    fn test_unrecognized_error_falls_back_to_access() {
        let error = DelegateError::other("subsystem in an illegal state");

        let access = expect_access(classify(&error));

        assert!(access.cause().is_some_and(|cause| cause.ptr_eq(&error)));
    }

    #[test]
    fn test_deep_unrecognized_chain_falls_back_to_access() {
        let root = DelegateError::other("socket closed");
        let middle = DelegateError::other("request failed").caused_by(root);
        let outer = DelegateError::other("lookup aborted").caused_by(middle);

        let access = expect_access(classify(&outer));

        assert!(access.cause().is_some_and(|cause| cause.ptr_eq(&outer)));
    }

    #[test]
    fn test_wrapped_not_found_keeps_wrapper_as_suppressed() {
        let missing = DelegateError::not_found("no binding for service");
        let wrapper = DelegateError::other("lookup failed").caused_by(missing.clone());

        let not_found = expect_not_found(classify(&wrapper));

        assert!(not_found.error().ptr_eq(&missing));
        assert_eq!(not_found.suppressed().len(), 1);
        assert!(not_found.suppressed()[0].ptr_eq(&wrapper));
    }

    #[test]
    fn test_not_found_behind_two_wrappers_records_only_the_outermost() {
        let missing = DelegateError::not_found("no binding for service");
        let inner = DelegateError::other("inner context").caused_by(missing.clone());
        let outer = DelegateError::other("outer context").caused_by(inner);

        let not_found = expect_not_found(classify(&outer));

        assert!(not_found.error().ptr_eq(&missing));
        assert_eq!(not_found.suppressed().len(), 1);
        assert!(not_found.suppressed()[0].ptr_eq(&outer));
    }

    #[test]
    fn test_access_above_not_found_wins() {
        let missing = DelegateError::not_found("no binding for service");
        let denied = DelegateError::access("credentials rejected").caused_by(missing.clone());
        let outer = DelegateError::other("lookup failed").caused_by(denied);

        let access = expect_access(classify(&outer));

        // The whole original chain is the cause; nothing is suppressed and
        // the deepest not-found is still reachable through it.
        assert!(access.cause().is_some_and(|cause| cause.ptr_eq(&outer)));
        assert!(access.suppressed().is_empty());
        let cause = access.cause().unwrap();
        assert!(cause.root_cause().ptr_eq(&missing));
    }

    #[test]
    fn test_access_below_wrappers_still_rewraps_the_origin() {
        let denied = DelegateError::access("endpoint unreachable");
        let outer = DelegateError::other("lookup failed").caused_by(denied);

        let access = expect_access(classify(&outer));

        assert!(access.cause().is_some_and(|cause| cause.ptr_eq(&outer)));
    }

    #[test]
    fn test_promoted_error_keeps_its_own_diagnostics() {
        let aside = DelegateError::other("fallback lookup also failed");
        let underlying = DelegateError::other("registry returned nothing");
        let missing = DelegateError::not_found("no binding for service")
            .caused_by(underlying.clone())
            .suppressing(aside.clone());
        let wrapper = DelegateError::other("lookup failed").caused_by(missing.clone());

        let not_found = expect_not_found(classify(&wrapper));

        assert!(not_found.error().ptr_eq(&missing));
        assert!(not_found.cause().is_some_and(|c| c.ptr_eq(&underlying)));
        assert_eq!(not_found.error().suppressed().len(), 1);
        assert!(not_found.error().suppressed()[0].ptr_eq(&aside));
        assert_eq!(not_found.suppressed().len(), 1);
        assert!(not_found.suppressed()[0].ptr_eq(&wrapper));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let missing = DelegateError::not_found("no binding for service");
        let wrapper = DelegateError::other("lookup failed").caused_by(missing.clone());

        let first = expect_not_found(classify(&wrapper));
        let second = expect_not_found(classify(&wrapper));

        assert!(first.error().ptr_eq(second.error()));
        assert_eq!(first.suppressed().len(), second.suppressed().len());
    }
}
