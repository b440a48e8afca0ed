//! Waypost - ordered fallback resolution of service-binding destinations.
//!
//! A [`resolver::ResolutionChain`] tries an ordered sequence of delegate
//! resolvers until one produces a [`destination::Destination`] for the
//! requested service binding. When every delegate fails, the failure is
//! collapsed into exactly one of two canonical categories - the destination
//! legitimately does not exist, or it could not be accessed - without losing
//! any of the diagnostic context the delegates raised.

pub mod binding;
pub mod destination;
pub mod error;
pub mod logging;
pub mod options;
pub mod resolver;
