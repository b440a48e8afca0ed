//! Resolution chain and the delegate resolver capability.
//!
//! This module contains the [`DelegateResolver`] trait every participant
//! implements and the [`ResolutionChain`] that dispatches across an ordered
//! sequence of them.

pub mod chain;
pub mod traits;

pub use chain::ResolutionChain;
pub use traits::DelegateResolver;
