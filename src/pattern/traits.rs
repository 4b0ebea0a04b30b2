//! Core traits for shape matchers

use crate::pattern::{Dispatch, Shape};
use crate::value::Scalar;
use std::fmt::Debug;

/// Query surface shared by matchers that carry a tag
///
/// Implemented by the empty, enum, variant and discriminated matchers. The
/// provided methods are written against [`TagMatcher::tag`] and
/// [`TagMatcher::into_fn`]; the empty matcher overrides the negated queries
/// because nothing, including inequality, holds for an absent value.
pub trait TagMatcher: Debug + Send + Sync {
    /// Shape this matcher was classified as
    fn shape(&self) -> Shape;

    /// Tag compared by the queries, `None` when absent
    fn tag(&self) -> Option<Scalar>;

    /// Dispatcher over the natural payload of this shape
    fn into_fn(&self) -> Dispatch;

    /// Strict equality of the tag against `candidate`
    fn is(&self, candidate: impl Into<Scalar>) -> bool {
        let candidate = candidate.into();
        self.tag().is_some_and(|tag| tag == candidate)
    }

    /// Negation of [`TagMatcher::is`]
    fn is_not(&self, candidate: impl Into<Scalar>) -> bool {
        !self.is(candidate)
    }

    /// Membership of the tag in `candidates`; an absent tag is never a member
    fn is_in<I, K>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = K>,
        K: Into<Scalar>,
    {
        match self.tag() {
            Some(tag) => candidates.into_iter().any(|c| c.into() == tag),
            None => false,
        }
    }

    /// Negation of [`TagMatcher::is_in`]
    fn not_in<I, K>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = K>,
        K: Into<Scalar>,
    {
        !self.is_in(candidates)
    }

    /// Like [`TagMatcher::into_fn`], gated on the tag being one of `tags`
    fn catch<I, K>(&self, tags: I) -> Dispatch
    where
        I: IntoIterator<Item = K>,
        K: Into<Scalar>,
    {
        if self.is_in(tags) {
            self.into_fn()
        } else {
            Dispatch::skip()
        }
    }
}
