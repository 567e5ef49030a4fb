//! Lazy range pipelines.
//!
//! A [`Pipeline`] wraps a source iterator and composes element-wise stages
//! (filter, transform, bounded prefix) without materializing intermediate
//! collections. No stage runs until the pipeline is iterated, and a
//! bounded-prefix stage stops pulling from its source once its quota is
//! met, so unbounded sources such as [`Naturals`] are safe to compose.

use std::iter::{Filter, Map, Take};
use std::vec;

use itertools::Itertools;

/// Unbounded ascending sequence of integers.
#[derive(Debug, Clone)]
pub struct Naturals {
    next: i64,
}

impl Naturals {
    /// Counting sequence starting at 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(start: i64) -> Self {
        Self { next: start }
    }
}

impl Default for Naturals {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Naturals {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let value = self.next;
        self.next += 1;
        Some(value)
    }
}

/// A lazy chain of element-wise stages over a source sequence.
///
/// Stages apply in declaration order; iteration order matches source
/// order. Iterating a freshly assembled pipeline re-executes every stage,
/// results are never cached.
pub struct Pipeline<I> {
    source: I,
}

impl<I: Iterator> Pipeline<I> {
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            source: source.into_iter(),
        }
    }

    /// Keep only elements for which `predicate` returns true.
    pub fn filter<P>(self, predicate: P) -> Pipeline<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Pipeline {
            source: self.source.filter(predicate),
        }
    }

    /// Apply a pure element-wise transformation.
    pub fn transform<B, F>(self, f: F) -> Pipeline<Map<I, F>>
    where
        F: FnMut(I::Item) -> B,
    {
        Pipeline {
            source: self.source.map(f),
        }
    }

    /// Bounded-prefix stage: keep only the first `n` elements. The source
    /// is never pulled past the bound, even when it is unbounded.
    pub fn take(self, n: usize) -> Pipeline<Take<I>> {
        Pipeline {
            source: self.source.take(n),
        }
    }

    /// Sort the remaining elements. Unlike the other stages this one is
    /// eager: it drains the source, so it must not follow an unbounded
    /// source without an intervening prefix bound.
    pub fn sorted(self) -> Pipeline<vec::IntoIter<I::Item>>
    where
        I::Item: Ord,
    {
        Pipeline {
            source: self.source.sorted(),
        }
    }
}

impl<I: Iterator> Iterator for Pipeline<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.source.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn naturals_start_at_one() {
        let head: Vec<i64> = Naturals::new().take(3).collect();
        assert_eq!(head, vec![1, 2, 3]);
    }

    #[test]
    fn stages_apply_in_declaration_order() {
        // Filter before transform: evens of the source, then squared.
        let result: Vec<i64> = Pipeline::new(1..=10_i64)
            .filter(|x| x % 2 == 0)
            .transform(|x| x * x)
            .collect();
        assert_eq!(result, vec![4, 16, 36, 64, 100]);
    }

    #[test]
    fn pipeline_is_lazy_until_iterated() {
        let mut calls = 0;
        let pipeline = Pipeline::new(1..=10_i64).transform(|x| {
            calls += 1;
            x * x
        });
        // Nothing evaluated at assembly time.
        let _unused: Vec<i64> = pipeline.take(2).collect();
        assert_eq!(calls, 2);
    }
}
