//! Work-splitting strategy shared by the sequential and parallel code paths.
//!
//! Every operation that has a parallel form is written once against
//! [`Execution`]; `Sequential` is the trivial split.

use rayon::prelude::*;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Execution {
    #[default]
    Sequential,
    Parallel,
}

impl Execution {
    /// Map every item, keeping input order in the output.
    pub fn map<T, R, F>(self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        match self {
            Execution::Sequential => items.iter().map(f).collect(),
            Execution::Parallel => items.par_iter().map(f).collect(),
        }
    }

    /// Run `f` over every value of `map`. In parallel mode each worker owns a disjoint set of keys.
    pub fn for_each_value_mut<K, V, F>(self, map: &mut BTreeMap<K, V>, f: F)
    where
        K: Ord + Sync,
        V: Send,
        F: Fn(&mut V) + Sync + Send,
    {
        match self {
            Execution::Sequential => map.values_mut().for_each(f),
            Execution::Parallel => map.par_iter_mut().for_each(|(_, v)| f(v)),
        }
    }

    /// Run two closures, concurrently in parallel mode, and return both results.
    pub fn join<A, B, RA, RB>(self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        match self {
            Execution::Sequential => (a(), b()),
            Execution::Parallel => rayon::join(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_preserves_order() {
        let items: Vec<u32> = (0..1000).collect();
        let seq = Execution::Sequential.map(&items, |x| x * 2);
        let par = Execution::Parallel.map(&items, |x| x * 2);
        assert_eq!(seq, par);
        assert_eq!(par[999], 1998);
    }

    #[test]
    fn for_each_value_mut_touches_every_value() {
        let mut map: BTreeMap<u32, u32> = (0..100).map(|k| (k, k)).collect();
        Execution::Parallel.for_each_value_mut(&mut map, |v| *v += 1);
        assert!(map.iter().all(|(k, v)| *v == k + 1));
    }
}
