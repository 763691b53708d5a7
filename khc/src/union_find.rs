use std::collections::HashMap;
use std::hash::Hash;

use itertools::Itertools;

/// Disjoint sets over `0..n`, unioned towards the smaller root so that
/// grouping is deterministic in insertion order.
pub struct UnionFind {
    parent: Vec<usize>
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self { parent: (0..n).collect() }
    }

    pub fn extend(&mut self, l: usize) {
        let n = self.parent.len();
        self.parent.extend(n .. n + l);
    }

    pub fn size(&self) -> usize {
        self.parent.len()
    }

    pub fn root(&self, i: usize) -> usize {
        let mut i = i;
        while self.parent[i] != i {
            i = self.parent[i];
        }
        i
    }

    pub fn is_same(&self, i: usize, j: usize) -> bool {
        self.root(i) == self.root(j)
    }

    pub fn union(&mut self, i: usize, j: usize) {
        use std::cmp::Ordering::*;
        let ri = self.root(i);
        let rj = self.root(j);

        match usize::cmp(&ri, &rj) {
            Less    => self.parent[rj] = ri,
            Equal   => (),
            Greater => self.parent[ri] = rj,
        }
    }

    pub fn group(&self) -> Vec<Vec<usize>> {
        let n = self.size();
        (0..n).into_group_map_by(|&i| self.root(i))
            .into_iter()
            .sorted_by_key(|&(r, _)| r)
            .map(|(_, l)| l)
            .collect()
    }
}

/// Union-find keyed by arbitrary hashable values, e.g. edge labels.
pub struct KeyedUnionFind<X>
where X: Clone + Eq + Hash {
    inner: UnionFind,
    keys: Vec<X>,
    index: HashMap<X, usize>
}

impl<X> KeyedUnionFind<X>
where X: Clone + Eq + Hash {
    pub fn new() -> Self {
        Self { inner: UnionFind::new(0), keys: vec![], index: HashMap::new() }
    }

    pub fn size(&self) -> usize {
        self.inner.size()
    }

    pub fn contains(&self, x: &X) -> bool {
        self.index.contains_key(x)
    }

    // no-op when `x` is already present.
    pub fn insert(&mut self, x: X) -> usize {
        if let Some(&i) = self.index.get(&x) {
            return i
        }
        let i = self.size();
        self.inner.extend(1);
        self.keys.push(x.clone());
        self.index.insert(x, i);
        i
    }

    pub fn union(&mut self, x: &X, y: &X) {
        let i = self.index[x];
        let j = self.index[y];
        self.inner.union(i, j);
    }

    pub fn is_same(&self, x: &X, y: &X) -> bool {
        self.inner.is_same(self.index[x], self.index[y])
    }

    pub fn group(&self) -> Vec<Vec<&X>> {
        self.inner.group().iter().map(|l|
            l.iter().map(|&i| &self.keys[i]).collect()
        ).collect()
    }

    pub fn into_group(self) -> Vec<Vec<X>> {
        let group = self.inner.group();
        group.into_iter().map(|l|
            l.into_iter().map(|i| self.keys[i].clone()).collect()
        ).collect()
    }
}

impl<X> Default for KeyedUnionFind<X>
where X: Clone + Eq + Hash {
    fn default() -> Self {
        Self::new()
    }
}

impl<X> FromIterator<X> for KeyedUnionFind<X>
where X: Clone + Eq + Hash {
    fn from_iter<T: IntoIterator<Item = X>>(iter: T) -> Self {
        let mut uf = Self::new();
        for x in iter.into_iter() {
            uf.insert(x);
        }
        uf
    }
}
