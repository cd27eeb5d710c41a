use std::{
    fmt::{Debug, Display},
    ops::Index,
};

use itertools::Itertools;

use crate::prelude::*;

/// A square `n x n` matrix of edge multiplicities stored in row-major order.
///
/// `EdgeMatrix` itself does not enforce symmetry so that it can hold unvalidated input;
/// undirected graphs only ever mutate it through the `*_symmetric` methods.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct EdgeMatrix {
    n: NumNodes,
    entries: Vec<Multiplicity>,
}

impl EdgeMatrix {
    /// Creates a matrix of `n x n` zeros
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            entries: vec![0; n.idx() * n.idx()],
        }
    }

    /// Creates a matrix from a list of rows.
    /// ** Panics if the rows do not form a square matrix **
    ///
    /// # Example
    /// ```
    /// use ueuler::prelude::*;
    ///
    /// let m = EdgeMatrix::from_rows([[0, 1], [1, 0]]);
    /// assert_eq!(m.number_of_nodes(), 2);
    /// assert_eq!(m[(0, 1)], 1);
    /// ```
    pub fn from_rows<R, I>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = Multiplicity>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().collect_vec())
            .collect_vec();
        let n = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == n),
            "Adjacency matrix must be square"
        );

        Self {
            n: n as NumNodes,
            entries: rows.into_iter().flatten().collect(),
        }
    }

    /// Returns the number of rows (and columns)
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    #[inline]
    fn index_of(&self, u: Node, v: Node) -> usize {
        debug_assert!(u < self.n && v < self.n);
        u.idx() * self.n.idx() + v.idx()
    }

    /// Returns entry `(u, v)`
    /// ** Panics if `u >= n || v >= n` **
    #[inline]
    pub fn get(&self, u: Node, v: Node) -> Multiplicity {
        self.entries[self.index_of(u, v)]
    }

    /// Sets entry `(u, v)` only
    pub fn set(&mut self, u: Node, v: Node, m: Multiplicity) {
        let i = self.index_of(u, v);
        self.entries[i] = m;
    }

    /// Sets entries `(u, v)` and `(v, u)`
    pub fn set_symmetric(&mut self, u: Node, v: Node, m: Multiplicity) {
        self.set(u, v, m);
        self.set(v, u, m);
    }

    /// Adds one unit to `(u, v)` and, unless `u == v`, to `(v, u)`
    pub fn increment_symmetric(&mut self, u: Node, v: Node) {
        let i = self.index_of(u, v);
        self.entries[i] += 1;
        if u != v {
            let j = self.index_of(v, u);
            self.entries[j] += 1;
        }
    }

    /// Removes one unit from `(u, v)` and, unless `u == v`, from `(v, u)`.
    /// Returns *false* and leaves the matrix untouched if `(u, v)` is already zero.
    pub fn try_decrement_symmetric(&mut self, u: Node, v: Node) -> bool {
        let i = self.index_of(u, v);
        if self.entries[i] == 0 {
            return false;
        }

        self.entries[i] -= 1;
        if u != v {
            let j = self.index_of(v, u);
            debug_assert!(self.entries[j] > 0);
            self.entries[j] -= 1;
        }
        true
    }

    /// Assigns `f(u, v)` to every pair `u <= v` and mirrors it to `(v, u)`
    pub fn fill_symmetric<F>(&mut self, mut f: F)
    where
        F: FnMut(Node, Node) -> Multiplicity,
    {
        for u in 0..self.n {
            for v in u..self.n {
                self.set_symmetric(u, v, f(u, v));
            }
        }
    }

    /// Returns row `u` as a slice
    pub fn row(&self, u: Node) -> &[Multiplicity] {
        let n = self.n.idx();
        &self.entries[u.idx() * n..(u.idx() + 1) * n]
    }

    /// Returns an iterator over all rows
    pub fn rows(&self) -> impl Iterator<Item = &[Multiplicity]> + '_ {
        // `chunks_exact(0)` panics, but an empty matrix has no entries to chunk anyway
        self.entries.chunks_exact(self.n.idx().max(1))
    }

    /// Returns the first pair `u < v` (in row-major order) whose entries differ
    pub fn first_asymmetry(&self) -> Option<Edge> {
        (0..self.n)
            .flat_map(|u| ((u + 1)..self.n).map(move |v| Edge(u, v)))
            .find(|&Edge(u, v)| self.get(u, v) != self.get(v, u))
    }

    /// Returns *true* if the matrix is symmetric
    pub fn is_symmetric(&self) -> bool {
        self.first_asymmetry().is_none()
    }

    /// Returns *true* if every entry is zero
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|&m| m == 0)
    }

    /// Sum over the upper triangle (diagonal included), i.e. the number of undirected edges.
    /// Returns `None` if the sum exceeds [`NumEdges::MAX`].
    pub fn upper_triangle_sum(&self) -> Option<NumEdges> {
        (0..self.n).try_fold(0 as NumEdges, |sum, u| {
            self.row(u)[u.idx()..]
                .iter()
                .try_fold(sum, |sum, &m| sum.checked_add(m))
        })
    }

    /// Row sum of `u` with the diagonal entry counted twice, i.e. the degree of `u`.
    /// Returns `None` if the sum exceeds [`NumEdges::MAX`].
    pub fn checked_degree(&self, u: Node) -> Option<NumEdges> {
        let row = self.row(u);
        row.iter()
            .try_fold(row[u.idx()], |sum, &m| sum.checked_add(m))
    }
}

impl Index<(Node, Node)> for EdgeMatrix {
    type Output = Multiplicity;

    fn index(&self, (u, v): (Node, Node)) -> &Self::Output {
        &self.entries[self.index_of(u, v)]
    }
}

impl Display for EdgeMatrix {
    /// `n` lines of `n` space-separated entries
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

impl Debug for EdgeMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}
