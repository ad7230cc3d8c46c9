// Plain Changes: Gray-Code Enumeration of Permutations and Involutions
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! # Steinhaus-Johnson-Trotter Permutations

use super::{Enumeration, Swap, Walk};
use crate::changes::PlainChanges;
use crate::count::Family;

/// # Steinhaus-Johnson-Trotter
///
/// Iterates over all permutations of a sequence, in the order of the Steinhaus-Johnson-Trotter
/// algorithm. The first permutation is the input itself, and every other one is obtained from its
/// predecessor by swapping two adjacent items, as described by [`PlainChanges`].
///
/// The sequence can either be created from a vector of items ([`new`](Self::new)), or from a
/// size `n` ([`with_size`](Self::with_size)), in which case the permutations of `0..n` are
/// generated.
///
/// ```
/// use plain_changes::sequences::SteinhausJohnsonTrotter;
///
/// let permutations: Vec<Vec<char>> = SteinhausJohnsonTrotter::new(vec!['a', 'b', 'c']).collect();
/// assert_eq!(
///     permutations,
///     vec![
///         vec!['a', 'b', 'c'],
///         vec!['a', 'c', 'b'],
///         vec!['c', 'a', 'b'],
///         vec!['c', 'b', 'a'],
///         vec!['b', 'c', 'a'],
///         vec!['b', 'a', 'c'],
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct SteinhausJohnsonTrotter<T> {
    walk: Walk<PlainChanges, T, Swap>,
}

impl<T> SteinhausJohnsonTrotter<T> {
    /// Creates the sequence of all permutations of `items`, starting with `items` itself.
    pub fn new(items: Vec<T>) -> Self {
        let changes = PlainChanges::new(items.len());
        Self { walk: Walk::new(Family::Permutations, items, changes, Swap(1)) }
    }
}

impl SteinhausJohnsonTrotter<usize> {
    /// Creates the sequence of all permutations of `0..n`, starting with the identity.
    pub fn with_size(n: usize) -> Self {
        Self::new((0..n).collect())
    }
}

impl<T> From<Vec<T>> for SteinhausJohnsonTrotter<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl From<usize> for SteinhausJohnsonTrotter<usize> {
    fn from(n: usize) -> Self {
        Self::with_size(n)
    }
}

impl<T> Enumeration for SteinhausJohnsonTrotter<T> {
    type Label = T;

    fn advance(&mut self) -> Option<&[T]> {
        self.walk.advance()
    }

    fn current(&self) -> &[T] {
        self.walk.current()
    }
}

impl<T> Iterator for SteinhausJohnsonTrotter<T>
where
    T: Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|p| p.to_vec())
    }
}
