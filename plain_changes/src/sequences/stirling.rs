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

//! # Stirling Permutations

use super::{doubled, Enumeration, Swap, Walk};
use crate::changes::StirlingChanges;
use crate::count::Family;

/// # Stirling Permutations
///
/// Iterates over all Stirling permutations of order `n`. A Stirling permutation is a double
/// permutation of `0..n`, in which only larger values appear between the two copies of any value.
/// The first object is `[0, 0, 1, 1, ..., n-1, n-1]`, and every other one is obtained from its
/// predecessor by swapping two items at distance two, as described by [`StirlingChanges`].
#[derive(Debug)]
pub struct StirlingPermutations {
    walk: Walk<StirlingChanges, usize, Swap>,
}

impl StirlingPermutations {
    /// Creates the sequence of Stirling permutations of order `n`.
    pub fn new(n: usize) -> Self {
        Self {
            walk: Walk::new(
                Family::StirlingPermutations,
                doubled(n),
                StirlingChanges::new(n),
                Swap(2),
            ),
        }
    }
}

impl Enumeration for StirlingPermutations {
    type Label = usize;

    fn advance(&mut self) -> Option<&[usize]> {
        self.walk.advance()
    }

    fn current(&self) -> &[usize] {
        self.walk.current()
    }
}

impl Iterator for StirlingPermutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|p| p.to_vec())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_stirling_0() {
        let permutations: Vec<Vec<usize>> = StirlingPermutations::new(0).collect();
        assert_eq!(permutations, vec![vec![]]);
    }

    #[test]
    fn test_stirling_1() {
        let permutations: Vec<Vec<usize>> = StirlingPermutations::new(1).collect();
        assert_eq!(permutations, vec![vec![0, 0]]);
    }

    #[test]
    fn test_stirling_2() {
        let permutations: Vec<Vec<usize>> = StirlingPermutations::new(2).collect();
        assert_eq!(permutations, vec![vec![0, 0, 1, 1], vec![0, 1, 1, 0], vec![1, 1, 0, 0]]);
    }

    #[test]
    fn test_stirling_3() {
        let permutations: Vec<Vec<usize>> = StirlingPermutations::new(3).collect();
        assert_eq!(
            permutations,
            vec![
                vec![0, 0, 1, 1, 2, 2],
                vec![0, 0, 1, 2, 2, 1],
                vec![0, 0, 2, 2, 1, 1],
                vec![0, 2, 2, 0, 1, 1],
                vec![2, 2, 0, 0, 1, 1],
                vec![2, 2, 0, 1, 1, 0],
                vec![0, 2, 2, 1, 1, 0],
                vec![0, 1, 2, 2, 1, 0],
                vec![0, 1, 1, 2, 2, 0],
                vec![0, 1, 1, 0, 2, 2],
                vec![1, 1, 0, 0, 2, 2],
                vec![1, 1, 0, 2, 2, 0],
                vec![1, 1, 2, 2, 0, 0],
                vec![1, 2, 2, 1, 0, 0],
                vec![2, 2, 1, 1, 0, 0],
            ]
        );
    }
}
