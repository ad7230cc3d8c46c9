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

//! # Double Permutations

use super::{doubled, Enumeration, Swap, Walk};
use crate::changes::DoublePlainChanges;
use crate::count::Family;

/// # Double Steinhaus-Johnson-Trotter
///
/// Iterates over double permutations of `0..n`, i.e., arrangements in which every value appears
/// exactly twice. The first object is `[0, 0, 1, 1, ..., n-1, n-1]`, and every other one is
/// obtained from its predecessor by swapping two adjacent items, as described by
/// [`DoublePlainChanges`]. The arrangements in which the first copies of the values appear in
/// increasing order are each generated exactly once.
#[derive(Debug)]
pub struct DoubleSteinhausJohnsonTrotter {
    walk: Walk<DoublePlainChanges, usize, Swap>,
}

impl DoubleSteinhausJohnsonTrotter {
    /// Creates the sequence of double permutations of `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            walk: Walk::new(
                Family::DoublePermutations,
                doubled(n),
                DoublePlainChanges::new(n),
                Swap(1),
            ),
        }
    }
}

impl Enumeration for DoubleSteinhausJohnsonTrotter {
    type Label = usize;

    fn advance(&mut self) -> Option<&[usize]> {
        self.walk.advance()
    }

    fn current(&self) -> &[usize] {
        self.walk.current()
    }
}

impl Iterator for DoubleSteinhausJohnsonTrotter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|p| p.to_vec())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_double_sjt_0() {
        let permutations: Vec<Vec<usize>> = DoubleSteinhausJohnsonTrotter::new(0).collect();
        assert_eq!(permutations, vec![vec![]]);
    }

    #[test]
    fn test_double_sjt_1() {
        let permutations: Vec<Vec<usize>> = DoubleSteinhausJohnsonTrotter::new(1).collect();
        assert_eq!(permutations, vec![vec![0, 0]]);
    }

    #[test]
    fn test_double_sjt_2() {
        let permutations: Vec<Vec<usize>> = DoubleSteinhausJohnsonTrotter::new(2).collect();
        assert_eq!(permutations, vec![vec![0, 0, 1, 1], vec![0, 1, 0, 1], vec![0, 1, 1, 0]]);
    }

    #[test]
    fn test_double_sjt_3() {
        let permutations: Vec<Vec<usize>> = DoubleSteinhausJohnsonTrotter::new(3).collect();
        assert_eq!(
            permutations,
            vec![
                vec![0, 0, 1, 1, 2, 2],
                vec![0, 1, 0, 1, 2, 2],
                vec![0, 1, 1, 0, 2, 2],
                vec![0, 1, 1, 2, 0, 2],
                vec![0, 1, 1, 2, 2, 0],
                vec![0, 1, 2, 1, 2, 0],
                vec![0, 1, 2, 1, 0, 2],
                vec![0, 1, 2, 0, 1, 2],
                vec![0, 1, 0, 2, 1, 2],
                vec![0, 0, 1, 2, 1, 2],
                vec![0, 0, 1, 2, 2, 1],
                vec![0, 1, 0, 2, 2, 1],
                vec![0, 1, 2, 0, 2, 1],
                vec![0, 1, 2, 2, 0, 1],
                vec![0, 1, 2, 2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_double_sjt_first_copies_ordered() {
        for p in DoubleSteinhausJohnsonTrotter::new(4) {
            let mut firsts: Vec<usize> = Vec::new();
            for x in p {
                if !firsts.contains(&x) {
                    firsts.push(x);
                }
            }
            assert_eq!(firsts, vec![0, 1, 2, 3]);
        }
    }
}
