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

//! # Stirling Changes
//!
//! Variant of the plain changes for Stirling permutations.

use super::{Direction, Sweep};
use std::iter::FusedIterator;

/// # Stirling Changes
///
/// A Stirling permutation is a double permutation, in which each pair of equal values has only
/// larger values between them. The largest pair is swept through the sequence of the smaller
/// values, recursing when it reaches either end, exactly as in [`PlainChanges`](super::PlainChanges).
/// The only difference is that items two positions apart are swapped: change `x` means that
/// positions `x` and `x + 2` must be swapped. Every change is in `0..2n-2`.
///
/// No changes are generated for `n < 2`.
#[derive(Debug)]
pub struct StirlingChanges {
    sweep: Option<Sweep<Box<StirlingChanges>>>,
}

impl StirlingChanges {
    /// Creates the change stream for Stirling permutations of order `n`.
    pub fn new(n: usize) -> Self {
        if n <= 1 {
            return Self { sweep: None };
        }
        Self {
            sweep: Some(Sweep::new(
                n - 1,
                |m| Box::new(Self::new(m)),
                0..2 * n - 2,
                Direction::Down,
                (2, 0),
            )),
        }
    }
}

impl Iterator for StirlingChanges {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.sweep.as_mut()?.next()
    }
}

impl FusedIterator for StirlingChanges {}
