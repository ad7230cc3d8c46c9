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

//! # Plain Changes
//!
//! Change stream of the Steinhaus-Johnson-Trotter algorithm, also known as *plain changes*.

use super::{Direction, Sweep};
use std::iter::FusedIterator;

/// # Plain Changes
///
/// Generates the swaps of the Steinhaus-Johnson-Trotter algorithm for `n` items. Every change `x`
/// is in `0..n-1`, and means that positions `x` and `x + 1` must be swapped. In total, `n! - 1`
/// changes are generated, and none for `n < 2`.
///
/// The largest item sweeps back and forth over the remaining ones. Its position is never stored.
/// Instead, it is encoded in the side on which the change of the smaller instance is emitted: after
/// a descending run, the largest item sits in front of all others, and the child's change must be
/// shifted by one. The smaller instance is only created once the first run is exhausted, so
/// creating the stream is `O(1)`, and the first changes are available immediately.
///
/// ```
/// use plain_changes::changes::PlainChanges;
///
/// assert_eq!(PlainChanges::new(3).collect::<Vec<_>>(), vec![1, 0, 1, 0, 1]);
/// ```
#[derive(Debug)]
pub struct PlainChanges {
    sweep: Option<Sweep<Box<PlainChanges>>>,
}

impl PlainChanges {
    /// Creates the change stream for `n` items.
    pub fn new(n: usize) -> Self {
        if n < 1 {
            return Self { sweep: None };
        }
        Self {
            sweep: Some(Sweep::new(
                n - 1,
                |m| Box::new(Self::new(m)),
                0..n - 1,
                Direction::Down,
                (1, 0),
            )),
        }
    }
}

impl Iterator for PlainChanges {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.sweep.as_mut()?.next()
    }
}

impl FusedIterator for PlainChanges {}
