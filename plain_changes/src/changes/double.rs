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

//! # Double Plain Changes
//!
//! Change stream for double permutations, where each value appears exactly twice.

use super::{Direction, Sweep};
use std::iter::FusedIterator;

/// # Double Plain Changes
///
/// Generates adjacent swaps over a sequence of length `2n`, which initially contains every value
/// `0..n` twice, in increasing order. Every change `x` is in `1..2n-1`, and means that positions
/// `x` and `x + 1` must be swapped. The runs start at position `1`, since the first position
/// always holds the first copy of the smallest value.
///
/// The stream enumerates every arrangement in which the first copies of the values appear in
/// increasing order, which are `(2n - 1)!!` many. Thus, `(2n - 1)!! - 1` changes are generated.
#[derive(Debug)]
pub struct DoublePlainChanges {
    sweep: Option<Sweep<Box<DoublePlainChanges>>>,
}

impl DoublePlainChanges {
    /// Creates the change stream for `n` doubled values.
    pub fn new(n: usize) -> Self {
        if n < 1 {
            return Self { sweep: None };
        }
        Self {
            sweep: Some(Sweep::new(
                n - 1,
                |m| Box::new(Self::new(m)),
                1..2 * n - 1,
                Direction::Up,
                (1, 2),
            )),
        }
    }
}

impl Iterator for DoublePlainChanges {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.sweep.as_mut()?.next()
    }
}

impl FusedIterator for DoublePlainChanges {}
