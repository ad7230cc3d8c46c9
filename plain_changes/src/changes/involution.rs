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

//! # Involution Changes
//!
//! Change stream for involutions, using a variation of the Steinhaus-Johnson-Trotter idea.

use super::{Direction, Sweep};
use std::iter::FusedIterator;
use std::slice;

/// Complete change streams for `n < 4`.
const BASE_CASES: [&[usize]; 4] = [&[], &[], &[0], &[0, 1, 0]];

/// # Involution Changes
///
/// Generates the positions at which the involutions on `n` items change. How a position is
/// applied depends on the current involution, see [`Involutions`](crate::sequences::Involutions).
///
/// Involutions are counted by the telephone numbers `T(n) = T(n-1) + (n-1) T(n-2)`, and the stream
/// follows this recurrence. It first replays the complete stream for `n - 1`, generating all
/// involutions in which the last item is fixed. It then pairs up the last item, and sweeps its
/// partner back and forth over a recursively generated stream for `n - 2`.
///
/// The stream for `n - 1` is itself a prefix of the stream for `n`, so it is not kept as a child.
/// Instead, the stream climbs through the sizes `4, 5, ..., n`, and at every size `m` emits the
/// part that is added to the stream for `m - 1`. Only the stream for `m - 2` is kept as a child,
/// and it is built lazily by the [`Sweep`].
///
/// In total, `T(n) - 1` changes are generated, each in `0..n-1`.
#[derive(Debug)]
pub struct InvolutionChanges {
    n: usize,
    /// Size of the stream which is currently being extended
    m: usize,
    state: State,
}

#[derive(Debug)]
enum State {
    /// Replaying one of the literal streams for `m < 4`
    Base(slice::Iter<'static, usize>),
    /// Sweeping over the stream for `m - 2`
    Sweep(Sweep<Box<InvolutionChanges>>),
    /// Done with size `m`, the next change belongs to size `m + 1`
    Climb,
    Done,
}

impl InvolutionChanges {
    /// Creates the change stream for involutions on `n` items.
    pub fn new(n: usize) -> Self {
        let m = n.min(BASE_CASES.len() - 1);
        let base: &'static [usize] = BASE_CASES[m];
        Self { n, m, state: State::Base(base.iter()) }
    }

    /// Move on to the next size, and return its first change.
    fn climb(&mut self) -> Option<usize> {
        if self.m >= self.n {
            self.state = State::Done;
            return None;
        }
        self.m += 1;
        let m = self.m;
        // pair up the last item, and start sweeping its partner down
        self.state = State::Sweep(Sweep::with_lead(
            m - 2,
            |k| Box::new(Self::new(k)),
            0..m - 2,
            Direction::Down,
            (1, 0),
            0..m - 3,
        ));
        Some(m - 2)
    }
}

impl Iterator for InvolutionChanges {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match &mut self.state {
            State::Base(changes) => match changes.next() {
                Some(c) => Some(*c),
                None => self.climb(),
            },
            State::Sweep(sweep) => match sweep.next() {
                Some(c) => Some(c),
                None => {
                    // one last change after the sweep
                    self.state = State::Climb;
                    Some(self.m - 4)
                }
            },
            State::Climb => self.climb(),
            State::Done => None,
        }
    }
}

impl FusedIterator for InvolutionChanges {}
