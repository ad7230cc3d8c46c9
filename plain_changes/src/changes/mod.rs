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

//! # Change Streams
//!
//! This module contains the generators of *change streams*. A change stream is a lazy sequence of
//! positions, where each position describes the single local edit that transforms the current
//! object into the next one. The generators never touch the object itself, this is the job of the
//! [sequences](crate::sequences).
//!
//! ## Different Change Streams
//! - **[`PlainChanges`]**: Swap positions of the Steinhaus-Johnson-Trotter algorithm. Change `x`
//!   means that positions `x` and `x + 1` are swapped.
//!
//! - **[`DoublePlainChanges`]**: Adjacent swaps over a sequence of length `2n`, in which each of
//!   the `n` values appears twice.
//!
//! - **[`StirlingChanges`]**: Swaps of positions `x` and `x + 2`, keeping the Stirling property
//!   intact.
//!
//! - **[`InvolutionChanges`]**: Positions at which one of four structural edits is applied to an
//!   involution. See [`Involutions`](crate::sequences::Involutions) for the meaning of each edit.
//!
//! All generators are built recursively: every instance of size `n` owns exactly one instance of
//! a smaller size, and interleaves its changes with runs of consecutive positions. The total
//! space is thus `O(n)`, and the amortized work per change is `O(1)`.

mod plain;
pub use plain::PlainChanges;

mod double;
pub use double::DoublePlainChanges;

mod stirling;
pub use stirling::StirlingChanges;

mod involution;
pub use involution::InvolutionChanges;

use itertools::Either;
use std::iter::{FusedIterator, Rev};
use std::ops::Range;

/// Direction in which a run of positions is traversed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    /// From the lowest to the highest position
    Up,
    /// From the highest to the lowest position
    Down,
}

impl Direction {
    /// Returns the opposite direction
    pub fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Run of consecutive positions, either ascending or descending.
pub type IndexRun = Either<Range<usize>, Rev<Range<usize>>>;

/// Creates a run over all positions in `span`, traversed in the direction `dir`.
pub fn index_run(span: Range<usize>, dir: Direction) -> IndexRun {
    match dir {
        Direction::Up => Either::Left(span),
        Direction::Down => Either::Right(span.rev()),
    }
}

/// # Sweep
///
/// Shared machinery of all change streams that depend on a single smaller instance. The sweep
/// alternates between a run of positions over `span` and a single change taken from the child.
/// Runs alternate their direction, starting with `first`. A change of the child is shifted by
/// `shift.0` if the run before it went in direction `first`, and by `shift.1` otherwise. The sweep
/// ends as soon as the child is exhausted, at which point the child is released.
///
/// The child is only built (using `build`) once the first run is exhausted. Creating a sweep thus
/// never recurses, no matter how large the child would be.
#[derive(Debug)]
pub(crate) struct Sweep<C> {
    child: Child<C>,
    build: fn(usize) -> C,
    span: Range<usize>,
    first: Direction,
    shift: (usize, usize),
    dir: Direction,
    run: IndexRun,
    in_run: bool,
}

#[derive(Debug)]
enum Child<C> {
    /// Not yet built, with the size it will be built with
    Pending(usize),
    Live(C),
    Released,
}

impl<C> Sweep<C>
where
    C: Iterator<Item = usize>,
{
    /// Create a sweep whose first run spans the same positions as all others. The child of size
    /// `child_size` is built with `build` when it is first needed.
    pub(crate) fn new(
        child_size: usize,
        build: fn(usize) -> C,
        span: Range<usize>,
        first: Direction,
        shift: (usize, usize),
    ) -> Self {
        let lead = span.clone();
        Self::with_lead(child_size, build, span, first, shift, lead)
    }

    /// Create a sweep whose first run spans `lead` instead of `span`. All later runs span `span`.
    pub(crate) fn with_lead(
        child_size: usize,
        build: fn(usize) -> C,
        span: Range<usize>,
        first: Direction,
        shift: (usize, usize),
        lead: Range<usize>,
    ) -> Self {
        Self {
            child: Child::Pending(child_size),
            build,
            span,
            first,
            shift,
            dir: first,
            run: index_run(lead, first),
            in_run: true,
        }
    }
}

impl<C> Iterator for Sweep<C>
where
    C: Iterator<Item = usize>,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.in_run {
            if let Some(x) = self.run.next() {
                return Some(x);
            }
            self.in_run = false;
        }

        if let Child::Pending(size) = self.child {
            self.child = Child::Live((self.build)(size));
        }
        let change = match &mut self.child {
            Child::Live(child) => child.next(),
            _ => None,
        };

        let shift = if self.dir == self.first { self.shift.0 } else { self.shift.1 };
        match change {
            Some(c) => {
                self.dir = self.dir.reverse();
                self.run = index_run(self.span.clone(), self.dir);
                self.in_run = true;
                Some(c + shift)
            }
            None => {
                // the child is done, and so are we
                self.child = Child::Released;
                None
            }
        }
    }
}

impl<C> FusedIterator for Sweep<C> where C: Iterator<Item = usize> {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_index_run() {
        assert_eq!(index_run(0..4, Direction::Up).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(index_run(0..4, Direction::Down).collect::<Vec<_>>(), vec![3, 2, 1, 0]);
        assert_eq!(index_run(2..4, Direction::Down).collect::<Vec<_>>(), vec![3, 2]);
        assert_eq!(index_run(0..0, Direction::Down).count(), 0);
    }

    #[test]
    fn test_sweep_empty_child() {
        let sweep = Sweep::new(0, |_| std::iter::empty(), 0..3, Direction::Down, (1, 0));
        assert_eq!(sweep.collect::<Vec<_>>(), vec![2, 1, 0]);
    }

    #[test]
    fn test_sweep_shifts() {
        let build = |_: usize| vec![10, 20, 30].into_iter();
        let sweep = Sweep::new(0, build, 1..3, Direction::Up, (1, 2));
        assert_eq!(sweep.collect::<Vec<_>>(), vec![1, 2, 11, 2, 1, 22, 1, 2, 31, 2, 1]);
    }

    #[test]
    fn test_sweep_lead() {
        let build = |_: usize| vec![5].into_iter();
        let sweep = Sweep::with_lead(0, build, 0..2, Direction::Down, (1, 0), 0..1);
        assert_eq!(sweep.collect::<Vec<_>>(), vec![0, 6, 0, 1]);
    }

    #[test]
    fn test_sweep_fused() {
        let mut sweep = Sweep::new(0, |_| std::iter::empty(), 0..1, Direction::Up, (0, 0));
        assert_eq!(sweep.next(), Some(0));
        assert_eq!(sweep.next(), None);
        assert_eq!(sweep.next(), None);
    }

    #[test]
    fn test_sweep_builds_child_lazily() {
        let build: fn(usize) -> std::ops::Range<usize> = |size| {
            assert_eq!(size, 7);
            0..1
        };
        let mut sweep = Sweep::new(7, build, 0..2, Direction::Down, (1, 0));
        assert!(matches!(sweep.child, Child::Pending(7)));
        assert_eq!(sweep.next(), Some(1));
        assert_eq!(sweep.next(), Some(0));
        assert!(matches!(sweep.child, Child::Pending(7)));
        assert_eq!(sweep.next(), Some(1));
        assert!(matches!(sweep.child, Child::Live(_)));
        assert_eq!(sweep.by_ref().count(), 2);
        assert!(matches!(sweep.child, Child::Released));
    }
}
