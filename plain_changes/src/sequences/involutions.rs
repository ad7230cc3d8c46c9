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

//! # Involutions

use super::{Enumeration, Step, Walk};
use crate::changes::InvolutionChanges;
use crate::count::Family;

use log::*;

/// Local edit that transforms one involution into the next.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InvolutionEdit {
    /// Two adjacent fixed points become a pair.
    AddPair,
    /// One end of a pair moves to the adjacent fixed point.
    MovePair,
    /// An adjacent pair is split into two fixed points.
    RemovePair,
    /// Two adjacent items of two different pairs exchange their partners.
    SwapPairs,
}

/// # Involutions
///
/// Iterates over all involutions on `n` items, stored in array form: `p[i]` is the partner of
/// `i`, and `p[p[i]] == i` for all `i`. The first involution is always the identity, and the last
/// one is the one in which only the last two items are swapped.
///
/// Every change `c` of the [`InvolutionChanges`] is applied to the positions `c` and `c + 1`, and
/// the kind of edit depends on the current involution:
/// - If both `c` and `c + 1` are fixed, they become a pair ([`InvolutionEdit::AddPair`]).
/// - If exactly one of them is fixed, the other one is paired with some `i`. Then, `i` is paired
///   with the fixed one instead, and the other one becomes fixed ([`InvolutionEdit::MovePair`]).
/// - If `c` and `c + 1` are paired with each other, they both become fixed
///   ([`InvolutionEdit::RemovePair`]).
/// - Otherwise, `c` and `c + 1` belong to two different pairs, and exchange their partners
///   ([`InvolutionEdit::SwapPairs`]).
///
/// ```
/// use plain_changes::sequences::Involutions;
///
/// let involutions: Vec<Vec<usize>> = Involutions::new(3).collect();
/// assert_eq!(
///     involutions,
///     vec![vec![0, 1, 2], vec![1, 0, 2], vec![2, 1, 0], vec![0, 2, 1]]
/// );
/// ```
#[derive(Debug)]
pub struct Involutions {
    walk: Walk<InvolutionChanges, usize, InvolutionStep>,
}

impl Involutions {
    /// Creates the sequence of all involutions on `n` items.
    pub fn new(n: usize) -> Self {
        Self {
            walk: Walk::new(
                Family::Involutions,
                (0..n).collect(),
                InvolutionChanges::new(n),
                InvolutionStep,
            ),
        }
    }

    /// Returns the edit which produced the current involution, or `None` if the current one is
    /// the identity at the start of the sequence.
    pub fn last_edit(&self) -> Option<InvolutionEdit> {
        self.walk.last_edit()
    }
}

/// Applies one of the four edits at positions `c` and `c + 1`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct InvolutionStep;

impl Step<usize> for InvolutionStep {
    type Edit = InvolutionEdit;

    fn apply(&self, p: &mut [usize], c: usize) -> InvolutionEdit {
        let d = c + 1;
        let edit = if p[c] == c && p[d] == d {
            p[c] = d;
            p[d] = c;
            InvolutionEdit::AddPair
        } else if p[c] == c {
            let i = p[d];
            p[c] = i;
            p[d] = d;
            p[i] = c;
            InvolutionEdit::MovePair
        } else if p[d] == d {
            let i = p[c];
            p[c] = c;
            p[d] = i;
            p[i] = d;
            InvolutionEdit::MovePair
        } else if p[c] == d {
            p[c] = c;
            p[d] = d;
            InvolutionEdit::RemovePair
        } else {
            let (x, y) = (p[c], p[d]);
            p[x] = d;
            p[y] = c;
            p[c] = y;
            p[d] = x;
            InvolutionEdit::SwapPairs
        };
        trace!("{:?} at positions {} and {}", edit, c, d);
        edit
    }
}

impl Enumeration for Involutions {
    type Label = usize;

    fn advance(&mut self) -> Option<&[usize]> {
        self.walk.advance()
    }

    fn current(&self) -> &[usize] {
        self.walk.current()
    }
}

impl Iterator for Involutions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|p| p.to_vec())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_involutions_0() {
        let involutions: Vec<Vec<usize>> = Involutions::new(0).collect();
        assert_eq!(involutions, vec![vec![]]);
    }

    #[test]
    fn test_involutions_1() {
        let involutions: Vec<Vec<usize>> = Involutions::new(1).collect();
        assert_eq!(involutions, vec![vec![0]]);
    }

    #[test]
    fn test_involutions_2() {
        let involutions: Vec<Vec<usize>> = Involutions::new(2).collect();
        assert_eq!(involutions, vec![vec![0, 1], vec![1, 0]]);
    }

    #[test]
    fn test_involutions_4() {
        let involutions: Vec<Vec<usize>> = Involutions::new(4).collect();
        assert_eq!(
            involutions,
            vec![
                vec![0, 1, 2, 3],
                vec![1, 0, 2, 3],
                vec![2, 1, 0, 3],
                vec![0, 2, 1, 3],
                vec![0, 3, 2, 1],
                vec![3, 1, 2, 0],
                vec![3, 2, 1, 0],
                vec![2, 3, 0, 1],
                vec![1, 0, 3, 2],
                vec![0, 1, 3, 2],
            ]
        );
    }

    #[test]
    fn test_involutions_edits() {
        let mut seq = Involutions::new(4);
        let mut edits = Vec::new();
        while seq.advance().is_some() {
            edits.push(seq.last_edit());
        }
        assert_eq!(
            edits,
            vec![
                None,
                Some(InvolutionEdit::AddPair),
                Some(InvolutionEdit::MovePair),
                Some(InvolutionEdit::MovePair),
                Some(InvolutionEdit::MovePair),
                Some(InvolutionEdit::MovePair),
                Some(InvolutionEdit::AddPair),
                Some(InvolutionEdit::SwapPairs),
                Some(InvolutionEdit::SwapPairs),
                Some(InvolutionEdit::RemovePair),
            ]
        );
    }

    #[test]
    fn test_involutions_last_is_final_pair() {
        for n in 2..9 {
            let last = Involutions::new(n).last().unwrap();
            let mut expected: Vec<usize> = (0..n).collect();
            expected.swap(n - 2, n - 1);
            assert_eq!(last, expected);
        }
    }
}
