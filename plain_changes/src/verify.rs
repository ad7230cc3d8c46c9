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

//! # Verification
//!
//! Structural checks for the objects produced by the [sequences](crate::sequences). The sequences
//! themselves never validate anything; these functions are used by tests and by the command line
//! tool to make sure that every step keeps the invariants of its family.

use crate::sequences::InvolutionEdit;
use crate::Error;
use std::collections::HashMap;

/// Checks that `candidate` is a rearrangement of `original`, respecting multiplicities.
pub fn check_permutation<T>(original: &[T], candidate: &[T]) -> Result<(), Error>
where
    T: Ord + Clone,
{
    check_len(original.len(), candidate)?;
    let mut a = original.to_vec();
    let mut b = candidate.to_vec();
    a.sort();
    b.sort();
    if a == b {
        Ok(())
    } else {
        Err(Error::NotAPermutation)
    }
}

/// Checks that `p` is an involution, i.e., `p[p[i]] == i` for all `i`.
pub fn check_involution(p: &[usize]) -> Result<(), Error> {
    for (i, x) in p.iter().enumerate() {
        match p.get(*x) {
            Some(y) if *y == i => {}
            _ => return Err(Error::NotAnInvolution(i, *x)),
        }
    }
    Ok(())
}

/// Checks that `p` is a Stirling permutation: every value appears exactly twice, and only larger
/// values appear between the two copies.
pub fn check_stirling(p: &[usize]) -> Result<(), Error> {
    // position of the first copy, and whether the second copy was already seen
    let mut seen: HashMap<usize, (usize, bool)> = HashMap::new();
    for (j, v) in p.iter().enumerate() {
        match seen.get_mut(v) {
            None => {
                seen.insert(*v, (j, false));
            }
            Some((_, true)) => return Err(Error::NotAStirlingPermutation(j)),
            Some((i, closed)) => {
                if let Some(k) = (*i + 1..j).find(|k| p[*k] <= *v) {
                    return Err(Error::NotAStirlingPermutation(k));
                }
                *closed = true;
            }
        }
    }
    match p.iter().position(|v| !seen[v].1) {
        Some(j) => Err(Error::NotAStirlingPermutation(j)),
        None => Ok(()),
    }
}

/// Checks that `curr` is obtained from `prev` by swapping two items which are `distance`
/// positions apart.
pub fn check_swap<T>(prev: &[T], curr: &[T], distance: usize) -> Result<(), Error>
where
    T: PartialEq,
{
    check_len(prev.len(), curr)?;
    let positions: Vec<usize> = (0..prev.len()).filter(|i| prev[*i] != curr[*i]).collect();
    match positions.as_slice() {
        [a, b] if b - a == distance && prev[*a] == curr[*b] && prev[*b] == curr[*a] => Ok(()),
        _ => Err(Error::InvalidStep { distance, positions }),
    }
}

/// Checks that `curr` is obtained from `prev` by swapping two adjacent items.
pub fn check_adjacent_swap<T>(prev: &[T], curr: &[T]) -> Result<(), Error>
where
    T: PartialEq,
{
    check_swap(prev, curr, 1)
}

/// Checks that both `prev` and `curr` are involutions, and that `curr` is obtained from `prev`
/// by one of the four [edits](InvolutionEdit) at some positions `c` and `c + 1`. Returns the kind
/// of edit.
pub fn check_involution_step(prev: &[usize], curr: &[usize]) -> Result<InvolutionEdit, Error> {
    check_len(prev.len(), curr)?;
    check_involution(prev)?;
    check_involution(curr)?;
    let positions: Vec<usize> = (0..prev.len()).filter(|i| prev[*i] != curr[*i]).collect();
    (0..prev.len().saturating_sub(1))
        .find_map(|c| involution_edit_at(prev, curr, c, &positions))
        .ok_or(Error::InvalidInvolutionStep(positions))
}

/// Returns the edit at positions `c` and `c + 1`, if it turns `prev` into `curr`. The edit must
/// change exactly the `changed` positions.
fn involution_edit_at(
    prev: &[usize],
    curr: &[usize],
    c: usize,
    changed: &[usize],
) -> Option<InvolutionEdit> {
    let d = c + 1;
    // new partner of every position touched by the edit
    let (edit, mut touched) = match (prev[c] == c, prev[d] == d) {
        (true, true) => (InvolutionEdit::AddPair, vec![(c, d), (d, c)]),
        (true, false) => {
            let i = prev[d];
            (InvolutionEdit::MovePair, vec![(c, i), (d, d), (i, c)])
        }
        (false, true) => {
            let i = prev[c];
            (InvolutionEdit::MovePair, vec![(c, c), (d, i), (i, d)])
        }
        (false, false) if prev[c] == d => (InvolutionEdit::RemovePair, vec![(c, c), (d, d)]),
        (false, false) => {
            let (x, y) = (prev[c], prev[d]);
            (InvolutionEdit::SwapPairs, vec![(c, y), (d, x), (x, d), (y, c)])
        }
    };
    touched.sort();
    if touched.len() == changed.len()
        && touched.iter().zip(changed.iter()).all(|((i, v), j)| i == j && curr[*i] == *v)
    {
        Some(edit)
    } else {
        None
    }
}

fn check_len<T>(expected: usize, found: &[T]) -> Result<(), Error> {
    if expected == found.len() {
        Ok(())
    } else {
        Err(Error::LengthMismatch { expected, found: found.len() })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_check_permutation() {
        assert_eq!(check_permutation(&[1, 2, 2, 3], &[2, 3, 2, 1]), Ok(()));
        assert_eq!(check_permutation(&[1, 2, 2, 3], &[2, 3, 3, 1]), Err(Error::NotAPermutation));
        assert_eq!(
            check_permutation(&[1, 2], &[1]),
            Err(Error::LengthMismatch { expected: 2, found: 1 })
        );
    }

    #[test]
    fn test_check_involution() {
        assert_eq!(check_involution(&[]), Ok(()));
        assert_eq!(check_involution(&[0, 1, 2]), Ok(()));
        assert_eq!(check_involution(&[2, 1, 0, 4, 3]), Ok(()));
        assert_eq!(check_involution(&[1, 2, 0]), Err(Error::NotAnInvolution(0, 1)));
        assert_eq!(check_involution(&[0, 5]), Err(Error::NotAnInvolution(1, 5)));
    }

    #[test]
    fn test_check_stirling() {
        assert_eq!(check_stirling(&[]), Ok(()));
        assert_eq!(check_stirling(&[0, 0, 1, 1]), Ok(()));
        assert_eq!(check_stirling(&[0, 1, 2, 2, 1, 0]), Ok(()));
        assert_eq!(check_stirling(&[0, 1, 0, 1]), Err(Error::NotAStirlingPermutation(2)));
        assert_eq!(check_stirling(&[1, 0, 0, 1]), Err(Error::NotAStirlingPermutation(1)));
        assert_eq!(check_stirling(&[0, 0, 0]), Err(Error::NotAStirlingPermutation(2)));
        assert_eq!(check_stirling(&[0, 0, 1]), Err(Error::NotAStirlingPermutation(2)));
    }

    #[test]
    fn test_check_involution_step() {
        use InvolutionEdit::*;
        assert_eq!(check_involution_step(&[0, 1, 2], &[1, 0, 2]), Ok(AddPair));
        assert_eq!(check_involution_step(&[1, 0, 2], &[2, 1, 0]), Ok(MovePair));
        assert_eq!(check_involution_step(&[2, 1, 0], &[0, 2, 1]), Ok(MovePair));
        assert_eq!(check_involution_step(&[0, 2, 1], &[0, 1, 2]), Ok(RemovePair));
        assert_eq!(check_involution_step(&[3, 2, 1, 0], &[2, 3, 0, 1]), Ok(SwapPairs));
    }

    #[test]
    fn test_check_involution_step_invalid() {
        // pair of two items which are not adjacent
        assert_eq!(
            check_involution_step(&[0, 1, 2], &[2, 1, 0]),
            Err(Error::InvalidInvolutionStep(vec![0, 2]))
        );
        assert_eq!(
            check_involution_step(&[0, 1, 2], &[0, 1, 2]),
            Err(Error::InvalidInvolutionStep(vec![]))
        );
        // two pairs added at once
        assert_eq!(
            check_involution_step(&[0, 1, 2, 3], &[1, 0, 3, 2]),
            Err(Error::InvalidInvolutionStep(vec![0, 1, 2, 3]))
        );
        assert_eq!(
            check_involution_step(&[0, 1, 2], &[1, 2, 0]),
            Err(Error::NotAnInvolution(0, 1))
        );
        assert_eq!(
            check_involution_step(&[0, 1], &[0, 1, 2]),
            Err(Error::LengthMismatch { expected: 2, found: 3 })
        );
    }

    #[test]
    fn test_check_swap() {
        assert_eq!(check_adjacent_swap(&['a', 'b', 'c'], &['a', 'c', 'b']), Ok(()));
        assert_eq!(check_swap(&[0, 1, 2], &[2, 1, 0], 2), Ok(()));
        assert_eq!(
            check_adjacent_swap(&[0, 1, 2], &[2, 1, 0]),
            Err(Error::InvalidStep { distance: 1, positions: vec![0, 2] })
        );
        assert_eq!(
            check_adjacent_swap(&[0, 1, 2], &[0, 1, 2]),
            Err(Error::InvalidStep { distance: 1, positions: vec![] })
        );
        assert_eq!(
            check_adjacent_swap(&[0, 1, 2], &[1, 2, 0]),
            Err(Error::InvalidStep { distance: 1, positions: vec![0, 1, 2] })
        );
    }
}
