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

//! # Counting
//!
//! Exact sizes of all enumerated families. Every function uses checked arithmetic, and returns
//! [`Error::Overflow`] if the result does not fit into a `u128`.

use crate::Error;
use std::fmt;

/// Family of combinatorial objects that can be enumerated.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Family {
    /// Permutations of `n` items
    Permutations,
    /// Double permutations of `n` values, in which the first copies appear in increasing order
    DoublePermutations,
    /// Stirling permutations of order `n`
    StirlingPermutations,
    /// Involutions on `n` items
    Involutions,
}

impl Family {
    /// Returns the number of objects of size `n` in this family.
    pub fn count(self, n: usize) -> Result<u128, Error> {
        match self {
            Family::Permutations => permutations(n),
            Family::DoublePermutations => double_permutations(n),
            Family::StirlingPermutations => stirling_permutations(n),
            Family::Involutions => involutions(n),
        }
    }

    /// Returns the length of every object of size `n` in this family.
    pub fn object_len(self, n: usize) -> usize {
        match self {
            Family::Permutations | Family::Involutions => n,
            Family::DoublePermutations | Family::StirlingPermutations => 2 * n,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Permutations => write!(f, "permutations"),
            Family::DoublePermutations => write!(f, "double permutations"),
            Family::StirlingPermutations => write!(f, "Stirling permutations"),
            Family::Involutions => write!(f, "involutions"),
        }
    }
}

/// Number of permutations of `n` items, `n!`.
pub fn permutations(n: usize) -> Result<u128, Error> {
    (1..=n as u128)
        .try_fold(1u128, |acc, k| acc.checked_mul(k))
        .ok_or(Error::Overflow { family: Family::Permutations, n })
}

/// Number of double permutations generated for `n` values, `(2n - 1)!! = (2n)! / (2^n n!)`.
pub fn double_permutations(n: usize) -> Result<u128, Error> {
    odd_double_factorial(n).ok_or(Error::Overflow { family: Family::DoublePermutations, n })
}

/// Number of Stirling permutations of order `n`, which is also `(2n - 1)!!`.
pub fn stirling_permutations(n: usize) -> Result<u128, Error> {
    odd_double_factorial(n).ok_or(Error::Overflow { family: Family::StirlingPermutations, n })
}

/// Number of involutions on `n` items, the `n`-th telephone number.
pub fn involutions(n: usize) -> Result<u128, Error> {
    let overflow = Error::Overflow { family: Family::Involutions, n };
    // T(k - 2) and T(k - 1)
    let (mut prev, mut cur) = (1u128, 1u128);
    for k in 2..=n as u128 {
        let next = (k - 1).checked_mul(prev).and_then(|x| x.checked_add(cur));
        prev = cur;
        cur = next.ok_or_else(|| overflow.clone())?;
    }
    Ok(cur)
}

/// Computes `1 * 3 * 5 * ... * (2n - 1)`
fn odd_double_factorial(n: usize) -> Option<u128> {
    (1..=n as u128).try_fold(1u128, |acc, k| acc.checked_mul(2 * k - 1))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_permutations() {
        assert_eq!(permutations(0), Ok(1));
        assert_eq!(permutations(1), Ok(1));
        assert_eq!(permutations(5), Ok(120));
        assert_eq!(permutations(20), Ok(2432902008176640000));
        assert_eq!(permutations(34), Ok(295232799039604140847618609643520000000));
        assert_eq!(
            permutations(35),
            Err(Error::Overflow { family: Family::Permutations, n: 35 })
        );
    }

    #[test]
    fn test_double_permutations() {
        let expected = [1, 1, 3, 15, 105, 945, 10395];
        for (n, e) in expected.iter().enumerate() {
            assert_eq!(double_permutations(n), Ok(*e));
            assert_eq!(stirling_permutations(n), Ok(*e));
        }
        assert!(double_permutations(100).is_err());
    }

    #[test]
    fn test_involutions() {
        let telephone = [1, 1, 2, 4, 10, 26, 76, 232, 764, 2620, 9496];
        for (n, t) in telephone.iter().enumerate() {
            assert_eq!(involutions(n), Ok(*t));
        }
        assert_eq!(
            involutions(1000),
            Err(Error::Overflow { family: Family::Involutions, n: 1000 })
        );
    }

    #[test]
    fn test_family() {
        assert_eq!(Family::Involutions.count(4), Ok(10));
        assert_eq!(Family::StirlingPermutations.object_len(3), 6);
        assert_eq!(Family::Permutations.object_len(3), 3);
        assert_eq!(Family::DoublePermutations.to_string(), "double permutations");
    }
}
