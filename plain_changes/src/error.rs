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

//! Module containing all error types

use crate::count::Family;
use thiserror::Error;

/// Main error type
///
/// Generating changes or objects never fails. Errors are only returned when computing the exact
/// size of a family, or when checking generated objects.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// The exact size of a family does not fit into a `u128`.
    #[error("The number of {family} of size {n} does not fit into 128 bits")]
    Overflow {
        /// Family which was counted
        family: Family,
        /// Size parameter
        n: usize,
    },
    /// Two sequences which should have the same length have different lengths.
    #[error("Length mismatch: expected {expected}, found {found}")]
    LengthMismatch {
        /// Expected length
        expected: usize,
        /// Actual length
        found: usize,
    },
    /// The sequence is not a rearrangement of the initial labels.
    #[error("The sequence is not a rearrangement of the initial labels")]
    NotAPermutation,
    /// Position `0` maps to `1`, which does not map back to `0`.
    #[error("Not an involution: {0} maps to {1}, which does not map back")]
    NotAnInvolution(usize, usize),
    /// The value at the given position breaks the Stirling property.
    #[error("Not a Stirling permutation: the value at position {0} breaks the pattern")]
    NotAStirlingPermutation(usize),
    /// Two consecutive objects do not differ by a single swap of the given distance.
    #[error("Invalid step: expected a swap at distance {distance}, but positions {positions:?} changed")]
    InvalidStep {
        /// Distance of the expected swap
        distance: usize,
        /// All positions which differ between the two objects
        positions: Vec<usize>,
    },
    /// Two consecutive involutions do not differ by one of the four local edits.
    #[error("Invalid involution step: positions {0:?} changed")]
    InvalidInvolutionStep(Vec<usize>),
}
