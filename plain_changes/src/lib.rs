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

#![deny(missing_docs)]

//! # Plain Changes: Gray-Code Enumeration of Permutations and Involutions
//!
//! This is a library for enumerating every member of a combinatorial family, one at a time, by
//! applying a single local change to the previous member, instead of computing each member from
//! scratch.
//!
//! ## Structure
//!
//! This library is structured in the following way:
//!
//! - **[`Changes`](changes)**: Recursive generators of *change streams*. A change is a single
//!   position, which describes where the current object needs to be edited to obtain the next
//!   one. Each generator of size `n` owns one generator of a smaller size, and interleaves its
//!   changes with runs of consecutive positions. This keeps the space at `O(n)`, and the amortized
//!   time per change at `O(1)`.
//!
//! - **[`Sequences`](sequences)**: Iterators over the objects themselves. Each of them owns a
//!   single object, yields it unchanged, and then applies every change of its change stream in
//!   place. They implement [`Enumeration`](sequences::Enumeration) to lend the live object, and
//!   `Iterator` to yield a snapshot of every object.
//!
//! - **[`Count`](count)**: The exact number of objects in each [`Family`](count::Family).
//!
//! - **[`Verify`](verify)**: Checks that an object belongs to its family, and that consecutive
//!   objects differ by the expected local edit.
//!
//! ## Families
//!
//! - **Permutations** of `n` items: [`PlainChanges`](changes::PlainChanges) drives
//!   [`SteinhausJohnsonTrotter`](sequences::SteinhausJohnsonTrotter). Consecutive permutations
//!   differ by a swap of two adjacent items.
//! - **Double permutations** of `0..n`: [`DoublePlainChanges`](changes::DoublePlainChanges) drives
//!   [`DoubleSteinhausJohnsonTrotter`](sequences::DoubleSteinhausJohnsonTrotter), again with
//!   adjacent swaps.
//! - **Stirling permutations** of order `n`: [`StirlingChanges`](changes::StirlingChanges) drives
//!   [`StirlingPermutations`](sequences::StirlingPermutations), swapping items two positions apart.
//! - **Involutions** on `n` items: [`InvolutionChanges`](changes::InvolutionChanges) drives
//!   [`Involutions`](sequences::Involutions), where each change is one of four
//!   [edits](sequences::InvolutionEdit).
//!
//! ## Usage
//!
//! ```
//! use plain_changes::sequences::{Enumeration, SteinhausJohnsonTrotter};
//! use plain_changes::verify::check_adjacent_swap;
//! use plain_changes::Error;
//!
//! fn main() -> Result<(), Error> {
//!     let mut permutations = SteinhausJohnsonTrotter::new(vec!["a", "b", "c", "d"]);
//!
//!     // the object is mutated in place, so we need to copy it to keep it around.
//!     let mut prev = permutations.advance().map(|p| p.to_vec()).unwrap_or_default();
//!     while let Some(p) = permutations.advance() {
//!         check_adjacent_swap(&prev, p)?;
//!         prev = p.to_vec();
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod changes;
pub mod count;
mod error;
pub mod sequences;
pub mod verify;

// test modules
mod test;

pub use error::Error;
