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

//! # Sequences
//!
//! This module contains the iterators over the combinatorial objects themselves. Each sequence
//! owns one object, yields it unchanged first, and then applies every change of the matching
//! [change stream](crate::changes) to it in place.
//!
//! ## Different Sequences
//! - **[`SteinhausJohnsonTrotter`]**: All permutations of a sequence (or of `0..n`), where
//!   consecutive permutations differ by a swap of two adjacent items.
//!
//! - **[`DoubleSteinhausJohnsonTrotter`]**: Double permutations of `0..n`, where consecutive
//!   objects differ by a swap of two adjacent items.
//!
//! - **[`StirlingPermutations`]**: All Stirling permutations of order `n`, where consecutive
//!   objects differ by a swap of two items at distance two.
//!
//! - **[`Involutions`]**: All involutions on `n` items, where consecutive involutions differ by
//!   one of four local edits (see [`InvolutionEdit`]).
//!
//! Every sequence implements [`Enumeration`], which lends the live object without copying it, and
//! `Iterator`, which yields a snapshot (`Vec`) of each object.

mod sjt;
pub use sjt::SteinhausJohnsonTrotter;

mod double_sjt;
pub use double_sjt::DoubleSteinhausJohnsonTrotter;

mod stirling;
pub use stirling::StirlingPermutations;

mod involutions;
pub use involutions::{InvolutionEdit, Involutions};

use crate::count::Family;
use log::*;
use std::fmt;

/// # Enumeration
///
/// Trait for all sequences, which keep a single object and mutate it in place. The object
/// returned by [`advance`](Enumeration::advance) is only valid until the next call; it must be
/// copied if it needs to be retained.
pub trait Enumeration {
    /// Type of the items of the object
    type Label;

    /// Advances to the next object, and returns it. The first call returns the initial object
    /// unchanged. Returns `None` once all objects were enumerated.
    fn advance(&mut self) -> Option<&[Self::Label]>;

    /// Returns the current object, without advancing.
    fn current(&self) -> &[Self::Label];
}

/// Builds the initial object of the doubled families: `[0, 0, 1, 1, ..., n-1, n-1]`.
pub(crate) fn doubled(n: usize) -> Vec<usize> {
    (0..n).flat_map(|i| std::iter::repeat(i).take(2)).collect()
}

/// How a single change is applied to the object.
pub(crate) trait Step<T> {
    /// Description of the applied edit
    type Edit: Copy + fmt::Debug;

    /// Apply the change at position `change` to `object` in place.
    fn apply(&self, object: &mut [T], change: usize) -> Self::Edit;
}

/// Swap of the items at positions `x` and `x + distance`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Swap(pub(crate) usize);

impl<T> Step<T> for Swap {
    type Edit = ();

    fn apply(&self, object: &mut [T], x: usize) {
        trace!("swap positions {} and {}", x, x + self.0);
        object.swap(x, x + self.0);
    }
}

/// # Walk
///
/// Shared part of all sequences: owns the object and the change stream, yields the initial object
/// first, and then applies every change using the [`Step`] `S`.
#[derive(Debug)]
pub(crate) struct Walk<C, T, S>
where
    S: Step<T>,
{
    family: Family,
    object: Vec<T>,
    changes: C,
    step: S,
    last_edit: Option<S::Edit>,
    /// The first object is returned unchanged.
    started: bool,
    /// Set as soon as the change stream is exhausted.
    finished: bool,
    steps: usize,
}

impl<C, T, S> Walk<C, T, S>
where
    C: Iterator<Item = usize>,
    S: Step<T>,
{
    pub(crate) fn new(family: Family, object: Vec<T>, changes: C, step: S) -> Self {
        debug!("Enumerate {} of length {}", family, object.len());
        Self {
            family,
            object,
            changes,
            step,
            last_edit: None,
            started: false,
            finished: false,
            steps: 0,
        }
    }

    pub(crate) fn advance(&mut self) -> Option<&[T]> {
        if !self.started {
            self.started = true;
            self.steps = 1;
            return Some(&self.object);
        }

        if self.finished {
            return None;
        }

        match self.changes.next() {
            Some(x) => {
                self.last_edit = Some(self.step.apply(&mut self.object, x));
                self.steps += 1;
                Some(&self.object)
            }
            None => {
                debug!("Enumerated all {} {}", self.steps, self.family);
                self.finished = true;
                None
            }
        }
    }

    pub(crate) fn current(&self) -> &[T] {
        &self.object
    }

    /// Edit which produced the current object, `None` for the initial one.
    pub(crate) fn last_edit(&self) -> Option<S::Edit> {
        self.last_edit
    }
}
