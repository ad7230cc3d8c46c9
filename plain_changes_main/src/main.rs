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

use plain_changes::changes::*;
use plain_changes::count::Family;
use plain_changes::sequences::*;
use plain_changes::verify;

use clap::{Args, Parser, Subcommand};
use itertools::Itertools;
use log::*;
use std::collections::HashSet;
use std::convert::TryFrom;
use std::error::Error;
use std::fmt::Display;
use std::hash::Hash;

fn main() -> Result<(), Box<dyn Error>> {
    // initialize the env logger
    pretty_env_logger::init();

    // run clap
    let args = CommandLineArguments::parse();

    match args.cmd {
        MainCommand::Permutations { n, items, output } => match items {
            Some(items) => {
                let n = items.len();
                if output.changes {
                    print_changes(PlainChanges::new(n), output.limit);
                    return Ok(());
                }
                let initial = items.clone();
                enumerate(
                    Family::Permutations,
                    n,
                    SteinhausJohnsonTrotter::new(items),
                    output,
                    |prev, curr| {
                        verify::check_permutation(&initial, curr)?;
                        match prev {
                            Some(prev) => verify::check_adjacent_swap(prev, curr),
                            None => Ok(()),
                        }
                    },
                )?
            }
            None => {
                let n = size(n);
                if output.changes {
                    print_changes(PlainChanges::new(n), output.limit);
                    return Ok(());
                }
                let initial: Vec<usize> = (0..n).collect();
                enumerate(
                    Family::Permutations,
                    n,
                    SteinhausJohnsonTrotter::with_size(n),
                    output,
                    |prev, curr| {
                        verify::check_permutation(&initial, curr)?;
                        match prev {
                            Some(prev) => verify::check_adjacent_swap(prev, curr),
                            None => Ok(()),
                        }
                    },
                )?
            }
        },
        MainCommand::Double { n, output } => {
            let n = size(n);
            if output.changes {
                print_changes(DoublePlainChanges::new(n), output.limit);
                return Ok(());
            }
            let initial: Vec<usize> = DoubleSteinhausJohnsonTrotter::new(n).current().to_vec();
            enumerate(
                Family::DoublePermutations,
                n,
                DoubleSteinhausJohnsonTrotter::new(n),
                output,
                |prev, curr| {
                    verify::check_permutation(&initial, curr)?;
                    match prev {
                        Some(prev) => verify::check_adjacent_swap(prev, curr),
                        None => Ok(()),
                    }
                },
            )?
        }
        MainCommand::Stirling { n, output } => {
            let n = size(n);
            if output.changes {
                print_changes(StirlingChanges::new(n), output.limit);
                return Ok(());
            }
            enumerate(
                Family::StirlingPermutations,
                n,
                StirlingPermutations::new(n),
                output,
                |prev, curr| {
                    verify::check_stirling(curr)?;
                    match prev {
                        Some(prev) => verify::check_swap(prev, curr, 2),
                        None => Ok(()),
                    }
                },
            )?
        }
        MainCommand::Involutions { n, output } => {
            let n = size(n);
            if output.changes {
                print_changes(InvolutionChanges::new(n), output.limit);
                return Ok(());
            }
            enumerate(Family::Involutions, n, Involutions::new(n), output, check_involutions)?
        }
    }

    Ok(())
}

fn check_involutions(
    prev: Option<&[usize]>,
    curr: &[usize],
) -> Result<(), plain_changes::Error> {
    verify::check_involution(curr)?;
    match prev {
        Some(prev) => verify::check_involution_step(prev, curr).map(|edit| {
            trace!("{:?}", edit);
        }),
        None => Ok(()),
    }
}

/// Negative sizes have nothing to enumerate, and are treated like an empty input.
fn size(n: i64) -> usize {
    match usize::try_from(n) {
        Ok(n) => n,
        Err(_) => {
            warn!("Negative size {} is treated as 0", n);
            0
        }
    }
}

fn print_changes<I>(changes: I, limit: Option<usize>)
where
    I: Iterator<Item = usize>,
{
    for x in changes.take(limit.unwrap_or(usize::MAX)) {
        println!("{}", x);
    }
}

/// Walk through the enumeration, and print all objects, or only their number if `--count` is
/// given.
fn enumerate<E, F>(
    family: Family,
    n: usize,
    enumeration: E,
    output: OutputArguments,
    check: F,
) -> Result<(), Box<dyn Error>>
where
    E: Enumeration,
    E::Label: Display + Clone + Eq + Hash,
    F: Fn(Option<&[E::Label]>, &[E::Label]) -> Result<(), plain_changes::Error>,
{
    let num = walk(family, n, enumeration, output, check)?;
    if output.count {
        println!("{}", num);
    }
    Ok(())
}

/// Walk through the enumeration, and return the number of visited objects. Every object is
/// printed unless `--count` is given. If requested, every object is checked with `check`, which
/// gets the previous object (if any) and the current one. The number of objects is compared with
/// the size of the family, unless the walk was stopped early.
fn walk<E, F>(
    family: Family,
    n: usize,
    mut enumeration: E,
    output: OutputArguments,
    check: F,
) -> Result<usize, Box<dyn Error>>
where
    E: Enumeration,
    E::Label: Display + Clone + Eq + Hash,
    F: Fn(Option<&[E::Label]>, &[E::Label]) -> Result<(), plain_changes::Error>,
{
    info!("Enumerate {} of size {}", family, n);

    let mut num: usize = 0;
    let mut prev: Option<Vec<E::Label>> = None;
    let mut seen: HashSet<Vec<E::Label>> = HashSet::new();

    while let Some(object) = enumeration.advance() {
        if output.limit.map(|l| num >= l).unwrap_or(false) {
            info!("Stopped after {} objects", num);
            return Ok(num);
        }
        num += 1;

        if output.verify {
            check(prev.as_deref(), object)?;
            if !seen.insert(object.to_vec()) {
                return Err(format!("Object {} was already enumerated before", num).into());
            }
            prev = Some(object.to_vec());
        }

        if !output.count {
            println!("{}", object.iter().join(" "));
        }
    }

    let expected = family.count(n)?;
    if num as u128 != expected {
        error!("Enumerated {} {}, but there should be {}", num, family, expected);
        return Err(format!("Wrong number of {}: {} instead of {}", family, num, expected).into());
    }
    info!("Enumerated all {} {}", num, family);

    Ok(num)
}

/// This binary enumerates a combinatorial family, by applying a single local change to each
/// object to obtain the next one.
#[derive(Parser, Debug)]
#[clap(name = "Plain Changes (Binary)", author = "Tibor Schneider")]
struct CommandLineArguments {
    /// Family to enumerate
    #[clap(subcommand)]
    cmd: MainCommand,
}

#[derive(Subcommand, Debug)]
enum MainCommand {
    /// Enumerate all permutations, using the Steinhaus-Johnson-Trotter algorithm
    #[clap(name = "permutations")]
    Permutations {
        /// Number of items to permute. Ignored if `--items` is given.
        #[clap(default_value = "0", allow_hyphen_values = true)]
        n: i64,
        /// Comma separated list of items to permute, in their initial order
        #[clap(short = 'i', long, use_value_delimiter = true)]
        items: Option<Vec<String>>,
        /// Output arguments
        #[clap(flatten)]
        output: OutputArguments,
    },
    /// Enumerate double permutations of 0..n
    #[clap(name = "double")]
    Double {
        /// Number of values, each of which appears twice
        #[clap(allow_hyphen_values = true)]
        n: i64,
        /// Output arguments
        #[clap(flatten)]
        output: OutputArguments,
    },
    /// Enumerate all Stirling permutations of order n
    #[clap(name = "stirling")]
    Stirling {
        /// Order of the Stirling permutations
        #[clap(allow_hyphen_values = true)]
        n: i64,
        /// Output arguments
        #[clap(flatten)]
        output: OutputArguments,
    },
    /// Enumerate all involutions on n items
    #[clap(name = "involutions")]
    Involutions {
        /// Number of items
        #[clap(allow_hyphen_values = true)]
        n: i64,
        /// Output arguments
        #[clap(flatten)]
        output: OutputArguments,
    },
}

/// Arguments controlling what is printed
#[derive(Args, Debug, Clone, Copy)]
struct OutputArguments {
    /// Print the change stream instead of the objects
    #[clap(short = 'c', long)]
    changes: bool,
    /// Only print the number of objects, and compare it with the exact count
    #[clap(long)]
    count: bool,
    /// Check the invariants of every object, and that no object repeats
    #[clap(short = 'v', long)]
    verify: bool,
    /// Stop after this many objects (or changes)
    #[clap(short = 'l', long)]
    limit: Option<usize>,
}

#[cfg(test)]
mod test {
    use super::*;

    fn count_only(limit: Option<usize>) -> OutputArguments {
        OutputArguments { changes: false, count: true, verify: true, limit }
    }

    #[test]
    fn test_walk_count() {
        let output = count_only(None);
        let num = walk(Family::Involutions, 6, Involutions::new(6), output, check_involutions);
        assert_eq!(num.unwrap(), 76);
    }

    #[test]
    fn test_walk_count_with_limit() {
        let output = count_only(Some(3));
        let num = walk(Family::Involutions, 6, Involutions::new(6), output, check_involutions);
        assert_eq!(num.unwrap(), 3);
        let num = walk(Family::Involutions, 3, Involutions::new(3), output, check_involutions);
        assert_eq!(num.unwrap(), 3);
    }

    #[test]
    fn test_walk_huge_with_limit() {
        let output = count_only(Some(2));
        let num = walk(
            Family::Permutations,
            100_000,
            SteinhausJohnsonTrotter::with_size(100_000),
            output,
            |_, _| Ok(()),
        );
        assert_eq!(num.unwrap(), 2);
    }

    #[test]
    fn test_walk_rejects_wrong_step() {
        let output = count_only(None);
        let num = walk(Family::Involutions, 4, Involutions::new(4), output, |prev, curr| {
            match prev {
                Some(prev) => verify::check_adjacent_swap(prev, curr),
                None => Ok(()),
            }
        });
        assert!(num.is_err());
    }
}
