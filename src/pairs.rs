//! Module source and sink key-value pairs as flat `<key>,<value>` rows.
//!
//! Pairs come from two places, a generator producing `n` pairs with
//! sequential keys and random values, and a reader parsing rows from any
//! buffered text input. A malformed row fail the whole pair set, partial
//! pair lists are never returned.

use rand::Rng;

use std::{fmt, io};

use crate::{Error, Result};

/// Generate `n` key-value pairs, keys running `0..n` in order, values
/// drawn from `rng`.
pub fn generate<R: Rng>(n: usize, rng: &mut R) -> Vec<(i64, i64)> {
    (0..n).map(|i| (i as i64, rng.gen())).collect()
}

/// Read `<key>,<value>` rows from `input` until end of input. Any row
/// that does not parse as two integers separated by a single comma fail
/// the whole set with `Error::ParseError`.
pub fn read_pairs<R: io::BufRead>(input: R) -> Result<Vec<(i64, i64)>> {
    let mut pairs = Vec::new();

    for (n, line) in input.lines().enumerate() {
        let line = err_at!(IoError, line)?;
        match line.split_once(',') {
            Some((key, value)) => {
                let key = err_at!(ParseError, key.parse::<i64>(), "key, line {}", n + 1)?;
                let value = err_at!(ParseError, value.parse::<i64>(), "value, line {}", n + 1)?;
                pairs.push((key, value));
            }
            None => return err_at!(ParseError, msg: "expected <key>,<value>, line {}", n + 1),
        }
    }

    Ok(pairs)
}

/// Write pairs as `<key>,<value>` rows into `w`, one row per pair.
pub fn write_pairs<K, V, I, W>(pairs: I, w: &mut W) -> Result<()>
where
    K: fmt::Display,
    V: fmt::Display,
    I: IntoIterator<Item = (K, V)>,
    W: io::Write,
{
    for (key, value) in pairs {
        err_at!(IoError, writeln!(w, "{},{}", key, value))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "pairs_test.rs"]
mod pairs_test;
