// Copyright 2024 RISC Zero, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The sequence seeded with `1, 1` where every further term is the sum of
//! the two before it.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("terms are indexed from 1, got index 0")]
    ZeroIndex,
    #[error("index {0} is above the largest supported index {max}", max = MAX_INDEX)]
    IndexTooLarge(usize),
}

/// Largest index [`try_fib`] accepts. Every term up to it is held in memory.
pub const MAX_INDEX: usize = 1 << 20;

/// One computed term together with its 1-based index.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub index: usize,
    pub value: usize,
}

impl Term {
    pub fn at(index: usize) -> Result<Self, Error> {
        let value = try_fib(index)?;
        Ok(Term { index, value })
    }
}

/// Returns the first `n` terms. Additions wrap on overflow.
pub fn sequence(n: usize) -> Vec<usize> {
    let mut terms: Vec<usize> = Vec::with_capacity(n.max(2));
    terms.extend([1, 1]);
    for i in 2..n {
        let next = terms[i - 1].wrapping_add(terms[i - 2]);
        log::trace!("term {}: {next}", i + 1);
        terms.push(next);
    }
    terms.truncate(n);
    terms
}

/// Returns the `n`-th term, counting from 1.
///
/// # Panics
///
/// Panics if `n` is 0, or if the `n` terms do not fit in memory. Use
/// [`try_fib`] for unchecked input.
pub fn fib(n: usize) -> usize {
    assert!(n > 0, "fib is indexed from 1");
    log::debug!("computing term {n}");
    sequence(n)[n - 1]
}

pub fn try_fib(n: usize) -> Result<usize, Error> {
    match n {
        0 => Err(Error::ZeroIndex),
        n if n > MAX_INDEX => Err(Error::IndexTooLarge(n)),
        n => Ok(fib(n)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn seed_terms() {
        assert_eq!(fib(1), 1);
        assert_eq!(fib(2), 1);
    }

    #[test]
    fn sixth_term() {
        assert_eq!(sequence(6), vec![1, 1, 2, 3, 5, 8]);
        assert_eq!(fib(6), 8);
    }

    #[test]
    fn recurrence() {
        for n in 3..=90 {
            assert_eq!(fib(n), fib(n - 1).wrapping_add(fib(n - 2)), "n = {n}");
        }
    }

    #[test]
    fn sequence_length() {
        for n in 0..10 {
            assert_eq!(sequence(n).len(), n);
        }
        assert!(sequence(0).is_empty());
        assert_eq!(sequence(1), vec![1]);
    }

    #[test]
    fn wraps_on_overflow() {
        // The 94th term is the first that does not fit in 64 bits.
        let n = if usize::BITS == 64 { 94 } else { 48 };
        let terms = sequence(n);
        assert_eq!(terms[n - 1], terms[n - 2].wrapping_add(terms[n - 3]));
        assert!(terms[n - 1] < terms[n - 2]);
    }

    #[test]
    #[should_panic(expected = "fib is indexed from 1")]
    fn zero_index_panics() {
        fib(0);
    }

    #[test]
    fn try_fib_rejects_zero() {
        assert_eq!(try_fib(0), Err(Error::ZeroIndex));
        assert_eq!(try_fib(10), Ok(55));
    }

    #[test]
    fn try_fib_bounds() {
        assert!(try_fib(MAX_INDEX).is_ok());
        assert_eq!(
            try_fib(MAX_INDEX + 1),
            Err(Error::IndexTooLarge(MAX_INDEX + 1))
        );
        assert_eq!(try_fib(usize::MAX), Err(Error::IndexTooLarge(usize::MAX)));
        assert_eq!(Term::at(usize::MAX), Err(Error::IndexTooLarge(usize::MAX)));
    }

    #[test]
    fn term_json() {
        let term = Term::at(6).unwrap();
        assert_eq!(term, Term { index: 6, value: 8 });
        let json = serde_json::to_string(&term).unwrap();
        assert_eq!(json, r#"{"index":6,"value":8}"#);
        assert_eq!(serde_json::from_str::<Term>(&json).unwrap(), term);
    }
}
