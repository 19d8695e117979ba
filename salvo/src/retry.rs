// Copyright 2020 Zachary Stewart
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
//! Retry combinators for decisions that may have to be made more than once: random
//! placements that collide and player input that doesn't parse.

use thiserror::Error;

/// How many times an operation may be attempted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Retry {
    /// Keep trying until the operation succeeds.
    Unbounded,
    /// Give up after this many attempts.
    AtMost(usize),
}

/// Error returned by [`Retry::run`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum RetryError<E> {
    /// Every allowed attempt asked to be retried.
    #[error("gave up after {attempts} attempts")]
    Exhausted { attempts: usize },
    /// An attempt failed in a way that retrying can't fix.
    #[error(transparent)]
    Aborted(E),
}

impl Retry {
    /// Call `attempt` with the zero-based attempt number until it produces a value.
    ///
    /// `Ok(Some(value))` finishes with the value, `Ok(None)` asks for another attempt
    /// and `Err` stops immediately.
    pub fn run<T, E, F>(self, mut attempt: F) -> Result<T, RetryError<E>>
    where
        F: FnMut(usize) -> Result<Option<T>, E>,
    {
        let mut n = 0;
        loop {
            if let Retry::AtMost(limit) = self {
                if n >= limit {
                    return Err(RetryError::Exhausted { attempts: n });
                }
            }
            match attempt(n) {
                Ok(Some(value)) => return Ok(value),
                Ok(None) => n += 1,
                Err(err) => return Err(RetryError::Aborted(err)),
            }
        }
    }
}

impl Default for Retry {
    fn default() -> Self {
        Retry::Unbounded
    }
}
