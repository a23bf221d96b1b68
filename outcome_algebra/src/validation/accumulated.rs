//! Non-empty, ordered collection of accumulated errors.

use std::{error::Error, fmt, iter, slice, vec};

use super::Accumulate;

/// Errors gathered from independent checks, in the order they were found.
///
/// The collection always holds at least one error.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Accumulate, Accumulated};
///
/// let errors = Accumulated::single("port must be positive")
///     .accumulate(Accumulated::single("host is empty"));
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.to_string(), "1: port must be positive\n2: host is empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Accumulated<E> {
    head: E,
    tail: Vec<E>,
}

impl<E> Accumulated<E> {
    /// Start a collection from one error.
    #[must_use]
    pub const fn single(error: E) -> Self {
        Self {
            head: error,
            tail: Vec::new(),
        }
    }

    /// Build a collection from a vector, or `None` when it is empty.
    #[must_use]
    pub fn try_from_vec(errors: Vec<E>) -> Option<Self> {
        let mut rest = errors.into_iter();
        let head = rest.next()?;
        Some(Self {
            head,
            tail: rest.collect(),
        })
    }

    /// The earliest error.
    #[must_use]
    pub const fn first(&self) -> &E {
        &self.head
    }

    /// Number of accumulated errors; never zero.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Iterate over the errors in order.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.into_iter()
    }

    /// Flatten into a vector, preserving order.
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.into_iter().collect()
    }
}

impl<E> Accumulate for Accumulated<E> {
    fn accumulate(mut self, later: Self) -> Self {
        self.tail.push(later.head);
        self.tail.extend(later.tail);
        self
    }
}

impl<E: fmt::Display> fmt::Display for Accumulated<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl<E: Error> Error for Accumulated<E> {}

impl<'a, E> IntoIterator for &'a Accumulated<E> {
    type Item = &'a E;
    type IntoIter = iter::Chain<iter::Once<&'a E>, slice::Iter<'a, E>>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<E> IntoIterator for Accumulated<E> {
    type Item = E;
    type IntoIter = iter::Chain<iter::Once<E>, vec::IntoIter<E>>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.head).chain(self.tail)
    }
}
