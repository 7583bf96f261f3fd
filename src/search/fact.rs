use internment::Intern;
use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
};

/// A [`Fact`] is a ground atom of the planning task, represented as an
/// interned string. Interning makes facts cheap to copy and compare, which
/// matters because states are sets of facts and the search hashes states
/// constantly.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fact {
    inner: Intern<String>,
}

impl Fact {
    pub fn new(name: &str) -> Self {
        Self {
            inner: Intern::new(name.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        self.inner.as_ref()
    }
}

impl From<&str> for Fact {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

// Facts are ordered by their text, not by interning order, so that iterating
// a fact set is deterministic across runs.
impl Ord for Fact {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Fact {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// This custom implementation hides the internment details from the user.
impl Debug for Fact {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl Display for Fact {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
