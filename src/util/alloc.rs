#![cfg(test)]

use std::cell::RefCell;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZeroSizedType;

/// Increments the shared counter every time an instance is dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// A value that panics when cloned if `armed` is set.
#[derive(Debug, PartialEq, Eq)]
pub struct CloneBomb {
    pub value: i32,
    pub armed: bool,
}

impl CloneBomb {
    pub const fn new(value: i32) -> CloneBomb {
        CloneBomb { value, armed: false }
    }

    pub const fn armed(value: i32) -> CloneBomb {
        CloneBomb { value, armed: true }
    }
}

impl Clone for CloneBomb {
    fn clone(&self) -> Self {
        if self.armed {
            panic!("CloneBomb {} went off", self.value);
        }
        CloneBomb::new(self.value)
    }
}
