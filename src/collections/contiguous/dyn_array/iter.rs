use std::iter::FusedIterator;
use std::slice;

use super::DynArray;
use crate::collections::contiguous::Buffer;

impl<T> IntoIterator for DynArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let end = self.len;
        // Zero the length first so that dropping self doesn't drop the elements we take.
        self.len = 0;

        IntoIter {
            buf: self.buf.take(),
            start: 0,
            end,
        }
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`DynArray`]. See [`DynArray::into_iter`].
///
/// The slots in `start..end` of the Buffer are the elements that haven't been yielded yet.
pub struct IntoIter<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        while self.start < self.end {
            let index = self.start;
            self.start += 1;
            // SAFETY: index was in start..end, so the slot is initialized and never read again.
            unsafe { self.buf.get_unchecked_mut(index).assume_init_drop() };
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            let index = self.start;
            self.start += 1;
            // SAFETY: The slot is initialized and moving start past it means it is never read or
            // dropped again.
            Some(unsafe { self.buf.get_unchecked(index).assume_init_read() })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: As in next, from the other end.
            Some(unsafe { self.buf.get_unchecked(self.end).assume_init_read() })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}
