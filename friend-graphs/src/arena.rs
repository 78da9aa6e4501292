// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, friend-graphs authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! Cyclic data structures without reference cycles.
//!
//! Friend graphs are cyclic: Alice lists Bob as a friend and Bob lists Alice. Instead of
//! having nodes own each other, every node lives in an [`Arena`][], which owns all of them
//! by value. Nodes refer to each other using [`Handle`][]s, which are small copyable indices
//! into the arena.
//!
//! A handle is only meaningful for the arena that created it. Handles are never reused, since
//! arenas never remove elements, so a handle stays valid for the lifetime of its arena.
//!
//! Two handles are equal exactly when they refer to the same element. That makes handles
//! suitable as identity keys: two people with the same name and birth date are still
//! different elements with different handles.

use std::convert::TryFrom;
use std::fmt::Debug;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;
use std::num::NonZeroU32;
use std::ops::Index;
use std::ops::IndexMut;

/// A handle to an element of type `T` owned by an [`Arena<T>`][Arena].
///
/// Handles are 1-based internally, so that `Option<Handle<T>>` is the same size as a handle.
#[repr(transparent)]
pub struct Handle<T> {
    index: NonZeroU32,
    _phantom: PhantomData<T>,
}

impl<T> Handle<T> {
    fn new(index: NonZeroU32) -> Handle<T> {
        Handle {
            index,
            _phantom: PhantomData,
        }
    }

    /// Returns the zero-based position of the element in its arena.
    #[inline(always)]
    pub fn as_usize(self) -> usize {
        (self.index.get() - 1) as usize
    }
}

// Deriving these would put bounds on `T`, which a handle doesn't need.

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Handle<T> {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("Handle").field(&self.as_usize()).finish()
    }
}

impl<T> Eq for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Handle<T>) -> bool {
        self.index == other.index
    }
}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T> Ord for Handle<T> {
    fn cmp(&self, other: &Handle<T>) -> std::cmp::Ordering {
        self.index.cmp(&other.index)
    }
}

impl<T> PartialOrd for Handle<T> {
    fn partial_cmp(&self, other: &Handle<T>) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Owns a collection of values of type `T`, handing out [`Handle`][]s to refer to them.
pub struct Arena<T> {
    items: Vec<T>,
}

impl<T> Arena<T> {
    /// Creates a new, empty arena.
    pub fn new() -> Arena<T> {
        Arena { items: Vec::new() }
    }

    /// Adds a new value to the arena, returning a handle to it.
    pub fn add(&mut self, item: T) -> Handle<T> {
        self.items.push(item);
        // items.len() is at least 1 after the push
        let index = u32::try_from(self.items.len())
            .ok()
            .and_then(NonZeroU32::new)
            .expect("arena overflow");
        Handle::new(index)
    }

    /// Dereferences a handle to an element of the arena.
    pub fn get(&self, handle: Handle<T>) -> &T {
        &self.items[handle.as_usize()]
    }

    /// Dereferences a handle to a mutable element of the arena.
    pub fn get_mut(&mut self, handle: Handle<T>) -> &mut T {
        &mut self.items[handle.as_usize()]
    }

    /// Dereferences two distinct handles at once.
    ///
    /// Panics if both handles refer to the same element.
    pub fn get_pair_mut(&mut self, a: Handle<T>, b: Handle<T>) -> (&mut T, &mut T) {
        let (ai, bi) = (a.as_usize(), b.as_usize());
        assert_ne!(ai, bi, "cannot borrow the same arena element twice");
        if ai < bi {
            let (left, right) = self.items.split_at_mut(bi);
            (&mut left[ai], &mut right[0])
        } else {
            let (left, right) = self.items.split_at_mut(ai);
            (&mut right[0], &mut left[bi])
        }
    }

    /// Returns an iterator of all of the handles in this arena, in insertion order.
    pub fn iter_handles(&self) -> impl Iterator<Item = Handle<T>> {
        (1..=self.items.len() as u32)
            .filter_map(NonZeroU32::new)
            .map(Handle::new)
    }

    /// Returns whether the handle refers to an element of this arena.
    pub fn contains(&self, handle: Handle<T>) -> bool {
        handle.as_usize() < self.items.len()
    }

    /// Returns the number of elements in the arena.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Arena<T> {
        Arena::new()
    }
}

impl<T> Index<Handle<T>> for Arena<T> {
    type Output = T;
    #[inline(always)]
    fn index(&self, handle: Handle<T>) -> &T {
        self.get(handle)
    }
}

impl<T> IndexMut<Handle<T>> for Arena<T> {
    #[inline(always)]
    fn index_mut(&mut self, handle: Handle<T>) -> &mut T {
        self.get_mut(handle)
    }
}
