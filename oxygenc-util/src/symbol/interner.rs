//! A single-threaded string interner backing [`super::Symbol`].
//!
//! One `Lexer`/`Parser` pair exists per source file and nothing here crosses
//! a thread boundary, so the interner is a plain `RefCell`-guarded table
//! rather than the concurrent `DashMap` design a multi-threaded front end
//! would need.

use bumpalo::Bump;
use rustc_hash::FxHashMap;
use std::cell::RefCell;

pub(crate) struct Interner {
    arena: Bump,
    names: RefCell<FxHashMap<&'static str, u32>>,
    strings: RefCell<Vec<&'static str>>,
}

impl Interner {
    pub(crate) fn new() -> Self {
        Self {
            arena: Bump::new(),
            names: RefCell::new(FxHashMap::default()),
            strings: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn intern(&self, string: &str) -> u32 {
        if let Some(&index) = self.names.borrow().get(string) {
            return index;
        }

        // SAFETY: the arena outlives every reference handed out, since it is
        // never reset or dropped before the interner itself.
        let allocated: &str = unsafe { std::mem::transmute(self.arena.alloc_str(string)) };
        let index = self.strings.borrow().len() as u32;
        self.strings.borrow_mut().push(allocated);
        self.names.borrow_mut().insert(allocated, index);
        index
    }

    pub(crate) fn get(&self, index: u32) -> Option<&'static str> {
        self.strings.borrow().get(index as usize).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.strings.borrow().len()
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    pub(crate) static INTERNER: Interner = Interner::new();
}
