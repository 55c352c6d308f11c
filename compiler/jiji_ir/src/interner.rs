//! String interner for identifiers and string literal contents.
//!
//! A compilation is single-threaded, so the interner is a plain map guarded
//! by `&mut` rather than a locked, sharded table. The lexer is the only
//! writer; every later stage resolves names through `&StringInterner`.

use rustc_hash::FxHashMap;

use crate::Name;

/// Maps strings to compact [`Name`] handles and back.
pub struct StringInterner {
    /// Map from string content to its name.
    map: FxHashMap<Box<str>, Name>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned.
    pub fn new() -> Self {
        let mut interner = StringInterner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        let empty = interner.intern("");
        debug_assert_eq!(empty, Name::EMPTY);
        interner
    }

    /// Intern a string, returning its name.
    ///
    /// Interning the same contents twice returns the same name.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&name) = self.map.get(s) {
            return name;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "a single source file cannot hold u32::MAX distinct strings"
        )]
        let name = Name::from_raw(self.strings.len() as u32);
        let owned: Box<str> = s.into();
        self.strings.push(owned.clone());
        self.map.insert(owned, name);
        name
    }

    /// The name for `s`, if it has been interned.
    #[inline]
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).copied()
    }

    /// Look up the string for a name.
    ///
    /// Names from a different interner resolve to the empty string.
    #[inline]
    pub fn lookup(&self, name: Name) -> &str {
        self.strings.get(name.index()).map_or("", |s| s)
    }

    /// Number of interned strings, including the empty string.
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always false: the empty string is pre-interned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
