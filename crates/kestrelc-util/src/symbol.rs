//! String interning for identifiers and keywords.
//!
//! A [`Symbol`] is a 4-byte handle into a global string table. Interning
//! gives O(1) equality for identifiers that recur across a module (the same
//! function name appearing in its signature, its clauses, and every call
//! site) instead of repeated heap allocation and byte comparison.

use rustc_hash::FxHashMap;
use std::sync::{Mutex, OnceLock};

struct StringTable {
    strings: Vec<&'static str>,
    indices: FxHashMap<&'static str, u32>,
}

impl StringTable {
    fn new() -> Self {
        Self { strings: Vec::new(), indices: FxHashMap::default() }
    }

    fn intern(&mut self, s: &str) -> u32 {
        if let Some(&idx) = self.indices.get(s) {
            return idx;
        }
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let idx = self.strings.len() as u32;
        self.strings.push(leaked);
        self.indices.insert(leaked, idx);
        idx
    }

    fn resolve(&self, idx: u32) -> &'static str {
        self.strings[idx as usize]
    }
}

fn table() -> &'static Mutex<StringTable> {
    static TABLE: OnceLock<Mutex<StringTable>> = OnceLock::new();
    TABLE.get_or_init(|| Mutex::new(StringTable::new()))
}

/// An interned string handle. Cheap to copy and compare.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    index: u32,
}

impl Symbol {
    pub fn intern(s: &str) -> Self {
        let idx = table().lock().unwrap().intern(s);
        Symbol { index: idx }
    }

    pub fn as_str(&self) -> &'static str {
        table().lock().unwrap().resolve(self.index)
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl serde::Serialize for Symbol {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}
