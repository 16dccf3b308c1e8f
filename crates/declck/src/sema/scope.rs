//! Symbol table

use crate::common::Span;
use std::collections::HashMap;
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// What the table knows about a declared name. The name itself lives in
/// the table's interner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub kind: SymbolKind,
    /// Declaration site; `None` for names seeded by the caller
    pub span: Option<Span>,
}

impl Symbol {
    pub fn external() -> Self {
        Self {
            kind: SymbolKind::External,
            span: None,
        }
    }

    pub fn declared(span: Span) -> Self {
        Self {
            kind: SymbolKind::Declared,
            span: Some(span),
        }
    }
}

/// How a symbol entered the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// Declared in an enclosing scope, before analysis started
    External,
    /// Target of an assignment
    Declared,
}

/// Flat, grow-only mapping from identifier to symbol.
///
/// Each name is interned once; the interner's symbols double as keys and,
/// being handed out sequentially, as the insertion order. Entries are never
/// removed or updated.
#[derive(Default)]
pub struct SymbolTable {
    names: DefaultStringInterner,
    symbols: HashMap<DefaultSymbol, Symbol>,
    order: Vec<DefaultSymbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name`. On a clash the table is left untouched and the existing
    /// symbol is returned.
    pub fn define(&mut self, name: &str, symbol: Symbol) -> Result<(), Symbol> {
        if let Some(existing) = self.lookup(name) {
            return Err(*existing);
        }
        let key = self.names.get_or_intern(name);
        self.symbols.insert(key, symbol);
        self.order.push(key);
        Ok(())
    }

    /// Look `name` up without interning it
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        let key = self.names.get(name)?;
        self.symbols.get(&key)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Names and symbols in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> + '_ {
        self.order.iter().filter_map(|&key| {
            Some((self.names.resolve(key)?, self.symbols.get(&key)?))
        })
    }

    /// Declared names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(name, _)| name)
    }
}
