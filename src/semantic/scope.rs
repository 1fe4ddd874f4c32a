//! The scope chain used for name resolution.
//!
//! A scope maps names to semantic types and optionally links to a parent
//! scope. Lookup climbs the parent chain and the first match wins, so a
//! child definition shadows a parent one. Child scopes are created per
//! lexical block during analysis and dropped when that block's analysis
//! completes; only the root scope (owned by `GlobalEnv`) lives for the
//! whole compilation.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorImpl},
    semantic::types::Type,
    Position,
};

/// Shared handle to a scope. AST identifiers hold one of these once
/// resolved. The pipeline is single-threaded, so `Rc<RefCell<_>>` is
/// enough.
pub type ScopeRef = Rc<RefCell<Scope>>;

#[derive(Debug, Default)]
pub struct Scope {
    symbols: HashMap<String, Rc<Type>>,
    parent: Option<ScopeRef>,
}

impl Scope {
    pub fn root() -> ScopeRef {
        Rc::new(RefCell::new(Scope {
            symbols: HashMap::new(),
            parent: None,
        }))
    }

    pub fn child_of(parent: &ScopeRef) -> ScopeRef {
        Rc::new(RefCell::new(Scope {
            symbols: HashMap::new(),
            parent: Some(Rc::clone(parent)),
        }))
    }

    /// Inserts a name into this scope's local mapping. Redefining a name
    /// already present locally is rejected; shadowing a parent entry is
    /// allowed.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        ty: Rc<Type>,
        position: Position,
    ) -> Result<(), Error> {
        let name = name.into();
        if self.symbols.contains_key(&name) {
            Err(Error::new(
                ErrorImpl::SymbolAlreadyDefined { symbol: name },
                position,
            ))
        } else {
            self.symbols.insert(name, ty);
            Ok(())
        }
    }

    /// Looks a name up in this scope, then in each enclosing parent.
    /// `None` means the name reached the root unmatched.
    pub fn resolve(&self, name: &str) -> Option<Rc<Type>> {
        if let Some(ty) = self.symbols.get(name) {
            Some(Rc::clone(ty))
        } else if let Some(parent) = &self.parent {
            parent.borrow().resolve(name)
        } else {
            None
        }
    }

    pub fn structure_string(&self, indent: &str) -> String {
        let mut names: Vec<&String> = self.symbols.keys().collect();
        names.sort();

        let mut out = String::new();
        for name in names {
            out.push_str(&format!("{}{}:\n", indent, name));
            out.push_str(&self.symbols[name].structure_string(&format!("{}  ", indent)));
        }
        out
    }
}
