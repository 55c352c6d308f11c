//! Scope tree and binding records.
//!
//! Scopes live in one arena for the whole compilation and point at their
//! parent by index. Children never own their parents, and nothing is
//! freed until the tree is dropped.

use std::fmt;

use jiji_ir::{Name, Type};
use rustc_hash::FxHashMap;

#[expect(
    clippy::cast_possible_truncation,
    reason = "scope and binding counts are bounded by source length, which fits in u32"
)]
fn to_u32(n: usize) -> u32 {
    debug_assert!(u32::try_from(n).is_ok());
    n as u32
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

define_id!(
    /// Index into the [`ScopeTree`].
    ScopeId
);
define_id!(
    /// Index of a [`Binding`].
    BindingId
);
define_id!(
    /// A target-level variable. Several bindings may share one when a
    /// `let` redeclares a name in the same frame.
    StorageId
);

/// What introduced a scope.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScopeKind {
    /// The module's top-level scope.
    Root,
    /// A `{ ... }` block, including `if` branches.
    Block,
    /// A `let` that rebinds a name visible from an outer scope.
    Shadow,
}

impl ScopeKind {
    /// Root and block scopes correspond to a JavaScript block; shadow
    /// scopes live inside the frame of their nearest such ancestor.
    #[inline]
    pub fn is_frame(self) -> bool {
        matches!(self, ScopeKind::Root | ScopeKind::Block)
    }
}

#[derive(Clone, Debug)]
pub struct Scope {
    pub parent: Option<ScopeId>,
    pub kind: ScopeKind,
    bindings: FxHashMap<Name, BindingId>,
}

impl Scope {
    /// Look up a name in this scope only.
    #[inline]
    pub fn get_local(&self, name: Name) -> Option<BindingId> {
        self.bindings.get(&name).copied()
    }
}

/// A `let` binding.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Binding {
    pub name: Name,
    /// Filled in once by the type checker.
    pub ty: Option<Type>,
    pub storage: StorageId,
}

/// Arena of scopes and the bindings they hold.
#[derive(Clone, Debug)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
    bindings: Vec<Binding>,
    /// Source name of each storage, indexed by `StorageId`.
    storages: Vec<Name>,
}

impl ScopeTree {
    /// Create a tree holding a single empty root scope.
    pub fn new() -> Self {
        ScopeTree {
            scopes: vec![Scope {
                parent: None,
                kind: ScopeKind::Root,
                bindings: FxHashMap::default(),
            }],
            bindings: Vec::new(),
            storages: Vec::new(),
        }
    }

    #[inline]
    pub fn root(&self) -> ScopeId {
        ScopeId::new(0)
    }

    /// Add an empty child of `parent`.
    pub fn push_child(&mut self, parent: ScopeId, kind: ScopeKind) -> ScopeId {
        let id = ScopeId::new(to_u32(self.scopes.len()));
        self.scopes.push(Scope {
            parent: Some(parent),
            kind,
            bindings: FxHashMap::default(),
        });
        id
    }

    #[inline]
    pub fn get(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// Walk up from `scope` until a binding for `name` is found.
    pub fn lookup(&self, scope: ScopeId, name: Name) -> Option<BindingId> {
        self.lookup_with_scope(scope, name).map(|(_, binding)| binding)
    }

    /// Like [`lookup`](Self::lookup), also returning the scope that holds
    /// the binding.
    pub fn lookup_with_scope(&self, scope: ScopeId, name: Name) -> Option<(ScopeId, BindingId)> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = self.get(id);
            if let Some(binding) = scope.get_local(name) {
                return Some((id, binding));
            }
            current = scope.parent;
        }
        None
    }

    /// The nearest root or block scope at or above `scope`.
    pub fn frame_of(&self, scope: ScopeId) -> ScopeId {
        let mut id = scope;
        loop {
            let current = self.get(id);
            match current.parent {
                Some(parent) if !current.kind.is_frame() => id = parent,
                _ => return id,
            }
        }
    }

    /// Declare `name` in `scope` with a fresh storage.
    pub fn declare(&mut self, scope: ScopeId, name: Name) -> BindingId {
        let storage = StorageId::new(to_u32(self.storages.len()));
        self.storages.push(name);
        self.declare_in_storage(scope, name, storage)
    }

    /// Declare `name` in `scope`, reusing an existing storage.
    pub fn declare_in_storage(&mut self, scope: ScopeId, name: Name, storage: StorageId) -> BindingId {
        let id = BindingId::new(to_u32(self.bindings.len()));
        self.bindings.push(Binding {
            name,
            ty: None,
            storage,
        });
        self.scopes[scope.index()].bindings.insert(name, id);
        id
    }

    #[inline]
    pub fn binding(&self, id: BindingId) -> &Binding {
        &self.bindings[id.index()]
    }

    /// Record a binding's type. Each binding is typed exactly once.
    pub fn assign_type(&mut self, id: BindingId, ty: Type) {
        let binding = &mut self.bindings[id.index()];
        debug_assert!(binding.ty.is_none(), "binding typed twice");
        binding.ty = Some(ty);
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Source names of every storage, in allocation order.
    pub fn storages(&self) -> &[Name] {
        &self.storages
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}
