//! Code generation context and state.
//!
//! The `CodegenContext` holds everything the emitters need besides the
//! arena: the resolver's scopes, the checker's types, the JavaScript
//! identifier chosen for each storage, and the temporary counter.

use jiji_diagnostic::InternalError;
use jiji_ir::{ExprId, Name, StmtId, StringInterner, Type};
use jiji_resolve::{Environment, StorageId};
use jiji_types::TypeTable;
use rustc_hash::FxHashMap;

/// Names a Jiji binding must not take in strict-mode JavaScript.
///
/// Reserved words, strict-mode restricted names, and the globals the
/// generated code itself refers to.
const RESERVED: &[&str] = &[
    // Keywords
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
    // Strict mode
    "implements", "interface", "let", "package", "private", "protected", "public", "static",
    "arguments", "eval",
    // Globals used by generated code
    "console", "Math", "undefined", "Infinity", "NaN",
];

/// Whether `name` would clash with JavaScript if emitted verbatim.
pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
}

/// Code generation context.
pub struct CodegenContext<'a> {
    pub interner: &'a StringInterner,
    pub env: &'a Environment,
    pub types: &'a TypeTable,
    /// JavaScript identifier for each storage (indexed by `StorageId`).
    storage_idents: Vec<String>,
    /// Counter for generating unique temporary names.
    temp_counter: u32,
}

impl<'a> CodegenContext<'a> {
    pub fn new(interner: &'a StringInterner, env: &'a Environment, types: &'a TypeTable) -> Self {
        CodegenContext {
            interner,
            env,
            types,
            storage_idents: storage_idents(interner, env.storages()),
            temp_counter: 0,
        }
    }

    /// The checked type of an expression.
    #[inline]
    pub fn expr_type(&self, id: ExprId) -> Result<Type, InternalError> {
        self.types.require(id)
    }

    /// The identifier holding the value a name expression refers to.
    pub fn ident_for_expr(&self, id: ExprId, name: Name) -> Result<&str, InternalError> {
        let scope = self.env.expr_scope(id)?;
        let binding = self
            .env
            .lookup(scope, name)
            .ok_or_else(|| self.unresolved(name))?;
        Ok(self.storage_ident(self.env.binding(binding).storage))
    }

    /// The identifier a `let` statement writes to.
    pub fn ident_for_let(&self, id: StmtId, name: Name) -> Result<&str, InternalError> {
        let scope = self.env.stmt_scope(id)?;
        let binding = self
            .env
            .scopes()
            .get(scope)
            .get_local(name)
            .ok_or_else(|| self.unresolved(name))?;
        Ok(self.storage_ident(self.env.binding(binding).storage))
    }

    /// Whether a `let` assigns to its frame's existing variable.
    #[inline]
    pub fn is_redeclaration(&self, id: StmtId) -> bool {
        self.env.is_redeclaration(id)
    }

    /// Generate a unique temporary variable name.
    pub fn fresh_temp(&mut self) -> String {
        let n = self.temp_counter;
        self.temp_counter += 1;
        tracing::trace!(n, "temporary");
        format!("$tmp{n}")
    }

    fn storage_ident(&self, storage: StorageId) -> &str {
        &self.storage_idents[storage.index()]
    }

    #[cold]
    fn unresolved(&self, name: Name) -> InternalError {
        InternalError::UnresolvedName(self.interner.lookup(name).to_string())
    }
}

/// Pick an identifier for every storage.
///
/// The first storage of a name keeps the source name; later ones, and any
/// name that would clash with JavaScript, get a `$N` suffix. Jiji names
/// cannot contain `$`, so suffixed identifiers never collide with source
/// names or with `$tmpN` temporaries.
fn storage_idents(interner: &StringInterner, storages: &[Name]) -> Vec<String> {
    let mut seen: FxHashMap<Name, u32> = FxHashMap::default();
    storages
        .iter()
        .map(|&name| {
            let text = interner.lookup(name);
            let count = seen.entry(name).or_insert(0);
            let ident = if *count == 0 && !is_reserved(text) {
                text.to_string()
            } else {
                format!("{text}${count}")
            };
            *count += 1;
            ident
        })
        .collect()
}
