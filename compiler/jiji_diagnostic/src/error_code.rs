use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Resolution and type errors
/// - E9xxx: Internal compiler errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Character that cannot start any token
    E0001,
    /// `.` not followed by a digit
    E0002,
    /// `e` not followed by a digit
    E0003,
    /// Integer literal does not fit in 64 bits
    E0004,
    /// Unterminated string literal
    E0005,
    /// Unknown escape sequence
    E0006,
    /// Malformed `\u{...}` escape
    E0007,
    /// `\u{...}` names a surrogate or out-of-range code point
    E0008,

    // Parser Errors (E1xxx)
    /// Missing `;`
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected a name
    E1004,
    /// Missing `=` in `let`
    E1005,
    /// Expected a block
    E1006,
    /// Chained equality or comparison operators
    E1007,

    // Resolution and Type Errors (E2xxx)
    /// Unknown binding
    E2001,
    /// Unknown type name
    E2002,
    /// Declared type does not match the value
    E2003,
    /// Operator applied to unsupported operand types
    E2004,
    /// `if` condition is not `Bool`
    E2005,
    /// `if` branches have different types
    E2006,

    // Internal Errors (E9xxx)
    /// Internal compiler error
    E9001,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E0008 => "E0008",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            // Resolution and type
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            // Internal
            ErrorCode::E9001 => "E9001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
