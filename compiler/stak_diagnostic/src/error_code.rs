use std::fmt;

/// Error codes for all stak diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexical errors
/// - E1xxx: Statement shape errors
/// - E2xxx: Argument type errors
/// - E3xxx: Label errors
/// - E6xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexical Errors (E0xxx)
    /// Unrecognized token
    E0001,

    // Statement Errors (E1xxx)
    /// No operation in statement
    E1001,
    /// More than one operation in statement
    E1002,
    /// Prefix given twice
    E1003,
    /// `cond` and `qcond` together
    E1004,
    /// Prefix after the operation
    E1005,
    /// Literal or label before the operation
    E1006,
    /// More than one label reference
    E1007,
    /// Label on an operation that takes no label
    E1008,

    // Type Errors (E2xxx)
    /// Arguments match no signature
    E2001,

    // Label Errors (E3xxx)
    /// Undefined label
    E3001,
    /// Label declared twice
    E3002,
    /// Label declaration with trailing content
    E3003,

    // Runtime Errors (E6xxx)
    /// Stack underflow
    E6001,
    /// Division by zero
    E6002,
    /// Non-integer jump address
    E6003,
    /// Jump target out of range
    E6004,
    /// Step limit exceeded
    E6005,
}

impl ErrorCode {
    /// All error codes, in numeric order.
    pub const ALL: [ErrorCode; 18] = [
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E2001,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
        }
    }

    /// Parse a code such as `"E6001"` (case-insensitive).
    pub fn from_code(code: &str) -> Option<ErrorCode> {
        ErrorCode::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
    }

    /// One-line explanation, used by `stakc explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "a word is not an operation, prefix, label or number literal"
            }
            ErrorCode::E1001 => "a statement must contain exactly one operation; it has none",
            ErrorCode::E1002 => "a statement must contain exactly one operation; it has several",
            ErrorCode::E1003 => "the same prefix appears twice on one instruction",
            ErrorCode::E1004 => "`cond` and `qcond` cannot both gate one instruction",
            ErrorCode::E1005 => "prefixes must come before the operation",
            ErrorCode::E1006 => "literals and labels must come after the operation",
            ErrorCode::E1007 => "a statement may reference at most one label",
            ErrorCode::E1008 => "only `jump` and `to` accept a label",
            ErrorCode::E2001 => "the arguments do not match any accepted signature of the operation",
            ErrorCode::E3001 => "a jump references a label that is never declared",
            ErrorCode::E3002 => "a label is declared more than once",
            ErrorCode::E3003 => "a label declaration must be alone on its statement",
            ErrorCode::E6001 => {
                "an instruction needed more stack elements than were present, \
                 or was given a negative element count"
            }
            ErrorCode::E6002 => {
                "`div` had a zero right operand, or `pow` raised zero to a negative power"
            }
            ErrorCode::E6003 => {
                "a jump operand was not finite, or an absolute address was not an integer"
            }
            ErrorCode::E6004 => "a jump landed outside the program",
            ErrorCode::E6005 => "the program ran past the configured step limit",
        }
    }

    /// Check if this is a lexical error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a statement shape error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is an argument type error (E2xxx range).
    pub fn is_type_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Check if this is a label error (E3xxx range).
    pub fn is_label_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }

    /// Check if this is a runtime error (E6xxx range).
    pub fn is_eval_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }

    /// Check if this error is raised before execution starts.
    pub fn is_compile_error(&self) -> bool {
        !self.is_eval_error()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
