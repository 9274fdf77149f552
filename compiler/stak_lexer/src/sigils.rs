//! Sigil table: alternate symbolic spellings of operations and prefixes.
//!
//! Every sigil resolves to exactly the same operation or prefix as its
//! canonical name. Several are Unicode; `-` (hyphen-minus) and `−`
//! (U+2212 MINUS SIGN) are distinct entries.

use stak_ir::{Operation, Prefix};

/// Operation sigils and the operation each one spells.
pub const OPERATION_SIGILS: &[(&str, Operation)] = &[
    ("←", Operation::Push),
    ("→", Operation::Pop),
    ("↔", Operation::Swap),
    ("↑", Operation::Jump),
    ("+", Operation::Add),
    ("-", Operation::Sub),
    ("−", Operation::Sub),
    ("*", Operation::Mul),
    ("×", Operation::Mul),
    ("/", Operation::Div),
    ("÷", Operation::Div),
    ("^", Operation::Pow),
    ("!", Operation::Not),
    ("¬", Operation::Not),
    ("=", Operation::Eq),
    ("<", Operation::Lt),
    (">", Operation::Gt),
    ("<=", Operation::Le),
    ("≤", Operation::Le),
    (">=", Operation::Ge),
    ("≥", Operation::Ge),
    ("∅", Operation::Nop),
];

/// Prefix sigils and the prefix each one spells.
pub const PREFIX_SIGILS: &[(&str, Prefix)] = &[
    ("#", Prefix::Quiet),
    ("♯", Prefix::Quiet),
    ("?", Prefix::Cond),
    ("??", Prefix::QCond),
    ("⁇", Prefix::QCond),
    ("¿", Prefix::QCond),
];

/// Look up an operation sigil.
#[inline]
pub fn operation(text: &str) -> Option<Operation> {
    OPERATION_SIGILS
        .iter()
        .find(|(sigil, _)| *sigil == text)
        .map(|&(_, op)| op)
}

/// Look up a prefix sigil.
#[inline]
pub fn prefix(text: &str) -> Option<Prefix> {
    PREFIX_SIGILS
        .iter()
        .find(|(sigil, _)| *sigil == text)
        .map(|&(_, prefix)| prefix)
}

#[cfg(test)]
mod tests;
