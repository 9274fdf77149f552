use super::*;
use pretty_assertions::assert_eq;

#[test]
fn every_operation_sigil_resolves() {
    for &(sigil, op) in OPERATION_SIGILS {
        assert_eq!(operation(sigil), Some(op), "{sigil}");
        assert_eq!(prefix(sigil), None, "{sigil} is also a prefix sigil");
    }
}

#[test]
fn every_prefix_sigil_resolves() {
    for &(sigil, expected) in PREFIX_SIGILS {
        assert_eq!(prefix(sigil), Some(expected), "{sigil}");
        assert_eq!(operation(sigil), None, "{sigil} is also an operation sigil");
    }
}

#[test]
fn sigils_never_shadow_canonical_names() {
    let sigils = OPERATION_SIGILS
        .iter()
        .map(|(s, _)| *s)
        .chain(PREFIX_SIGILS.iter().map(|(s, _)| *s));
    for sigil in sigils {
        assert_eq!(Operation::from_name(sigil), None, "{sigil}");
        assert_eq!(Prefix::from_name(sigil), None, "{sigil}");
    }
}

#[test]
fn hyphen_and_minus_sign_are_both_sub() {
    assert_eq!(operation("-"), Some(Operation::Sub));
    assert_eq!(operation("\u{2212}"), Some(Operation::Sub));
}

#[test]
fn double_question_mark_spellings() {
    assert_eq!(prefix("??"), Some(Prefix::QCond));
    assert_eq!(prefix("\u{2047}"), Some(Prefix::QCond));
    assert_eq!(prefix("?"), Some(Prefix::Cond));
}

#[test]
fn sigils_are_unique() {
    let mut seen: Vec<&str> = OPERATION_SIGILS
        .iter()
        .map(|(s, _)| *s)
        .chain(PREFIX_SIGILS.iter().map(|(s, _)| *s))
        .collect();
    let total = seen.len();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), total);
}
