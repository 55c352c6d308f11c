use super::*;

#[test]
fn test_intern_deduplicates() {
    let mut interner = StringInterner::new();
    let a = interner.intern("hello");
    let b = interner.intern("hello");
    let c = interner.intern("world");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.lookup(a), "hello");
    assert_eq!(interner.lookup(c), "world");
}

#[test]
fn test_empty_is_pre_interned() {
    let mut interner = StringInterner::new();
    assert_eq!(interner.len(), 1);
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn test_lookup_foreign_name_is_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(99)), "");
}

#[test]
fn test_get_does_not_intern() {
    let mut interner = StringInterner::new();
    let a = interner.intern("a");
    assert_eq!(interner.get("a"), Some(a));
    assert_eq!(interner.get("b"), None);
    assert_eq!(interner.len(), 2);
}
