use super::*;

#[test]
fn test_name_content_equality() {
    let a = Name::new("main::x");
    let b = Name::from(String::from("main::x"));
    assert_eq!(a, b);
    assert_eq!(a.as_str(), "main::x");
}

#[test]
fn test_name_empty() {
    assert!(Name::new("").is_empty());
    assert!(!Name::new("x").is_empty());
}

#[test]
fn test_name_hash() {
    use rustc_hash::FxHashSet;
    let mut set = FxHashSet::default();
    set.insert(Name::new("a"));
    set.insert(Name::new("a")); // duplicate
    set.insert(Name::new("b"));
    assert_eq!(set.len(), 2);
    assert!(set.contains("a"));
}

#[test]
fn test_name_ord() {
    assert!(Name::new("a") < Name::new("b"));
    assert!(Name::new("ab") > Name::new("a"));
}

#[test]
fn test_name_display() {
    assert_eq!(Name::new("field").to_string(), "field");
    assert_eq!(format!("{:?}", Name::new("f")), "Name(\"f\")");
}
