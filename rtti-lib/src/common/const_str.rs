use core::cmp::Ordering;

/// Bytewise comparison of two strings, usable in `const` context.
pub const fn compare(a: &str, b: &str) -> Ordering {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut i = 0;
    while i < a.len() && i < b.len() {
        if a[i] < b[i] {
            return Ordering::Less;
        }
        if a[i] > b[i] {
            return Ordering::Greater;
        }
        i += 1;
    }
    if a.len() < b.len() {
        Ordering::Less
    } else if a.len() > b.len() {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

pub const fn eq(a: &str, b: &str) -> bool {
    matches!(compare(a, b), Ordering::Equal)
}

#[cfg(test)]
mod test {
    use core::cmp::Ordering;

    use wasm_bindgen_test::wasm_bindgen_test;

    use super::{compare, eq};

    const _: () = assert!(eq("Circle", "Circle"));
    const _: () = assert!(!eq("Circle", "Circles"));
    const _: () = assert!(matches!(compare("", "a"), Ordering::Less));

    #[test]
    #[wasm_bindgen_test]
    fn test_compare() {
        assert_eq!(compare("a", "b"), Ordering::Less);
        assert_eq!(compare("b", "a"), Ordering::Greater);
        assert_eq!(compare("ab", "a"), Ordering::Greater);
        assert_eq!(compare("Z", "a"), Ordering::Less);
        assert_eq!(compare("shapes::Circle", "shapes::Circle"), Ordering::Equal);
        for (a, b) in [("x", "y"), ("node", "nodes"), ("A1", "A10")] {
            assert_eq!(compare(a, b), a.cmp(b));
        }
    }
}
