// ============================================================================
// observable-collections - Change Detection
// Decides whether a replace/put actually changed the stored value
// ============================================================================

/// Function deciding whether two values are "the same" for notification
/// purposes. A replace or put whose old and new values compare equal under
/// this function fires nothing.
pub type EqualsFn<T> = fn(&T, &T) -> bool;

// =============================================================================
// VALUE EQUALITY (Default)
// =============================================================================

/// Default value equality using PartialEq.
///
/// # Example
/// ```
/// use observable_collections::observer::equality::equals;
///
/// assert!(equals(&42, &42));
/// assert!(!equals(&42, &43));
/// assert!(equals(&"hello", &"hello"));
/// ```
pub fn equals<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

// =============================================================================
// ALWAYS-CHANGED
// =============================================================================

/// Treats every replace as a change.
///
/// Useful when the element type has no meaningful equality, or when
/// observers want to see writes of identical values.
///
/// # Example
/// ```
/// use observable_collections::observer::equality::never_equals;
///
/// assert!(!never_equals(&1, &1));
/// ```
pub fn never_equals<T>(_a: &T, _b: &T) -> bool {
    false
}

// =============================================================================
// FLOATS (NaN-aware)
// =============================================================================

/// Equality for f64 where NaN is considered equal to NaN.
///
/// Plain `==` would report every NaN-over-NaN replace as a change.
///
/// # Example
/// ```
/// use observable_collections::observer::equality::safe_equals_f64;
///
/// assert!(safe_equals_f64(&1.0, &1.0));
/// assert!(!safe_equals_f64(&1.0, &2.0));
/// assert!(safe_equals_f64(&f64::NAN, &f64::NAN));
/// assert!(!safe_equals_f64(&f64::NAN, &1.0));
/// ```
pub fn safe_equals_f64(a: &f64, b: &f64) -> bool {
    if a.is_nan() {
        return b.is_nan();
    }
    a == b
}

/// Equality for f32 where NaN is considered equal to NaN.
pub fn safe_equals_f32(a: &f32, b: &f32) -> bool {
    if a.is_nan() {
        return b.is_nan();
    }
    a == b
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals() {
        assert!(equals(&1, &1));
        assert!(!equals(&1, &2));
        assert!(equals(&String::from("a"), &String::from("a")));
    }

    #[test]
    fn test_never_equals() {
        assert!(!never_equals(&1, &1));
        assert!(!never_equals(&"x", &"x"));
    }

    #[test]
    fn test_safe_equals_floats() {
        assert!(safe_equals_f64(&f64::NAN, &f64::NAN));
        assert!(safe_equals_f64(&f64::INFINITY, &f64::INFINITY));
        assert!(!safe_equals_f64(&f64::INFINITY, &f64::NEG_INFINITY));
        assert!(safe_equals_f32(&f32::NAN, &f32::NAN));
        assert!(!safe_equals_f32(&1.0, &f32::NAN));
    }

    #[test]
    fn test_equals_as_fn_pointer() {
        let eq: EqualsFn<i32> = equals;
        assert!(eq(&5, &5));
        assert!(!eq(&5, &6));
    }
}
