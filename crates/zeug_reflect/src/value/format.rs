use alloc::string::String;

use super::ArrayElement;

/// Renders elements as `"(v0, v1, ..., vN-1)"`.
///
/// # Examples
///
/// ```
/// use zeug_reflect::value::write_tuple;
///
/// assert_eq!(write_tuple(&[1, 2, 3]), "(1, 2, 3)");
/// assert_eq!(write_tuple(&[0.5_f32, -1.0]), "(0.5, -1)");
/// assert_eq!(write_tuple::<i32>(&[]), "()");
/// ```
pub fn write_tuple<T: ArrayElement>(elements: &[T]) -> String {
    let mut out = String::with_capacity(2 + elements.len() * 4);
    out.push('(');
    for (index, element) in elements.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push_str(&element.to_property_string());
    }
    out.push(')');
    out
}

/// Parses a tuple of exactly `N` elements.
///
/// Returns `None` when the brackets, an element literal or the element
/// count do not match.
///
/// # Examples
///
/// ```
/// use zeug_reflect::value::parse_tuple;
///
/// assert_eq!(parse_tuple::<i32, 3>("  (1,2 , -3) "), Some([1, 2, -3]));
/// assert_eq!(parse_tuple::<i32, 3>("(1, 2)"), None);
/// assert_eq!(parse_tuple::<i32, 2>("(1, 2.5)"), None);
/// assert_eq!(parse_tuple::<f64, 2>("(1, 2.5)"), Some([1.0, 2.5]));
/// ```
pub fn parse_tuple<T: ArrayElement, const N: usize>(s: &str) -> Option<[T; N]> {
    let inner = s
        .trim_start()
        .strip_prefix('(')?
        .trim_end()
        .strip_suffix(')')?;

    let mut result = [T::default(); N];
    if N == 0 {
        return inner.trim().is_empty().then_some(result);
    }

    let mut parts = inner.split(',');
    for slot in &mut result {
        *slot = T::parse_literal(parts.next()?.trim())?;
    }
    match parts.next() {
        Some(_) => None,
        None => Some(result),
    }
}

// -----------------------------------------------------------------------------
// Literal grammar

/// Matches `(-|+)?digits`.
pub(super) fn is_integral_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Matches `(-|+)?digits(.digits?)?`.
pub(super) fn is_decimal_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (unsigned, ""),
    };
    !int.is_empty()
        && int.bytes().all(|b| b.is_ascii_digit())
        && frac.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::{is_decimal_literal, is_integral_literal, parse_tuple, write_tuple};

    #[test]
    fn integral_literals() {
        assert!(is_integral_literal("12"));
        assert!(is_integral_literal("-3"));
        assert!(is_integral_literal("+0"));
        assert!(!is_integral_literal(""));
        assert!(!is_integral_literal("-"));
        assert!(!is_integral_literal("1.0"));
        assert!(!is_integral_literal("1e3"));
    }

    #[test]
    fn decimal_literals() {
        assert!(is_decimal_literal("1"));
        assert!(is_decimal_literal("1."));
        assert!(is_decimal_literal("-1.25"));
        assert!(!is_decimal_literal(".5"));
        assert!(!is_decimal_literal("1.2.3"));
        assert!(!is_decimal_literal("inf"));
        assert!(!is_decimal_literal("1e3"));
    }

    #[test]
    fn brackets_are_required() {
        assert_eq!(parse_tuple::<i32, 2>("1, 2"), None);
        assert_eq!(parse_tuple::<i32, 2>("[1, 2]"), None);
        assert_eq!(parse_tuple::<i32, 2>("(1, 2"), None);
        assert_eq!(parse_tuple::<i32, 2>("(1, 2) x"), None);
    }

    #[test]
    fn arity() {
        assert_eq!(parse_tuple::<u8, 2>("(1, 2, 3)"), None);
        assert_eq!(parse_tuple::<u8, 2>("(1, )"), None);
        assert_eq!(parse_tuple::<u8, 0>("( )"), Some([]));
        assert_eq!(parse_tuple::<u8, 0>("(1)"), None);
    }

    #[test]
    fn non_finite_floats_do_not_parse() {
        let rendered = write_tuple(&[f64::INFINITY, 1.0]);
        assert_eq!(rendered, "(inf, 1)");
        assert_eq!(parse_tuple::<f64, 2>(&rendered), None);
        assert_eq!(parse_tuple::<f32, 1>("(NaN)"), None);
        assert_eq!(parse_tuple::<f64, 1>("(1e300)"), None);
        assert_eq!(parse_tuple::<f64, 1>(&write_tuple(&[1e300])), Some([1e300]));
    }

    #[test]
    fn booleans() {
        assert_eq!(parse_tuple::<bool, 2>("(true, false)"), Some([true, false]));
        assert_eq!(parse_tuple::<bool, 1>("(1)"), None);
    }
}
