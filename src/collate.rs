// Natural-order collation for entry text

use std::cmp::Ordering;

/// Compare two strings case-insensitively with numeric-substring awareness.
///
/// Runs of ASCII digits are compared by numeric value ("item2" < "item10"),
/// everything else character by character after Unicode lowercasing. Strings
/// that differ only by case or leading zeros compare equal, so a stable sort
/// keeps their original relative order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ai = a.chars().peekable();
    let mut bi = b.chars().peekable();

    loop {
        match (ai.peek().copied(), bi.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) => {
                if ca.is_ascii_digit() && cb.is_ascii_digit() {
                    let ord = cmp_digit_runs(&mut ai, &mut bi);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    ai.next();
                    bi.next();
                    let ord = cmp_chars_folded(ca, cb);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
            }
        }
    }
}

/// Consume the digit run at the front of both iterators and compare the runs
/// as numbers: leading zeros stripped, then longer run wins, then lexical.
fn cmp_digit_runs(
    ai: &mut std::iter::Peekable<std::str::Chars<'_>>,
    bi: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Ordering {
    let da = take_digits(ai);
    let db = take_digits(bi);

    let sa = da.trim_start_matches('0');
    let sb = db.trim_start_matches('0');

    // More significant digits means a larger number; equal lengths compare
    // digit-by-digit, which for equal-length digit strings is numeric order.
    sa.len().cmp(&sb.len()).then_with(|| sa.cmp(sb))
}

fn take_digits(it: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut out = String::new();
    while let Some(&c) = it.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        out.push(c);
        it.next();
    }
    out
}

fn cmp_chars_folded(a: char, b: char) -> Ordering {
    a.to_lowercase().cmp(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_alphabetical() {
        assert_eq!(natural_cmp("apple", "banana"), Ordering::Less);
        assert_eq!(natural_cmp("banana", "apple"), Ordering::Greater);
        assert_eq!(natural_cmp("apple", "apple"), Ordering::Equal);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(natural_cmp("Bread", "bread"), Ordering::Equal);
        assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(natural_cmp("Zucchini", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_numeric_runs_compare_by_value() {
        assert_eq!(natural_cmp("item2", "item10"), Ordering::Less);
        assert_eq!(natural_cmp("item10", "item2"), Ordering::Greater);
        assert_eq!(natural_cmp("item10", "item10"), Ordering::Equal);
    }

    #[test]
    fn test_mixed_case_and_numbers() {
        let mut items = vec!["item10", "item2", "Item1"];
        items.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(items, vec!["Item1", "item2", "item10"]);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(natural_cmp("item02", "item2"), Ordering::Equal);
        assert_eq!(natural_cmp("item02", "item10"), Ordering::Less);
    }

    #[test]
    fn test_digits_longer_than_u64() {
        // Compared by digit length, so arbitrarily long runs are fine
        assert_eq!(
            natural_cmp("x99999999999999999999", "x100000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(natural_cmp("milk", "milkshake"), Ordering::Less);
    }

    #[test]
    fn test_number_vs_letter() {
        // Digits sort before letters, as in a plain byte comparison
        assert_eq!(natural_cmp("1 lemon", "apples"), Ordering::Less);
    }
}
