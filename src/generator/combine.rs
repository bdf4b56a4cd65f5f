use crate::constants::generator::SEPARATORS;

/// Expands `left` with separator-suffixed copies of each element.
///
/// The originals come first, then every element's `.`, `_` and `-` forms,
/// grouped per element: `[a, b]` becomes `[a, b, a., a_, a-, b., b_, b-]`.
pub fn with_separators<S: AsRef<str>>(left: &[S]) -> Vec<String> {
    let mut separated: Vec<String> = Vec::with_capacity(left.len() * (SEPARATORS.len() + 1));
    separated.extend(left.iter().map(|l| l.as_ref().to_string()));
    for element in left {
        for separator in SEPARATORS {
            separated.push(format!("{}{separator}", element.as_ref()));
        }
    }
    separated
}

/// Concatenates every separated left element with every right element.
///
/// The separated left list is the outer loop and `right` the inner loop, so
/// the result length is `left.len() * 4 * right.len()`.
///
/// # Examples
/// ```
/// use namebuster::generator::combine;
///
/// let combined = combine(&["j"], &["doe"]);
/// assert_eq!(combined, vec!["jdoe", "j.doe", "j_doe", "j-doe"]);
/// ```
pub fn combine<L: AsRef<str>, R: AsRef<str>>(left: &[L], right: &[R]) -> Vec<String> {
    let separated = with_separators(left);
    let mut combined = Vec::with_capacity(separated.len() * right.len());
    for l in &separated {
        for r in right {
            combined.push(format!("{l}{}", r.as_ref()));
        }
    }
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_interleaved_per_element() {
        assert_eq!(
            with_separators(&["a", "b"]),
            vec!["a", "b", "a.", "a_", "a-", "b.", "b_", "b-"]
        );
    }

    #[test]
    fn test_separators_empty_left() {
        let empty: [&str; 0] = [];
        assert!(with_separators(&empty).is_empty());
        assert!(combine(&empty, &["x"]).is_empty());
    }

    #[test]
    fn test_combine_outer_left_inner_right() {
        let combined = combine(&["a", "b"], &["x", "y"]);
        assert_eq!(
            combined,
            vec![
                "ax", "ay", "bx", "by", "a.x", "a.y", "a_x", "a_y", "a-x", "a-y", "b.x", "b.y",
                "b_x", "b_y", "b-x", "b-y",
            ]
        );
    }

    #[test]
    fn test_combine_block_sizes() {
        let three = ["a", "b", "c"];
        let two = ["x", "y"];
        assert_eq!(combine(&three, &three).len(), 36);
        assert_eq!(combine(&two, &three).len(), 24);
        assert_eq!(combine(&three, &two).len(), 24);
    }
}
