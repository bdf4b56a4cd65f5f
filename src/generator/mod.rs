//! Username candidate generation.
//!
//! Turns a list of names into an ordered list of username candidates.
//! A single-word name yields three casing variants. A name with two or more
//! words uses only the first two and yields 150 candidates built from casing
//! variants, initials and separator-joined combinations.

pub mod casing;
pub mod combine;

use std::collections::HashSet;
use tracing::debug;

pub use casing::{initials, title_case, variants};
pub use combine::{combine, with_separators};

/// Generates candidates for every distinct name, in input order.
///
/// Names are trimmed first. Blank names and names whose trimmed form was
/// already seen earlier in the same call produce nothing. Candidates are not
/// deduplicated across names.
///
/// # Examples
/// ```
/// use namebuster::generator::generate;
///
/// assert_eq!(generate(["bob", "  bob  ", ""]), vec!["bob", "BOB", "Bob"]);
/// ```
pub fn generate<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name.to_string()) {
            debug!("Skipping repeated name '{name}'");
            continue;
        }
        candidates.extend(generate_for_name(name));
    }

    debug!(
        "Generated {} candidates from {} distinct names",
        candidates.len(),
        seen.len()
    );
    candidates
}

/// Generates the candidates for a single name.
///
/// Single-word names come out as `[lower, UPPER, Title]`. For longer names
/// only the first two words are used and the variants are ordered
/// `[lower, Title, UPPER]`; the two orders differ and both are relied on.
pub fn generate_for_name(name: &str) -> Vec<String> {
    let tokens: Vec<&str> = name.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Vec::new(),
        [word] => {
            let lower = word.to_lowercase();
            let title = title_case(&lower);
            vec![lower, word.to_uppercase(), title]
        }
        [first, last, ..] => full_name_candidates(first, last),
    }
}

fn full_name_candidates(first: &str, last: &str) -> Vec<String> {
    let first_variants = variants(first);
    let last_variants = variants(last);
    let first_initials = initials(first);
    let last_initials = initials(last);

    let mut candidates = Vec::with_capacity(150);
    candidates.extend(first_variants.iter().cloned());
    candidates.extend(last_variants.iter().cloned());

    // Full first + full last
    candidates.extend(combine(&first_variants, &last_variants));
    // First initial + full last
    candidates.extend(combine(&first_initials, &last_variants));
    // Full first + last initial
    candidates.extend(combine(&first_variants, &last_initials));
    // Full last + first initial
    candidates.extend(combine(&last_variants, &first_initials));
    // Full last + full first
    candidates.extend(combine(&last_variants, &first_variants));

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word() {
        assert_eq!(generate_for_name("bob"), vec!["bob", "BOB", "Bob"]);
        assert_eq!(generate_for_name("aDmIn"), vec!["admin", "ADMIN", "Admin"]);
    }

    #[test]
    fn test_blank_names_yield_nothing() {
        assert!(generate_for_name("").is_empty());
        assert!(generate_for_name("   ").is_empty());
        assert!(generate_for_name("\t\n").is_empty());
        assert!(generate(["", "  "]).is_empty());
    }

    #[test]
    fn test_two_words_yield_150() {
        assert_eq!(generate_for_name("John Doe").len(), 150);
        assert_eq!(generate_for_name("a b").len(), 150);
        assert_eq!(generate_for_name("MARIA   de").len(), 150);
    }

    #[test]
    fn test_two_word_prefix_order() {
        let candidates = generate_for_name("John Doe");
        assert_eq!(
            &candidates[..8],
            &["john", "John", "JOHN", "doe", "Doe", "DOE", "johndoe", "johnDoe"]
        );
    }

    #[test]
    fn test_block_boundaries() {
        let candidates = generate_for_name("John Doe");
        // Blocks start at 6, 42, 66, 90, 114
        assert_eq!(candidates[6], "johndoe");
        assert_eq!(candidates[41], "JOHN-DOE");
        assert_eq!(candidates[42], "jdoe");
        assert_eq!(candidates[65], "J-DOE");
        assert_eq!(candidates[66], "johnd");
        assert_eq!(candidates[89], "JOHN-D");
        assert_eq!(candidates[90], "doej");
        assert_eq!(candidates[113], "DOE-J");
        assert_eq!(candidates[114], "doejohn");
        assert_eq!(candidates[149], "DOE-JOHN");
    }

    #[test]
    fn test_extra_words_ignored() {
        assert_eq!(
            generate_for_name("John Middle Doe"),
            generate_for_name("John Middle")
        );
    }

    #[test]
    fn test_duplicate_names_skipped() {
        assert_eq!(
            generate(["Bob Smith", "Bob Smith"]),
            generate(["Bob Smith"])
        );
        assert_eq!(generate([" Bob Smith", "Bob Smith "]).len(), 150);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        assert_eq!(generate(["bob", "Bob"]).len(), 6);
    }

    #[test]
    fn test_outputs_not_deduplicated() {
        // Two distinct inputs with identical candidates keep both batches
        let candidates = generate(["bob", "BOB"]);
        assert_eq!(candidates, vec!["bob", "BOB", "Bob", "bob", "BOB", "Bob"]);
    }
}
