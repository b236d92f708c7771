//! Deterministic username generation from seed definitions.
//!
//! Usernames are built from English first and last names, lowercased and
//! joined with an underscore, with an optional two digit suffix. Only ASCII
//! letters, digits, and underscores survive sanitisation so the names can be
//! used verbatim in query strings.

use std::collections::HashSet;

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::definition::{MAX_USER_COUNT, SeedDefinition};
use crate::error::GenerationError;

/// Maximum number of candidates tried for a single dataset slot.
const MAX_NAME_ATTEMPTS: usize = 64;

/// Probability of appending a numeric suffix to a username.
const SUFFIX_PROBABILITY: f64 = 0.5;

/// Generates the usernames described by `definition`.
///
/// The output order is part of the contract: a store that assigns ids in
/// insertion order gives the first username id 1, the second id 2, and so
/// on.
///
/// # Errors
///
/// Returns [`GenerationError::TooManyUsers`] when the definition exceeds
/// [`MAX_USER_COUNT`], or [`GenerationError::UsernameSpaceExhausted`] when
/// no unique candidate can be found for a slot.
///
/// # Example
///
/// ```
/// use users_seed::{SeedDefinition, generate_usernames};
///
/// let names = generate_usernames(&SeedDefinition::new(42, 3)).expect("generated");
/// assert!(names.iter().all(|name| !name.is_empty()));
/// ```
pub fn generate_usernames(definition: &SeedDefinition) -> Result<Vec<String>, GenerationError> {
    let requested = definition.user_count();
    if requested > MAX_USER_COUNT {
        return Err(GenerationError::TooManyUsers {
            requested,
            max: MAX_USER_COUNT,
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(definition.seed());
    let mut seen = HashSet::with_capacity(requested);
    let mut usernames = Vec::with_capacity(requested);

    for _ in 0..requested {
        let username = generate_unique_username(&mut rng, &seen)?;
        seen.insert(username.clone());
        usernames.push(username);
    }

    Ok(usernames)
}

fn generate_unique_username(
    rng: &mut ChaCha8Rng,
    seen: &HashSet<String>,
) -> Result<String, GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let candidate = candidate_username(rng);
        if !candidate.is_empty() && !seen.contains(&candidate) {
            return Ok(candidate);
        }
    }

    Err(GenerationError::UsernameSpaceExhausted {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

fn candidate_username(rng: &mut ChaCha8Rng) -> String {
    let first: String = FirstName(EN).fake_with_rng(rng);
    let last: String = LastName(EN).fake_with_rng(rng);
    let mut username = format!("{}_{}", sanitize(&first), sanitize(&last));

    if rng.random_bool(SUFFIX_PROBABILITY) {
        let suffix: u8 = rng.random_range(10..100);
        username.push_str(&suffix.to_string());
    }

    username
}

fn sanitize(part: &str) -> String {
    part.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn same_definition_yields_identical_usernames() {
        let definition = SeedDefinition::new(99, 25);
        let first = generate_usernames(&definition).expect("first run");
        let second = generate_usernames(&definition).expect("second run");
        assert_eq!(first, second);
    }

    #[rstest]
    fn different_seeds_yield_different_datasets() {
        let first = generate_usernames(&SeedDefinition::new(1, 10)).expect("seed 1");
        let second = generate_usernames(&SeedDefinition::new(2, 10)).expect("seed 2");
        assert_ne!(first, second);
    }

    #[rstest]
    fn default_dataset_has_unique_usernames() {
        let usernames = generate_usernames(&SeedDefinition::default()).expect("default dataset");
        let unique: HashSet<&String> = usernames.iter().collect();
        assert_eq!(usernames.len(), 200);
        assert_eq!(unique.len(), usernames.len());
    }

    #[rstest]
    fn usernames_are_query_string_safe() {
        let usernames = generate_usernames(&SeedDefinition::new(5, 50)).expect("dataset");
        for username in usernames {
            assert!(
                username
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "unexpected character in {username}"
            );
        }
    }

    #[rstest]
    fn zero_users_yields_empty_dataset() {
        let usernames = generate_usernames(&SeedDefinition::new(3, 0)).expect("empty dataset");
        assert!(usernames.is_empty());
    }

    #[rstest]
    fn oversized_definitions_are_rejected() {
        let err = generate_usernames(&SeedDefinition::new(3, MAX_USER_COUNT + 1))
            .expect_err("too many users");
        assert_eq!(
            err,
            GenerationError::TooManyUsers {
                requested: MAX_USER_COUNT + 1,
                max: MAX_USER_COUNT,
            }
        );
    }

    #[rstest]
    #[case("O'Kon", "okon")]
    #[case("Mary-Jane", "maryjane")]
    #[case("Ada", "ada")]
    fn sanitize_keeps_lowercase_alphanumerics(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize(input), expected);
    }
}
