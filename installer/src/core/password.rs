//! Acceptance rule for the search index password.

/// Why a candidate password was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordProblem {
    Empty,
    ForbiddenCharacter(char),
}

/// The password ends up unquoted in a rake argument and a comma separated
/// credential list, so it must be non-empty and free of commas, quotes and
/// whitespace.
pub fn check_password(candidate: &str) -> Result<(), PasswordProblem> {
    if candidate.is_empty() {
        return Err(PasswordProblem::Empty);
    }
    match candidate
        .chars()
        .find(|c| matches!(c, ',' | '\'' | '"') || c.is_whitespace())
    {
        Some(c) => Err(PasswordProblem::ForbiddenCharacter(c)),
        None => Ok(()),
    }
}

pub fn is_valid_password(candidate: &str) -> bool {
    check_password(candidate).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_passwords() {
        assert!(is_valid_password("s3cret"));
        assert!(is_valid_password("p@ss-word_1!"));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(check_password(""), Err(PasswordProblem::Empty));
    }

    #[test]
    fn rejects_commas_quotes_and_whitespace() {
        for bad in ["a,b", "a'b", "a\"b", "a b", "a\tb", " lead"] {
            assert!(!is_valid_password(bad), "{bad:?} should be rejected");
        }
        assert_eq!(
            check_password("x,y"),
            Err(PasswordProblem::ForbiddenCharacter(','))
        );
    }
}
