use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("repository slug contains invalid characters")]
    InvalidCharacters,
    #[error("string is not a well formed org/repo slug")]
    NotWellFormed,
}

/// Splits an `org/repo` slug into its organization and repository names.
pub fn parse_repo_slug(repo_slug: &str) -> Result<(String, String), SlugError> {
    if !repo_slug.chars().all(is_slug_char) {
        return Err(SlugError::InvalidCharacters);
    }

    match repo_slug.split_once('/') {
        Some((org, repo)) if !org.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            log::debug!("parsed repository slug: org {} repo {}", org, repo);
            Ok((org.to_owned(), repo.to_owned()))
        }
        _ => Err(SlugError::NotWellFormed),
    }
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_org_and_repo() {
        let (org, repo) = parse_repo_slug("kubernetes/release").unwrap();

        assert_eq!(org, "kubernetes");
        assert_eq!(repo, "release");
    }

    #[test]
    fn should_accept_dots_and_underscores() {
        let (org, repo) = parse_repo_slug("my_org/repo.rs").unwrap();

        assert_eq!(org, "my_org");
        assert_eq!(repo, "repo.rs");
    }

    #[test]
    fn should_reject_slug_without_slash() {
        assert_eq!(
            parse_repo_slug("bad-slug-no-slash"),
            Err(SlugError::NotWellFormed)
        );
    }

    #[test]
    fn should_reject_slug_with_too_many_parts() {
        assert_eq!(parse_repo_slug("a/b/c"), Err(SlugError::NotWellFormed));
    }

    #[test]
    fn should_reject_empty_parts() {
        assert_eq!(parse_repo_slug("/release"), Err(SlugError::NotWellFormed));
        assert_eq!(parse_repo_slug("kubernetes/"), Err(SlugError::NotWellFormed));
        assert_eq!(parse_repo_slug(""), Err(SlugError::NotWellFormed));
    }

    #[test]
    fn should_reject_invalid_characters() {
        assert_eq!(
            parse_repo_slug("kubernetes/re lease"),
            Err(SlugError::InvalidCharacters)
        );
        assert_eq!(
            parse_repo_slug("https://github.com/kubernetes/release"),
            Err(SlugError::InvalidCharacters)
        );
    }
}
