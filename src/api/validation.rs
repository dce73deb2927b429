use crate::api::errors::ApiError;

pub(crate) const MIN_DNI_DIGITS: usize = 7;
pub(crate) const MAX_DNI_DIGITS: usize = 8;

/// National ID rules: required, digits only, 7-8 characters. Returns the
/// trimmed value so lookups never see surrounding whitespace.
pub(crate) fn validate_dni(dni: &str) -> Result<&str, ApiError> {
    let dni = dni.trim();

    if dni.is_empty() {
        return Err(ApiError::BadRequest("National ID is required".to_string()));
    }
    if !dni.chars().all(|c| c.is_ascii_digit()) {
        return Err(ApiError::BadRequest("National ID must contain only digits".to_string()));
    }
    if !(MIN_DNI_DIGITS..=MAX_DNI_DIGITS).contains(&dni.len()) {
        return Err(ApiError::BadRequest(format!(
            "National ID must be {MIN_DNI_DIGITS} to {MAX_DNI_DIGITS} digits long"
        )));
    }

    Ok(dni)
}

pub(crate) fn validate_submission_link(link: &str) -> Result<(), ApiError> {
    if is_repository_url(link.trim()) {
        Ok(())
    } else {
        Err(ApiError::BadRequest(
            "Submission link must be a GitHub repository URL (https://github.com/<org>/<repo>)"
                .to_string(),
        ))
    }
}

fn is_repository_url(link: &str) -> bool {
    let Some(rest) = link.strip_prefix("https://").or_else(|| link.strip_prefix("http://"))
    else {
        return false;
    };
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    let Some(path) = rest.strip_prefix("github.com/") else {
        return false;
    };

    let path = path.strip_suffix('/').unwrap_or(path);
    let mut segments = path.split('/');
    let (Some(org), Some(repo), None) = (segments.next(), segments.next(), segments.next())
    else {
        return false;
    };

    !org.is_empty()
        && !repo.is_empty()
        && [org, repo]
            .iter()
            .all(|segment| segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dni_accepts_seven_and_eight_digits() {
        assert_eq!(validate_dni("1234567").unwrap(), "1234567");
        assert_eq!(validate_dni("12345678").unwrap(), "12345678");
        assert_eq!(validate_dni(" 12345678 ").unwrap(), "12345678");
    }

    #[test]
    fn dni_rejects_bad_input() {
        assert!(validate_dni("").is_err());
        assert!(validate_dni("   ").is_err());
        assert!(validate_dni("12345a78").is_err());
        assert!(validate_dni("123456").is_err());
        assert!(validate_dni("123456789").is_err());
        assert!(validate_dni("12.45678").is_err());
    }

    #[test]
    fn repository_url_accepts_expected_forms() {
        assert!(is_repository_url("https://github.com/org/repo"));
        assert!(is_repository_url("https://github.com/org/repo/"));
        assert!(is_repository_url("http://github.com/org/repo"));
        assert!(is_repository_url("https://www.github.com/some-org/some_repo"));
    }

    #[test]
    fn repository_url_rejects_everything_else() {
        assert!(!is_repository_url("https://gitlab.com/org/repo"));
        assert!(!is_repository_url("https://github.com/org"));
        assert!(!is_repository_url("https://github.com/org/repo/tree/main"));
        assert!(!is_repository_url("github.com/org/repo"));
        assert!(!is_repository_url("https://github.com//repo"));
        assert!(!is_repository_url("https://github.com/org/repo name"));
        assert!(!is_repository_url("ftp://github.com/org/repo"));
    }
}
