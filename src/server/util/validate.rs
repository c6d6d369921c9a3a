//! Field validation shared by the create/update parameter builders.

use regex::Regex;
use std::sync::LazyLock;

use crate::server::error::AppError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+([\.-]?\w+)*@\w+([\.-]?\w+)*(\.\w{2,3})+$").expect("valid email regex")
});

/// Requires a non-blank value, returning it trimmed.
pub fn required(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("Please add a {}", field)));
    }
    Ok(trimmed.to_string())
}

pub fn max_len(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::BadRequest(format!(
            "{} cannot be more than {} characters",
            capitalize(field),
            max
        )));
    }
    Ok(())
}

pub fn email(value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if !EMAIL_RE.is_match(value) {
        return Err(AppError::BadRequest("Please add a valid email".to_string()));
    }
    Ok(value.to_lowercase())
}

/// Accepts only absolute `http`/`https` URLs.
pub fn website(value: &str) -> Result<String, AppError> {
    let value = value.trim();
    match url::Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(value.to_string()),
        _ => Err(AppError::BadRequest(
            "Please use a valid URL with HTTP or HTTPS".to_string(),
        )),
    }
}

pub fn password(value: &str) -> Result<(), AppError> {
    if value.chars().count() < 6 {
        return Err(AppError::BadRequest(
            "Password must be at least 6 characters".to_string(),
        ));
    }
    Ok(())
}

/// Lowercase, hyphen separated slug of a name, e.g. `"Devworks Bootcamp"` -> `"devworks-bootcamp"`.
pub fn slugify(value: &str) -> String {
    value
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
