use crate::core::BuildMode;
use crate::utils::{PackwiseError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hex digits of the content hash kept in production filenames.
pub const DEFAULT_HASH_LENGTH: usize = 20;

/// A BLAKE3 hex digest has 64 characters.
pub const MAX_HASH_LENGTH: usize = 64;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\[\]]*)\]").expect("placeholder pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    Name,
    ContentHash(Option<usize>),
}

impl Placeholder {
    /// Parse the text between brackets; `None` for anything unsupported.
    fn parse(token: &str) -> Option<Self> {
        match token.split_once(':') {
            None => match token {
                "name" => Some(Placeholder::Name),
                "contenthash" => Some(Placeholder::ContentHash(None)),
                _ => None,
            },
            Some(("contenthash", digits))
                if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) =>
            {
                digits.parse().ok().map(|length| Placeholder::ContentHash(Some(length)))
            }
            Some(_) => None,
        }
    }
}

/// Output filename pattern such as `[name].[contenthash].js`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilenameTemplate {
    pattern: String,
}

impl FilenameTemplate {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// `[name].<ext>` for development, `[name].[contenthash].<ext>` for production.
    pub fn for_mode(mode: BuildMode, ext: &str) -> Self {
        if mode.hashes_filenames() {
            Self::new(format!("[name].[contenthash].{}", ext))
        } else {
            Self::new(format!("[name].{}", ext))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn is_content_addressed(&self) -> bool {
        PLACEHOLDER.captures_iter(&self.pattern).any(|caps| {
            matches!(Placeholder::parse(&caps[1]), Some(Placeholder::ContentHash(_)))
        })
    }

    /// Pattern with `[name]` filled in and hash placeholders left as-is.
    pub fn with_name(&self, name: &str) -> String {
        self.pattern.replace("[name]", name)
    }

    /// Substitute `[name]`, `[contenthash]` and `[contenthash:N]`.
    ///
    /// `hash_length` applies to `[contenthash]` without an explicit length.
    /// Any other bracketed token is rejected.
    pub fn render(&self, name: &str, content: &[u8], hash_length: usize) -> Result<String> {
        let mut rendered = String::with_capacity(self.pattern.len() + name.len());
        let mut digest: Option<String> = None;
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(&self.pattern) {
            let Some(whole) = caps.get(0) else { continue };
            rendered.push_str(&self.pattern[last..whole.start()]);

            match Placeholder::parse(&caps[1]) {
                Some(Placeholder::Name) => rendered.push_str(name),
                Some(Placeholder::ContentHash(explicit)) => {
                    let hex = digest.get_or_insert_with(|| full_digest(content));
                    rendered.push_str(truncate_digest(hex, explicit.unwrap_or(hash_length))?);
                }
                None => {
                    return Err(PackwiseError::template(format!(
                        "unsupported placeholder `{}` in {}",
                        whole.as_str(),
                        self.pattern
                    )));
                }
            }

            last = whole.end();
        }

        rendered.push_str(&self.pattern[last..]);
        Ok(rendered)
    }
}

impl fmt::Display for FilenameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Lowercase BLAKE3 hex digest of `content`, truncated to `length` characters.
pub fn content_hash(content: &[u8], length: usize) -> Result<String> {
    let hex = full_digest(content);
    truncate_digest(&hex, length).map(str::to_string)
}

pub fn validate_hash_length(length: usize) -> Result<()> {
    if length == 0 || length > MAX_HASH_LENGTH {
        return Err(PackwiseError::template(format!(
            "hash length must be between 1 and {}, got {}",
            MAX_HASH_LENGTH, length
        )));
    }
    Ok(())
}

fn full_digest(content: &[u8]) -> String {
    blake3::hash(content).to_hex().to_string()
}

fn truncate_digest(hex: &str, length: usize) -> Result<&str> {
    validate_hash_length(length)?;
    Ok(&hex[..length])
}
