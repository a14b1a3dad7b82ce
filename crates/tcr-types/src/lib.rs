/// Errors that can occur when creating validated slug types.
#[derive(Debug, thiserror::Error)]
pub enum SlugError {
    /// The input was empty or contained only whitespace
    #[error("Slug cannot be empty")]
    Empty,
    /// The input contained a character outside `a-z`, `0-9` and `-`
    #[error("Slug may only contain lowercase letters, digits and hyphens: {0:?}")]
    InvalidCharacter(char),
}

/// A URL path segment used as a content lookup key.
///
/// This type wraps a `String` and guarantees a normalised slug: leading and
/// trailing whitespace is trimmed, ASCII uppercase letters are lowered, and
/// the result must be non-empty and consist only of lowercase ASCII letters,
/// digits and hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Creates a new `Slug` from the given input.
    ///
    /// The input is trimmed and lowercased before validation. Returns
    /// `Err(SlugError::Empty)` for blank input and
    /// `Err(SlugError::InvalidCharacter)` for anything that could not appear
    /// in a URL path segment of this site.
    pub fn new(input: impl AsRef<str>) -> Result<Self, SlugError> {
        let normalised = input.as_ref().trim().to_ascii_lowercase();
        if normalised.is_empty() {
            return Err(SlugError::Empty);
        }
        if let Some(bad) = normalised
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(SlugError::InvalidCharacter(bad));
        }
        Ok(Self(normalised))
    }

    /// Returns the inner slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Slug {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Slug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Slug::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        let slug = Slug::new("  Knee-Replacement ").expect("valid slug");
        assert_eq!(slug.as_str(), "knee-replacement");
    }

    #[test]
    fn rejects_blank_input() {
        assert!(matches!(Slug::new("   "), Err(SlugError::Empty)));
    }

    #[test]
    fn rejects_path_separators() {
        assert!(matches!(
            Slug::new("treatments/hernia"),
            Err(SlugError::InvalidCharacter('/'))
        ));
    }

    #[test]
    fn round_trips_through_serde() {
        let slug = Slug::new("cataract-surgery").expect("valid slug");
        let json = serde_json::to_string(&slug).expect("serialize");
        assert_eq!(json, "\"cataract-surgery\"");
        let back: Slug = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, slug);
    }
}
