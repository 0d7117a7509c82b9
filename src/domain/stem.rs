use std::fmt;
use std::ops::Deref;

use super::StemError;
use crate::utils::normalizations::{normalize_with, WordClass};

/// A value that already satisfies the normalized-name invariant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stem(String);

impl Stem {
    /// Normalizes `raw` under `class`. Fails when nothing is left.
    pub fn from_raw<S>(raw: S, class: WordClass) -> Result<Self, StemError>
    where S: AsRef<str>
    {
        let norm_name = normalize_with(raw.as_ref(), class);
        if norm_name.is_empty() { return Err(StemError::Empty); }

        Ok(Self(norm_name))
    }

    /// Accepts `value` only if it is non-empty and normalizing it under
    /// `class` is a no-op.
    pub fn parse<S>(value: S, class: WordClass) -> Result<Self, StemError>
    where S: Into<String>
    {
        let value = value.into();
        if value.is_empty() { return Err(StemError::Empty); }

        let expected = normalize_with(&value, class);
        if expected != value {
            return Err(StemError::NotNormalized { value, expected });
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Stem {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Stem {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Stem {
    type Error = StemError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Stem::parse(value, WordClass::Ascii)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_raw_normalizes() {
        let stem = Stem::from_raw("  Foo--Bar!!", WordClass::Ascii).unwrap();
        assert_eq!(stem.as_str(), "foo_bar");
        assert_eq!(stem.to_string(), "foo_bar");
    }

    #[test]
    fn from_raw_rejects_names_that_normalize_to_nothing() {
        assert_eq!(Stem::from_raw("!!!", WordClass::Ascii), Err(StemError::Empty));
        assert_eq!(Stem::from_raw("", WordClass::Unicode), Err(StemError::Empty));
        assert_eq!(Stem::from_raw("日本語", WordClass::Ascii), Err(StemError::Empty));
    }

    #[test]
    fn from_raw_output_parses_under_the_same_class() {
        let inputs = ["Hello World", "  Foo--Bar!!", "MiXeD_CASE-42", "Café", "Straße Café", "ΑΒΓ δ!", "a_ _b"];

        for class in [WordClass::Ascii, WordClass::Unicode] {
            for input in inputs {
                let stem = Stem::from_raw(input, class).unwrap();
                let reparsed = Stem::parse(stem.to_string(), class);
                assert_eq!(reparsed, Ok(stem), "input: {:?}, class: {:?}", input, class);
            }
        }
    }

    #[test]
    fn parse_accepts_normalized_values() {
        let stem = Stem::parse("already_normal_123", WordClass::Ascii).unwrap();
        assert_eq!(&*stem, "already_normal_123");
    }

    #[test]
    fn parse_honours_the_word_class() {
        assert!(Stem::parse("café", WordClass::Unicode).is_ok());
        assert_eq!(
            Stem::parse("café", WordClass::Ascii),
            Err(StemError::NotNormalized { value: "café".to_string(), expected: "caf".to_string() })
        );
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Stem::parse("", WordClass::Ascii), Err(StemError::Empty));
    }

    #[test]
    fn parse_rejects_unnormalized_and_reports_expected() {
        let err = Stem::parse("Hello World", WordClass::Ascii).unwrap_err();
        assert_eq!(
            err,
            StemError::NotNormalized { value: "Hello World".to_string(), expected: "hello_world".to_string() }
        );
    }

    #[test]
    fn try_from_uses_the_ascii_class() {
        assert!(Stem::try_from("name_1".to_string()).is_ok());
        assert!(Stem::try_from("_name".to_string()).is_err());
        assert!(Stem::try_from("name_".to_string()).is_err());
        assert!(Stem::try_from("café".to_string()).is_err());
    }

    proptest! {
        #[test]
        fn any_built_stem_parses_back(input in any::<String>(), unicode in any::<bool>()) {
            let class = if unicode { WordClass::Unicode } else { WordClass::Ascii };

            if let Ok(stem) = Stem::from_raw(&input, class) {
                prop_assert_eq!(Stem::parse(stem.to_string(), class), Ok(stem));
            }
        }
    }
}
