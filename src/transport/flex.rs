use serde::Deserialize;
use serde::de::Error as DeError;

/// Unsigned integer sent either as a JSON number or as a numeric string
/// (`3599` and `"3599"` both decode to `3599`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexibleU64(u64);

impl FlexibleU64 {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for FlexibleU64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match NumberOrText::deserialize(deserializer)? {
            NumberOrText::Number(value) => Ok(Self(value)),
            NumberOrText::Text(text) => text.trim().parse::<u64>().map(Self).map_err(|_| {
                D::Error::custom(format!("expected a non-negative integer, got {text:?}"))
            }),
        }
    }
}

/// Text field that some responses send as a number (error `code`, for example).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlexibleString(String);

impl FlexibleString {
    pub fn into_string(self) -> String {
        self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for FlexibleString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match TextOrNumber::deserialize(deserializer)? {
            TextOrNumber::Text(text) => Ok(Self(text)),
            TextOrNumber::Number(number) => Ok(Self(number.to_string())),
        }
    }
}

/// Field that holds either one string or a list of strings (`to`, `messageId`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OneOrMany(Vec<String>);

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrManyRepr {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for OneOrMany {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match OneOrManyRepr::deserialize(deserializer)? {
            OneOrManyRepr::One(value) => Self(vec![value]),
            OneOrManyRepr::Many(values) => Self(values),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flexible_u64_accepts_numbers_and_numeric_strings() {
        let parsed: FlexibleU64 = serde_json::from_str("3599").unwrap();
        assert_eq!(parsed.value(), 3599);
        let parsed: FlexibleU64 = serde_json::from_str("\" 3599 \"").unwrap();
        assert_eq!(parsed.value(), 3599);
        assert!(serde_json::from_str::<FlexibleU64>("\"soon\"").is_err());
        assert!(serde_json::from_str::<FlexibleU64>("-5").is_err());
    }

    #[test]
    fn flexible_string_keeps_numeric_token() {
        let parsed: FlexibleString = serde_json::from_str("4001").unwrap();
        assert_eq!(parsed.into_string(), "4001");
        let parsed: FlexibleString = serde_json::from_str("\"TOO_MANY\"").unwrap();
        assert_eq!(parsed.into_string(), "TOO_MANY");
    }

    #[test]
    fn one_or_many_normalizes_to_vec() {
        let one: OneOrMany = serde_json::from_str("\"0412345678\"").unwrap();
        assert_eq!(one.into_vec(), vec!["0412345678".to_owned()]);
        let many: OneOrMany = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(many.into_vec().len(), 2);
    }
}
