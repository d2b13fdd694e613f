use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

pub trait Entity {
    fn id(&self) -> &ID;
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Opaque identifier handed out by the calendar backend.
///
/// Identifiers created locally are random uuids, but any non empty
/// string coming from the backend is accepted as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ID(String);

impl ID {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ID {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidIDError {
    #[error("ID: {0:?} is malformed")]
    Malformed(String),
}

impl FromStr for ID {
    type Err = InvalidIDError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.len() != s.len() {
            return Err(InvalidIDError::Malformed(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl Serialize for ID {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ID {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IDVisitor;

        impl<'de> Visitor<'de> for IDVisitor {
            type Value = ID;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A valid string or integer id representation")
            }

            fn visit_str<E>(self, value: &str) -> Result<ID, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<ID>()
                    .map_err(|_| E::custom(format!("Malformed id: {:?}", value)))
            }

            // The backend hands out numeric ids for some records
            fn visit_u64<E>(self, value: u64) -> Result<ID, E>
            where
                E: serde::de::Error,
            {
                Ok(ID(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<ID, E>
            where
                E: serde::de::Error,
            {
                Ok(ID(value.to_string()))
            }
        }

        deserializer.deserialize_any(IDVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_ids() {
        assert_eq!("gage-42".parse::<ID>().unwrap().as_str(), "gage-42");
        assert!("".parse::<ID>().is_err());
        assert!("  ".parse::<ID>().is_err());
        assert!(" padded ".parse::<ID>().is_err());
    }

    #[test]
    fn deserializes_string_and_numeric_ids() {
        let id: ID = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(id.as_str(), "abc");
        let id: ID = serde_json::from_str("17").unwrap();
        assert_eq!(id.as_str(), "17");
        assert!(serde_json::from_str::<ID>("\"\"").is_err());
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(ID::new(), ID::new());
    }
}
