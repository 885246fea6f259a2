//! Decoding the line-oriented `key=value` bodies Gallery sends back.

use std::{collections::HashMap, num::ParseIntError};

/// Every response body contains this marker on the line before its fields.
pub const HEADER_MARKER: &str = "#__GR2PROTO__";

/// A decoded response, as a flat mapping from keys to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    fields: HashMap<String, String>,
}

impl Response {
    /// Parse a response body.
    ///
    /// Anything before the line containing [`HEADER_MARKER`] is banner text
    /// and gets discarded. Each following line is split on its first `=`, so
    /// values may themselves contain `=`. A line without any `=` is kept as
    /// a key with an empty value and later duplicates overwrite earlier
    /// ones.
    pub fn decode(raw: &str) -> Result<Response, DecodeError> {
        let mut lines = raw.lines();

        if !lines.any(|line| line.contains(HEADER_MARKER)) {
            return Err(DecodeError::MissingHeader {
                body: raw.to_string(),
            });
        }

        let mut fields = HashMap::new();

        for line in lines {
            let line = line.strip_suffix('\r').unwrap_or(line);

            match line.split_once('=') {
                Some(("", value)) => {
                    log::warn!("Skipping a value with no key: {:?}", value);
                },
                Some((key, value)) => {
                    fields.insert(key.to_string(), value.to_string());
                },
                None if line.trim().is_empty() => {},
                None => {
                    log::warn!("No \"=\" on the line {:?}", line);
                    fields.insert(line.to_string(), String::new());
                },
            }
        }

        Ok(Response { fields })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Look up an optional field, treating a missing key as the empty
    /// string.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    pub fn contains(&self, key: &str) -> bool { self.fields.contains_key(key) }

    /// Look up a field which must be present.
    pub fn require(&self, key: &str) -> Result<&str, DecodeError> {
        self.get(key).ok_or_else(|| DecodeError::MissingField {
            key: key.to_string(),
        })
    }

    /// Read one of the `*_count` fields used to size the numbered arrays in
    /// list responses.
    ///
    /// Every array entry takes at least one field, so a count larger than the
    /// number of fields in the response is rejected.
    pub fn count(&self, key: &str) -> Result<usize, DecodeError> {
        let value = self.require(key)?;

        let count: usize =
            value.trim().parse().map_err(|inner| DecodeError::BadCount {
                key: key.to_string(),
                value: value.to_string(),
                inner,
            })?;

        if count > self.len() {
            return Err(DecodeError::CountTooLarge {
                key: key.to_string(),
                count,
                available: self.len(),
            });
        }

        Ok(count)
    }

    pub fn len(&self) -> usize { self.fields.len() }

    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> HashMap<String, String> { self.fields }
}

/// The response didn't follow the protocol's framing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("No \"{}\" header was found in the response", HEADER_MARKER)]
    MissingHeader {
        /// The entire body, for diagnostics.
        body: String,
    },
    #[error("The response didn't contain \"{}\"", key)]
    MissingField { key: String },
    #[error("Expected \"{}\" to be a number, found {:?}", key, value)]
    BadCount {
        key: String,
        value: String,
        #[source]
        inner: ParseIntError,
    },
    #[error(
        "\"{}\" claims {} entries but the response only has {} fields",
        key,
        count,
        available
    )]
    CountTooLarge {
        key: String,
        count: usize,
        available: usize,
    },
}
