//! Tokenizer for ARM resource-ID paths
//!
//! Splits `/subscriptions/{sub}/resourceGroups/{rg}/providers/{ns}/k1/v1/...`
//! into its fixed prefix plus an ordered `key/value` segment map. Typed
//! parsers in the service crates then pop the segments they expect and
//! require the map to be empty afterwards.

use crate::error::{IdError, IdResult};

const SUBSCRIPTIONS_PREFIX: &str = "/subscriptions/";

/// How segment keys and the provider namespace are matched during decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    /// Keys must match the canonical casing exactly
    Sensitive,
    /// Keys match ignoring ASCII case; format re-emits canonical casing
    Insensitive,
}

/// A tokenized resource ID, before any kind-specific interpretation
///
/// Segment pairs are kept in encounter order. Duplicate keys overwrite the
/// earlier value (last wins), mirroring how ARM treats repeated path keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedId {
    /// Value of the leading `subscriptions` segment, verbatim
    pub subscription_id: String,
    /// Value of the `resourceGroups` segment, case preserved
    pub resource_group: String,
    /// Value of the `providers` segment, if one was present
    pub provider: Option<String>,
    segments: Vec<(String, String)>,
}

impl ParsedId {
    /// Tokenize a raw resource-ID string
    pub fn parse(id: &str) -> IdResult<Self> {
        let Some(rest) = id.strip_prefix(SUBSCRIPTIONS_PREFIX) else {
            return Err(IdError::MalformedId(format!(
                "`{id}` does not start with `{SUBSCRIPTIONS_PREFIX}`"
            )));
        };

        let mut parts = rest.split('/');
        // split always yields at least one element
        let subscription_id = parts.next().unwrap_or_default();
        if subscription_id.is_empty() {
            return Err(IdError::MissingSubscription);
        }

        if parts.next() != Some("resourceGroups") {
            return Err(IdError::MissingResourceGroup);
        }
        let resource_group = match parts.next() {
            Some(rg) if !rg.is_empty() => rg.to_string(),
            _ => return Err(IdError::MissingResourceGroup),
        };

        let remainder: Vec<&str> = parts.collect();
        if remainder.len() % 2 != 0 {
            return Err(IdError::MalformedId(format!(
                "`{id}` has an uneven number of path segments"
            )));
        }

        let mut provider = None;
        let mut segments: Vec<(String, String)> = Vec::with_capacity(remainder.len() / 2);
        for pair in remainder.chunks_exact(2) {
            let (key, value) = (pair[0], pair[1]);
            if key.is_empty() || value.is_empty() {
                return Err(IdError::MalformedId(format!(
                    "`{id}` contained an empty path segment"
                )));
            }
            if key == "providers" {
                provider = Some(value.to_string());
                continue;
            }
            match segments.iter_mut().find(|(k, _)| k == key) {
                Some(entry) => entry.1 = value.to_string(),
                None => segments.push((key.to_string(), value.to_string())),
            }
        }

        Ok(Self {
            subscription_id: subscription_id.to_string(),
            resource_group,
            provider,
            segments,
        })
    }

    /// Require the ID to belong to the given provider namespace
    pub fn expect_provider(&self, namespace: &str, mode: CaseMode) -> IdResult<()> {
        let matches = match (self.provider.as_deref(), mode) {
            (Some(p), CaseMode::Sensitive) => p == namespace,
            (Some(p), CaseMode::Insensitive) => p.eq_ignore_ascii_case(namespace),
            (None, _) => false,
        };
        if matches {
            Ok(())
        } else {
            Err(IdError::MalformedId(format!(
                "expected the provider namespace `{namespace}`, got `{}`",
                self.provider.as_deref().unwrap_or("")
            )))
        }
    }

    /// Remove and return the value of the segment with exactly this key
    pub fn pop_segment(&mut self, key: &str) -> IdResult<String> {
        match self.segments.iter().position(|(k, _)| k == key) {
            Some(idx) => Ok(self.segments.remove(idx).1),
            None => Err(IdError::SegmentNotFound(key.to_string())),
        }
    }

    /// Remove and return the value of the segment matching this key
    /// ignoring ASCII case
    ///
    /// The matched entry is removed from the map, so extracting the same
    /// segment twice is impossible.
    pub fn pop_segment_insensitively(&mut self, key: &str) -> IdResult<String> {
        match self
            .segments
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            Some(idx) => Ok(self.segments.remove(idx).1),
            None => Err(IdError::SegmentNotFound(key.to_string())),
        }
    }

    /// Pop a segment in the given case mode
    pub fn pop_segment_with(&mut self, key: &str, mode: CaseMode) -> IdResult<String> {
        match mode {
            CaseMode::Sensitive => self.pop_segment(key),
            CaseMode::Insensitive => self.pop_segment_insensitively(key),
        }
    }

    /// Fail if any segments remain unextracted
    ///
    /// Guards against callers forgetting to pop a segment, and against
    /// malformed IDs carrying extra path components.
    pub fn expect_no_remaining_segments(&self) -> IdResult<()> {
        if self.segments.is_empty() {
            Ok(())
        } else {
            Err(IdError::UnexpectedExtraSegments(
                self.segments.iter().map(|(k, _)| k.clone()).collect(),
            ))
        }
    }

    /// Keys of the segments not yet extracted, in encounter order
    pub fn remaining_segments(&self) -> Vec<&str> {
        self.segments.iter().map(|(k, _)| k.as_str()).collect()
    }
}
