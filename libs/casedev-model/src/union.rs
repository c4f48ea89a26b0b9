// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! "One of" values resolved by shape matching
//!
//! A [`Union`] holds the raw JSON it was parsed from and at most one typed
//! variant. Parsing walks [`UnionVariants::CANDIDATES`] in declaration order
//! and keeps the first candidate that accepts the value. When nothing
//! matches, the raw JSON is still kept and re-serialized unchanged, and only
//! [`Validate::validate`] reports the problem.
//!
//! Matching is positional. Two variants whose required fields overlap
//! resolve to whichever is declared first.

use crate::error::ModelError;
use crate::json::hash_value;
use crate::model::{Model, Validate};
use crate::raw::RawMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One entry in a union's ordered candidate list
pub struct Candidate<V> {
    /// Variant name, used in logs and error messages
    pub name: &'static str,
    /// Shape predicate and constructor in one: `Some` when the value fits
    pub parse: fn(&Value) -> Option<V>,
}

/// The closed set of shapes a union may take
pub trait UnionVariants: Sized + 'static {
    /// Candidates in match priority order
    const CANDIDATES: &'static [Candidate<Self>];

    /// Position of this variant in [`Self::CANDIDATES`]
    fn index(&self) -> usize;
}

/// Candidate parser for model-shaped variants.
///
/// Accepts the value when it is an object whose fields pass the model's own
/// validation (required fields present, every field decodes).
pub fn try_model<M: Model + Validate>(value: &Value) -> Option<M> {
    let raw = RawMap::from_value(value.clone()).ok()?;
    let model = M::from_raw(raw);
    model.validate().ok()?;
    Some(model)
}

/// A value that is exactly one of the shapes listed by `V`
pub struct Union<V> {
    variant: Option<V>,
    raw: Value,
}

impl<V: UnionVariants> Union<V> {
    /// Build from a typed variant.
    ///
    /// The variant's JSON must parse back as the same variant, so a union
    /// built here compares equal to one decoded from its serialized form.
    /// An incomplete variant, or one shadowed by an earlier candidate,
    /// yields [`ModelError::InvalidData`].
    pub fn from_variant(variant: V) -> Result<Self, ModelError>
    where
        V: Serialize,
    {
        let expected = variant.index();
        let parsed = Self::parse(serde_json::to_value(&variant)?);
        if parsed.variant.as_ref().map(UnionVariants::index) == Some(expected) {
            return Ok(parsed);
        }

        let name = V::CANDIDATES.get(expected).map_or("unknown", |c| c.name);
        Err(ModelError::invalid(match parsed.variant_name() {
            Some(other) => format!("'{}' value parses back as '{}'", name, other),
            None => format!("'{}' value does not match its own shape", name),
        }))
    }

    /// Resolve a raw value against the candidate list. Never fails.
    pub fn parse(raw: Value) -> Self {
        for candidate in V::CANDIDATES {
            if let Some(variant) = (candidate.parse)(&raw) {
                tracing::trace!(variant = candidate.name, "union variant matched");
                return Self {
                    variant: Some(variant),
                    raw,
                };
            }
        }
        tracing::trace!("no union variant matched");
        Self { variant: None, raw }
    }

    pub fn variant(&self) -> Option<&V> {
        self.variant.as_ref()
    }

    pub fn into_variant(self) -> Option<V> {
        self.variant
    }

    /// Name of the matched variant
    pub fn variant_name(&self) -> Option<&'static str> {
        self.variant
            .as_ref()
            .and_then(|v| V::CANDIDATES.get(v.index()))
            .map(|c| c.name)
    }

    pub fn is_matched(&self) -> bool {
        self.variant.is_some()
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl<V: UnionVariants + Validate> Validate for Union<V> {
    fn validate(&self) -> Result<(), ModelError> {
        match &self.variant {
            Some(variant) => variant.validate(),
            None => {
                let names: Vec<&str> = V::CANDIDATES.iter().map(|c| c.name).collect();
                Err(ModelError::invalid(format!(
                    "value matches none of the variants [{}]",
                    names.join(", ")
                )))
            }
        }
    }
}

impl<V: UnionVariants> PartialEq for Union<V> {
    fn eq(&self, other: &Self) -> bool {
        self.variant.as_ref().map(UnionVariants::index)
            == other.variant.as_ref().map(UnionVariants::index)
            && self.raw == other.raw
    }
}

impl<V: UnionVariants> Eq for Union<V> {}

impl<V: UnionVariants> Hash for Union<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.variant.as_ref().map(UnionVariants::index).hash(state);
        hash_value(&self.raw, state);
    }
}

impl<V: Clone> Clone for Union<V> {
    fn clone(&self) -> Self {
        Self {
            variant: self.variant.clone(),
            raw: self.raw.clone(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Union<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Union")
            .field("variant", &self.variant)
            .field("raw", &self.raw)
            .finish()
    }
}

impl<V> Serialize for Union<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de, V: UnionVariants> Deserialize<'de> for Union<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::parse)
    }
}
