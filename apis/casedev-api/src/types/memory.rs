// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Memory-related types

use super::common::{Metadata, Timestamp, impl_model, impl_params};
use casedev_model::{ModelError, ParamParts, RawMap, Validate};
use serde::{Deserialize, Serialize};

/// A stored memory
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryItem {
    raw: RawMap,
}

/// Search results
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemorySearchResponse {
    raw: RawMap,
}

impl_model!(MemoryItem, MemorySearchResponse);

impl MemoryItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Result<String, ModelError> {
        self.raw.get_required("id")
    }

    pub fn set_id(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.raw.set("id", Some(value.into()))?;
        Ok(self)
    }

    pub fn content(&self) -> Result<String, ModelError> {
        self.raw.get_required("content")
    }

    pub fn set_content(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.raw.set("content", Some(value.into()))?;
        Ok(self)
    }

    pub fn tags(&self) -> Result<Option<Vec<String>>, ModelError> {
        self.raw.get("tags")
    }

    pub fn set_tags(
        &mut self,
        value: impl Into<Option<Vec<String>>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set("tags", value.into())?;
        Ok(self)
    }

    /// Relevance score. Null outside of search results.
    pub fn score(&self) -> Result<Option<f64>, ModelError> {
        self.raw.get("score")
    }

    pub fn set_score(&mut self, value: impl Into<Option<f64>>) -> Result<&mut Self, ModelError> {
        self.raw.set_nullable("score", value.into())?;
        Ok(self)
    }

    pub fn clear_score(&mut self) -> Result<&mut Self, ModelError> {
        self.raw.remove("score")?;
        Ok(self)
    }

    pub fn created_at(&self) -> Result<Option<Timestamp>, ModelError> {
        self.raw.get("createdAt")
    }

    pub fn set_created_at(
        &mut self,
        value: impl Into<Option<Timestamp>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set("createdAt", value.into())?;
        Ok(self)
    }
}

impl Validate for MemoryItem {
    fn validate(&self) -> Result<(), ModelError> {
        self.id()?;
        self.content()?;
        self.tags()?;
        self.score()?;
        self.created_at()?;
        Ok(())
    }
}

impl MemorySearchResponse {
    pub fn results(&self) -> Result<Vec<MemoryItem>, ModelError> {
        self.raw.get_required("results")
    }

    pub fn set_results(&mut self, value: Vec<MemoryItem>) -> Result<&mut Self, ModelError> {
        self.raw.set("results", Some(value))?;
        Ok(self)
    }
}

impl Validate for MemorySearchResponse {
    fn validate(&self) -> Result<(), ModelError> {
        self.results()?.validate()
    }
}

/// Body for storing a memory
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MemoryAddParams {
    parts: ParamParts,
}

impl_params!(MemoryAddParams);

impl MemoryAddParams {
    pub fn new(content: impl Into<String>) -> Result<Self, ModelError> {
        let mut params = Self::default();
        params.set_content(content)?;
        Ok(params)
    }

    pub fn content(&self) -> Result<String, ModelError> {
        self.parts.body.get_required("content")
    }

    pub fn set_content(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.parts.body.set("content", Some(value.into()))?;
        Ok(self)
    }

    pub fn tags(&self) -> Result<Option<Vec<String>>, ModelError> {
        self.parts.body.get("tags")
    }

    pub fn set_tags(
        &mut self,
        value: impl Into<Option<Vec<String>>>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.body.set("tags", value.into())?;
        Ok(self)
    }

    pub fn metadata(&self) -> Result<Option<Metadata>, ModelError> {
        self.parts.body.get("metadata")
    }

    pub fn set_metadata(
        &mut self,
        value: impl Into<Option<Metadata>>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.body.set("metadata", value.into())?;
        Ok(self)
    }

    /// Scope the memory to one end user
    pub fn user_id(&self) -> Result<Option<String>, ModelError> {
        self.parts.body.get("userId")
    }

    pub fn set_user_id(
        &mut self,
        value: impl Into<Option<String>>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.body.set("userId", value.into())?;
        Ok(self)
    }
}

/// Body for searching memories
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MemorySearchParams {
    parts: ParamParts,
}

impl_params!(MemorySearchParams);

impl MemorySearchParams {
    pub fn new(query: impl Into<String>) -> Result<Self, ModelError> {
        let mut params = Self::default();
        params.set_query(query)?;
        Ok(params)
    }

    pub fn query(&self) -> Result<String, ModelError> {
        self.parts.body.get_required("query")
    }

    pub fn set_query(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.parts.body.set("query", Some(value.into()))?;
        Ok(self)
    }

    pub fn limit(&self) -> Result<Option<i64>, ModelError> {
        self.parts.body.get("limit")
    }

    pub fn set_limit(&mut self, value: impl Into<Option<i64>>) -> Result<&mut Self, ModelError> {
        self.parts.body.set("limit", value.into())?;
        Ok(self)
    }

    pub fn tags(&self) -> Result<Option<Vec<String>>, ModelError> {
        self.parts.body.get("tags")
    }

    pub fn set_tags(
        &mut self,
        value: impl Into<Option<Vec<String>>>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.body.set("tags", value.into())?;
        Ok(self)
    }
}

/// Path parameters for deleting a memory
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MemoryDeleteParams {
    pub id: Option<String>,
    parts: ParamParts,
}

impl_params!(MemoryDeleteParams);

impl MemoryDeleteParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            parts: ParamParts::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casedev_model::{Model, Params};
    use serde_json::json;

    #[test]
    fn test_score_null_is_distinct_from_absent() {
        let item =
            MemoryItem::from_json(json!({"id": "m_1", "content": "x", "score": null})).unwrap();
        assert!(item.raw().contains_key("score"));
        assert_eq!(item.score().unwrap(), None);

        let item = MemoryItem::from_json(json!({"id": "m_1", "content": "x"})).unwrap();
        assert!(!item.raw().contains_key("score"));
        assert_eq!(item.score().unwrap(), None);
    }

    #[test]
    fn test_add_params_body() {
        let mut params = MemoryAddParams::new("likes tea").unwrap();
        params
            .set_tags(vec!["prefs".to_string()])
            .unwrap()
            .set_user_id(None)
            .unwrap();
        assert_eq!(
            params.parts().body_value(),
            Some(json!({"content": "likes tea", "tags": ["prefs"]}))
        );
        assert!(params.parts().query_pairs().is_empty());
    }

    #[test]
    fn test_search_response_validates_each_item() {
        let resp = MemorySearchResponse::from_json(json!({
            "results": [{"id": "m_1", "content": "a", "score": 0.9}, {"id": "m_2"}]
        }))
        .unwrap();
        assert!(resp.validate().unwrap_err().to_string().contains("content"));
    }
}
