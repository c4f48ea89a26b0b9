// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Vault-related types

use super::common::{Timestamp, impl_model, impl_params};
use casedev_model::{
    ApiEnum, Candidate, ModelError, ParamParts, RawMap, Union, UnionVariants, Validate, try_model,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Retrieval strategy for vault search
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum SearchMethod {
    Vector,
    Keyword,
    Hybrid,
}

/// A document vault
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vault {
    raw: RawMap,
}

/// All vaults visible to the caller
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VaultList {
    raw: RawMap,
}

/// A chunk matched by vault search
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VaultChunk {
    raw: RawMap,
}

/// Vault search results
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VaultSearchResponse {
    raw: RawMap,
}

/// Chunk origin: a stored document
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentSource {
    raw: RawMap,
}

/// Chunk origin: a crawled web page
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlSource {
    raw: RawMap,
}

impl_model!(
    Vault,
    VaultList,
    VaultChunk,
    VaultSearchResponse,
    DocumentSource,
    UrlSource
);

impl Vault {
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

    pub fn name(&self) -> Result<String, ModelError> {
        self.raw.get_required("name")
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.raw.set("name", Some(value.into()))?;
        Ok(self)
    }

    pub fn description(&self) -> Result<Option<String>, ModelError> {
        self.raw.get("description")
    }

    pub fn set_description(
        &mut self,
        value: impl Into<Option<String>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set_nullable("description", value.into())?;
        Ok(self)
    }

    pub fn clear_description(&mut self) -> Result<&mut Self, ModelError> {
        self.raw.remove("description")?;
        Ok(self)
    }

    pub fn document_count(&self) -> Result<Option<i64>, ModelError> {
        self.raw.get("documentCount")
    }

    pub fn set_document_count(
        &mut self,
        value: impl Into<Option<i64>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set("documentCount", value.into())?;
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

impl Validate for Vault {
    fn validate(&self) -> Result<(), ModelError> {
        self.id()?;
        self.name()?;
        self.description()?;
        self.document_count()?;
        self.created_at()?;
        Ok(())
    }
}

impl VaultList {
    pub fn vaults(&self) -> Result<Vec<Vault>, ModelError> {
        self.raw.get_required("vaults")
    }

    pub fn set_vaults(&mut self, value: Vec<Vault>) -> Result<&mut Self, ModelError> {
        self.raw.set("vaults", Some(value))?;
        Ok(self)
    }
}

impl Validate for VaultList {
    fn validate(&self) -> Result<(), ModelError> {
        self.vaults()?.validate()
    }
}

impl DocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object_id(&self) -> Result<String, ModelError> {
        self.raw.get_required("objectId")
    }

    pub fn set_object_id(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.raw.set("objectId", Some(value.into()))?;
        Ok(self)
    }

    pub fn filename(&self) -> Result<String, ModelError> {
        self.raw.get_required("filename")
    }

    pub fn set_filename(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.raw.set("filename", Some(value.into()))?;
        Ok(self)
    }

    /// One-based page number, when the document is paginated
    pub fn page(&self) -> Result<Option<i64>, ModelError> {
        self.raw.get("page")
    }

    pub fn set_page(&mut self, value: impl Into<Option<i64>>) -> Result<&mut Self, ModelError> {
        self.raw.set("page", value.into())?;
        Ok(self)
    }
}

impl Validate for DocumentSource {
    fn validate(&self) -> Result<(), ModelError> {
        self.object_id()?;
        self.filename()?;
        self.page()?;
        Ok(())
    }
}

impl UrlSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(&self) -> Result<String, ModelError> {
        self.raw.get_required("url")
    }

    pub fn set_url(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.raw.set("url", Some(value.into()))?;
        Ok(self)
    }

    pub fn title(&self) -> Result<Option<String>, ModelError> {
        self.raw.get("title")
    }

    pub fn set_title(&mut self, value: impl Into<Option<String>>) -> Result<&mut Self, ModelError> {
        self.raw.set("title", value.into())?;
        Ok(self)
    }
}

impl Validate for UrlSource {
    fn validate(&self) -> Result<(), ModelError> {
        self.url()?;
        self.title()?;
        Ok(())
    }
}

/// Where a search chunk came from
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum ChunkSource {
    Document(DocumentSource),
    Url(UrlSource),
}

fn parse_document_source(v: &Value) -> Option<ChunkSource> {
    try_model(v).map(ChunkSource::Document)
}

fn parse_url_source(v: &Value) -> Option<ChunkSource> {
    try_model(v).map(ChunkSource::Url)
}

impl UnionVariants for ChunkSource {
    const CANDIDATES: &'static [Candidate<Self>] = &[
        Candidate {
            name: "document",
            parse: parse_document_source,
        },
        Candidate {
            name: "url",
            parse: parse_url_source,
        },
    ];

    fn index(&self) -> usize {
        match self {
            ChunkSource::Document(_) => 0,
            ChunkSource::Url(_) => 1,
        }
    }
}

impl Validate for ChunkSource {
    fn validate(&self) -> Result<(), ModelError> {
        match self {
            ChunkSource::Document(source) => source.validate(),
            ChunkSource::Url(source) => source.validate(),
        }
    }
}

impl VaultChunk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Result<String, ModelError> {
        self.raw.get_required("text")
    }

    pub fn set_text(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.raw.set("text", Some(value.into()))?;
        Ok(self)
    }

    pub fn score(&self) -> Result<f64, ModelError> {
        self.raw.get_required("score")
    }

    pub fn set_score(&mut self, value: f64) -> Result<&mut Self, ModelError> {
        self.raw.set("score", Some(value))?;
        Ok(self)
    }

    pub fn source(&self) -> Result<Union<ChunkSource>, ModelError> {
        self.raw.get_required("source")
    }

    pub fn set_source(&mut self, value: Union<ChunkSource>) -> Result<&mut Self, ModelError> {
        self.raw.set("source", Some(value))?;
        Ok(self)
    }
}

impl Validate for VaultChunk {
    fn validate(&self) -> Result<(), ModelError> {
        self.text()?;
        self.score()?;
        self.source()?.validate()
    }
}

impl VaultSearchResponse {
    pub fn chunks(&self) -> Result<Vec<VaultChunk>, ModelError> {
        self.raw.get_required("chunks")
    }

    pub fn set_chunks(&mut self, value: Vec<VaultChunk>) -> Result<&mut Self, ModelError> {
        self.raw.set("chunks", Some(value))?;
        Ok(self)
    }
}

impl Validate for VaultSearchResponse {
    fn validate(&self) -> Result<(), ModelError> {
        self.chunks()?.validate()
    }
}

/// Body for creating a vault
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VaultCreateParams {
    parts: ParamParts,
}

impl_params!(VaultCreateParams);

impl VaultCreateParams {
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        let mut params = Self::default();
        params.set_name(name)?;
        Ok(params)
    }

    pub fn name(&self) -> Result<String, ModelError> {
        self.parts.body.get_required("name")
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.parts.body.set("name", Some(value.into()))?;
        Ok(self)
    }

    pub fn description(&self) -> Result<Option<String>, ModelError> {
        self.parts.body.get("description")
    }

    pub fn set_description(
        &mut self,
        value: impl Into<Option<String>>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.body.set("description", value.into())?;
        Ok(self)
    }
}

/// Path parameters for fetching a vault
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VaultRetrieveParams {
    pub id: Option<String>,
    parts: ParamParts,
}

impl_params!(VaultRetrieveParams);

impl VaultRetrieveParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            parts: ParamParts::default(),
        }
    }
}

/// Path and body parameters for searching a vault
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VaultSearchParams {
    pub id: Option<String>,
    parts: ParamParts,
}

impl_params!(VaultSearchParams);

impl VaultSearchParams {
    pub fn new(id: impl Into<String>, query: impl Into<String>) -> Result<Self, ModelError> {
        let mut params = Self {
            id: Some(id.into()),
            parts: ParamParts::default(),
        };
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

    pub fn method(&self) -> Result<Option<ApiEnum<SearchMethod>>, ModelError> {
        self.parts.body.get("method")
    }

    pub fn set_method(
        &mut self,
        value: impl Into<Option<ApiEnum<SearchMethod>>>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.body.set("method", value.into())?;
        Ok(self)
    }

    pub fn top_k(&self) -> Result<Option<i64>, ModelError> {
        self.parts.body.get("topK")
    }

    pub fn set_top_k(&mut self, value: impl Into<Option<i64>>) -> Result<&mut Self, ModelError> {
        self.parts.body.set("topK", value.into())?;
        Ok(self)
    }
}
