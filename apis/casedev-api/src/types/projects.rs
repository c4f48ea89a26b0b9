// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Project-related types

use super::common::{Timestamp, impl_model, impl_params};
use casedev_model::{ApiEnum, ModelError, ParamParts, RawMap, Validate};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Project state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Archived,
}

/// A project
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Project {
    raw: RawMap,
}

/// Page of projects
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectList {
    raw: RawMap,
}

impl_model!(Project, ProjectList);

impl Project {
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

    /// Free-form description. Nullable.
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

    pub fn status(&self) -> Result<ApiEnum<ProjectStatus>, ModelError> {
        self.raw.get_required("status")
    }

    pub fn set_status(
        &mut self,
        value: impl Into<ApiEnum<ProjectStatus>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set("status", Some(value.into()))?;
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

    pub fn updated_at(&self) -> Result<Option<Timestamp>, ModelError> {
        self.raw.get("updatedAt")
    }

    pub fn set_updated_at(
        &mut self,
        value: impl Into<Option<Timestamp>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set("updatedAt", value.into())?;
        Ok(self)
    }
}

impl Validate for Project {
    fn validate(&self) -> Result<(), ModelError> {
        self.id()?;
        self.name()?;
        self.description()?;
        self.status()?.validate()?;
        self.created_at()?;
        self.updated_at()?;
        Ok(())
    }
}

impl ProjectList {
    pub fn projects(&self) -> Result<Vec<Project>, ModelError> {
        self.raw.get_required("projects")
    }

    pub fn set_projects(&mut self, value: Vec<Project>) -> Result<&mut Self, ModelError> {
        self.raw.set("projects", Some(value))?;
        Ok(self)
    }

    /// Total number of projects across all pages
    pub fn total(&self) -> Result<Option<i64>, ModelError> {
        self.raw.get("total")
    }

    pub fn set_total(&mut self, value: impl Into<Option<i64>>) -> Result<&mut Self, ModelError> {
        self.raw.set("total", value.into())?;
        Ok(self)
    }
}

impl Validate for ProjectList {
    fn validate(&self) -> Result<(), ModelError> {
        self.projects()?.validate()?;
        self.total()?;
        Ok(())
    }
}

/// Query parameters for listing projects
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ProjectListParams {
    parts: ParamParts,
}

impl_params!(ProjectListParams);

impl ProjectListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Result<Option<ApiEnum<ProjectStatus>>, ModelError> {
        self.parts.query.get("status")
    }

    pub fn set_status(
        &mut self,
        value: impl Into<Option<ApiEnum<ProjectStatus>>>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.query.set("status", value.into())?;
        Ok(self)
    }

    pub fn limit(&self) -> Result<Option<i64>, ModelError> {
        self.parts.query.get("limit")
    }

    pub fn set_limit(&mut self, value: impl Into<Option<i64>>) -> Result<&mut Self, ModelError> {
        self.parts.query.set("limit", value.into())?;
        Ok(self)
    }
}

/// Body for creating a project
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ProjectCreateParams {
    parts: ParamParts,
}

impl_params!(ProjectCreateParams);

impl ProjectCreateParams {
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

    /// `None` sends an explicit null
    pub fn set_description(
        &mut self,
        value: impl Into<Option<String>>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.body.set_nullable("description", value.into())?;
        Ok(self)
    }

    pub fn clear_description(&mut self) -> Result<&mut Self, ModelError> {
        self.parts.body.remove("description")?;
        Ok(self)
    }

    pub fn status(&self) -> Result<Option<ApiEnum<ProjectStatus>>, ModelError> {
        self.parts.body.get("status")
    }

    pub fn set_status(
        &mut self,
        value: impl Into<Option<ApiEnum<ProjectStatus>>>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.body.set("status", value.into())?;
        Ok(self)
    }
}

/// Path parameters for fetching a project
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ProjectRetrieveParams {
    pub id: Option<String>,
    parts: ParamParts,
}

impl_params!(ProjectRetrieveParams);

impl ProjectRetrieveParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            parts: ParamParts::default(),
        }
    }
}

/// Path and body parameters for updating a project
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ProjectUpdateParams {
    pub id: Option<String>,
    parts: ParamParts,
}

impl_params!(ProjectUpdateParams);

impl ProjectUpdateParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            parts: ParamParts::default(),
        }
    }

    pub fn name(&self) -> Result<Option<String>, ModelError> {
        self.parts.body.get("name")
    }

    pub fn set_name(&mut self, value: impl Into<Option<String>>) -> Result<&mut Self, ModelError> {
        self.parts.body.set("name", value.into())?;
        Ok(self)
    }

    pub fn description(&self) -> Result<Option<String>, ModelError> {
        self.parts.body.get("description")
    }

    /// `None` clears the description server-side
    pub fn set_description(
        &mut self,
        value: impl Into<Option<String>>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.body.set_nullable("description", value.into())?;
        Ok(self)
    }

    pub fn clear_description(&mut self) -> Result<&mut Self, ModelError> {
        self.parts.body.remove("description")?;
        Ok(self)
    }

    pub fn status(&self) -> Result<Option<ApiEnum<ProjectStatus>>, ModelError> {
        self.parts.body.get("status")
    }

    pub fn set_status(
        &mut self,
        value: impl Into<Option<ApiEnum<ProjectStatus>>>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.body.set("status", value.into())?;
        Ok(self)
    }
}

/// Path parameters for deleting a project
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ProjectDeleteParams {
    pub id: Option<String>,
    parts: ParamParts,
}

impl_params!(ProjectDeleteParams);

impl ProjectDeleteParams {
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
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Project {
        let mut project = Project::new();
        project
            .set_id("prj_1")
            .unwrap()
            .set_name("Discovery")
            .unwrap()
            .set_status(ProjectStatus::Active)
            .unwrap();
        project
    }

    #[test]
    fn test_project_field_round_trip() {
        let project = sample();
        assert_eq!(project.id().unwrap(), "prj_1");
        assert_eq!(project.name().unwrap(), "Discovery");
        assert!(project.status().unwrap() == ProjectStatus::Active);
        assert_eq!(project.description().unwrap(), None);
        assert!(project.validate().is_ok());
    }

    #[test]
    fn test_project_read_freezes() {
        let mut project = sample();
        project.name().unwrap();
        assert!(project.is_frozen());
        assert!(matches!(
            project.set_name("Other"),
            Err(ModelError::Frozen { .. })
        ));
    }

    #[test]
    fn test_copy_before_and_after_first_read() {
        // Copy before any read: both sides stay writable
        let mut original = sample();
        let mut copy = original.clone();
        copy.set_name("Copy").unwrap();
        original.set_name("Original").unwrap();
        assert_eq!(original.name().unwrap(), "Original");
        assert_eq!(copy.name().unwrap(), "Copy");

        // Copy after a read: the copy is writable, the original is not
        let original = sample();
        original.id().unwrap();
        let mut copy = original.clone();
        assert_eq!(copy, original);
        copy.set_name("Renamed").unwrap();
        assert_ne!(copy, original);
        assert_eq!(original.name().unwrap(), "Discovery");
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let text = r#"{"id":"prj_1","name":"D","status":"active","labels":{"team":"lit"}}"#;
        let project: Project = serde_json::from_str(text).unwrap();
        assert!(project.validate().is_ok());
        assert_eq!(serde_json::to_string(&project).unwrap(), text);
    }

    #[test]
    fn test_create_params_nullable_description() {
        let mut params = ProjectCreateParams::new("Discovery").unwrap();
        params.set_description(None).unwrap();
        assert_eq!(
            params.parts().body_value(),
            Some(json!({"name": "Discovery", "description": null}))
        );

        params.clear_description().unwrap();
        assert_eq!(params.parts().body_value(), Some(json!({"name": "Discovery"})));
    }

    #[test]
    fn test_list_params_status_query() {
        let mut params = ProjectListParams::new();
        params
            .set_status(ApiEnum::from(ProjectStatus::Archived))
            .unwrap()
            .set_limit(5)
            .unwrap();
        assert_eq!(
            params.parts().query_pairs(),
            vec![
                ("status".to_string(), "archived".to_string()),
                ("limit".to_string(), "5".to_string())
            ]
        );
    }

    #[test]
    fn test_with_copies_before_modifying() {
        let base = ProjectListParams::new();
        base.limit().unwrap();
        let archived = base
            .with(|p| p.set_status(ApiEnum::from(ProjectStatus::Archived)))
            .unwrap();
        assert!(base.parts().query_pairs().is_empty());
        assert_eq!(
            archived.parts().query_pairs(),
            vec![("status".to_string(), "archived".to_string())]
        );
    }

    #[test]
    fn test_hash_follows_raw_content() {
        use std::collections::HashSet;
        let a = sample();
        let b: Project =
            serde_json::from_str(r#"{"status":"active","name":"Discovery","id":"prj_1"}"#).unwrap();
        let set: HashSet<Project> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_list_from_wire() {
        let list = ProjectList::from_json(json!({
            "projects": [{"id": "prj_1", "name": "A", "status": "active", "description": null}],
            "total": 1
        }))
        .unwrap();
        assert!(list.validate().is_ok());
        assert_eq!(list.projects().unwrap().len(), 1);
        assert_eq!(list.total().unwrap(), Some(1));
    }
}
