// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Compute-related types

use super::common::{Timestamp, impl_model, impl_params};
use casedev_model::{ApiEnum, ModelError, ParamParts, RawMap, Validate};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Query parameters for the monthly usage report
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ComputeUsageParams {
    parts: ParamParts,
}

impl_params!(ComputeUsageParams);

impl ComputeUsageParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Month (1-12); defaults to the current month server-side
    pub fn month(&self) -> Result<Option<i64>, ModelError> {
        self.parts.query.get("month")
    }

    pub fn set_month(&mut self, value: impl Into<Option<i64>>) -> Result<&mut Self, ModelError> {
        self.parts.query.set("month", value.into())?;
        Ok(self)
    }

    /// Four-digit year; defaults to the current year server-side
    pub fn year(&self) -> Result<Option<i64>, ModelError> {
        self.parts.query.get("year")
    }

    pub fn set_year(&mut self, value: impl Into<Option<i64>>) -> Result<&mut Self, ModelError> {
        self.parts.query.set("year", value.into())?;
        Ok(self)
    }
}

/// Monthly compute usage
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComputeUsage {
    raw: RawMap,
}

/// Usage for one environment within a report
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsageLine {
    raw: RawMap,
}

impl_model!(ComputeUsage, UsageLine);

impl ComputeUsage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn month(&self) -> Result<i64, ModelError> {
        self.raw.get_required("month")
    }

    pub fn set_month(&mut self, value: i64) -> Result<&mut Self, ModelError> {
        self.raw.set("month", Some(value))?;
        Ok(self)
    }

    pub fn year(&self) -> Result<i64, ModelError> {
        self.raw.get_required("year")
    }

    pub fn set_year(&mut self, value: i64) -> Result<&mut Self, ModelError> {
        self.raw.set("year", Some(value))?;
        Ok(self)
    }

    /// Total charge for the period
    pub fn total_cost(&self) -> Result<f64, ModelError> {
        self.raw.get_required("totalCost")
    }

    pub fn set_total_cost(&mut self, value: f64) -> Result<&mut Self, ModelError> {
        self.raw.set("totalCost", Some(value))?;
        Ok(self)
    }

    pub fn total_runs(&self) -> Result<i64, ModelError> {
        self.raw.get_required("totalRuns")
    }

    pub fn set_total_runs(&mut self, value: i64) -> Result<&mut Self, ModelError> {
        self.raw.set("totalRuns", Some(value))?;
        Ok(self)
    }

    /// ISO 4217 currency code
    pub fn currency(&self) -> Result<Option<String>, ModelError> {
        self.raw.get("currency")
    }

    pub fn set_currency(
        &mut self,
        value: impl Into<Option<String>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set("currency", value.into())?;
        Ok(self)
    }

    /// Per-environment breakdown
    pub fn breakdown(&self) -> Result<Vec<UsageLine>, ModelError> {
        self.raw.get_required("breakdown")
    }

    pub fn set_breakdown(&mut self, value: Vec<UsageLine>) -> Result<&mut Self, ModelError> {
        self.raw.set("breakdown", Some(value))?;
        Ok(self)
    }
}

impl Validate for ComputeUsage {
    fn validate(&self) -> Result<(), ModelError> {
        self.month()?;
        self.year()?;
        self.total_cost()?;
        self.total_runs()?;
        self.currency()?;
        self.breakdown()?.validate()?;
        Ok(())
    }
}

impl UsageLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment name
    pub fn environment(&self) -> Result<String, ModelError> {
        self.raw.get_required("environment")
    }

    pub fn set_environment(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.raw.set("environment", Some(value.into()))?;
        Ok(self)
    }

    pub fn runs(&self) -> Result<Option<i64>, ModelError> {
        self.raw.get("runs")
    }

    pub fn set_runs(&mut self, value: impl Into<Option<i64>>) -> Result<&mut Self, ModelError> {
        self.raw.set("runs", value.into())?;
        Ok(self)
    }

    pub fn cost(&self) -> Result<f64, ModelError> {
        self.raw.get_required("cost")
    }

    pub fn set_cost(&mut self, value: f64) -> Result<&mut Self, ModelError> {
        self.raw.set("cost", Some(value))?;
        Ok(self)
    }

    pub fn gpu_seconds(&self) -> Result<Option<f64>, ModelError> {
        self.raw.get("gpuSeconds")
    }

    pub fn set_gpu_seconds(
        &mut self,
        value: impl Into<Option<f64>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set("gpuSeconds", value.into())?;
        Ok(self)
    }
}

impl Validate for UsageLine {
    fn validate(&self) -> Result<(), ModelError> {
        self.environment()?;
        self.runs()?;
        self.cost()?;
        self.gpu_seconds()?;
        Ok(())
    }
}

/// Environment lifecycle state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum EnvironmentStatus {
    Provisioning,
    Ready,
    Error,
    Deleting,
}

/// A compute environment
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment {
    raw: RawMap,
}

/// List of compute environments
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentList {
    raw: RawMap,
}

impl_model!(Environment, EnvironmentList);

impl Environment {
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

    pub fn status(&self) -> Result<ApiEnum<EnvironmentStatus>, ModelError> {
        self.raw.get_required("status")
    }

    pub fn set_status(
        &mut self,
        value: impl Into<ApiEnum<EnvironmentStatus>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set("status", Some(value.into()))?;
        Ok(self)
    }

    pub fn is_default(&self) -> Result<Option<bool>, ModelError> {
        self.raw.get("isDefault")
    }

    pub fn set_is_default(
        &mut self,
        value: impl Into<Option<bool>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set("isDefault", value.into())?;
        Ok(self)
    }

    /// Public domain of the environment.
    ///
    /// Nullable: `null` means "no domain assigned", which the API
    /// distinguishes from the field being omitted.
    pub fn domain(&self) -> Result<Option<String>, ModelError> {
        self.raw.get("domain")
    }

    pub fn set_domain(
        &mut self,
        value: impl Into<Option<String>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set_nullable("domain", value.into())?;
        Ok(self)
    }

    pub fn clear_domain(&mut self) -> Result<&mut Self, ModelError> {
        self.raw.remove("domain")?;
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

impl Validate for Environment {
    fn validate(&self) -> Result<(), ModelError> {
        self.id()?;
        self.name()?;
        self.status()?.validate()?;
        self.is_default()?;
        self.domain()?;
        self.created_at()?;
        Ok(())
    }
}

impl EnvironmentList {
    pub fn environments(&self) -> Result<Vec<Environment>, ModelError> {
        self.raw.get_required("environments")
    }

    pub fn set_environments(&mut self, value: Vec<Environment>) -> Result<&mut Self, ModelError> {
        self.raw.set("environments", Some(value))?;
        Ok(self)
    }
}

impl Validate for EnvironmentList {
    fn validate(&self) -> Result<(), ModelError> {
        self.environments()?.validate()
    }
}

/// Body for creating an environment
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EnvironmentCreateParams {
    parts: ParamParts,
}

impl_params!(EnvironmentCreateParams);

impl EnvironmentCreateParams {
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

    pub fn region(&self) -> Result<Option<String>, ModelError> {
        self.parts.body.get("region")
    }

    pub fn set_region(
        &mut self,
        value: impl Into<Option<String>>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.body.set("region", value.into())?;
        Ok(self)
    }
}

/// Path parameters for deleting an environment
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EnvironmentDeleteParams {
    /// Environment name
    pub name: Option<String>,
    parts: ParamParts,
}

impl_params!(EnvironmentDeleteParams);

impl EnvironmentDeleteParams {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            parts: ParamParts::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casedev_model::Model;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn test_usage_field_round_trip() {
        let mut line = UsageLine::new();
        line.set_environment("default").unwrap().set_cost(1.25).unwrap();

        let mut usage = ComputeUsage::new();
        usage
            .set_month(3)
            .unwrap()
            .set_year(2024)
            .unwrap()
            .set_total_cost(1.25)
            .unwrap()
            .set_total_runs(4)
            .unwrap()
            .set_breakdown(vec![line.clone()])
            .unwrap();

        assert_eq!(usage.month().unwrap(), 3);
        assert_eq!(usage.year().unwrap(), 2024);
        assert_eq!(usage.total_cost().unwrap(), 1.25);
        assert_eq!(usage.total_runs().unwrap(), 4);
        assert_eq!(usage.breakdown().unwrap(), vec![line]);
        assert!(usage.validate().is_ok());
    }

    #[test]
    fn test_usage_serialization_round_trip() {
        let text = concat!(
            r#"{"month":3,"year":2024,"totalCost":9.5,"totalRuns":2,"#,
            r#""breakdown":[{"environment":"gpu","cost":9.5,"gpuSeconds":120.0}]}"#
        );
        let usage: ComputeUsage = serde_json::from_str(text).unwrap();
        assert_eq!(serde_json::to_string(&usage).unwrap(), text);

        let again = serde_json::to_string(&usage).unwrap();
        let back: ComputeUsage = serde_json::from_str(&again).unwrap();
        assert_eq!(back, usage);
    }

    #[test]
    fn test_usage_missing_required_fails_validation() {
        let usage = ComputeUsage::from_json(json!({"month": 3, "year": 2024})).unwrap();
        let err = usage.validate().unwrap_err();
        assert!(err.to_string().contains("totalCost"));
    }

    #[test]
    fn test_usage_requires_runs_and_breakdown() {
        let usage = ComputeUsage::from_json(json!({"month": 3, "year": 2024, "totalCost": 1.0}))
            .unwrap();
        let err = usage.validate().unwrap_err();
        assert!(err.to_string().contains("totalRuns"));

        let usage = ComputeUsage::from_json(json!({
            "month": 3, "year": 2024, "totalCost": 1.0, "totalRuns": 1
        }))
        .unwrap();
        let err = usage.validate().unwrap_err();
        assert!(err.to_string().contains("breakdown"));
    }

    #[test]
    fn test_usage_nested_shape_error_fails_validation() {
        let usage = ComputeUsage::from_json(json!({
            "month": 3, "year": 2024, "totalCost": 1.0, "totalRuns": 1,
            "breakdown": [{"environment": "gpu", "cost": "free"}]
        }))
        .unwrap();
        assert!(usage.validate().unwrap_err().is_invalid_data());
    }

    #[test]
    fn test_environment_status_wire_names() {
        let wire: Vec<&'static str> = EnvironmentStatus::iter().map(Into::into).collect();
        assert_eq!(wire, vec!["provisioning", "ready", "error", "deleting"]);
    }

    #[test]
    fn test_environment_unknown_status_round_trips() {
        let text = r#"{"id":"env_1","name":"default","status":"hibernating"}"#;
        let env: Environment = serde_json::from_str(text).unwrap();
        assert_eq!(env.status().unwrap().known(), None);
        assert!(env.validate().unwrap_err().is_invalid_data());
        assert_eq!(serde_json::to_string(&env).unwrap(), text);
    }

    #[test]
    fn test_environment_nullable_domain() {
        let mut env = Environment::new();
        env.set_domain(None).unwrap();
        assert!(env.raw().contains_key("domain"));
        assert_eq!(env.raw().get_raw("domain"), Some(&serde_json::Value::Null));

        env.clear_domain().unwrap();
        assert!(!env.raw().contains_key("domain"));

        assert_eq!(env.domain().unwrap(), None);
    }

    #[test]
    fn test_optional_absent_equals_explicit_none() {
        let mut explicit = Environment::new();
        explicit.set_is_default(None).unwrap();
        let implicit = Environment::new();
        assert_eq!(explicit, implicit);
        assert!(!explicit.raw().contains_key("isDefault"));
        assert_eq!(explicit.is_default().unwrap(), None);
    }

    #[test]
    fn test_usage_params_query_pairs() {
        use casedev_model::Params;

        let mut params = ComputeUsageParams::new();
        params.set_month(3).unwrap().set_year(2024).unwrap();
        assert_eq!(
            params.parts().query_pairs(),
            vec![
                ("month".to_string(), "3".to_string()),
                ("year".to_string(), "2024".to_string())
            ]
        );
    }
}
