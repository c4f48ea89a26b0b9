// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! LLM gateway types

use super::common::{impl_model, impl_params};
use casedev_model::{
    ApiEnum, Candidate, ModelError, ParamParts, RawMap, Union, UnionVariants, Validate, try_model,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Author of a chat message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ChatRole {
    System,
    User,
    Assistant,
    Tool,
}

/// A model offered by the gateway
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LlmModel {
    raw: RawMap,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelList {
    raw: RawMap,
}

/// One message in a conversation
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatMessage {
    raw: RawMap,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatChoice {
    raw: RawMap,
}

/// Token accounting for one completion
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenUsage {
    raw: RawMap,
}

/// A chat completion
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatCompletion {
    raw: RawMap,
}

/// Plain text output
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextFormat {
    raw: RawMap,
}

/// Output constrained by a JSON schema
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonSchemaFormat {
    raw: RawMap,
}

impl_model!(
    LlmModel,
    ModelList,
    ChatMessage,
    ChatChoice,
    TokenUsage,
    ChatCompletion,
    TextFormat,
    JsonSchemaFormat
);

impl LlmModel {
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

    pub fn owned_by(&self) -> Result<Option<String>, ModelError> {
        self.raw.get("ownedBy")
    }

    pub fn set_owned_by(
        &mut self,
        value: impl Into<Option<String>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set("ownedBy", value.into())?;
        Ok(self)
    }

    /// Maximum prompt plus completion tokens
    pub fn context_window(&self) -> Result<Option<i64>, ModelError> {
        self.raw.get("contextWindow")
    }

    pub fn set_context_window(
        &mut self,
        value: impl Into<Option<i64>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set("contextWindow", value.into())?;
        Ok(self)
    }
}

impl Validate for LlmModel {
    fn validate(&self) -> Result<(), ModelError> {
        self.id()?;
        self.owned_by()?;
        self.context_window()?;
        Ok(())
    }
}

impl ModelList {
    pub fn data(&self) -> Result<Vec<LlmModel>, ModelError> {
        self.raw.get_required("data")
    }

    pub fn set_data(&mut self, value: Vec<LlmModel>) -> Result<&mut Self, ModelError> {
        self.raw.set("data", Some(value))?;
        Ok(self)
    }
}

impl Validate for ModelList {
    fn validate(&self) -> Result<(), ModelError> {
        self.data()?.validate()
    }
}

impl ChatMessage {
    /// A message with both required fields set
    pub fn new(
        role: impl Into<ApiEnum<ChatRole>>,
        content: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let mut message = Self::default();
        message.set_role(role)?.set_content(content)?;
        Ok(message)
    }

    pub fn role(&self) -> Result<ApiEnum<ChatRole>, ModelError> {
        self.raw.get_required("role")
    }

    pub fn set_role(
        &mut self,
        value: impl Into<ApiEnum<ChatRole>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set("role", Some(value.into()))?;
        Ok(self)
    }

    pub fn content(&self) -> Result<String, ModelError> {
        self.raw.get_required("content")
    }

    pub fn set_content(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.raw.set("content", Some(value.into()))?;
        Ok(self)
    }
}

impl Validate for ChatMessage {
    fn validate(&self) -> Result<(), ModelError> {
        self.role()?.validate()?;
        self.content()?;
        Ok(())
    }
}

impl ChatChoice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> Result<i64, ModelError> {
        self.raw.get_required("index")
    }

    pub fn set_index(&mut self, value: i64) -> Result<&mut Self, ModelError> {
        self.raw.set("index", Some(value))?;
        Ok(self)
    }

    pub fn message(&self) -> Result<ChatMessage, ModelError> {
        self.raw.get_required("message")
    }

    pub fn set_message(&mut self, value: ChatMessage) -> Result<&mut Self, ModelError> {
        self.raw.set("message", Some(value))?;
        Ok(self)
    }

    /// Why generation stopped. Null while streaming.
    pub fn finish_reason(&self) -> Result<Option<String>, ModelError> {
        self.raw.get("finishReason")
    }

    pub fn set_finish_reason(
        &mut self,
        value: impl Into<Option<String>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set_nullable("finishReason", value.into())?;
        Ok(self)
    }

    pub fn clear_finish_reason(&mut self) -> Result<&mut Self, ModelError> {
        self.raw.remove("finishReason")?;
        Ok(self)
    }
}

impl Validate for ChatChoice {
    fn validate(&self) -> Result<(), ModelError> {
        self.index()?;
        self.message()?.validate()?;
        self.finish_reason()?;
        Ok(())
    }
}

impl TokenUsage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt_tokens(&self) -> Result<i64, ModelError> {
        self.raw.get_required("promptTokens")
    }

    pub fn set_prompt_tokens(&mut self, value: i64) -> Result<&mut Self, ModelError> {
        self.raw.set("promptTokens", Some(value))?;
        Ok(self)
    }

    pub fn completion_tokens(&self) -> Result<i64, ModelError> {
        self.raw.get_required("completionTokens")
    }

    pub fn set_completion_tokens(&mut self, value: i64) -> Result<&mut Self, ModelError> {
        self.raw.set("completionTokens", Some(value))?;
        Ok(self)
    }

    pub fn total_tokens(&self) -> Result<i64, ModelError> {
        self.raw.get_required("totalTokens")
    }

    pub fn set_total_tokens(&mut self, value: i64) -> Result<&mut Self, ModelError> {
        self.raw.set("totalTokens", Some(value))?;
        Ok(self)
    }
}

impl Validate for TokenUsage {
    fn validate(&self) -> Result<(), ModelError> {
        self.prompt_tokens()?;
        self.completion_tokens()?;
        self.total_tokens()?;
        Ok(())
    }
}

impl ChatCompletion {
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

    pub fn model(&self) -> Result<String, ModelError> {
        self.raw.get_required("model")
    }

    pub fn set_model(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.raw.set("model", Some(value.into()))?;
        Ok(self)
    }

    pub fn choices(&self) -> Result<Vec<ChatChoice>, ModelError> {
        self.raw.get_required("choices")
    }

    pub fn set_choices(&mut self, value: Vec<ChatChoice>) -> Result<&mut Self, ModelError> {
        self.raw.set("choices", Some(value))?;
        Ok(self)
    }

    pub fn usage(&self) -> Result<Option<TokenUsage>, ModelError> {
        self.raw.get("usage")
    }

    pub fn set_usage(
        &mut self,
        value: impl Into<Option<TokenUsage>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set("usage", value.into())?;
        Ok(self)
    }
}

impl Validate for ChatCompletion {
    fn validate(&self) -> Result<(), ModelError> {
        self.id()?;
        self.model()?;
        self.choices()?.validate()?;
        self.usage()?.validate()?;
        Ok(())
    }
}

fn check_format_type(raw: &RawMap, expected: &str) -> Result<(), ModelError> {
    let kind: String = raw.get_required("type")?;
    if kind == expected {
        Ok(())
    } else {
        Err(ModelError::InvalidData(format!(
            "expected type \"{}\", got \"{}\"",
            expected, kind
        )))
    }
}

impl TextFormat {
    pub const TYPE: &'static str = "text";

    pub fn new() -> Result<Self, ModelError> {
        let mut raw = RawMap::new();
        raw.set("type", Some(Self::TYPE))?;
        Ok(Self { raw })
    }

    pub fn kind(&self) -> Result<String, ModelError> {
        self.raw.get_required("type")
    }
}

impl Validate for TextFormat {
    fn validate(&self) -> Result<(), ModelError> {
        check_format_type(&self.raw, Self::TYPE)
    }
}

impl JsonSchemaFormat {
    pub const TYPE: &'static str = "json_schema";

    pub fn new(schema: Map<String, Value>) -> Result<Self, ModelError> {
        let mut raw = RawMap::new();
        raw.set("type", Some(Self::TYPE))?;
        raw.set("jsonSchema", Some(schema))?;
        Ok(Self { raw })
    }

    pub fn kind(&self) -> Result<String, ModelError> {
        self.raw.get_required("type")
    }

    pub fn json_schema(&self) -> Result<Map<String, Value>, ModelError> {
        self.raw.get_required("jsonSchema")
    }

    pub fn set_json_schema(&mut self, value: Map<String, Value>) -> Result<&mut Self, ModelError> {
        self.raw.set("jsonSchema", Some(value))?;
        Ok(self)
    }
}

impl Validate for JsonSchemaFormat {
    fn validate(&self) -> Result<(), ModelError> {
        check_format_type(&self.raw, Self::TYPE)?;
        self.json_schema()?;
        Ok(())
    }
}

/// Requested output format
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum ResponseFormat {
    Text(TextFormat),
    JsonSchema(JsonSchemaFormat),
}

fn parse_text_format(v: &Value) -> Option<ResponseFormat> {
    try_model(v).map(ResponseFormat::Text)
}

fn parse_json_schema_format(v: &Value) -> Option<ResponseFormat> {
    try_model(v).map(ResponseFormat::JsonSchema)
}

impl UnionVariants for ResponseFormat {
    const CANDIDATES: &'static [Candidate<Self>] = &[
        Candidate {
            name: "text",
            parse: parse_text_format,
        },
        Candidate {
            name: "json_schema",
            parse: parse_json_schema_format,
        },
    ];

    fn index(&self) -> usize {
        match self {
            ResponseFormat::Text(_) => 0,
            ResponseFormat::JsonSchema(_) => 1,
        }
    }
}

impl Validate for ResponseFormat {
    fn validate(&self) -> Result<(), ModelError> {
        match self {
            ResponseFormat::Text(format) => format.validate(),
            ResponseFormat::JsonSchema(format) => format.validate(),
        }
    }
}

/// Body for a chat completion request
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChatCompletionParams {
    parts: ParamParts,
}

impl_params!(ChatCompletionParams);

impl ChatCompletionParams {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Result<Self, ModelError> {
        let mut params = Self::default();
        params.set_model(model)?.set_messages(messages)?;
        Ok(params)
    }

    pub fn model(&self) -> Result<String, ModelError> {
        self.parts.body.get_required("model")
    }

    pub fn set_model(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.parts.body.set("model", Some(value.into()))?;
        Ok(self)
    }

    pub fn messages(&self) -> Result<Vec<ChatMessage>, ModelError> {
        self.parts.body.get_required("messages")
    }

    pub fn set_messages(&mut self, value: Vec<ChatMessage>) -> Result<&mut Self, ModelError> {
        self.parts.body.set("messages", Some(value))?;
        Ok(self)
    }

    pub fn temperature(&self) -> Result<Option<f64>, ModelError> {
        self.parts.body.get("temperature")
    }

    pub fn set_temperature(
        &mut self,
        value: impl Into<Option<f64>>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.body.set("temperature", value.into())?;
        Ok(self)
    }

    pub fn max_tokens(&self) -> Result<Option<i64>, ModelError> {
        self.parts.body.get("maxTokens")
    }

    pub fn set_max_tokens(
        &mut self,
        value: impl Into<Option<i64>>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.body.set("maxTokens", value.into())?;
        Ok(self)
    }

    pub fn response_format(&self) -> Result<Option<Union<ResponseFormat>>, ModelError> {
        self.parts.body.get("responseFormat")
    }

    pub fn set_response_format(
        &mut self,
        value: impl Into<Option<Union<ResponseFormat>>>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.body.set("responseFormat", value.into())?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casedev_model::{Model, Params};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_response_format_dispatch_by_type_constant() {
        let text: Union<ResponseFormat> = serde_json::from_value(json!({"type": "text"})).unwrap();
        assert_eq!(text.variant_name(), Some("text"));

        let schema: Union<ResponseFormat> = serde_json::from_value(json!({
            "type": "json_schema",
            "jsonSchema": {"type": "object"}
        }))
        .unwrap();
        assert_eq!(schema.variant_name(), Some("json_schema"));

        let other: Union<ResponseFormat> =
            serde_json::from_value(json!({"type": "xml"})).unwrap();
        assert!(!other.is_matched());
        assert!(other.validate().is_err());
    }

    fn json_schema_format() -> ResponseFormat {
        let schema = json!({"type": "object", "required": ["answer"]});
        let schema = schema.as_object().cloned().unwrap();
        ResponseFormat::JsonSchema(JsonSchemaFormat::new(schema).unwrap())
    }

    #[test_case(ResponseFormat::Text(TextFormat::new().unwrap()), "text" ; "text")]
    #[test_case(json_schema_format(), "json_schema" ; "json schema")]
    fn test_response_format_variant_round_trip(variant: ResponseFormat, name: &str) {
        let built = Union::from_variant(variant).unwrap();
        assert_eq!(built.variant_name(), Some(name));

        let text = serde_json::to_string(&built).unwrap();
        let back: Union<ResponseFormat> = serde_json::from_str(&text).unwrap();
        assert_eq!(back.variant_name(), Some(name));
        assert_eq!(back, built);
    }

    #[test]
    fn test_params_body_with_union() {
        let messages = vec![
            ChatMessage::new(ChatRole::System, "Be brief.").unwrap(),
            ChatMessage::new(ChatRole::User, "Summarize the filing.").unwrap(),
        ];
        let mut params = ChatCompletionParams::new("casemark-1", messages).unwrap();
        let format = Union::from_variant(ResponseFormat::Text(TextFormat::new().unwrap())).unwrap();
        params
            .set_temperature(0.2)
            .unwrap()
            .set_response_format(format)
            .unwrap();

        assert_eq!(
            params.parts().body_value(),
            Some(json!({
                "model": "casemark-1",
                "messages": [
                    {"role": "system", "content": "Be brief."},
                    {"role": "user", "content": "Summarize the filing."}
                ],
                "temperature": 0.2,
                "responseFormat": {"type": "text"}
            }))
        );
    }

    #[test]
    fn test_completion_from_wire() {
        let completion = ChatCompletion::from_json(json!({
            "id": "cmpl_1",
            "model": "casemark-1",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Done."},
                "finishReason": null
            }],
            "usage": {"promptTokens": 12, "completionTokens": 3, "totalTokens": 15},
            "systemFingerprint": "fp_9"
        }))
        .unwrap();
        assert!(completion.validate().is_ok());

        let choice = &completion.choices().unwrap()[0];
        assert!(choice.message().unwrap().role().unwrap() == ChatRole::Assistant);
        assert_eq!(choice.finish_reason().unwrap(), None);
        assert!(choice.raw().contains_key("finishReason"));
        assert_eq!(
            completion.usage().unwrap().map(|u| u.total_tokens().unwrap()),
            Some(15)
        );
        assert_eq!(
            completion.raw().get_raw("systemFingerprint"),
            Some(&json!("fp_9"))
        );
    }

    #[test]
    fn test_unknown_role_fails_validation_only() {
        let message = ChatMessage::from_json(json!({"role": "developer", "content": "x"})).unwrap();
        assert!(!message.role().unwrap().is_known());
        assert!(message.validate().unwrap_err().is_invalid_data());
    }
}
