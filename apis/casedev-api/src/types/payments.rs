// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Payment types

use super::common::{Timestamp, impl_model, impl_params};
use casedev_model::{
    ApiEnum, Candidate, ModelError, ParamParts, RawMap, Union, UnionVariants, Validate, try_model,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Charge lifecycle state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ChargeStatus {
    Pending,
    Succeeded,
    Failed,
    Refunded,
}

/// A charge against a payment method
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Charge {
    raw: RawMap,
}

/// One page of charges
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChargeList {
    raw: RawMap,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardMethod {
    raw: RawMap,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BankAccountMethod {
    raw: RawMap,
}

impl_model!(Charge, ChargeList, CardMethod, BankAccountMethod);

impl CardMethod {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brand(&self) -> Result<String, ModelError> {
        self.raw.get_required("brand")
    }

    pub fn set_brand(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.raw.set("brand", Some(value.into()))?;
        Ok(self)
    }

    pub fn last4(&self) -> Result<String, ModelError> {
        self.raw.get_required("last4")
    }

    pub fn set_last4(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.raw.set("last4", Some(value.into()))?;
        Ok(self)
    }

    pub fn exp_month(&self) -> Result<i64, ModelError> {
        self.raw.get_required("expMonth")
    }

    pub fn set_exp_month(&mut self, value: i64) -> Result<&mut Self, ModelError> {
        self.raw.set("expMonth", Some(value))?;
        Ok(self)
    }

    pub fn exp_year(&self) -> Result<i64, ModelError> {
        self.raw.get_required("expYear")
    }

    pub fn set_exp_year(&mut self, value: i64) -> Result<&mut Self, ModelError> {
        self.raw.set("expYear", Some(value))?;
        Ok(self)
    }
}

impl Validate for CardMethod {
    fn validate(&self) -> Result<(), ModelError> {
        self.brand()?;
        self.last4()?;
        self.exp_month()?;
        self.exp_year()?;
        Ok(())
    }
}

impl BankAccountMethod {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bank_name(&self) -> Result<String, ModelError> {
        self.raw.get_required("bankName")
    }

    pub fn set_bank_name(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.raw.set("bankName", Some(value.into()))?;
        Ok(self)
    }

    pub fn last4(&self) -> Result<String, ModelError> {
        self.raw.get_required("last4")
    }

    pub fn set_last4(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.raw.set("last4", Some(value.into()))?;
        Ok(self)
    }

    pub fn routing_number(&self) -> Result<Option<String>, ModelError> {
        self.raw.get("routingNumber")
    }

    pub fn set_routing_number(
        &mut self,
        value: impl Into<Option<String>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set("routingNumber", value.into())?;
        Ok(self)
    }
}

impl Validate for BankAccountMethod {
    fn validate(&self) -> Result<(), ModelError> {
        self.bank_name()?;
        self.last4()?;
        self.routing_number()?;
        Ok(())
    }
}

/// How a charge is paid
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum PaymentMethod {
    Card(CardMethod),
    BankAccount(BankAccountMethod),
}

fn parse_card(v: &Value) -> Option<PaymentMethod> {
    try_model(v).map(PaymentMethod::Card)
}

fn parse_bank_account(v: &Value) -> Option<PaymentMethod> {
    try_model(v).map(PaymentMethod::BankAccount)
}

impl UnionVariants for PaymentMethod {
    const CANDIDATES: &'static [Candidate<Self>] = &[
        Candidate {
            name: "card",
            parse: parse_card,
        },
        Candidate {
            name: "bank_account",
            parse: parse_bank_account,
        },
    ];

    fn index(&self) -> usize {
        match self {
            PaymentMethod::Card(_) => 0,
            PaymentMethod::BankAccount(_) => 1,
        }
    }
}

impl Validate for PaymentMethod {
    fn validate(&self) -> Result<(), ModelError> {
        match self {
            PaymentMethod::Card(method) => method.validate(),
            PaymentMethod::BankAccount(method) => method.validate(),
        }
    }
}

impl Charge {
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

    /// Amount in the currency's minor unit
    pub fn amount(&self) -> Result<i64, ModelError> {
        self.raw.get_required("amount")
    }

    pub fn set_amount(&mut self, value: i64) -> Result<&mut Self, ModelError> {
        self.raw.set("amount", Some(value))?;
        Ok(self)
    }

    /// ISO 4217 code, lower case
    pub fn currency(&self) -> Result<String, ModelError> {
        self.raw.get_required("currency")
    }

    pub fn set_currency(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.raw.set("currency", Some(value.into()))?;
        Ok(self)
    }

    pub fn status(&self) -> Result<ApiEnum<ChargeStatus>, ModelError> {
        self.raw.get_required("status")
    }

    pub fn set_status(
        &mut self,
        value: impl Into<ApiEnum<ChargeStatus>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set("status", Some(value.into()))?;
        Ok(self)
    }

    pub fn payment_method(&self) -> Result<Union<PaymentMethod>, ModelError> {
        self.raw.get_required("paymentMethod")
    }

    pub fn set_payment_method(
        &mut self,
        value: Union<PaymentMethod>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set("paymentMethod", Some(value))?;
        Ok(self)
    }

    pub fn failure_reason(&self) -> Result<Option<String>, ModelError> {
        self.raw.get("failureReason")
    }

    pub fn set_failure_reason(
        &mut self,
        value: impl Into<Option<String>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set_nullable("failureReason", value.into())?;
        Ok(self)
    }

    pub fn clear_failure_reason(&mut self) -> Result<&mut Self, ModelError> {
        self.raw.remove("failureReason")?;
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

impl Validate for Charge {
    fn validate(&self) -> Result<(), ModelError> {
        self.id()?;
        self.amount()?;
        self.currency()?;
        self.status()?.validate()?;
        self.payment_method()?.validate()?;
        self.failure_reason()?;
        self.created_at()?;
        Ok(())
    }
}

impl ChargeList {
    pub fn data(&self) -> Result<Vec<Charge>, ModelError> {
        self.raw.get_required("data")
    }

    pub fn set_data(&mut self, value: Vec<Charge>) -> Result<&mut Self, ModelError> {
        self.raw.set("data", Some(value))?;
        Ok(self)
    }

    pub fn has_more(&self) -> Result<Option<bool>, ModelError> {
        self.raw.get("hasMore")
    }

    pub fn set_has_more(
        &mut self,
        value: impl Into<Option<bool>>,
    ) -> Result<&mut Self, ModelError> {
        self.raw.set("hasMore", value.into())?;
        Ok(self)
    }
}

impl Validate for ChargeList {
    fn validate(&self) -> Result<(), ModelError> {
        self.data()?.validate()?;
        self.has_more()?;
        Ok(())
    }
}

/// Body and headers for creating a charge
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChargeCreateParams {
    parts: ParamParts,
}

impl_params!(ChargeCreateParams);

impl ChargeCreateParams {
    pub fn new(
        amount: i64,
        currency: impl Into<String>,
        payment_method: Union<PaymentMethod>,
    ) -> Result<Self, ModelError> {
        let mut params = Self::default();
        params
            .set_amount(amount)?
            .set_currency(currency)?
            .set_payment_method(payment_method)?;
        Ok(params)
    }

    pub fn amount(&self) -> Result<i64, ModelError> {
        self.parts.body.get_required("amount")
    }

    pub fn set_amount(&mut self, value: i64) -> Result<&mut Self, ModelError> {
        self.parts.body.set("amount", Some(value))?;
        Ok(self)
    }

    pub fn currency(&self) -> Result<String, ModelError> {
        self.parts.body.get_required("currency")
    }

    pub fn set_currency(&mut self, value: impl Into<String>) -> Result<&mut Self, ModelError> {
        self.parts.body.set("currency", Some(value.into()))?;
        Ok(self)
    }

    pub fn payment_method(&self) -> Result<Union<PaymentMethod>, ModelError> {
        self.parts.body.get_required("paymentMethod")
    }

    pub fn set_payment_method(
        &mut self,
        value: Union<PaymentMethod>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.body.set("paymentMethod", Some(value))?;
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

    /// Sent as the `Idempotency-Key` header
    pub fn idempotency_key(&self) -> Result<Option<String>, ModelError> {
        self.parts.header.get("Idempotency-Key")
    }

    pub fn set_idempotency_key(
        &mut self,
        value: impl Into<Option<String>>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.header.set("Idempotency-Key", value.into())?;
        Ok(self)
    }
}

/// Path parameters for fetching a charge
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChargeRetrieveParams {
    pub id: Option<String>,
    parts: ParamParts,
}

impl_params!(ChargeRetrieveParams);

impl ChargeRetrieveParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            parts: ParamParts::default(),
        }
    }
}

/// Query parameters for listing charges
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChargeListParams {
    parts: ParamParts,
}

impl_params!(ChargeListParams);

impl ChargeListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(&self) -> Result<Option<i64>, ModelError> {
        self.parts.query.get("limit")
    }

    pub fn set_limit(&mut self, value: impl Into<Option<i64>>) -> Result<&mut Self, ModelError> {
        self.parts.query.set("limit", value.into())?;
        Ok(self)
    }

    /// Cursor: the last charge id of the previous page
    pub fn starting_after(&self) -> Result<Option<String>, ModelError> {
        self.parts.query.get("startingAfter")
    }

    pub fn set_starting_after(
        &mut self,
        value: impl Into<Option<String>>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.query.set("startingAfter", value.into())?;
        Ok(self)
    }

    pub fn status(&self) -> Result<Option<ApiEnum<ChargeStatus>>, ModelError> {
        self.parts.query.get("status")
    }

    pub fn set_status(
        &mut self,
        value: impl Into<Option<ApiEnum<ChargeStatus>>>,
    ) -> Result<&mut Self, ModelError> {
        self.parts.query.set("status", value.into())?;
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

    fn card() -> Union<PaymentMethod> {
        let mut card = CardMethod::new();
        card.set_brand("visa")
            .unwrap()
            .set_last4("4242")
            .unwrap()
            .set_exp_month(12)
            .unwrap()
            .set_exp_year(2030)
            .unwrap();
        Union::from_variant(PaymentMethod::Card(card)).unwrap()
    }

    fn card_method() -> PaymentMethod {
        card().into_variant().unwrap()
    }

    fn bank_account() -> PaymentMethod {
        let mut bank = BankAccountMethod::new();
        bank.set_bank_name("First Bank")
            .unwrap()
            .set_last4("6789")
            .unwrap()
            .set_routing_number("021000021".to_string())
            .unwrap();
        PaymentMethod::BankAccount(bank)
    }

    #[test_case(card_method(), "card" ; "card")]
    #[test_case(bank_account(), "bank_account" ; "bank account")]
    fn test_payment_method_variant_round_trip(variant: PaymentMethod, name: &str) {
        let built = Union::from_variant(variant).unwrap();
        assert_eq!(built.variant_name(), Some(name));

        let text = serde_json::to_string(&built).unwrap();
        let back: Union<PaymentMethod> = serde_json::from_str(&text).unwrap();
        assert_eq!(back.variant_name(), Some(name));
        assert_eq!(back, built);
    }

    #[test]
    fn test_incomplete_card_is_rejected() {
        let mut card = CardMethod::new();
        card.set_brand("visa").unwrap();
        let err = Union::from_variant(PaymentMethod::Card(card)).unwrap_err();
        assert!(err.is_invalid_data());
    }

    #[test]
    fn test_create_params_split_header_and_body() {
        let mut params = ChargeCreateParams::new(1500, "usd", card()).unwrap();
        params.set_idempotency_key("idem-1".to_string()).unwrap();

        assert_eq!(
            params.parts().header_pairs(),
            vec![("Idempotency-Key".to_string(), "idem-1".to_string())]
        );
        assert_eq!(
            params.parts().body_value(),
            Some(json!({
                "amount": 1500,
                "currency": "usd",
                "paymentMethod": {"brand": "visa", "last4": "4242", "expMonth": 12, "expYear": 2030}
            }))
        );
    }

    #[test]
    fn test_payment_method_dispatch() {
        let charge = Charge::from_json(json!({
            "id": "ch_1",
            "amount": 100,
            "currency": "usd",
            "status": "succeeded",
            "paymentMethod": {"bankName": "First Bank", "last4": "6789"},
            "failureReason": null
        }))
        .unwrap();
        assert!(charge.validate().is_ok());
        assert_eq!(
            charge.payment_method().unwrap().variant_name(),
            Some("bank_account")
        );
    }

    #[test]
    fn test_unknown_status_round_trips() {
        let raw = json!({
            "id": "ch_2",
            "amount": 100,
            "currency": "usd",
            "status": "disputed",
            "paymentMethod": {"brand": "visa", "last4": "1", "expMonth": 1, "expYear": 2031}
        });
        let charge = Charge::from_json(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&charge).unwrap(), raw);
        assert!(charge.validate().unwrap_err().is_invalid_data());
        assert_eq!(charge.status().unwrap().raw(), &json!("disputed"));
    }

    #[test]
    fn test_list_params_query() {
        let mut params = ChargeListParams::new();
        params
            .set_limit(10)
            .unwrap()
            .set_starting_after("ch_9".to_string())
            .unwrap()
            .set_status(ApiEnum::from(ChargeStatus::Failed))
            .unwrap();
        assert_eq!(
            params.parts().query_pairs(),
            vec![
                ("limit".to_string(), "10".to_string()),
                ("startingAfter".to_string(), "ch_9".to_string()),
                ("status".to_string(), "failed".to_string()),
            ]
        );
    }
}
