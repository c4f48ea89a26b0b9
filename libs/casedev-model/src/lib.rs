// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Casedev model building blocks
//!
//! Every request and response type in the Casedev SDK is a thin typed view
//! over a [`RawMap`]: an insertion-ordered map of wire field names to raw
//! JSON values. This gives each type two faces:
//!
//! - typed accessors that decode on read and encode on write, and
//! - the raw map, which keeps unknown fields so payloads from newer API
//!   versions survive a decode/encode cycle unchanged.
//!
//! # Freezing
//!
//! The first typed read freezes a map. Writes after that fail with
//! [`ModelError::Frozen`]. Cloning produces an unfrozen deep copy, which is
//! how a model is modified after it has been inspected.
//!
//! # Validation
//!
//! Decoding never checks semantics. Unknown enum values ([`ApiEnum`]) and
//! unmatched unions ([`Union`]) decode fine and re-serialize verbatim; an
//! explicit [`Validate::validate`] call reports them.
//!
//! # Example
//!
//! ```ignore
//! use casedev_model::{Model, RawMap};
//!
//! let mut raw = RawMap::new();
//! raw.set("name", Some("docs"))?;
//! raw.set_nullable::<String>("description", None)?;
//! assert_eq!(serde_json::to_string(&raw)?, r#"{"name":"docs","description":null}"#);
//! ```

pub mod enums;
pub mod error;
pub mod json;
pub mod model;
pub mod params;
pub mod raw;
pub mod union;

pub use enums::ApiEnum;
pub use error::ModelError;
pub use model::{Model, Validate};
pub use params::{ParamParts, Params, required_path_param};
pub use raw::RawMap;
pub use union::{Candidate, Union, UnionVariants, try_model};
