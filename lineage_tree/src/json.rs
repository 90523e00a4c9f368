// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON input for the family record.

use crate::person::PersonRecord;

impl PersonRecord {
    /// Decode a family record. The whole document is the root person.
    ///
    /// Unknown fields are ignored. `gender` defaults to `neutral` and
    /// `children` to none.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Decode a family record, or fall back to [`PersonRecord::placeholder`]
    /// when the document is malformed.
    pub fn from_json_or_placeholder(json: &str) -> Self {
        match Self::from_json_str(json) {
            Ok(record) => record,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(message = "record.fallback", error = %_err);
                Self::placeholder()
            }
        }
    }
}
