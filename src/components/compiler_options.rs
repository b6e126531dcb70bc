//! Typed TypeScript compiler options
//!
//! A flat record: every typed field is optional, and options without a typed
//! field land in `extra`. Layers merge key by key; a set key in a later layer
//! replaces the earlier value wholesale (arrays and objects included).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::services::overlay_layers;
use crate::error::ProjgenResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub es_module_interop: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental_decorators: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_source_map: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_sources: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lib: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_emit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_emit_on_error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_fallthrough_cases_in_switch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_implicit_any: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_implicit_returns: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_implicit_this: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_unused_locals: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_unused_parameters: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_json_module: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_lib_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_null_checks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_property_initialization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip_internal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Options without a typed field, passed through verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl CompilerOptions {
    /// Safe defaults for a Node.js library compiled with tsc
    pub fn defaults() -> Self {
        Self {
            always_strict: Some(true),
            declaration: Some(true),
            es_module_interop: Some(true),
            experimental_decorators: Some(true),
            inline_source_map: Some(true),
            inline_sources: Some(true),
            lib: Some(vec!["es2018".to_string()]),
            module: Some("CommonJS".to_string()),
            no_emit_on_error: Some(false),
            no_fallthrough_cases_in_switch: Some(true),
            no_implicit_any: Some(true),
            no_implicit_returns: Some(true),
            no_implicit_this: Some(true),
            no_unused_locals: Some(true),
            no_unused_parameters: Some(true),
            resolve_json_module: Some(true),
            strict: Some(true),
            strict_null_checks: Some(true),
            strict_property_initialization: Some(true),
            strip_internal: Some(true),
            target: Some("ES2018".to_string()),
            ..Self::default()
        }
    }

    /// True if no option is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge layers left to right; later layers win key by key.
    pub fn layered<I>(layers: I) -> ProjgenResult<Self>
    where
        I: IntoIterator<Item = CompilerOptions>,
    {
        let values = layers
            .into_iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(serde_json::from_value(overlay_layers(values))?)
    }

    /// Overlay `other` on top of `self`
    pub fn merged_with(self, other: CompilerOptions) -> ProjgenResult<Self> {
        Self::layered([self, other])
    }

    pub fn to_value(&self) -> ProjgenResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
