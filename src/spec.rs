/*!
    Specification object handed over by the documentation widget.

    Only the fields that drive navigation and provenance are typed; everything
    else the widget parsed (paths, info, definitions...) is kept in `extra`.
*/

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SpecObject {
    #[serde(rename = "basePath", default)]
    pub base_path: Option<String>,
    #[serde(default)]
    pub prev_commit: Option<String>,
    #[serde(default)]
    pub next_commit: Option<String>,
    #[serde(default)]
    pub prov: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl SpecObject {
    pub fn from_json(text: &str) -> AppResult<Self> {
        let spec = serde_json::from_str(text)?;
        Ok(spec)
    }

    /// Extracts the specification from the widget's object form.
    ///
    /// The widget keeps the loaded definition under `spec`, either as the raw
    /// JSON text or as an already parsed object.
    pub fn from_widget_state(state: &Value) -> AppResult<Self> {
        match state.get("spec") {
            Some(Value::String(text)) => Self::from_json(text),
            Some(obj @ Value::Object(_)) => Ok(serde_json::from_value(obj.clone())?),
            Some(other) => Err(AppError::InvalidSpec(format!(
                "unexpected `spec` value in widget state: {}",
                other
            ))),
            None => Err(AppError::InvalidSpec("widget state has no `spec` field".to_string())),
        }
    }
}
