// src/report.rs
//! Decrypted report schema
//!
//! The codec only promises UTF-8 text. The dashboard additionally expects the
//! text to be a student report; this is the shape it checks before
//! rendering anything.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LoadError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentReport {
    pub student_name: String,
    /// Written either as a JSON bool or as the string `"true"`.
    #[serde(default, deserialize_with = "bool_or_true_string")]
    pub is_male: bool,
    /// 0 means unranked.
    #[serde(default)]
    pub rank: i64,
    #[serde(default)]
    pub total_degree: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub full_degree: f64,
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    #[serde(default)]
    pub full_degree: f64,
    #[serde(default)]
    pub rank: i64,
    #[serde(default)]
    pub degree: f64,
    #[serde(default)]
    pub average_degree: f64,
}

impl StudentReport {
    /// Parse decrypted text and apply the structural check.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let report: StudentReport =
            serde_json::from_str(text).map_err(|e| LoadError::InvalidReport(e.to_string()))?;
        report.validate()?;
        Ok(report)
    }

    pub fn validate(&self) -> Result<(), LoadError> {
        if self.student_name.trim().is_empty() {
            return Err(LoadError::InvalidReport("student_name is empty".into()));
        }
        Ok(())
    }

    pub fn is_ranked(&self) -> bool {
        self.rank > 0
    }
}

impl Subject {
    pub fn is_ranked(&self) -> bool {
        self.rank > 0
    }
}

fn bool_or_true_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::String(s) => s == "true",
        _ => false,
    })
}
