use serde::{Deserialize, Serialize};

use crate::error::ProbeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeKind {
    Delete,
    Read,
    Write,
    Execute,
    Memory,
}

impl ProbeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Read => "read",
            Self::Write => "write",
            Self::Execute => "execute",
            Self::Memory => "memory",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeOutcome {
    Succeeded,
    Failed,
}

impl ProbeOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeReport {
    pub probe: ProbeKind,
    pub outcome: ProbeOutcome,
    pub detail: Option<String>,
}

impl ProbeReport {
    pub fn succeeded(probe: ProbeKind) -> Self {
        Self {
            probe,
            outcome: ProbeOutcome::Succeeded,
            detail: None,
        }
    }

    pub fn succeeded_with_detail(probe: ProbeKind, detail: impl Into<String>) -> Self {
        Self {
            probe,
            outcome: ProbeOutcome::Succeeded,
            detail: Some(detail.into()),
        }
    }

    pub fn failed(probe: ProbeKind, error: &ProbeError) -> Self {
        Self {
            probe,
            outcome: ProbeOutcome::Failed,
            detail: Some(error.to_string()),
        }
    }

    pub fn failed_with_detail(probe: ProbeKind, detail: impl Into<String>) -> Self {
        Self {
            probe,
            outcome: ProbeOutcome::Failed,
            detail: Some(detail.into()),
        }
    }
}
