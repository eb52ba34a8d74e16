use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// RFC 7807 style problem body returned by every non-success response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemJson {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Node fault category, only set for activation faults
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault_code_category: Option<String>,

    /// Node fault detail (e.g. PPT_DOMINIO_SCONOSCIUTO)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault_code_detail: Option<String>,
}

impl ProblemJson {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: None,
            detail: None,
            instance: None,
            fault_code_category: None,
            fault_code_detail: None,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status.as_u16());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    pub fn with_fault(mut self, category: &str, detail: &str) -> Self {
        self.fault_code_category = Some(category.to_string());
        self.fault_code_detail = Some(detail.to_string());
        self
    }

    /// Fixed body for any failure talking to the NPG card-data service
    pub fn npg_invalid_body() -> Self {
        Self::new("Invalid npg body response").with_detail("Internal Server Error")
    }
}
