use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Kind of consulting specification to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DocumentType {
    #[serde(rename = "Technical Proposal")]
    TechnicalProposal,
    #[serde(rename = "Functional Spec (EF)")]
    FunctionalSpec,
    #[serde(rename = "Technical Spec (ET)")]
    TechnicalSpec,
    #[serde(rename = "Combined Spec (EF+ET)")]
    CombinedSpec,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::TechnicalProposal,
        DocumentType::FunctionalSpec,
        DocumentType::TechnicalSpec,
        DocumentType::CombinedSpec,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::TechnicalProposal => "Technical Proposal",
            DocumentType::FunctionalSpec => "Functional Spec (EF)",
            DocumentType::TechnicalSpec => "Technical Spec (ET)",
            DocumentType::CombinedSpec => "Combined Spec (EF+ET)",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// SAP functional-area tag. Opaque label, no SAP-system integration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum SapModule {
    Sd,
    Mm,
    Fi,
    Co,
    Pp,
    Pm,
    Qm,
    Abap,
    Basis,
    Ewm,
    Tm,
}

impl SapModule {
    pub const ALL: [SapModule; 11] = [
        SapModule::Sd,
        SapModule::Mm,
        SapModule::Fi,
        SapModule::Co,
        SapModule::Pp,
        SapModule::Pm,
        SapModule::Qm,
        SapModule::Abap,
        SapModule::Basis,
        SapModule::Ewm,
        SapModule::Tm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SapModule::Sd => "SD",
            SapModule::Mm => "MM",
            SapModule::Fi => "FI",
            SapModule::Co => "CO",
            SapModule::Pp => "PP",
            SapModule::Pm => "PM",
            SapModule::Qm => "QM",
            SapModule::Abap => "ABAP",
            SapModule::Basis => "BASIS",
            SapModule::Ewm => "EWM",
            SapModule::Tm => "TM",
        }
    }

    /// Full module selection, used by the UI "Select All" action.
    pub fn all() -> BTreeSet<SapModule> {
        Self::ALL.iter().copied().collect()
    }
}

impl fmt::Display for SapModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-supplied parameters describing the document to generate.
///
/// Lives for the duration of the session and is mutated field-by-field
/// through `PUT /api/request`. The effort-breakdown flag is independent of
/// the estimation flag here; the prompt builder gates it on the parent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DocumentRequest {
    #[schema(example = "S/4HANA Implementation Finance")]
    pub title: String,
    #[schema(example = "Acme Corp")]
    pub client: String,
    pub document_type: DocumentType,
    pub modules: BTreeSet<SapModule>,
    #[schema(example = "Automate outbound delivery billing for intercompany flows.")]
    pub description: String,
    pub include_abap_section: bool,
    pub include_test_plan: bool,
    pub include_effort_estimation: bool,
    pub include_effort_breakdown: bool,
}

impl Default for DocumentRequest {
    fn default() -> Self {
        Self {
            title: String::new(),
            client: String::new(),
            document_type: DocumentType::FunctionalSpec,
            modules: BTreeSet::from([SapModule::Mm]),
            description: String::new(),
            include_abap_section: true,
            include_test_plan: true,
            include_effort_estimation: true,
            include_effort_breakdown: true,
        }
    }
}

impl DocumentRequest {
    /// Module tags joined for interpolation into the prompt, in stored
    /// (set) order.
    pub fn modules_joined(&self) -> String {
        self.modules
            .iter()
            .map(SapModule::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Partial update for the session request. Absent fields keep their value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateDocumentRequest {
    pub title: Option<String>,
    pub client: Option<String>,
    pub document_type: Option<DocumentType>,
    pub modules: Option<BTreeSet<SapModule>>,
    pub description: Option<String>,
    pub include_abap_section: Option<bool>,
    pub include_test_plan: Option<bool>,
    pub include_effort_estimation: Option<bool>,
    pub include_effort_breakdown: Option<bool>,
}

impl UpdateDocumentRequest {
    pub fn apply_to(&self, request: &mut DocumentRequest) {
        if let Some(title) = &self.title {
            request.title = title.clone();
        }
        if let Some(client) = &self.client {
            request.client = client.clone();
        }
        if let Some(document_type) = self.document_type {
            request.document_type = document_type;
        }
        if let Some(modules) = &self.modules {
            request.modules = modules.clone();
        }
        if let Some(description) = &self.description {
            request.description = description.clone();
        }
        if let Some(flag) = self.include_abap_section {
            request.include_abap_section = flag;
        }
        if let Some(flag) = self.include_test_plan {
            request.include_test_plan = flag;
        }
        if let Some(flag) = self.include_effort_estimation {
            request.include_effort_estimation = flag;
        }
        if let Some(flag) = self.include_effort_breakdown {
            request.include_effort_breakdown = flag;
        }
    }
}

/// Raw markdown text returned by the generation service.
///
/// Treated as an immutable opaque value once received; the only structure
/// this system knows about is the page-break sentinel handled at render
/// time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratedDocument {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl GeneratedDocument {
    pub fn new(content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            created_at: Utc::now(),
        }
    }
}
