use serde::{Deserialize, Serialize};

/// Identifier wrapper for filed scam reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReportId(pub String);

/// Raw report as entered on the "report fake job" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSubmission {
    pub company_name: String,
    #[serde(default)]
    pub job_link: Option<String>,
    /// What happened.
    pub description: String,
    #[serde(default)]
    pub attachments: Vec<AttachmentDescriptor>,
    #[serde(default)]
    pub additional_info: Option<String>,
}

/// Proof file metadata; contents never reach this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentDescriptor {
    pub file_name: String,
    pub size_bytes: u64,
}

/// Attachment after intake, with its content type resolved from the file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub size_bytes: u64,
    pub content_type: String,
}

/// Normalized report produced by the intake guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScamReport {
    pub company_name: String,
    /// Grouping key shared with verification e-mail matching.
    pub company_key: String,
    pub job_link: Option<String>,
    pub description: String,
    pub attachments: Vec<Attachment>,
    pub additional_info: Option<String>,
}

const REASON_MAX_CHARS: usize = 80;

impl ScamReport {
    /// Short reason line for listings: the first line of the description,
    /// cut at a word boundary when it runs long.
    pub fn reason(&self) -> String {
        let first_line = self.description.lines().next().unwrap_or_default().trim();
        if first_line.chars().count() <= REASON_MAX_CHARS {
            return first_line.to_string();
        }

        let cut: String = first_line.chars().take(REASON_MAX_CHARS).collect();
        let trimmed = match cut.rfind(' ') {
            Some(index) if index > 0 => &cut[..index],
            _ => cut.as_str(),
        };
        format!("{}...", trimmed.trim_end_matches([',', '.', ';', ':']))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Received,
    UnderReview,
}

impl ReportStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Received => "Received",
            Self::UnderReview => "Under Review",
        }
    }
}
