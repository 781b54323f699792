use super::domain::{Attachment, AttachmentDescriptor, ReportSubmission, ScamReport};
use crate::workflows::verification::domain::company_slug;
use url::Url;

/// Validation errors raised while accepting a scam report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("company name is required")]
    MissingCompanyName,
    #[error("a description of what happened is required")]
    MissingDescription,
    #[error("job link '{0}' must be an http(s) URL")]
    MalformedJobLink(String),
    #[error("too many attachments (max {max}, found {found})")]
    TooManyAttachments { max: usize, found: usize },
    #[error("attachment '{name}' exceeds {max_bytes} bytes")]
    AttachmentTooLarge { name: String, max_bytes: u64 },
    #[error("attachment '{name}' is not an image, PDF, or Word document")]
    UnsupportedAttachment { name: String },
}

const DEFAULT_MAX_ATTACHMENTS: usize = 5;
const DEFAULT_MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

const DOCUMENT_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

#[derive(Debug, Clone)]
pub struct IntakePolicy {
    pub max_attachments: usize,
    pub max_attachment_bytes: u64,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            max_attachments: DEFAULT_MAX_ATTACHMENTS,
            max_attachment_bytes: DEFAULT_MAX_ATTACHMENT_BYTES,
        }
    }
}

/// Guard responsible for producing `ScamReport` instances.
#[derive(Debug, Clone, Default)]
pub struct ReportIntakeGuard {
    policy: IntakePolicy,
}

impl ReportIntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    pub fn report_from_submission(
        &self,
        submission: ReportSubmission,
    ) -> Result<ScamReport, IntakeViolation> {
        let company_name = submission.company_name.trim().to_string();
        if company_name.is_empty() {
            return Err(IntakeViolation::MissingCompanyName);
        }

        let description = submission.description.trim().to_string();
        if description.is_empty() {
            return Err(IntakeViolation::MissingDescription);
        }

        let job_link = match non_blank(submission.job_link) {
            Some(url) if is_web_link(&url) => Some(url),
            Some(url) => return Err(IntakeViolation::MalformedJobLink(url)),
            None => None,
        };

        let attachments = self.check_attachments(submission.attachments)?;

        Ok(ScamReport {
            company_key: company_slug(&company_name),
            company_name,
            job_link,
            description,
            attachments,
            additional_info: non_blank(submission.additional_info),
        })
    }

    fn check_attachments(
        &self,
        attachments: Vec<AttachmentDescriptor>,
    ) -> Result<Vec<Attachment>, IntakeViolation> {
        if attachments.len() > self.policy.max_attachments {
            return Err(IntakeViolation::TooManyAttachments {
                max: self.policy.max_attachments,
                found: attachments.len(),
            });
        }

        attachments
            .into_iter()
            .map(|descriptor| {
                if descriptor.size_bytes > self.policy.max_attachment_bytes {
                    return Err(IntakeViolation::AttachmentTooLarge {
                        name: descriptor.file_name,
                        max_bytes: self.policy.max_attachment_bytes,
                    });
                }

                let content_type = accepted_content_type(&descriptor.file_name).ok_or_else(|| {
                    IntakeViolation::UnsupportedAttachment {
                        name: descriptor.file_name.clone(),
                    }
                })?;

                Ok(Attachment {
                    file_name: descriptor.file_name,
                    size_bytes: descriptor.size_bytes,
                    content_type: content_type.to_string(),
                })
            })
            .collect()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

/// Absolute `http`/`https` link with a host; scheme-less text is refused.
fn is_web_link(url: &str) -> bool {
    Url::parse(url)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https") && parsed.has_host())
        .unwrap_or(false)
}

/// Content type for an accepted proof file: any image, PDF, DOC, or DOCX.
fn accepted_content_type(file_name: &str) -> Option<&'static str> {
    mime_guess::from_path(file_name.trim())
        .iter_raw()
        .find(|candidate| candidate.starts_with("image/") || DOCUMENT_TYPES.contains(candidate))
}
