use super::domain::{
    company_slug, EvidenceImage, JobLink, JobPosting, JobSubmission, RecruiterEmail,
};
use url::{Host, ParseError, Url};

/// Validation errors raised while normalizing a job submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionViolation {
    #[error("company name is required")]
    MissingCompanyName,
    #[error("job link '{0}' does not contain a usable host")]
    MalformedJobLink(String),
    #[error("recruiter email '{0}' is not a valid address")]
    MalformedRecruiterEmail(String),
    #[error("too many evidence images (max {max}, found {found})")]
    TooManyImages { max: usize, found: usize },
    #[error("evidence image '{name}' exceeds {max_bytes} bytes")]
    ImageTooLarge { name: String, max_bytes: u64 },
    #[error("evidence image is missing a file name")]
    UnnamedImage,
}

const DEFAULT_MAX_IMAGES: usize = 10;
const DEFAULT_MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// Limits applied to evidence uploads.
#[derive(Debug, Clone)]
pub struct GuardPolicy {
    pub max_images: usize,
    pub max_image_bytes: u64,
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self {
            max_images: DEFAULT_MAX_IMAGES,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

/// Guard responsible for producing `JobPosting` instances.
#[derive(Debug, Clone, Default)]
pub struct VerificationGuard {
    policy: GuardPolicy,
}

impl VerificationGuard {
    pub fn with_policy(policy: GuardPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &GuardPolicy {
        &self.policy
    }

    /// Convert an inbound submission into a normalized posting.
    pub fn posting_from_submission(
        &self,
        submission: JobSubmission,
    ) -> Result<JobPosting, SubmissionViolation> {
        let company_name = submission.company_name.trim().to_string();
        if company_name.is_empty() {
            return Err(SubmissionViolation::MissingCompanyName);
        }

        let job_link = match non_blank(submission.job_link) {
            Some(url) => {
                let host = parse_link_host(&url)
                    .ok_or_else(|| SubmissionViolation::MalformedJobLink(url.clone()))?;
                Some(JobLink { url, host })
            }
            None => None,
        };

        let recruiter_email = match non_blank(submission.recruiter_email) {
            Some(address) => Some(parse_email(address)?),
            None => None,
        };

        let images = self.check_images(submission.images)?;

        Ok(JobPosting {
            company_slug: company_slug(&company_name),
            company_name,
            job_link,
            recruiter_email,
            job_description: non_blank(submission.job_description),
            images,
        })
    }

    fn check_images(
        &self,
        images: Vec<EvidenceImage>,
    ) -> Result<Vec<EvidenceImage>, SubmissionViolation> {
        if images.len() > self.policy.max_images {
            return Err(SubmissionViolation::TooManyImages {
                max: self.policy.max_images,
                found: images.len(),
            });
        }

        for image in &images {
            if image.file_name.trim().is_empty() {
                return Err(SubmissionViolation::UnnamedImage);
            }
            if image.size_bytes > self.policy.max_image_bytes {
                return Err(SubmissionViolation::ImageTooLarge {
                    name: image.file_name.clone(),
                    max_bytes: self.policy.max_image_bytes,
                });
            }
        }

        Ok(images)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

fn parse_email(address: String) -> Result<RecruiterEmail, SubmissionViolation> {
    let domain = match address.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.chars().any(char::is_whitespace) =>
        {
            domain.to_ascii_lowercase()
        }
        _ => return Err(SubmissionViolation::MalformedRecruiterEmail(address)),
    };

    Ok(RecruiterEmail { address, domain })
}

/// Extract the lowercase host from a job link.
///
/// Links without a scheme (`linkedin.com/jobs/123`) are accepted since people
/// routinely paste them that way; they are read as `http://` links.
pub(crate) fn parse_link_host(url: &str) -> Option<String> {
    let parsed = parse_web_link(url)?;
    let host = match parsed.host()? {
        Host::Domain(domain) => domain.trim_end_matches('.').to_ascii_lowercase(),
        Host::Ipv4(addr) => addr.to_string(),
        Host::Ipv6(addr) => addr.to_string(),
    };

    (!host.is_empty()).then_some(host)
}

/// Parse a job link, falling back to `http://` when the text carries no
/// scheme of its own or names no host (`localhost:8080/jobs`).
fn parse_web_link(url: &str) -> Option<Url> {
    let trimmed = url.trim();
    match Url::parse(trimmed) {
        Ok(parsed) if parsed.has_host() => Some(parsed),
        Ok(_) | Err(ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("http://{trimmed}"))
                .ok()
                .filter(Url::has_host)
        }
        Err(_) => None,
    }
}
