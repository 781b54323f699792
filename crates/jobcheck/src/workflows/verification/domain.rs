use serde::{Deserialize, Serialize};

/// Identifier wrapper for completed verifications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VerificationId(pub String);

/// Raw job details as entered by the person checking a posting.
///
/// Only the company name is mandatory; every other field may be omitted or
/// left blank, in which case the matching group of checks is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSubmission {
    pub company_name: String,
    #[serde(default)]
    pub job_link: Option<String>,
    #[serde(default)]
    pub recruiter_email: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub images: Vec<EvidenceImage>,
}

/// Screenshot or scan attached as supporting evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceImage {
    pub file_name: String,
    pub size_bytes: u64,
}

/// Normalized posting produced by the guard; the scoring engine only sees this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub company_name: String,
    /// Lowercased company name stripped to `[a-z0-9]`.
    pub company_slug: String,
    pub job_link: Option<JobLink>,
    pub recruiter_email: Option<RecruiterEmail>,
    pub job_description: Option<String>,
    pub images: Vec<EvidenceImage>,
}

impl JobPosting {
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobLink {
    pub url: String,
    pub host: String,
}

impl JobLink {
    pub fn is_https(&self) -> bool {
        self.url
            .get(..8)
            .map(|scheme| scheme.eq_ignore_ascii_case("https://"))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruiterEmail {
    pub address: String,
    /// Lowercased part after the first `@`.
    pub domain: String,
}

impl RecruiterEmail {
    /// First dot-separated label of the domain, e.g. `acme` for `acme.co.in`.
    pub fn domain_label(&self) -> &str {
        self.domain.split('.').next().unwrap_or_default()
    }
}

/// Reduce a company name to the comparison key used for e-mail matching and report grouping.
pub fn company_slug(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_drops_whitespace_and_punctuation() {
        assert_eq!(company_slug("Tata Consultancy Services"), "tataconsultancyservices");
        assert_eq!(company_slug("  A.B.C. Corp, Ltd "), "abccorpltd");
        assert_eq!(company_slug("Ünïcode & Co"), "ncodeco");
    }

    #[test]
    fn https_check_ignores_scheme_case() {
        let link = JobLink {
            url: "HTTPS://careers.example.com".to_string(),
            host: "careers.example.com".to_string(),
        };
        assert!(link.is_https());

        let plain = JobLink {
            url: "http://careers.example.com".to_string(),
            host: "careers.example.com".to_string(),
        };
        assert!(!plain.is_https());
    }

    #[test]
    fn domain_label_is_first_segment() {
        let email = RecruiterEmail {
            address: "hr@acme.co.in".to_string(),
            domain: "acme.co.in".to_string(),
        };
        assert_eq!(email.domain_label(), "acme");
    }
}
