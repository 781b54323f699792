use super::super::domain::{JobLink, JobPosting, RecruiterEmail};
use super::super::noise::NoiseSource;
use super::config::ScoringConfig;
use super::policy::ImageAnalysis;
use super::{ScoreComponent, TrustSignal};

pub(crate) struct WebsiteSignals {
    pub https: bool,
    pub known_domain: bool,
}

pub(crate) struct EmailSignals {
    pub domain: String,
    pub free_provider: bool,
    pub matches_company: bool,
}

pub(crate) struct ScoreSignals {
    pub website: Option<WebsiteSignals>,
    pub email: Option<EmailSignals>,
    pub description_flags: Option<Vec<String>>,
    pub image_analysis: Option<ImageAnalysis>,
    pub checks_performed: usize,
}

pub(crate) fn score_posting(
    posting: &JobPosting,
    config: &ScoringConfig,
    noise: &mut dyn NoiseSource,
) -> (Vec<ScoreComponent>, u8, ScoreSignals) {
    let mut ledger = Ledger {
        components: Vec::new(),
        total: config.base_score,
    };
    let mut checks_performed = 0;

    let website = posting.job_link.as_ref().map(|link| {
        checks_performed += 1;
        let signals = website_signals(link, config);
        if signals.https {
            ledger.apply(
                TrustSignal::SecureConnection,
                config.https_bonus,
                "link uses https".to_string(),
            );
        }
        if signals.known_domain {
            ledger.apply(
                TrustSignal::KnownDomain,
                config.known_domain_bonus,
                format!("{} is a recognized job board or institution", link.host),
            );
        }
        signals
    });

    let email = posting.recruiter_email.as_ref().map(|email| {
        checks_performed += 1;
        let signals = email_signals(email, &posting.company_slug, config);
        if signals.free_provider {
            ledger.apply(
                TrustSignal::FreeEmailProvider,
                -config.free_email_penalty,
                format!("recruiter writes from free provider {}", signals.domain),
            );
        }
        if signals.matches_company {
            ledger.apply(
                TrustSignal::CompanyEmailMatch,
                config.company_match_bonus,
                format!("{} matches {}", signals.domain, posting.company_name),
            );
        }
        signals
    });

    let description_flags = posting.job_description.as_deref().map(|description| {
        checks_performed += 1;
        let flags = suspicious_phrases(description, config);
        if !flags.is_empty() {
            let delta = -(config.suspicious_phrase_penalty * flags.len() as i16);
            ledger.apply(
                TrustSignal::SuspiciousPhrases,
                delta,
                format!("description contains {}", flags.join(", ")),
            );
        }
        flags
    });

    let image_analysis = if posting.has_images() {
        checks_performed += 1;
        ledger.apply(
            TrustSignal::ImageEvidence,
            config.image_evidence_bonus,
            format!("{} evidence image(s) supplied", posting.images.len()),
        );

        let analysis = simulate_image_analysis(config, noise);
        if analysis.suspicious_content {
            ledger.apply(
                TrustSignal::SuspiciousImage,
                -config.suspicious_image_penalty,
                "extracted image text looks suspicious".to_string(),
            );
        }
        Some(analysis)
    } else {
        None
    };

    if checks_performed < config.minimum_checks_for_full_range {
        let (low, high) = config.limited_evidence_range;
        let bounded = ledger.total.clamp(low, high);
        if bounded != ledger.total {
            ledger.apply(
                TrustSignal::LimitedEvidence,
                bounded - ledger.total,
                format!("only {checks_performed} check(s) ran; score held within {low}-{high}"),
            );
        }
    }

    let jitter = noise.next_in(i32::from(config.jitter_low), u32::from(config.jitter_span)) as i16;
    if jitter != 0 {
        ledger.apply(
            TrustSignal::Jitter,
            jitter,
            "analysis variance".to_string(),
        );
    }

    let bounded = ledger.total.clamp(0, 100);
    if bounded != ledger.total {
        ledger.apply(
            TrustSignal::ScoreBounds,
            bounded - ledger.total,
            "score limited to 0-100".to_string(),
        );
    }

    let signals = ScoreSignals {
        website,
        email,
        description_flags,
        image_analysis,
        checks_performed,
    };

    (ledger.components, ledger.total as u8, signals)
}

struct Ledger {
    components: Vec<ScoreComponent>,
    total: i16,
}

impl Ledger {
    fn apply(&mut self, signal: TrustSignal, delta: i16, notes: String) {
        self.total += delta;
        self.components.push(ScoreComponent {
            signal,
            delta,
            notes,
        });
    }
}

fn website_signals(link: &JobLink, config: &ScoringConfig) -> WebsiteSignals {
    WebsiteSignals {
        https: link.is_https(),
        known_domain: is_known_domain(&link.host, config),
    }
}

pub(crate) fn is_known_domain(host: &str, config: &ScoringConfig) -> bool {
    let board = config.known_job_boards.iter().any(|board| {
        host == board
            || host
                .strip_suffix(board.as_str())
                .map(|prefix| prefix.ends_with('.'))
                .unwrap_or(false)
    });

    board
        || config
            .trusted_domain_suffixes
            .iter()
            .any(|suffix| host.ends_with(suffix.as_str()))
}

fn email_signals(email: &RecruiterEmail, company_slug: &str, config: &ScoringConfig) -> EmailSignals {
    let free_provider = config
        .free_email_providers
        .iter()
        .any(|provider| email.domain.contains(provider.as_str()));

    EmailSignals {
        domain: email.domain.clone(),
        free_provider,
        matches_company: email_matches_company(email, company_slug),
    }
}

pub(crate) fn email_matches_company(email: &RecruiterEmail, company_slug: &str) -> bool {
    let label = email.domain_label();
    (!company_slug.is_empty() && email.domain.contains(company_slug))
        || (!label.is_empty() && company_slug.contains(label))
}

pub(crate) fn suspicious_phrases(description: &str, config: &ScoringConfig) -> Vec<String> {
    let lowered = description.to_lowercase();
    config
        .suspicious_phrases
        .iter()
        .filter(|phrase| lowered.contains(phrase.as_str()))
        .cloned()
        .collect()
}

fn simulate_image_analysis(config: &ScoringConfig, noise: &mut dyn NoiseSource) -> ImageAnalysis {
    let suspicious_content = noise.next_unit() > 1.0 - config.suspicious_image_probability;
    let confidence = noise.next_in(70, 25) as u8;

    ImageAnalysis {
        text_extracted: true,
        suspicious_content,
        confidence,
    }
}
