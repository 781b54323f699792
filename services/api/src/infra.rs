use jobcheck::workflows::reports::{
    ModerationError, ModerationQueue, ModerationTicket, ReportId, ReportRecord, ReportRepository,
    ReportService, ReportSummary,
};
use jobcheck::workflows::verification::{
    EvidenceImage, NoiseSource, RepositoryError, ScoringConfig, SeededNoise, VerdictTally,
    VerificationId, VerificationRecord, VerificationRepository, VerificationService,
    VerificationSummary,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::debug;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type Verifications = VerificationService<InMemoryVerificationRepository>;
pub(crate) type Reports = ReportService<InMemoryReportRepository, InMemoryModerationQueue>;

/// Services shared by the HTTP routes and the CLI commands.
#[derive(Clone)]
pub(crate) struct AppServices {
    pub(crate) verifications: Arc<Verifications>,
    pub(crate) reports: Arc<Reports>,
    pub(crate) moderation: Arc<InMemoryModerationQueue>,
}

impl AppServices {
    pub(crate) fn in_memory(seed: Option<u64>) -> Self {
        let moderation = Arc::new(InMemoryModerationQueue::default());
        let verifications = Arc::new(VerificationService::new(
            Arc::new(InMemoryVerificationRepository::default()),
            ScoringConfig::default(),
            noise_from_seed(seed),
        ));
        let reports = Arc::new(ReportService::new(
            Arc::new(InMemoryReportRepository::default()),
            moderation.clone(),
        ));

        Self {
            verifications,
            reports,
            moderation,
        }
    }
}

pub(crate) fn noise_from_seed(seed: Option<u64>) -> Box<dyn NoiseSource> {
    match seed {
        Some(seed) => {
            debug!(seed, "using seeded scoring noise");
            Box::new(SeededNoise::new(seed))
        }
        None => Box::new(SeededNoise::from_entropy()),
    }
}

/// Records keyed by id, with insertion order kept for "most recent" listings.
struct Ledger<K, V> {
    order: Vec<K>,
    records: HashMap<K, V>,
}

impl<K, V> Default for Ledger<K, V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            records: HashMap::new(),
        }
    }
}

impl<K, V> Ledger<K, V>
where
    K: std::hash::Hash + Eq + Clone,
    V: Clone,
{
    fn insert(&mut self, key: K, value: V) -> Result<V, RepositoryError> {
        if self.records.contains_key(&key) {
            return Err(RepositoryError::Conflict);
        }
        self.order.push(key.clone());
        self.records.insert(key, value.clone());
        Ok(value)
    }

    fn replace(&mut self, key: &K, value: V) -> Result<(), RepositoryError> {
        match self.records.get_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn newest(&self, limit: usize) -> impl Iterator<Item = &V> + '_ {
        self.order
            .iter()
            .rev()
            .take(limit)
            .filter_map(|key| self.records.get(key))
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryVerificationRepository {
    ledger: Arc<Mutex<Ledger<VerificationId, VerificationRecord>>>,
}

impl VerificationRepository for InMemoryVerificationRepository {
    fn insert(&self, record: VerificationRecord) -> Result<VerificationRecord, RepositoryError> {
        let mut guard = self.ledger.lock().expect("repository mutex poisoned");
        guard.insert(record.verification_id.clone(), record)
    }

    fn fetch(&self, id: &VerificationId) -> Result<Option<VerificationRecord>, RepositoryError> {
        let guard = self.ledger.lock().expect("repository mutex poisoned");
        Ok(guard.records.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<VerificationSummary>, RepositoryError> {
        let guard = self.ledger.lock().expect("repository mutex poisoned");
        Ok(guard.newest(limit).map(VerificationRecord::summary).collect())
    }

    fn tally(&self) -> Result<VerdictTally, RepositoryError> {
        let guard = self.ledger.lock().expect("repository mutex poisoned");
        let mut tally = VerdictTally::default();
        for record in guard.records.values() {
            tally.record(record.sheet.verdict);
        }
        Ok(tally)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryReportRepository {
    ledger: Arc<Mutex<Ledger<ReportId, ReportRecord>>>,
}

impl ReportRepository for InMemoryReportRepository {
    fn insert(&self, record: ReportRecord) -> Result<ReportRecord, RepositoryError> {
        let mut guard = self.ledger.lock().expect("repository mutex poisoned");
        guard.insert(record.report_id.clone(), record)
    }

    fn update(&self, record: ReportRecord) -> Result<(), RepositoryError> {
        let mut guard = self.ledger.lock().expect("repository mutex poisoned");
        let key = record.report_id.clone();
        guard.replace(&key, record)
    }

    fn fetch(&self, id: &ReportId) -> Result<Option<ReportRecord>, RepositoryError> {
        let guard = self.ledger.lock().expect("repository mutex poisoned");
        Ok(guard.records.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<ReportSummary>, RepositoryError> {
        let guard = self.ledger.lock().expect("repository mutex poisoned");
        Ok(guard.newest(limit).map(ReportRecord::summary).collect())
    }

    fn count(&self) -> Result<u64, RepositoryError> {
        let guard = self.ledger.lock().expect("repository mutex poisoned");
        Ok(guard.records.len() as u64)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryModerationQueue {
    tickets: Arc<Mutex<Vec<ModerationTicket>>>,
}

impl ModerationQueue for InMemoryModerationQueue {
    fn publish(&self, ticket: ModerationTicket) -> Result<(), ModerationError> {
        let mut guard = self.tickets.lock().expect("moderation mutex poisoned");
        guard.push(ticket);
        Ok(())
    }
}

impl InMemoryModerationQueue {
    pub(crate) fn tickets(&self) -> Vec<ModerationTicket> {
        self.tickets
            .lock()
            .expect("moderation mutex poisoned")
            .clone()
    }
}

/// Parse `name:size_bytes` evidence arguments, e.g. `offer.png:240000`.
pub(crate) fn parse_evidence_image(raw: &str) -> Result<EvidenceImage, String> {
    let (name, size) = raw
        .rsplit_once(':')
        .ok_or_else(|| format!("expected NAME:SIZE_BYTES, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing file name in '{raw}'"));
    }
    let size_bytes = size
        .trim()
        .parse::<u64>()
        .map_err(|err| format!("invalid size in '{raw}' ({err})"))?;

    Ok(EvidenceImage {
        file_name: name.to_string(),
        size_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobcheck::workflows::verification::JobSubmission;

    #[test]
    fn parses_evidence_arguments() {
        let image = parse_evidence_image("offer letter.png:240000").expect("valid argument");
        assert_eq!(image.file_name, "offer letter.png");
        assert_eq!(image.size_bytes, 240_000);

        assert!(parse_evidence_image("offer.png").is_err());
        assert!(parse_evidence_image(":120").is_err());
        assert!(parse_evidence_image("offer.png:big").is_err());
    }

    #[test]
    fn in_memory_repositories_list_newest_first() {
        let services = AppServices::in_memory(Some(11));
        for company in ["Infosys", "Wipro", "Accenture"] {
            services
                .verifications
                .verify(JobSubmission {
                    company_name: company.to_string(),
                    ..JobSubmission::default()
                })
                .expect("verification succeeds");
        }

        let recent = services.verifications.recent(2).expect("recent available");
        let names: Vec<&str> = recent
            .iter()
            .map(|summary| summary.company_name.as_str())
            .collect();
        assert_eq!(names, vec!["Accenture", "Wipro"]);
        assert_eq!(services.verifications.tally().expect("tally").total(), 3);
    }
}
