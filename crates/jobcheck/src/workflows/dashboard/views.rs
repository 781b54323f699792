use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::workflows::verification::TrustVerdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub key: &'static str,
    pub label: &'static str,
    pub value: u64,
    pub display_value: String,
    pub change: &'static str,
    pub trend: TrendDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivitySource {
    Live,
    Sample,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentVerificationView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_id: Option<String>,
    pub company_name: String,
    pub score: u8,
    pub verdict: TrustVerdict,
    pub verdict_label: &'static str,
    pub age_label: String,
    pub source: ActivitySource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedCompanyView {
    pub company_name: String,
    pub reason: String,
    pub reports: u64,
    pub age_label: String,
    #[serde(skip)]
    pub(crate) last_reported_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub stats: Vec<StatCard>,
    pub recent_verifications: Vec<RecentVerificationView>,
    pub reported_companies: Vec<ReportedCompanyView>,
    pub safety_tips: Vec<&'static str>,
}
