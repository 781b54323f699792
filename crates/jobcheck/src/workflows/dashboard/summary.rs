use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use super::seed::{DashboardBaseline, SeedActivity, SAFETY_TIPS};
use super::views::{
    ActivitySource, DashboardSummary, RecentVerificationView, ReportedCompanyView, StatCard,
    TrendDirection,
};
use crate::workflows::reports::ReportSummary;
use crate::workflows::verification::domain::company_slug;
use crate::workflows::verification::{
    evaluation::verdict_for, ScoringConfig, VerdictTally, VerificationSummary,
};

pub const RECENT_VERIFICATION_LIMIT: usize = 5;
pub const REPORTED_COMPANY_LIMIT: usize = 4;

impl DashboardSummary {
    /// Merge seeded sample activity with live activity into the dashboard view.
    ///
    /// `live_verifications` and `live_reports` are expected newest first, as
    /// returned by the repositories. Sample scores are banded with `scoring`,
    /// the same thresholds that banded the live verifications.
    pub fn build(
        baseline: &DashboardBaseline,
        seed: &SeedActivity,
        scoring: &ScoringConfig,
        live_verifications: &[VerificationSummary],
        live_reports: &[ReportSummary],
        tally: VerdictTally,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            stats: stat_cards(baseline, tally),
            recent_verifications: recent_verifications(seed, scoring, live_verifications, now),
            reported_companies: reported_companies(seed, live_reports, now),
            safety_tips: SAFETY_TIPS.to_vec(),
        }
    }
}

fn stat_cards(baseline: &DashboardBaseline, tally: VerdictTally) -> Vec<StatCard> {
    let card = |key, label, value: u64, change: &'static str| StatCard {
        key,
        label,
        value,
        display_value: format_count(value),
        change,
        trend: if change.starts_with('-') {
            TrendDirection::Negative
        } else {
            TrendDirection::Positive
        },
    };

    vec![
        card(
            "total_verifications",
            "Total Verifications",
            baseline.total_verifications + tally.total(),
            baseline.total_trend,
        ),
        card(
            "safe_jobs",
            "Safe Jobs Found",
            baseline.safe_jobs + tally.safe,
            baseline.safe_trend,
        ),
        card(
            "fake_detected",
            "Fake Jobs Detected",
            baseline.fake_detected + tally.risky,
            baseline.fake_trend,
        ),
        card(
            "students_protected",
            "Students Protected",
            baseline.students_protected + tally.total(),
            baseline.students_trend,
        ),
    ]
}

fn recent_verifications(
    seed: &SeedActivity,
    scoring: &ScoringConfig,
    live: &[VerificationSummary],
    now: DateTime<Utc>,
) -> Vec<RecentVerificationView> {
    let live_views = live.iter().map(|summary| RecentVerificationView {
        verification_id: Some(summary.verification_id.0.clone()),
        company_name: summary.company_name.clone(),
        score: summary.score,
        verdict: summary.verdict,
        verdict_label: summary.verdict.short_label(),
        age_label: relative_age_label(summary.verified_at, now),
        source: ActivitySource::Live,
    });

    let seed_views = seed.verifications.iter().map(|sample| {
        let verdict = verdict_for(sample.score, scoring);
        RecentVerificationView {
            verification_id: None,
            company_name: sample.company_name.to_string(),
            score: sample.score,
            verdict,
            verdict_label: verdict.short_label(),
            age_label: relative_age_label(now - Duration::minutes(sample.age_minutes), now),
            source: ActivitySource::Sample,
        }
    });

    live_views
        .chain(seed_views)
        .take(RECENT_VERIFICATION_LIMIT)
        .collect()
}

fn reported_companies(
    seed: &SeedActivity,
    live: &[ReportSummary],
    now: DateTime<Utc>,
) -> Vec<ReportedCompanyView> {
    let mut grouped: HashMap<String, ReportedCompanyView> = HashMap::new();

    for sample in &seed.reports {
        let reported_at = now - Duration::minutes(sample.age_minutes);
        merge_report(
            &mut grouped,
            company_slug(sample.company_name),
            sample.company_name,
            sample.reason,
            sample.reports,
            reported_at,
        );
    }

    for report in live {
        merge_report(
            &mut grouped,
            report.company_key.clone(),
            &report.company_name,
            &report.reason,
            1,
            report.submitted_at,
        );
    }

    let mut companies: Vec<ReportedCompanyView> = grouped.into_values().collect();
    companies.sort_by(|left, right| {
        right
            .last_reported_at
            .cmp(&left.last_reported_at)
            .then_with(|| right.reports.cmp(&left.reports))
            .then_with(|| left.company_name.cmp(&right.company_name))
    });
    companies.truncate(REPORTED_COMPANY_LIMIT);

    for company in &mut companies {
        company.age_label = relative_age_label(company.last_reported_at, now);
    }
    companies
}

fn merge_report(
    grouped: &mut HashMap<String, ReportedCompanyView>,
    key: String,
    company_name: &str,
    reason: &str,
    reports: u64,
    reported_at: DateTime<Utc>,
) {
    let entry = grouped.entry(key).or_insert_with(|| ReportedCompanyView {
        company_name: company_name.to_string(),
        reason: reason.to_string(),
        reports: 0,
        age_label: String::new(),
        last_reported_at: reported_at,
    });

    entry.reports += reports;
    if reported_at >= entry.last_reported_at {
        entry.company_name = company_name.to_string();
        entry.reason = reason.to_string();
        entry.last_reported_at = reported_at;
    }
}

/// Human label such as "just now", "5 minutes ago", "2 hours ago", "1 day ago".
pub fn relative_age_label(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let (amount, unit) = if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    } else if elapsed.num_hours() < 1 {
        (elapsed.num_minutes(), "minute")
    } else if elapsed.num_days() < 1 {
        (elapsed.num_hours(), "hour")
    } else {
        (elapsed.num_days(), "day")
    };

    let plural = if amount == 1 { "" } else { "s" };
    format!("{amount} {unit}{plural} ago")
}

/// Render a count with thousands separators, e.g. `12,847`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}
