/// Headline counters the dashboard starts from before any live activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardBaseline {
    pub total_verifications: u64,
    pub safe_jobs: u64,
    pub fake_detected: u64,
    pub students_protected: u64,
    pub total_trend: &'static str,
    pub safe_trend: &'static str,
    pub fake_trend: &'static str,
    pub students_trend: &'static str,
}

impl Default for DashboardBaseline {
    fn default() -> Self {
        Self {
            total_verifications: 12_847,
            safe_jobs: 10_234,
            fake_detected: 2_613,
            students_protected: 8_456,
            total_trend: "+12%",
            safe_trend: "+8%",
            fake_trend: "-5%",
            students_trend: "+15%",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedVerification {
    pub company_name: &'static str,
    pub score: u8,
    pub age_minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub company_name: &'static str,
    pub reason: &'static str,
    pub reports: u64,
    pub age_minutes: i64,
}

/// Sample activity shown alongside whatever happened during this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedActivity {
    pub verifications: Vec<SeedVerification>,
    pub reports: Vec<SeedReport>,
}

impl SeedActivity {
    pub fn empty() -> Self {
        Self {
            verifications: Vec::new(),
            reports: Vec::new(),
        }
    }
}

const HOUR: i64 = 60;
const DAY: i64 = 24 * HOUR;

impl Default for SeedActivity {
    fn default() -> Self {
        let verification = |company_name, score, age_minutes| SeedVerification {
            company_name,
            score,
            age_minutes,
        };
        let report = |company_name, reason, reports, age_minutes| SeedReport {
            company_name,
            reason,
            reports,
            age_minutes,
        };

        Self {
            verifications: vec![
                verification("Google India", 92, 2 * HOUR),
                verification("Unknown Tech Corp", 34, 5 * HOUR),
                verification("Infosys", 88, DAY),
                verification("FastHire Solutions", 45, DAY),
                verification("Microsoft", 95, 2 * DAY),
            ],
            reports: vec![
                report("QuickHire Tech", "Asked for registration fees", 23, HOUR),
                report(
                    "Global IT Solutions",
                    "Fake website, no real company",
                    45,
                    3 * HOUR,
                ),
                report("Dream Jobs Inc", "Promised unrealistic salary", 12, 5 * HOUR),
                report(
                    "FastTrack Careers",
                    "Collected personal documents",
                    67,
                    DAY,
                ),
            ],
        }
    }
}

pub const SAFETY_TIPS: [&str; 4] = [
    "Never pay any fees for job applications or interviews",
    "Always verify company websites through official sources",
    "Be cautious of jobs offering unusually high salaries",
    "Check if the recruiter's email matches the company domain",
];
