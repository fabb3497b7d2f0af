//! Login endpoint probe.
//!
//! Posts a set of test credentials to the extension login endpoints and
//! reports which deployments answer with `200 OK`. This is a diagnostic
//! for comparing a local server against production; it never retries and
//! never fails on network errors, which are recorded in the outcome instead.

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;

/// Local development server login route.
pub const LOCAL_LOGIN_URL: &str = "http://localhost:5000/ext-login";

/// Production login route used by the extension.
pub const PRODUCTION_LOGIN_URL: &str = "https://baaijus.replit.app/ext-login";

/// Production login route under the `/api` prefix.
pub const PRODUCTION_API_LOGIN_URL: &str = "https://baaijus.replit.app/api/ext/login";

const LOCAL_TIMEOUT: Duration = Duration::from_secs(5);
const PRODUCTION_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// Targets and credentials
// ============================================================================

/// Which deployment a target belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRole {
    Local,
    Production,
}

/// A login endpoint to probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    /// Human-readable name used in the report.
    pub label: String,
    pub role: TargetRole,
    pub url: String,
    pub timeout: Duration,
}

impl ProbeTarget {
    pub fn new(
        label: impl Into<String>,
        role: TargetRole,
        url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            label: label.into(),
            role,
            url: url.into(),
            timeout,
        }
    }

    /// Local server at `url` with a 5 second timeout.
    pub fn local(url: impl Into<String>) -> Self {
        Self::new("Local server", TargetRole::Local, url, LOCAL_TIMEOUT)
    }

    /// Production server at `url` with a 10 second timeout.
    pub fn production(url: impl Into<String>) -> Self {
        Self::new(
            "Production server",
            TargetRole::Production,
            url,
            PRODUCTION_TIMEOUT,
        )
    }

    /// The local route, the production route, and the `/api` production route.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::local(LOCAL_LOGIN_URL),
            Self::production(PRODUCTION_LOGIN_URL),
            Self::new(
                "Production API route",
                TargetRole::Production,
                PRODUCTION_API_LOGIN_URL,
                PRODUCTION_TIMEOUT,
            ),
        ]
    }
}

/// Credentials posted as `{"username": ..., "password": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("testuser2", "testpass")
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// What happened when a target was probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered.
    Responded { status: u16, body: String },
    /// The request never produced a response (connect error, timeout, ...).
    Failed { error: String },
}

impl ProbeOutcome {
    /// True only for `200 OK`.
    pub fn is_working(&self) -> bool {
        matches!(self, ProbeOutcome::Responded { status: 200, .. })
    }
}

/// A target paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub target: ProbeTarget,
    pub outcome: ProbeOutcome,
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = &self.target.label;
        match &self.outcome {
            ProbeOutcome::Responded { status, body } => {
                writeln!(f, "{label} ({}) status: {status}", self.target.url)?;
                write!(f, "{label} response: {body}")
            }
            ProbeOutcome::Failed { error } => {
                write!(f, "{label} ({}) error: {error}", self.target.url)
            }
        }
    }
}

// ============================================================================
// Diagnosis
// ============================================================================

/// Interpretation of local vs. production results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnosis {
    /// Local works, production does not.
    DeployPending,
    /// Neither works.
    BrokenEverywhere,
    /// Both work, so the fault is in the extension.
    ClientSide,
    /// Production works, local does not.
    LocalOnly,
}

impl Diagnosis {
    pub fn from_results(local_ok: bool, production_ok: bool) -> Self {
        match (local_ok, production_ok) {
            (true, false) => Diagnosis::DeployPending,
            (false, false) => Diagnosis::BrokenEverywhere,
            (true, true) => Diagnosis::ClientSide,
            (false, true) => Diagnosis::LocalOnly,
        }
    }

    pub fn issue(&self) -> &'static str {
        match self {
            Diagnosis::DeployPending => "Extension endpoint works locally but not in production",
            Diagnosis::BrokenEverywhere => "Extension endpoint broken everywhere",
            Diagnosis::ClientSide => "Server endpoints work, problem is in extension code",
            Diagnosis::LocalOnly => "Local server is down; production is healthy",
        }
    }

    pub fn solution(&self) -> &'static str {
        match self {
            Diagnosis::DeployPending => "Deploy the updated server code",
            Diagnosis::BrokenEverywhere => "Fix the server code",
            Diagnosis::ClientSide => "Fix extension authentication logic",
            Diagnosis::LocalOnly => "Start the local server before testing",
        }
    }
}

// ============================================================================
// Report
// ============================================================================

/// All probe results plus the derived diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub results: Vec<ProbeResult>,
}

impl ProbeReport {
    /// True if any target with `role` answered `200 OK`.
    pub fn role_working(&self, role: TargetRole) -> bool {
        self.results
            .iter()
            .any(|r| r.target.role == role && r.outcome.is_working())
    }

    pub fn diagnosis(&self) -> Diagnosis {
        Diagnosis::from_results(
            self.role_working(TargetRole::Local),
            self.role_working(TargetRole::Production),
        )
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- RESULTS ---")?;
        for result in &self.results {
            let marker = if result.outcome.is_working() {
                "✓ WORKING"
            } else {
                "✗ BROKEN"
            };
            writeln!(f, "{}: {marker}", result.target.label)?;
        }
        let diagnosis = self.diagnosis();
        writeln!(f)?;
        writeln!(f, "ISSUE: {}", diagnosis.issue())?;
        write!(f, "SOLUTION: {}", diagnosis.solution())
    }
}

// ============================================================================
// LoginProbe
// ============================================================================

/// Blocking HTTP client that posts credentials to login endpoints.
pub struct LoginProbe {
    client: Client,
}

impl LoginProbe {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Posts `credentials` to `target`.
    ///
    /// Transport errors are captured as [`ProbeOutcome::Failed`].
    pub fn probe(&self, target: &ProbeTarget, credentials: &Credentials) -> ProbeOutcome {
        debug!(url = %target.url, timeout = ?target.timeout, "probing login endpoint");

        let response = self
            .client
            .post(&target.url)
            .timeout(target.timeout)
            .json(credentials)
            .send()
            .and_then(|response| {
                let status = response.status().as_u16();
                response.text().map(|body| (status, body))
            });

        match response {
            Ok((status, body)) => ProbeOutcome::Responded { status, body },
            Err(e) => {
                warn!(url = %target.url, error = %e, "login probe failed");
                ProbeOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Probes every target in order.
    pub fn run(&self, targets: &[ProbeTarget], credentials: &Credentials) -> ProbeReport {
        let results = targets
            .iter()
            .map(|target| ProbeResult {
                target: target.clone(),
                outcome: self.probe(target, credentials),
            })
            .collect();
        ProbeReport { results }
    }
}
