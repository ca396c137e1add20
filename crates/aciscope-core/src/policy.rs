// ── Failure policy for independent units of work ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::warn;

use crate::error::{CoreError, QueryFailure};

/// What a failed per-switch or per-interface query does to the run.
///
/// Node resolution failing is fatal under either policy: there is
/// nothing left to inventory.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Abort the whole run on the first failure; no rows are returned.
    #[default]
    FailFast,
    /// Skip the failing unit, remember why, and keep going.
    BestEffort,
}

/// Applies an [`ErrorPolicy`] to unit failures as a run progresses.
#[derive(Debug)]
pub struct FailureLog {
    policy: ErrorPolicy,
    failures: Vec<QueryFailure>,
}

impl FailureLog {
    pub fn new(policy: ErrorPolicy) -> Self {
        Self {
            policy,
            failures: Vec::new(),
        }
    }

    /// Record a failed unit. Returns `Err` when the run must stop.
    pub fn absorb(&mut self, failure: QueryFailure) -> Result<(), CoreError> {
        match self.policy {
            ErrorPolicy::FailFast => Err(failure.into()),
            ErrorPolicy::BestEffort => {
                warn!(stage = %failure.stage, scope = %failure.scope, reason = %failure.reason, "skipping");
                self.failures.push(failure);
                Ok(())
            }
        }
    }

    pub fn failures(&self) -> &[QueryFailure] {
        &self.failures
    }

    pub fn into_failures(self) -> Vec<QueryFailure> {
        self.failures
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Stage;

    fn failure() -> QueryFailure {
        QueryFailure {
            stage: Stage::Optics,
            scope: "for switch 101 interface eth1/1".into(),
            reason: "boom".into(),
            status: Some(500),
            body: None,
        }
    }

    #[test]
    fn fail_fast_stops_on_first_failure() {
        let mut log = FailureLog::new(ErrorPolicy::FailFast);
        let err = log.absorb(failure()).unwrap_err();
        assert!(matches!(err, CoreError::Query(_)));
        assert!(log.failures().is_empty());
    }

    #[test]
    fn best_effort_collects() {
        let mut log = FailureLog::new(ErrorPolicy::BestEffort);
        log.absorb(failure()).unwrap();
        log.absorb(failure()).unwrap();
        assert_eq!(log.into_failures().len(), 2);
    }

    #[test]
    fn policy_parses_kebab_case() {
        assert_eq!(
            "best-effort".parse::<ErrorPolicy>().unwrap(),
            ErrorPolicy::BestEffort
        );
        assert_eq!(ErrorPolicy::default().to_string(), "fail-fast");
    }
}
