//! Wizard state machine: the four steps, the session state, and the reducer.

use serde::{Deserialize, Serialize};

use super::input;
use super::model::{FinancialProfile, ProfileField, ScoreResult};

/// The four wizard steps, in presentation order.
///
/// Navigation is linear in both directions and unconditional; only
/// submission (on the last step) runs validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    FinancialStatus,
    CreditHistory,
    CreditUsage,
    DebtDetails,
}

impl WizardStep {
    /// All steps, in order.
    pub const ALL: [WizardStep; 4] = [
        Self::FinancialStatus,
        Self::CreditHistory,
        Self::CreditUsage,
        Self::DebtDetails,
    ];

    /// Zero-based position in the flow.
    pub fn index(&self) -> usize {
        match self {
            Self::FinancialStatus => 0,
            Self::CreditHistory => 1,
            Self::CreditUsage => 2,
            Self::DebtDetails => 3,
        }
    }

    /// Title shown in the progress header.
    pub fn title(&self) -> &'static str {
        match self {
            Self::FinancialStatus => "Financial Status",
            Self::CreditHistory => "Credit History",
            Self::CreditUsage => "Credit Usage",
            Self::DebtDetails => "Debt Details",
        }
    }

    /// Fields collected on this step.
    pub fn fields(&self) -> &'static [ProfileField] {
        match self {
            Self::FinancialStatus => &[
                ProfileField::MonthlyIncome,
                ProfileField::MonthlyExpenses,
                ProfileField::TotalDebt,
                ProfileField::Savings,
            ],
            Self::CreditHistory => &[
                ProfileField::OnTimePayments,
                ProfileField::LatePayments,
                ProfileField::MissedPayments,
            ],
            Self::CreditUsage => &[ProfileField::CreditLimit, ProfileField::CurrentBalance],
            Self::DebtDetails => &[
                ProfileField::CreditCardDebt,
                ProfileField::PersonalLoan,
                ProfileField::StudentLoan,
                ProfileField::Mortgage,
            ],
        }
    }

    /// The following step, if any.
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            Self::FinancialStatus => Some(Self::CreditHistory),
            Self::CreditHistory => Some(Self::CreditUsage),
            Self::CreditUsage => Some(Self::DebtDetails),
            Self::DebtDetails => None,
        }
    }

    /// The preceding step, if any.
    pub fn back(&self) -> Option<WizardStep> {
        match self {
            Self::FinancialStatus => None,
            Self::CreditHistory => Some(Self::FinancialStatus),
            Self::CreditUsage => Some(Self::CreditHistory),
            Self::DebtDetails => Some(Self::CreditUsage),
        }
    }

    /// Whether this is the submission step.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::DebtDetails)
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::FinancialStatus
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::FinancialStatus => "financial_status",
            Self::CreditHistory => "credit_history",
            Self::CreditUsage => "credit_usage",
            Self::DebtDetails => "debt_details",
        };
        write!(f, "{s}")
    }
}

/// A discrete user interaction or request outcome fed to the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    FieldChanged { field: ProfileField, value: String },
    StepAdvanced,
    StepRetreated,
    SubmitRequested,
    SubmitSucceeded(ScoreResult),
    SubmitFailed(String),
}

/// Complete session state, mutated only through [`WizardState::apply`].
///
/// Created once per session with everything empty; destroyed with the
/// session. `pending` is true only while a scoring request is in flight,
/// and `result`/`error` are the mutually exclusive outcomes of the most
/// recent request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    pub step: WizardStep,
    pub profile: FinancialProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ScoreResult>,
    #[serde(default)]
    pub pending: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the submit control is live: last step, no request in flight.
    pub fn can_submit(&self) -> bool {
        self.step.is_final() && !self.pending
    }

    /// Apply one action.
    ///
    /// Transitions are synchronous and atomic; invalid ones (navigating
    /// past the ends, re-submitting while pending) are silent no-ops and
    /// never leave the state partially updated.
    pub fn apply(&mut self, action: WizardAction) {
        match action {
            WizardAction::FieldChanged { field, value } => {
                let admitted = input::accept(self.profile.get(field), &value);
                self.profile.set(field, admitted);
            }
            WizardAction::StepAdvanced => {
                if let Some(next) = self.step.next() {
                    self.step = next;
                }
            }
            WizardAction::StepRetreated => {
                if let Some(back) = self.step.back() {
                    self.step = back;
                }
            }
            WizardAction::SubmitRequested => {
                if self.pending {
                    return;
                }
                if let Err(e) = input::validate_for_submission(&self.profile) {
                    self.error = Some(e.message);
                    return;
                }
                self.pending = true;
                self.error = None;
            }
            WizardAction::SubmitSucceeded(result) => {
                self.pending = false;
                self.error = None;
                self.result = Some(result);
            }
            WizardAction::SubmitFailed(message) => {
                self.pending = false;
                self.error = Some(message);
                // The last good result stays visible across a failed retry.
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submittable_state() -> WizardState {
        let mut state = WizardState::new();
        state.apply(WizardAction::FieldChanged {
            field: ProfileField::MonthlyIncome,
            value: "5000".to_string(),
        });
        state.apply(WizardAction::FieldChanged {
            field: ProfileField::MonthlyExpenses,
            value: "3000".to_string(),
        });
        state
    }

    fn sample_result(score: i32) -> ScoreResult {
        ScoreResult {
            score,
            improvements: vec![],
        }
    }

    #[test]
    fn next_walks_all_steps() {
        let expected = [
            WizardStep::CreditHistory,
            WizardStep::CreditUsage,
            WizardStep::DebtDetails,
        ];
        let mut current = WizardStep::FinancialStatus;
        for expected_next in expected {
            let next = current.next().unwrap();
            assert_eq!(next, expected_next);
            current = next;
        }
        assert!(current.next().is_none());
        assert!(current.is_final());
    }

    #[test]
    fn back_walks_all_steps_in_reverse() {
        let expected = [
            WizardStep::CreditUsage,
            WizardStep::CreditHistory,
            WizardStep::FinancialStatus,
        ];
        let mut current = WizardStep::DebtDetails;
        for expected_back in expected {
            let back = current.back().unwrap();
            assert_eq!(back, expected_back);
            current = back;
        }
        assert!(current.back().is_none());
    }

    #[test]
    fn step_fields_cover_the_profile_exactly_once() {
        let mut seen = Vec::new();
        for step in WizardStep::ALL {
            seen.extend_from_slice(step.fields());
        }
        assert_eq!(seen.len(), ProfileField::ALL.len());
        for field in ProfileField::ALL {
            assert_eq!(seen.iter().filter(|f| **f == field).count(), 1);
        }
    }

    #[test]
    fn display_matches_serde() {
        for step in WizardStep::ALL {
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(format!("\"{step}\""), json);
        }
    }

    #[test]
    fn navigation_clamps_at_the_ends() {
        let mut state = WizardState::new();

        state.apply(WizardAction::StepRetreated);
        assert_eq!(state.step, WizardStep::FinancialStatus, "back at step 0 is a no-op");

        for _ in 0..10 {
            state.apply(WizardAction::StepAdvanced);
        }
        assert_eq!(state.step, WizardStep::DebtDetails, "next at the last step is a no-op");
        assert!(state.step.index() <= 3);
    }

    #[test]
    fn field_changes_route_through_the_sanitizer() {
        let mut state = WizardState::new();

        state.apply(WizardAction::FieldChanged {
            field: ProfileField::Savings,
            value: "250.75".to_string(),
        });
        assert_eq!(state.profile.savings, "250.75");

        // Rejected keystrokes leave the admitted value in place.
        state.apply(WizardAction::FieldChanged {
            field: ProfileField::Savings,
            value: "-9".to_string(),
        });
        assert_eq!(state.profile.savings, "250.75");

        state.apply(WizardAction::FieldChanged {
            field: ProfileField::Savings,
            value: String::new(),
        });
        assert_eq!(state.profile.savings, "");
    }

    #[test]
    fn submit_blocked_until_required_fields_present() {
        let mut state = WizardState::new();
        state.apply(WizardAction::FieldChanged {
            field: ProfileField::MonthlyExpenses,
            value: "3000".to_string(),
        });

        state.apply(WizardAction::SubmitRequested);
        assert!(!state.pending);
        assert_eq!(
            state.error.as_deref(),
            Some("Please fill in all required fields: Monthly Income")
        );
    }

    #[test]
    fn submit_goes_pending_and_clears_prior_error() {
        let mut state = submittable_state();
        state.error = Some("stale".to_string());

        state.apply(WizardAction::SubmitRequested);
        assert!(state.pending);
        assert!(state.error.is_none());
    }

    #[test]
    fn submit_while_pending_is_a_no_op() {
        let mut state = submittable_state();
        state.apply(WizardAction::SubmitRequested);
        assert!(state.pending);

        // A second request while one is outstanding changes nothing.
        let before = state.clone();
        state.apply(WizardAction::SubmitRequested);
        assert_eq!(state, before);
    }

    #[test]
    fn success_stores_result_and_clears_pending() {
        let mut state = submittable_state();
        state.apply(WizardAction::SubmitRequested);
        state.apply(WizardAction::SubmitSucceeded(sample_result(720)));

        assert!(!state.pending);
        assert!(state.error.is_none());
        assert_eq!(state.result.as_ref().unwrap().score, 720);
    }

    #[test]
    fn failure_retains_last_good_result() {
        let mut state = submittable_state();
        state.apply(WizardAction::SubmitRequested);
        state.apply(WizardAction::SubmitSucceeded(sample_result(720)));

        state.apply(WizardAction::SubmitRequested);
        state.apply(WizardAction::SubmitFailed("invalid income".to_string()));

        assert!(!state.pending);
        assert_eq!(state.error.as_deref(), Some("invalid income"));
        assert_eq!(state.result.as_ref().unwrap().score, 720);
    }

    #[test]
    fn can_submit_only_on_the_final_step() {
        let mut state = WizardState::new();
        assert!(!state.can_submit());

        for _ in 0..3 {
            state.apply(WizardAction::StepAdvanced);
        }
        assert!(state.can_submit());

        state.pending = true;
        assert!(!state.can_submit());
    }

    #[test]
    fn state_serde_roundtrip() {
        let mut state = submittable_state();
        state.apply(WizardAction::SubmitRequested);
        state.apply(WizardAction::SubmitSucceeded(sample_result(612)));

        let json = serde_json::to_string(&state).unwrap();
        let parsed: WizardState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }
}
