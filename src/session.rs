//! Interactive wizard session: command parsing and the submit round trip.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::render::{present, Surface};
use crate::scoring::ScoreService;
use crate::wizard::{ProfileField, WizardAction, WizardState};

/// A parsed user command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Set a profile field from a `<field> <value>` line.
    Set(ProfileField, String),
    Next,
    Back,
    Submit,
    Quit,
}

impl Command {
    /// Parse a raw input line.
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        match line {
            "next" => Ok(Self::Next),
            "back" => Ok(Self::Back),
            "submit" => Ok(Self::Submit),
            "quit" | "exit" => Ok(Self::Quit),
            _ => {
                let (key, value) = line
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| format!("Unknown command: {line}"))?;
                let field = ProfileField::from_key(key)
                    .ok_or_else(|| format!("Unknown field: {key}"))?;
                Ok(Self::Set(field, value.trim().to_string()))
            }
        }
    }
}

/// One user's pass through the wizard.
///
/// Owns the session's only mutable state; nothing survives the session.
/// The scoring service is reached through the [`ScoreService`] seam so the
/// whole flow can be driven headless in tests.
pub struct WizardSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    state: WizardState,
    service: Arc<dyn ScoreService>,
}

impl WizardSession {
    pub fn new(service: Arc<dyn ScoreService>) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            state: WizardState::new(),
            service,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Apply a non-submit action to the state machine.
    pub fn dispatch(&mut self, action: WizardAction) {
        self.state.apply(action);
    }

    /// Run validation and, when it passes, the scoring round trip.
    ///
    /// Returns true when a request was actually issued. The outcome is
    /// applied before this returns, so outcomes always land in the order
    /// their requests were issued.
    pub async fn submit(&mut self) -> bool {
        if self.state.pending {
            tracing::debug!("Submit ignored, a request is already in flight");
            return false;
        }
        self.state.apply(WizardAction::SubmitRequested);
        if !self.state.pending {
            // Validation refused the submission; the error is already set.
            return false;
        }
        self.finish_submit().await;
        true
    }

    /// Perform the network call for an already-pending submission and
    /// apply its outcome.
    async fn finish_submit(&mut self) {
        match self.service.submit(&self.state.profile).await {
            Ok(result) => self.state.apply(WizardAction::SubmitSucceeded(result)),
            Err(e) => {
                tracing::warn!("Scoring request failed: {e}");
                self.state
                    .apply(WizardAction::SubmitFailed(e.display_message()));
            }
        }
    }

    /// Drive the session against a surface until quit or EOF.
    pub async fn run(&mut self, surface: &mut dyn Surface) {
        tracing::info!(session = %self.id, "Wizard session started at {}", self.started_at);
        surface.show_step(&self.state).await;

        while let Some(line) = surface.read_command().await {
            if line.trim().is_empty() {
                continue;
            }
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(message) => {
                    surface.show_error(&message).await;
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Set(field, value) => {
                    self.state.apply(WizardAction::FieldChanged { field, value });
                    surface.show_step(&self.state).await;
                }
                Command::Next => {
                    if self.state.step.is_final() {
                        surface.show_error("Already on the last step, use submit").await;
                    } else {
                        self.state.apply(WizardAction::StepAdvanced);
                        surface.show_step(&self.state).await;
                    }
                }
                Command::Back => {
                    if self.state.step.back().is_none() {
                        surface.show_error("Already on the first step").await;
                    } else {
                        self.state.apply(WizardAction::StepRetreated);
                        surface.show_step(&self.state).await;
                    }
                }
                Command::Submit => {
                    if !self.state.step.is_final() {
                        surface
                            .show_error("Submit is available on the last step only")
                            .await;
                        continue;
                    }
                    if self.state.pending {
                        continue;
                    }
                    self.state.apply(WizardAction::SubmitRequested);
                    if !self.state.pending {
                        if let Some(error) = &self.state.error {
                            surface.show_error(error).await;
                        }
                        continue;
                    }
                    surface.show_pending().await;
                    self.finish_submit().await;

                    if let Some(error) = &self.state.error {
                        surface.show_error(error).await;
                    } else if let Some(result) = &self.state.result {
                        let model = present(result.score, result.improvements.clone());
                        surface.show_result(&model).await;
                    }
                }
            }
        }

        tracing::info!(session = %self.id, "Wizard session ended");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::RequestError;
    use crate::render::ScoreBand;
    use crate::wizard::{FinancialProfile, ScoreResult};

    use super::*;

    /// Scripted service: pops the next outcome per call, records request
    /// bodies for assertions.
    struct ScriptedService {
        outcomes: Mutex<Vec<Result<ScoreResult, RequestError>>>,
        calls: Mutex<Vec<FinancialProfile>>,
    }

    impl ScriptedService {
        fn new(outcomes: Vec<Result<ScoreResult, RequestError>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn request_body(&self, index: usize) -> FinancialProfile {
            self.calls.lock().unwrap()[index].clone()
        }
    }

    #[async_trait]
    impl ScoreService for ScriptedService {
        async fn submit(&self, profile: &FinancialProfile) -> Result<ScoreResult, RequestError> {
            self.calls.lock().unwrap().push(profile.clone());
            self.outcomes.lock().unwrap().remove(0)
        }
    }

    fn score(value: i32) -> ScoreResult {
        ScoreResult {
            score: value,
            improvements: vec![],
        }
    }

    fn fill_required(session: &mut WizardSession) {
        session.dispatch(WizardAction::FieldChanged {
            field: ProfileField::MonthlyIncome,
            value: "5000".to_string(),
        });
        session.dispatch(WizardAction::FieldChanged {
            field: ProfileField::MonthlyExpenses,
            value: "3000".to_string(),
        });
    }

    #[tokio::test]
    async fn happy_path_submits_profile_verbatim() {
        let service = Arc::new(ScriptedService::new(vec![Ok(score(720))]));
        let mut session = WizardSession::new(service.clone());
        fill_required(&mut session);

        assert!(session.submit().await);

        let state = session.state();
        assert!(!state.pending);
        assert!(state.error.is_none());
        assert_eq!(state.result.as_ref().unwrap().score, 720);
        assert_eq!(
            ScoreBand::classify(state.result.as_ref().unwrap().score),
            ScoreBand::Good
        );

        // Exactly the draft profile went over the wire, untouched.
        assert_eq!(service.call_count(), 1);
        let body = service.request_body(0);
        assert_eq!(body.monthly_income, "5000");
        assert_eq!(body.monthly_expenses, "3000");
        assert_eq!(body.savings, "");
    }

    #[tokio::test]
    async fn missing_required_field_blocks_before_any_network_call() {
        let service = Arc::new(ScriptedService::new(vec![]));
        let mut session = WizardSession::new(service.clone());
        session.dispatch(WizardAction::FieldChanged {
            field: ProfileField::MonthlyExpenses,
            value: "3000".to_string(),
        });

        assert!(!session.submit().await);
        assert_eq!(service.call_count(), 0);
        assert_eq!(
            session.state().error.as_deref(),
            Some("Please fill in all required fields: Monthly Income")
        );
        assert!(!session.state().pending);
    }

    #[tokio::test]
    async fn failed_resubmission_retains_the_last_good_result() {
        let service = Arc::new(ScriptedService::new(vec![
            Ok(score(720)),
            Err(RequestError::Server("invalid income".to_string())),
        ]));
        let mut session = WizardSession::new(service.clone());
        fill_required(&mut session);

        assert!(session.submit().await);
        assert!(session.submit().await);

        let state = session.state();
        assert!(!state.pending);
        assert_eq!(state.error.as_deref(), Some("invalid income"));
        assert_eq!(state.result.as_ref().unwrap().score, 720);
        assert_eq!(service.call_count(), 2);
    }

    #[tokio::test]
    async fn submit_while_pending_issues_no_second_request() {
        let service = Arc::new(ScriptedService::new(vec![]));
        let mut session = WizardSession::new(service.clone());
        fill_required(&mut session);

        session.state.pending = true;
        assert!(!session.submit().await);
        assert_eq!(service.call_count(), 0);
        assert!(session.state().pending);
    }

    #[tokio::test]
    async fn network_failure_surfaces_the_fixed_message() {
        let service = Arc::new(ScriptedService::new(vec![Err(RequestError::Network(
            "connection refused".to_string(),
        ))]));
        let mut session = WizardSession::new(service);
        fill_required(&mut session);

        assert!(session.submit().await);
        assert_eq!(
            session.state().error.as_deref(),
            Some("Failed to connect to server. Please try again.")
        );
        assert!(session.state().result.is_none());
    }

    #[test]
    fn command_parsing() {
        assert_eq!(Command::parse("next"), Ok(Command::Next));
        assert_eq!(Command::parse(" back "), Ok(Command::Back));
        assert_eq!(Command::parse("submit"), Ok(Command::Submit));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(
            Command::parse("monthly_income 5000"),
            Ok(Command::Set(ProfileField::MonthlyIncome, "5000".to_string()))
        );
        assert!(Command::parse("annual_income 5000").is_err());
        assert!(Command::parse("bogus").is_err());
    }
}
