//! Wizard core: the profile draft, keystroke admission, and the step
//! state machine.
//!
//! The wizard collects a `FinancialProfile` across four fixed steps. All
//! session state lives in a single `WizardState` value mutated only through
//! `WizardState::apply`, which keeps the flow deterministic and testable
//! without a rendering harness.

pub mod input;
pub mod model;
pub mod state;

pub use input::{accept, parse_amount, validate_for_submission};
pub use model::{FinancialProfile, Improvement, ProfileField, ScoreResult};
pub use state::{WizardAction, WizardState, WizardStep};
