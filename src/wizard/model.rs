//! Financial profile and scoring result models.

use serde::{Deserialize, Serialize};

/// The thirteen profile fields, with per-field wire and display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    MonthlyIncome,
    MonthlyExpenses,
    TotalDebt,
    Savings,
    OnTimePayments,
    LatePayments,
    MissedPayments,
    CreditLimit,
    CurrentBalance,
    CreditCardDebt,
    PersonalLoan,
    StudentLoan,
    Mortgage,
}

impl ProfileField {
    /// All fields, in collection order.
    pub const ALL: [ProfileField; 13] = [
        Self::MonthlyIncome,
        Self::MonthlyExpenses,
        Self::TotalDebt,
        Self::Savings,
        Self::OnTimePayments,
        Self::LatePayments,
        Self::MissedPayments,
        Self::CreditLimit,
        Self::CurrentBalance,
        Self::CreditCardDebt,
        Self::PersonalLoan,
        Self::StudentLoan,
        Self::Mortgage,
    ];

    /// Key used in the scoring request body.
    pub fn key(&self) -> &'static str {
        match self {
            Self::MonthlyIncome => "monthly_income",
            Self::MonthlyExpenses => "monthly_expenses",
            Self::TotalDebt => "total_debt",
            Self::Savings => "savings",
            Self::OnTimePayments => "on_time_payments",
            Self::LatePayments => "late_payments",
            Self::MissedPayments => "missed_payments",
            Self::CreditLimit => "credit_limit",
            Self::CurrentBalance => "current_balance",
            Self::CreditCardDebt => "credit_card_debt",
            Self::PersonalLoan => "personal_loan",
            Self::StudentLoan => "student_loan",
            Self::Mortgage => "mortgage",
        }
    }

    /// Look a field up by its wire key.
    pub fn from_key(key: &str) -> Option<ProfileField> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }

    /// Plain human-facing name, as used in validation messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MonthlyIncome => "Monthly Income",
            Self::MonthlyExpenses => "Monthly Expenses",
            Self::TotalDebt => "Total Debt",
            Self::Savings => "Total Savings",
            Self::OnTimePayments => "On-time Payments",
            Self::LatePayments => "Late Payments",
            Self::MissedPayments => "Missed Payments",
            Self::CreditLimit => "Total Credit Limit",
            Self::CurrentBalance => "Current Balance",
            Self::CreditCardDebt => "Credit Card Debt",
            Self::PersonalLoan => "Personal Loan",
            Self::StudentLoan => "Student Loan",
            Self::Mortgage => "Mortgage",
        }
    }

    /// Input label. Dollar amounts carry a unit suffix; payment counts do not.
    pub fn label(&self) -> String {
        match self {
            Self::OnTimePayments | Self::LatePayments | Self::MissedPayments => {
                self.display_name().to_string()
            }
            _ => format!("{} ($)", self.display_name()),
        }
    }

    /// Whether submission requires a non-empty value for this field.
    pub fn is_required(&self) -> bool {
        matches!(self, Self::MonthlyIncome | Self::MonthlyExpenses)
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Draft financial profile collected across the wizard steps.
///
/// Every field is either the empty string (not yet provided) or a decimal
/// string representing a number >= 0. `input::accept` is the only writer,
/// which is what upholds that invariant. The record serializes to exactly
/// the thirteen-key JSON object the scoring service expects, string values
/// verbatim, empty string permitted for unset fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialProfile {
    #[serde(default)]
    pub monthly_income: String,
    #[serde(default)]
    pub monthly_expenses: String,
    #[serde(default)]
    pub total_debt: String,
    #[serde(default)]
    pub savings: String,
    #[serde(default)]
    pub on_time_payments: String,
    #[serde(default)]
    pub late_payments: String,
    #[serde(default)]
    pub missed_payments: String,
    #[serde(default)]
    pub credit_limit: String,
    #[serde(default)]
    pub current_balance: String,
    #[serde(default)]
    pub credit_card_debt: String,
    #[serde(default)]
    pub personal_loan: String,
    #[serde(default)]
    pub student_loan: String,
    #[serde(default)]
    pub mortgage: String,
}

impl FinancialProfile {
    /// Current value of a field.
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::MonthlyIncome => &self.monthly_income,
            ProfileField::MonthlyExpenses => &self.monthly_expenses,
            ProfileField::TotalDebt => &self.total_debt,
            ProfileField::Savings => &self.savings,
            ProfileField::OnTimePayments => &self.on_time_payments,
            ProfileField::LatePayments => &self.late_payments,
            ProfileField::MissedPayments => &self.missed_payments,
            ProfileField::CreditLimit => &self.credit_limit,
            ProfileField::CurrentBalance => &self.current_balance,
            ProfileField::CreditCardDebt => &self.credit_card_debt,
            ProfileField::PersonalLoan => &self.personal_loan,
            ProfileField::StudentLoan => &self.student_loan,
            ProfileField::Mortgage => &self.mortgage,
        }
    }

    /// Replace a field's value. All other fields are untouched.
    pub fn set(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::MonthlyIncome => &mut self.monthly_income,
            ProfileField::MonthlyExpenses => &mut self.monthly_expenses,
            ProfileField::TotalDebt => &mut self.total_debt,
            ProfileField::Savings => &mut self.savings,
            ProfileField::OnTimePayments => &mut self.on_time_payments,
            ProfileField::LatePayments => &mut self.late_payments,
            ProfileField::MissedPayments => &mut self.missed_payments,
            ProfileField::CreditLimit => &mut self.credit_limit,
            ProfileField::CurrentBalance => &mut self.current_balance,
            ProfileField::CreditCardDebt => &mut self.credit_card_debt,
            ProfileField::PersonalLoan => &mut self.personal_loan,
            ProfileField::StudentLoan => &mut self.student_loan,
            ProfileField::Mortgage => &mut self.mortgage,
        };
        *slot = value;
    }
}

/// A single recommended action returned by the scoring service.
///
/// `steps` keeps the server's order; it is display order, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Improvement {
    pub timeframe: String,
    pub action: String,
    pub impact: String,
    pub steps: Vec<String>,
}

/// Outcome of a successful scoring request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Credit score on the 300..=850 scale.
    pub score: i32,
    /// Recommendations, in the order the server gave them.
    pub improvements: Vec<Improvement>,
}
