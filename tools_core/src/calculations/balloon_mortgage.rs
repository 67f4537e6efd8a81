//! # Balloon Mortgage Calculation
//!
//! Prices a balloon mortgage: the monthly payment comes from the standard
//! annuity formula over the full amortization term, but only the balloon
//! term's payments are actually made; whatever principal remains at the end
//! of the balloon term comes due as a single balloon payment.
//!
//! ## Assumptions
//!
//! - Monthly compounding (annual rate / 12)
//! - Extra payments apply straight to principal, capped at the remaining
//!   balance
//! - Interest-only loans pay `P * r` monthly and balloon the full principal
//!
//! ## Example
//!
//! ```rust
//! use tools_core::calculations::balloon_mortgage::{BalloonMortgageInput, PaymentType, calculate};
//! use tools_core::units::Percent;
//!
//! let input = BalloonMortgageInput {
//!     label: "30/5 balloon".to_string(),
//!     loan_amount_usd: 300_000.0,
//!     annual_rate: Percent(6.5),
//!     amortization_years: 30,
//!     balloon_years: 5,
//!     payment_type: PaymentType::Amortized,
//!     extra_payment_usd: 0.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.monthly_payment_usd - 1896.20).abs() < 0.05);
//! assert_eq!(result.schedule.len(), 60);
//! ```

use serde::{Deserialize, Serialize};

use crate::display::{format_currency, ResultRow};
use crate::errors::{CalcError, CalcResult};
use crate::units::{round_cents, Percent};

/// How the monthly payment is structured during the balloon term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentType {
    /// Payment sized by the annuity formula over the amortization term
    #[default]
    Amortized,
    /// Payment covers interest only; no principal is retired
    InterestOnly,
}

impl PaymentType {
    /// All payment types for UI selection
    pub const ALL: [PaymentType; 2] = [PaymentType::Amortized, PaymentType::InterestOnly];

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentType::Amortized => "Amortized",
            PaymentType::InterestOnly => "Interest Only",
        }
    }

    /// Parse from a form key (e.g., "amortized", "interest-only")
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "amortized" => Some(PaymentType::Amortized),
            "interest-only" | "interest only" | "io" => Some(PaymentType::InterestOnly),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Input parameters for a balloon mortgage.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "30/5 balloon",
///   "loan_amount_usd": 300000.0,
///   "annual_rate": 6.5,
///   "amortization_years": 30,
///   "balloon_years": 5,
///   "payment_type": "Amortized",
///   "extra_payment_usd": 0.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalloonMortgageInput {
    /// User label for this scenario (e.g., "30/5 balloon")
    pub label: String,

    /// Loan principal in dollars
    pub loan_amount_usd: f64,

    /// Annual interest rate as a percentage (6.5 means 6.5%)
    pub annual_rate: Percent,

    /// Amortization term in years (the term the payment is priced on)
    pub amortization_years: u32,

    /// Balloon term in years (payments actually made before the balloon)
    pub balloon_years: u32,

    /// Payment structure during the balloon term
    pub payment_type: PaymentType,

    /// Optional extra monthly payment toward principal
    pub extra_payment_usd: f64,
}

impl BalloonMortgageInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.loan_amount_usd <= 0.0 {
            return Err(CalcError::invalid_input(
                "loan_amount_usd",
                self.loan_amount_usd.to_string(),
                "Loan amount must be positive",
            ));
        }
        if self.annual_rate.0 <= 0.0 {
            return Err(CalcError::invalid_input(
                "annual_rate",
                self.annual_rate.0.to_string(),
                "Interest rate must be positive",
            ));
        }
        if self.annual_rate.0 > 30.0 {
            return Err(CalcError::out_of_range("annual_rate", self.annual_rate.0, 0.0, 30.0));
        }
        if self.amortization_years == 0 || self.amortization_years > 50 {
            return Err(CalcError::out_of_range(
                "amortization_years",
                self.amortization_years as f64,
                1.0,
                50.0,
            ));
        }
        if self.balloon_years == 0 {
            return Err(CalcError::out_of_range("balloon_years", 0.0, 1.0, self.amortization_years as f64));
        }
        if self.balloon_years > self.amortization_years {
            return Err(CalcError::calculation_failed(
                "balloon_mortgage",
                "Balloon term cannot exceed the amortization term",
            ));
        }
        if self.extra_payment_usd < 0.0 {
            return Err(CalcError::invalid_input(
                "extra_payment_usd",
                self.extra_payment_usd.to_string(),
                "Extra payment cannot be negative",
            ));
        }
        Ok(())
    }

    /// Monthly payment from the standard annuity formula
    /// `P * r * (1+r)^n / ((1+r)^n - 1)`, or `P * r` for interest-only.
    pub fn monthly_payment_usd(&self) -> f64 {
        let r = self.annual_rate.monthly_fraction();
        match self.payment_type {
            PaymentType::Amortized => {
                let n = (self.amortization_years * 12) as i32;
                let growth = (1.0 + r).powi(n);
                self.loan_amount_usd * r * growth / (growth - 1.0)
            }
            PaymentType::InterestOnly => self.loan_amount_usd * r,
        }
    }
}

/// One month of the payment schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Month number, starting at 1
    pub month: u32,

    /// Scheduled payment for this month (interest + principal)
    pub payment_usd: f64,

    /// Portion of the payment applied to principal
    pub principal_usd: f64,

    /// Portion of the payment applied to interest
    pub interest_usd: f64,

    /// Extra principal paid this month
    pub extra_usd: f64,

    /// Remaining balance after this month
    pub balance_usd: f64,
}

/// Results from the balloon mortgage calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "monthly_payment_usd": 1896.20,
///   "balloon_payment_usd": 280832.0,
///   "months_paid": 60,
///   "total_paid_usd": 113772.28,
///   "total_interest_usd": 94604.0,
///   "total_principal_usd": 19168.28,
///   "schedule": [ { "month": 1, "payment_usd": 1896.20, "...": "..." } ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalloonMortgageResult {
    /// Monthly payment during the balloon term
    pub monthly_payment_usd: f64,

    /// Principal due at the end of the balloon term
    pub balloon_payment_usd: f64,

    /// Months of payments actually made (shorter than the balloon term only
    /// if extra payments retire the loan early)
    pub months_paid: u32,

    /// Sum of all monthly payments and extra payments (excludes the balloon)
    pub total_paid_usd: f64,

    /// Total interest paid during the balloon term
    pub total_interest_usd: f64,

    /// Total principal retired during the balloon term
    pub total_principal_usd: f64,

    /// Month-by-month breakdown over the balloon term
    pub schedule: Vec<ScheduleRow>,
}

impl BalloonMortgageResult {
    /// Labeled display rows for uniform rendering.
    pub fn summary_rows(&self) -> Vec<ResultRow> {
        vec![
            ResultRow::new("Monthly Payment", format_currency(self.monthly_payment_usd)),
            ResultRow::new("Balloon Payment", format_currency(self.balloon_payment_usd)),
            ResultRow::new("Total of Payments", format_currency(self.total_paid_usd)),
            ResultRow::new("Total Interest", format_currency(self.total_interest_usd)),
            ResultRow::new("Principal Paid", format_currency(self.total_principal_usd)),
        ]
    }
}

/// Calculate the balloon mortgage payment and schedule.
///
/// The schedule iterates only over the balloon term: each month accrues
/// interest on the running balance, the payment splits into interest and
/// principal, extra payments reduce the balance further, and the balance at
/// the final month is the balloon payment.
///
/// # Returns
///
/// * `Ok(BalloonMortgageResult)` - payment, balloon, totals, and schedule
/// * `Err(CalcError)` - structured error if inputs are invalid
pub fn calculate(input: &BalloonMortgageInput) -> CalcResult<BalloonMortgageResult> {
    input.validate()?;

    let r = input.annual_rate.monthly_fraction();
    let monthly_payment = input.monthly_payment_usd();
    let balloon_months = input.balloon_years * 12;

    let mut balance = input.loan_amount_usd;
    let mut total_paid = 0.0;
    let mut total_interest = 0.0;
    let mut total_principal = 0.0;
    let mut schedule = Vec::with_capacity(balloon_months as usize);

    for month in 1..=balloon_months {
        let interest = balance * r;
        let mut principal = match input.payment_type {
            PaymentType::Amortized => monthly_payment - interest,
            PaymentType::InterestOnly => 0.0,
        };
        // Final scheduled payment can overshoot a nearly-retired balance
        if principal > balance {
            principal = balance;
        }
        let extra = input.extra_payment_usd.min(balance - principal);
        balance -= principal + extra;

        let payment = interest + principal;
        total_paid += payment + extra;
        total_interest += interest;
        total_principal += principal + extra;

        // Reported at cent resolution; the accumulators stay unrounded
        schedule.push(ScheduleRow {
            month,
            payment_usd: round_cents(payment),
            principal_usd: round_cents(principal),
            interest_usd: round_cents(interest),
            extra_usd: round_cents(extra),
            balance_usd: round_cents(balance),
        });

        if balance <= 0.0 {
            break;
        }
    }

    Ok(BalloonMortgageResult {
        monthly_payment_usd: round_cents(monthly_payment),
        balloon_payment_usd: round_cents(balance),
        months_paid: schedule.len() as u32,
        total_paid_usd: round_cents(total_paid),
        total_interest_usd: round_cents(total_interest),
        total_principal_usd: round_cents(total_principal),
        schedule,
    })
}
