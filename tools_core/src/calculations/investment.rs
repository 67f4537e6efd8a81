//! # Dividend Investment Projection
//!
//! Projects a dividend portfolio month by month: each month the balance
//! earns `balance * yield / 12`, contributions are added, and dividends are
//! either reinvested into the balance or accumulated as cash, per the
//! reinvestment toggle.
//!
//! ## Example
//!
//! ```rust
//! use tools_core::calculations::investment::{InvestmentInput, calculate};
//! use tools_core::units::Percent;
//!
//! let input = InvestmentInput {
//!     label: "DRIP portfolio".to_string(),
//!     initial_balance_usd: 10_000.0,
//!     annual_yield: Percent(6.0),
//!     monthly_contribution_usd: 500.0,
//!     years: 10,
//!     reinvest_dividends: true,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.ending_value_usd > 10_000.0 + 500.0 * 120.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::display::{format_currency, ResultRow};
use crate::errors::{CalcError, CalcResult};
use crate::units::Percent;

/// Input parameters for the investment projection.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "DRIP portfolio",
///   "initial_balance_usd": 10000.0,
///   "annual_yield": 6.0,
///   "monthly_contribution_usd": 500.0,
///   "years": 10,
///   "reinvest_dividends": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentInput {
    /// User label for this scenario
    pub label: String,

    /// Starting portfolio balance in dollars
    pub initial_balance_usd: f64,

    /// Annual dividend yield as a percentage (6.0 means 6%)
    pub annual_yield: Percent,

    /// Contribution added every month
    pub monthly_contribution_usd: f64,

    /// Projection horizon in years
    pub years: u32,

    /// Reinvest dividends into the balance, or hold them as cash
    pub reinvest_dividends: bool,
}

impl InvestmentInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.initial_balance_usd < 0.0 {
            return Err(CalcError::invalid_input(
                "initial_balance_usd",
                self.initial_balance_usd.to_string(),
                "Starting balance cannot be negative",
            ));
        }
        if self.monthly_contribution_usd < 0.0 {
            return Err(CalcError::invalid_input(
                "monthly_contribution_usd",
                self.monthly_contribution_usd.to_string(),
                "Contribution cannot be negative",
            ));
        }
        if self.initial_balance_usd == 0.0 && self.monthly_contribution_usd == 0.0 {
            return Err(CalcError::calculation_failed(
                "investment",
                "Starting balance and monthly contribution cannot both be zero",
            ));
        }
        if self.annual_yield.0 <= 0.0 {
            return Err(CalcError::invalid_input(
                "annual_yield",
                self.annual_yield.0.to_string(),
                "Yield must be positive",
            ));
        }
        if self.annual_yield.0 > 50.0 {
            return Err(CalcError::out_of_range("annual_yield", self.annual_yield.0, 0.0, 50.0));
        }
        if self.years == 0 || self.years > 60 {
            return Err(CalcError::out_of_range("years", self.years as f64, 1.0, 60.0));
        }
        Ok(())
    }
}

/// One year of the projection breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearRow {
    /// Year number, starting at 1
    pub year: u32,

    /// Cumulative contributions through the end of this year
    pub contributions_to_date_usd: f64,

    /// Dividends earned during this year
    pub dividends_usd: f64,

    /// Portfolio balance at year end (excludes held cash)
    pub end_balance_usd: f64,
}

/// Results from the investment projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentResult {
    /// Portfolio balance at the end of the horizon
    pub final_balance_usd: f64,

    /// Dividends held as cash (zero when reinvesting)
    pub cash_dividends_usd: f64,

    /// Balance plus held cash
    pub ending_value_usd: f64,

    /// Total contributed over the horizon (excludes the starting balance)
    pub total_contributions_usd: f64,

    /// Total dividends earned over the horizon
    pub total_dividends_usd: f64,

    /// Year-by-year breakdown
    pub yearly: Vec<YearRow>,
}

impl InvestmentResult {
    /// Labeled display rows for uniform rendering.
    pub fn summary_rows(&self) -> Vec<ResultRow> {
        vec![
            ResultRow::new("Ending Value", format_currency(self.ending_value_usd)),
            ResultRow::new("Final Balance", format_currency(self.final_balance_usd)),
            ResultRow::new("Cash Dividends", format_currency(self.cash_dividends_usd)),
            ResultRow::new("Total Contributions", format_currency(self.total_contributions_usd)),
            ResultRow::new("Total Dividends", format_currency(self.total_dividends_usd)),
        ]
    }
}

/// Run the month-by-month projection.
pub fn calculate(input: &InvestmentInput) -> CalcResult<InvestmentResult> {
    input.validate()?;

    let r = input.annual_yield.monthly_fraction();
    let mut balance = input.initial_balance_usd;
    let mut cash = 0.0;
    let mut total_contributions = 0.0;
    let mut total_dividends = 0.0;
    let mut year_dividends = 0.0;
    let mut yearly = Vec::with_capacity(input.years as usize);

    for month in 1..=(input.years * 12) {
        let dividend = balance * r;
        total_dividends += dividend;
        year_dividends += dividend;

        if input.reinvest_dividends {
            balance += dividend;
        } else {
            cash += dividend;
        }
        balance += input.monthly_contribution_usd;
        total_contributions += input.monthly_contribution_usd;

        if month % 12 == 0 {
            yearly.push(YearRow {
                year: month / 12,
                contributions_to_date_usd: total_contributions,
                dividends_usd: year_dividends,
                end_balance_usd: balance,
            });
            year_dividends = 0.0;
        }
    }

    Ok(InvestmentResult {
        final_balance_usd: balance,
        cash_dividends_usd: cash,
        ending_value_usd: balance + cash,
        total_contributions_usd: total_contributions,
        total_dividends_usd: total_dividends,
        yearly,
    })
}
