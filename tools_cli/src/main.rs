//! # FreeToolsHub CLI
//!
//! Terminal front-end for the calculators. Prompts for each tool's inputs,
//! runs the calculation, and prints a formatted result block followed by
//! the JSON serialization of the result (for LLM/API use).

use std::io::{self, BufRead, Write};

use tools_core::calculations::balloon_mortgage::{self, BalloonMortgageInput, PaymentType};
use tools_core::calculations::capacitance::{self, CapacitanceInput, CapacitorEntry};
use tools_core::calculations::deck::{self, DeckBeamInput, DeckJoistInput};
use tools_core::calculations::investment::{self, InvestmentInput};
use tools_core::calculations::power::{self, Phase, PowerInput};
use tools_core::calculations::septic::{self, SepticInput};
use tools_core::display::ResultRow;
use tools_core::errors::CalcError;
use tools_core::form::{parse_count, parse_flag, NumericField};
use tools_core::tables::{JoistSpacing, SpeciesGroup};
use tools_core::units::{CapacitanceUnit, Percent};

// Whole-number fields; fractional input is rejected, never truncated
const AMORT_YEARS: NumericField = NumericField {
    name: "amortization_years",
    label: "Amortization term (years)",
    min: 1.0,
    max: 50.0,
    default: 30.0,
};
const BALLOON_YEARS: NumericField = NumericField {
    name: "balloon_years",
    label: "Balloon term (years)",
    min: 1.0,
    max: 50.0,
    default: 5.0,
};
const CAPACITOR_COUNT: NumericField = NumericField {
    name: "capacitor_count",
    label: "Number of capacitors (2-10)",
    min: 2.0,
    max: 10.0,
    default: 2.0,
};
const BEDROOMS: NumericField = NumericField {
    name: "bedrooms",
    label: "Bedrooms (1-6)",
    min: 1.0,
    max: 6.0,
    default: 3.0,
};
const PROJECTION_YEARS: NumericField = NumericField {
    name: "years",
    label: "Years",
    min: 1.0,
    max: 60.0,
    default: 10.0,
};

fn read_line() -> String {
    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

/// Prompt for a numeric field, re-asking until the input parses.
fn prompt_field(field: &NumericField) -> f64 {
    loop {
        print!("{} [{}]: ", field.label, field.default);
        if io::stdout().flush().is_err() {
            return field.default;
        }
        match field.parse_or_default(&read_line()) {
            Ok(value) => return value,
            Err(e) => println!("  {e}"),
        }
    }
}

/// Prompt for a whole-number field, re-asking until the input parses.
///
/// Empty input takes the field default; "30.5" is an error, not 30.
fn prompt_count(field: &NumericField) -> u32 {
    loop {
        print!("{} [{}]: ", field.label, field.default);
        if io::stdout().flush().is_err() {
            return field.default as u32;
        }
        let raw = read_line();
        if raw.trim().is_empty() {
            return field.default as u32;
        }
        match parse_count(field, &raw) {
            Ok(n) => return n,
            Err(e) => println!("  {e}"),
        }
    }
}

fn prompt_raw(label: &str) -> String {
    print!("{label}: ");
    let _ = io::stdout().flush();
    read_line()
}

fn print_results(title: &str, rows: &[ResultRow]) {
    println!();
    println!("=======================================");
    println!("  {title}");
    println!("=======================================");
    for row in rows {
        println!("  {:<22} {}", row.label, row.value);
    }
    println!("=======================================");
}

fn print_json<T: serde::Serialize>(value: &T) {
    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(value) {
        println!("{json}");
    }
}

fn print_error(e: &CalcError) {
    eprintln!("Error: {e}");
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{json}");
    }
}

fn run_balloon_mortgage() {
    const LOAN_AMOUNT: NumericField = NumericField {
        name: "loan_amount_usd",
        label: "Loan amount ($)",
        min: 1.0,
        max: 100_000_000.0,
        default: 300_000.0,
    };
    const RATE: NumericField = NumericField {
        name: "annual_rate",
        label: "Annual interest rate (%)",
        min: 0.01,
        max: 30.0,
        default: 6.5,
    };
    const EXTRA: NumericField = NumericField {
        name: "extra_payment_usd",
        label: "Extra monthly payment ($)",
        min: 0.0,
        max: 1_000_000.0,
        default: 0.0,
    };

    let payment_type = PaymentType::from_key(&prompt_raw("Payment type (amortized/interest-only) [amortized]"))
        .unwrap_or(PaymentType::Amortized);

    let input = BalloonMortgageInput {
        label: "CLI".to_string(),
        loan_amount_usd: prompt_field(&LOAN_AMOUNT),
        annual_rate: Percent(prompt_field(&RATE)),
        amortization_years: prompt_count(&AMORT_YEARS),
        balloon_years: prompt_count(&BALLOON_YEARS),
        payment_type,
        extra_payment_usd: prompt_field(&EXTRA),
    };

    match balloon_mortgage::calculate(&input) {
        Ok(result) => {
            print_results("BALLOON MORTGAGE", &result.summary_rows());
            println!("  ({} monthly payments before the balloon)", result.months_paid);
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_power() {
    const VOLTAGE: NumericField = NumericField {
        name: "voltage_v",
        label: "Voltage (V)",
        min: 0.01,
        max: 1_000_000.0,
        default: 480.0,
    };
    const CURRENT: NumericField = NumericField {
        name: "current_a",
        label: "Current (A)",
        min: 0.01,
        max: 100_000.0,
        default: 10.0,
    };
    const PF: NumericField = NumericField {
        name: "power_factor",
        label: "Power factor (0-1)",
        min: 0.01,
        max: 1.0,
        default: 0.85,
    };

    let phase = Phase::from_key(&prompt_raw("Phase (1/3) [3]")).unwrap_or(Phase::Three);

    let input = PowerInput {
        label: "CLI".to_string(),
        phase,
        voltage_v: prompt_field(&VOLTAGE),
        current_a: prompt_field(&CURRENT),
        power_factor: prompt_field(&PF),
    };

    match power::calculate(&input) {
        Ok(result) => {
            print_results("AC POWER", &result.summary_rows());
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_capacitance() {
    const VALUE: NumericField = NumericField {
        name: "capacitance",
        label: "Capacitance value",
        min: 1e-12,
        max: 1e12,
        default: 10.0,
    };
    const VOLTAGE: NumericField = NumericField {
        name: "supply_voltage_v",
        label: "Supply voltage (V, blank to skip)",
        min: 0.01,
        max: 1_000_000.0,
        default: 0.0,
    };

    let count = prompt_count(&CAPACITOR_COUNT) as usize;
    let mut capacitors = Vec::with_capacity(count);
    for i in 1..=count {
        println!("Capacitor {i}:");
        let value = prompt_field(&VALUE);
        let unit = CapacitanceUnit::from_key(&prompt_raw("  Unit (F/mF/uF/nF/pF) [uF]"))
            .unwrap_or(CapacitanceUnit::Microfarad);
        capacitors.push(CapacitorEntry { value, unit });
    }

    let supply = prompt_field(&VOLTAGE);
    let input = CapacitanceInput {
        label: "CLI".to_string(),
        capacitors,
        supply_voltage_v: if supply > 0.0 { Some(supply) } else { None },
    };

    match capacitance::calculate(&input) {
        Ok(result) => {
            print_results("SERIES CAPACITANCE", &result.summary_rows());
            if let Some(divider) = &result.divider {
                println!();
                println!("  Voltage divider:");
                for element in &divider.elements {
                    println!(
                        "    C{}: {:.3} V, {:.3e} J",
                        element.index + 1,
                        element.voltage_v,
                        element.energy_j
                    );
                }
            }
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_deck_beam() {
    const JOIST_SPAN: NumericField = NumericField {
        name: "joist_span_ft",
        label: "Joist span (ft)",
        min: 0.1,
        max: 18.0,
        default: 10.0,
    };
    const BEAM_SPAN: NumericField = NumericField {
        name: "beam_span_ft",
        label: "Beam span between posts (ft)",
        min: 0.1,
        max: 20.0,
        default: 7.0,
    };

    let species = SpeciesGroup::from_key(&prompt_raw("Species (SP/DF-L/HF/SPF/cedar) [SP]"))
        .unwrap_or(SpeciesGroup::SouthernPine);

    let input = DeckBeamInput {
        label: "CLI".to_string(),
        joist_span_ft: prompt_field(&JOIST_SPAN),
        beam_span_ft: prompt_field(&BEAM_SPAN),
        species,
    };

    match deck::calculate_beam(&input) {
        Ok(result) => {
            print_results("DECK BEAM SIZING", &result.summary_rows());
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_deck_joist() {
    const SPAN: NumericField = NumericField {
        name: "span_ft",
        label: "Joist span (ft)",
        min: 0.1,
        max: 20.0,
        default: 12.0,
    };

    let spacing = JoistSpacing::from_key(&prompt_raw("Joist spacing in inches (12/16/24) [16]"))
        .unwrap_or(JoistSpacing::In16);
    let species = SpeciesGroup::from_key(&prompt_raw("Species (SP/DF-L/HF/SPF/cedar) [SP]"))
        .unwrap_or(SpeciesGroup::SouthernPine);

    let input = DeckJoistInput {
        label: "CLI".to_string(),
        span_ft: prompt_field(&SPAN),
        spacing,
        species,
    };

    match deck::calculate_joist(&input) {
        Ok(result) => {
            print_results("DECK JOIST SIZING", &result.summary_rows());
            println!();
            println!("  Allowable span by spacing:");
            for option in &result.spacing_options {
                println!(
                    "    {:>2}\" o.c.: {:.2} ft",
                    option.spacing.inches(),
                    option.allowable_span_ft
                );
            }
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_septic() {
    let bedrooms = prompt_count(&BEDROOMS);

    let garbage_disposal = parse_flag("garbage_disposal", &prompt_raw("Garbage disposal? (yes/no) [no]"))
        .unwrap_or(false);

    let input = SepticInput {
        label: "CLI".to_string(),
        bedrooms,
        garbage_disposal,
    };

    match septic::calculate(&input) {
        Ok(result) => {
            print_results("SEPTIC TANK SIZING", &result.summary_rows());
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_investment() {
    const INITIAL: NumericField = NumericField {
        name: "initial_balance_usd",
        label: "Starting balance ($)",
        min: 0.0,
        max: 1_000_000_000.0,
        default: 10_000.0,
    };
    const YIELD: NumericField = NumericField {
        name: "annual_yield",
        label: "Annual yield (%)",
        min: 0.01,
        max: 50.0,
        default: 4.0,
    };
    const CONTRIBUTION: NumericField = NumericField {
        name: "monthly_contribution_usd",
        label: "Monthly contribution ($)",
        min: 0.0,
        max: 1_000_000.0,
        default: 500.0,
    };
    let input = InvestmentInput {
        label: "CLI".to_string(),
        initial_balance_usd: prompt_field(&INITIAL),
        annual_yield: Percent(prompt_field(&YIELD)),
        monthly_contribution_usd: prompt_field(&CONTRIBUTION),
        years: prompt_count(&PROJECTION_YEARS),
        reinvest_dividends: parse_flag("reinvest_dividends", &prompt_raw("Reinvest dividends? (yes/no) [yes]"))
            .unwrap_or(true),
    };

    match investment::calculate(&input) {
        Ok(result) => {
            print_results("INVESTMENT PROJECTION", &result.summary_rows());
            println!();
            println!("  Year-by-year:");
            for row in &result.yearly {
                println!(
                    "    Year {:>2}: balance ${:>14.2}  dividends ${:>10.2}",
                    row.year, row.end_balance_usd, row.dividends_usd
                );
            }
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn main() {
    println!("FreeToolsHub CLI");
    println!("================");
    println!();
    println!("  1. Balloon mortgage");
    println!("  2. AC power");
    println!("  3. Series capacitance");
    println!("  4. Deck beam sizing");
    println!("  5. Deck joist sizing");
    println!("  6. Septic tank sizing");
    println!("  7. Investment projection");
    println!();

    match prompt_raw("Choose a tool (1-7)").as_str() {
        "1" => run_balloon_mortgage(),
        "2" => run_power(),
        "3" => run_capacitance(),
        "4" => run_deck_beam(),
        "5" => run_deck_joist(),
        "6" => run_septic(),
        "7" => run_investment(),
        other => {
            eprintln!("Unknown tool: {other}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_number_fields_reject_fractional_input() {
        // "30.5 years" must surface as an error, not truncate to 30
        assert_eq!(parse_count(&AMORT_YEARS, "30.5").unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(parse_count(&BALLOON_YEARS, "5.5").unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(parse_count(&PROJECTION_YEARS, "10.5").unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(parse_count(&CAPACITOR_COUNT, "2.5").unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(parse_count(&BEDROOMS, "3.5").unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_whole_number_fields_accept_whole_input() {
        assert_eq!(parse_count(&AMORT_YEARS, "30").unwrap(), 30);
        assert_eq!(parse_count(&BALLOON_YEARS, "5").unwrap(), 5);
        assert_eq!(parse_count(&CAPACITOR_COUNT, "4").unwrap(), 4);
    }
}
