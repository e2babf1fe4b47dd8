//! The interactive budgeting session.
//!
//! A linear sequence of prompts with local retry loops, ending in a printed
//! summary and an optional schedule export.

use std::path::PathBuf;

use chrono::Local;
use rust_decimal::Decimal;
use tracing::warn;

use rentquote_core::format::format_currency;
use rentquote_core::pricing::{
    PricingConfig, PricingService, PropertyDetails, PropertyType, Quote,
};
use rentquote_core::schedule::{build_schedule, export_file_name, export_to_file};

use crate::error::{CliError, CliResult};
use crate::prompt;

/// Runs the whole session: prompts, pricing, summary, optional export.
pub fn run(config: &PricingConfig) -> CliResult<()> {
    println!("--- Rental Budgeting CLI - R.M. Realty ---\n");

    let client_name = prompt::prompt_line("Client name: ")?;
    if client_name.is_empty() {
        return Err(CliError::BlankClientName);
    }

    let property_type = choose_property_type(config)?;
    let details = collect_details(property_type)?;
    let has_children = prompt::prompt_yes_no("Does the client have children?")?;

    let installments_label = format!(
        "Contract installments ({} to {}): ",
        config.min_installments, config.max_installments
    );
    let num_installments = prompt::prompt_validated(&installments_label, |answer| {
        parse_installments(answer, config)
    })?;

    let quote = PricingService::quote(
        config,
        client_name,
        property_type,
        details,
        has_children,
        num_installments,
    )?;
    let installment_amount = PricingService::contract_installment_amount(config, num_installments)?;

    print_summary(&quote, installment_amount);

    if prompt::prompt_yes_no(
        "Export a .csv schedule with the 12 monthly totals? \
         (contract installments appear only in the first months)",
    )? {
        export_schedule(&quote, installment_amount);
    }

    println!("\nBudget complete. Thank you!");
    Ok(())
}

/// Shows the numbered menu until a valid option is chosen.
fn choose_property_type(config: &PricingConfig) -> CliResult<PropertyType> {
    loop {
        println!("Choose the property type:");
        println!("  1) Apartment ({})", format_currency(config.apartment_base));
        println!("  2) House ({})", format_currency(config.house_base));
        println!("  3) Studio ({})", format_currency(config.studio_base));

        let answer = prompt::prompt_line("Enter 1, 2 or 3: ")?;
        match parse_property_choice(&answer) {
            Ok(property_type) => return Ok(property_type),
            Err(message) => println!("{message}\n"),
        }
    }
}

/// Prompts for the type-specific inputs.
fn collect_details(property_type: PropertyType) -> CliResult<PropertyDetails> {
    match property_type {
        PropertyType::Apartment | PropertyType::House => {
            let rooms = prompt::prompt_validated("Number of rooms (1 or 2): ", parse_rooms)?;
            let has_garage = prompt::prompt_yes_no("Include a garage space?")?;
            Ok(PropertyDetails::Residence { rooms, has_garage })
        }
        PropertyType::Studio => {
            let parking_slots =
                prompt::prompt_validated("How many parking slots? (0 for none): ", parse_slots)?;
            Ok(PropertyDetails::Studio { parking_slots })
        }
    }
}

fn parse_property_choice(answer: &str) -> Result<PropertyType, String> {
    match answer {
        "1" => Ok(PropertyType::Apartment),
        "2" => Ok(PropertyType::House),
        "3" => Ok(PropertyType::Studio),
        _ => Err("Invalid option. Enter 1, 2 or 3.".to_string()),
    }
}

fn parse_rooms(answer: &str) -> Result<u8, String> {
    match answer {
        "1" => Ok(1),
        "2" => Ok(2),
        _ => Err("Invalid value. Enter 1 or 2.".to_string()),
    }
}

fn parse_slots(answer: &str) -> Result<u32, String> {
    answer
        .parse::<u32>()
        .map_err(|_| "Enter a whole number, 0 or more.".to_string())
}

fn parse_installments(answer: &str, config: &PricingConfig) -> Result<u8, String> {
    let count: u8 = answer
        .parse()
        .map_err(|_| "Enter a whole number.".to_string())?;
    if (config.min_installments..=config.max_installments).contains(&count) {
        Ok(count)
    } else {
        Err(format!(
            "Invalid installment count. Enter a value from {} to {}.",
            config.min_installments, config.max_installments
        ))
    }
}

/// Prints the budget summary.
fn print_summary(quote: &Quote, installment_amount: Decimal) {
    println!("\n--- Budget Summary ---");
    println!("Client: {}", quote.client_name);
    println!("Property type: {}", quote.property_type);

    match quote.details {
        PropertyDetails::Residence { rooms, has_garage } => {
            println!("Rooms: {rooms}");
            println!("Garage space: {}", if has_garage { "yes" } else { "no" });
        }
        PropertyDetails::Studio { parking_slots } => {
            println!("Parking slots requested: {parking_slots}");
        }
    }

    println!(
        "Monthly rent (after adjustments): {}",
        format_currency(quote.monthly_rent)
    );
    println!("Contract fee: {}", format_currency(quote.contract_fee));
    println!(
        "Contract installments: {}x of {}",
        quote.num_installments,
        format_currency(installment_amount)
    );
}

/// Builds and writes the schedule file, reporting the absolute path.
///
/// A write failure is reported and the session continues to the closing
/// message; there is no retry.
fn export_schedule(quote: &Quote, installment_amount: Decimal) {
    let schedule = build_schedule(quote.monthly_rent, installment_amount, quote.num_installments);
    let path = PathBuf::from(export_file_name(&quote.client_name, Local::now()));

    match export_to_file(&schedule, &path) {
        Ok(()) => {
            let absolute = path.canonicalize().unwrap_or_else(|_| path.clone());
            println!("Schedule written to {}", absolute.display());
        }
        Err(err) => {
            warn!(error = %err, "Schedule export failed");
            eprintln!("Could not write the schedule file: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_property_choice_covers_menu() {
        assert_eq!(parse_property_choice("1"), Ok(PropertyType::Apartment));
        assert_eq!(parse_property_choice("2"), Ok(PropertyType::House));
        assert_eq!(parse_property_choice("3"), Ok(PropertyType::Studio));
        assert!(parse_property_choice("4").is_err());
        assert!(parse_property_choice("apartment").is_err());
    }

    #[test]
    fn test_parse_rooms_restricted_to_one_or_two() {
        assert_eq!(parse_rooms("1"), Ok(1));
        assert_eq!(parse_rooms("2"), Ok(2));
        assert!(parse_rooms("3").is_err());
        assert!(parse_rooms("0").is_err());
        assert!(parse_rooms("two").is_err());
    }

    #[test]
    fn test_parse_slots_rejects_negative_and_garbage() {
        assert_eq!(parse_slots("0"), Ok(0));
        assert_eq!(parse_slots("4"), Ok(4));
        assert!(parse_slots("-1").is_err());
        assert!(parse_slots("four").is_err());
        assert!(parse_slots("").is_err());
    }

    #[test]
    fn test_parse_installments_respects_configured_range() {
        let config = PricingConfig::default();
        assert_eq!(parse_installments("1", &config), Ok(1));
        assert_eq!(parse_installments("5", &config), Ok(5));
        assert!(parse_installments("0", &config).is_err());
        assert!(parse_installments("6", &config).is_err());
        assert!(parse_installments("abc", &config).is_err());
    }
}
