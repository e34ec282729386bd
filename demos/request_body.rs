//! Request Body Validation
//!
//! This example validates incoming JSON bodies the way an HTTP handler would.
//!
//! Key concepts:
//! - Full-object checks for create requests
//! - Patch-style checks for update requests
//! - Raised errors carrying a 400 status vs quiet `false` results
//! - Auditing every failing rule at once
//!
//! Run with: cargo run --example request_body

use serde_json::json;
use shapeguard::core::{Kind, Value};
use shapeguard::patterns;
use shapeguard::rules::{ErrorPayload, RegexRule, RuleSet, RuleSetBuilder, TypeRule};
use stillwater::validation::Validation;

fn event_rules() -> RuleSet {
    RuleSetBuilder::new()
        .require_type(
            TypeRule::new("title", Kind::String)
                .with_error(ErrorPayload::invalid_request("title is required.")),
        )
        .require_type(TypeRule::new("description", Kind::String).allow_null())
        .require_pattern(
            RegexRule::new("start", patterns::iso_date_15min_increments().clone())
                .with_error(ErrorPayload::invalid_request("start is invalid.")),
        )
        .require_pattern(RegexRule::new(
            "end",
            patterns::iso_date_15min_increments().clone(),
        ))
        .build()
}

fn profile_rules() -> RuleSet {
    RuleSetBuilder::new()
        .field_pattern("name", patterns::name().clone())
        .field_pattern("phone", patterns::phone().clone())
        .field_pattern("email", patterns::email().clone())
        .build()
}

/// Map a validation outcome to the status code a handler would send.
fn respond(label: &str, outcome: Result<bool, shapeguard::ValidationError>) {
    match outcome {
        Ok(true) => println!("  {label}: 200 OK"),
        Ok(false) => println!("  {label}: 400 (rejected)"),
        Err(err) => println!(
            "  {label}: {} {} - {}",
            err.status().unwrap_or(500),
            err.name(),
            err.payload().message
        ),
    }
}

fn main() {
    println!("=== Request Body Validation Example ===\n");

    // Example 1: Create requests need every field
    println!("Example 1: Create event");
    let rules = event_rules();

    let good = Value::from(json!({
        "title": "Standup",
        "description": null,
        "start": "2023-06-01T10:15:00.000Z",
        "end": "2023-06-01T10:30:00.000Z"
    }));
    respond("well formed", rules.validate(&good));

    let off_grid = Value::from(json!({
        "title": "Standup",
        "description": "daily",
        "start": "2023-06-01T10:10:00.000Z",
        "end": "2023-06-01T10:30:00.000Z"
    }));
    respond("off-grid start", rules.validate(&off_grid));

    let no_end = Value::from(json!({
        "title": "Standup",
        "description": "daily",
        "start": "2023-06-01T10:15:00.000Z"
    }));
    respond("missing end", rules.validate(&no_end));
    if let Ok(Some(failure)) = rules.check(&no_end) {
        println!("    -> {:?} on {:?}", failure.kind, failure.property);
    }

    // Example 2: Audit reports every problem in one pass
    println!("\nExample 2: Audit a bad body");
    let bad = Value::from(json!({ "title": 42, "start": "tomorrow" }));
    match rules.audit(&bad) {
        Validation::Success(_) => println!("  no problems"),
        Validation::Failure(failures) => {
            for failure in failures.iter() {
                println!("  {:?} on {:?}", failure.kind, failure.property);
            }
        }
    }

    // Example 3: Update requests may carry any subset of fields
    println!("\nExample 3: Update profile");
    let rules = profile_rules();

    respond(
        "phone only",
        rules.validate_partial(&Value::from(json!({ "phone": "5551234567" }))),
    );
    respond(
        "bad email",
        rules.validate_partial(&Value::from(json!({ "email": "nope" }))),
    );
    respond(
        "extra field",
        rules.validate_partial(&Value::from(json!({ "phone": "5551234567", "is_admin": true }))),
    );
    respond("empty body", rules.validate_partial(&Value::from(json!({}))));

    println!("\n=== Example Complete ===");
}
