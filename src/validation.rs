//! Declarative per-field validation rules for request payloads.
//!
//! Each payload type has a rule table: an ordered list of predicate + message
//! pairs keyed by the wire field name. Every rule in a table is evaluated
//! (no short-circuit at the first failure) so a single submission surfaces
//! all of its field errors at once. Rules are pure functions of the payload,
//! no I/O.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::model::{
    auth::LoginDto,
    client::{CreateClientDto, UpdateClientDto},
};

/// Field name → ordered list of human-readable messages.
///
/// Keys are unique; message order follows rule-evaluation order.
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

pub const NAME_REQUIRED: &str = "name is required";
pub const NAME_MIN_LENGTH: &str = "name must be at least 3 characters";
pub const SALARY_NEGATIVE: &str = "salary must not be negative";
pub const COMPANY_VALUE_NEGATIVE: &str = "companyValue must not be negative";

/// A single field rule: the predicate returns true when the payload is
/// acceptable for this rule.
struct Rule<T> {
    field: &'static str,
    message: &'static str,
    check: fn(&T) -> bool,
}

const LOGIN_RULES: &[Rule<LoginDto>] = &[
    Rule {
        field: "name",
        message: NAME_REQUIRED,
        check: |dto| !dto.name.trim().is_empty(),
    },
    Rule {
        field: "name",
        message: NAME_MIN_LENGTH,
        check: |dto| dto.name.trim().chars().count() >= 3,
    },
];

// Create is deliberately laxer than update: name only needs to be non-empty
// after trimming, with no minimum length.
const CREATE_CLIENT_RULES: &[Rule<CreateClientDto>] = &[
    Rule {
        field: "name",
        message: NAME_REQUIRED,
        check: |dto| !dto.name.trim().is_empty(),
    },
    Rule {
        field: "salary",
        message: SALARY_NEGATIVE,
        check: |dto| dto.salary >= Decimal::ZERO,
    },
    Rule {
        field: "companyValue",
        message: COMPANY_VALUE_NEGATIVE,
        check: |dto| dto.company_value >= Decimal::ZERO,
    },
];

const UPDATE_CLIENT_RULES: &[Rule<UpdateClientDto>] = &[
    Rule {
        field: "name",
        message: NAME_REQUIRED,
        check: |dto| !dto.name.trim().is_empty(),
    },
    Rule {
        field: "name",
        message: NAME_MIN_LENGTH,
        check: |dto| dto.name.trim().chars().count() >= 3,
    },
    Rule {
        field: "salary",
        message: SALARY_NEGATIVE,
        check: |dto| dto.salary >= Decimal::ZERO,
    },
    Rule {
        field: "companyValue",
        message: COMPANY_VALUE_NEGATIVE,
        check: |dto| dto.company_value >= Decimal::ZERO,
    },
];

fn evaluate<T>(rules: &[Rule<T>], payload: &T) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    for rule in rules {
        if !(rule.check)(payload) {
            errors
                .entry(rule.field.to_string())
                .or_default()
                .push(rule.message.to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_login(dto: &LoginDto) -> Result<(), ValidationErrors> {
    evaluate(LOGIN_RULES, dto)
}

pub fn validate_create_client(dto: &CreateClientDto) -> Result<(), ValidationErrors> {
    evaluate(CREATE_CLIENT_RULES, dto)
}

pub fn validate_update_client(dto: &UpdateClientDto) -> Result<(), ValidationErrors> {
    evaluate(UPDATE_CLIENT_RULES, dto)
}
