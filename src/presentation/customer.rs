use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Customer profile behind one or more accounts
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct Customer {
    /// Customer identifier, e.g. "me" for the authenticated customer
    pub id: String,
    pub prefix_name: Option<String>,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub suffix_name: Option<String>,
    pub first_surname: Option<String>,
    pub second_surname: Option<String>,
    /// Legal address
    pub address: Address,
    /// Address used for correspondence
    pub mailing_address: Address,
    /// Financial suitability questionnaire answers
    pub customer_suitability: CustomerSuitability,
    pub usa_citizenship_type: String,
    pub is_foreign: bool,
    pub mobile_phone_number: String,
    pub work_phone_number: Option<String>,
    pub home_phone_number: Option<String>,
    pub email: String,
    pub tax_number_type: String,
    pub tax_number: String,
    /// Birth date as `YYYY-MM-DD` text
    pub birth_date: String,
    pub external_id: String,
    pub citizenship_country: String,
    pub subject_to_tax_withholding: bool,
    pub agreed_to_margining: bool,
    pub agreed_to_terms: bool,
    pub signature_of_agreement: bool,
    pub gender: Option<String>,
    pub desk_customer_id: Option<String>,
    pub has_industry_affiliation: bool,
    pub has_listed_affiliation: bool,
    pub has_political_affiliation: bool,
    pub has_delayed_quotes: bool,
    pub has_pending_or_approved_application: bool,
    pub is_professional: bool,
    /// Account types this customer may open
    pub permitted_account_types: Vec<AccountType>,
    pub created_at: DateTime<Utc>,
    pub identifiable_type: String,
    /// Natural person details
    pub person: CustomerPerson,
}

/// Postal address
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct Address {
    pub street_one: String,
    pub street_two: Option<String>,
    pub street_three: Option<String>,
    pub city: String,
    pub state_region: String,
    pub postal_code: String,
    pub country: String,
    pub is_foreign_address: bool,
    pub is_domestic_address: bool,
}

/// Suitability answers used to grant trading permissions
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct CustomerSuitability {
    pub id: i64,
    pub customer_id: i64,
    pub marital_status: String,
    pub number_of_dependents: i64,
    pub employment_status: String,
    pub occupation: Option<String>,
    pub employer_name: Option<String>,
    pub job_title: Option<String>,
    pub annual_net_income: i64,
    pub net_worth: i64,
    pub liquid_net_worth: i64,
    pub stock_trading_experience: String,
    pub covered_options_trading_experience: String,
    pub uncovered_options_trading_experience: String,
    pub futures_trading_experience: String,
    pub tax_bracket: Option<String>,
}

/// Personal details of the customer
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct CustomerPerson {
    pub external_id: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    /// Birth date as `YYYY-MM-DD` text
    pub birth_date: String,
    pub birth_country: String,
    pub citizenship_country: String,
    pub usa_citizenship_type: String,
    pub marital_status: String,
    pub number_of_dependents: i64,
    pub employment_status: String,
    pub occupation: Option<String>,
    pub employer_name: Option<String>,
    pub job_title: Option<String>,
}

/// Kind of account a customer can hold
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct AccountType {
    pub name: String,
    pub description: String,
    pub is_tax_advantaged: bool,
    pub has_multiple_owners: bool,
    pub is_publicly_available: bool,
    /// Margin types available for this account type
    pub margin_types: Vec<MarginType>,
}

/// Margin type offered for an account type
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct MarginType {
    pub name: String,
    pub is_margin: bool,
}
