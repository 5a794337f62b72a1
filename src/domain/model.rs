use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A rental period as two calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whole days from start to end. Negative for inverted ranges.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Outcome of checking a proposed booking range. Errors keep the order in
/// which the checks ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

impl ValidationResult {
    pub fn has_error(&self, message: &str) -> bool {
        self.errors.iter().any(|e| e == message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub days: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Authenticated session as kept by the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Validate for Credentials {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("credentials.email", &self.email)?;
        validate_non_empty_string("credentials.password", &self.password)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Validate for Registration {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("registration.name", &self.name)?;
        validate_non_empty_string("registration.email", &self.email)?;
        validate_non_empty_string("registration.password", &self.password)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Session {
            token: response.token,
            user: response.user,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_result_serializes_camel_case() {
        let result = ValidationResult {
            is_valid: true,
            errors: vec![],
            duration: Some(3),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isValid"], true);
        assert_eq!(json["duration"], 3);
    }

    #[test]
    fn test_duration_omitted_when_not_computed() {
        let result = ValidationResult {
            is_valid: false,
            errors: vec!["Start date is invalid".to_string()],
            duration: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("duration").is_none());
    }

    #[test]
    fn test_blank_credentials_rejected() {
        let credentials = Credentials {
            email: "asha@example.com".to_string(),
            password: "  ".to_string(),
        };
        assert!(credentials.validate().is_err());

        let registration = Registration {
            name: "".to_string(),
            email: "asha@example.com".to_string(),
            password: "secret".to_string(),
            phone: None,
        };
        assert!(registration.validate().is_err());
    }

    #[test]
    fn test_date_range_days() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 2, 27).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
        );
        assert_eq!(range.days(), 3);
    }
}
