//! Registration forms (players and managers) and acceptance receipts.
//!
//! Registrations are acknowledged, never stored or forwarded: the server
//! validates the form, simulates processing, and hands back a receipt. The
//! payment proof stays on the registrant's machine; only a filename reference
//! travels with the form.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::player::Position;

/// Validation errors for registration forms.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistrationError {
    /// A required field was empty or missing.
    MissingField(&'static str),
}

impl std::fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrationError::MissingField(field) => {
                write!(f, "Required field '{}' is missing", field)
            }
        }
    }
}

/// Player registration form (auction pool applicants).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PlayerRegistrationForm {
    pub name: String,
    pub email: String,
    pub roll_no: String,
    pub phone: String,
    #[serde(default)]
    pub position: Position,
    /// Photo as a data URL, if the registrant attached one.
    pub image: Option<String>,
    /// Filename reference only; the file itself never leaves the client.
    pub payment_proof: Option<String>,
    pub transaction_id: String,
}

impl PlayerRegistrationForm {
    pub fn validate(&self) -> Result<(), RegistrationError> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        require(&self.roll_no, "roll_no")?;
        require(&self.phone, "phone")?;
        require(&self.transaction_id, "transaction_id")?;
        Ok(())
    }
}

/// Manager registration form (team management enrollment).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ManagerRegistrationForm {
    pub name: String,
    pub email: String,
    pub roll_no: String,
    pub phone: String,
    pub image: Option<String>,
    pub payment_proof: Option<String>,
    pub transaction_id: String,
}

impl ManagerRegistrationForm {
    pub fn validate(&self) -> Result<(), RegistrationError> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        require(&self.roll_no, "roll_no")?;
        require(&self.phone, "phone")?;
        require(&self.transaction_id, "transaction_id")?;
        Ok(())
    }
}

fn require(value: &str, field: &'static str) -> Result<(), RegistrationError> {
    if value.trim().is_empty() {
        return Err(RegistrationError::MissingField(field));
    }
    Ok(())
}

/// Acceptance receipt returned to the registrant.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    pub id: Uuid,
    /// Human-quotable code, e.g. "MSL-042719".
    pub confirmation_code: String,
    pub received_at: DateTime<Utc>,
}

impl RegistrationReceipt {
    /// Receipt stamped now with a fresh confirmation code.
    pub fn issue() -> Self {
        let code: u32 = rand::thread_rng().gen_range(0..1_000_000);
        Self {
            id: Uuid::new_v4(),
            confirmation_code: format!("MSL-{:06}", code),
            received_at: Utc::now(),
        }
    }
}
