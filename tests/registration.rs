//! Integration tests for registration form validation and receipts.

use msl_auction_web::{
    ManagerRegistrationForm, PlayerRegistrationForm, Position, RegistrationError,
    RegistrationReceipt,
};

fn player_form() -> PlayerRegistrationForm {
    PlayerRegistrationForm {
        name: "Deb Samanta".to_string(),
        email: "deb_samantait@college.edu.in".to_string(),
        roll_no: "14200223025".to_string(),
        phone: "9800000000".to_string(),
        position: Position::Midfielder,
        image: None,
        payment_proof: Some("upi-screenshot.png".to_string()),
        transaction_id: "TXN-88431".to_string(),
    }
}

fn manager_form() -> ManagerRegistrationForm {
    ManagerRegistrationForm {
        name: "Ankit Roy".to_string(),
        email: "ankit_roy@college.edu.in".to_string(),
        roll_no: "14200221003".to_string(),
        phone: "9800000001".to_string(),
        image: None,
        payment_proof: None,
        transaction_id: "TXN-10021".to_string(),
    }
}

#[test]
fn valid_forms_pass() {
    assert_eq!(player_form().validate(), Ok(()));
    assert_eq!(manager_form().validate(), Ok(()));
}

#[test]
fn player_form_requires_name_and_transaction_id() {
    let mut form = player_form();
    form.name = "   ".to_string();
    assert_eq!(
        form.validate(),
        Err(RegistrationError::MissingField("name"))
    );

    let mut form = player_form();
    form.transaction_id = String::new();
    assert_eq!(
        form.validate(),
        Err(RegistrationError::MissingField("transaction_id"))
    );
}

#[test]
fn player_form_requires_phone() {
    let mut form = player_form();
    form.phone = "  ".to_string();
    assert_eq!(
        form.validate(),
        Err(RegistrationError::MissingField("phone"))
    );
}

#[test]
fn manager_form_requires_phone() {
    let mut form = manager_form();
    form.phone = String::new();
    assert_eq!(
        form.validate(),
        Err(RegistrationError::MissingField("phone"))
    );
}

#[test]
fn manager_form_requires_email() {
    let mut form = manager_form();
    form.email = String::new();
    assert_eq!(
        form.validate(),
        Err(RegistrationError::MissingField("email"))
    );
}

#[test]
fn receipts_carry_quotable_confirmation_codes() {
    let receipt = RegistrationReceipt::issue();
    assert!(receipt.confirmation_code.starts_with("MSL-"));
    assert_eq!(receipt.confirmation_code.len(), "MSL-".len() + 6);
    assert!(receipt.confirmation_code["MSL-".len()..]
        .chars()
        .all(|c| c.is_ascii_digit()));
}
