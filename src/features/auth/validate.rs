//! Client-side signup form validation.

use crate::features::auth::types::SignupRequest;

pub const PHONE_LENGTH: usize = 10;

/// Checks the signup form before anything is sent to the backend.
///
/// Rules run in order and the first failure wins, so a form with several
/// problems shows one message at a time.
pub fn validate(form: &SignupRequest) -> Result<(), &'static str> {
    let required = [
        form.name.trim(),
        form.email.trim(),
        form.phone.trim(),
        form.password.as_str(),
        form.confirm_password.as_str(),
        form.address.trim(),
    ];
    if required.iter().any(|field| field.is_empty()) {
        return Err("All fields are required");
    }

    if form.password != form.confirm_password {
        return Err("Password and confirm password do not match");
    }

    let phone = form.phone.trim();
    if phone.len() != PHONE_LENGTH || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err("Phone number must be exactly 10 digits");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::features::auth::types::SignupRequest;

    fn filled() -> SignupRequest {
        SignupRequest {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "5551234567".into(),
            password: "s3cret-pass".into(),
            confirm_password: "s3cret-pass".into(),
            address: "1 Analytical Engine Way".into(),
        }
    }

    #[test]
    fn accepts_a_complete_form() {
        assert_eq!(validate(&filled()), Ok(()));
    }

    #[test]
    fn any_blank_field_is_rejected() {
        for blank in ["name", "email", "phone", "password", "confirm", "address"] {
            let mut form = filled();
            match blank {
                "name" => form.name = "   ".into(),
                "email" => form.email = String::new(),
                "phone" => form.phone = String::new(),
                "password" => form.password = String::new(),
                "confirm" => form.confirm_password = String::new(),
                _ => form.address = String::new(),
            }
            assert_eq!(validate(&form), Err("All fields are required"));
        }
    }

    #[test]
    fn password_mismatch_wins_over_phone_format() {
        let mut form = filled();
        form.confirm_password = "different".into();
        form.phone = "12".into();
        assert_eq!(
            validate(&form),
            Err("Password and confirm password do not match")
        );
    }

    #[test]
    fn phone_must_be_ten_digits() {
        let mut form = filled();
        form.phone = "555123456".into();
        assert_eq!(
            validate(&form),
            Err("Phone number must be exactly 10 digits")
        );

        form.phone = "555123456a".into();
        assert_eq!(
            validate(&form),
            Err("Phone number must be exactly 10 digits")
        );

        form.phone = " 5551234567 ".into();
        assert_eq!(validate(&form), Ok(()));
    }
}
