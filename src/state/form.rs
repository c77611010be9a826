/// Contact form fields as read out of the submitted FormData.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
    pub terms: bool,
}

/// Local validation, checked before any request is made. Returns the
/// message to toast on the first failing rule.
pub fn validate_contact(fields: &ContactFields) -> Result<(), &'static str> {
    let required = [
        &fields.first_name,
        &fields.last_name,
        &fields.email,
        &fields.service,
        &fields.message,
    ];
    if required.iter().any(|value| value.trim().is_empty()) {
        return Err("Please fill in all required fields");
    }
    if !fields.terms {
        return Err("Please accept the terms and conditions");
    }
    if !is_valid_email(&fields.email) {
        return Err("Please enter a valid email address");
    }
    Ok(())
}

pub fn validate_newsletter(email: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() {
        return Err("Please enter your email address");
    }
    if !is_valid_email(email) {
        return Err("Please enter a valid email address");
    }
    Ok(())
}

/// Same shape check the site has always used: a local part and a domain
/// with an interior dot, no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "user@example.com".into(),
            phone: String::new(),
            company: String::new(),
            service: "web-development".into(),
            message: "Hello".into(),
            terms: true,
        }
    }

    #[test]
    fn accepts_a_fully_filled_form() {
        assert_eq!(validate_contact(&filled()), Ok(()));
    }

    #[test]
    fn rejects_any_empty_required_field() {
        for field in ["first_name", "last_name", "email", "service", "message"] {
            let mut fields = filled();
            match field {
                "first_name" => fields.first_name.clear(),
                "last_name" => fields.last_name.clear(),
                "email" => fields.email.clear(),
                "service" => fields.service.clear(),
                _ => fields.message.clear(),
            }
            assert_eq!(
                validate_contact(&fields),
                Err("Please fill in all required fields"),
                "field {}",
                field
            );
        }
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let mut fields = filled();
        fields.phone.clear();
        fields.company.clear();
        assert_eq!(validate_contact(&fields), Ok(()));
    }

    #[test]
    fn rejects_unchecked_terms() {
        let mut fields = filled();
        fields.terms = false;
        assert_eq!(
            validate_contact(&fields),
            Err("Please accept the terms and conditions")
        );
    }

    #[test]
    fn rejects_malformed_email() {
        let mut fields = filled();
        fields.email = "a@b".into();
        assert_eq!(
            validate_contact(&fields),
            Err("Please enter a valid email address")
        );
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.co"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com."));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn newsletter_requires_an_address_first() {
        assert_eq!(
            validate_newsletter(""),
            Err("Please enter your email address")
        );
        assert_eq!(
            validate_newsletter("not-an-email"),
            Err("Please enter a valid email address")
        );
        assert_eq!(validate_newsletter("user@example.com"), Ok(()));
    }
}
