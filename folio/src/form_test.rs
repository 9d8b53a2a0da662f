use super::*;

fn filled() -> ContactForm {
    ContactForm::new("Ada", "ada@example.com", "Hello there")
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn accepts_minimal_address() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last+tag@mail.example.org"));
}

#[test]
fn rejects_malformed_addresses() {
    for bad in ["a@b", "a b@c.com", "abc", "", "@b.co", "a@.co", "a@b.", "a@@b.co", "a@b@c.co", "a@b .co"] {
        assert!(!is_valid_email(bad), "{bad:?} should be rejected");
    }
}

#[test]
fn dots_may_repeat_inside_domain() {
    assert!(is_valid_email("a@b..c"));
    assert!(is_valid_email("a@.b.c"));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn filled_form_is_valid() {
    assert_eq!(filled().validate(), Ok(()));
}

#[test]
fn whitespace_only_field_counts_as_missing() {
    let mut form = filled();
    form.name = "   ".to_owned();
    assert_eq!(form.validate(), Err(FormError::MissingFields));
}

#[test]
fn missing_fields_reported_before_bad_email() {
    let form = ContactForm::new("", "nope", "");
    assert_eq!(form.validate(), Err(FormError::MissingFields));
}

#[test]
fn email_is_trimmed_before_shape_check() {
    let form = ContactForm::new("Ada", "  ada@example.com \n", "Hi");
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn bad_email_is_reported() {
    let form = ContactForm::new("Ada", "ada@example", "Hi");
    assert_eq!(form.validate(), Err(FormError::InvalidEmail));
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(FormError::MissingFields.to_string(), "Please fill in all fields.");
    assert_eq!(FormError::InvalidEmail.to_string(), "Please enter a valid email address.");
    assert_eq!(Notice::Acknowledged.message(), ACKNOWLEDGMENT);
}

// =============================================================
// Submission
// =============================================================

#[test]
fn successful_submit_clears_fields_and_acknowledges_once() {
    let mut form = filled();
    let mut shown = Vec::new();
    assert_eq!(submit(&mut form, &mut shown), Ok(()));
    assert!(form.is_blank());
    assert_eq!(shown, vec![Notice::Acknowledged]);
}

#[test]
fn empty_message_is_rejected_without_clearing() {
    let mut form = ContactForm::new("Ada", "ada@example.com", "");
    let before = form.clone();
    let mut shown = Vec::new();
    assert_eq!(submit(&mut form, &mut shown), Err(FormError::MissingFields));
    assert_eq!(form, before);
    assert_eq!(shown, vec![Notice::Rejected(FormError::MissingFields)]);
}

#[test]
fn invalid_email_is_rejected_without_clearing() {
    let mut form = ContactForm::new("Ada", "a b@c.com", "Hi");
    let before = form.clone();
    let mut shown = Vec::new();
    assert_eq!(submit(&mut form, &mut shown), Err(FormError::InvalidEmail));
    assert_eq!(form, before);
    assert_eq!(shown.len(), 1);
}
