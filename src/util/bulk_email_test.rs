use super::*;

fn emails(addrs: &[&str]) -> Vec<String> {
    addrs.iter().map(|a| (*a).to_owned()).collect()
}

#[test]
fn empty_selection_is_rejected() {
    assert_eq!(mailto_href(&[]), Err(BulkEmailError::NothingSelected));
}

#[test]
fn blank_address_is_rejected() {
    assert_eq!(
        mailto_href(&emails(&["a@example.org", ""])),
        Err(BulkEmailError::MissingAddress)
    );
}

#[test]
fn blank_address_wins_over_empty_check_message() {
    // A selection containing only a blank address reports the address
    // problem, not "select at least one person".
    assert_eq!(mailto_href(&emails(&[""])), Err(BulkEmailError::MissingAddress));
}

#[test]
fn single_address_goes_to_bcc() {
    assert_eq!(
        mailto_href(&emails(&["a@example.org"])),
        Ok("mailto:?bcc=a@example.org".to_owned())
    );
}

#[test]
fn addresses_are_comma_joined() {
    assert_eq!(
        mailto_href(&emails(&["a@example.org", "b@example.org"])),
        Ok("mailto:?bcc=a@example.org,b@example.org".to_owned())
    );
}

#[test]
fn error_messages_name_the_fix() {
    assert!(BulkEmailError::NothingSelected.user_message().contains("at least one"));
    assert!(BulkEmailError::MissingAddress.user_message().contains("unselect"));
}
