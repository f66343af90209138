use anyhow::Result;
use pet_checkin::{CheckInError, CheckInSession, ConsoleInput, FacilityConfig, PromptOptions};
use std::io::Cursor;
use std::io::Write;
use tempfile::NamedTempFile;

fn session(
    script: &str,
    options: PromptOptions,
) -> CheckInSession<ConsoleInput<Cursor<Vec<u8>>>, Vec<u8>> {
    let record = FacilityConfig::default().initial_record();
    let input = ConsoleInput::new(Cursor::new(script.as_bytes().to_vec()));
    CheckInSession::new(record, input, Vec::new(), options)
}

#[test]
fn test_full_check_in() -> Result<()> {
    let script = "1\ncat\n3\nMittens\n2\n2\n4\n4\n5\n140.50\n7\n11\n8\n0\n";
    let mut session = session(script, PromptOptions::default());

    session.run()?;

    let (record, _input, out) = session.into_parts();
    assert_eq!(record.pet_type(), "cat");
    assert_eq!(record.pet_name(), "Mittens");
    assert_eq!(record.pet_age(), 2);
    assert_eq!(record.days_stay(), 4);
    assert_eq!(record.amount_due(), 140.5);
    assert_eq!(record.dog_spaces(), 30);
    assert_eq!(record.cat_spaces(), 11);

    let out = String::from_utf8(out)?;
    assert!(out.contains("Welcome! Mittens"));
    assert!(out.contains("Pet: Mittens (cat)"));
    assert!(out.contains("Amount Due: $140.50"));
    assert!(out.trim_end().ends_with("Goodbye!"));
    Ok(())
}

#[test]
fn test_invalid_option_keeps_session_running() -> Result<()> {
    let mut session = session("9\nhello\n6\n25\n0\n", PromptOptions::default());

    let record = session.run()?;
    assert_eq!(record.dog_spaces(), 25);

    let (_record, _input, out) = session.into_parts();
    let out = String::from_utf8(out)?;
    assert_eq!(out.matches("Invalid option.").count(), 2);
    Ok(())
}

#[test]
fn test_rejected_pet_type_keeps_session_running() -> Result<()> {
    let mut session = session("1\nbird\n1\ndog\n0\n", PromptOptions::default());

    let record = session.run()?;
    assert_eq!(record.pet_type(), "dog");
    Ok(())
}

#[test]
fn test_malformed_number_aborts_session() {
    let mut session = session("4\nfive\n0\n", PromptOptions::default());

    let result = session.run();
    assert!(matches!(result, Err(CheckInError::InvalidNumber { .. })));
    assert_eq!(session.record().days_stay(), 0);
}

#[test]
fn test_malformed_amount_aborts_session() {
    let mut session = session("5\n$12\n0\n", PromptOptions::default());

    let result = session.run();
    assert!(matches!(result, Err(CheckInError::InvalidNumber { .. })));
    assert_eq!(session.record().amount_due(), 0.0);
}

#[test]
fn test_closed_input_ends_session_with_error() {
    let mut session = session("3\nRex\n", PromptOptions::default());

    let result = session.run();
    assert!(matches!(result, Err(CheckInError::InputClosed)));
    assert_eq!(session.record().pet_name(), "Rex");
}

#[test]
fn test_legacy_options_flow_through_session() -> Result<()> {
    let mut session = session("1\ncat\n2\n5\n0\n", PromptOptions::legacy());

    let record = session.run()?;
    assert_eq!(record.pet_type(), "dog");
    assert_eq!(record.pet_age(), 0);
    Ok(())
}

#[test]
fn test_session_from_facility_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(
        br#"
[facility]
name = "Grazioso Salvare"
dog_spaces = 18
cat_spaces = 6

[prompts]
type_matching = "normalized"
"#,
    )?;

    let facility = FacilityConfig::from_file(file.path())?;
    let input = ConsoleInput::new(Cursor::new(b"1\n DOG\n0\n".to_vec()));
    let mut session = CheckInSession::new(
        facility.initial_record(),
        input,
        Vec::new(),
        facility.prompts,
    );

    let record = session.run()?;
    assert_eq!(record.pet_type(), "dog");
    assert_eq!(record.dog_spaces(), 18);
    assert_eq!(record.cat_spaces(), 6);
    Ok(())
}
