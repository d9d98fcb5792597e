use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
    assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
}

#[test]
fn output_format_rejects_unknown() {
    assert!("yaml".parse::<OutputFormat>().is_err());
    assert!("".parse::<OutputFormat>().is_err());
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}
