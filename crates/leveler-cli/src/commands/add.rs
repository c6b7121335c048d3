//! `add`: insert one record.

use clap::Args;
use serde_json::Value;

use crate::context::Context;
use crate::error::CliError;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Cell values as COLUMN=VALUE. VALUE is read as JSON when it parses,
    /// otherwise as text.
    #[arg(long = "set", value_name = "COLUMN=VALUE")]
    pub set: Vec<String>,
}

pub fn handle_add(ctx: &Context, args: AddArgs) -> Result<(), CliError> {
    let pairs = args
        .set
        .iter()
        .map(|raw| parse_assignment(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let values: Vec<(&str, Value)> = pairs.iter().map(|(k, v)| (*k, v.clone())).collect();

    let store = ctx.table()?;
    let id = store.insert_record(&values)?;
    println!("{id}");
    Ok(())
}

/// Split `COLUMN=VALUE` on the first `=`.
pub(crate) fn parse_assignment(raw: &str) -> Result<(&str, Value), CliError> {
    let (column, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::InvalidInput(format!("expected COLUMN=VALUE, got '{raw}'")))?;
    if column.is_empty() {
        return Err(CliError::InvalidInput(format!("missing column name in '{raw}'")));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((column, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn values_parse_as_json_first() {
        assert_eq!(parse_assignment("Payable=100").unwrap(), ("Payable", json!(100)));
        assert_eq!(parse_assignment("OT Net=null").unwrap(), ("OT Net", json!(null)));
        assert_eq!(
            parse_assignment(r#"Actual={"value":3}"#).unwrap(),
            ("Actual", json!({"value": 3}))
        );
    }

    #[test]
    fn other_values_stay_text() {
        assert_eq!(parse_assignment("Notes=a=b").unwrap(), ("Notes", json!("a=b")));
        assert_eq!(parse_assignment("Actual=").unwrap(), ("Actual", json!("")));
    }

    #[test]
    fn malformed_assignments_are_rejected() {
        assert!(parse_assignment("Payable").is_err());
        assert!(parse_assignment("=5").is_err());
    }
}
