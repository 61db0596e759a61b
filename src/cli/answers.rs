use crate::{
    cli::args::{parse_bool_flag, Args},
    config::{find_field, FieldKind},
    constants::STDIN_INDICATOR,
    error::Result,
    ioutils::{parse_string_to_json, read_from},
    store::Values,
};
use serde_json::{Map, Value};

/// Reads the `--answers` argument, from stdin when it is `-`.
pub fn read_answers(answers_arg: &str) -> Result<Map<String, Value>> {
    let answers_str = if answers_arg == STDIN_INDICATOR {
        read_from(std::io::stdin())?
    } else {
        answers_arg.to_string()
    };
    parse_string_to_json(&answers_str)
}

/// Brings one answer to the type its field expects.
///
/// Boolean fields go through the flag truth table; other scalars become
/// strings. `None` drops the answer.
pub fn coerce_answer(name: &str, value: Value) -> Option<Value> {
    let kind = find_field(name).map(|field| field.kind);
    match (kind, value) {
        (_, Value::Null) => None,
        (Some(FieldKind::Boolean), Value::String(raw)) => parse_bool_flag(&raw).map(Value::Bool),
        (Some(FieldKind::Boolean), Value::Bool(flag)) => Some(Value::Bool(flag)),
        (Some(FieldKind::Boolean), Value::Number(n)) => Some(Value::Bool(n.as_f64() != Some(0.0))),
        (Some(_), Value::Number(n)) => Some(Value::String(n.to_string())),
        (_, other) => Some(other),
    }
}

/// Raw options for a run: `--answers` first, explicit flags on top.
pub fn collect_options(args: &Args) -> Result<Values> {
    let mut options = Values::new();

    if let Some(answers_arg) = &args.answers {
        let answers = read_answers(answers_arg)?;
        log::debug!("Answers supplied with --answers: {answers:?}");
        for (name, value) in answers {
            if let Some(value) = coerce_answer(&name, value) {
                options.insert(name, value);
            }
        }
    }

    options.extend(args.field_options());
    options.extend(args.dry_run_options());
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;

    #[test]
    fn coerces_answers_by_field_kind() {
        assert_eq!(coerce_answer("isForm", json!("n")), Some(json!(false)));
        assert_eq!(coerce_answer("isForm", json!(1)), Some(json!(true)));
        assert_eq!(coerce_answer("usesMinimalHeader", json!("")), None);
        assert_eq!(coerce_answer("respondentBurden", json!(45)), Some(json!("45")));
        assert_eq!(coerce_answer("appName", Value::Null), None);
        assert_eq!(coerce_answer("custom", json!(3)), Some(json!(3)));
    }

    #[test]
    fn flags_override_answers() {
        let args = Args::parse_from([
            "appgen",
            "--answers",
            r#"{"appName": "From Answers", "folderName": "answers", "isForm": "false"}"#,
            "--app-name",
            "From Flag",
            "--dry-run",
        ]);
        let options = collect_options(&args).unwrap();
        assert_eq!(options["appName"], json!("From Flag"));
        assert_eq!(options["folderName"], json!("answers"));
        assert_eq!(options["isForm"], json!(false));
        assert_eq!(options["dryRun"], json!(true));
    }

    #[test]
    fn rejects_non_object_answers() {
        let args = Args::parse_from(["appgen", "--answers", "[1]"]);
        assert!(collect_options(&args).is_err());
    }
}
