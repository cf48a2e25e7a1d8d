//! Human-readable error descriptions and structured JSON error formatting.

use tcset_core::error::{BuildError, CalcError, TableError};

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    // Typed matches first
    if let Some(ce) = err.downcast_ref::<CalcError>() {
        return match ce {
            CalcError::InvalidNumber { field, input } => format!(
                "What happened: Could not read {field} value {input:?}.\nLikely causes: A typo, a unit suffix, or an empty field while --strict is set.\nHow to fix: Enter a plain number (e.g., 0.02), or drop --strict to read unreadable input as 0."
            ),
            CalcError::NegativeMeasurement { field, value } => format!(
                "What happened: {field} is negative ({value}).\nLikely causes: A stray minus sign; lengths cannot be below zero.\nHow to fix: Enter the distance as a positive number, or set input.policy = \"lenient\" to compute it anyway."
            ),
            CalcError::NonFinite { field } => format!(
                "What happened: {field} is not a finite number.\nLikely causes: inf or NaN was entered.\nHow to fix: Enter a plain number."
            ),
        };
    }

    if let Some(be) = err.downcast_ref::<BuildError>() {
        return match be {
            BuildError::InvalidDefaults(msg) => format!(
                "What happened: Invalid defaults ({msg}).\nLikely causes: Out-of-range values in [defaults].\nHow to fix: Edit the config file, then rerun."
            ),
        };
    }

    if let Some(te) = err.downcast_ref::<TableError>() {
        return format!(
            "What happened: {te}.\nLikely causes: Corrupted calibration data.\nHow to fix: Re-run with --log-level=debug and report the table name."
        );
    }

    // String-based heuristics for errors coming from config loading
    let msg = err.to_string();
    let lower = msg.to_ascii_lowercase();

    if lower.contains("read config") {
        return format!(
            "What happened: The config file could not be read.\nLikely causes: Wrong --config path or missing permissions.\nHow to fix: Check the path, or omit --config to use built-in defaults. Original: {msg}"
        );
    }

    if lower.contains("parse config") {
        return format!(
            "What happened: The config file is not valid TOML for this tool.\nLikely causes: A typo in a key or an unknown value (e.g., spool = \"third\").\nHow to fix: Compare with etc/tcset.toml. Original: {msg}"
        );
    }

    if lower.contains("must be") {
        return format!(
            "What happened: Configuration is invalid ({msg}).\nLikely causes: Out-of-range values in the TOML.\nHow to fix: Edit the config file and try again."
        );
    }

    // Generic fallback
    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Stable exit codes: unreadable input 3, negative length 4, anything else 1.
pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    match err.downcast_ref::<CalcError>() {
        Some(CalcError::InvalidNumber { .. } | CalcError::NonFinite { .. }) => 3,
        Some(CalcError::NegativeMeasurement { .. }) => 4,
        None => 1,
    }
}

/// Stable reason name for JSON output.
pub fn reason_name(err: &eyre::Report) -> &'static str {
    if let Some(ce) = err.downcast_ref::<CalcError>() {
        return match ce {
            CalcError::InvalidNumber { .. } => "InvalidNumber",
            CalcError::NegativeMeasurement { .. } => "NegativeMeasurement",
            CalcError::NonFinite { .. } => "NonFinite",
        };
    }
    if err.downcast_ref::<BuildError>().is_some() {
        return "InvalidDefaults";
    }
    "Error"
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use serde_json::json;

    let reason = reason_name(err);
    let msg = humanize(err);
    let details = match err.downcast_ref::<CalcError>() {
        Some(CalcError::InvalidNumber { field, input }) => {
            Some(json!({ "field": field, "input": input }))
        }
        Some(CalcError::NegativeMeasurement { field, value }) => {
            Some(json!({ "field": field, "value": value }))
        }
        Some(CalcError::NonFinite { field }) => Some(json!({ "field": field })),
        None => None,
    };

    let obj = if let Some(d) = details {
        json!({ "reason": reason, "details": d, "message": msg })
    } else {
        json!({ "reason": reason, "message": msg })
    };
    obj.to_string()
}
