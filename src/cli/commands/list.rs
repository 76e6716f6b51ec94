//! Operation catalog listing.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use crate::io::{Envelope, ExitCode};
use crate::ops::OpKind;

/// Run list command - show every operation with its inputs.
pub fn run_list(json: bool) -> ExitCode {
    if json {
        let data: Vec<serde_json::Value> = OpKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                serde_json::json!({
                    "number": i + 1,
                    "name": kind.name(),
                    "label": kind.label(),
                    "inputs": kind.inputs().iter().map(|s| s.type_name()).collect::<Vec<_>>(),
                    "description": kind.description(),
                })
            })
            .collect();
        let envelope = Envelope::success(
            format!("{} operations", OpKind::ALL.len()),
            Some(serde_json::Value::Array(data)),
        );
        println!("{}", envelope.to_json());
        return ExitCode::Success;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Name", "Inputs", "Description"]);
    for (i, kind) in OpKind::ALL.iter().enumerate() {
        let inputs = kind
            .inputs()
            .iter()
            .map(|s| s.type_name())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            (i + 1).to_string(),
            kind.name().to_string(),
            inputs,
            kind.description().to_string(),
        ]);
    }
    println!("{table}");
    ExitCode::Success
}
