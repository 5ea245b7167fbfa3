/// Output formatting: plain text or JSON results, command table, errors.
use std::io::Write;

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use crate::types::{CommandInfoOutput, ErrorOutput, SavedTreeOutput};

// --- Tree command result ---

/// Report a saved outline on stdout.
pub fn write_saved_tree(saved: &SavedTreeOutput, json: bool) {
    if json {
        print_json(saved);
    } else {
        println!("The directory tree has been saved to {}", saved.destination);
    }
}

// --- Command listing ---

/// Write the command registry to stdout.
pub fn write_commands(commands: &[CommandInfoOutput], json: bool) {
    if json {
        print_json(commands);
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(["COMMAND", "ARGUMENTS", "DESCRIPTION"]);
    for command in commands {
        let params = command
            .params
            .iter()
            .map(|p| format!("<{}> ({}): {}", p.name, p.kind, p.help))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row([command.name.as_str(), &params, &command.about]);
    }
    println!("{table}");
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, json: bool) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    if json {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "Error: {}", err.error.message);
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
