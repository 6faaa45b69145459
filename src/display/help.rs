//! Banner and help text

/// Greeting printed once when the session starts
pub fn format_banner() -> String {
    format!(
        "This is FINANCIAL LOG TOOL CLI {}.\nInput the word [help] to get our guidelines.\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Usage summary printed by `help`
pub fn format_help() -> String {
    let mut output = String::new();
    output.push_str("[Usage] Fltcli> command\n");
    output.push_str("command ranges from [add, delete, find, modify]\n");
    output.push_str("  add     date reason amount path counterparty note\n");
    output.push_str("  delete  id\n");
    output.push_str("  find    keyword\n");
    output.push_str("  modify  id field newdata\n");
    output.push_str("  quit | exit\n");
    output.push_str("Values are separated by whitespace and cannot contain spaces.\n");
    output
}
