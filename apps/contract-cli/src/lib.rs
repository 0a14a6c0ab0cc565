//! Contract generator command line
//!
//! The binary in `main.rs` only parses arguments and prints; every command
//! is a plain function here so it can be tested without a process.

pub mod commands;

pub use commands::{
    build_record, clause_text, extract_file, guess_mime, parse_assignment, parse_issue_date,
    render_contract, templates_json, RecordSource,
};
