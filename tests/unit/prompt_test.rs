//! Tests for the interactive prompt
//!
//! The prompt is driven from an in-memory cursor and writes to a byte buffer.

use std::io::{self, Cursor};

use secuchat_terms::decision::Decision;
use secuchat_terms::prompt::{PromptError, prompt_acceptance};
use secuchat_terms::terms::{PROMPT, REPROMPT, TERMS};

fn run(input: &str) -> (Decision, String) {
    let mut reader = Cursor::new(input.as_bytes());
    let mut out = Vec::new();
    let decision = prompt_acceptance(&mut reader, &mut out).unwrap();
    (decision, String::from_utf8(out).unwrap())
}

#[test]
fn single_yes_accepts() {
    let (decision, out) = run("y\n");
    assert_eq!(decision, Decision::Accepted);
    assert_eq!(out, format!("{TERMS}\n{PROMPT}"));
}

#[test]
fn single_no_declines() {
    let (decision, _) = run("no\n");
    assert_eq!(decision, Decision::Declined);
}

#[test]
fn invalid_answer_reprompts_then_accepts() {
    let (decision, out) = run("maybe\ny\n");
    assert_eq!(decision, Decision::Accepted);
    assert_eq!(out, format!("{TERMS}\n{PROMPT}{REPROMPT}\n{PROMPT}"));
}

#[test]
fn empty_and_numeric_lines_reprompt() {
    let (decision, out) = run("\n1\nNO\n");
    assert_eq!(decision, Decision::Declined);
    assert_eq!(out.matches(PROMPT).count(), 3);
    assert_eq!(out.matches(REPROMPT).count(), 2);
}

#[test]
fn input_after_answer_is_not_consumed() {
    let mut reader = Cursor::new("yes\nleftover\n".as_bytes());
    let mut out = Vec::new();
    prompt_acceptance(&mut reader, &mut out).unwrap();
    assert_eq!(reader.position(), 4);
}

#[test]
fn final_line_without_newline() {
    let (decision, _) = run("Yes");
    assert_eq!(decision, Decision::Accepted);
}

#[test]
fn end_of_input_declines() {
    let (decision, out) = run("");
    assert_eq!(decision, Decision::Declined);
    assert_eq!(out, format!("{TERMS}\n{PROMPT}\n"));
}

#[test]
fn end_of_input_after_invalid_answers_declines() {
    let (decision, out) = run("what\nhuh\n");
    assert_eq!(decision, Decision::Declined);
    assert_eq!(out.matches(REPROMPT).count(), 2);
}

#[test]
fn terms_printed_verbatim_regardless_of_answer() {
    for input in ["y\n", "n\n", "x\ny\n", ""] {
        let (_, out) = run(input);
        assert!(out.starts_with(&format!("{TERMS}\n")), "input {input:?}");
    }
}

#[test]
fn non_utf8_answer_reprompts() {
    let mut reader = Cursor::new(&b"\xe9\ny\n"[..]);
    let mut out = Vec::new();
    let decision = prompt_acceptance(&mut reader, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(decision, Decision::Accepted);
    assert_eq!(out.matches(REPROMPT).count(), 1);
}

#[test]
fn io_error_message_is_not_repeated() {
    let err = PromptError::from(io::Error::other("disk on fire"));
    assert_eq!(err.to_string(), "disk on fire");
}
