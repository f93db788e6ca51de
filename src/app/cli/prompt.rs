//! Interactive fallbacks for values not given on the command line.

use std::io::ErrorKind;
use std::path::PathBuf;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;

fn map_prompt_error(what: &str, err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => {
            AppError::Prompt(format!("Cancelled while reading {}", what))
        }
        err => AppError::Prompt(format!("Failed to read {}: {}", what, err)),
    }
}

pub(super) fn text(prompt: &str, what: &str) -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|value: &String| -> Result<(), &'static str> {
            if value.trim().is_empty() { Err("Value must not be empty") } else { Ok(()) }
        })
        .interact_text()
        .map(|value| value.trim().to_string())
        .map_err(|err| map_prompt_error(what, err))
}

pub(super) fn path_or_prompt(
    value: Option<PathBuf>,
    prompt: &str,
    what: &str,
) -> Result<PathBuf, AppError> {
    match value {
        Some(path) => Ok(path),
        None => text(prompt, what).map(PathBuf::from),
    }
}

/// Interpret an answer to the submit question: `1` submits, `0` does not.
pub(super) fn parse_submit_answer(answer: &str) -> Option<bool> {
    match answer.trim() {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

/// Ask for the submit flag as `1` or `0`.
pub(super) fn submit_flag() -> Result<bool, AppError> {
    let answer = Input::<String>::new()
        .with_prompt("Auto submit? Answer as 1 or 0")
        .validate_with(|value: &String| -> Result<(), &'static str> {
            parse_submit_answer(value).map(|_| ()).ok_or("Answer 1 or 0")
        })
        .interact_text()
        .map_err(|err| map_prompt_error("submit flag", err))?;
    parse_submit_answer(&answer).ok_or_else(|| AppError::Prompt("Answer 1 or 0".to_string()))
}
