use crate::domain::error::InvalidInputError;
use anyhow::{Context, Result};
use tokio::fs;

/// Splits an edge file into whitespace-separated tokens.
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Reads an edge file into tokens, rejecting an odd token count up front.
pub async fn read_edge_tokens(path: &str) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("input file cannot be read: {path}"))?;

    let tokens = tokenize(&raw);
    if tokens.len() % 2 != 0 {
        return Err(InvalidInputError::DanglingVertex {
            tokens: tokens.len(),
        }
        .into());
    }
    Ok(tokens)
}
