//! Prompt source: a line-delimited text file.
//!
//! The file is re-read on every call so prompt edits take effect without
//! a restart. A missing file yields a single instructional placeholder
//! rather than an error, so random selection always has at least one
//! element to pick from.

use crate::error::{Error, Result};
use rand::seq::IndexedRandom;
use std::io::ErrorKind;
use std::path::Path;

/// Returned as the sole prompt when the prompts file does not exist.
pub const FALLBACK_PROMPT: &str = "Please create a prompts.txt file with your prompts";

/// Load prompts from a line-delimited file. Each non-blank, trimmed line
/// is one prompt. A file that exists but cannot be read (permissions,
/// corruption) is a real error, unlike a file that is simply absent.
pub fn load_prompts(path: impl AsRef<Path>) -> Result<Vec<String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(vec![FALLBACK_PROMPT.to_string()]),
        Err(e) => Err(Error::PromptSource(e)),
    }
}

/// Pick one prompt uniformly at random. `None` only for an empty slice,
/// which `load_prompts` never produces for a missing file.
pub fn random_prompt(prompts: &[String]) -> Option<&String> {
    prompts.choose(&mut rand::rng())
}
