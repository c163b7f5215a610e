//! `mods.toml` version cleanup
//!
//! Some loaders choke on version strings carrying letters
//! (`"1.2.3a-RC1"`). The fix deletes every ASCII letter inside the quoted
//! value of each `version = "..."` occurrence and leaves everything else
//! in the file untouched.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::Result;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(version\s*=\s*")([^"]+)(")"#).expect("version pattern is valid")
});

/// Strip ASCII letters out of every `version = "..."` value.
///
/// Pure text transform; digits, dots, and other punctuation keep their
/// original order. Lines without a version assignment pass through
/// unchanged.
#[must_use]
pub fn strip_version_letters(content: &str) -> String {
    VERSION_RE
        .replace_all(content, |caps: &Captures<'_>| {
            let cleaned: String = caps[2]
                .chars()
                .filter(|c| !c.is_ascii_alphabetic())
                .collect();
            format!("{}{}{}", &caps[1], cleaned, &caps[3])
        })
        .into_owned()
}

/// Rewrite a `mods.toml` file in place with its version values cleaned.
pub fn fix_mods_toml_file(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)?;
    fs::write(path, strip_version_letters(&content))?;
    Ok(())
}
