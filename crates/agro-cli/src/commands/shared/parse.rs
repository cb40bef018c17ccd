use std::io::BufRead;

use serde::de::DeserializeOwned;

/// Parse a `snake_case` enum value through serde; hyphens count as underscores.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Reject `--clear` names outside `allowed`.
pub fn check_clear(clear: &[String], allowed: &[&str]) -> anyhow::Result<()> {
    if let Some(unknown) = clear.iter().find(|name| !allowed.contains(&name.as_str())) {
        anyhow::bail!(
            "cannot clear '{unknown}'; clearable fields: {}",
            allowed.join(", ")
        );
    }
    Ok(())
}

/// Patch for a nullable column: `Some(Some(v))` to set, `Some(None)` when
/// `field` is listed in `--clear`, `None` to leave it alone.
pub fn patch<T>(value: Option<T>, field: &str, clear: &[String]) -> anyhow::Result<Option<Option<T>>> {
    let clearing = clear.iter().any(|name| name == field);
    match (value, clearing) {
        (Some(_), true) => anyhow::bail!("--{field} and --clear {field} are mutually exclusive"),
        (Some(value), false) => Ok(Some(Some(value))),
        (None, true) => Ok(Some(None)),
        (None, false) => Ok(None),
    }
}

/// The `--password` value, or the first line of stdin.
pub fn password_or_stdin(password: Option<&str>) -> anyhow::Result<String> {
    if let Some(password) = password {
        return Ok(password.to_string());
    }
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        anyhow::bail!("no password given; pass --password or pipe it on stdin");
    }
    Ok(password)
}
