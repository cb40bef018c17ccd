//! ID prefix constants.
//!
//! Every record ID is `{prefix}-{8 hex chars}`, generated by `agro-db`.

pub const PREFIX_ANIMAL: &str = "ani";
pub const PREFIX_VACCINATION: &str = "vac";
pub const PREFIX_MONITORING: &str = "mon";
pub const PREFIX_TREATMENT: &str = "trt";
pub const PREFIX_CHECKUP: &str = "chk";

pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_ANIMAL,
    PREFIX_VACCINATION,
    PREFIX_MONITORING,
    PREFIX_TREATMENT,
    PREFIX_CHECKUP,
];

/// Return the prefix of an ID (`"ani-1a2b3c4d"` → `Some("ani")`).
#[must_use]
pub fn prefix_of(id: &str) -> Option<&str> {
    let (prefix, rest) = id.split_once('-')?;
    if rest.is_empty() { None } else { Some(prefix) }
}
