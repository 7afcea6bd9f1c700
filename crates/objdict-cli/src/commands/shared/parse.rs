use objdict_core::Conditions;
use uuid::Uuid;

/// Parse a UUID argument, naming the argument in the error.
pub fn parse_id(raw: &str, field: &str) -> anyhow::Result<Uuid> {
    objdict_core::errors::parse_id(raw).map_err(|error| anyhow::anyhow!("invalid {field}: {error}"))
}

/// Build a filter from repeated `column=value` arguments.
///
/// Only the first `=` splits; the value may contain more. A repeated column
/// keeps its last value.
pub fn parse_conditions(filters: &[String]) -> anyhow::Result<Conditions> {
    filters
        .iter()
        .map(|filter| {
            let (key, value) = filter
                .split_once('=')
                .ok_or_else(|| anyhow::anyhow!("invalid filter '{filter}': expected column=value"))?;
            let key = key.trim();
            if key.is_empty() {
                anyhow::bail!("invalid filter '{filter}': empty column name");
            }
            Ok((key.to_string(), value.to_string()))
        })
        .collect()
}
