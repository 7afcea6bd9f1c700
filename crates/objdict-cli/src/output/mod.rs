use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print generated source: bare in raw mode, wrapped in `response` otherwise.
pub fn output_text<T: Serialize>(text: &str, response: &T, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Raw => {
            println!("{text}");
            Ok(())
        }
        OutputFormat::Json => output(response, format),
    }
}
