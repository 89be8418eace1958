use std::fs;
use std::path::{self, Path};

use anyhow::{bail, Context, Result};
use ftc_core::TextTable;

use crate::config::ExtractConfig;

/// Refuse to clobber an existing output, or to write over the source.
pub fn check_paths(config: &ExtractConfig) -> Result<()> {
    if !config.overwrite && config.output.exists() {
        bail!(
            "File {} already exists. (Did you mean to pass --overwrite?)",
            config.output.display()
        );
    }

    if same_file_name(&config.source, &config.output)? {
        bail!(
            "Source ({}) and Output ({}) are the same.",
            config.source.display(),
            config.output.display()
        );
    }

    Ok(())
}

/// Compares absolute paths, ignoring case.
fn same_file_name(a: &Path, b: &Path) -> Result<bool> {
    let a = path::absolute(a).with_context(|| format!("resolve {:?}", a))?;
    let b = path::absolute(b).with_context(|| format!("resolve {:?}", b))?;
    Ok(a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase())
}

pub fn to_json(table: &TextTable, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(table)?
    } else {
        serde_json::to_string(table)?
    };
    Ok(json)
}

/// Decode `config.source` and write it to `config.output` as JSON.
///
/// Nothing is written unless the whole table decoded.
pub fn extract_text(config: &ExtractConfig) -> Result<TextTable> {
    check_paths(config)?;

    let table = ftc_core::table::read_from(&config.source)
        .with_context(|| format!("read message table from {:?}", config.source))?;

    let json = to_json(&table, config.pretty)?;
    fs::write(&config.output, json).with_context(|| format!("write {:?}", config.output))?;

    log::info!(
        "extracted {} groups / {} entries to {}",
        table.len(),
        table.entries().count(),
        config.output.display()
    );
    Ok(table)
}
