//! Developer tasks (schema generation, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(PathBuf::from)
            .context("xtask has no parent")
    } else {
        Ok(manifest_dir)
    }
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_receipt_schema() -> schemars::Schema {
    schema_for!(extresults_types::ParseReceipt)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(extresults_settings::ExtResultsConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "extresults.receipt.v1.json",
            generate: generate_receipt_schema,
        },
        SchemaSpec {
            filename: "extresults.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = project_root()?.join("schemas");
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that every diagnostic kind has a complete explanation.
fn explain_coverage() -> anyhow::Result<()> {
    let kinds = extresults_types::explain::all_kinds();
    let mut errors = Vec::new();

    for kind in kinds {
        match extresults_types::lookup_explanation(kind) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Kind '{}' has empty title", kind));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Kind '{}' has empty description", kind));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("Kind '{}' has empty remediation", kind));
                }
            }
            None => errors.push(format!("Kind '{}' has no explanation", kind)),
        }
    }

    if errors.is_empty() {
        println!("{} diagnostic kinds have explanations", kinds.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  explain-coverage  Validate all diagnostic kinds have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
