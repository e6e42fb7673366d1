//! Implementation of the `blueprint list` command.

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    generators,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let generators = generators::all()?;

    match args.format {
        ListFormat::Table => {
            output.header("Available Generators:")?;
            let width = generators
                .iter()
                .map(|g| g.name().len())
                .max()
                .unwrap_or_default();
            for generator in &generators {
                output.print(&format!(
                    "  {:<width$}  {}",
                    generator.name(),
                    generator.description()
                ))?;
            }
        }
        ListFormat::Json => {
            // Straight to stdout so pipes get parseable JSON even in quiet mode.
            let entries: Vec<_> = generators
                .iter()
                .map(|g| {
                    serde_json::json!({
                        "name": g.name(),
                        "description": g.description(),
                        "actions": g.actions().len(),
                    })
                })
                .collect();
            println!("{}", serde_json::Value::Array(entries));
        }
        ListFormat::List => {
            for generator in &generators {
                println!("{}", generator.name());
            }
        }
    }

    Ok(())
}
