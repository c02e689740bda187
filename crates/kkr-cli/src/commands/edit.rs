use crate::cli::EditArgs;
use crate::config::PartialRecipe;
use crate::error::{CliError, Result};
use kkredit::workflows;
use tracing::{info, warn};

pub fn run(args: EditArgs) -> Result<()> {
    let partial_recipe = match &args.recipe {
        Some(path) => PartialRecipe::from_file(path)?,
        None => PartialRecipe::default(),
    };
    info!("Merging recipe from file and CLI arguments...");
    let recipe = partial_recipe.merge_with_cli(&args)?;

    let document = kkredit::load(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;

    if recipe.is_empty() {
        warn!("No edit steps given; the input will be rewritten in canonical form.");
    }

    let edited = workflows::recipe::run(&document, &recipe)?;

    kkredit::save(&edited, &args.output).map_err(|e| CliError::FileParsing {
        path: args.output.clone(),
        source: e.into(),
    })?;

    println!(
        "Applied {} step(s); wrote {} type definition(s) and {} position(s) to: {}",
        recipe.steps().len(),
        edited.referenced_type_definitions().len(),
        edited.positions().len(),
        args.output.display()
    );
    Ok(())
}
