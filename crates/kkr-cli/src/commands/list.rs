use crate::cli::ListArgs;
use crate::error::{CliError, Result};
use kkredit::core::models::document::Document;
use std::fmt::{self, Write};
use tracing::info;

pub fn run(args: ListArgs) -> Result<()> {
    let document = kkredit::load(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;
    info!(
        "Listing {} position(s) from {:?}",
        document.positions().len(),
        &args.input
    );
    let listing = render_listing(&document)
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to render listing: {}", e)))?;
    print!("{}", listing);
    Ok(())
}

pub fn render_listing(document: &Document) -> std::result::Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Found {} atomic positions:", document.positions().len())?;
    for (index, position) in document.positions().iter().enumerate() {
        writeln!(
            out,
            "Index {}: {} -> {}",
            index, position.coordinates, position.type_label
        )?;
    }

    writeln!(
        out,
        "\nFound {} type definitions:",
        document.type_definitions().len()
    )?;
    for definition in document.type_definitions() {
        let species = definition
            .species
            .iter()
            .map(|s| format!("{}:{}", s.atomic_number, s.concentration))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            out,
            "  {:<12} ncmp={} species=[{}] used by {} position(s)",
            definition.label,
            definition.species_count,
            species,
            document.count_by_label(&definition.label)
        )?;
    }

    let unresolved = document.unresolved_labels();
    if !unresolved.is_empty() {
        writeln!(out, "\nLabels without a definition: {}", unresolved.join(", "))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
c------------------------------------------------------------
c   ntyp
     2
c------------------------------------------------------------
c   typ ncmp rmt field mxl [anclr conc]
    Fe    1  0.0  0.0  2
                              26  100.0
    Co    2  0.0  0.0  2
                              27  50.0
                              28  50.0
c   natm
     3
c   atmicx(in the unit of a)            atmtyp
    0.0a  0.0b  0.0c  Fe
    0.5a  0.5b  0.5c  Fe
    0.0a  0.5b  0.5c  Mn
end
";

    #[test]
    fn listing_shows_positions_and_usage() {
        let document = kkredit::core::io::kkr::parse_str(INPUT).unwrap();
        let listing = render_listing(&document).unwrap();
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines[0], "Found 3 atomic positions:");
        assert_eq!(lines[1], "Index 0: (0.0a, 0.0b, 0.0c) -> Fe");
        assert_eq!(lines[3], "Index 2: (0.0a, 0.5b, 0.5c) -> Mn");
        assert!(listing.contains("Found 2 type definitions:"));
        assert!(listing.contains("species=[26:100] used by 2 position(s)"));
        assert!(listing.contains("species=[27:50 28:50] used by 0 position(s)"));
        assert!(listing.ends_with("Labels without a definition: Mn\n"));
    }
}
