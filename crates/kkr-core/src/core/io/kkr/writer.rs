use super::lines::is_separator;
use crate::core::models::document::Document;
use std::io::{self, Write};

const RULE: &str = "c------------------------------------------------------------";
const SPECIES_INDENT: usize = 30;

/// Writes the canonical text of `document`.
///
/// Only type definitions referenced by a position are written, in order of
/// first use, and both counts are recomputed: `ntyp` from the written
/// definitions and `natm` from the positions. Floats use `Debug` formatting so
/// integral values keep their trailing `.0`.
pub(super) fn write_document(document: &Document, writer: &mut impl Write) -> io::Result<()> {
    for line in document.header() {
        writeln!(writer, "{line}")?;
    }

    let definitions = document.referenced_type_definitions();
    writeln!(writer, "{RULE}")?;
    writeln!(writer, "c   ntyp")?;
    writeln!(writer, "    {}", definitions.len())?;
    writeln!(writer, "{RULE}")?;
    writeln!(writer, "c   typ ncmp rmt field mxl [anclr conc]")?;
    for def in &definitions {
        writeln!(
            writer,
            "    {}  {}  {:?}  {:?}  {}",
            def.label,
            def.species_count,
            def.muffin_tin_radius,
            def.external_field,
            def.max_angular_momentum
        )?;
        for species in &def.species {
            writeln!(
                writer,
                "{:indent$}{}  {:?}",
                "",
                species.atomic_number,
                species.concentration,
                indent = SPECIES_INDENT
            )?;
        }
    }

    writeln!(writer, "{RULE}")?;
    writeln!(writer, "c   natm")?;
    writeln!(writer, "    {}", document.positions().len())?;
    writeln!(writer, "{RULE}")?;

    for line in document.position_header().iter().filter(|l| !is_separator(l)) {
        writeln!(writer, "{line}")?;
    }
    for position in document.positions() {
        writeln!(
            writer,
            "    {}  {}  {}  {}",
            position.x(),
            position.y(),
            position.z(),
            position.type_label
        )?;
    }

    for line in document.footer() {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
