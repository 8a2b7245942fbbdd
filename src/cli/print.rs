//! Plain-text output for `--list` and `--print`.

use std::io::{self, Write};

use crate::content::ContentStore;
use crate::models::{Section, Sheet};
use crate::state::SectionView;
use crate::ui::{build_document, line_text};

/// Column budget for `--print` output.
pub const PRINT_WIDTH: u16 = 100;

/// One `id  label` line per sheet, ids padded to a common width.
pub fn write_list(out: &mut impl Write, store: &ContentStore) -> io::Result<()> {
    let id_width = store.sheet_ids().map(str::len).max().unwrap_or(0);
    for sheet in store.sheets() {
        writeln!(out, "{:<width$}  {}", sheet.id, sheet.label, width = id_width)?;
    }
    Ok(())
}

/// Dump a sheet, or one of its sections, with every card and block open.
///
/// Unknown ids write nothing.
pub fn write_sheet(
    out: &mut impl Write,
    store: &ContentStore,
    sheet_id: &str,
    section_id: Option<&str>,
    width: u16,
) -> io::Result<()> {
    let Some(sheet) = store.sheet(sheet_id) else {
        return Ok(());
    };
    let sections: Vec<&Section> = match section_id {
        Some(id) => match sheet.section(id) {
            Some(section) => vec![section],
            None => return Ok(()),
        },
        None => sheet.sections.iter().collect(),
    };

    writeln!(out, "{}", sheet.title)?;
    if !sheet.subtitle.is_empty() {
        writeln!(out, "{}", sheet.subtitle)?;
    }
    for section in sections {
        writeln!(out)?;
        if sheet.is_tabbed() {
            writeln!(out, "## {}", section.tab_label())?;
            writeln!(out)?;
        }
        write_section(out, sheet, section, width)?;
    }
    Ok(())
}

fn write_section(out: &mut impl Write, sheet: &Sheet, section: &Section, width: u16) -> io::Result<()> {
    let mut view = SectionView::mount(&sheet.id, section);
    for list in 0..view.lists().len() {
        view.expand_all(list);
    }
    let doc = build_document(sheet, section, &view, None, width);
    for line in &doc.lines {
        writeln!(out, "{}", line_text(line).trim_end())?;
    }
    Ok(())
}
