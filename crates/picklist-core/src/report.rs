//! # Picking Report
//!
//! Renders a [`PickList`] as the text sheet handed to warehouse staff.
//!
//! ## Layout
//! ```text
//! =+=+=+=
//! ===Rack A
//! Widget (id=10)
//! order 1, 3 pcs
//!
//! ===Rack B
//! Gadget (id=20)
//! order 2, 1 pcs
//! secondary racks: C
//!
//! ```
//!
//! Racks appear in ascending ordinal order of their names; entries inside a
//! rack keep aggregation order. Rendering has no other inputs, so the same
//! pick list always produces the same bytes.

use std::fmt::Write;

use crate::types::{PickEntry, PickList};

/// First line of every report.
pub const REPORT_BANNER: &str = "=+=+=+=";

/// Prefix of a rack header line.
pub const RACK_HEADER_PREFIX: &str = "===Rack ";

/// Separator between secondary rack names.
pub const SECONDARY_RACK_SEPARATOR: &str = ", ";

/// Renders the whole report into a string.
pub fn render(pick_list: &PickList) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, pick_list);
    out
}

/// Writes the report into any `fmt::Write` sink.
pub fn write_report<W: Write>(out: &mut W, pick_list: &PickList) -> std::fmt::Result {
    writeln!(out, "{REPORT_BANNER}")?;

    for rack_name in pick_list.rack_names() {
        writeln!(out, "{RACK_HEADER_PREFIX}{rack_name}")?;

        for entry in pick_list.entries(rack_name) {
            write_entry(out, entry)?;
        }
    }

    Ok(())
}

fn write_entry<W: Write>(out: &mut W, entry: &PickEntry) -> std::fmt::Result {
    writeln!(out, "{} (id={})", entry.product.name, entry.product.id)?;
    writeln!(out, "order {}, {} pcs", entry.order_id, entry.quantity)?;

    if entry.has_secondary_racks() {
        writeln!(
            out,
            "secondary racks: {}",
            entry.secondary_racks.join(SECONDARY_RACK_SEPARATOR)
        )?;
    }

    writeln!(out)
}

// =============================================================================
// Unit Tests
// =============================================================================
