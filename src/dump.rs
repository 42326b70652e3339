//! Module serialize a populated [RBMap] into flat text.
//!
//! Two sinks are provided, an in-order sink writing every entry as a
//! `<key>,<value>` row, and a display sink rendering the shape of the
//! tree, one node per line, indented by depth. In the rendering the right
//! subtree sits above its node and the left subtree below, red nodes are
//! wrapped in angle brackets.

use std::{fmt, io};

use crate::{pairs, Color, Error, RBMap, Result};

/// Number of spaces per level of depth in the display rendering.
pub const INDENT_STEP: usize = 4;

/// Write every entry of `index` as a `<key>,<value>` row into `w`, in
/// ascending key order.
pub fn write_inorder<K, V, W>(index: &RBMap<K, V>, w: &mut W) -> Result<()>
where
    K: Clone + fmt::Display,
    V: Clone + fmt::Display,
    W: io::Write,
{
    pairs::write_pairs(index.iter(), w)
}

/// Render the shape of `index` into `w`, one node per line. Each line is
/// left-padded by `depth * INDENT_STEP` spaces and carries the node's
/// value, wrapped in angle brackets when the node is red.
pub fn write_tree<K, V, W>(index: &RBMap<K, V>, w: &mut W) -> Result<()>
where
    V: Clone + fmt::Display,
    W: io::Write,
{
    for (value, color, depth) in index.dump() {
        let pad = " ".repeat(depth * INDENT_STEP);
        match color {
            Color::Black => err_at!(IoError, writeln!(w, "{}{}", pad, value))?,
            Color::Red => err_at!(IoError, writeln!(w, "{}<{}>", pad, value))?,
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "dump_test.rs"]
mod dump_test;
