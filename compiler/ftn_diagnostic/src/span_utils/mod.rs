//! Line and column lookup for hosts that render messages.
//!
//! Messages carry byte offsets only. A host that wants `line:column`
//! builds a [`LineOffsetTable`] once per unit and queries it for each
//! message.

/// Pre-computed line offset table for efficient line/column lookup.
///
/// # Example
///
/// ```
/// use ftn_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "program p\n  x = 1\nend";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 12), (2, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source offsets bounded by u32"
    )]
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(newline_offsets(source).map(|i| (i + 1) as u32));
        LineOffsetTable { offsets }
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }

    /// Get 1-based line number from a byte offset.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count bounded by source length"
    )]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        (line_idx as u32) + 1
    }

    /// Get 1-based (line, column) from a byte offset.
    ///
    /// The column counts characters, not bytes, from the line start.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "column bounded by line length"
    )]
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(0, |text| text.chars().count());
        (line, col as u32 + 1)
    }
}

fn newline_offsets(source: &str) -> impl Iterator<Item = usize> + '_ {
    source
        .bytes()
        .enumerate()
        .filter_map(|(i, b)| (b == b'\n').then_some(i))
}
