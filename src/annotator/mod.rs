//! Table annotation pass.
//!
//! Walks every `<table>` in document order and makes it navigable by
//! screen readers:
//! - the table gets a document-unique `id`
//! - cells of the first row become `<th scope="col">` with column ids
//! - the first cell of every later row becomes the row header
//!   (`scope="row"`, row id, and `<th>` unless configured otherwise)
//! - every other cell of a later row gets `headers="<column id> <row id>"`
//!
//! Rows are every `tr` under the table regardless of `thead`/`tbody`
//! grouping, and cells are every `td` under a row. Rows and cells of a
//! nested table belong to that table alone; a plain descendant search
//! would hand them to the outer table too, and this pass deliberately
//! does not. Nothing is validated across
//! rows: ragged tables are processed row by row, and a data cell past the
//! end of the header row references a column id that was never assigned.
//! A table whose header row has no cells likewise produces no column
//! headers.
//!
//! Existing `id`, `scope` and `headers` values on touched elements are
//! overwritten, so re-running the pass renumbers rather than merges.

mod ids;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::config::AnnotateConfig;
use crate::dom::TableDom;

const TABLE_TAG: &str = "table";
const ROW_TAG: &str = "tr";
const DATA_CELL_TAG: &str = "td";
const HEADER_CELL_TAG: &str = "th";
const CAPTION_TAG: &str = "caption";

/// Counts of what one annotation pass wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationReport {
    pub tables: usize,
    pub captions: usize,
    pub column_headers: usize,
    pub row_headers: usize,
    pub data_cells: usize,
}

/// Single-pass table annotator over any [`TableDom`]
pub struct TableAnnotator<'a> {
    config: &'a AnnotateConfig,
}

impl<'a> TableAnnotator<'a> {
    #[must_use]
    pub fn new(config: &'a AnnotateConfig) -> Self {
        Self { config }
    }

    /// Annotate every table in `dom`, mutating it in place
    pub fn annotate<D: TableDom>(&self, dom: &mut D) -> AnnotationReport {
        let mut report = AnnotationReport::default();
        let root = dom.root();

        // Table elements are never renamed, so the handles collected here
        // stay valid while cells inside them are swapped out.
        let tables = dom.descendants_with_tag(&root, TABLE_TAG);
        for (offset, table) in tables.iter().enumerate() {
            self.annotate_table(dom, table, offset + 1, &mut report);
        }

        debug!(
            "Annotated {} tables: {} column headers, {} row headers, {} data cells",
            report.tables, report.column_headers, report.row_headers, report.data_cells
        );
        report
    }

    fn annotate_table<D: TableDom>(
        &self,
        dom: &mut D,
        table: &D::Node,
        table_index: usize,
        report: &mut AnnotationReport,
    ) {
        let scheme = self.config.id_scheme();
        dom.set_attribute(table, "id", &scheme.table_id(table_index));
        report.tables += 1;

        let rows = dom.descendants_with_tags(table, &[ROW_TAG], Some(TABLE_TAG));
        if rows.is_empty() {
            warn!("Table {table_index} has no rows; only its id was set");
            return;
        }

        if self.config.insert_placeholder_caption() {
            self.insert_caption(dom, table, table_index, report);
        }

        let cell_tags: &[&str] = if self.config.match_existing_header_cells() {
            &[DATA_CELL_TAG, HEADER_CELL_TAG]
        } else {
            &[DATA_CELL_TAG]
        };

        for (offset, row) in rows.iter().enumerate() {
            let row_index = offset + 1;
            let cells = dom.descendants_with_tags(row, cell_tags, Some(TABLE_TAG));
            if row_index == 1 {
                self.annotate_header_row(dom, &cells, table_index, report);
            } else {
                self.annotate_data_row(dom, &cells, table_index, row_index, report);
            }
        }

        trace!("Table {table_index}: {} rows processed", rows.len());
    }

    fn insert_caption<D: TableDom>(
        &self,
        dom: &mut D,
        table: &D::Node,
        table_index: usize,
        report: &mut AnnotationReport,
    ) {
        let children = dom.children(table);
        if children.iter().any(|child| dom.is_element(child, CAPTION_TAG)) {
            debug!("Table {table_index} already has a caption; leaving it alone");
            return;
        }
        // A table with rows always has at least one child.
        let Some(first_child) = children.first() else {
            return;
        };
        dom.insert_element_before(first_child, CAPTION_TAG, self.config.caption_text());
        report.captions += 1;
    }

    fn annotate_header_row<D: TableDom>(
        &self,
        dom: &mut D,
        cells: &[D::Node],
        table_index: usize,
        report: &mut AnnotationReport,
    ) {
        let scheme = self.config.id_scheme();
        for (offset, cell) in cells.iter().enumerate() {
            let header = dom.rename(cell, HEADER_CELL_TAG);
            dom.set_attribute(&header, "id", &scheme.column_id(table_index, offset + 1));
            dom.set_attribute(&header, "scope", "col");
            report.column_headers += 1;
        }
    }

    fn annotate_data_row<D: TableDom>(
        &self,
        dom: &mut D,
        cells: &[D::Node],
        table_index: usize,
        row_index: usize,
        report: &mut AnnotationReport,
    ) {
        let scheme = self.config.id_scheme();
        let row_id = scheme.row_id(table_index, row_index);

        for (offset, cell) in cells.iter().enumerate() {
            let column_index = offset + 1;
            if column_index == 1 {
                let header = if self.config.convert_row_header_cell_tag() {
                    dom.rename(cell, HEADER_CELL_TAG)
                } else {
                    cell.clone()
                };
                dom.set_attribute(&header, "id", &row_id);
                dom.set_attribute(&header, "scope", "row");
                report.row_headers += 1;
            } else {
                dom.set_attribute(
                    cell,
                    "headers",
                    &scheme.headers_value(table_index, column_index, row_index),
                );
                report.data_cells += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdScheme;
    use crate::document::{parse_html, serialize_document};
    use crate::dom::RcDomTree;

    fn annotate(html: &str, config: &AnnotateConfig) -> anyhow::Result<(String, AnnotationReport)> {
        let mut tree = RcDomTree::new(parse_html(html.as_bytes())?);
        let report = TableAnnotator::new(config).annotate(&mut tree);
        Ok((serialize_document(tree.dom())?, report))
    }

    fn no_caption() -> AnnotateConfig {
        AnnotateConfig::builder()
            .insert_placeholder_caption(false)
            .build()
            .expect("valid config")
    }

    #[test]
    fn test_two_by_two_table() -> anyhow::Result<()> {
        let (html, report) = annotate(
            "<table><tr><td>A</td><td>B</td></tr><tr><td>C</td><td>D</td></tr></table>",
            &no_caption(),
        )?;

        assert!(html.contains(r#"<table id="_table_1">"#));
        assert!(html.contains(r#"<th id="_table_1_col_1" scope="col">A</th>"#));
        assert!(html.contains(r#"<th id="_table_1_col_2" scope="col">B</th>"#));
        assert!(html.contains(r#"<th id="_table_1_row_2" scope="row">C</th>"#));
        assert!(html.contains(r#"<td headers="_table_1_col_2 _table_1_row_2">D</td>"#));
        assert_eq!(
            report,
            AnnotationReport {
                tables: 1,
                captions: 0,
                column_headers: 2,
                row_headers: 1,
                data_cells: 1,
            }
        );
        Ok(())
    }

    #[test]
    fn test_caption_is_first_child_of_table() -> anyhow::Result<()> {
        let (html, report) = annotate(
            "<table><tr><td>A</td></tr></table>",
            &AnnotateConfig::default(),
        )?;
        assert!(html.contains(
            r#"<table id="_table_1"><caption>PLACEHOLDER TEXT FOR TABLE CAPTION</caption><tbody>"#
        ));
        assert_eq!(report.captions, 1);
        Ok(())
    }

    #[test]
    fn test_existing_caption_not_duplicated() -> anyhow::Result<()> {
        let (html, report) = annotate(
            "<table><caption>Sales</caption><tr><td>A</td></tr></table>",
            &AnnotateConfig::default(),
        )?;
        assert_eq!(html.matches("<caption>").count(), 1);
        assert!(html.contains("<caption>Sales</caption>"));
        assert_eq!(report.captions, 0);
        Ok(())
    }

    #[test]
    fn test_row_header_tag_kept_when_conversion_disabled() -> anyhow::Result<()> {
        let config = AnnotateConfig::builder()
            .insert_placeholder_caption(false)
            .convert_row_header_cell_tag(false)
            .build()?;
        let (html, _) = annotate(
            "<table><tr><td>A</td><td>B</td></tr><tr><td>C</td><td>D</td></tr></table>",
            &config,
        )?;
        assert!(html.contains(r#"<td id="_table_1_row_2" scope="row">C</td>"#));
        assert!(html.contains(r#"<th id="_table_1_col_1" scope="col">A</th>"#));
        Ok(())
    }

    #[test]
    fn test_existing_attributes_overwritten_not_merged() -> anyhow::Result<()> {
        let (html, _) = annotate(
            r#"<table id="t"><tr><td id="x" scope="row" class="c">A</td><td>B</td></tr>
               <tr><td>C</td><td headers="old">D</td></tr></table>"#,
            &no_caption(),
        )?;
        assert!(html.contains(r#"<th id="_table_1_col_1" scope="col" class="c">A</th>"#));
        assert!(html.contains(r#"headers="_table_1_col_2 _table_1_row_2""#));
        assert!(!html.contains("old"));
        assert!(!html.contains(r#"id="t""#));
        Ok(())
    }

    #[test]
    fn test_rows_flattened_across_sections() -> anyhow::Result<()> {
        let (html, _) = annotate(
            "<table><thead><tr><td>H1</td><td>H2</td></tr></thead>\
             <tbody><tr><td>R</td><td>V</td></tr></tbody></table>",
            &no_caption(),
        )?;
        assert!(html.contains(r#"<th id="_table_1_col_2" scope="col">H2</th>"#));
        assert!(html.contains(r#"<th id="_table_1_row_2" scope="row">R</th>"#));
        assert!(html.contains(r#"<td headers="_table_1_col_2 _table_1_row_2">V</td>"#));
        Ok(())
    }

    #[test]
    fn test_ragged_row_references_missing_column() -> anyhow::Result<()> {
        let (html, _) = annotate(
            "<table><tr><td>A</td></tr><tr><td>B</td><td>C</td><td>D</td></tr></table>",
            &no_caption(),
        )?;
        assert!(html.contains(r#"headers="_table_1_col_3 _table_1_row_2""#));
        assert!(!html.contains(r#"id="_table_1_col_3""#));
        Ok(())
    }

    #[test]
    fn test_table_without_rows_only_gets_id() -> anyhow::Result<()> {
        let (html, report) = annotate("<table></table>", &AnnotateConfig::default())?;
        assert!(html.contains(r#"<table id="_table_1"></table>"#));
        assert_eq!(report.tables, 1);
        assert_eq!(report.captions, 0);
        Ok(())
    }

    #[test]
    fn test_compact_scheme() -> anyhow::Result<()> {
        let config = AnnotateConfig::builder()
            .insert_placeholder_caption(false)
            .id_scheme(IdScheme::Compact)
            .build()?;
        let (html, _) = annotate(
            "<table><tr><td>A</td><td>B</td></tr><tr><td>C</td><td>D</td></tr></table>",
            &config,
        )?;
        assert!(html.contains(r#"<table id="_t_1">"#));
        assert!(html.contains(r#"<td headers="_t_1_c_2 _t_1_r_2">D</td>"#));
        Ok(())
    }

    #[test]
    fn test_nested_table_rows_stay_with_their_table() -> anyhow::Result<()> {
        let (html, report) = annotate(
            "<table><tr><td>H1</td><td>H2</td></tr>\
             <tr><td>R</td><td><table><tr><td>n1</td></tr><tr><td>n2</td></tr></table></td></tr>\
             </table>",
            &no_caption(),
        )?;
        assert!(html.contains(r#"<td headers="_table_1_col_2 _table_1_row_2"><table id="_table_2">"#));
        assert!(html.contains(r#"<th id="_table_2_col_1" scope="col">n1</th>"#));
        assert!(html.contains(r#"<th id="_table_2_row_2" scope="row">n2</th>"#));
        assert!(!html.contains("_table_1_row_3"));
        assert_eq!(report.tables, 2);
        assert_eq!(report.column_headers, 3);
        Ok(())
    }

    #[test]
    fn test_existing_th_cells_matched_when_enabled() -> anyhow::Result<()> {
        let config = AnnotateConfig::builder()
            .insert_placeholder_caption(false)
            .match_existing_header_cells(true)
            .build()?;
        let (html, report) = annotate(
            "<table><tr><th>A</th><th>B</th></tr><tr><th>C</th><td>D</td></tr></table>",
            &config,
        )?;
        assert_eq!(report.column_headers, 2);
        assert!(html.contains(r#"<th id="_table_1_col_2" scope="col">B</th>"#));
        assert!(html.contains(r#"<th id="_table_1_row_2" scope="row">C</th>"#));
        assert!(html.contains(r#"<td headers="_table_1_col_2 _table_1_row_2">D</td>"#));
        Ok(())
    }

    #[test]
    fn test_existing_th_cells_are_not_cells() -> anyhow::Result<()> {
        let (html, report) = annotate(
            "<table><tr><th>A</th><th>B</th></tr><tr><td>C</td><td>D</td></tr></table>",
            &no_caption(),
        )?;
        assert_eq!(report.column_headers, 0);
        assert!(html.contains("<th>A</th>"));
        assert!(html.contains(r#"<td headers="_table_1_col_2 _table_1_row_2">D</td>"#));
        Ok(())
    }
}
