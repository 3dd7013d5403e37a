//! Identifier construction for tables, column headers and row headers.

use crate::config::IdScheme;

impl IdScheme {
    fn table_prefix(self) -> &'static str {
        match self {
            IdScheme::Verbose => "_table_",
            IdScheme::Compact => "_t_",
        }
    }

    fn column_infix(self) -> &'static str {
        match self {
            IdScheme::Verbose => "_col_",
            IdScheme::Compact => "_c_",
        }
    }

    fn row_infix(self) -> &'static str {
        match self {
            IdScheme::Verbose => "_row_",
            IdScheme::Compact => "_r_",
        }
    }

    /// `id` of the table with 1-based document position `table`
    #[must_use]
    pub fn table_id(self, table: usize) -> String {
        format!("{}{table}", self.table_prefix())
    }

    #[must_use]
    pub fn column_id(self, table: usize, column: usize) -> String {
        format!("{}{}{column}", self.table_id(table), self.column_infix())
    }

    #[must_use]
    pub fn row_id(self, table: usize, row: usize) -> String {
        format!("{}{}{row}", self.table_id(table), self.row_infix())
    }

    /// `headers` value for a data cell: column header id, one space, row header id
    #[must_use]
    pub fn headers_value(self, table: usize, column: usize, row: usize) -> String {
        format!("{} {}", self.column_id(table, column), self.row_id(table, row))
    }
}
