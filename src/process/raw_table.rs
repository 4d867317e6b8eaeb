use std::collections::HashMap;

/// One data row of the export, keyed by header text exactly as it appears in
/// the file (including any leading spaces).
#[derive(Debug, Default, Clone)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    /// Zip headers with cells. Missing trailing cells are left absent; cells
    /// past the last header are ignored. A repeated header keeps its last cell.
    pub fn from_cells<'a>(
        headers: impl IntoIterator<Item = &'a str>,
        cells: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut map = HashMap::new();
        for (header, cell) in headers.into_iter().zip(cells) {
            map.insert(header.to_string(), cell.to_string());
        }
        Self { cells: map }
    }

    /// Raw cell text for `column`, `None` when the column is not present.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Cell for `primary` when present and non-empty, else the cell for `fallback`.
    pub fn get_or(&self, primary: &str, fallback: &str) -> Option<&str> {
        self.get(primary)
            .filter(|s| !s.is_empty())
            .or_else(|| self.get(fallback))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
