//! Extraction options

use serde::Deserialize;

/// Which extraction mode to run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractMode {
    /// Detect every table of every sheet
    Dynamic,
    /// Extract the table at an explicit `Sheet!A1:B9` reference
    Fixed { reference: String },
    /// Extract below an explicit header row until the first blank row
    ColumnSearch { reference: String },
}

impl Default for ExtractMode {
    fn default() -> Self {
        ExtractMode::Dynamic
    }
}

/// Options for extracting tables from a batch of files
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractOptions {
    /// Extraction mode
    pub mode: ExtractMode,
    /// Synthesize `Column_N` headers and treat the first row as data
    /// (fixed modes only)
    pub auto_header: bool,
}

impl ExtractOptions {
    /// Dynamic extraction
    pub fn dynamic() -> Self {
        Self::default()
    }

    /// Fixed-range extraction at `reference`
    pub fn fixed<S: Into<String>>(reference: S) -> Self {
        Self {
            mode: ExtractMode::Fixed {
                reference: reference.into(),
            },
            auto_header: false,
        }
    }

    /// Column-search extraction below the header row at `reference`
    pub fn column_search<S: Into<String>>(reference: S) -> Self {
        Self {
            mode: ExtractMode::ColumnSearch {
                reference: reference.into(),
            },
            auto_header: false,
        }
    }

    /// Set the auto-header flag
    pub fn with_auto_header(mut self, auto_header: bool) -> Self {
        self.auto_header = auto_header;
        self
    }

    /// Options from a host's property set: a fixed range is used only when
    /// range mode is on and the target range is non-empty
    pub fn from_host(range_mode: bool, target_range: &str, auto_header: bool) -> Self {
        let target_range = target_range.trim();
        if range_mode && !target_range.is_empty() {
            Self::fixed(target_range).with_auto_header(auto_header)
        } else {
            Self::dynamic().with_auto_header(auto_header)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_host() {
        assert_eq!(
            ExtractOptions::from_host(true, "Sheet1!A1:B3", true),
            ExtractOptions::fixed("Sheet1!A1:B3").with_auto_header(true)
        );
        assert_eq!(
            ExtractOptions::from_host(true, "  ", false).mode,
            ExtractMode::Dynamic
        );
        assert_eq!(
            ExtractOptions::from_host(false, "Sheet1!A1:B3", false).mode,
            ExtractMode::Dynamic
        );
    }

    #[test]
    fn test_deserialize() {
        let options: ExtractOptions = serde_json::from_str(
            r#"{"mode": {"fixed": {"reference": "Sheet1!A1:B3"}}, "autoHeader": true}"#,
        )
        .unwrap();
        assert_eq!(options, ExtractOptions::fixed("Sheet1!A1:B3").with_auto_header(true));

        let options: ExtractOptions =
            serde_json::from_str(r#"{"mode": {"column_search": {"reference": "S!B2:E2"}}}"#)
                .unwrap();
        assert_eq!(options, ExtractOptions::column_search("S!B2:E2"));

        let options: ExtractOptions = serde_json::from_str(r#"{"mode": "dynamic"}"#).unwrap();
        assert_eq!(options, ExtractOptions::dynamic());

        let options: ExtractOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ExtractOptions::default());
    }
}
