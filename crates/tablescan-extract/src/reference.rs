//! Sheet-qualified range references (`Sheet1!B2:E10`)

use std::fmt;
use std::str::FromStr;

use tablescan_core::{CellRange, Worksheet};

use crate::error::{ExtractError, ExtractResult};

/// A range reference qualified by a sheet name
///
/// Accepted forms:
/// - `Sheet1!A1:C9`, `Sheet1!B2` (single cell)
/// - `'Q1 Sales'!A1:C9` (quoted name, `''` escapes a quote)
/// - `Sheet1` (whole sheet: resolves to the sheet's used range)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRangeRef {
    /// Sheet name, unquoted
    pub sheet_name: String,
    /// Cell range, `None` for a whole-sheet reference
    pub range: Option<CellRange>,
}

impl SheetRangeRef {
    /// Create a reference to a range on a sheet
    pub fn new<S: Into<String>>(sheet_name: S, range: CellRange) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            range: Some(range),
        }
    }

    /// Create a reference to a whole sheet
    pub fn whole_sheet<S: Into<String>>(sheet_name: S) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            range: None,
        }
    }

    /// Parse a reference, failing with `MalformedRange`
    ///
    /// # Examples
    /// ```
    /// use tablescan_extract::SheetRangeRef;
    ///
    /// let reference = SheetRangeRef::parse("Sheet1!b2:E10").unwrap();
    /// assert_eq!(reference.sheet_name, "Sheet1");
    /// assert_eq!(reference.range.unwrap().to_a1_string(), "B2:E10");
    /// ```
    pub fn parse(reference: &str) -> ExtractResult<Self> {
        let s = reference.trim();
        if s.is_empty() {
            return Err(ExtractError::malformed(reference, "empty reference"));
        }

        let (sheet_part, range) = match s.rfind('!') {
            Some(bang) => {
                let cells = s[bang + 1..].trim();
                if cells.is_empty() {
                    return Err(ExtractError::malformed(
                        reference,
                        "missing cell range after '!'",
                    ));
                }
                let range = CellRange::parse(cells)
                    .map_err(|e| ExtractError::malformed(reference, e.to_string()))?;
                (s[..bang].trim(), Some(range))
            }
            None => (s, None),
        };

        let sheet_name = unquote(sheet_part)
            .ok_or_else(|| ExtractError::malformed(reference, "unbalanced quotes in sheet name"))?;
        if sheet_name.is_empty() {
            return Err(ExtractError::malformed(reference, "missing sheet name"));
        }

        Ok(Self { sheet_name, range })
    }

    /// The concrete range on `worksheet`: the explicit range, or the sheet's
    /// used range for a whole-sheet reference
    pub fn resolve(&self, worksheet: &Worksheet) -> CellRange {
        self.range.unwrap_or_else(|| worksheet.used_range())
    }
}

/// Strip spreadsheet-style single quotes from a sheet name
fn unquote(name: &str) -> Option<String> {
    match name.strip_prefix('\'') {
        Some(rest) => {
            let inner = rest.strip_suffix('\'')?;
            // Inside quotes, a lone quote is not allowed; '' stands for one
            if inner.replace("''", "").contains('\'') {
                return None;
            }
            Some(inner.replace("''", "'"))
        }
        None if name.ends_with('\'') => None,
        None => Some(name.to_string()),
    }
}

fn needs_quotes(name: &str) -> bool {
    !name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '.')
}

impl fmt::Display for SheetRangeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if needs_quotes(&self.sheet_name) {
            write!(f, "'{}'", self.sheet_name.replace('\'', "''"))?;
        } else {
            write!(f, "{}", self.sheet_name)?;
        }
        if let Some(range) = &self.range {
            write!(f, "!{}", range)?;
        }
        Ok(())
    }
}

impl FromStr for SheetRangeRef {
    type Err = ExtractError;

    fn from_str(s: &str) -> ExtractResult<Self> {
        Self::parse(s)
    }
}
