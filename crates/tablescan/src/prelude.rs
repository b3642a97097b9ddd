//! Prelude module - common imports for tablescan users
//!
//! ```rust
//! use tablescan::prelude::*;
//! ```

pub use crate::{
    // Main types
    CellAddress,
    CellRange,
    CellValue,
    // I/O types
    CsvReadOptions,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,
    // Error types
    Error,
    ExtractError,
    // Extraction types
    ExtractMode,
    ExtractOptions,
    ExtractResult,
    FileOutcome,
    Result,
    SheetRangeRef,
    SourceFile,
    TableOutcome,
    TableRecord,
    TableRow,
    Workbook,
    // Extension traits
    WorkbookExt,
    WorkbookExtractExt,
    Worksheet,
};
