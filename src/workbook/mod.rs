mod inspect;
mod reader;

pub use inspect::{find_workbooks, inspect_path, inspect_workbook, SheetSummary, WorkbookSummary};
pub use reader::{data_to_cell, range_to_sheet, Workbook};
