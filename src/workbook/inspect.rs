//! 工作簿结构查看
//!
//! 列出工作表名称、行列数、各列非空单元格数和前几行内容，
//! 用于确认导出文件的格式是否与预期一致。

use super::reader::Workbook;
use crate::error::{PerfReportError, Result};
use flow_perf_common::RawSheet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const WORKBOOK_EXTENSIONS: &[&str] = &["xls", "xlsx", "xlsm"];

/// 工作表概要
#[derive(Debug, Clone)]
pub struct SheetSummary {
    pub name: String,
    pub height: usize,
    pub width: usize,
    pub non_empty_counts: Vec<usize>,
    /// 前N行的显示文本，缺失单元格为空串
    pub preview: Vec<Vec<String>>,
}

impl SheetSummary {
    pub fn from_sheet(sheet: &RawSheet, preview_rows: usize) -> Self {
        let width = sheet.width();
        let preview = sheet
            .rows()
            .iter()
            .take(preview_rows)
            .map(|row| {
                (0..width)
                    .map(|col| {
                        row.get(col)
                            .and_then(|cell| cell.display_text())
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        Self {
            name: sheet.name().to_string(),
            height: sheet.height(),
            width,
            non_empty_counts: sheet.non_empty_counts(),
            preview,
        }
    }
}

/// 工作簿概要
#[derive(Debug, Clone)]
pub struct WorkbookSummary {
    pub path: PathBuf,
    pub sheets: Vec<SheetSummary>,
}

/// 查看单个工作簿
pub fn inspect_workbook(path: &Path, preview_rows: usize) -> Result<WorkbookSummary> {
    let mut workbook = Workbook::open(path)?;
    let mut sheets = Vec::new();

    for name in workbook.sheet_names() {
        let sheet = workbook.read_sheet(&name)?;
        sheets.push(SheetSummary::from_sheet(&sheet, preview_rows));
    }

    Ok(WorkbookSummary {
        path: path.to_path_buf(),
        sheets,
    })
}

/// 查看文件或文件夹
///
/// 文件夹只查看直下的工作簿，读取失败的文件会中止整个查看。
pub fn inspect_path(path: &Path, preview_rows: usize) -> Result<Vec<WorkbookSummary>> {
    if path.is_dir() {
        find_workbooks(path)?
            .iter()
            .map(|p| inspect_workbook(p, preview_rows))
            .collect()
    } else {
        Ok(vec![inspect_workbook(path, preview_rows)?])
    }
}

/// 文件夹直下的工作簿（按文件名排序）
pub fn find_workbooks(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.exists() {
        return Err(PerfReportError::FileNotFound(folder.display().to_string()));
    }

    let mut workbooks = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        // Excel的锁文件
        if file_name.starts_with("~$") {
            continue;
        }

        if is_workbook_extension(path) {
            workbooks.push(path.to_path_buf());
        }
    }

    workbooks.sort();
    Ok(workbooks)
}

fn is_workbook_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| WORKBOOK_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flow_perf_common::Cell;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_workbook_extension() {
        assert!(is_workbook_extension(Path::new("流程效率明细.xls")));
        assert!(is_workbook_extension(Path::new("基本信息.XLSX")));
        assert!(!is_workbook_extension(Path::new("chart_data.json")));
        assert!(!is_workbook_extension(Path::new("README")));
    }

    #[test]
    fn test_find_workbooks() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("b.xlsx"), b"dummy").unwrap();
        fs::write(dir.path().join("a.xls"), b"dummy").unwrap();
        fs::write(dir.path().join("~$a.xls"), b"lock").unwrap();
        fs::write(dir.path().join("notes.txt"), b"text").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.xlsx"), b"dummy").unwrap();

        let found = find_workbooks(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.xls", "b.xlsx"]);
    }

    #[test]
    fn test_find_workbooks_missing_folder() {
        let result = find_workbooks(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(PerfReportError::FileNotFound(_))));
    }

    #[test]
    fn test_sheet_summary() {
        let sheet = RawSheet::new(
            "主要负责人",
            vec![
                vec![Cell::from("张三"), Cell::Empty],
                vec![Cell::from("李四"), Cell::from(3.0)],
                vec![Cell::from("王五")],
            ],
        );

        let summary = SheetSummary::from_sheet(&sheet, 2);
        assert_eq!(summary.height, 3);
        assert_eq!(summary.width, 2);
        assert_eq!(summary.non_empty_counts, vec![3, 1]);
        assert_eq!(summary.preview.len(), 2);
        assert_eq!(summary.preview[1], vec!["李四".to_string(), "3".to_string()]);
        assert_eq!(summary.preview[0][1], "");
    }
}
