//! 输出JSON的读写
//!
//! 写入先落到同目录的临时文件，再重命名覆盖目标文件。
//! 部分更新为 读取 → 替换键 → 写回，不加锁，不支持对同一文件并发运行。

use super::Report;
use crate::error::{PerfReportError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

/// 写入完整报表（覆盖）
pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    let content = serde_json::to_string_pretty(report)?;
    write_atomic(path, &content)
}

/// 将部分结果合并进已有报表
///
/// 只替换 `sections` 中的键和 `generated_at`，其余键原样保留。
/// 文件不存在时从空对象开始；内容不是JSON对象时报错，不覆盖原文件。
pub fn merge_sections<T: Serialize>(path: &Path, sections: &T, generated_at: &str) -> Result<()> {
    let mut document = load_document(path)?;

    let sections = match serde_json::to_value(sections)? {
        Value::Object(map) => map,
        other => {
            return Err(PerfReportError::Artifact(format!(
                "部分结果必须是JSON对象: {}",
                other
            )))
        }
    };

    for (key, value) in sections {
        debug!(key = %key, "替换输出键");
        document.insert(key, value);
    }
    document.insert("generated_at".into(), Value::String(generated_at.to_string()));

    let content = serde_json::to_string_pretty(&Value::Object(document))?;
    write_atomic(path, &content)
}

fn load_document(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        debug!(path = %path.display(), "输出文件不存在，从空对象开始");
        return Ok(Map::new());
    }

    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content).map_err(|e| {
        PerfReportError::Artifact(format!("{} 不是有效的JSON: {}", path.display(), e))
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(PerfReportError::Artifact(format!(
            "{} 的顶层不是JSON对象",
            path.display()
        ))),
    }
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, content)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[derive(Serialize)]
    struct Sections {
        flow_ranking: Vec<u32>,
    }

    #[test]
    fn test_merge_keeps_other_keys() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("chart_data.json");
        std::fs::write(
            &path,
            json!({"success": true, "generated_at": "old", "flow_ranking": [9], "raw_data": ["x"]})
                .to_string(),
        )
        .unwrap();

        merge_sections(&path, &Sections { flow_ranking: vec![1, 2] }, "new").unwrap();

        let value: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["flow_ranking"], json!([1, 2]));
        assert_eq!(value["raw_data"], json!(["x"]));
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["generated_at"], json!("new"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_merge_into_missing_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("out").join("chart_data.json");

        merge_sections(&path, &Sections { flow_ranking: vec![3] }, "now").unwrap();

        let value: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, json!({"flow_ranking": [3], "generated_at": "now"}));
    }

    #[test]
    fn test_merge_rejects_non_object() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("chart_data.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let result = merge_sections(&path, &Sections { flow_ranking: vec![] }, "now");
        assert!(matches!(result, Err(PerfReportError::Artifact(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1, 2, 3]");
    }

    #[test]
    fn test_merge_rejects_corrupt_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("chart_data.json");
        std::fs::write(&path, "{ broken").unwrap();

        let result = merge_sections(&path, &Sections { flow_ranking: vec![] }, "now");
        assert!(matches!(result, Err(PerfReportError::Artifact(_))));
    }
}
