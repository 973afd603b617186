//! 测试用工作簿生成
//!
//! rust_xlsxwriter 写出与导出文件相同结构的 .xlsx。

#![allow(dead_code)]

use flow_perf_report::config::Config;
use rust_xlsxwriter::Workbook as XlsxWorkbook;
use std::path::Path;

pub const MAIN_PERSON_SHEET: &str = "主要负责人";
pub const CATEGORY_SHEETS: [&str; 3] = ["销售类流程", "采购类流程", "项目&产品管理类流程"];

/// 写出工作簿
///
/// 空串不写入，能解析为数字的写为数值单元格，其余写为文本。
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<&str>>)]) {
    let mut workbook = XlsxWorkbook::new();

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).expect("工作表名设置失败");

        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                let written = match value.parse::<f64>() {
                    Ok(n) => worksheet.write_number(r as u32, c as u16, n),
                    Err(_) => worksheet.write_string(r as u32, c as u16, *value),
                };
                written.expect("单元格写入失败");
            }
        }
    }

    workbook.save(path).expect("工作簿保存失败");
}

/// 流程效率明细（标题2行 + 列名行 + 数据）
pub fn process_sheet(data: &[[&'static str; 13]]) -> Vec<Vec<&'static str>> {
    let mut rows = vec![
        vec!["流程效率明细"],
        vec!["统计周期: 2026-09"],
        vec![
            "模板名称", "发起流程数", "环比", "同比", "完成流程数", "完成环比", "平均运行时长",
            "运行时长环比", "超期结束比例", "平均超期时长", "未结束流程数", "超期未结束流程数", "备注",
        ],
    ];
    rows.extend(data.iter().map(|row| row.to_vec()));
    rows
}

/// 人员效率明细（标题行 + 列名行 + 数据，12列）
pub fn personnel_sheet(data: &[[&'static str; 12]]) -> Vec<Vec<&'static str>> {
    let mut rows = vec![
        vec!["人员效率明细"],
        vec![
            "人员名称", "部门名称", "单位名称", "处理数", "平均处理时长", "超期处理数",
            "超期处理比例", "平均超期时长", "平均超期时长", "未处理流程数", "超期未处理流程数", "备注",
        ],
    ];
    rows.extend(data.iter().map(|row| row.to_vec()));
    rows
}

/// 单列名单（可带列名行）
pub fn name_column(header: Option<&'static str>, names: &[&'static str]) -> Vec<Vec<&'static str>> {
    header
        .into_iter()
        .chain(names.iter().copied())
        .map(|name| vec![name])
        .collect()
}

pub const PROCESS_ROWS: [[&str; 13]; 5] = [
    ["销售合同审批", "120", "5%", "3%", "110", "2%", "2天3小时", "-1%", "10%", "5小时", "10", "2", ""],
    ["采购申请", "80", "1%", "", "75", "", "5小时30分", "", "", "", "5", "0", ""],
    ["项目立项", "30", "", "", "28", "", "3天", "", "", "", "2", "1", "新模板"],
    ["销售报价", "45", "", "", "40", "", "", "", "", "", "5", "0", ""],
    ["合计", "275", "", "", "253", "", "", "", "", "", "22", "3", ""],
];

pub const PERSONNEL_ROWS: [[&str; 12]; 5] = [
    ["张三", "营销部", "总部", "15", "2小时30分", "1", "5%", "", "", "3", "0", ""],
    ["李四", "采购部", "总部", "40", "45分", "2", "", "", "", "1", "0", ""],
    ["王五", "", "分公司", "8", "1天2小时", "0", "", "", "", "0", "0", ""],
    ["赵六", "营销部", "分公司", "0", "", "0", "", "", "", "6", "2", ""],
    ["合计", "", "", "63", "", "", "", "", "", "", "", ""],
];

/// 在目录下写出三个输入工作簿，返回指向它们的配置
pub fn standard_fixture(dir: &Path) -> Config {
    let process_path = dir.join("流程效率明细.xlsx");
    let personnel_path = dir.join("人员效率明细.xlsx");
    let reference_path = dir.join("基本信息.xlsx");

    write_workbook(&process_path, &[("Sheet1", process_sheet(&PROCESS_ROWS))]);
    write_workbook(&personnel_path, &[("Sheet1", personnel_sheet(&PERSONNEL_ROWS))]);
    write_workbook(
        &reference_path,
        &[
            (MAIN_PERSON_SHEET, name_column(None, &["张三", "王五", "赵六"])),
            (
                CATEGORY_SHEETS[0],
                name_column(Some("流程名称"), &["销售合同审批", "销售报价", " ", "销售合同审批"]),
            ),
            (CATEGORY_SHEETS[1], name_column(Some("流程名称"), &["采购申请"])),
            (CATEGORY_SHEETS[2], name_column(Some("流程名称"), &["项目立项", "销售报价"])),
        ],
    );

    Config {
        process_workbook: process_path,
        personnel_workbook: personnel_path,
        reference_workbook: reference_path,
        output: dir.join("chart_data.json"),
        ..Config::default()
    }
}
