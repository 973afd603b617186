//! Flow Perf Common Library
//!
//! 报表生成的核心部分，不涉及文件读写：
//! 原始表格类型、工作表结构表、规整、时长解析、排名引擎。

pub mod types;
pub mod error;
pub mod schema;
pub mod normalizer;
pub mod records;
pub mod duration;
pub mod ranking;
pub mod category;

pub use types::{Cell, RawSheet};
pub use error::{Error, Result};
pub use schema::{SheetKind, SheetSchema};
pub use normalizer::{extract_name_list, normalize, RowView, SheetRecord};
pub use records::{PersonRecord, ProcessRecord};
pub use duration::{parse_duration_hours, parse_duration_minutes};
pub use ranking::{rank, Ranked, SortDirection};
pub use category::{CategoryIndex, CategoryMembership};
