//! 业务分类索引
//!
//! 分类名 → 模板名称列表。分类按配置顺序保存，成员保留原始顺序与重复项。

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// 单个分类
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMembership {
    pub category: String,
    pub members: Vec<String>,
}

impl CategoryMembership {
    /// 模板是否属于该分类
    pub fn contains(&self, template: &str) -> bool {
        self.members.iter().any(|m| m == template)
    }
}

/// 分类索引
///
/// 序列化为按插入顺序排列的JSON对象。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    entries: Vec<CategoryMembership>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加分类，同名分类会被替换（位置不变）
    pub fn insert(&mut self, category: impl Into<String>, members: Vec<String>) {
        let category = category.into();
        if let Some(existing) = self.entries.iter_mut().find(|e| e.category == category) {
            existing.members = members;
        } else {
            self.entries.push(CategoryMembership { category, members });
        }
    }

    pub fn get(&self, category: &str) -> Option<&CategoryMembership> {
        self.entries.iter().find(|e| e.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryMembership> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 出现在多个分类中的模板
    ///
    /// 返回 (模板名称, 所属分类列表)，按首次出现顺序排列。
    /// 同一分类内的重复项不计入。
    pub fn overlapping_members(&self) -> Vec<(String, Vec<String>)> {
        let mut order: Vec<&str> = Vec::new();
        let mut owners: HashMap<&str, Vec<&str>> = HashMap::new();

        for entry in &self.entries {
            for member in &entry.members {
                let categories = owners.entry(member.as_str()).or_insert_with(|| {
                    order.push(member.as_str());
                    Vec::new()
                });
                if !categories.contains(&entry.category.as_str()) {
                    categories.push(entry.category.as_str());
                }
            }
        }

        order
            .into_iter()
            .filter_map(|member| {
                let categories = &owners[member];
                (categories.len() > 1).then(|| {
                    (
                        member.to_string(),
                        categories.iter().map(|c| c.to_string()).collect(),
                    )
                })
            })
            .collect()
    }
}

impl Serialize for CategoryIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.category, &entry.members)?;
        }
        map.end()
    }
}
