//! 排名引擎
//!
//! 过滤 → 有效性筛选（键值 > 0）→ 稳定排序 → 截取前N名 → 连续编号。

use std::cmp::Ordering;

/// 排序方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// 从高到低
    #[default]
    Descending,
    /// 从低到高
    Ascending,
}

/// 带名次的记录引用
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<'a, T> {
    /// 名次（从1开始）
    pub rank: usize,
    /// 排序键值
    pub key: f64,
    pub record: &'a T,
}

/// 生成排名
///
/// # Arguments
/// * `records` - 规整后的记录
/// * `key` - 排序键，只有大于0的记录参与排名
/// * `direction` - 排序方向
/// * `filter` - 额外筛选条件（例如只取主要负责人）
/// * `limit` - 最多保留的名次数
///
/// # Returns
/// 按键值排序的前 `limit` 条，名次在截取后的结果上连续编号。
/// 键值相同的记录保持原始顺序。
pub fn rank<'a, T, K>(
    records: &'a [T],
    key: K,
    direction: SortDirection,
    filter: Option<&dyn Fn(&T) -> bool>,
    limit: usize,
) -> Vec<Ranked<'a, T>>
where
    K: Fn(&T) -> f64,
{
    let mut candidates: Vec<(f64, &'a T)> = records
        .iter()
        .filter(|record| filter.map_or(true, |f| f(record)))
        .map(|record| (key(record), record))
        .filter(|(value, _)| *value > 0.0)
        .collect();

    // sort_by 为稳定排序
    candidates.sort_by(|(a, _), (b, _)| {
        let ordering = a.partial_cmp(b).unwrap_or(Ordering::Equal);
        match direction {
            SortDirection::Descending => ordering.reverse(),
            SortDirection::Ascending => ordering,
        }
    });

    candidates
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(idx, (key, record))| Ranked {
            rank: idx + 1,
            key,
            record,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        name: String,
        value: f64,
    }

    fn items(values: &[(&str, f64)]) -> Vec<Item> {
        values
            .iter()
            .map(|(name, value)| Item {
                name: name.to_string(),
                value: *value,
            })
            .collect()
    }

    fn names<'a>(ranked: &[Ranked<'a, Item>]) -> Vec<&'a str> {
        ranked.iter().map(|r| r.record.name.as_str()).collect()
    }

    #[test]
    fn test_rank_descending_with_limit() {
        let data: Vec<Item> = (1..=22)
            .map(|i| Item {
                name: format!("员工{}", i),
                value: i as f64,
            })
            .collect();

        let ranked = rank(&data, |i| i.value, SortDirection::Descending, None, 20);
        assert_eq!(ranked.len(), 20);
        assert_eq!(ranked[0].record.name, "员工22");
        assert_eq!(ranked[19].record.name, "员工3");
        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, (1..=20).collect::<Vec<_>>());
        assert!(ranked.windows(2).all(|w| w[0].key >= w[1].key));
    }

    #[test]
    fn test_rank_drops_non_positive_keys() {
        let data = items(&[("a", 0.0), ("b", 3.0), ("c", -1.0), ("d", f64::NAN), ("e", 1.0)]);
        let ranked = rank(&data, |i| i.value, SortDirection::Descending, None, 10);
        assert_eq!(names(&ranked), vec!["b", "e"]);
    }

    #[test]
    fn test_rank_ties_keep_source_order() {
        let data = items(&[("x", 5.0), ("y", 7.0), ("z", 5.0), ("w", 5.0)]);
        let ranked = rank(&data, |i| i.value, SortDirection::Descending, None, 10);
        assert_eq!(names(&ranked), vec!["y", "x", "z", "w"]);
        assert_eq!(ranked[3].rank, 4);
    }

    #[test]
    fn test_rank_with_filter() {
        let data = items(&[("张三", 10.0), ("李四", 30.0), ("王五", 20.0)]);
        let allowed = ["张三", "王五"];
        let filter = |i: &Item| allowed.contains(&i.name.as_str());

        let ranked = rank(&data, |i| i.value, SortDirection::Descending, Some(&filter), 10);
        assert_eq!(names(&ranked), vec!["王五", "张三"]);
        assert_eq!(ranked[0].rank, 1);
    }

    #[test]
    fn test_rank_ascending() {
        let data = items(&[("a", 3.0), ("b", 1.0), ("c", 2.0)]);
        let ranked = rank(&data, |i| i.value, SortDirection::Ascending, None, 2);
        assert_eq!(names(&ranked), vec!["b", "c"]);
    }

    #[test]
    fn test_rank_empty_and_zero_limit() {
        let data: Vec<Item> = Vec::new();
        assert!(rank(&data, |i| i.value, SortDirection::Descending, None, 10).is_empty());

        let data = items(&[("a", 1.0)]);
        assert!(rank(&data, |i| i.value, SortDirection::Descending, None, 0).is_empty());
    }
}
