// ==========================================
// 物品数据导入工具 - 字段映射器实现
// ==========================================
// 职责: 表头 + 记录 → ItemRecord（按映射表做类型转换）
// 规则:
// - 未映射的列直接跳过，不视为错误
// - 整数列遇到小数点截断（有损，记录告警）；空串按 0 处理
// - 文本列原样写入，不做 trim/转义
// ==========================================

use crate::domain::field::{FieldKind, FieldMapping, FieldValue};
use crate::domain::item::{ItemFieldIndex, ItemRecord};
use crate::importer::error::MappingError;
use chrono::NaiveDateTime;
use tracing::warn;

/// 时间戳列接受的格式
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub struct FieldMapper {
    index: ItemFieldIndex,
}

impl FieldMapper {
    pub fn new() -> Self {
        Self {
            index: ItemFieldIndex::new(),
        }
    }

    /// 由表头与一行记录构造 ItemRecord
    pub fn build<S: AsRef<str>>(
        &self,
        header: &[S],
        row: &[S],
    ) -> Result<ItemRecord, MappingError> {
        let mut record = ItemRecord::default();
        self.fill(&mut record, header, row)?;
        Ok(record)
    }

    /// 将一行记录写入已有 ItemRecord
    ///
    /// 遇到第一个失败列即返回错误；此前已写入的列保留在 `record` 中，
    /// 调用方可以继续使用这份部分填充的记录。
    pub fn fill<S: AsRef<str>>(
        &self,
        record: &mut ItemRecord,
        header: &[S],
        row: &[S],
    ) -> Result<(), MappingError> {
        if header.len() != row.len() {
            return Err(MappingError::HeaderMismatch {
                header: header.len(),
                row: row.len(),
            });
        }

        for (name, raw) in header.iter().zip(row.iter()) {
            let Some(mapping) = self.index.lookup(name.as_ref()) else {
                continue;
            };

            let value = coerce(mapping, raw.as_ref())?;
            mapping.set(record, value);
        }

        Ok(())
    }
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// 按属性语义类型转换单个字符串值
fn coerce(mapping: &FieldMapping<ItemRecord>, raw: &str) -> Result<FieldValue, MappingError> {
    match mapping.kind {
        FieldKind::Int => parse_int(mapping.source, raw).map(FieldValue::Int),
        FieldKind::Float => parse_float(mapping.source, raw).map(FieldValue::Float),
        FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
        FieldKind::Timestamp => parse_timestamp(mapping.source, raw).map(FieldValue::Timestamp),
    }
}

fn parse_int(field: &str, raw: &str) -> Result<i64, MappingError> {
    let mut digits = raw;
    if let Some(dot) = raw.find('.') {
        warn!(field, value = raw, "整数字段含小数部分，截断后丢失精度");
        digits = &raw[..dot];
    }
    if digits.is_empty() {
        digits = "0";
    }

    digits.parse::<i64>().map_err(|_| MappingError::BadInteger {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

// NaN 写入 SQLite 时变为 NULL，违反 NOT NULL 约束
fn parse_float(field: &str, raw: &str) -> Result<f64, MappingError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .ok_or_else(|| MappingError::BadFloat {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

fn parse_timestamp(field: &str, raw: &str) -> Result<Option<NaiveDateTime>, MappingError> {
    if raw.is_empty() {
        return Ok(None);
    }

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(Some)
        .ok_or_else(|| MappingError::BadTimestamp {
            field: field.to_string(),
            value: raw.to_string(),
        })
}
