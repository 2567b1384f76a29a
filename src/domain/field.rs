// ==========================================
// 物品数据导入工具 - 字段类型与映射表定义
// ==========================================
// 职责: 外部列名 → ItemRecord 属性的静态对应关系
// 约束: 映射表编译期固定，运行时只读
// ==========================================

use chrono::NaiveDateTime;
use std::fmt;

// ==========================================
// FieldKind - 属性语义类型（封闭集合）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Float,
    Text,
    Timestamp,
}

impl FieldKind {
    /// SQLite 列定义（类型亲和性 + 零值默认）
    pub fn column_definition(&self) -> &'static str {
        match self {
            FieldKind::Int => "INTEGER NOT NULL DEFAULT 0",
            FieldKind::Float => "REAL NOT NULL DEFAULT 0",
            FieldKind::Text => "TEXT NOT NULL DEFAULT ''",
            FieldKind::Timestamp => "TEXT DEFAULT NULL",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Int => "integer",
            FieldKind::Float => "float",
            FieldKind::Text => "text",
            FieldKind::Timestamp => "timestamp",
        };
        f.write_str(name)
    }
}

// ==========================================
// FieldValue - 在映射器 / 记录 / 存储之间传递的类型化值
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(Option<NaiveDateTime>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Timestamp(_) => FieldKind::Timestamp,
        }
    }
}

/// ItemRecord 属性可承载的 Rust 类型
pub trait ItemAttr: Sized {
    const KIND: FieldKind;

    fn to_value(&self) -> FieldValue;

    /// 类型不匹配时返回 None
    fn from_value(value: FieldValue) -> Option<Self>;
}

impl ItemAttr for i64 {
    const KIND: FieldKind = FieldKind::Int;

    fn to_value(&self) -> FieldValue {
        FieldValue::Int(*self)
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Int(v) => Some(v),
            _ => None,
        }
    }
}

impl ItemAttr for f64 {
    const KIND: FieldKind = FieldKind::Float;

    fn to_value(&self) -> FieldValue {
        FieldValue::Float(*self)
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Float(v) => Some(v),
            _ => None,
        }
    }
}

impl ItemAttr for String {
    const KIND: FieldKind = FieldKind::Text;

    fn to_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl ItemAttr for Option<NaiveDateTime> {
    const KIND: FieldKind = FieldKind::Timestamp;

    fn to_value(&self) -> FieldValue {
        FieldValue::Timestamp(*self)
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Timestamp(v) => Some(v),
            _ => None,
        }
    }
}

// ==========================================
// FieldMapping - 映射表条目
// ==========================================
// source: 输入表头中的列名
// column: items 表列名（None = 不支持落库）
pub struct FieldMapping<R> {
    pub attr: &'static str,
    pub source: &'static str,
    pub column: Option<&'static str>,
    pub kind: FieldKind,
    pub(crate) getter: fn(&R) -> FieldValue,
    pub(crate) setter: fn(&mut R, FieldValue) -> bool,
}

impl<R> FieldMapping<R> {
    /// 读取属性当前值
    pub fn get(&self, record: &R) -> FieldValue {
        (self.getter)(record)
    }

    /// 写入属性值；值类型与属性类型不一致时返回 false 且不修改记录
    pub fn set(&self, record: &mut R, value: FieldValue) -> bool {
        (self.setter)(record, value)
    }

    pub fn is_persisted(&self) -> bool {
        self.column.is_some()
    }
}

impl<R> fmt::Debug for FieldMapping<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMapping")
            .field("attr", &self.attr)
            .field("source", &self.source)
            .field("column", &self.column)
            .field("kind", &self.kind)
            .finish()
    }
}

/// 一次性声明记录结构体与其映射表
///
/// 每个条目: `属性名: 类型 = "源列名" [=> "数据库列名"];`
macro_rules! define_item_fields {
    (@column) => { None };
    (@column $column:literal) => { Some($column) };

    (
        $(#[$meta:meta])*
        pub struct $record:ident;
        pub static $table:ident;
        $( $attr:ident : $ty:ty = $source:literal $(=> $column:literal)? ; )*
    ) => {
        $(#[$meta])*
        pub struct $record {
            $( pub $attr: $ty, )*
        }

        pub static $table: &[$crate::domain::field::FieldMapping<$record>] = &[
            $(
                $crate::domain::field::FieldMapping {
                    attr: stringify!($attr),
                    source: $source,
                    column: define_item_fields!(@column $($column)?),
                    kind: <$ty as $crate::domain::field::ItemAttr>::KIND,
                    getter: |record: &$record| {
                        $crate::domain::field::ItemAttr::to_value(&record.$attr)
                    },
                    setter: |record: &mut $record, value: $crate::domain::field::FieldValue| {
                        match <$ty as $crate::domain::field::ItemAttr>::from_value(value) {
                            Some(v) => {
                                record.$attr = v;
                                true
                            }
                            None => false,
                        }
                    },
                },
            )*
        ];
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_attr_round_trip_kind() {
        assert_eq!(<i64 as ItemAttr>::KIND, FieldKind::Int);
        assert_eq!(<String as ItemAttr>::KIND, FieldKind::Text);
        assert_eq!(i64::from_value(FieldValue::Int(7)), Some(7));
    }

    #[test]
    fn test_item_attr_rejects_mismatched_kind() {
        assert_eq!(i64::from_value(FieldValue::Float(1.5)), None);
        assert_eq!(String::from_value(FieldValue::Int(1)), None);
        assert_eq!(f64::from_value(FieldValue::Text("1".to_string())), None);
    }

    #[test]
    fn test_column_definition_defaults() {
        assert!(FieldKind::Int.column_definition().contains("DEFAULT 0"));
        assert!(FieldKind::Text.column_definition().contains("DEFAULT ''"));
        assert!(FieldKind::Timestamp.column_definition().contains("NULL"));
    }
}
