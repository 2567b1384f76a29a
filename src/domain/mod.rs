// ==========================================
// 物品数据导入工具 - 领域层
// ==========================================
// 职责: 物品记录与字段映射表
// ==========================================

#[macro_use]
pub mod field;
pub mod item;

// 重导出核心类型
pub use field::{FieldKind, FieldMapping, FieldValue, ItemAttr};
pub use item::{ItemFieldIndex, ItemRecord, ITEMS_TABLE, ITEM_FIELDS, PRIMARY_KEY_COLUMN};
