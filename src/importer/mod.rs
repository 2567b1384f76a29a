// ==========================================
// 物品数据导入工具 - 导入层
// ==========================================
// 职责: 管道分隔文本 → ItemRecord → items 表
// 流程: 解析 → 映射 → 查询 → 插入（仅缺失主键）
// ==========================================

// 模块声明
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod item_importer;

// 重导出核心类型
pub use error::{ImportError, ImportResult, MappingError};
pub use field_mapper::FieldMapper;
pub use file_parser::{PipeFileParser, PipeRecords};
pub use item_importer::{ImportSummary, ItemImporter};
