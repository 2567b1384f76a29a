// ==========================================
// 物品数据导入工具 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 定位: 单次顺序执行的 ETL 工具（只插入缺失主键，不做更新）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 物品记录与字段映射表
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 导入层 - 解析/映射/落库
pub mod importer;

// 配置层 - 数据库参数与导入选项
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 命令行参数
pub mod cli;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{FieldKind, FieldMapping, FieldValue, ItemRecord, ITEM_FIELDS};
pub use importer::{FieldMapper, ImportError, ImportSummary, ItemImporter, MappingError};
pub use repository::{ItemRepository, RepositoryError, SqliteItemRepository};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "itemimport";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
