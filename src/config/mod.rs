// ==========================================
// 物品数据导入工具 - 配置层
// ==========================================
// 职责: 数据库连接参数与导入选项
// 存储: JSON 配置文件 + 环境变量覆写
// ==========================================

pub mod import_config;

// 重导出核心配置类型
pub use import_config::{
    get_default_db_path, ConfigError, ConfigResult, DatabaseConfig, ImportConfig, ImportOptions,
};
