// ==========================================
// 物品数据导入工具 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分级: MappingError 为行级（告警后继续），ImportError 为运行级（中止）
// ==========================================

use crate::repository::RepositoryError;
use thiserror::Error;

/// 行级映射错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MappingError {
    #[error("表头列数 ({header}) 与记录列数 ({row}) 不一致")]
    HeaderMismatch { header: usize, row: usize },

    #[error("字段 {field} 无法解析为整数: {value:?}")]
    BadInteger { field: String, value: String },

    #[error("字段 {field} 无法解析为浮点数: {value:?}")]
    BadFloat { field: String, value: String },

    #[error("字段 {field} 日期时间格式错误: {value:?}")]
    BadTimestamp { field: String, value: String },
}

/// 运行级导入错误
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 输入相关错误 =====
    #[error("无法打开输入文件 {path}: {message}")]
    CannotOpen { path: String, message: String },

    #[error("表头读取失败 (行 {line}): {message}")]
    MalformedHeader { line: usize, message: String },

    #[error("输入文件读取失败 (行 {line}): {message}")]
    ReadFailed { line: usize, message: String },

    #[error("目标物品 ID 无效: {0:?}（需为正整数）")]
    InvalidTargetId(String),

    // ===== 存储相关错误 =====
    #[error("物品计数查询失败: {0}")]
    StoreCountFailed(#[source] RepositoryError),

    #[error("物品查询失败 (id={id}): {source}")]
    StoreQueryFailed {
        id: i64,
        #[source]
        source: RepositoryError,
    },

    #[error("物品插入失败 (id={id}): {source}")]
    StoreInsertFailed {
        id: i64,
        #[source]
        source: RepositoryError,
    },

    // ===== 输出相关错误 =====
    #[error("控制台输出失败: {0}")]
    OutputError(String),
}

// 实现 From<std::io::Error>（仅控制台写出路径使用）
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::OutputError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_error_messages_carry_context() {
        let err = MappingError::BadInteger {
            field: "ac".to_string(),
            value: "ten".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ac"));
        assert!(msg.contains("ten"));
    }

    #[test]
    fn test_insert_error_names_id() {
        let err = ImportError::StoreInsertFailed {
            id: 42,
            source: RepositoryError::DatabaseQueryError("disk I/O error".to_string()),
        };
        assert!(err.to_string().contains("id=42"));
    }
}
