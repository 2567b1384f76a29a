// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的数据库初始化、输入文件生成等功能
// ==========================================

#![allow(dead_code)]

use eq_item_import::config::ImportOptions;
use eq_item_import::importer::ItemImporter;
use eq_item_import::repository::{ItemRepository, SqliteItemRepository};
use std::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

/// 创建临时测试数据库并初始化 schema
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().ok_or("非 UTF-8 路径")?.to_string();

    let repo = SqliteItemRepository::new(&db_path, 5_000)?;
    repo.ensure_schema()?;

    Ok((temp_file, db_path))
}

/// 创建连接到测试数据库的导入器
pub fn create_test_importer(db_path: &str) -> ItemImporter<SqliteItemRepository> {
    let repo = SqliteItemRepository::new(db_path, 5_000).expect("打开测试数据库失败");
    ItemImporter::new(repo, &ImportOptions::default())
}

/// 写入临时输入文件
///
/// 接受任意字节内容（可含非 UTF-8 字节）
pub fn write_items_file(content: impl AsRef<[u8]>) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("创建临时文件失败");
    file.write_all(content.as_ref()).expect("写入临时文件失败");
    file.flush().expect("刷新临时文件失败");
    file
}
