// ==========================================
// 物品数据导入工具 - 物品 Repository Trait
// ==========================================
// 职责: 定义 items 表数据访问接口（不包含业务逻辑）
// 红线: Repository 只做查询/插入，不做更新
// ==========================================

use crate::domain::item::ItemRecord;
use crate::repository::error::RepositoryResult;

// ==========================================
// ItemRepository Trait
// ==========================================
// 用途: 导入驱动依赖的持久化接口
// 实现者: SqliteItemRepository（使用 rusqlite）
pub trait ItemRepository {
    /// 确保 items 表存在（幂等）
    fn ensure_schema(&self) -> RepositoryResult<()>;

    /// 统计 items 表记录数（诊断用）
    fn count_items(&self) -> RepositoryResult<i64>;

    /// 按主键查询物品
    ///
    /// # 返回
    /// - Ok(Some): 记录已存在
    /// - Ok(None): 无匹配行
    /// - Err: 其他查询错误
    fn find_item(&self, id: i64) -> RepositoryResult<Option<ItemRecord>>;

    /// 插入物品（写入全部落库列）
    fn insert_item(&self, item: &ItemRecord) -> RepositoryResult<()>;
}
