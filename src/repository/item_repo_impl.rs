// ==========================================
// 物品数据导入工具 - 物品 Repository 实现
// ==========================================
// 职责: 实现 items 表数据访问（使用 rusqlite）
// 连接: 单个长连接，随 Repository 一起释放
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::field::{FieldKind, FieldValue};
use crate::domain::item::{ItemRecord, ITEMS_TABLE, PRIMARY_KEY_COLUMN};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::item_repo::ItemRepository;
use chrono::NaiveDateTime;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use tracing::debug;

/// FieldValue → SQLite 值
fn to_sql_value(value: FieldValue) -> Value {
    match value {
        FieldValue::Int(v) => Value::Integer(v),
        FieldValue::Float(v) => Value::Real(v),
        FieldValue::Text(v) => Value::Text(v),
        FieldValue::Timestamp(Some(ts)) => Value::Text(ts.format("%Y-%m-%d %H:%M:%S").to_string()),
        FieldValue::Timestamp(None) => Value::Null,
    }
}

/// 按列类型读取一列（NULL 视为零值）
fn read_column(row: &Row, column: &str, kind: FieldKind) -> rusqlite::Result<FieldValue> {
    Ok(match kind {
        FieldKind::Int => FieldValue::Int(row.get::<_, Option<i64>>(column)?.unwrap_or_default()),
        FieldKind::Float => FieldValue::Float(row.get::<_, Option<f64>>(column)?.unwrap_or_default()),
        FieldKind::Text => FieldValue::Text(row.get::<_, Option<String>>(column)?.unwrap_or_default()),
        FieldKind::Timestamp => FieldValue::Timestamp(row.get::<_, Option<NaiveDateTime>>(column)?),
    })
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

// ==========================================
// SqliteItemRepository
// ==========================================
pub struct SqliteItemRepository {
    conn: Connection,
    insert_sql: String,
}

impl SqliteItemRepository {
    /// 打开数据库文件并创建 Repository
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    /// - busy_timeout_ms: busy_timeout（毫秒）
    pub fn new(db_path: &str, busy_timeout_ms: u64) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path, busy_timeout_ms)
            .map_err(|e| RepositoryError::DatabaseConnectionError(format!("{}: {}", db_path, e)))?;
        Ok(Self::from_connection(conn))
    }

    /// 从已有连接创建 Repository
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn,
            insert_sql: Self::build_insert_sql(),
        }
    }

    /// INSERT 语句（列顺序与 ItemRecord::column_values 一致）
    fn build_insert_sql() -> String {
        let columns: Vec<String> = ItemRecord::persisted_fields()
            .filter_map(|m| m.column)
            .map(quote_ident)
            .collect();
        let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{}", i)).collect();

        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            ITEMS_TABLE,
            columns.join(", "),
            placeholders.join(", ")
        )
    }

    /// CREATE TABLE 语句（主键 id，其余列带零值默认）
    fn build_create_sql() -> String {
        let columns: Vec<String> = ItemRecord::persisted_fields()
            .filter_map(|m| {
                m.column.map(|column| {
                    if column == PRIMARY_KEY_COLUMN {
                        format!("{} INTEGER PRIMARY KEY NOT NULL", quote_ident(column))
                    } else {
                        format!("{} {}", quote_ident(column), m.kind.column_definition())
                    }
                })
            })
            .collect();

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            ITEMS_TABLE,
            columns.join(",\n    ")
        )
    }

    fn map_row(row: &Row) -> rusqlite::Result<ItemRecord> {
        let mut item = ItemRecord::default();
        for mapping in ItemRecord::persisted_fields() {
            if let Some(column) = mapping.column {
                let value = read_column(row, column, mapping.kind)?;
                mapping.set(&mut item, value);
            }
        }
        Ok(item)
    }
}

impl ItemRepository for SqliteItemRepository {
    fn ensure_schema(&self) -> RepositoryResult<()> {
        self.conn.execute_batch(&Self::build_create_sql())?;
        Ok(())
    }

    fn count_items(&self) -> RepositoryResult<i64> {
        let sql = format!("SELECT COUNT({}) FROM {}", PRIMARY_KEY_COLUMN, ITEMS_TABLE);
        let count = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count)
    }

    fn find_item(&self, id: i64) -> RepositoryResult<Option<ItemRecord>> {
        let sql = format!("SELECT * FROM {} WHERE {} = ?1", ITEMS_TABLE, PRIMARY_KEY_COLUMN);
        let item = self
            .conn
            .query_row(&sql, params![id], Self::map_row)
            .optional()?;
        Ok(item)
    }

    fn insert_item(&self, item: &ItemRecord) -> RepositoryResult<()> {
        let values = item
            .column_values()
            .into_iter()
            .map(|(_, value)| to_sql_value(value));

        let inserted = self.conn.execute(&self.insert_sql, params_from_iter(values))?;
        debug!(id = item.id, rows = inserted, "物品已插入");
        Ok(())
    }
}
