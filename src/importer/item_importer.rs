// ==========================================
// 物品数据导入工具 - 物品导入驱动
// ==========================================
// 职责: 逐行读取输入文件，构造 ItemRecord，主键不存在时插入
// 流程: 读取表头 → 逐行映射 → (目标 ID 过滤) → 按主键查询 → 插入或跳过
// 红线: 只插入缺失主键，已存在的记录不做任何更新
// ==========================================

use crate::config::ImportOptions;
use crate::domain::item::ItemRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{is_io_error, PipeFileParser, PipeRecords};
use crate::repository::ItemRepository;
use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

// ==========================================
// ImportSummary - 单次导入结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportSummary {
    /// 本次插入的物品 ID（字符串形式，按插入顺序）
    pub inserted_ids: Vec<String>,
    /// 已读取的行数（含表头与格式错误行）
    pub lines: usize,
    /// 主键已存在而跳过的行数
    pub existing: usize,
    /// 被目标 ID 过滤掉的行数
    pub filtered: usize,
    /// 格式错误而跳过的行数
    pub malformed: usize,
    /// 字段映射失败（仍按部分记录继续处理）的行数
    pub mapping_failures: usize,
}

// ==========================================
// ItemImporter - 导入驱动
// ==========================================
pub struct ItemImporter<R>
where
    R: ItemRepository,
{
    // 数据访问层
    repo: R,

    // 字段映射器（启动时构建一次）
    mapper: FieldMapper,

    // 进度输出间隔
    progress_interval: usize,
}

impl<R> ItemImporter<R>
where
    R: ItemRepository,
{
    /// 创建新的 ItemImporter 实例
    ///
    /// # 参数
    /// - repo: 物品数据仓储
    /// - options: 导入选项
    pub fn new(repo: R, options: &ImportOptions) -> Self {
        Self {
            repo,
            mapper: FieldMapper::new(),
            progress_interval: options.progress_interval.max(1),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// 从文件导入物品
    ///
    /// # 参数
    /// - input_path: 管道分隔输入文件
    /// - target_id: 仅处理该 ID 的行（None = 全部）
    /// - out: 控制台输出（插入的 ID、进度计数、最终 ID 列表）
    ///
    /// # 返回
    /// - Ok(ImportSummary): 导入结果
    /// - Err: 无法打开文件 / 存储查询失败 / 插入失败
    #[instrument(skip(self, input_path, out), fields(path = %input_path.display()))]
    pub fn run<W: Write>(
        &self,
        input_path: &Path,
        target_id: Option<i64>,
        out: &mut W,
    ) -> ImportResult<ImportSummary> {
        let rows = PipeFileParser::open(input_path)?;
        self.run_rows(rows, target_id, out)
    }

    /// 从已打开的读取器导入物品
    pub fn run_rows<Rd: Read, W: Write>(
        &self,
        mut rows: PipeRecords<Rd>,
        target_id: Option<i64>,
        out: &mut W,
    ) -> ImportResult<ImportSummary> {
        let start_time = Instant::now();

        let total = self
            .repo
            .count_items()
            .map_err(ImportError::StoreCountFailed)?;
        debug!(total, "items 表现有记录数");

        let mut summary = ImportSummary::default();

        // === 阶段 1: 表头 ===
        let header = match rows.next() {
            None => {
                warn!("输入文件为空，没有表头");
                writeln!(out, "total ids: ")?;
                return Ok(summary);
            }
            Some((_, Ok(header))) => header,
            Some((line, Err(e))) => {
                return Err(ImportError::MalformedHeader {
                    line,
                    message: e.to_string(),
                })
            }
        };
        summary.lines = 1;

        // === 阶段 2: 数据行 ===
        for (line, result) in rows {
            summary.lines = line;

            let fields = match result {
                Ok(fields) => fields,
                Err(e) if is_io_error(&e) => {
                    return Err(ImportError::ReadFailed {
                        line,
                        message: e.to_string(),
                    })
                }
                Err(e) => {
                    warn!(line, error = %e, "读取行失败，跳过");
                    summary.malformed += 1;
                    continue;
                }
            };

            self.process_row(line, &header, &fields, target_id, &mut summary, out)?;

            if line % self.progress_interval == 0 {
                writeln!(out, "{}", line)?;
            }
        }

        debug!(lines = summary.lines, "行处理完成");
        writeln!(out, "total ids: {}", summary.inserted_ids.join(", "))?;

        info!(
            lines = summary.lines,
            inserted = summary.inserted_ids.len(),
            existing = summary.existing,
            filtered = summary.filtered,
            malformed = summary.malformed,
            mapping_failures = summary.mapping_failures,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "导入完成"
        );

        Ok(summary)
    }

    /// 处理单个数据行：映射 → 过滤 → 查询 → 插入
    fn process_row<W: Write>(
        &self,
        line: usize,
        header: &[String],
        fields: &[String],
        target_id: Option<i64>,
        summary: &mut ImportSummary,
        out: &mut W,
    ) -> ImportResult<()> {
        // 映射失败时保留部分填充的记录继续处理（包括参与目标 ID 比较）
        let mut item = ItemRecord::default();
        if let Err(e) = self.mapper.fill(&mut item, header, fields) {
            warn!(line, error = %e, "字段映射失败，继续使用部分填充的记录");
            summary.mapping_failures += 1;
        }

        if let Some(target) = target_id {
            if item.id != target {
                summary.filtered += 1;
                return Ok(());
            }
        }

        let existing = self
            .repo
            .find_item(item.id)
            .map_err(|source| ImportError::StoreQueryFailed { id: item.id, source })?;

        if existing.is_some() {
            debug!(line, id = item.id, "主键已存在，跳过");
            summary.existing += 1;
            return Ok(());
        }

        self.repo
            .insert_item(&item)
            .map_err(|source| ImportError::StoreInsertFailed { id: item.id, source })?;

        writeln!(out, "inserted {}", item.id)?;
        summary.inserted_ids.push(item.id_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{RepositoryError, RepositoryResult};
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    // ==========================================
    // 内存仓储（记录查询调用）
    // ==========================================
    #[derive(Default)]
    struct MemoryRepo {
        items: RefCell<BTreeMap<i64, ItemRecord>>,
        queried: RefCell<Vec<i64>>,
        fail_query: bool,
        fail_insert: bool,
    }

    impl ItemRepository for MemoryRepo {
        fn ensure_schema(&self) -> RepositoryResult<()> {
            Ok(())
        }

        fn count_items(&self) -> RepositoryResult<i64> {
            Ok(self.items.borrow().len() as i64)
        }

        fn find_item(&self, id: i64) -> RepositoryResult<Option<ItemRecord>> {
            self.queried.borrow_mut().push(id);
            if self.fail_query {
                return Err(RepositoryError::DatabaseQueryError("database is locked".to_string()));
            }
            Ok(self.items.borrow().get(&id).cloned())
        }

        fn insert_item(&self, item: &ItemRecord) -> RepositoryResult<()> {
            if self.fail_insert {
                return Err(RepositoryError::DatabaseQueryError("disk full".to_string()));
            }
            self.items.borrow_mut().insert(item.id, item.clone());
            Ok(())
        }
    }

    fn run(
        importer: &ItemImporter<MemoryRepo>,
        input: &str,
        target_id: Option<i64>,
    ) -> (ImportResult<ImportSummary>, String) {
        let mut out = Vec::new();
        let rows = PipeFileParser::from_reader(input.as_bytes());
        let result = importer.run_rows(rows, target_id, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn importer(repo: MemoryRepo) -> ItemImporter<MemoryRepo> {
        crate::logging::init_test();
        ItemImporter::new(repo, &ImportOptions::default())
    }

    #[test]
    fn test_import_inserts_missing_rows() {
        let importer = importer(MemoryRepo::default());

        let (result, out) = run(&importer, "id|Name|ac\n5|Sword of Testing|10\n", None);
        let summary = result.unwrap();

        assert_eq!(summary.inserted_ids, vec!["5"]);
        assert_eq!(summary.lines, 2);
        assert!(out.contains("inserted 5"));
        assert!(out.ends_with("total ids: 5\n"));

        let items = importer.repository().items.borrow();
        assert_eq!(items[&5].name, "Sword of Testing");
        assert_eq!(items[&5].ac, 10);
    }

    #[test]
    fn test_import_is_idempotent() {
        let importer = importer(MemoryRepo::default());
        let input = "id|Name\n1|A\n2|B\n";

        let first = run(&importer, input, None).0.unwrap();
        let second = run(&importer, input, None).0.unwrap();

        assert_eq!(first.inserted_ids, vec!["1", "2"]);
        assert!(second.inserted_ids.is_empty());
        assert_eq!(second.existing, 2);
    }

    #[test]
    fn test_existing_rows_are_not_updated() {
        let importer = importer(MemoryRepo::default());
        run(&importer, "id|Name\n1|Original\n", None).0.unwrap();

        let summary = run(&importer, "id|Name\n1|Changed\n", None).0.unwrap();

        assert!(summary.inserted_ids.is_empty());
        assert_eq!(importer.repository().items.borrow()[&1].name, "Original");
    }

    #[test]
    fn test_target_id_skips_other_rows_without_query() {
        let importer = importer(MemoryRepo::default());

        let summary = run(&importer, "id|Name\n1|A\n42|B\n99|C\n", Some(42)).0.unwrap();

        assert_eq!(summary.inserted_ids, vec!["42"]);
        assert_eq!(summary.filtered, 2);
        assert_eq!(*importer.repository().queried.borrow(), vec![42]);
    }

    #[test]
    fn test_mapping_failure_continues_with_partial_record() {
        let importer = importer(MemoryRepo::default());

        let summary = run(&importer, "id|ac|hp\n3|bad|7\n", None).0.unwrap();

        assert_eq!(summary.mapping_failures, 1);
        assert_eq!(summary.inserted_ids, vec!["3"]);
        let items = importer.repository().items.borrow();
        assert_eq!(items[&3].ac, 0);
        assert_eq!(items[&3].hp, 0);
    }

    #[test]
    fn test_header_mismatch_uses_zeroed_record() {
        let importer = importer(MemoryRepo::default());

        let summary = run(&importer, "id|Name|ac\n8|Short\n", None).0.unwrap();

        assert_eq!(summary.mapping_failures, 1);
        assert_eq!(summary.inserted_ids, vec!["0"]);
    }

    #[test]
    fn test_header_mismatch_filtered_by_target() {
        let importer = importer(MemoryRepo::default());

        let summary = run(&importer, "id|Name|ac\n8|Short\n", Some(8)).0.unwrap();

        assert!(summary.inserted_ids.is_empty());
        assert_eq!(summary.filtered, 1);
        assert!(importer.repository().queried.borrow().is_empty());
    }

    #[test]
    fn test_non_utf8_row_is_imported() {
        let importer = importer(MemoryRepo::default());
        let mut out = Vec::new();
        let rows = PipeFileParser::from_reader(&b"id|Name\n1|ok\n2|Caf\xe9 Blade\n3|fine\n"[..]);

        let summary = importer.run_rows(rows, None, &mut out).unwrap();

        assert_eq!(summary.malformed, 0);
        assert_eq!(summary.inserted_ids, vec!["1", "2", "3"]);
        assert_eq!(summary.lines, 4);
        let items = importer.repository().items.borrow();
        assert_eq!(items[&2].name, "Caf\u{FFFD} Blade");
    }

    #[test]
    fn test_query_failure_is_fatal() {
        let repo = MemoryRepo {
            fail_query: true,
            ..Default::default()
        };
        let importer = importer(repo);

        let (result, _) = run(&importer, "id\n1\n2\n", None);

        assert!(matches!(result, Err(ImportError::StoreQueryFailed { id: 1, .. })));
        assert_eq!(importer.repository().queried.borrow().len(), 1);
    }

    #[test]
    fn test_insert_failure_is_fatal() {
        let repo = MemoryRepo {
            fail_insert: true,
            ..Default::default()
        };
        let importer = importer(repo);

        let (result, _) = run(&importer, "id\n17\n", None);

        assert!(matches!(result, Err(ImportError::StoreInsertFailed { id: 17, .. })));
    }

    #[test]
    fn test_progress_counter_printed() {
        let options = ImportOptions {
            progress_interval: 2,
        };
        let importer = ItemImporter::new(MemoryRepo::default(), &options);

        let (result, out) = run(&importer, "id\n1\n2\n3\n", None);
        result.unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec!["inserted 1", "2", "inserted 2", "inserted 3", "4", "total ids: 1, 2, 3"]
        );
    }

    #[test]
    fn test_empty_input() {
        let importer = importer(MemoryRepo::default());

        let (result, out) = run(&importer, "", None);

        assert_eq!(result.unwrap(), ImportSummary::default());
        assert_eq!(out, "total ids: \n");
    }
}
