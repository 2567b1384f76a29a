// ==========================================
// 物品数据导入工具 - 命令行入口
// ==========================================
// 用法: itemimport <input-path> [target-id]
// 退出码: 成功 0；缺少参数或运行失败 1
// ==========================================

use anyhow::Context;
use eq_item_import::cli::{parse_args, CliCommand, USAGE};
use eq_item_import::config::ImportConfig;
use eq_item_import::importer::{ImportSummary, ItemImporter};
use eq_item_import::logging;
use eq_item_import::repository::{ItemRepository, SqliteItemRepository};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let start = Instant::now();

    // 初始化日志系统
    logging::init();

    let code = match parse_args(std::env::args().skip(1)) {
        Ok(CliCommand::Usage) => {
            println!("{}", USAGE);
            return ExitCode::FAILURE;
        }
        Ok(CliCommand::Import {
            input_path,
            target_id,
        }) => match run(&input_path, target_id) {
            Ok(summary) => {
                let json = serde_json::to_string(&summary).unwrap_or_default();
                tracing::debug!(summary = %json, "导入结果");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!(error = %format!("{:#}", e), "导入失败");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            tracing::error!(error = %e, "参数错误");
            ExitCode::FAILURE
        }
    };

    tracing::info!("completed in {:.1} seconds", start.elapsed().as_secs_f64());
    code
}

fn run(input_path: &Path, target_id: Option<i64>) -> anyhow::Result<ImportSummary> {
    let config = ImportConfig::load().context("加载配置失败")?;
    let db_path = config.db_path();
    tracing::info!(db_path = %db_path, "使用数据库");

    // 连接在 repo 被丢弃时关闭（包括错误路径）
    let repo = SqliteItemRepository::new(&db_path, config.database.busy_timeout_ms)
        .context("打开数据库失败")?;
    repo.ensure_schema().context("初始化 items 表失败")?;

    let importer = ItemImporter::new(repo, &config.import);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = importer
        .run(input_path, target_id, &mut out)
        .with_context(|| format!("导入 {} 失败", input_path.display()))?;
    out.flush()?;

    Ok(summary)
}
