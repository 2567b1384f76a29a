// ==========================================
// 物品数据导入工具 - 命令行参数
// ==========================================
// 用法: itemimport <input-path> [target-id]
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use std::path::PathBuf;

/// 用法提示
pub const USAGE: &str = "usage: itemimport items.txt [itemid]";

/// 解析后的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// 缺少输入路径，打印用法后以错误码退出
    Usage,
    Import {
        input_path: PathBuf,
        target_id: Option<i64>,
    },
}

/// 解析命令行参数（不含程序名）
pub fn parse_args<I>(args: I) -> ImportResult<CliCommand>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();

    let Some(input_path) = args.next() else {
        return Ok(CliCommand::Usage);
    };

    let target_id = args.next().map(|raw| parse_target_id(&raw)).transpose()?;

    Ok(CliCommand::Import {
        input_path: PathBuf::from(input_path),
        target_id,
    })
}

/// 解析目标物品 ID（必须为正整数）
pub fn parse_target_id(raw: &str) -> ImportResult<i64> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ImportError::InvalidTargetId(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_missing_path() {
        assert_eq!(parse_args(args(&[])).unwrap(), CliCommand::Usage);
    }

    #[test]
    fn test_parse_args_path_only() {
        assert_eq!(
            parse_args(args(&["items.txt"])).unwrap(),
            CliCommand::Import {
                input_path: PathBuf::from("items.txt"),
                target_id: None,
            }
        );
    }

    #[test]
    fn test_parse_args_with_target() {
        assert_eq!(
            parse_args(args(&["items.txt", "42"])).unwrap(),
            CliCommand::Import {
                input_path: PathBuf::from("items.txt"),
                target_id: Some(42),
            }
        );
    }

    #[test]
    fn test_parse_target_id_rejects_invalid() {
        assert!(matches!(
            parse_args(args(&["items.txt", "abc"])),
            Err(ImportError::InvalidTargetId(_))
        ));
        assert!(parse_target_id("0").is_err());
        assert!(parse_target_id("-3").is_err());
        assert!(parse_target_id("4.5").is_err());
    }
}
