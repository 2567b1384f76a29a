// ==========================================
// 物品数据导入工具 - 管道分隔文件解析器
// ==========================================
// 格式: 字段分隔符 '|'，首行为表头，其后每行一个物品
// 引号: 宽松处理（未加引号字段中的引号按字面保留）
// 行长: 不强制一致（列数校验交给字段映射器）
// 编码: 按字节读取，非 UTF-8 字节替换为 U+FFFD 后照常导入
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use csv::{ByteRecordsIntoIter, ReaderBuilder};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 字段分隔符
pub const FIELD_DELIMITER: u8 = b'|';

pub struct PipeFileParser;

impl PipeFileParser {
    /// 打开输入文件
    pub fn open(path: &Path) -> ImportResult<PipeRecords<File>> {
        let file = File::open(path).map_err(|e| ImportError::CannotOpen {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::from_reader(file))
    }

    /// 从任意 Read 构造逐行读取器
    pub fn from_reader<R: Read>(reader: R) -> PipeRecords<R> {
        let reader = ReaderBuilder::new()
            .delimiter(FIELD_DELIMITER)
            .has_headers(false) // 表头由调用方按首行读取
            .flexible(true) // 允许行长度不一致
            .quoting(true)
            .double_quote(true)
            .from_reader(reader);

        PipeRecords {
            inner: reader.into_byte_records(),
            line: 0,
        }
    }
}

// ==========================================
// PipeRecords - 逐行读取
// ==========================================
// 产出 (行号, 读取结果)，行号从 1 开始（表头为第 1 行）
pub struct PipeRecords<R> {
    inner: ByteRecordsIntoIter<R>,
    line: usize,
}

impl<R: Read> Iterator for PipeRecords<R> {
    type Item = (usize, Result<Vec<String>, csv::Error>);

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        self.line += 1;
        let fields = result.map(|record| {
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect()
        });
        Some((self.line, fields))
    }
}

/// 读取错误是否为底层 I/O 失败（不可跳过）
pub fn is_io_error(err: &csv::Error) -> bool {
    matches!(err.kind(), csv::ErrorKind::Io(_))
}
