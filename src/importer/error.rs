// ==========================================
// 项目排程假设分析系统 - 导入模块错误类型
// ==========================================
// 依据: Rust 错误处理最佳实践
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
///
/// 外部系统文档缺字段/值非法在适配层拦截, 永不进入核心引擎
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文档解析错误 =====
    #[error("CMS 文档解析失败: {0}")]
    ParseError(String),

    // ===== 结构校验错误 =====
    #[error("必填字段缺失: {field}")]
    MissingField { field: String },

    #[error("流程不含任何任务: process_id={0}")]
    EmptyProcess(i64),

    #[error("任务{task}无合格岗位: 至少需要一个 jobTask")]
    NoQualifiedJob { task: String },

    #[error("字段值非法 (field={field}): {message}")]
    InvalidValue { field: String, message: String },

    #[error("任务顺序位置重复: order={0}")]
    DuplicateOrder(i64),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
