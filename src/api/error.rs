// ==========================================
// 项目排程假设分析系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型, 把各层技术错误转换为
//       用户可理解的业务错误
// 红线: 错误信息必须包含显式原因 (可解释性)
// ==========================================

use crate::engine::EngineError;
use crate::importer::ImportError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 请求/覆盖项错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 覆盖项引用未知实体或取值非法 — 在排程开始前拒绝
    #[error("覆盖项非法: {0}")]
    InvalidOverride(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 引擎错误 (局部于单策略, API 层聚合呈现)
    // ==========================================
    #[error("排程不可行: {0}")]
    Infeasible(String),

    #[error("产能约束不可满足: {0}")]
    CapacityExceeded(String),

    // ==========================================
    // 外围层错误
    // ==========================================
    #[error("外部文档导入失败: {0}")]
    ImportFailed(String),

    #[error("项目文档访问失败: {0}")]
    StoreError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从下层错误转换
// 目的: 把技术错误转换为用户友好的业务错误
// ==========================================

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{}(id={})不存在", entity, id))
            }
            RepositoryError::InvalidProjectId(id) => {
                ApiError::InvalidInput(format!("项目ID非法: {}", id))
            }
            RepositoryError::ValidationError(msg) => ApiError::InvalidInput(msg),
            RepositoryError::FileReadError(msg) | RepositoryError::ParseError(msg) => {
                ApiError::StoreError(msg)
            }
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Infeasible { .. } => ApiError::Infeasible(err.to_string()),
            EngineError::CapacityExceeded { .. } => ApiError::CapacityExceeded(err.to_string()),
            EngineError::UnknownSeedReference { .. } | EngineError::IncompleteSeed { .. } => {
                ApiError::InvalidInput(err.to_string())
            }
            EngineError::InternalError(msg) => ApiError::InternalError(msg),
            EngineError::Other(err) => ApiError::Other(err),
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::InternalError(msg) => ApiError::InternalError(msg),
            ImportError::Other(err) => ApiError::Other(err),
            other => ApiError::ImportFailed(other.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_conversion() {
        let repo_err = RepositoryError::NotFound {
            entity: "Project".to_string(),
            id: "P001".to_string(),
        };
        let api_err: ApiError = repo_err.into();
        match api_err {
            ApiError::NotFound(msg) => {
                assert!(msg.contains("Project"));
                assert!(msg.contains("P001"));
            }
            _ => panic!("Expected NotFound"),
        }
    }

    #[test]
    fn test_engine_error_conversion() {
        let engine_err = EngineError::Infeasible {
            task_id: "T1".to_string(),
            required_skills: "X".to_string(),
        };
        let api_err: ApiError = engine_err.into();
        assert!(matches!(api_err, ApiError::Infeasible(_)));
    }
}
