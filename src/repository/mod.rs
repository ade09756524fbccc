// ==========================================
// 项目排程假设分析系统 - 数据仓储层
// ==========================================
// 职责: 项目定义文档的读取与解析
// 红线: 不含排程逻辑; 引擎永不接触原始文档
// ==========================================

pub mod error;
pub mod project_store;

// 重导出核心类型
pub use error::{RepositoryError, RepositoryResult};
pub use project_store::{
    FileProjectStore, ProjectDocument, ProjectReader, ProjectSummary, ResourceDocument,
    TaskDocument,
};
