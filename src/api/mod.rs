// ==========================================
// 项目排程假设分析系统 - API 层
// ==========================================
// 职责: 请求边界 — 校验输入、应用覆盖、调度引擎、组装响应
// 红线: 本层不含排程算法; 错误带显式原因
// ==========================================

pub mod constraints;
pub mod dto;
pub mod error;
pub mod optimize_api;
pub mod validator;

// 重导出核心类型
pub use constraints::apply_overrides;
pub use dto::{
    OptimizeCustomResponse, OptimizeProjectResponse, OverrideConstraints, ResourceOverride,
    SeededOptimizeResponse, TaskOverride,
};
pub use error::{ApiError, ApiResult};
pub use optimize_api::OptimizeApi;
pub use validator::validate_overrides;
