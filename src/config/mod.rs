// ==========================================
// 项目排程假设分析系统 - 配置层
// ==========================================
// 职责: 引擎参数与偏好权重
// ==========================================

pub mod engine_config;

// 重导出核心配置类型
pub use engine_config::{EngineConfig, Preferences};
