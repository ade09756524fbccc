// ==========================================
// 项目排程假设分析系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与公共类型
// 红线: 不含数据访问逻辑, 不含引擎逻辑
// ==========================================

pub mod project;
pub mod resource;
pub mod scenario;
pub mod task;
pub mod types;

// 重导出核心类型
pub use project::Project;
pub use resource::Resource;
pub use scenario::{Assignment, Metrics, Scenario, SeededAssignment};
pub use task::{Task, DEFAULT_PRIORITY};
pub use types::{OptimizationType, ResourceRank};
