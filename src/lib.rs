// ==========================================
// 项目排程假设分析系统 - 核心库
// ==========================================
// 技术栈: Rust + Tokio
// 系统定位: 决策支持系统 (What-If 场景对比, 人工最终控制权)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 项目文档访问
pub mod repository;

// 引擎层 - 场景生成与多目标评估
pub mod engine;

// 导入层 - 外部系统文档
pub mod importer;

// 配置层 - 引擎参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    Assignment, Metrics, OptimizationType, Project, Resource, ResourceRank, Scenario,
    SeededAssignment, Task,
};

// 引擎
pub use engine::{
    BatchOutcome, DependencyResolver, EngineError, EngineResult, RankedScenario,
    ScenarioEvaluator, ScenarioGenerator, ScenarioOrchestrator, SkillMatcher, SkippedStrategy,
};

// 配置
pub use config::{EngineConfig, Preferences};

// API
pub use api::{ApiError, ApiResult, OptimizeApi, OverrideConstraints};

// 仓储
pub use repository::{FileProjectStore, ProjectReader};

// 导入
pub use importer::{CmsImporter, CmsProcess};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "项目排程假设分析系统";

// ==========================================
// 预编译检查
// ==========================================
