// ==========================================
// 项目排程假设分析系统 - 引擎层
// ==========================================
// 职责: 场景生成与多目标评估的业务规则
// 红线: 引擎不做 I/O, 不打日志输出结论 — 只返回类型化结果;
//       失败局部化, 不跨策略传播
// ==========================================

pub mod critical_path;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod matcher;
pub mod orchestrator;
pub mod resolver;

// 重导出核心引擎
pub use critical_path::CriticalPath;
pub use error::{EngineError, EngineResult};
pub use evaluator::ScenarioEvaluator;
pub use generator::ScenarioGenerator;
pub use matcher::SkillMatcher;
pub use orchestrator::{
    BatchOutcome, RankedScenario, ScenarioOrchestrator, SeededOutcome, SkippedStrategy,
};
pub use resolver::{DependencyResolver, ExecutionPlan, Stage};
