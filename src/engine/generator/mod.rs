// ==========================================
// 项目排程假设分析系统 - 场景生成引擎
// ==========================================
// 职责: Project + 策略 -> Scenario (一次性构建)
// 输入: 只读 Project + 引擎配置
// 输出: 资源已落位、时间已展开的完整排程方案
// 红线: 任一任务不可行则该场景整体失败, 不产生部分方案;
//       失败只影响本策略, 不影响同批次其他策略
// ==========================================

mod leveling;
mod scheduling;
mod seeded;

use crate::config::EngineConfig;
use crate::domain::project::Project;
use crate::domain::scenario::{Assignment, Scenario, SeededAssignment};
use crate::domain::types::{OptimizationType, ResourceRank};
use crate::engine::critical_path;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::evaluator;
use crate::engine::matcher::SkillMatcher;
use crate::engine::resolver::DependencyResolver;

// ==========================================
// ScenarioGenerator - 场景生成引擎
// ==========================================
pub struct ScenarioGenerator<'a> {
    project: &'a Project,
    config: &'a EngineConfig,
    matcher: SkillMatcher,
    resolver: DependencyResolver,
}

impl<'a> ScenarioGenerator<'a> {
    /// 构造函数
    ///
    /// # 参数
    /// - `project`: 只读项目 (覆盖项须由调用方先行应用)
    /// - `config`: 引擎配置
    pub fn new(project: &'a Project, config: &'a EngineConfig) -> Self {
        Self {
            project,
            config,
            matcher: SkillMatcher::new(),
            resolver: DependencyResolver::new(),
        }
    }

    // ==========================================
    // 策略分发
    // ==========================================

    /// 按策略生成一个场景
    ///
    /// 外部基准需要指派种子, 请改用 `generate_seeded_baseline`
    pub fn generate(&self, optimization_type: OptimizationType) -> EngineResult<Scenario> {
        match optimization_type {
            OptimizationType::Baseline => self.generate_baseline(),
            OptimizationType::Parallel => self.generate_parallel(),
            OptimizationType::CostOptimized => self.generate_cost_optimized(),
            OptimizationType::Balanced => self.generate_balanced(),
            OptimizationType::CriticalPath => self.generate_critical_path(),
            OptimizationType::ResourceLeveling => self.generate_resource_leveling(),
            OptimizationType::CustomParallel => self.generate_custom_parallel(),
            OptimizationType::SeededBaseline => Err(EngineError::InternalError(
                "外部基准场景需要指派种子, 请使用 generate_seeded_baseline".to_string(),
            )),
        }
    }

    // ==========================================
    // 各策略实现
    // ==========================================

    /// 基准: 严格按 order 串行, 高产能资源
    pub fn generate_baseline(&self) -> EngineResult<Scenario> {
        let plan = self.resolver.resolve_sequential(&self.project.tasks);
        let assignments = scheduling::schedule_stages(&plan, |task| {
            self.matcher
                .best(task, &self.project.resources, ResourceRank::CapacityFirst)
        })?;
        Ok(self.build(OptimizationType::Baseline, assignments))
    }

    /// 并行: 解析合并阶段, 阶段并发执行, 高产能资源
    pub fn generate_parallel(&self) -> EngineResult<Scenario> {
        let plan = self.resolver.resolve(&self.project.tasks);
        let assignments = scheduling::schedule_stages(&plan, |task| {
            self.matcher
                .best(task, &self.project.resources, ResourceRank::CapacityFirst)
        })?;
        Ok(self.build(OptimizationType::Parallel, assignments))
    }

    /// 成本优先: 严格串行, 最便宜资源
    pub fn generate_cost_optimized(&self) -> EngineResult<Scenario> {
        let plan = self.resolver.resolve_sequential(&self.project.tasks);
        let assignments = scheduling::schedule_stages(&plan, |task| {
            self.matcher
                .best(task, &self.project.resources, ResourceRank::CheapestFirst)
        })?;
        Ok(self.build(OptimizationType::CostOptimized, assignments))
    }

    /// 均衡: 有限宽度的选择性合并 + 性价比选人
    pub fn generate_balanced(&self) -> EngineResult<Scenario> {
        let plan = self
            .resolver
            .resolve_with_width(&self.project.tasks, self.config.balanced_stage_width);
        let assignments = scheduling::schedule_stages(&plan, |task| {
            self.matcher
                .best(task, &self.project.resources, ResourceRank::BalancedValue)
        })?;
        Ok(self.build(OptimizationType::Balanced, assignments))
    }

    /// 关键路径: 关键任务独占高产能资源, 其余取最便宜
    pub fn generate_critical_path(&self) -> EngineResult<Scenario> {
        let plan = self.resolver.resolve(&self.project.tasks);
        let path = critical_path::analyze(&plan);

        let assignments = scheduling::schedule_stages(&plan, |task| {
            let rank = if path.contains(&task.task_id) {
                ResourceRank::CapacityFirst
            } else {
                ResourceRank::CheapestFirst
            };
            self.matcher.best(task, &self.project.resources, rank)
        })?;
        Ok(self.build(OptimizationType::CriticalPath, assignments))
    }

    /// 资源平准: 串行 + 单日产能约束顺延
    pub fn generate_resource_leveling(&self) -> EngineResult<Scenario> {
        let assignments = leveling::schedule(self.project, self.config, &self.matcher)?;
        Ok(self.build(OptimizationType::ResourceLeveling, assignments))
    }

    /// 自定义并行: 调用方覆盖项已应用到 Project,
    /// 按覆盖后的 allow_parallel/duration/priority 解析阶段
    pub fn generate_custom_parallel(&self) -> EngineResult<Scenario> {
        let plan = self.resolver.resolve(&self.project.tasks);
        let assignments = scheduling::schedule_stages(&plan, |task| {
            self.matcher
                .best(task, &self.project.resources, ResourceRank::CapacityFirst)
        })?;
        Ok(self.build(OptimizationType::CustomParallel, assignments))
    }

    /// 外部基准: 逐字复现给定指派, 只算工期/成本/质量
    pub fn generate_seeded_baseline(
        &self,
        seeds: &[SeededAssignment],
    ) -> EngineResult<Scenario> {
        let assignments = seeded::schedule(self.project, seeds)?;
        Ok(self.build(OptimizationType::SeededBaseline, assignments))
    }

    // ==========================================
    // 快照构建
    // ==========================================

    fn build(&self, optimization_type: OptimizationType, assignments: Vec<Assignment>) -> Scenario {
        let quality = evaluator::quality_score(self.project, &assignments);
        Scenario::from_assignments(
            optimization_type,
            assignments,
            self.project,
            quality,
            self.config.hours_per_day,
        )
    }
}
