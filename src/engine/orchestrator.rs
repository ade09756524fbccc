// ==========================================
// 项目排程假设分析系统 - 场景批量编排器
// ==========================================
// 职责: 多策略批量生成 + 评估 + 排名
// 红线: 单策略失败只跳过该策略 (记录原因), 批次永不整体中止;
//       Project 在整个批次内只读, 场景间无共享可变状态
// ==========================================

use crate::config::{EngineConfig, Preferences};
use crate::domain::project::Project;
use crate::domain::scenario::{Metrics, Scenario, SeededAssignment};
use crate::domain::types::OptimizationType;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::evaluator::ScenarioEvaluator;
use crate::engine::generator::ScenarioGenerator;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

// ==========================================
// 批次结果结构
// ==========================================

/// 已评估场景 (场景 + 指标成对返回)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedScenario {
    pub scenario: Scenario,
    pub metrics: Metrics,
}

/// 被跳过的策略及原因 (可解释性)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedStrategy {
    pub optimization_type: OptimizationType,
    pub reason: String,
}

/// 批次结果
///
/// scenarios 保持请求时的策略顺序; best_index 为综合得分最高者
/// (同分取靠前者, 保证可复现)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub scenarios: Vec<RankedScenario>,
    pub skipped: Vec<SkippedStrategy>,
    pub best_index: Option<usize>,
}

/// 外部基准批次结果: 基准方案 + 对比方案集
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeededOutcome {
    pub baseline: RankedScenario,
    pub scenarios: Vec<RankedScenario>,
    pub skipped: Vec<SkippedStrategy>,
}

// ==========================================
// ScenarioOrchestrator - 场景批量编排器
// ==========================================

pub struct ScenarioOrchestrator {
    config: EngineConfig,
}

impl ScenarioOrchestrator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// 并发批量生成 (每个策略一个阻塞工作线程)
    ///
    /// Project 只读, 场景之间相互独立, 无需加锁
    pub async fn run_batch(
        &self,
        project: &Project,
        strategies: &[OptimizationType],
        preferences: &Preferences,
    ) -> BatchOutcome {
        info!(
            project_id = %project.project_id,
            strategies_count = strategies.len(),
            "开始批量生成场景"
        );

        let shared = Arc::new(project.clone());
        let handles: Vec<_> = strategies
            .iter()
            .map(|&ty| {
                let project = Arc::clone(&shared);
                let config = self.config.clone();
                tokio::task::spawn_blocking(move || {
                    let generator = ScenarioGenerator::new(&project, &config);
                    (ty, generator.generate(ty))
                })
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for (&ty, handle) in strategies.iter().zip(futures::future::join_all(handles).await) {
            match handle {
                Ok(pair) => results.push(pair),
                Err(e) => results.push((
                    ty,
                    Err(EngineError::InternalError(format!("工作线程异常: {}", e))),
                )),
            }
        }

        self.finalize(project, results, preferences)
    }

    /// 同步批量生成 (供测试与无运行时调用方)
    pub fn run_batch_blocking(
        &self,
        project: &Project,
        strategies: &[OptimizationType],
        preferences: &Preferences,
    ) -> BatchOutcome {
        let generator = ScenarioGenerator::new(project, &self.config);
        let results = strategies
            .iter()
            .map(|&ty| (ty, generator.generate(ty)))
            .collect();
        self.finalize(project, results, preferences)
    }

    /// 外部基准批次: 基准复现 + 并行/成本优先/均衡 对比集
    ///
    /// 基准是对比锚点, 基准失败则整个请求失败;
    /// 对比策略仍然逐个降级
    pub async fn run_seeded_batch(
        &self,
        project: &Project,
        seeds: &[SeededAssignment],
        preferences: &Preferences,
    ) -> EngineResult<SeededOutcome> {
        let generator = ScenarioGenerator::new(project, &self.config);
        let baseline = generator.generate_seeded_baseline(seeds)?;

        let comparison = [
            OptimizationType::Parallel,
            OptimizationType::CostOptimized,
            OptimizationType::Balanced,
        ];
        let batch = self.run_batch(project, &comparison, preferences).await;

        // 基准与对比方案在同一候选集内归一化
        let mut all: Vec<Scenario> = Vec::with_capacity(1 + batch.scenarios.len());
        all.push(baseline);
        all.extend(batch.scenarios.into_iter().map(|r| r.scenario));

        let evaluator = ScenarioEvaluator::new(self.config.hours_per_day);
        let metrics = evaluator.evaluate_set(&all, project, preferences);

        let mut ranked: Vec<RankedScenario> = all
            .into_iter()
            .zip(metrics)
            .map(|(scenario, metrics)| RankedScenario { scenario, metrics })
            .collect();
        let baseline = ranked.remove(0);

        Ok(SeededOutcome {
            baseline,
            scenarios: ranked,
            skipped: batch.skipped,
        })
    }

    // ==========================================
    // 评估与排名
    // ==========================================

    fn finalize(
        &self,
        project: &Project,
        results: Vec<(OptimizationType, EngineResult<Scenario>)>,
        preferences: &Preferences,
    ) -> BatchOutcome {
        let mut scenarios = Vec::new();
        let mut skipped = Vec::new();

        for (ty, result) in results {
            match result {
                Ok(scenario) => {
                    debug!(
                        optimization_type = %ty,
                        total_duration_hours = scenario.total_duration_hours,
                        total_cost = scenario.total_cost,
                        "场景生成完成"
                    );
                    scenarios.push(scenario);
                }
                Err(e) => {
                    // 失败只影响本策略, 批次继续
                    warn!(optimization_type = %ty, reason = %e, "策略生成失败, 已跳过");
                    skipped.push(SkippedStrategy {
                        optimization_type: ty,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let evaluator = ScenarioEvaluator::new(self.config.hours_per_day);
        let metrics = evaluator.evaluate_set(&scenarios, project, preferences);

        let ranked: Vec<RankedScenario> = scenarios
            .into_iter()
            .zip(metrics)
            .map(|(scenario, metrics)| RankedScenario { scenario, metrics })
            .collect();

        let best_index = ranked
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| {
                a.metrics
                    .overall_score
                    .total_cmp(&b.metrics.overall_score)
                    .then(ib.cmp(ia))
            })
            .map(|(idx, _)| idx);

        info!(
            generated = ranked.len(),
            skipped = skipped.len(),
            "批量生成结束"
        );

        BatchOutcome {
            scenarios: ranked,
            skipped,
            best_index,
        }
    }
}
