// ==========================================
// 项目排程假设分析系统 - 优化分析接口
// ==========================================
// 职责: 请求边界 — 加载项目 / 校验并应用覆盖 / 调度引擎 / 组装响应
// 红线: 覆盖应用是纯变换; 核心引擎不做 I/O;
//       多策略请求逐策略降级, 永不整体中止
// ==========================================

use crate::api::constraints::apply_overrides;
use crate::api::dto::{
    OptimizeCustomResponse, OptimizeProjectResponse, OverrideConstraints, SeededOptimizeResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::validate_overrides;
use crate::config::{EngineConfig, Preferences};
use crate::domain::project::Project;
use crate::domain::types::OptimizationType;
use crate::engine::{RankedScenario, ScenarioEvaluator, ScenarioGenerator, ScenarioOrchestrator};
use crate::importer::{CmsImporter, CmsProcess};
use crate::repository::{ProjectReader, ProjectSummary};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

// ==========================================
// OptimizeApi - 优化分析接口
// ==========================================
pub struct OptimizeApi<S>
where
    S: ProjectReader,
{
    store: Arc<S>,
    config: EngineConfig,
    orchestrator: ScenarioOrchestrator,
    importer: CmsImporter,
}

impl<S> OptimizeApi<S>
where
    S: ProjectReader,
{
    /// 构造函数 (默认引擎配置)
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: Arc<S>, config: EngineConfig) -> Self {
        Self {
            store,
            orchestrator: ScenarioOrchestrator::new(config.clone()),
            importer: CmsImporter::new(),
            config,
        }
    }

    // ==========================================
    // 项目列表
    // ==========================================

    /// 列出全部可用项目
    pub async fn list_processes(&self) -> ApiResult<Vec<ProjectSummary>> {
        Ok(self.store.list_projects().await?)
    }

    // ==========================================
    // 标准多策略优化
    // ==========================================

    /// 全策略批量优化: 六种标准策略 + 排名 + 最优推荐
    pub async fn optimize_project(&self, project_id: &str) -> ApiResult<OptimizeProjectResponse> {
        self.optimize_project_with_preferences(project_id, Preferences::default())
            .await
    }

    pub async fn optimize_project_with_preferences(
        &self,
        project_id: &str,
        preferences: Preferences,
    ) -> ApiResult<OptimizeProjectResponse> {
        if project_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("项目ID不能为空".to_string()));
        }

        let project = self.store.load_project(project_id).await?;

        let outcome = self
            .orchestrator
            .run_batch(&project, &OptimizationType::standard_set(), &preferences)
            .await;

        let best_scenario = outcome.best_index.map(|idx| outcome.scenarios[idx].clone());
        let message = format!(
            "已生成{}个场景（跳过{}个）",
            outcome.scenarios.len(),
            outcome.skipped.len()
        );

        info!(project_id = %project_id, scenarios = outcome.scenarios.len(), "全策略优化完成");

        Ok(OptimizeProjectResponse {
            analysis_id: uuid::Uuid::new_v4().to_string(),
            project_id: project_id.to_string(),
            generated_at: Utc::now(),
            best_scenario,
            all_scenarios: outcome.scenarios,
            skipped: outcome.skipped,
            message,
        })
    }

    // ==========================================
    // 自定义约束优化
    // ==========================================

    /// 带覆盖约束的单场景优化
    ///
    /// 策略选择 (与历史行为一致):
    /// 1) 任一任务覆盖开启并行 -> 自定义并行
    /// 2) 时间权重严格最高 -> 并行
    /// 3) 成本权重严格最高 -> 成本优先
    /// 4) 其余 -> 均衡
    pub async fn optimize_custom(
        &self,
        project_id: &str,
        constraints: OverrideConstraints,
    ) -> ApiResult<OptimizeCustomResponse> {
        if project_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("项目ID不能为空".to_string()));
        }

        let project = self.store.load_project(project_id).await?;
        validate_overrides(&project, &constraints)?;

        // 纯变换: 原项目不被改动
        let effective = apply_overrides(&project, &constraints);
        let strategy = Self::choose_custom_strategy(&constraints);
        let preferences = constraints.preferences.clone();

        info!(project_id = %project_id, optimization_type = %strategy, "自定义约束优化");

        let scenario = self
            .generate_on_worker(effective.clone(), strategy)
            .await?;

        let evaluator = ScenarioEvaluator::new(self.config.hours_per_day);
        let metrics = evaluator.evaluate(&scenario, &effective, &preferences);

        Ok(OptimizeCustomResponse {
            analysis_id: uuid::Uuid::new_v4().to_string(),
            project_id: project_id.to_string(),
            generated_at: Utc::now(),
            scenario: RankedScenario { scenario, metrics },
            effective_project: effective,
            message: format!("已按{}策略生成场景", strategy.title_cn()),
        })
    }

    fn choose_custom_strategy(constraints: &OverrideConstraints) -> OptimizationType {
        if constraints.has_parallel_tasks() {
            return OptimizationType::CustomParallel;
        }

        let prefs = &constraints.preferences;
        if prefs.time_priority > prefs.cost_priority
            && prefs.time_priority > prefs.quality_priority
        {
            OptimizationType::Parallel
        } else if prefs.cost_priority > prefs.time_priority
            && prefs.cost_priority > prefs.quality_priority
        {
            OptimizationType::CostOptimized
        } else {
            OptimizationType::Balanced
        }
    }

    // ==========================================
    // 外部流程 (CMS) 优化
    // ==========================================

    /// 外部流程优化: 基准复现 + 并行/成本优先/均衡对比集
    ///
    /// 文档校验与转换在导入层完成; 远端抓取/鉴权不属于本层
    pub async fn optimize_seeded_process(
        &self,
        process: CmsProcess,
        preferences: Option<Preferences>,
    ) -> ApiResult<SeededOptimizeResponse> {
        let import = self.importer.convert(process)?;
        let preferences = preferences.unwrap_or_default();

        info!(
            process_id = import.process_info.process_id,
            tasks = import.project.tasks.len(),
            "外部流程优化"
        );

        let outcome = self
            .orchestrator
            .run_seeded_batch(&import.project, &import.seeds, &preferences)
            .await?;

        let message = format!(
            "基准方案 + {}个对比方案（跳过{}个）",
            outcome.scenarios.len(),
            outcome.skipped.len()
        );

        Ok(SeededOptimizeResponse {
            analysis_id: uuid::Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            process_info: import.process_info,
            baseline: outcome.baseline,
            scenarios: outcome.scenarios,
            skipped: outcome.skipped,
            message,
        })
    }

    // ==========================================
    // 内部工具
    // ==========================================

    /// 单场景生成下放到阻塞工作线程 (引擎为纯 CPU 计算)
    async fn generate_on_worker(
        &self,
        project: Project,
        strategy: OptimizationType,
    ) -> ApiResult<crate::domain::scenario::Scenario> {
        let config = self.config.clone();
        let result = tokio::task::spawn_blocking(move || {
            let generator = ScenarioGenerator::new(&project, &config);
            generator.generate(strategy)
        })
        .await
        .map_err(|e| ApiError::InternalError(format!("工作线程异常: {}", e)))?;

        Ok(result?)
    }
}
