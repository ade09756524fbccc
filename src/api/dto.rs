// ==========================================
// 项目排程假设分析系统 - API 数据传输对象
// ==========================================
// 职责: 请求/响应结构与覆盖约束定义
// 约定: 覆盖项为显式命名的可选字段结构, 在边界校验一次,
//       绝不以松散字典进入核心引擎
// ==========================================

use crate::config::Preferences;
use crate::domain::project::Project;
use crate::engine::{RankedScenario, SkippedStrategy};
use crate::importer::CmsProcessInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// 覆盖约束 (请求侧)
// ==========================================

/// 单资源覆盖项
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceOverride {
    #[serde(default)]
    pub hourly_rate: Option<f64>,

    #[serde(default)]
    pub max_hours_per_day: Option<f64>,

    #[serde(default)]
    pub available: Option<bool>,
}

/// 单任务覆盖项
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskOverride {
    #[serde(default)]
    pub duration_hours: Option<f64>,

    #[serde(default)]
    pub priority: Option<i32>,

    #[serde(default)]
    pub allow_parallel: Option<bool>,
}

/// 覆盖约束全集: 按实体ID索引 + 偏好权重
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverrideConstraints {
    #[serde(default)]
    pub resources: BTreeMap<String, ResourceOverride>,

    #[serde(default)]
    pub tasks: BTreeMap<String, TaskOverride>,

    #[serde(default)]
    pub preferences: Preferences,
}

impl OverrideConstraints {
    /// 是否有任一任务覆盖开启了并行
    pub fn has_parallel_tasks(&self) -> bool {
        self.tasks
            .values()
            .any(|t| t.allow_parallel == Some(true))
    }
}

// ==========================================
// 响应结构
// ==========================================

/// 标准多策略优化响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeProjectResponse {
    pub analysis_id: String,
    pub project_id: String,
    pub generated_at: DateTime<Utc>,
    pub best_scenario: Option<RankedScenario>,
    pub all_scenarios: Vec<RankedScenario>,
    pub skipped: Vec<SkippedStrategy>,
    pub message: String,
}

/// 自定义约束优化响应 (单场景)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeCustomResponse {
    pub analysis_id: String,
    pub project_id: String,
    pub generated_at: DateTime<Utc>,
    pub scenario: RankedScenario,
    /// 覆盖后的项目回显 (纯变换产物, 原项目未被改动)
    pub effective_project: Project,
    pub message: String,
}

/// 外部流程 (CMS) 优化响应: 基准 + 对比方案集
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeededOptimizeResponse {
    pub analysis_id: String,
    pub generated_at: DateTime<Utc>,
    pub process_info: CmsProcessInfo,
    pub baseline: RankedScenario,
    pub scenarios: Vec<RankedScenario>,
    pub skipped: Vec<SkippedStrategy>,
    pub message: String,
}
