// ==========================================
// 项目排程假设分析系统 - 多目标评估引擎
// ==========================================
// 职责: Scenario -> Metrics (时间/成本/质量/综合)
// 输入: 候选场景集合 + 项目 + 偏好权重
// 输出: 与候选集合一一对应的 Metrics
// 红线: 加权求和排名, 不做 Pareto 支配过滤;
//       被支配场景照常返回调用方
// ==========================================

use crate::config::Preferences;
use crate::domain::project::Project;
use crate::domain::scenario::{Assignment, Metrics, Scenario};
use std::collections::BTreeSet;

// ==========================================
// ScenarioEvaluator - 多目标评估引擎
// ==========================================
pub struct ScenarioEvaluator {
    hours_per_day: f64,
}

impl ScenarioEvaluator {
    pub fn new(hours_per_day: f64) -> Self {
        Self { hours_per_day }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 评估候选集合
    ///
    /// 归一化口径: 每个原始指标 (工期小时数/成本) 在候选集合内线性缩放到 [0,1],
    /// 最优=1.0, 最差=0.0, 全员同分=1.0 — 避免量纲大的轴 (如货币成本)
    /// 仅凭绝对数值支配加权和。quality_score 本身在 [0,1], 直接使用。
    ///
    /// # 参数
    /// - `scenarios`: 同一项目下的候选场景
    /// - `project`: 项目 (取时薪等原始数据)
    /// - `preferences`: 三轴相对权重 (不要求归一化)
    ///
    /// # 返回
    /// 与 `scenarios` 顺序一致的 Metrics 列表
    pub fn evaluate_set(
        &self,
        scenarios: &[Scenario],
        project: &Project,
        preferences: &Preferences,
    ) -> Vec<Metrics> {
        let durations: Vec<f64> = scenarios.iter().map(|s| s.total_duration_hours).collect();
        let costs: Vec<f64> = scenarios.iter().map(|s| s.total_cost).collect();

        scenarios
            .iter()
            .enumerate()
            .map(|(idx, scenario)| {
                let time_score = inverse_normalized(durations[idx], &durations);
                let cost_score = inverse_normalized(costs[idx], &costs);
                // 质量按落位明细重算, 不信任场景快照上的缓存值
                let quality = quality_score(project, &scenario.assignments);
                let overall_score = preferences.time_priority * time_score
                    + preferences.cost_priority * cost_score
                    + preferences.quality_priority * quality;

                Metrics {
                    total_time_days: scenario.total_duration_hours / self.hours_per_day,
                    total_cost: scenario.total_cost,
                    quality_score: quality,
                    resource_utilization: resource_utilization(&scenario.assignments),
                    time_score,
                    cost_score,
                    overall_score,
                }
            })
            .collect()
    }

    /// 评估单个场景 (退化为单元素候选集: 时间/成本得分恒为 1.0)
    pub fn evaluate(
        &self,
        scenario: &Scenario,
        project: &Project,
        preferences: &Preferences,
    ) -> Metrics {
        let quality = quality_score(project, &scenario.assignments);
        Metrics {
            total_time_days: scenario.total_duration_hours / self.hours_per_day,
            total_cost: scenario.total_cost,
            quality_score: quality,
            resource_utilization: resource_utilization(&scenario.assignments),
            time_score: 1.0,
            cost_score: 1.0,
            overall_score: preferences.time_priority
                + preferences.cost_priority
                + preferences.quality_priority * quality,
        }
    }
}

// ==========================================
// 质量评分
// ==========================================

/// 场景质量得分: 各任务质量贡献的平均值 (空场景为 1.0)
///
/// 单任务口径:
/// - 空要求 -> 1.0 (无要求即完美匹配)
/// - 技能集合恰好相等 -> 1.0
/// - 严格超集 (过度胜任) -> |要求| / |资源技能| (线性衰减, 轻惩罚)
/// - 缺失要求技能 (仅外部指派路径可达) -> 覆盖率 × 0.5 (重惩罚)
pub fn quality_score(project: &Project, assignments: &[Assignment]) -> f64 {
    if assignments.is_empty() {
        return 1.0;
    }

    let total: f64 = assignments
        .iter()
        .map(|assignment| {
            let task = project.find_task(&assignment.task_id);
            let resource = project.find_resource(&assignment.resource_id);
            match (task, resource) {
                (Some(task), Some(resource)) => {
                    task_quality(&task.required_skills, &resource.skills)
                }
                // 引用不存在的任务/资源: 视为最重缺配
                _ => 0.0,
            }
        })
        .sum();

    total / assignments.len() as f64
}

fn task_quality(required: &BTreeSet<String>, skills: &BTreeSet<String>) -> f64 {
    if required.is_empty() {
        return 1.0;
    }

    let matched = required.intersection(skills).count();
    if matched < required.len() {
        // 降级模式: 缺失要求技能
        let coverage = matched as f64 / required.len() as f64;
        return coverage * 0.5;
    }

    if skills.len() == required.len() {
        1.0
    } else {
        required.len() as f64 / skills.len() as f64
    }
}

// ==========================================
// 归一化与利用率
// ==========================================

/// 逆向线性归一化: 值越低得分越高, 最优=1.0, 最差=0.0, 全员同分=1.0
fn inverse_normalized(value: f64, values: &[f64]) -> f64 {
    let best = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let worst = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if (worst - best).abs() < f64::EPSILON {
        return 1.0;
    }
    (worst - value) / (worst - best)
}

/// 资源利用率: Σ工作工时 / (总工期 × 参与资源数), 截断到 [0,1]
fn resource_utilization(assignments: &[Assignment]) -> f64 {
    let total_span = assignments
        .iter()
        .map(|a| a.end_hour)
        .fold(0.0_f64, f64::max);
    if total_span <= 0.0 {
        return 0.0;
    }

    let used_resources: BTreeSet<&str> = assignments
        .iter()
        .map(|a| a.resource_id.as_str())
        .collect();
    if used_resources.is_empty() {
        return 0.0;
    }

    let worked: f64 = assignments.iter().map(|a| a.hours_allocated).sum();
    (worked / (total_span * used_resources.len() as f64)).clamp(0.0, 1.0)
}
