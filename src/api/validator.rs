// ==========================================
// 项目排程假设分析系统 - 覆盖项校验器
// ==========================================
// 职责: 覆盖约束在排程开始前校验一次
// 校验项: 实体ID存在性 + 数值合法性 + 权重合法性
// ==========================================

use crate::api::dto::OverrideConstraints;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::project::Project;

/// 任务优先级取值范围
pub const PRIORITY_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

/// 校验覆盖约束
///
/// 全部违规一次性收集后拒绝, 便于调用方修正
pub fn validate_overrides(project: &Project, constraints: &OverrideConstraints) -> ApiResult<()> {
    let mut violations = Vec::new();

    for (resource_id, patch) in &constraints.resources {
        if project.find_resource(resource_id).is_none() {
            violations.push(format!("覆盖项引用未知资源: {}", resource_id));
            continue;
        }
        if let Some(rate) = patch.hourly_rate {
            if !(rate > 0.0) || !rate.is_finite() {
                violations.push(format!("资源{}时薪覆盖值非法: {}", resource_id, rate));
            }
        }
        if let Some(capacity) = patch.max_hours_per_day {
            if !(capacity > 0.0) || !capacity.is_finite() {
                violations.push(format!(
                    "资源{}单日工时覆盖值非法: {}",
                    resource_id, capacity
                ));
            }
        }
    }

    for (task_id, patch) in &constraints.tasks {
        if project.find_task(task_id).is_none() {
            violations.push(format!("覆盖项引用未知任务: {}", task_id));
            continue;
        }
        if let Some(duration) = patch.duration_hours {
            if !(duration > 0.0) || !duration.is_finite() {
                violations.push(format!("任务{}工时覆盖值非法: {}", task_id, duration));
            }
        }
        if let Some(priority) = patch.priority {
            if !PRIORITY_RANGE.contains(&priority) {
                violations.push(format!(
                    "任务{}优先级覆盖值非法: {} (允许 1..=5)",
                    task_id, priority
                ));
            }
        }
    }

    let prefs = &constraints.preferences;
    for (label, weight) in [
        ("time_priority", prefs.time_priority),
        ("cost_priority", prefs.cost_priority),
        ("quality_priority", prefs.quality_priority),
    ] {
        if weight < 0.0 || !weight.is_finite() {
            violations.push(format!("偏好权重{}非法: {}", label, weight));
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ApiError::InvalidOverride(violations.join("; ")))
    }
}
