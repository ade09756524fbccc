// ==========================================
// 项目排程假设分析系统 - 覆盖约束应用
// ==========================================
// 职责: 覆盖约束 -> 新 Project (纯变换)
// 红线: 绝不就地修改共享项目数据 — 并发/重复请求互不干扰
// ==========================================

use crate::api::dto::OverrideConstraints;
use crate::domain::project::Project;

/// 应用覆盖约束, 产生新 Project
///
/// 口径:
/// - 资源: 时薪/单日工时按覆盖值替换; available=false 的资源保留在
///   资源池中但不再参与匹配 (可用性由匹配器统一过滤)
/// - 任务: 工时/优先级/并行标志按覆盖值替换
/// - 未被覆盖的实体原样保留
///
/// 调用前须先通过 `validator::validate_overrides`
pub fn apply_overrides(project: &Project, constraints: &OverrideConstraints) -> Project {
    let mut effective = project.clone();

    for resource in &mut effective.resources {
        if let Some(patch) = constraints.resources.get(&resource.resource_id) {
            if let Some(rate) = patch.hourly_rate {
                resource.hourly_rate = rate;
            }
            if let Some(capacity) = patch.max_hours_per_day {
                resource.max_hours_per_day = capacity;
            }
            if let Some(available) = patch.available {
                resource.available = available;
            }
        }
    }

    for task in &mut effective.tasks {
        if let Some(patch) = constraints.tasks.get(&task.task_id) {
            if let Some(duration) = patch.duration_hours {
                task.duration_hours = duration;
            }
            if let Some(priority) = patch.priority {
                task.priority = priority;
            }
            if let Some(allow_parallel) = patch.allow_parallel {
                task.allow_parallel = allow_parallel;
            }
        }
    }

    effective
}
