// ==========================================
// 项目排程假设分析系统 - 外部基准排程器
// ==========================================
// 职责: 逐字复现外部系统给定的任务->资源指派,
//       只计算工期/成本/质量, 不做资格校验
// 约定: 不校验技能覆盖 — 质量评分的降级路径仅在此可达
// ==========================================

use crate::domain::project::Project;
use crate::domain::scenario::{Assignment, SeededAssignment};
use crate::engine::error::{EngineError, EngineResult};
use std::collections::HashMap;

/// 外部基准排程
///
/// 任务严格按 order 串行, 资源取外部指派;
/// 指派引用未知任务/资源或覆盖不全时整体失败
pub(crate) fn schedule(
    project: &Project,
    seeds: &[SeededAssignment],
) -> EngineResult<Vec<Assignment>> {
    let mut seed_map: HashMap<&str, &str> = HashMap::with_capacity(seeds.len());
    for seed in seeds {
        if project.find_task(&seed.task_id).is_none() {
            return Err(EngineError::UnknownSeedReference {
                entity: "任务".to_string(),
                id: seed.task_id.clone(),
            });
        }
        if project.find_resource(&seed.resource_id).is_none() {
            return Err(EngineError::UnknownSeedReference {
                entity: "资源".to_string(),
                id: seed.resource_id.clone(),
            });
        }
        seed_map.insert(seed.task_id.as_str(), seed.resource_id.as_str());
    }

    let mut assignments = Vec::new();
    let mut cursor = 0.0_f64;

    for task in project.tasks_in_order() {
        let resource_id = seed_map.get(task.task_id.as_str()).ok_or_else(|| {
            EngineError::IncompleteSeed {
                task_id: task.task_id.clone(),
            }
        })?;

        let start_hour = cursor;
        let end_hour = start_hour + task.duration_hours;
        assignments.push(Assignment {
            task_id: task.task_id.clone(),
            resource_id: resource_id.to_string(),
            start_hour,
            end_hour,
            hours_allocated: task.duration_hours,
        });
        cursor = end_hour;
    }

    Ok(assignments)
}
