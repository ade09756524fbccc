// ==========================================
// 项目排程假设分析系统 - 阶段排程器
// ==========================================
// 职责: 执行计划 -> 落位明细 (所有阶段化策略共用)
// 约定: 阶段之间为屏障 — 下一阶段在上一阶段全部结束后开始;
//       阶段内按 (priority 降序, order 升序) 处理资源争用,
//       同一资源串行占道, 保证区间不重叠
// ==========================================

use crate::domain::resource::Resource;
use crate::domain::scenario::Assignment;
use crate::domain::task::Task;
use crate::engine::error::EngineResult;
use crate::engine::resolver::ExecutionPlan;
use std::collections::BTreeMap;

/// 按阶段排程
///
/// # 参数
/// - `plan`: 解析后的执行计划
/// - `pick`: 资源选择器 (由策略决定排序键; 无合格资源时返回 Infeasible)
///
/// # 返回
/// 按任务 order 排序的落位明细; 任一任务不可行则整体失败, 不产生部分方案
pub(crate) fn schedule_stages<'a, F>(
    plan: &ExecutionPlan,
    mut pick: F,
) -> EngineResult<Vec<Assignment>>
where
    F: FnMut(&Task) -> EngineResult<&'a Resource>,
{
    // 资源占道表: resource_id -> 该资源下一次空闲时刻
    let mut lanes: BTreeMap<String, f64> = BTreeMap::new();
    let mut keyed: Vec<(i32, Assignment)> = Vec::new();
    let mut stage_start = 0.0_f64;

    for stage in &plan.stages {
        let mut stage_end = stage_start;

        for task in stage.tasks_by_contention() {
            let resource = pick(task)?;

            let lane_free = lanes
                .get(resource.resource_id.as_str())
                .copied()
                .unwrap_or(0.0);
            let start_hour = stage_start.max(lane_free);
            let end_hour = start_hour + task.duration_hours;

            lanes.insert(resource.resource_id.clone(), end_hour);
            stage_end = stage_end.max(end_hour);

            keyed.push((
                task.order,
                Assignment {
                    task_id: task.task_id.clone(),
                    resource_id: resource.resource_id.clone(),
                    start_hour,
                    end_hour,
                    hours_allocated: task.duration_hours,
                },
            ));
        }

        // 屏障: 下一阶段从本阶段最晚结束时刻开始
        stage_start = stage_end;
    }

    keyed.sort_by_key(|(order, _)| *order);
    Ok(keyed.into_iter().map(|(_, a)| a).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::DEFAULT_PRIORITY;
    use crate::engine::resolver::DependencyResolver;

    fn task(id: &str, order: i32, duration: f64, parallel: bool) -> Task {
        Task {
            task_id: id.to_string(),
            name: None,
            duration_hours: duration,
            required_skills: [format!("skill_{}", id)].into_iter().collect(),
            order,
            priority: DEFAULT_PRIORITY,
            allow_parallel: parallel,
        }
    }

    fn resource(id: &str) -> Resource {
        Resource {
            resource_id: id.to_string(),
            name: None,
            hourly_rate: 50.0,
            max_hours_per_day: 8.0,
            skills: std::collections::BTreeSet::new(),
            available: true,
        }
    }

    #[test]
    fn test_shared_resource_serializes_within_stage() {
        let resolver = DependencyResolver::new();
        let tasks = vec![task("T1", 1, 4.0, true), task("T2", 2, 6.0, true)];
        let plan = resolver.resolve(&tasks);
        assert_eq!(plan.stage_count(), 1);

        // 两个任务都落到同一资源: 阶段内必须串行占道
        let shared = resource("R1");
        let assignments = schedule_stages(&plan, |_| Ok(&shared)).unwrap();

        assert_eq!(assignments[0].start_hour, 0.0);
        assert_eq!(assignments[0].end_hour, 4.0);
        assert_eq!(assignments[1].start_hour, 4.0);
        assert_eq!(assignments[1].end_hour, 10.0);
    }

    #[test]
    fn test_distinct_resources_share_stage_start() {
        let resolver = DependencyResolver::new();
        let tasks = vec![
            task("T1", 1, 4.0, false),
            task("T2", 2, 6.0, true),
            task("T3", 3, 2.0, true),
        ];
        let plan = resolver.resolve(&tasks);

        let r1 = resource("R1");
        let r2 = resource("R2");
        let assignments = schedule_stages(&plan, |t| {
            if t.task_id == "T3" {
                Ok(&r2)
            } else {
                Ok(&r1)
            }
        })
        .unwrap();

        // T2/T3 并行, 共享阶段开始时刻 4.0; 总工期 = 4 + max(6,2) = 10
        assert_eq!(assignments[1].start_hour, 4.0);
        assert_eq!(assignments[2].start_hour, 4.0);
        let total = assignments
            .iter()
            .map(|a| a.end_hour)
            .fold(0.0_f64, f64::max);
        assert_eq!(total, 10.0);
    }
}
