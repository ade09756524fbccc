// ==========================================
// 项目排程假设分析系统 - 关键路径分析
// ==========================================
// 职责: 阶段化执行计划 -> 最长工时链
// 约定: 无并行时关键路径为全链; 有并行时取各阶段最长任务
// ==========================================

use crate::engine::resolver::ExecutionPlan;
use std::collections::BTreeSet;

// ==========================================
// CriticalPath - 关键路径
// ==========================================
#[derive(Debug, Clone)]
pub struct CriticalPath {
    pub task_ids: BTreeSet<String>, // 关键任务集合
    pub total_hours: f64,           // 路径总工时 = 工期下界
}

impl CriticalPath {
    pub fn contains(&self, task_id: &str) -> bool {
        self.task_ids.contains(task_id)
    }
}

/// 计算执行计划的关键路径
///
/// 每个阶段取工时最长的任务 (同长取 order 最小, 保证可复现),
/// 其工时之和即该计划不可压缩的工期下界
pub fn analyze(plan: &ExecutionPlan) -> CriticalPath {
    let mut task_ids = BTreeSet::new();
    let mut total_hours = 0.0;

    for stage in &plan.stages {
        let critical = stage
            .tasks
            .iter()
            .max_by(|a, b| {
                a.duration_hours
                    .total_cmp(&b.duration_hours)
                    .then(b.order.cmp(&a.order))
            });

        if let Some(task) = critical {
            task_ids.insert(task.task_id.clone());
            total_hours += task.duration_hours;
        }
    }

    CriticalPath {
        task_ids,
        total_hours,
    }
}
