// ==========================================
// 项目排程假设分析系统 - 依赖/并行解析引擎
// ==========================================
// 职责: 任务 order 依赖链 + allow_parallel 标志 -> 阶段化执行计划
// 输入: 任务集合
// 输出: ExecutionPlan (阶段序列, 阶段内任务可共享开始时刻)
// 红线: priority 只影响阶段内资源争用排序, 不改变阶段归属
// ==========================================

use crate::domain::task::Task;

// ==========================================
// Stage - 可同时开始的任务组
// ==========================================
#[derive(Debug, Clone)]
pub struct Stage {
    pub tasks: Vec<Task>,
}

impl Stage {
    /// 阶段内最长任务工时 (关键路径贡献)
    pub fn longest_duration(&self) -> f64 {
        self.tasks
            .iter()
            .map(|t| t.duration_hours)
            .fold(0.0_f64, f64::max)
    }

    /// 阶段内资源争用处理顺序: priority 降序, 同分按 order 升序
    pub fn tasks_by_contention(&self) -> Vec<&Task> {
        let mut ordered: Vec<&Task> = self.tasks.iter().collect();
        ordered.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.order.cmp(&b.order)));
        ordered
    }
}

// ==========================================
// ExecutionPlan - 阶段化执行计划
// ==========================================
#[derive(Debug, Clone)]
pub struct ExecutionPlan {
    pub stages: Vec<Stage>,
}

impl ExecutionPlan {
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// 是否存在真实并行 (任一阶段宽度 > 1)
    pub fn has_parallelism(&self) -> bool {
        self.stages.iter().any(|s| s.tasks.len() > 1)
    }
}

// ==========================================
// DependencyResolver - 依赖/并行解析引擎
// ==========================================
pub struct DependencyResolver {
    // 无状态引擎, 不需要注入依赖
}

impl DependencyResolver {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 基准语义: 每个任务独占一个阶段, 严格按 order 串行
    pub fn resolve_sequential(&self, tasks: &[Task]) -> ExecutionPlan {
        let mut ordered = tasks.to_vec();
        ordered.sort_by_key(|t| t.order);

        ExecutionPlan {
            stages: ordered
                .into_iter()
                .map(|t| Stage { tasks: vec![t] })
                .collect(),
        }
    }

    /// 并行语义: allow_parallel 任务尽可能合并阶段
    pub fn resolve(&self, tasks: &[Task]) -> ExecutionPlan {
        self.resolve_with_width(tasks, usize::MAX)
    }

    /// 带阶段宽度上限的解析 (均衡策略的选择性合并)
    ///
    /// 合并规则: 任务按 order 遍历; allow_parallel=true 的任务并入当前阶段,
    /// 当且仅当:
    /// 1) 当前阶段全部任务也是 allow_parallel;
    /// 2) 与阶段内任一任务无技能冲突;
    /// 3) 阶段宽度未达上限。
    /// 否则开启新阶段。
    pub fn resolve_with_width(&self, tasks: &[Task], max_width: usize) -> ExecutionPlan {
        let mut ordered = tasks.to_vec();
        ordered.sort_by_key(|t| t.order);

        let mut stages: Vec<Stage> = Vec::new();

        for task in ordered {
            let mergeable = task.allow_parallel
                && stages.last().map_or(false, |stage| {
                    stage.tasks.len() < max_width
                        && stage.tasks.iter().all(|existing| {
                            existing.allow_parallel && !existing.skills_conflict(&task)
                        })
                });

            match stages.last_mut() {
                Some(stage) if mergeable => stage.tasks.push(task),
                _ => stages.push(Stage { tasks: vec![task] }),
            }
        }

        ExecutionPlan { stages }
    }
}

impl Default for DependencyResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::DEFAULT_PRIORITY;

    fn task(id: &str, order: i32, duration: f64, skills: &[&str], parallel: bool) -> Task {
        Task {
            task_id: id.to_string(),
            name: None,
            duration_hours: duration,
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            order,
            priority: DEFAULT_PRIORITY,
            allow_parallel: parallel,
        }
    }

    fn stage_ids(plan: &ExecutionPlan) -> Vec<Vec<String>> {
        plan.stages
            .iter()
            .map(|s| s.tasks.iter().map(|t| t.task_id.clone()).collect())
            .collect()
    }

    #[test]
    fn test_sequential_one_stage_per_task() {
        let resolver = DependencyResolver::new();
        let tasks = vec![
            task("T2", 2, 6.0, &["a"], true),
            task("T1", 1, 4.0, &["b"], false),
        ];

        let plan = resolver.resolve_sequential(&tasks);
        assert_eq!(stage_ids(&plan), vec![vec!["T1"], vec!["T2"]]);
    }

    #[test]
    fn test_parallel_merges_disjoint_tasks() {
        let resolver = DependencyResolver::new();
        let tasks = vec![
            task("T1", 1, 4.0, &["design"], false),
            task("T2", 2, 6.0, &["backend"], true),
            task("T3", 3, 2.0, &["frontend"], true),
        ];

        let plan = resolver.resolve(&tasks);
        assert_eq!(stage_ids(&plan), vec![vec!["T1"], vec!["T2", "T3"]]);
        assert!(plan.has_parallelism());
    }

    #[test]
    fn test_skill_conflict_blocks_merge() {
        let resolver = DependencyResolver::new();
        let tasks = vec![
            task("T1", 1, 4.0, &["backend"], true),
            task("T2", 2, 6.0, &["backend"], true),
        ];

        let plan = resolver.resolve(&tasks);
        assert_eq!(plan.stage_count(), 2);
    }

    #[test]
    fn test_non_parallel_task_never_merged() {
        let resolver = DependencyResolver::new();
        let tasks = vec![
            task("T1", 1, 4.0, &["a"], true),
            task("T2", 2, 6.0, &["b"], false),
        ];

        let plan = resolver.resolve(&tasks);
        assert_eq!(plan.stage_count(), 2);
    }

    #[test]
    fn test_width_limit_caps_merging() {
        let resolver = DependencyResolver::new();
        let tasks = vec![
            task("T1", 1, 4.0, &["a"], true),
            task("T2", 2, 6.0, &["b"], true),
            task("T3", 3, 2.0, &["c"], true),
        ];

        let unlimited = resolver.resolve(&tasks);
        assert_eq!(stage_ids(&unlimited), vec![vec!["T1", "T2", "T3"]]);

        let capped = resolver.resolve_with_width(&tasks, 2);
        assert_eq!(stage_ids(&capped), vec![vec!["T1", "T2"], vec!["T3"]]);
    }

    #[test]
    fn test_contention_order_by_priority_then_order() {
        let mut t1 = task("T1", 1, 4.0, &["a"], true);
        let mut t2 = task("T2", 2, 6.0, &["b"], true);
        t1.priority = 2;
        t2.priority = 4;

        let stage = Stage {
            tasks: vec![t1, t2],
        };
        let ordered: Vec<&str> = stage
            .tasks_by_contention()
            .iter()
            .map(|t| t.task_id.as_str())
            .collect();
        assert_eq!(ordered, vec!["T2", "T1"]);
    }
}
