// ==========================================
// 项目排程假设分析系统 - 技能匹配引擎
// ==========================================
// 职责: 任务要求技能 -> 合格资源子集
// 输入: 任务 + 资源池 + 排序键
// 输出: 确定性排序的合格资源列表
// 红线: 结果必须可复现 — 任何排序键下同分以 resource_id 升序兜底
// ==========================================

use crate::domain::resource::Resource;
use crate::domain::task::Task;
use crate::domain::types::ResourceRank;
use crate::engine::error::{EngineError, EngineResult};
use std::cmp::Ordering;

// ==========================================
// SkillMatcher - 技能匹配引擎
// ==========================================
pub struct SkillMatcher {
    // 无状态引擎, 不需要注入依赖
}

impl SkillMatcher {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 匹配任务的合格资源
    ///
    /// 合格条件: available 且技能集合 ⊇ 任务要求 (空要求 = 全部可用资源合格)
    ///
    /// # 参数
    /// - `task`: 待匹配任务
    /// - `resources`: 资源池
    /// - `rank`: 排序键 (由调用策略决定)
    ///
    /// # 返回
    /// 排序后的合格资源列表; 列表为空时返回 Infeasible
    pub fn eligible<'a>(
        &self,
        task: &Task,
        resources: &'a [Resource],
        rank: ResourceRank,
    ) -> EngineResult<Vec<&'a Resource>> {
        let mut eligible: Vec<&Resource> = resources
            .iter()
            .filter(|r| r.available && r.covers(&task.required_skills))
            .collect();

        if eligible.is_empty() {
            return Err(EngineError::infeasible(&task.task_id, &task.required_skills));
        }

        eligible.sort_by(|a, b| Self::compare(a, b, rank));
        Ok(eligible)
    }

    /// 匹配并返回首选资源
    pub fn best<'a>(
        &self,
        task: &Task,
        resources: &'a [Resource],
        rank: ResourceRank,
    ) -> EngineResult<&'a Resource> {
        Ok(self.eligible(task, resources, rank)?[0])
    }

    // ==========================================
    // 比较方法
    // ==========================================

    fn compare(a: &Resource, b: &Resource, rank: ResourceRank) -> Ordering {
        let primary = match rank {
            // 时薪升序
            ResourceRank::CheapestFirst => a.hourly_rate.total_cmp(&b.hourly_rate),
            // 日产能降序
            ResourceRank::CapacityFirst => b.max_hours_per_day.total_cmp(&a.max_hours_per_day),
            // 产能/时薪 降序 (时薪为 0 视为无限性价比, 用 MAX 表达)
            ResourceRank::BalancedValue => {
                let value = |r: &Resource| {
                    if r.hourly_rate > 0.0 {
                        r.max_hours_per_day / r.hourly_rate
                    } else {
                        f64::MAX
                    }
                };
                value(b).total_cmp(&value(a))
            }
        };

        match primary {
            Ordering::Equal => a.resource_id.cmp(&b.resource_id),
            other => other,
        }
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::DEFAULT_PRIORITY;
    use std::collections::BTreeSet;

    fn resource(id: &str, rate: f64, capacity: f64, skills: &[&str]) -> Resource {
        Resource {
            resource_id: id.to_string(),
            name: None,
            hourly_rate: rate,
            max_hours_per_day: capacity,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            available: true,
        }
    }

    fn task(skills: &[&str]) -> Task {
        Task {
            task_id: "T1".to_string(),
            name: None,
            duration_hours: 4.0,
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            order: 1,
            priority: DEFAULT_PRIORITY,
            allow_parallel: false,
        }
    }

    #[test]
    fn test_superset_eligibility_and_cheapest_order() {
        let matcher = SkillMatcher::new();
        let pool = vec![
            resource("R1", 90.0, 8.0, &["backend", "db"]),
            resource("R2", 60.0, 6.0, &["backend"]),
            resource("R3", 70.0, 8.0, &["frontend"]),
        ];

        let picked = matcher
            .eligible(&task(&["backend"]), &pool, ResourceRank::CheapestFirst)
            .unwrap();
        let ids: Vec<&str> = picked.iter().map(|r| r.resource_id.as_str()).collect();
        assert_eq!(ids, vec!["R2", "R1"]);
    }

    #[test]
    fn test_capacity_first_with_id_tiebreak() {
        let matcher = SkillMatcher::new();
        let pool = vec![
            resource("R2", 60.0, 8.0, &[]),
            resource("R1", 90.0, 8.0, &[]),
        ];

        // 空要求 = 全部合格; 产能同为 8 时按 resource_id 升序
        let best = matcher
            .best(&task(&[]), &pool, ResourceRank::CapacityFirst)
            .unwrap();
        assert_eq!(best.resource_id, "R1");
    }

    #[test]
    fn test_unavailable_resource_excluded() {
        let matcher = SkillMatcher::new();
        let mut r = resource("R1", 50.0, 8.0, &["backend"]);
        r.available = false;

        let pool = [r];
        let result = matcher.eligible(&task(&["backend"]), &pool, ResourceRank::CheapestFirst);
        assert!(matches!(result, Err(EngineError::Infeasible { .. })));
    }

    #[test]
    fn test_infeasible_reports_task_and_skills() {
        let matcher = SkillMatcher::new();
        let pool = vec![resource("R1", 50.0, 8.0, &["backend"])];

        let err = matcher
            .eligible(&task(&["X"]), &pool, ResourceRank::CapacityFirst)
            .unwrap_err();
        match err {
            EngineError::Infeasible {
                task_id,
                required_skills,
            } => {
                assert_eq!(task_id, "T1");
                assert_eq!(required_skills, "X");
            }
            other => panic!("期望 Infeasible, 实际 {:?}", other),
        }
    }

    #[test]
    fn test_balanced_value_prefers_capacity_per_rate() {
        let matcher = SkillMatcher::new();
        let pool = vec![
            resource("R1", 100.0, 8.0, &[]), // 0.08
            resource("R2", 50.0, 6.0, &[]),  // 0.12
        ];

        let best = matcher
            .best(&task(&[]), &pool, ResourceRank::BalancedValue)
            .unwrap();
        assert_eq!(best.resource_id, "R2");
    }
}
