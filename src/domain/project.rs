// ==========================================
// 项目排程假设分析系统 - 项目领域模型
// ==========================================
// 职责: 一个规划单元的资源与任务集合
// 红线: 场景生成与评估期间 Project 只读
// ==========================================

use crate::domain::resource::Resource;
use crate::domain::task::Task;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ==========================================
// Project - 规划单元
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: String,       // 项目ID
    pub name: String,             // 项目名称
    #[serde(default)]
    pub description: Option<String>, // 说明 (可选)
    pub resources: Vec<Resource>, // 资源池
    pub tasks: Vec<Task>,         // 任务集合 (order 唯一)
}

impl Project {
    /// 结构校验
    ///
    /// 校验项:
    /// 1) 资源/任务 ID 唯一
    /// 2) order 唯一
    /// 3) duration_hours > 0, hourly_rate >= 0, max_hours_per_day > 0
    ///
    /// # 返回
    /// Err(违规说明列表) — 调用方决定如何包装为各层错误
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut violations = Vec::new();

        let mut resource_ids = HashSet::new();
        for resource in &self.resources {
            if !resource_ids.insert(resource.resource_id.as_str()) {
                violations.push(format!("资源ID重复: {}", resource.resource_id));
            }
            if resource.hourly_rate < 0.0 || !resource.hourly_rate.is_finite() {
                violations.push(format!(
                    "资源{}时薪非法: {}",
                    resource.resource_id, resource.hourly_rate
                ));
            }
            if resource.max_hours_per_day <= 0.0 || !resource.max_hours_per_day.is_finite() {
                violations.push(format!(
                    "资源{}单日工时非法: {}",
                    resource.resource_id, resource.max_hours_per_day
                ));
            }
        }

        let mut task_ids = HashSet::new();
        let mut orders = HashSet::new();
        for task in &self.tasks {
            if !task_ids.insert(task.task_id.as_str()) {
                violations.push(format!("任务ID重复: {}", task.task_id));
            }
            if !orders.insert(task.order) {
                violations.push(format!(
                    "任务{}顺序位置重复: order={}",
                    task.task_id, task.order
                ));
            }
            if task.duration_hours <= 0.0 || !task.duration_hours.is_finite() {
                violations.push(format!(
                    "任务{}工时非法: {}",
                    task.task_id, task.duration_hours
                ));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// 按 order 升序返回任务副本
    pub fn tasks_in_order(&self) -> Vec<Task> {
        let mut ordered = self.tasks.clone();
        ordered.sort_by_key(|t| t.order);
        ordered
    }

    /// 按资源ID查找
    pub fn find_resource(&self, resource_id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.resource_id == resource_id)
    }

    /// 按任务ID查找
    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.task_id == task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::DEFAULT_PRIORITY;
    use std::collections::BTreeSet;

    fn sample_project() -> Project {
        Project {
            project_id: "P1".to_string(),
            name: "测试项目".to_string(),
            description: None,
            resources: vec![Resource {
                resource_id: "R1".to_string(),
                name: None,
                hourly_rate: 50.0,
                max_hours_per_day: 8.0,
                skills: BTreeSet::new(),
                available: true,
            }],
            tasks: vec![
                Task {
                    task_id: "T1".to_string(),
                    name: None,
                    duration_hours: 4.0,
                    required_skills: BTreeSet::new(),
                    order: 1,
                    priority: DEFAULT_PRIORITY,
                    allow_parallel: false,
                },
                Task {
                    task_id: "T2".to_string(),
                    name: None,
                    duration_hours: 6.0,
                    required_skills: BTreeSet::new(),
                    order: 2,
                    priority: DEFAULT_PRIORITY,
                    allow_parallel: false,
                },
            ],
        }
    }

    #[test]
    fn test_valid_project_passes() {
        assert!(sample_project().validate().is_ok());
    }

    #[test]
    fn test_duplicate_order_rejected() {
        let mut project = sample_project();
        project.tasks[1].order = 1;
        let violations = project.validate().unwrap_err();
        assert!(violations.iter().any(|v| v.contains("顺序位置重复")));
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let mut project = sample_project();
        project.tasks[0].duration_hours = 0.0;
        assert!(project.validate().is_err());
    }

    #[test]
    fn test_tasks_in_order_sorted() {
        let mut project = sample_project();
        project.tasks.reverse();
        let ordered = project.tasks_in_order();
        assert_eq!(ordered[0].task_id, "T1");
        assert_eq!(ordered[1].task_id, "T2");
    }
}
