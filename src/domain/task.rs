// ==========================================
// 项目排程假设分析系统 - 任务领域模型
// ==========================================
// 约定: order 在项目内唯一且全序, 构成默认串行依赖链;
//       allow_parallel=true 的任务可与相邻可并行任务合并阶段
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 默认优先级 (1..=5, 数值越大越优先)
pub const DEFAULT_PRIORITY: i32 = 3;

// ==========================================
// Task - 计划任务
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: String,                 // 任务ID (项目内唯一)
    #[serde(default)]
    pub name: Option<String>,            // 显示名称 (可选)
    pub duration_hours: f64,             // 工时 (正数)
    #[serde(default)]
    pub required_skills: BTreeSet<String>, // 要求技能 (空=任意资源可承接)
    pub order: i32,                      // 顺序位置 (唯一, 构成默认依赖链)
    #[serde(default = "default_priority")]
    pub priority: i32,                   // 优先级 (仅影响资源争用排序, 不影响阶段划分)
    #[serde(default)]
    pub allow_parallel: bool,            // 是否允许并行
}

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

impl Task {
    /// 判断两个任务是否存在技能冲突
    ///
    /// 冲突定义: 要求技能集合相交, 或任一方为空集 —
    /// 空要求意味着从全量资源池取人, 无法证明与对方不争用
    pub fn skills_conflict(&self, other: &Task) -> bool {
        if self.required_skills.is_empty() || other.required_skills.is_empty() {
            return true;
        }
        !self.required_skills.is_disjoint(&other.required_skills)
    }
}
