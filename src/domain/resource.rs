// ==========================================
// 项目排程假设分析系统 - 资源领域模型
// ==========================================
// 红线: Scenario 生成期间资源只读, 覆盖项应用必须产生新 Project
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// Resource - 人力/角色资源
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub resource_id: String,        // 资源ID (项目内唯一)
    #[serde(default)]
    pub name: Option<String>,       // 显示名称 (可选)
    pub hourly_rate: f64,           // 时薪 (货币/小时, 非负)
    pub max_hours_per_day: f64,     // 单日最大工时 (正数)
    #[serde(default)]
    pub skills: BTreeSet<String>,   // 技能标签集合
    #[serde(default = "default_available")]
    pub available: bool,            // 是否可用 (不可用资源不参与匹配)
}

fn default_available() -> bool {
    true
}

impl Resource {
    /// 判断技能集合是否覆盖任务要求
    ///
    /// 空要求集合视为任何资源均可承接
    pub fn covers(&self, required_skills: &BTreeSet<String>) -> bool {
        required_skills.is_subset(&self.skills)
    }

    /// 单日有效工时：受全局工作日长度约束
    pub fn effective_daily_hours(&self, hours_per_day: f64) -> f64 {
        self.max_hours_per_day.min(hours_per_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_covers_superset_and_empty() {
        let r = Resource {
            resource_id: "R1".to_string(),
            name: None,
            hourly_rate: 50.0,
            max_hours_per_day: 8.0,
            skills: skills(&["backend", "db"]),
            available: true,
        };

        assert!(r.covers(&skills(&["backend"])));
        assert!(r.covers(&BTreeSet::new()));
        assert!(!r.covers(&skills(&["frontend"])));
    }

    #[test]
    fn test_effective_daily_hours_clamped() {
        let r = Resource {
            resource_id: "R2".to_string(),
            name: None,
            hourly_rate: 60.0,
            max_hours_per_day: 12.0,
            skills: BTreeSet::new(),
            available: true,
        };

        assert_eq!(r.effective_daily_hours(8.0), 8.0);
    }
}
