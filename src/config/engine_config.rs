// ==========================================
// 项目排程假设分析系统 - 引擎配置
// ==========================================
// 职责: 场景生成与评估的全局参数
// ==========================================

use serde::{Deserialize, Serialize};

/// 引擎配置
///
/// 所有策略共享同一份配置; 配置在一次请求内不可变
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// 工作日长度 (小时), 约定 1 天 = 8 工时
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: f64,

    /// 资源平准向后探查天数上限 — 超出视为积压不可排 (CapacityExceeded)
    #[serde(default = "default_leveling_lookahead_days")]
    pub leveling_lookahead_days: i32,

    /// 跨日拆分最小剩余工时 — 拆分后次日残余小于该值时整体顺延
    #[serde(default = "default_min_split_hours")]
    pub min_split_hours: f64,

    /// 均衡策略的阶段宽度上限 (选择性合并)
    #[serde(default = "default_balanced_stage_width")]
    pub balanced_stage_width: usize,
}

fn default_hours_per_day() -> f64 {
    8.0
}

fn default_leveling_lookahead_days() -> i32 {
    30
}

fn default_min_split_hours() -> f64 {
    1.0
}

fn default_balanced_stage_width() -> usize {
    2
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hours_per_day: default_hours_per_day(),
            leveling_lookahead_days: default_leveling_lookahead_days(),
            min_split_hours: default_min_split_hours(),
            balanced_stage_width: default_balanced_stage_width(),
        }
    }
}

// ==========================================
// Preferences - 多目标偏好权重
// ==========================================
// 三个权重为相对权重, 不要求归一化, 评估器不做归一化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_time_priority")]
    pub time_priority: f64,

    #[serde(default = "default_cost_priority")]
    pub cost_priority: f64,

    #[serde(default = "default_quality_priority")]
    pub quality_priority: f64,
}

fn default_time_priority() -> f64 {
    0.33
}

fn default_cost_priority() -> f64 {
    0.33
}

fn default_quality_priority() -> f64 {
    0.34
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            time_priority: default_time_priority(),
            cost_priority: default_cost_priority(),
            quality_priority: default_quality_priority(),
        }
    }
}
