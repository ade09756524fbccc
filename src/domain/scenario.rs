// ==========================================
// 项目排程假设分析系统 - 场景领域模型
// ==========================================
// 职责: Assignment / Scenario / Metrics 快照结构
// 红线: Scenario 由生成器一次性构建, 构建后不可变,
//       不可反向污染 Project
// ==========================================

use crate::domain::project::Project;
use crate::domain::types::OptimizationType;
use serde::{Deserialize, Serialize};

// ==========================================
// Assignment - 任务落位明细
// ==========================================
// 不变式: end_hour = start_hour + 排程跨度;
//         hours_allocated 为实际工作工时 (资源平准时跨度可大于工时);
//         同一资源的 [start, end) 区间互不重叠
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub task_id: String,      // 任务ID
    pub resource_id: String,  // 资源ID
    pub start_hour: f64,      // 开始时刻 (项目时间线, 小时)
    pub end_hour: f64,        // 结束时刻
    pub hours_allocated: f64, // 实际工作工时
}

impl Assignment {
    /// 排程跨度 (含资源平准产生的顺延空档)
    pub fn span_hours(&self) -> f64 {
        self.end_hour - self.start_hour
    }
}

// ==========================================
// SeededAssignment - 外部系统给定的任务->资源指派
// ==========================================
// 用途: 外部基准场景复现既有指派, 不做资格校验
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeededAssignment {
    pub task_id: String,
    pub resource_id: String,
}

// ==========================================
// Scenario - 一个策略下的完整排程方案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,                      // 显示名称
    pub optimization_type: OptimizationType, // 策略标签
    pub assignments: Vec<Assignment>,      // 落位明细 (按 order)
    pub total_duration_hours: f64,         // 总工期 (小时, max end_hour)
    pub total_duration_days: f64,          // 总工期 (天, hours/8 四舍五入)
    pub total_cost: f64,                   // 总成本 (Σ 工时×时薪)
    pub quality_score: f64,                // 技能匹配质量 [0,1]
}

impl Scenario {
    /// 从落位明细构建场景快照
    ///
    /// 聚合口径:
    /// - total_duration_hours = max(end_hour), 空场景为 0
    /// - total_duration_days = hours / hours_per_day, 四舍五入 (不截断)
    /// - total_cost = Σ hours_allocated × 资源时薪
    ///
    /// quality_score 由评估器计算后传入, 避免领域层反向依赖引擎层
    pub fn from_assignments(
        optimization_type: OptimizationType,
        assignments: Vec<Assignment>,
        project: &Project,
        quality_score: f64,
        hours_per_day: f64,
    ) -> Self {
        let total_duration_hours = assignments
            .iter()
            .map(|a| a.end_hour)
            .fold(0.0_f64, f64::max);

        let total_cost = assignments
            .iter()
            .map(|a| {
                let rate = project
                    .find_resource(&a.resource_id)
                    .map(|r| r.hourly_rate)
                    .unwrap_or(0.0);
                a.hours_allocated * rate
            })
            .sum();

        Scenario {
            name: optimization_type.title_cn().to_string(),
            optimization_type,
            assignments,
            total_duration_hours,
            total_duration_days: (total_duration_hours / hours_per_day).round(),
            total_cost,
            quality_score,
        }
    }
}

// ==========================================
// Metrics - 多目标评估指标
// ==========================================
// time_score/cost_score 为候选集内归一化后的逆向得分
// (工期/成本越低得分越高); quality_score 直接使用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total_time_days: f64,      // 原始工期 (天, 未取整)
    pub total_cost: f64,           // 原始成本
    pub quality_score: f64,        // 质量得分 [0,1]
    pub resource_utilization: f64, // 资源利用率 [0,1]
    pub time_score: f64,           // 归一化时间得分 [0,1]
    pub cost_score: f64,           // 归一化成本得分 [0,1]
    pub overall_score: f64,        // 偏好加权综合得分
}
