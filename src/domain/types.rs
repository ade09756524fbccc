// ==========================================
// 项目排程假设分析系统 - 领域类型定义
// ==========================================
// 职责: 优化策略与公共枚举
// 序列化格式: snake_case (与前端/外部系统一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 优化策略类型 (Optimization Type)
// ==========================================
// 每种策略生成一个独立的 Scenario, 策略之间互不影响
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationType {
    Baseline,         // 基准: 严格串行
    Parallel,         // 并行: 合并阶段并发执行
    CostOptimized,    // 成本优先: 串行 + 最便宜资源
    Balanced,         // 均衡: 有限合并 + 性价比选人
    CriticalPath,     // 关键路径: 关键任务独占高产能资源
    ResourceLeveling, // 资源平准: 按日产能约束顺延
    CustomParallel,   // 自定义并行: 由调用方覆盖项驱动
    SeededBaseline,   // 外部基准: 复现既有任务->资源指派
}

impl OptimizationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationType::Baseline => "baseline",
            OptimizationType::Parallel => "parallel",
            OptimizationType::CostOptimized => "cost_optimized",
            OptimizationType::Balanced => "balanced",
            OptimizationType::CriticalPath => "critical_path",
            OptimizationType::ResourceLeveling => "resource_leveling",
            OptimizationType::CustomParallel => "custom_parallel",
            OptimizationType::SeededBaseline => "seeded_baseline",
        }
    }

    pub fn title_cn(&self) -> &'static str {
        match self {
            OptimizationType::Baseline => "基准方案",
            OptimizationType::Parallel => "并行方案",
            OptimizationType::CostOptimized => "成本优先",
            OptimizationType::Balanced => "均衡方案",
            OptimizationType::CriticalPath => "关键路径",
            OptimizationType::ResourceLeveling => "资源平准",
            OptimizationType::CustomParallel => "自定义并行",
            OptimizationType::SeededBaseline => "外部基准",
        }
    }

    /// 标准批量对比所包含的六种策略（不含外部基准/自定义并行）
    pub fn standard_set() -> Vec<OptimizationType> {
        vec![
            OptimizationType::Baseline,
            OptimizationType::Parallel,
            OptimizationType::CostOptimized,
            OptimizationType::Balanced,
            OptimizationType::CriticalPath,
            OptimizationType::ResourceLeveling,
        ]
    }
}

impl fmt::Display for OptimizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OptimizationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "baseline" => Ok(OptimizationType::Baseline),
            "parallel" => Ok(OptimizationType::Parallel),
            "cost_optimized" | "cost-optimized" => Ok(OptimizationType::CostOptimized),
            "balanced" => Ok(OptimizationType::Balanced),
            "critical_path" | "critical-path" => Ok(OptimizationType::CriticalPath),
            "resource_leveling" | "resource-leveling" => Ok(OptimizationType::ResourceLeveling),
            "custom_parallel" | "custom-parallel" => Ok(OptimizationType::CustomParallel),
            "seeded_baseline" | "seeded-baseline" => Ok(OptimizationType::SeededBaseline),
            other => Err(format!("未知策略类型: {}", other)),
        }
    }
}

impl Default for OptimizationType {
    fn default() -> Self {
        OptimizationType::Balanced
    }
}

// ==========================================
// 资源排序键 (Resource Rank)
// ==========================================
// 技能匹配结果的排序方式, 由调用策略决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceRank {
    CheapestFirst, // 时薪升序 (成本类策略)
    CapacityFirst, // 日产能降序 (时间类策略)
    BalancedValue, // 产能/时薪 降序 (均衡策略)
}

impl fmt::Display for ResourceRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceRank::CheapestFirst => write!(f, "CHEAPEST_FIRST"),
            ResourceRank::CapacityFirst => write!(f, "CAPACITY_FIRST"),
            ResourceRank::BalancedValue => write!(f, "BALANCED_VALUE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_optimization_type_roundtrip() {
        for ty in OptimizationType::standard_set() {
            assert_eq!(OptimizationType::from_str(ty.as_str()).unwrap(), ty);
        }
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(OptimizationType::from_str("speed_of_light").is_err());
    }
}
