// ==========================================
// 项目排程假设分析系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 引擎只返回类型化结果, 从不打印/记日志
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
///
/// 失败只影响触发它的策略/场景, 不影响同批次其他场景
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 可行性错误 =====
    #[error("任务{task_id}无可用资源: 要求技能 [{required_skills}]")]
    Infeasible {
        task_id: String,
        required_skills: String,
    },

    // ===== 产能错误 =====
    #[error("资源平准失败: 任务{task_id}在{lookahead_days}天探查窗口内无法完成 (资源{resource_id})")]
    CapacityExceeded {
        task_id: String,
        resource_id: String,
        lookahead_days: i32,
    },

    // ===== 外部指派错误 =====
    #[error("外部指派引用未知{entity}: {id}")]
    UnknownSeedReference { entity: String, id: String },

    #[error("外部指派不完整: 任务{task_id}缺少资源指派")]
    IncompleteSeed { task_id: String },

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EngineError {
    /// 构造可行性错误 (统一技能集合的展示格式)
    pub fn infeasible(task_id: &str, required_skills: &std::collections::BTreeSet<String>) -> Self {
        EngineError::Infeasible {
            task_id: task_id.to_string(),
            required_skills: required_skills
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
