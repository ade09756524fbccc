// ==========================================
// 项目排程假设分析系统 - CMS 流程导入器
// ==========================================
// 职责: 第三方流程/任务/岗位文档 -> Project + 外部指派种子
// 输入: CMS 流程 JSON (任务带 capacity 分钟数与合格岗位列表)
// 输出: 已校验的 Project + 逐任务的基准指派
// 红线: 远端抓取/鉴权属于外围设施 — 本导入器只消费
//       已经拿到手的文档, 核心引擎永不发起网络调用
// ==========================================

use crate::domain::project::Project;
use crate::domain::resource::Resource;
use crate::domain::scenario::SeededAssignment;
use crate::domain::task::{Task, DEFAULT_PRIORITY};
use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

// ==========================================
// CMS 文档结构 (字段名与外部系统保持一致)
// ==========================================

#[derive(Debug, Clone, Deserialize)]
pub struct CmsProcess {
    pub process_id: i64,
    pub process_name: String,
    #[serde(default)]
    pub process_code: Option<String>,
    #[serde(default)]
    pub process_overview: Option<String>,
    #[serde(default)]
    pub company: Option<CmsCompany>,
    #[serde(default)]
    pub process_tasks: Vec<CmsProcessTask>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmsCompany {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmsProcessTask {
    pub task_id: i64,
    pub order: i64,
    pub task: CmsTask,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmsTask {
    pub task_id: i64,
    pub task_name: String,
    #[serde(default)]
    pub task_code: Option<String>,
    pub task_capacity_minutes: f64,
    #[serde(default, rename = "jobTasks")]
    pub job_tasks: Vec<CmsJobTask>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmsJobTask {
    pub job_id: i64,
    pub job: CmsJob,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmsJob {
    pub job_id: i64,
    #[serde(rename = "jobCode")]
    pub job_code: String,
    pub name: String,
    #[serde(rename = "hourlyRate")]
    pub hourly_rate: f64,
    #[serde(rename = "maxHoursPerDay")]
    pub max_hours_per_day: f64,
}

// ==========================================
// 导入结果
// ==========================================

/// 流程信息摘要 (响应回显)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsProcessInfo {
    pub process_id: i64,
    pub process_name: String,
    pub company: Option<String>,
}

/// CMS 导入结果: 内部项目模型 + 基准指派种子
#[derive(Debug, Clone)]
pub struct CmsImport {
    pub process_info: CmsProcessInfo,
    pub project: Project,
    pub seeds: Vec<SeededAssignment>,
}

// ==========================================
// CmsImporter - CMS 流程导入器
// ==========================================
pub struct CmsImporter {
    // 无状态导入器, 不需要注入依赖
}

impl CmsImporter {
    pub fn new() -> Self {
        Self {}
    }

    /// 解析原始 JSON 并转换
    pub fn parse_and_convert(&self, raw: &str) -> ImportResult<CmsImport> {
        let process: CmsProcess =
            serde_json::from_str(raw).map_err(|e| ImportError::ParseError(e.to_string()))?;
        self.convert(process)
    }

    /// CMS 流程 -> Project + 指派种子
    ///
    /// 转换口径:
    /// - 任务工时 = task_capacity_minutes / 60
    /// - 每个任务生成唯一技能标签 (task_code), 授予其全部合格岗位 —
    ///   技能匹配即可精确复现 "合格岗位" 语义
    /// - 基准指派 = 每任务取 job_id 最小的合格岗位 (可复现)
    pub fn convert(&self, process: CmsProcess) -> ImportResult<CmsImport> {
        self.validate(&process)?;

        // 资源表: job_code -> Resource (同一岗位可服务多个任务, 技能累加)
        let mut resources: BTreeMap<String, Resource> = BTreeMap::new();
        let mut tasks = Vec::with_capacity(process.process_tasks.len());
        let mut seeds = Vec::with_capacity(process.process_tasks.len());

        for process_task in &process.process_tasks {
            let skill_tag = task_tag(&process_task.task);

            for job_task in &process_task.task.job_tasks {
                let job = &job_task.job;
                resources
                    .entry(job.job_code.clone())
                    .or_insert_with(|| Resource {
                        resource_id: job.job_code.clone(),
                        name: Some(job.name.clone()),
                        hourly_rate: job.hourly_rate,
                        max_hours_per_day: job.max_hours_per_day,
                        skills: BTreeSet::new(),
                        available: true,
                    })
                    .skills
                    .insert(skill_tag.clone());
            }

            // 基准指派: job_id 最小的合格岗位
            let seeded_job = process_task
                .task
                .job_tasks
                .iter()
                .min_by_key(|jt| jt.job.job_id)
                .ok_or_else(|| ImportError::NoQualifiedJob {
                    task: skill_tag.clone(),
                })?;

            seeds.push(SeededAssignment {
                task_id: skill_tag.clone(),
                resource_id: seeded_job.job.job_code.clone(),
            });

            tasks.push(Task {
                task_id: skill_tag.clone(),
                name: Some(process_task.task.task_name.clone()),
                duration_hours: process_task.task.task_capacity_minutes / 60.0,
                required_skills: [skill_tag].into_iter().collect(),
                order: process_task.order as i32,
                priority: DEFAULT_PRIORITY,
                allow_parallel: false,
            });
        }

        let project = Project {
            project_id: format!("cms-{}", process.process_id),
            name: process.process_name.clone(),
            description: process.process_overview.clone(),
            resources: resources.into_values().collect(),
            tasks,
        };

        project.validate().map_err(|violations| ImportError::InvalidValue {
            field: "process_tasks".to_string(),
            message: violations.join("; "),
        })?;

        Ok(CmsImport {
            process_info: CmsProcessInfo {
                process_id: process.process_id,
                process_name: process.process_name,
                company: process.company.map(|c| c.name),
            },
            project,
            seeds,
        })
    }

    // ==========================================
    // 校验方法
    // ==========================================

    fn validate(&self, process: &CmsProcess) -> ImportResult<()> {
        if process.process_name.trim().is_empty() {
            return Err(ImportError::MissingField {
                field: "process_name".to_string(),
            });
        }
        if process.process_tasks.is_empty() {
            return Err(ImportError::EmptyProcess(process.process_id));
        }

        let mut orders = HashSet::new();
        for process_task in &process.process_tasks {
            let task = &process_task.task;
            let label = task_tag(task);

            if !orders.insert(process_task.order) {
                return Err(ImportError::DuplicateOrder(process_task.order));
            }
            if task.task_name.trim().is_empty() {
                return Err(ImportError::MissingField {
                    field: format!("task[{}].task_name", task.task_id),
                });
            }
            if !(task.task_capacity_minutes > 0.0) || !task.task_capacity_minutes.is_finite() {
                return Err(ImportError::InvalidValue {
                    field: format!("task[{}].task_capacity_minutes", label),
                    message: format!("期望正数, 实际 {}", task.task_capacity_minutes),
                });
            }
            if task.job_tasks.is_empty() {
                return Err(ImportError::NoQualifiedJob { task: label });
            }

            for job_task in &task.job_tasks {
                let job = &job_task.job;
                if job.job_code.trim().is_empty() {
                    return Err(ImportError::MissingField {
                        field: format!("job[{}].jobCode", job.job_id),
                    });
                }
                if job.hourly_rate < 0.0 || !job.hourly_rate.is_finite() {
                    return Err(ImportError::InvalidValue {
                        field: format!("job[{}].hourlyRate", job.job_code),
                        message: format!("期望非负数, 实际 {}", job.hourly_rate),
                    });
                }
                if !(job.max_hours_per_day > 0.0) || !job.max_hours_per_day.is_finite() {
                    return Err(ImportError::InvalidValue {
                        field: format!("job[{}].maxHoursPerDay", job.job_code),
                        message: format!("期望正数, 实际 {}", job.max_hours_per_day),
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for CmsImporter {
    fn default() -> Self {
        Self::new()
    }
}

/// 任务的内部标识/技能标签: 优先 task_code, 缺失时回退 TASK-{task_id}
fn task_tag(task: &CmsTask) -> String {
    task.task_code
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .map(|c| c.to_string())
        .unwrap_or_else(|| format!("TASK-{}", task.task_id))
}
