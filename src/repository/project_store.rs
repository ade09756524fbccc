// ==========================================
// 项目排程假设分析系统 - 项目文档仓储
// ==========================================
// 职责: 按项目ID读取静态 JSON 项目定义文档
// 红线: 核心引擎只消费已解析的 Project 值, 从不接触原始文档
// ==========================================

use crate::domain::project::Project;
use crate::domain::resource::Resource;
use crate::domain::task::{Task, DEFAULT_PRIORITY};
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::warn;

// ==========================================
// 项目文档 (磁盘 JSON 形态)
// ==========================================
// 字段名与历史文档保持一致 (id 而非 resource_id/task_id)

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub resources: Vec<ResourceDocument>,
    pub tasks: Vec<TaskDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDocument {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub hourly_rate: f64,
    pub max_hours_per_day: f64,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default = "default_true")]
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDocument {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub duration_hours: f64,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub order: i32,
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default)]
    pub allow_parallel: bool,
}

fn default_true() -> bool {
    true
}

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

impl ProjectDocument {
    /// 文档 -> 领域模型 (附结构校验)
    pub fn into_project(self, project_id: &str) -> RepositoryResult<Project> {
        let project = Project {
            project_id: project_id.to_string(),
            name: self.name,
            description: self.description,
            resources: self
                .resources
                .into_iter()
                .map(|r| Resource {
                    resource_id: r.id,
                    name: r.name,
                    hourly_rate: r.hourly_rate,
                    max_hours_per_day: r.max_hours_per_day,
                    skills: r.skills.into_iter().collect::<BTreeSet<String>>(),
                    available: r.available,
                })
                .collect(),
            tasks: self
                .tasks
                .into_iter()
                .map(|t| Task {
                    task_id: t.id,
                    name: t.name,
                    duration_hours: t.duration_hours,
                    required_skills: t.required_skills.into_iter().collect::<BTreeSet<String>>(),
                    order: t.order,
                    priority: t.priority,
                    allow_parallel: t.allow_parallel,
                })
                .collect(),
        };

        project
            .validate()
            .map_err(|violations| RepositoryError::ValidationError(violations.join("; ")))?;
        Ok(project)
    }
}

// ==========================================
// 项目摘要 (列表接口返回)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tasks_count: usize,
    pub resources_count: usize,
}

// ==========================================
// ProjectReader - 项目读取接口
// ==========================================
#[async_trait]
pub trait ProjectReader: Send + Sync {
    /// 按项目ID加载完整项目定义
    async fn load_project(&self, project_id: &str) -> RepositoryResult<Project>;

    /// 列出数据目录下全部可用项目
    async fn list_projects(&self) -> RepositoryResult<Vec<ProjectSummary>>;
}

// ==========================================
// FileProjectStore - 基于目录的 JSON 文档仓储
// ==========================================
pub struct FileProjectStore {
    data_dir: PathBuf,
}

impl FileProjectStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// 项目ID白名单校验, 防止路径穿越
    fn validate_id(project_id: &str) -> RepositoryResult<()> {
        let legal = !project_id.is_empty()
            && project_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if legal {
            Ok(())
        } else {
            Err(RepositoryError::InvalidProjectId(project_id.to_string()))
        }
    }

    fn document_path(&self, project_id: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", project_id))
    }
}

#[async_trait]
impl ProjectReader for FileProjectStore {
    async fn load_project(&self, project_id: &str) -> RepositoryResult<Project> {
        Self::validate_id(project_id)?;

        let path = self.document_path(project_id);
        if !path.exists() {
            return Err(RepositoryError::NotFound {
                entity: "Project".to_string(),
                id: project_id.to_string(),
            });
        }

        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| RepositoryError::FileReadError(format!("{}: {}", path.display(), e)))?;

        let document: ProjectDocument = serde_json::from_str(&raw)
            .map_err(|e| RepositoryError::ParseError(format!("{}: {}", path.display(), e)))?;

        document.into_project(project_id)
    }

    async fn list_projects(&self) -> RepositoryResult<Vec<ProjectSummary>> {
        let mut entries = tokio::fs::read_dir(&self.data_dir).await.map_err(|e| {
            RepositoryError::FileReadError(format!("{}: {}", self.data_dir.display(), e))
        })?;

        let mut summaries = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| RepositoryError::FileReadError(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            // best-effort: 单个文档损坏不阻塞列表
            match tokio::fs::read_to_string(&path).await {
                Ok(raw) => match serde_json::from_str::<ProjectDocument>(&raw) {
                    Ok(document) => summaries.push(ProjectSummary {
                        id: stem.to_string(),
                        name: document.name,
                        description: document.description.unwrap_or_default(),
                        tasks_count: document.tasks.len(),
                        resources_count: document.resources.len(),
                    }),
                    Err(e) => {
                        warn!(path = %path.display(), reason = %e, "项目文档解析失败, 已跳过");
                    }
                },
                Err(e) => {
                    warn!(path = %path.display(), reason = %e, "项目文档读取失败, 已跳过");
                }
            }
        }

        // 列表稳定排序, 保证响应可复现
        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(summaries)
    }
}
