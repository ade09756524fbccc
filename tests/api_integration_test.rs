// ==========================================
// API 层端到端集成测试
// ==========================================
// 场景: 文档仓储 -> 覆盖校验/应用 -> 引擎 -> 响应组装
// ==========================================


use project_whatif::api::{ApiError, OptimizeApi, OverrideConstraints, TaskOverride};
use project_whatif::config::Preferences;
use project_whatif::domain::OptimizationType;
use project_whatif::repository::{FileProjectStore, ProjectReader};
use std::sync::Arc;
use tempfile::TempDir;

// ==========================================
// 测试辅助
// ==========================================

/// 演示项目文档: 3 任务 [4,6,2]h + 单资源 $50/8h
const DEMO_PROJECT_DOC: &str = r#"{
    "name": "演示项目",
    "description": "基准验证用",
    "resources": [
        {"id": "R1", "hourly_rate": 50.0, "max_hours_per_day": 8.0, "skills": ["dev"]}
    ],
    "tasks": [
        {"id": "T1", "duration_hours": 4.0, "required_skills": ["dev"], "order": 1},
        {"id": "T2", "duration_hours": 6.0, "required_skills": ["dev"], "order": 2},
        {"id": "T3", "duration_hours": 2.0, "required_skills": ["dev"], "order": 3}
    ]
}"#;

fn setup_store() -> (TempDir, Arc<FileProjectStore>) {
    let dir = TempDir::new().expect("创建临时目录失败");
    std::fs::write(dir.path().join("demo_project.json"), DEMO_PROJECT_DOC)
        .expect("写入项目文档失败");
    let store = Arc::new(FileProjectStore::new(dir.path()));
    (dir, store)
}

// ==========================================
// 测试1: 项目列表
// ==========================================
#[tokio::test]
async fn test_list_processes() {
    let (_dir, store) = setup_store();
    let api = OptimizeApi::new(store);

    let processes = api.list_processes().await.unwrap();
    assert_eq!(processes.len(), 1);
    assert_eq!(processes[0].id, "demo_project");
    assert_eq!(processes[0].tasks_count, 3);
    assert_eq!(processes[0].resources_count, 1);
}

// ==========================================
// 测试2: 全策略优化与最优推荐
// ==========================================
#[tokio::test]
async fn test_optimize_project_full_batch() {
    let (_dir, store) = setup_store();
    let api = OptimizeApi::new(store);

    let response = api.optimize_project("demo_project").await.unwrap();

    // 单资源无并行: 六种策略全部成功
    assert_eq!(response.all_scenarios.len(), 6);
    assert!(response.skipped.is_empty());
    assert!(response.best_scenario.is_some());

    // 基准方案复现预期值: 12h / 2天 / $600
    let baseline = response
        .all_scenarios
        .iter()
        .find(|r| r.scenario.optimization_type == OptimizationType::Baseline)
        .unwrap();
    assert_eq!(baseline.scenario.total_duration_hours, 12.0);
    assert_eq!(baseline.scenario.total_duration_days, 2.0);
    assert_eq!(baseline.scenario.total_cost, 600.0);
}

// ==========================================
// 测试3: 未知项目与非法ID
// ==========================================
#[tokio::test]
async fn test_unknown_project_rejected() {
    let (_dir, store) = setup_store();
    let api = OptimizeApi::new(store);

    let err = api.optimize_project("no_such_project").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    let err = api.optimize_project("../escape").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

// ==========================================
// 测试4: 覆盖项校验在排程前拒绝
// ==========================================
#[tokio::test]
async fn test_invalid_override_rejected_before_scheduling() {
    let (_dir, store) = setup_store();
    let api = OptimizeApi::new(store);

    let mut constraints = OverrideConstraints::default();
    constraints.tasks.insert(
        "T9".to_string(),
        TaskOverride {
            duration_hours: Some(4.0),
            ..Default::default()
        },
    );

    let err = api
        .optimize_custom("demo_project", constraints)
        .await
        .unwrap_err();
    match err {
        ApiError::InvalidOverride(msg) => assert!(msg.contains("T9")),
        other => panic!("期望 InvalidOverride, 实际 {:?}", other),
    }

    // 非正工时同样拒绝
    let mut constraints = OverrideConstraints::default();
    constraints.tasks.insert(
        "T1".to_string(),
        TaskOverride {
            duration_hours: Some(-2.0),
            ..Default::default()
        },
    );
    assert!(matches!(
        api.optimize_custom("demo_project", constraints)
            .await
            .unwrap_err(),
        ApiError::InvalidOverride(_)
    ));
}

// ==========================================
// 测试5: 并行覆盖驱动自定义并行策略 (纯变换)
// ==========================================
#[tokio::test]
async fn test_custom_parallel_override_flow() {
    let (_dir, store) = setup_store();
    let api = OptimizeApi::new(Arc::clone(&store));

    let mut constraints = OverrideConstraints::default();
    constraints.tasks.insert(
        "T2".to_string(),
        TaskOverride {
            duration_hours: Some(3.0),
            allow_parallel: Some(true),
            ..Default::default()
        },
    );

    let response = api
        .optimize_custom("demo_project", constraints)
        .await
        .unwrap();

    assert_eq!(
        response.scenario.scenario.optimization_type,
        OptimizationType::CustomParallel
    );

    // 覆盖体现在回显项目上
    let t2 = response.effective_project.find_task("T2").unwrap();
    assert_eq!(t2.duration_hours, 3.0);
    assert!(t2.allow_parallel);

    // 纯变换: 仓储中的原始项目未被改动
    let original = store.load_project("demo_project").await.unwrap();
    let t2 = original.find_task("T2").unwrap();
    assert_eq!(t2.duration_hours, 6.0);
    assert!(!t2.allow_parallel);
}

// ==========================================
// 测试6: 偏好权重驱动策略选择
// ==========================================
#[tokio::test]
async fn test_preference_driven_strategy_choice() {
    let (_dir, store) = setup_store();
    let api = OptimizeApi::new(store);

    // 成本权重最高 -> 成本优先
    let constraints = OverrideConstraints {
        preferences: Preferences {
            time_priority: 0.2,
            cost_priority: 0.7,
            quality_priority: 0.1,
        },
        ..Default::default()
    };
    let response = api
        .optimize_custom("demo_project", constraints)
        .await
        .unwrap();
    assert_eq!(
        response.scenario.scenario.optimization_type,
        OptimizationType::CostOptimized
    );

    // 时间权重最高 -> 并行
    let constraints = OverrideConstraints {
        preferences: Preferences {
            time_priority: 0.8,
            cost_priority: 0.1,
            quality_priority: 0.1,
        },
        ..Default::default()
    };
    let response = api
        .optimize_custom("demo_project", constraints)
        .await
        .unwrap();
    assert_eq!(
        response.scenario.scenario.optimization_type,
        OptimizationType::Parallel
    );

    // 无明显偏好 -> 均衡
    let response = api
        .optimize_custom("demo_project", OverrideConstraints::default())
        .await
        .unwrap();
    assert_eq!(
        response.scenario.scenario.optimization_type,
        OptimizationType::Balanced
    );
}

// ==========================================
// 测试7: CMS 流程优化端到端
// ==========================================
#[tokio::test]
async fn test_optimize_seeded_process_flow() {
    let (_dir, store) = setup_store();
    let api = OptimizeApi::new(store);

    let raw = r#"{
        "process_id": 7,
        "process_name": "电商平台交付",
        "company": {"name": "示例公司"},
        "process_tasks": [
            {
                "task_id": 10,
                "order": 1,
                "task": {
                    "task_id": 10,
                    "task_name": "数据库设计",
                    "task_code": "DBDS-01",
                    "task_capacity_minutes": 120.0,
                    "jobTasks": [
                        {
                            "job_id": 11,
                            "job": {
                                "job_id": 11,
                                "jobCode": "DBA-01",
                                "name": "数据库管理员",
                                "hourlyRate": 88.0,
                                "maxHoursPerDay": 6.0
                            }
                        }
                    ]
                }
            },
            {
                "task_id": 11,
                "order": 2,
                "task": {
                    "task_id": 11,
                    "task_name": "接口开发",
                    "task_code": "API-01",
                    "task_capacity_minutes": 240.0,
                    "jobTasks": [
                        {
                            "job_id": 6,
                            "job": {
                                "job_id": 6,
                                "jobCode": "SB-01",
                                "name": "资深后端",
                                "hourlyRate": 94.0,
                                "maxHoursPerDay": 8.0
                            }
                        }
                    ]
                }
            }
        ]
    }"#;

    let process: project_whatif::CmsProcess = serde_json::from_str(raw).unwrap();
    let response = api.optimize_seeded_process(process, None).await.unwrap();

    assert_eq!(response.process_info.process_id, 7);
    assert_eq!(response.process_info.company.as_deref(), Some("示例公司"));

    // 基准: 2h + 4h 串行 = 6h; 成本 = 2×88 + 4×94 = 552
    assert_eq!(response.baseline.scenario.total_duration_hours, 6.0);
    assert_eq!(response.baseline.scenario.total_cost, 552.0);
    // 岗位与任务一一对应: 技能恰好匹配
    assert_eq!(response.baseline.scenario.quality_score, 1.0);

    // 对比集: 并行/成本优先/均衡
    assert_eq!(response.scenarios.len(), 3);
    assert!(response.skipped.is_empty());
}
