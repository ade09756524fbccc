// ==========================================
// 项目排程假设分析系统 - 命令行入口
// ==========================================
// 用法:
//   project-whatif [data_dir]                 列出可用项目
//   project-whatif [data_dir] [project_id]    运行全策略优化并输出 JSON
//
// 说明: 轻量入口, 不启动任何 UI/HTTP 外壳
// ==========================================

use project_whatif::repository::FileProjectStore;
use project_whatif::{logging, OptimizeApi};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持系统", project_whatif::APP_NAME);
    tracing::info!("系统版本: {}", project_whatif::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let data_dir = args.next().unwrap_or_else(|| "example".to_string());
    let project_id = args
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    tracing::info!("数据目录: {}", data_dir);

    let store = Arc::new(FileProjectStore::new(&data_dir));
    let api = OptimizeApi::new(store);

    match project_id {
        None => {
            // 仅列出项目
            let processes = api.list_processes().await?;
            println!("{}", serde_json::to_string_pretty(&processes)?);
        }
        Some(project_id) => {
            tracing::info!("优化项目: {}", project_id);
            let response = api.optimize_project(&project_id).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
