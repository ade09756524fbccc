// ==========================================
// 项目排程假设分析系统 - 资源平准排程器
// ==========================================
// 职责: 串行排程 + 单日产能约束, 超量工作顺延到后续工作日
// 约定: 1 天 = hours_per_day 工时; 跨日拆分后次日残余不足
//       min_split_hours 时当日不拆分, 剩余工作整体顺延
// 红线: 探查窗口有界 — 超出 leveling_lookahead_days 返回
//       CapacityExceeded, 不允许无限循环
// ==========================================

use crate::config::EngineConfig;
use crate::domain::project::Project;
use crate::domain::resource::Resource;
use crate::domain::scenario::Assignment;
use crate::domain::types::ResourceRank;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::matcher::SkillMatcher;
use std::collections::HashMap;

const EPS: f64 = 1e-9;

/// 资源平准排程
///
/// 任务严格按 order 串行; 每个任务在其开始日重新评估资源
/// (选当日剩余产能最多者, 同分回落产能降序/ID升序),
/// 单资源整任务承接, 工作量按日消耗并向后滚动
pub(crate) fn schedule(
    project: &Project,
    config: &EngineConfig,
    matcher: &SkillMatcher,
) -> EngineResult<Vec<Assignment>> {
    let hours_per_day = config.hours_per_day;
    // 账本: (resource_id, 日序号) -> 已占用工时
    let mut used: HashMap<(String, i64), f64> = HashMap::new();
    let mut assignments = Vec::new();
    let mut cursor = 0.0_f64;

    for task in project.tasks_in_order() {
        let eligible = matcher.eligible(&task, &project.resources, ResourceRank::CapacityFirst)?;

        let start_day = (cursor / hours_per_day).floor() as i64;
        let resource = pick_for_day(&eligible, &used, start_day, hours_per_day);

        let cap = resource.effective_daily_hours(hours_per_day);
        let lookahead = config.leveling_lookahead_days as i64;

        let mut remaining = task.duration_hours;
        let mut day = start_day;
        let mut t = cursor;
        let mut first_work: Option<f64> = None;
        let mut end_hour = cursor;

        while remaining > EPS {
            if day - start_day > lookahead {
                return Err(EngineError::CapacityExceeded {
                    task_id: task.task_id.clone(),
                    resource_id: resource.resource_id.clone(),
                    lookahead_days: config.leveling_lookahead_days,
                });
            }

            let day_start = day as f64 * hours_per_day;
            let day_end = day_start + hours_per_day;
            let t_in_day = t.max(day_start);

            let window = day_end - t_in_day;
            let cap_left = cap - used
                .get(&(resource.resource_id.clone(), day))
                .copied()
                .unwrap_or(0.0);
            let available = window.min(cap_left).max(0.0);

            if available <= EPS {
                day += 1;
                t = day_end;
                continue;
            }

            if remaining <= available + EPS {
                // 当日可收尾
                if first_work.is_none() {
                    first_work = Some(t_in_day);
                }
                *used
                    .entry((resource.resource_id.clone(), day))
                    .or_insert(0.0) += remaining;
                end_hour = t_in_day + remaining;
                remaining = 0.0;
            } else {
                let tail = remaining - available;
                if tail < config.min_split_hours {
                    // 拆分后次日残余不足 1 小时: 当日不开工, 整体顺延
                    day += 1;
                    t = day_end;
                    continue;
                }

                if first_work.is_none() {
                    first_work = Some(t_in_day);
                }
                *used
                    .entry((resource.resource_id.clone(), day))
                    .or_insert(0.0) += available;
                remaining -= available;
                day += 1;
                t = day_end;
            }
        }

        let start_hour = first_work.unwrap_or(cursor);
        assignments.push(Assignment {
            task_id: task.task_id.clone(),
            resource_id: resource.resource_id.clone(),
            start_hour,
            end_hour,
            hours_allocated: task.duration_hours,
        });

        cursor = end_hour;
    }

    Ok(assignments)
}

/// 按开始日剩余产能选资源
///
/// `eligible` 已按产能降序/ID升序排好; 稳定排序保证同剩余产能时
/// 沿用该次序
fn pick_for_day<'a>(
    eligible: &[&'a Resource],
    used: &HashMap<(String, i64), f64>,
    day: i64,
    hours_per_day: f64,
) -> &'a Resource {
    let remaining = |r: &Resource| {
        r.effective_daily_hours(hours_per_day)
            - used
                .get(&(r.resource_id.clone(), day))
                .copied()
                .unwrap_or(0.0)
    };

    let mut ranked: Vec<&'a Resource> = eligible.to_vec();
    ranked.sort_by(|a, b| remaining(b).total_cmp(&remaining(a)));
    ranked[0]
}
