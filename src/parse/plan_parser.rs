use std::sync::LazyLock;

use regex::Regex;

use crate::model::track::{Phase, SubTask, Task};

/// `## Phase 2: Title [checkpoint: abc1234]`, checkpoint optional
static PHASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^## Phase (\d+): (.+?)(?:\s*\[checkpoint:\s*([a-f0-9]+)\])?\s*$")
        .expect("phase pattern is valid")
});

/// `- [x] Task: Title `abc1234``, commit optional
static TASK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^- \[([ x~])\] Task: (.+?)(?:\s+`([a-f0-9]{7,})`)?\s*$")
        .expect("task pattern is valid")
});

/// `    - [x] Title`, exactly four spaces of indent
static SUBTASK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^    - \[([ x])\] (.+)$").expect("sub-task pattern is valid"));

/// The three line shapes a plan is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanLine {
    Phase(Phase),
    Task(Task),
    SubTask(SubTask),
    Other,
}

/// Classify a single plan line. Phase headers win over tasks, tasks over sub-tasks.
pub fn classify_line(line: &str) -> PlanLine {
    if let Some(caps) = PHASE_RE.captures(line) {
        return PlanLine::Phase(Phase {
            number: caps[1].parse().unwrap_or(0),
            name: caps[2].trim().to_string(),
            checkpoint: caps.get(3).map_or(String::new(), |m| m.as_str().to_string()),
            tasks: Vec::new(),
        });
    }
    if let Some(caps) = TASK_RE.captures(line) {
        return PlanLine::Task(Task {
            name: caps[2].trim().to_string(),
            completed: &caps[1] == "x",
            commit: caps.get(3).map_or(String::new(), |m| m.as_str().to_string()),
            subtasks: Vec::new(),
        });
    }
    if let Some(caps) = SUBTASK_RE.captures(line) {
        return PlanLine::SubTask(SubTask {
            name: caps[2].trim().to_string(),
            completed: &caps[1] == "x",
        });
    }
    PlanLine::Other
}

/// Parse a `plan.md` file into its phases.
///
/// Tasks before the first phase header and sub-tasks before the first task
/// of a phase have nowhere to attach and are dropped, as are lines of any
/// other shape.
pub fn parse_plan(source: &str) -> Vec<Phase> {
    let mut phases = Vec::new();
    let mut current: Option<Phase> = None;

    for line in source.lines() {
        match classify_line(line) {
            PlanLine::Phase(phase) => {
                if let Some(done) = current.replace(phase) {
                    phases.push(done);
                }
            }
            PlanLine::Task(task) => {
                if let Some(phase) = current.as_mut() {
                    phase.tasks.push(task);
                }
            }
            PlanLine::SubTask(subtask) => {
                if let Some(task) = current.as_mut().and_then(|p| p.tasks.last_mut()) {
                    task.subtasks.push(subtask);
                }
            }
            PlanLine::Other => {}
        }
    }

    if let Some(done) = current {
        phases.push(done);
    }
    phases
}
