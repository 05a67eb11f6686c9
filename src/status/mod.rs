//! 提交状态与截止时间推导
//!
//! 所有界面统一从这里推导提交的显示状态和允许的操作，
//! 不在各个界面里各写一份。全部为纯函数：固定 `now` 则结果确定，
//! 无 I/O、无隐藏状态。缺失字段一律退化为安全默认值
//! （未提交 / 已关闭），不报错。

use chrono::{DateTime, Utc};

use crate::models::assignments::entities::Assignment;
use crate::models::submissions::entities::{Submission, SubmissionStatus};

/// 截止状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineState {
    // 截止前，可提交可修改
    Open,
    // 已截止但允许迟交（仅限首次提交）
    ClosedLateAllowed,
    // 已截止且不允许任何提交
    ClosedNoSubmission,
}

impl std::fmt::Display for DeadlineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DeadlineState::Open => "open",
            DeadlineState::ClosedLateAllowed => "closed-late-allowed",
            DeadlineState::ClosedNoSubmission => "closed-no-submission",
        };
        write!(f, "{label}")
    }
}

/// 推导提交的显示状态
///
/// 优先级：未提交 > 已评分 > 迟交 > 按时提交。
/// 评分优先于迟交是产品决策：迟交但已评分的提交显示"已评分"。
pub fn derive_status(submission: Option<&Submission>) -> SubmissionStatus {
    let Some(sub) = submission else {
        return SubmissionStatus::NotSubmitted;
    };
    if sub.submitted_at.is_none() {
        // 按构造 grade 此时不应存在，但这里不做此假设
        return SubmissionStatus::NotSubmitted;
    }
    if sub.grade.is_some() {
        return SubmissionStatus::Graded;
    }
    if sub.is_late {
        return SubmissionStatus::SubmittedLate;
    }
    SubmissionStatus::SubmittedOnTime
}

// 截止时间是否已过；缺失截止时间按已过处理（安全默认）
fn past_due(assignment: &Assignment, now: DateTime<Utc>) -> bool {
    match assignment.due_date {
        Some(due) => now > due,
        None => true,
    }
}

/// 当前是否允许首次提交
///
/// 截止前总是允许；截止后仅当作业开启了迟交。缺失截止时间视为关闭。
pub fn can_submit(assignment: &Assignment, now: DateTime<Utc>) -> bool {
    match assignment.due_date {
        Some(due) => now <= due || assignment.allow_late,
        None => false,
    }
}

/// 当前是否允许修改（重新提交）已有提交
///
/// 只有原始提交窗口内允许修改；迟交许可不延长修改权。
pub fn can_edit(assignment: &Assignment, now: DateTime<Utc>) -> bool {
    match assignment.due_date {
        Some(due) => now <= due,
        None => false,
    }
}

/// 推导作业的截止状态标签
pub fn deadline_state(assignment: &Assignment, now: DateTime<Utc>) -> DeadlineState {
    if !past_due(assignment, now) {
        return DeadlineState::Open;
    }
    if assignment.due_date.is_some() && assignment.allow_late {
        return DeadlineState::ClosedLateAllowed;
    }
    DeadlineState::ClosedNoSubmission
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn assignment(due: Option<&str>, allow_late: bool) -> Assignment {
        Assignment {
            id: 1,
            course: 1,
            title: "hw1".to_string(),
            description: String::new(),
            due_date: due.map(|s| {
                s.parse::<DateTime<Utc>>()
                    .expect("test due date must be RFC 3339")
            }),
            allow_late,
        }
    }

    fn submission(submitted_at: Option<&str>, is_late: bool, grade: Option<i32>) -> Submission {
        Submission {
            id: 10,
            assignment: 1,
            assignment_title: None,
            student: 7,
            student_username: None,
            file_url: None,
            description: None,
            submitted_at: submitted_at.map(|s| {
                s.parse::<DateTime<Utc>>()
                    .expect("test timestamp must be RFC 3339")
            }),
            is_late,
            is_final: false,
            grade,
            feedback: None,
        }
    }

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().expect("test timestamp must be RFC 3339")
    }

    #[test]
    fn test_absent_submission_is_not_submitted() {
        assert_eq!(derive_status(None), SubmissionStatus::NotSubmitted);
    }

    #[test]
    fn test_null_submitted_at_wins_over_everything() {
        // grade/is_late 按构造不应出现，但推导不得依赖该假设
        let sub = submission(None, true, Some(95));
        assert_eq!(derive_status(Some(&sub)), SubmissionStatus::NotSubmitted);
    }

    #[test]
    fn test_grade_takes_precedence_over_lateness() {
        let sub = submission(Some("2025-09-26T09:00:00Z"), true, Some(88));
        assert_eq!(derive_status(Some(&sub)), SubmissionStatus::Graded);
    }

    #[test]
    fn test_late_without_grade() {
        let sub = submission(Some("2025-09-26T09:00:00Z"), true, None);
        assert_eq!(derive_status(Some(&sub)), SubmissionStatus::SubmittedLate);
    }

    #[test]
    fn test_on_time_without_grade() {
        let sub = submission(Some("2025-09-20T09:00:00Z"), false, None);
        assert_eq!(derive_status(Some(&sub)), SubmissionStatus::SubmittedOnTime);
    }

    #[test]
    fn test_derive_status_is_idempotent() {
        let sub = submission(Some("2025-09-20T09:00:00Z"), false, Some(70));
        let first = derive_status(Some(&sub));
        let second = derive_status(Some(&sub));
        assert_eq!(first, second);
    }

    #[test]
    fn test_before_deadline_everything_allowed() {
        let a = assignment(Some("2025-09-25T23:59:00Z"), false);
        let now = at("2025-09-20T12:00:00Z");
        assert!(can_submit(&a, now));
        assert!(can_edit(&a, now));
        assert_eq!(deadline_state(&a, now), DeadlineState::Open);
    }

    #[test]
    fn test_exactly_at_deadline_still_open() {
        let a = assignment(Some("2025-09-25T23:59:00Z"), false);
        let now = at("2025-09-25T23:59:00Z");
        assert!(can_submit(&a, now));
        assert!(can_edit(&a, now));
        assert_eq!(deadline_state(&a, now), DeadlineState::Open);
    }

    #[test]
    fn test_past_due_no_late_allowance() {
        let a = assignment(Some("2025-09-25T23:59:00Z"), false);
        let now = at("2025-09-26T08:00:00Z");
        assert!(!can_submit(&a, now));
        assert!(!can_edit(&a, now));
        assert_eq!(deadline_state(&a, now), DeadlineState::ClosedNoSubmission);
    }

    #[test]
    fn test_past_due_with_late_allowance() {
        // 迟交许可允许首次提交，但不延长修改权
        let a = assignment(Some("2025-09-25T23:59:00Z"), true);
        let now = at("2025-09-26T08:00:00Z");
        assert!(can_submit(&a, now));
        assert!(!can_edit(&a, now));
        assert_eq!(deadline_state(&a, now), DeadlineState::ClosedLateAllowed);
    }

    #[test]
    fn test_missing_due_date_degrades_to_closed() {
        let a = assignment(None, true);
        let now = at("2025-09-26T08:00:00Z");
        assert!(!can_submit(&a, now));
        assert!(!can_edit(&a, now));
        assert_eq!(deadline_state(&a, now), DeadlineState::ClosedNoSubmission);
    }

    #[test]
    fn test_scenario_overdue_late_allowed_no_submission() {
        let a = assignment(Some("2025-09-25T23:59:00Z"), true);
        let now = at("2025-09-26T08:00:00Z");
        assert_eq!(deadline_state(&a, now), DeadlineState::ClosedLateAllowed);
        assert!(can_submit(&a, now));
        assert_eq!(derive_status(None), SubmissionStatus::NotSubmitted);
    }

    #[test]
    fn test_scenario_late_submission_then_graded() {
        let a = assignment(Some("2025-09-25T23:59:00Z"), true);
        let now = at("2025-09-26T10:00:00Z");

        let mut sub = submission(Some("2025-09-26T09:00:00Z"), true, None);
        assert_eq!(derive_status(Some(&sub)), SubmissionStatus::SubmittedLate);
        assert!(!can_edit(&a, now));

        // 之后教授评了 88 分：显示状态切换为已评分，迟交标记不影响
        sub.grade = Some(88);
        assert_eq!(derive_status(Some(&sub)), SubmissionStatus::Graded);
    }

    #[test]
    fn test_deadline_state_labels() {
        assert_eq!(DeadlineState::Open.to_string(), "open");
        assert_eq!(
            DeadlineState::ClosedLateAllowed.to_string(),
            "closed-late-allowed"
        );
        assert_eq!(
            DeadlineState::ClosedNoSubmission.to_string(),
            "closed-no-submission"
        );
    }

    #[test]
    fn test_timezone_irrelevant_for_fixed_instant() {
        // 同一时刻不同表示法结果一致
        let a = assignment(Some("2025-09-25T23:59:00Z"), false);
        let now_utc = Utc.with_ymd_and_hms(2025, 9, 25, 23, 0, 0).unwrap();
        assert!(can_submit(&a, now_utc));
    }
}
