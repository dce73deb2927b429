use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::db::models::{Enrollment, Student};
use crate::repositories;
use crate::services::exam_timing;

/// Outcome of the read-only eligibility evaluation for one national ID.
#[derive(Debug)]
pub(crate) enum Eligibility {
    Eligible(EligibleEnrollment),
    Ineligible(RejectionReason),
}

#[derive(Debug)]
pub(crate) struct EligibleEnrollment {
    pub(crate) student: Student,
    pub(crate) enrollment: Enrollment,
    pub(crate) program_name: String,
    pub(crate) allowed_minutes: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RejectionReason {
    NotEnrolled,
    WindowNotAssigned,
    OutsideWindow,
    AlreadyTaken,
}

impl RejectionReason {
    pub(crate) fn message(self) -> &'static str {
        match self {
            RejectionReason::NotEnrolled => {
                "No enrollment found for this national ID to take final exams"
            }
            RejectionReason::WindowNotAssigned => "No exam window assigned for this enrollment",
            RejectionReason::OutsideWindow => "Outside the exam date range",
            RejectionReason::AlreadyTaken => "Exam access has already been used",
        }
    }
}

/// Walks student -> enrollment -> exam window and checks the window and the
/// single-use rule. An existing access session disqualifies regardless of
/// whether it was submitted.
pub(crate) async fn evaluate(
    pool: &PgPool,
    national_id: &str,
    now: PrimitiveDateTime,
) -> Result<Eligibility, sqlx::Error> {
    let Some(student) = repositories::students::find_by_national_id(pool, national_id).await?
    else {
        return Ok(Eligibility::Ineligible(RejectionReason::NotEnrolled));
    };

    let Some(enrollment) = repositories::enrollments::find_by_student(pool, &student.id).await?
    else {
        return Ok(Eligibility::Ineligible(RejectionReason::NotEnrolled));
    };

    let Some(window) = repositories::exam_windows::find_for_program(
        pool,
        &enrollment.program_id,
        enrollment.regularity_status,
    )
    .await?
    else {
        return Ok(Eligibility::Ineligible(RejectionReason::WindowNotAssigned));
    };

    if !exam_timing::within_window(window.window_start, window.window_end, now) {
        return Ok(Eligibility::Ineligible(RejectionReason::OutsideWindow));
    }

    if repositories::access_sessions::find_by_enrollment(pool, &enrollment.id).await?.is_some() {
        return Ok(Eligibility::Ineligible(RejectionReason::AlreadyTaken));
    }

    let program_name = repositories::programs::find_name_by_id(pool, &enrollment.program_id)
        .await?
        .unwrap_or_default();

    Ok(Eligibility::Eligible(EligibleEnrollment {
        student,
        enrollment,
        program_name,
        allowed_minutes: window.allowed_minutes,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_are_distinct() {
        let reasons = [
            RejectionReason::NotEnrolled,
            RejectionReason::WindowNotAssigned,
            RejectionReason::OutsideWindow,
            RejectionReason::AlreadyTaken,
        ];
        for (i, a) in reasons.iter().enumerate() {
            for b in reasons.iter().skip(i + 1) {
                assert_ne!(a.message(), b.message());
            }
        }
    }

    #[test]
    fn already_taken_mentions_the_spent_access() {
        assert!(RejectionReason::AlreadyTaken.message().contains("already"));
    }
}
