pub(crate) mod eligibility;
pub(crate) mod exam_timing;
pub(crate) mod mailer;
