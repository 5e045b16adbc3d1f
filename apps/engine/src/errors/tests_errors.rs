use super::domain::{DomainError, RejectKind};

#[test]
fn rejection_carries_kind_and_detail() {
    let err = DomainError::rejected(RejectKind::OutOfTurn, "seat 2 tried to act");
    assert_eq!(err.reject_kind(), Some(RejectKind::OutOfTurn));
    let msg = err.to_string();
    assert!(msg.contains("OutOfTurn"));
    assert!(msg.contains("seat 2"));
}

#[test]
fn invariant_has_no_reject_kind() {
    let err = DomainError::invariant("no second-place finisher at round end");
    assert_eq!(err.reject_kind(), None);
    assert!(err.to_string().starts_with("invariant violated"));
}
