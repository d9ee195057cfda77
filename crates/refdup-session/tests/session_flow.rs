//! Detect-then-select flows through the session entry points.

use refdup_session::{DetectStatus, HighlightMode, Session, on_detect, on_select_row};

const BIBLIOGRAPHY: &str = "\
[1] LeCun Y, Bengio Y, Hinton G. Deep learning. Nature, 2015.
[2] Goodfellow I. Generative adversarial nets. NeurIPS, 2014.
[3] LeCun Y. Deep Learning. Nature 521, 2015.
[4] Goodfellow I, Pouget-Abadie J. Generative Adversarial Nets. 2014.
[5] Hochreiter S. Long short-term memory. Neural Computation, 1997.";

#[test]
fn rows_follow_first_appearance() {
    let (session, outcome) = on_detect(Session::new(BIBLIOGRAPHY));

    assert_eq!(outcome.status, DetectStatus::Duplicates { groups: 2 });
    assert_eq!(
        outcome.rows,
        vec![
            "重复标题：deep learning（条目：1, 3）",
            "重复标题：generative adversarial nets（条目：2, 4）",
        ]
    );
    assert_eq!(session.last_groups.len(), outcome.rows.len());
}

#[test]
fn selecting_each_row_highlights_its_lines() {
    let (session, _) = on_detect(Session::new(BIBLIOGRAPHY));

    let first = on_select_row(&session, 0).unwrap();
    assert_eq!(first.lines(), vec![0, 2]);

    let second = on_select_row(&session, 1).unwrap();
    assert_eq!(second.lines(), vec![1, 3]);

    for span in &second.spans {
        let text = &BIBLIOGRAPHY[span.start..span.end];
        assert!(text.to_lowercase().starts_with("generative adversarial nets"));
        assert!(!text.contains('\n'));
    }
}

#[test]
fn both_modes_agree_on_clean_titles() {
    let (session, _) = on_detect(Session::new(BIBLIOGRAPHY));
    let literal = on_select_row(&session, 0).unwrap();
    let session = session.with_mode(HighlightMode::Pattern);
    let pattern = on_select_row(&session, 0).unwrap();
    assert_eq!(literal.spans, pattern.spans);
}

#[test]
fn repeated_detection_is_stable() {
    let (session, first) = on_detect(Session::new(BIBLIOGRAPHY));
    let (session, second) = on_detect(session);
    assert_eq!(first, second);
    assert_eq!(session.last_groups.len(), 2);
}
