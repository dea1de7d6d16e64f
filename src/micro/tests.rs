use crate::emotion::{Emotion, EmotionVector};

use super::detector::MicroExpressionLog;
use super::rules;

#[test]
fn test_flickers_below_the_floor_are_not_logged() {
    let mut log = MicroExpressionLog::new();
    assert!(log.record(Emotion::Fearful, 0.004, 1_000).is_none());
    assert!(log.record(Emotion::Fearful, 0.005, 1_000).is_some());
    assert_eq!(log.len(), 1);
}

#[test]
fn test_first_flicker_has_zero_duration_and_reads_as_momentary() {
    let mut log = MicroExpressionLog::new();
    let hit = log.record(Emotion::Fearful, 0.02, 1_000).unwrap();
    assert_eq!(hit.duration_ms, 0);
    assert_eq!(hit.significance, "very weak, momentary - possible anxiety signal");
}

#[test]
fn test_duration_spans_back_to_the_oldest_flicker_and_caps() {
    let mut log = MicroExpressionLog::new();
    log.record(Emotion::Sad, 0.01, 1_000);
    let second = log.record(Emotion::Sad, 0.01, 1_300).unwrap();
    assert_eq!(second.duration_ms, 300);
    assert!(second.significance.contains("persistent"));

    let third = log.record(Emotion::Sad, 0.01, 3_000).unwrap();
    assert_eq!(
        third.duration_ms,
        rules::MAX_DURATION_MS,
        "duration should cap even against an old buffer"
    );
}

#[test]
fn test_close_flickers_share_a_sequence_id() {
    let mut log = MicroExpressionLog::new();
    let first = log.record(Emotion::Fearful, 0.02, 1_000).unwrap();
    let second = log.record(Emotion::Surprised, 0.02, 1_400).unwrap();
    assert_eq!(first.sequence_id, 1, "ids start at 1");
    assert_eq!(second.sequence_id, first.sequence_id);

    let distant = log.record(Emotion::Fearful, 0.02, 2_900).unwrap();
    assert_eq!(distant.sequence_id, 2, "a gap past the window opens a new sequence");
}

#[test]
fn test_sequences_chain_through_intermediate_flickers() {
    let mut log = MicroExpressionLog::new();
    let a = log.record(Emotion::Happy, 0.02, 0).unwrap();
    let b = log.record(Emotion::Happy, 0.02, 800).unwrap();
    // 1600 is past the window from the first flicker but not the second.
    let c = log.record(Emotion::Happy, 0.02, 1_600).unwrap();
    assert_eq!(a.sequence_id, b.sequence_id);
    assert_eq!(b.sequence_id, c.sequence_id);
}

#[test]
fn test_significance_tiers_follow_intensity() {
    let mut log = MicroExpressionLog::new();
    let weak = log.record(Emotion::Disgusted, 0.06, 1_000).unwrap();
    assert!(weak.significance.starts_with("weak"));
    assert!(weak.significance.ends_with("possible discomfort signal"));

    let moderate = log.record(Emotion::Angry, 0.12, 5_000).unwrap();
    assert!(moderate.significance.starts_with("moderate"));

    let strong = log.record(Emotion::Surprised, 0.35, 9_000).unwrap();
    assert!(strong.significance.starts_with("strong"));

    let very_strong = log.record(Emotion::Fearful, 0.6, 13_000).unwrap();
    assert!(very_strong.significance.starts_with("very strong"));
}

#[test]
fn test_happy_flickers_carry_no_emotion_reading() {
    let mut log = MicroExpressionLog::new();
    let hit = log.record(Emotion::Happy, 0.02, 1_000).unwrap();
    assert_eq!(hit.significance, "very weak, momentary");
}

#[test]
fn test_record_frame_skips_neutral_and_absent_channels() {
    let mut log = MicroExpressionLog::new();
    let mut vector = EmotionVector::default();
    vector.set(Emotion::Neutral, 0.9);
    vector.set(Emotion::Fearful, 0.03);
    vector.set(Emotion::Happy, 0.0);
    let hits = log.record_frame(&vector, 1_000);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].emotion, Emotion::Fearful);
}

#[test]
fn test_fresh_window_excludes_stale_flickers() {
    let mut log = MicroExpressionLog::new();
    log.record(Emotion::Fearful, 0.03, 1_000);
    log.record(Emotion::Angry, 0.03, 1_800);
    let fresh = log.fresh(2_100);
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].emotion, Emotion::Angry);
}

#[test]
fn test_insights_need_at_least_two_recent_flickers() {
    let mut log = MicroExpressionLog::new();
    log.record(Emotion::Fearful, 0.03, 1_000);
    assert!(log.sequence_insights(1_100).is_empty());
}

#[test]
fn test_insights_flag_rapid_and_deceptive_pairs() {
    let mut log = MicroExpressionLog::new();
    log.record(Emotion::Happy, 0.03, 1_000);
    log.record(Emotion::Fearful, 0.03, 1_300);
    let insights = log.sequence_insights(1_400);

    assert!(insights
        .iter()
        .any(|line| line == "Rapid transition: happy → fearful (300ms)"));
    assert!(insights
        .iter()
        .any(|line| line == "Possible deception-suggestive emotion sequence"));
}

#[test]
fn test_slow_pairs_raise_no_flags_even_when_suggestive() {
    let mut log = MicroExpressionLog::new();
    log.record(Emotion::Neutral, 0.03, 1_000);
    log.record(Emotion::Fearful, 0.03, 1_900);
    let insights = log.sequence_insights(2_000);

    assert!(
        insights.is_empty(),
        "a 900ms gap is too slow to read as a masked reaction, got {:?}",
        insights
    );

    let mut log = MicroExpressionLog::new();
    log.record(Emotion::Happy, 0.03, 1_000);
    log.record(Emotion::Fearful, 0.03, 1_900);
    assert!(log.sequence_insights(2_000).is_empty());
}

#[test]
fn test_repetition_inside_the_window_reads_as_suppression() {
    let mut log = MicroExpressionLog::new();
    log.record(Emotion::Fearful, 0.03, 0);
    log.record(Emotion::Fearful, 0.03, 1_200);
    log.record(Emotion::Fearful, 0.03, 2_400);
    let insights = log.sequence_insights(2_500);

    assert!(insights
        .iter()
        .any(|line| line == "Recurring fearful emotion (3 times) - possible suppression attempt"));
}

#[test]
fn test_stale_flickers_age_out_of_the_insight_window() {
    let mut log = MicroExpressionLog::new();
    log.record(Emotion::Fearful, 0.03, 0);
    log.record(Emotion::Fearful, 0.03, 200);
    log.record(Emotion::Fearful, 0.03, 400);
    // Far enough ahead that every flicker left the window.
    assert!(log.sequence_insights(5_000).is_empty());
}

#[test]
fn test_history_keeps_only_the_last_twenty() {
    let mut log = MicroExpressionLog::new();
    for step in 0..30 {
        log.record(Emotion::Fearful, 0.03, step * 100);
    }
    assert_eq!(log.len(), rules::MICRO_HISTORY_CAP);
    let history = log.history();
    assert_eq!(history[0].started_at_ms, 1_000);
    assert_eq!(history.last().unwrap().started_at_ms, 2_900);
}
