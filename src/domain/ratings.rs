#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub average: f64,
    pub count: i32,
}

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 5;

pub fn is_valid_score(score: i32) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}

/// Average rounded to two decimals. No ratings gives `0.0` over `0`.
pub fn summarize(scores: &[i32]) -> RatingSummary {
    if scores.is_empty() {
        return RatingSummary {
            average: 0.0,
            count: 0,
        };
    }
    let sum: i64 = scores.iter().map(|s| i64::from(*s)).sum();
    let average = sum as f64 / scores.len() as f64;
    RatingSummary {
        average: (average * 100.0).round() / 100.0,
        count: scores.len() as i32,
    }
}
