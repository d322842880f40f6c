const BASE_SCORE: i32 = 70;

/// Heuristic confidence score for an answer, always in 0..=100.
///
/// The filler buckets and the word-count buckets adjust the base
/// independently. Filler totals of 4..=7 and word counts of 20..50 or
/// above 200 leave the base untouched.
pub fn confidence_score(total_fillers: u32, word_count: usize) -> u8 {
    let mut score = BASE_SCORE;

    if total_fillers == 0 {
        score += 20;
    } else if total_fillers <= 3 {
        score += 10;
    } else if total_fillers > 7 {
        score -= 20;
    }

    if (50..=200).contains(&word_count) {
        score += 10;
    } else if word_count < 20 {
        score -= 20;
    }

    score.clamp(0, 100) as u8
}
