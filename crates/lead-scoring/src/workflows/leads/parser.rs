use super::domain::ClassifierScore;

/// Map a free-text batch response onto per-lead scores by line position.
///
/// Line `i` scores lead `i`: a line mentioning "high" wins over one mentioning
/// "medium", and anything else (including "low") scores as low. The result holds
/// `min(lines, batch_len)` entries, so leads past the last line get no score here.
/// Trailing empty lines are not counted.
pub fn parse_batch_response(response: &str, batch_len: usize) -> Vec<ClassifierScore> {
    let lines: Vec<&str> = response.split('\n').collect();
    let line_count = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(0, |last| last + 1);

    lines[..line_count]
        .iter()
        .take(batch_len)
        .map(|line| classify_line(line))
        .collect()
}

fn classify_line(line: &str) -> ClassifierScore {
    let line = line.to_lowercase();
    if line.contains("high") {
        ClassifierScore::High
    } else if line.contains("medium") {
        ClassifierScore::Medium
    } else {
        ClassifierScore::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_lines_map_by_position() {
        let response = "1. High - strong fit\n2. Medium - maybe\n3. Low - unrelated";
        assert_eq!(
            parse_batch_response(response, 3),
            vec![
                ClassifierScore::High,
                ClassifierScore::Medium,
                ClassifierScore::Low
            ]
        );
    }

    #[test]
    fn unrecognized_text_scores_low() {
        let scores = parse_batch_response("1. unsure\n2. MEDIUM", 2);
        assert_eq!(scores, vec![ClassifierScore::Low, ClassifierScore::Medium]);
    }

    #[test]
    fn high_takes_precedence_over_medium_on_one_line() {
        let scores = parse_batch_response("1. Medium-high interest", 1);
        assert_eq!(scores, vec![ClassifierScore::High]);
    }

    #[test]
    fn short_response_leaves_trailing_leads_unscored() {
        let scores = parse_batch_response("1. High", 3);
        assert_eq!(scores, vec![ClassifierScore::High]);
    }

    #[test]
    fn extra_lines_beyond_batch_are_ignored() {
        let scores = parse_batch_response("1. High\n2. High\n3. High", 2);
        assert_eq!(scores.len(), 2);
    }

    #[test]
    fn trailing_newlines_do_not_create_entries() {
        let scores = parse_batch_response("1. High\n\n", 3);
        assert_eq!(scores, vec![ClassifierScore::High]);
        assert!(parse_batch_response("", 2).is_empty());
    }

    #[test]
    fn blank_lines_still_consume_a_position() {
        let scores = parse_batch_response("1. High\n\n3. Medium", 3);
        assert_eq!(
            scores,
            vec![
                ClassifierScore::High,
                ClassifierScore::Low,
                ClassifierScore::Medium
            ]
        );
    }
}
