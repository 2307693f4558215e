/// Score history as exported to the clipboard, one `"{rank}: {score}"` line per game.
pub fn format_scores(scores: &[String]) -> String {
    scores
        .iter()
        .enumerate()
        .map(|(i, score)| format!("{}: {}\n", i + 1, score))
        .collect()
}
