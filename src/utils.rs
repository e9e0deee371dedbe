/// Formats `part` as a percentage of `total` to one decimal place, or "—" for an empty total.
pub fn fmt_pct(part: usize, total: usize) -> String {
    if total == 0 {
        return "—".to_owned();
    }
    format!("{:.1}%", part as f64 / total as f64 * 100.0)
}
