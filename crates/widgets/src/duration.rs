/// Format seconds as `m:ss`, `h:mm:ss` or `d:hh:mm:ss`.
pub fn format_duration(secs: u64) -> String {
    let s     = secs % 60;
    let mins  = secs / 60;
    let hours = mins / 60;
    let days  = hours / 24;

    if days > 0 {
        format!("{}:{:02}:{:02}:{:02}", days, hours % 24, mins % 60, s)
    } else if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins % 60, s)
    } else {
        format!("{}:{:02}", mins, s)
    }
}
