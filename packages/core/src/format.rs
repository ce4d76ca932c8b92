//! Display formatting for the admin console.

use chrono::{DateTime, Utc};

/// Salary range, e.g. `50,000 - 80,000 元`; `面議` when neither bound is set.
pub fn salary_range(min: Option<u64>, max: Option<u64>) -> String {
    match (min.filter(|v| *v > 0), max.filter(|v| *v > 0)) {
        (None, None) => "面議".to_string(),
        (None, Some(max)) => format!("最高 {} 元", thousands(max)),
        (Some(min), None) => format!("{} 元起", thousands(min)),
        (Some(min), Some(max)) if min == max => format!("{} 元", thousands(min)),
        (Some(min), Some(max)) => format!("{} - {} 元", thousands(min), thousands(max)),
    }
}

/// Group digits in threes with commas.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn employment_type(value: &str) -> &str {
    match value {
        "full-time" => "全職",
        "part-time" => "兼職",
        "contract" => "約聘",
        "internship" => "實習",
        "freelance" => "自由接案",
        other => other,
    }
}

pub fn experience_level(value: &str) -> &str {
    match value {
        "entry" => "新手",
        "junior" => "初級",
        "mid" => "中級",
        "senior" => "資深",
        "lead" => "主管",
        "executive" => "高階主管",
        other => other,
    }
}

pub fn remote_option(value: &str) -> &str {
    match value {
        "onsite" => "現場辦公",
        "remote" => "完全遠端",
        "hybrid" => "混合辦公",
        other => other,
    }
}

/// `YYYY/MM/DD`, or `""` for unparseable input.
pub fn date(raw: &str) -> String {
    crate::record::parse_timestamp(raw)
        .map(|at| at.format("%Y/%m/%d").to_string())
        .unwrap_or_default()
}

/// Coarse relative time (`剛剛`, `3 小時前`, `2 週前`, ...) measured from `now`.
pub fn relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - at).num_hours();
    let days = hours / 24;
    if hours < 1 {
        "剛剛".to_string()
    } else if hours < 24 {
        format!("{hours} 小時前")
    } else if days < 7 {
        format!("{days} 天前")
    } else if days < 30 {
        format!("{} 週前", days / 7)
    } else if days < 365 {
        format!("{} 個月前", days / 30)
    } else {
        format!("{} 年前", days / 365)
    }
}

/// Cut `text` to at most `max_chars` characters, appending `...` when shortened.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Human-readable byte size, e.g. `1.5 KB`.
pub fn file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", UNITS[unit])
}

/// User-facing message for an HTTP status.
pub fn status_message(status: u16) -> &'static str {
    match status {
        400 => "請求資料格式錯誤",
        401 => "身份驗證失敗",
        403 => "沒有權限執行此操作",
        404 => "找不到指定的資源",
        500..=599 => "伺服器內部錯誤，請稍後再試",
        _ => "操作失敗，請稍後再試",
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn salary_ranges() {
        assert_eq!(salary_range(None, None), "面議");
        assert_eq!(salary_range(Some(0), Some(0)), "面議");
        assert_eq!(salary_range(None, Some(80000)), "最高 80,000 元");
        assert_eq!(salary_range(Some(50000), None), "50,000 元起");
        assert_eq!(salary_range(Some(60000), Some(60000)), "60,000 元");
        assert_eq!(salary_range(Some(50000), Some(1200000)), "50,000 - 1,200,000 元");
    }

    #[test]
    fn relative_times() {
        let now = Utc.with_ymd_and_hms(2025, 6, 12, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now - Duration::minutes(10), now), "剛剛");
        assert_eq!(relative_time(now - Duration::hours(5), now), "5 小時前");
        assert_eq!(relative_time(now - Duration::days(3), now), "3 天前");
        assert_eq!(relative_time(now - Duration::days(15), now), "2 週前");
        assert_eq!(relative_time(now - Duration::days(95), now), "3 個月前");
        assert_eq!(relative_time(now - Duration::days(800), now), "2 年前");
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate("後端工程師", 2), "後端...");
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn file_sizes() {
        assert_eq!(file_size(0), "0 Bytes");
        assert_eq!(file_size(512), "512 Bytes");
        assert_eq!(file_size(1536), "1.5 KB");
        assert_eq!(file_size(5 * 1024 * 1024), "5 MB");
    }

    #[test]
    fn dates_and_labels() {
        assert_eq!(date("2025-06-12T10:00:00Z"), "2025/06/12");
        assert_eq!(date("yesterday"), "");
        assert_eq!(employment_type("full-time"), "全職");
        assert_eq!(employment_type("全職"), "全職");
        assert_eq!(status_message(503), "伺服器內部錯誤，請稍後再試");
    }
}
