use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// 前置元数据中支持的日期格式
const FRONT_MATTER_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S"];

/// 文章日期的显示格式，例如 `Jan 5, 2020`
pub fn format_post_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// 解析前置元数据中的日期，无法识别时返回 `None`
pub fn parse_front_matter_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in FRONT_MATTER_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&dt));
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_medium_style() {
        let date = Utc.with_ymd_and_hms(2020, 1, 5, 18, 30, 0).unwrap();
        assert_eq!(format_post_date(&date), "Jan 5, 2020");
    }

    #[test]
    fn parses_supported_formats() {
        let expected = Utc.with_ymd_and_hms(2020, 1, 5, 18, 30, 0).unwrap();
        assert_eq!(parse_front_matter_date("2020-01-05 18:30"), Some(expected));
        assert_eq!(parse_front_matter_date("2020-01-05 18:30:00"), Some(expected));
        assert_eq!(parse_front_matter_date("2020-01-05T18:30:00Z"), Some(expected));
        assert_eq!(
            parse_front_matter_date("2020-01-05"),
            Some(Utc.with_ymd_and_hms(2020, 1, 5, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_front_matter_date("yesterday"), None);
    }
}
