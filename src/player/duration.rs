use tracing::debug;

// 时长字符串无法解析时的回退值（10分钟）
pub const DEFAULT_LESSON_SECONDS: u32 = 600;

// 解析 "M:SS" / "MM:SS" / "H:MM:SS" 形式的课时时长，返回总秒数。
// 解析失败不报错，回退到默认时长。
pub fn parse_duration(raw: &str) -> u32 {
    match try_parse(raw) {
        Some(secs) if secs > 0 => secs,
        _ => {
            debug!("无法解析的时长 \"{}\"，回退到 {} 秒", raw, DEFAULT_LESSON_SECONDS);
            DEFAULT_LESSON_SECONDS
        }
    }
}

fn try_parse(raw: &str) -> Option<u32> {
    let parts: Vec<&str> = raw.trim().split(':').collect();
    match parts.as_slice() {
        [m, s] => {
            let m: u32 = m.parse().ok()?;
            let s: u32 = s.parse().ok()?;
            if s >= 60 {
                return None;
            }
            Some(m * 60 + s)
        }
        [h, m, s] => {
            let h: u32 = h.parse().ok()?;
            let m: u32 = m.parse().ok()?;
            let s: u32 = s.parse().ok()?;
            if m >= 60 || s >= 60 {
                return None;
            }
            Some(h * 3600 + m * 60 + s)
        }
        _ => None,
    }
}

// 秒数转回时钟显示，超过一小时用 "H:MM:SS"，否则 "M:SS"
pub fn format_clock(total_seconds: u32) -> String {
    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minute_second() {
        assert_eq!(parse_duration("2:30"), 150);
        assert_eq!(parse_duration("12:30"), 750);
        assert_eq!(parse_duration("0:45"), 45);
    }

    #[test]
    fn test_parse_hour_minute_second() {
        assert_eq!(parse_duration("1:02:18"), 3738);
        assert_eq!(parse_duration("2:00:00"), 7200);
    }

    #[test]
    fn test_parse_invalid_falls_back() {
        assert_eq!(parse_duration(""), DEFAULT_LESSON_SECONDS);
        assert_eq!(parse_duration("unknown"), DEFAULT_LESSON_SECONDS);
        assert_eq!(parse_duration("1:99"), DEFAULT_LESSON_SECONDS);
        assert_eq!(parse_duration("1:2:3:4"), DEFAULT_LESSON_SECONDS);
        assert_eq!(parse_duration("0:00"), DEFAULT_LESSON_SECONDS);
    }

    #[test]
    fn test_format_round_trip() {
        for raw in ["2:30", "12:30", "1:02:18", "0:45", "59:59", "10:00:00"] {
            let secs = parse_duration(raw);
            assert_eq!(parse_duration(&format_clock(secs)), secs, "round trip of {}", raw);
        }
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(150), "2:30");
        assert_eq!(format_clock(3738), "1:02:18");
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(59), "0:59");
    }
}
