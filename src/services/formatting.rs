use chrono::{NaiveDate, NaiveTime, Weekday};

/// Long form for the email template, e.g. "Monday, June 17, 2030".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// 12-hour clock with AM/PM, e.g. "4:30 PM". Midnight hours render as 12.
pub fn time_12h(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// 12-hour rendering of a bare hour, for the business-hours message.
pub fn hour_12h(hour: u32) -> String {
    let time = NaiveTime::from_hms_opt(hour % 24, 0, 0).unwrap_or_default();
    time_12h(time)
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn test_time_12h_midnight_renders_as_twelve() {
        assert_eq!(time_12h(t("00:05")), "12:05 AM");
    }

    #[test]
    fn test_time_12h_afternoon() {
        assert_eq!(time_12h(t("13:30")), "1:30 PM");
        assert_eq!(time_12h(t("12:00")), "12:00 PM");
    }

    #[test]
    fn test_hour_12h() {
        assert_eq!(hour_12h(16), "4:00 PM");
        assert_eq!(hour_12h(20), "8:00 PM");
        assert_eq!(hour_12h(0), "12:00 AM");
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2030, 6, 17).unwrap();
        assert_eq!(long_date(date), "Monday, June 17, 2030");
    }

    #[test]
    fn test_long_date_single_digit_day_unpadded() {
        let date = NaiveDate::from_ymd_opt(2030, 7, 3).unwrap();
        assert_eq!(long_date(date), "Wednesday, July 3, 2030");
    }
}
