use chrono::{Datelike, NaiveDateTime, Timelike};

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Render an order timestamp the way the orders page does: day without a
/// leading zero, lowercase month abbreviation, 12-hour clock, lowercase
/// am/pm marker. Example: `31 oct 8:27 pm`.
pub fn format_order_timestamp(at: NaiveDateTime) -> String {
    let (is_pm, hour) = at.hour12();
    format!(
        "{} {} {}:{:02} {}",
        at.day(),
        MONTHS[at.month0() as usize],
        hour,
        at.minute(),
        if is_pm { "pm" } else { "am" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(h, min, 0).unwrap())
    }

    #[test]
    fn formats_evening_timestamp() {
        assert_eq!(format_order_timestamp(at(2024, 10, 31, 20, 27)), "31 oct 8:27 pm");
    }

    #[test]
    fn drops_leading_zeros_and_keeps_minute_padding() {
        assert_eq!(format_order_timestamp(at(2024, 1, 5, 8, 5)), "5 jan 8:05 am");
    }

    #[test]
    fn midnight_and_noon_use_twelve() {
        assert_eq!(format_order_timestamp(at(2024, 6, 1, 0, 0)), "1 jun 12:00 am");
        assert_eq!(format_order_timestamp(at(2024, 6, 1, 12, 0)), "1 jun 12:00 pm");
    }
}
