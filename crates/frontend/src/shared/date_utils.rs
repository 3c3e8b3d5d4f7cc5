//! Date display helpers (es-ES conventions).

use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const WEEKDAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

/// Strip a time suffix: "2024-03-15T14:02:26Z" -> "2024-03-15".
pub fn iso_date(raw: &str) -> String {
    raw.split('T').next().unwrap_or(raw).to_string()
}

/// Short es-ES date: "2024-03-15" or a timestamp -> "15/3/2024".
/// Unparseable input is returned as-is.
pub fn short_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(&iso_date(raw), "%Y-%m-%d") {
        Ok(d) => format!("{}/{}/{}", d.day(), d.month(), d.year()),
        Err(_) => raw.to_string(),
    }
}

/// Long es-ES date: "15 de marzo de 2024".
pub fn spanish_long_date(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Long es-ES date with weekday: "viernes, 15 de marzo de 2024".
pub fn spanish_weekday_date(date: NaiveDate) -> String {
    format!(
        "{}, {}",
        WEEKDAYS[date.weekday().num_days_from_monday() as usize],
        spanish_long_date(date)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_date_strips_the_time_suffix() {
        assert_eq!(iso_date("2024-03-15T14:02:26.123Z"), "2024-03-15");
        assert_eq!(iso_date("2024-03-15"), "2024-03-15");
    }

    #[test]
    fn short_date_renders_without_leading_zeros() {
        assert_eq!(short_date("2024-03-05"), "5/3/2024");
        assert_eq!(short_date("2024-12-31T23:59:59Z"), "31/12/2024");
    }

    #[test]
    fn short_date_passes_through_unparseable_input() {
        assert_eq!(short_date("sin fecha"), "sin fecha");
    }

    #[test]
    fn long_dates_use_spanish_names() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(spanish_long_date(d), "15 de marzo de 2024");
        assert_eq!(spanish_weekday_date(d), "viernes, 15 de marzo de 2024");
    }
}
