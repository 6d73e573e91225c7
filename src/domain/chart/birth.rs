//! Birth data: who, when and where a chart is cast for.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Birth time used when the caller does not supply one.
pub const DEFAULT_BIRTH_TIME: &str = "12:00";

/// Validated birth specification handed to the astrology engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthData {
    /// Subject identity printed in the report header.
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub city: String,
    /// Optional country code to disambiguate the city.
    pub nation: Option<String>,
}

impl BirthData {
    /// Parses `YYYY-MM-DD` and `HH:MM` strings as sent by the onboarding form.
    ///
    /// Anything after the minutes in the time string (e.g. seconds) is ignored.
    pub fn parse(
        name: impl Into<String>,
        birth_date: &str,
        birth_time: &str,
        city: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let city = city.into();
        if city.trim().is_empty() {
            return Err(ValidationError::empty_field("birthCity"));
        }

        Ok(Self {
            name: name.into(),
            date: parse_date(birth_date)?,
            time: parse_time(birth_time)?,
            city,
            nation: None,
        })
    }

    /// Sets the country code.
    pub fn with_nation(mut self, nation: impl Into<String>) -> Self {
        let nation = nation.into();
        self.nation = if nation.is_empty() { None } else { Some(nation) };
        self
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let field = "birthDate";
    if raw.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }

    let parts: Vec<&str> = raw.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(ValidationError::invalid_format(field, "expected YYYY-MM-DD"));
    }

    let year = parse_number::<i32>(field, parts[0])?;
    let month = parse_number::<u32>(field, parts[1])?;
    let day = parse_number::<u32>(field, parts[2])?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ValidationError::invalid_format(field, format!("no such date: {}", raw)))
}

fn parse_time(raw: &str) -> Result<NaiveTime, ValidationError> {
    let field = "birthTime";
    let raw = if raw.trim().is_empty() {
        DEFAULT_BIRTH_TIME
    } else {
        raw.trim()
    };

    let mut parts = raw.split(':');
    let (hour, minute) = match (parts.next(), parts.next()) {
        (Some(h), Some(m)) => (parse_number::<u32>(field, h)?, parse_number::<u32>(field, m)?),
        _ => return Err(ValidationError::invalid_format(field, "expected HH:MM")),
    };

    if hour > 23 {
        return Err(ValidationError::out_of_range(field, 0, 23, hour as i32));
    }
    if minute > 59 {
        return Err(ValidationError::out_of_range(field, 0, 59, minute as i32));
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| ValidationError::invalid_format(field, "expected HH:MM"))
}

fn parse_number<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T, ValidationError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ValidationError::invalid_format(field, format!("'{}' is not a number", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_form_values() {
        let birth = BirthData::parse("User_1234abcd", "1995-03-15", "14:30", "San Francisco").unwrap();
        assert_eq!(birth.year(), 1995);
        assert_eq!(birth.month(), 3);
        assert_eq!(birth.day(), 15);
        assert_eq!(birth.hour(), 14);
        assert_eq!(birth.minute(), 30);
        assert_eq!(birth.city, "San Francisco");
        assert_eq!(birth.nation, None);
    }

    #[test]
    fn blank_time_defaults_to_noon() {
        let birth = BirthData::parse("x", "2000-11-03", "", "Austin").unwrap();
        assert_eq!(birth.hour(), 12);
        assert_eq!(birth.minute(), 0);
    }

    #[test]
    fn seconds_are_ignored() {
        let birth = BirthData::parse("x", "2000-11-03", "23:45:10", "Austin").unwrap();
        assert_eq!((birth.hour(), birth.minute()), (23, 45));
    }

    #[test]
    fn unpadded_components_are_accepted() {
        let birth = BirthData::parse("x", "1998-7-2", "8:5", "New York").unwrap();
        assert_eq!((birth.month(), birth.day()), (7, 2));
        assert_eq!((birth.hour(), birth.minute()), (8, 5));
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(matches!(
            BirthData::parse("x", "15/03/1995", "12:00", "Paris"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            BirthData::parse("x", "1995-02-30", "12:00", "Paris"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            BirthData::parse("x", "", "12:00", "Paris"),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_time() {
        assert!(matches!(
            BirthData::parse("x", "1995-03-15", "24:00", "Paris"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            BirthData::parse("x", "1995-03-15", "10:75", "Paris"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            BirthData::parse("x", "1995-03-15", "noon", "Paris"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn rejects_blank_city() {
        assert!(matches!(
            BirthData::parse("x", "1995-03-15", "12:00", "  "),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn empty_nation_is_none() {
        let birth = BirthData::parse("x", "1995-03-15", "12:00", "Paris")
            .unwrap()
            .with_nation("");
        assert_eq!(birth.nation, None);

        let birth = birth.with_nation("FR");
        assert_eq!(birth.nation.as_deref(), Some("FR"));
    }
}
