/// Ascent record structures and CSV row parsing
use crate::error::{LogbookError, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use csv::StringRecord;
use serde::Serialize;

/// Reference year used to derive climber age from birth date.
///
/// The dataset is a fixed historical export ending in 2017; ages are
/// computed against that year, not against the current date.
pub const REFERENCE_YEAR: i32 = 2017;

/// Date format for the `birth` column
const BIRTH_FORMAT: &str = "%Y-%m-%d";

/// Expected number of CSV columns in ascent records
pub const CSV_ROW_LENGTH: usize = 10;

/// How a climber completed a route.
///
/// The upstream export carries five integer method codes. Codes 3 and 5 are
/// both onsight ascents; code 5 is a historical alias that stays distinct at
/// the record level so the method-distribution view can reproduce the
/// original five-bar display (see `logbook-engine`'s display mapping).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum Method {
    /// Ascent after more than one try
    Redpoint,
    /// First-try ascent with prior knowledge of the route
    Flash,
    /// First-try ascent with no prior knowledge
    Onsight,
    /// Ascent with the rope passing through the route's anchor
    Toprope,
}

impl Method {
    /// Maps an upstream method code to its semantic category.
    ///
    /// Returns `None` for codes outside the documented 1-5 mapping.
    pub fn from_code(code: u8) -> Option<Method> {
        match code {
            1 => Some(Method::Redpoint),
            2 => Some(Method::Flash),
            3 | 5 => Some(Method::Onsight),
            4 => Some(Method::Toprope),
            _ => None,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Method::Redpoint => "Redpoint",
            Method::Flash => "Flash",
            Method::Onsight => "Onsight",
            Method::Toprope => "Top rope",
        };
        write!(f, "{}", label)
    }
}

/// Climber sex as recorded by the upstream export.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Upstream coding: 0 is male, any other value is female.
    pub fn from_code(code: u8) -> Sex {
        if code == 0 {
            Sex::Male
        } else {
            Sex::Female
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sex::Male => write!(f, "Male"),
            Sex::Female => write!(f, "Female"),
        }
    }
}

/// A single logged ascent.
///
/// Every record belongs to exactly one crag and one route. Records are
/// immutable once ingested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AscentRecord {
    /// Crag the route belongs to
    pub crag: String,
    /// Sector within the crag
    pub sector: String,
    /// Route name
    pub route_name: String,
    /// French-scale grade token (e.g. "6b+")
    pub grade: String,
    /// Raw upstream method code (1-5); see [`Method::from_code`]
    pub method_id: u8,
    /// Climber sex
    pub sex: Sex,
    /// Climber age at [`REFERENCE_YEAR`]; `None` when no birth date was logged
    pub age: Option<i32>,
    /// Rating on a 0-5 scale; 0 means unrated and is excluded from averages
    pub rating: u8,
    /// Year of the ascent; 0 is the upstream sentinel for an unknown year
    pub year: i32,
    /// Month of the ascent (1-12), derived from `date`
    pub month: u32,
    /// Moment the ascent was logged
    pub date: NaiveDateTime,
}

impl AscentRecord {
    /// Semantic method category for this ascent.
    pub fn method(&self) -> Method {
        match self.method_id {
            1 => Method::Redpoint,
            2 => Method::Flash,
            4 => Method::Toprope,
            // 3 and the historical alias 5
            _ => Method::Onsight,
        }
    }

    /// True when the climber rated the route.
    pub fn is_rated(&self) -> bool {
        self.rating != 0
    }
}

fn column<'a>(record: &'a StringRecord, index: usize, name: &'static str) -> Result<&'a str> {
    record
        .get(index)
        .ok_or(LogbookError::MissingColumn(name))
        .map(str::trim)
}

fn parse_column<T: std::str::FromStr>(value: &str, field: &'static str) -> Result<T> {
    value.parse().map_err(|_| LogbookError::FieldParse {
        field,
        value: value.to_string(),
    })
}

/// Parses one CSV row into an [`AscentRecord`].
///
/// Expected column order:
/// `crag,sector,name,fra_routes,method_id,sex,rating,date,year,birth`
/// where `date` is a unix timestamp in seconds and `birth` is a
/// `YYYY-MM-DD` date that may be empty.
impl TryFrom<&StringRecord> for AscentRecord {
    type Error = LogbookError;

    fn try_from(record: &StringRecord) -> Result<Self> {
        let crag = column(record, 0, "crag")?.to_string();
        let sector = column(record, 1, "sector")?.to_string();
        let route_name = column(record, 2, "name")?.to_string();
        let grade = column(record, 3, "fra_routes")?.to_string();

        let method_id: u8 = parse_column(column(record, 4, "method_id")?, "method_id")?;
        Method::from_code(method_id).ok_or(LogbookError::UnknownMethodCode(method_id))?;

        let sex_code: u8 = parse_column(column(record, 5, "sex")?, "sex")?;
        let rating: u8 = parse_column(column(record, 6, "rating")?, "rating")?;
        if rating > 5 {
            return Err(LogbookError::RatingOutOfRange(rating));
        }

        let timestamp: i64 = parse_column(column(record, 7, "date")?, "date")?;
        let date = DateTime::from_timestamp(timestamp, 0)
            .ok_or_else(|| LogbookError::DateParse(timestamp.to_string()))?
            .naive_utc();

        let year: i32 = parse_column(column(record, 8, "year")?, "year")?;

        let birth_raw = column(record, 9, "birth")?;
        let age = if birth_raw.is_empty() {
            None
        } else {
            let birth = NaiveDate::parse_from_str(birth_raw, BIRTH_FORMAT)
                .map_err(|_| LogbookError::DateParse(birth_raw.to_string()))?;
            Some(REFERENCE_YEAR - birth.year())
        };

        Ok(AscentRecord {
            crag,
            sector,
            route_name,
            grade,
            method_id,
            sex: Sex::from_code(sex_code),
            age,
            rating,
            year,
            month: date.month(),
            date,
        })
    }
}
