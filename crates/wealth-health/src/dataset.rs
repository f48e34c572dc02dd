// File: crates/wealth-health/src/dataset.rs
// Summary: Country records with per-year GDP/life-expectancy/population series and the JSON loader.
// Notes:
// - Loading is lenient per record: a record that cannot be read is skipped
//   with a warning instead of failing the whole document.
// - Per-year values that are null, non-numeric or unparsable read as missing.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::DataError;
use crate::region::Region;

pub const START_YEAR: i32 = 1800;
pub const END_YEAR: i32 = 2018;

/// Inclusive year span covered by the time series; index 0 is `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }

    /// Series index for `year`, `None` outside the range.
    pub fn offset(&self, year: i32) -> Option<usize> {
        self.contains(year).then(|| (i64::from(year) - i64::from(self.start)) as usize)
    }

    /// Number of years (series entries) in the range.
    pub fn len(&self) -> usize {
        if self.end < self.start { 0 } else { (i64::from(self.end) - i64::from(self.start) + 1) as usize }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn clamp(&self, year: i32) -> i32 {
        year.clamp(self.start, self.end.max(self.start))
    }
}

impl Default for YearRange {
    fn default() -> Self { Self::new(START_YEAR, END_YEAR) }
}

/// The three values of one country for one year.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct YearSample {
    pub gdp: f64,
    pub life_expectancy: f64,
    pub population: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    #[serde(rename = "country", alias = "name")]
    pub name: String,
    pub region: Region,
    #[serde(deserialize_with = "year_values")]
    pub gdp: Vec<Option<f64>>,
    #[serde(rename = "lifeExpectancy", alias = "life_expectancy", deserialize_with = "year_values")]
    pub life_expectancy: Vec<Option<f64>>,
    #[serde(deserialize_with = "year_values")]
    pub population: Vec<Option<f64>>,
}

impl CountryRecord {
    /// Values at `offset` when all three are present, non-zero and finite.
    pub fn sample(&self, offset: usize) -> Option<YearSample> {
        let gdp = usable(&self.gdp, offset)?;
        let life_expectancy = usable(&self.life_expectancy, offset)?;
        let population = usable(&self.population, offset)?;
        Some(YearSample { gdp, life_expectancy, population })
    }

    /// Longest of the three series.
    pub fn series_len(&self) -> usize {
        self.gdp.len().max(self.life_expectancy.len()).max(self.population.len())
    }

    fn series_match(&self, expected: usize) -> bool {
        self.gdp.len() == expected && self.life_expectancy.len() == expected && self.population.len() == expected
    }
}

#[inline]
fn usable(series: &[Option<f64>], offset: usize) -> Option<f64> {
    series
        .get(offset)
        .copied()
        .flatten()
        .filter(|v| v.is_finite() && *v != 0.0)
}

// Numbers pass through; numeric strings are parsed; everything else is missing.
fn year_values<'de, D>(deserializer: D) -> Result<Vec<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw.iter().map(year_value).collect())
}

fn year_value(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// All loaded countries. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    countries: Vec<CountryRecord>,
    skipped: usize,
}

impl Dataset {
    pub fn new(countries: Vec<CountryRecord>) -> Self {
        Self { countries, skipped: 0 }
    }

    pub fn from_json_str(s: &str) -> Result<Self, DataError> {
        let doc: Value = serde_json::from_str(s)?;
        Self::from_value(doc)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, DataError> {
        let doc: Value = serde_json::from_reader(reader)?;
        Self::from_value(doc)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| DataError::io(path, e))?;
        let data = Self::from_reader(std::io::BufReader::new(file))?;
        log::info!(
            "loaded {} countries from {} ({} skipped)",
            data.len(),
            path.display(),
            data.skipped()
        );
        Ok(data)
    }

    fn from_value(doc: Value) -> Result<Self, DataError> {
        let items = match doc {
            Value::Array(items) => items,
            other => return Err(DataError::NotAnArray(json_kind(&other))),
        };

        let mut countries = Vec::with_capacity(items.len());
        let mut skipped = 0usize;
        for (i, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<CountryRecord>(item) {
                Ok(rec) => countries.push(rec),
                Err(e) => {
                    log::warn!("skipping country record #{i}: {e}");
                    skipped += 1;
                }
            }
        }

        let unknown: BTreeSet<&str> = countries
            .iter()
            .filter(|c| !c.region.is_known())
            .map(|c| c.region.as_str())
            .collect();
        for region in unknown {
            log::warn!("unrecognized region '{region}'; using the fallback color");
        }

        Ok(Self { countries, skipped })
    }

    pub fn countries(&self) -> &[CountryRecord] { &self.countries }

    pub fn len(&self) -> usize { self.countries.len() }

    pub fn is_empty(&self) -> bool { self.countries.is_empty() }

    /// Records dropped during loading.
    pub fn skipped(&self) -> usize { self.skipped }

    /// Names of countries whose series do not all span `range` exactly.
    pub fn misaligned(&self, range: &YearRange) -> Vec<&str> {
        self.countries
            .iter()
            .filter(|c| !c.series_match(range.len()))
            .map(|c| c.name.as_str())
            .collect()
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_range_offsets() {
        let r = YearRange::default();
        assert_eq!(r.len(), 219);
        assert_eq!(r.offset(1800), Some(0));
        assert_eq!(r.offset(2018), Some(218));
        assert_eq!(r.offset(1799), None);
        assert_eq!(r.offset(2019), None);
        assert_eq!(r.clamp(2500), 2018);
    }

    #[test]
    fn full_i32_span_does_not_overflow() {
        let r = YearRange::new(i32::MIN, i32::MAX);
        assert_eq!(r.offset(i32::MIN), Some(0));
        assert_eq!(r.offset(i32::MAX), Some(u32::MAX as usize));
        assert_eq!(r.len(), u32::MAX as usize + 1);
        assert!(!r.is_empty());
    }

    #[test]
    fn values_accept_numbers_strings_and_nulls() {
        let rec: CountryRecord = serde_json::from_str(
            r#"{"country":"Chile","region":"americas",
                "gdp":[1200, "1300.5", null, "n/a", true],
                "lifeExpectancy":[30, 31, 32, 33, 34],
                "population":[1e6, 1e6, 1e6, 1e6, 1e6]}"#,
        )
        .unwrap();
        assert_eq!(rec.gdp, vec![Some(1200.0), Some(1300.5), None, None, None]);
        assert_eq!(rec.region, Region::Americas);
    }

    #[test]
    fn sample_requires_all_three_nonzero() {
        let rec = CountryRecord {
            name: "X".into(),
            region: Region::Asia,
            gdp: vec![Some(5.0), Some(0.0), Some(5.0)],
            life_expectancy: vec![Some(50.0), Some(50.0), None],
            population: vec![Some(100.0), Some(100.0), Some(100.0)],
        };
        assert_eq!(rec.sample(0), Some(YearSample { gdp: 5.0, life_expectancy: 50.0, population: 100.0 }));
        assert_eq!(rec.sample(1), None);
        assert_eq!(rec.sample(2), None);
        assert_eq!(rec.sample(3), None);
    }

    #[test]
    fn name_alias_accepted() {
        let rec: CountryRecord = serde_json::from_str(
            r#"{"name":"Peru","region":"americas","gdp":[],"life_expectancy":[],"population":[]}"#,
        )
        .unwrap();
        assert_eq!(rec.name, "Peru");
    }
}
