use crate::prelude::*;
use csv;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads a [`ProfileDatabase`] from delimited text with a header row.
///
/// One column holds the individual's name and every other column is an STR
/// whose cells are repeat counts. Counts are parsed here, once, so a malformed
/// cell fails the read instead of surfacing during matching.
pub struct DatabaseBuilder {
    delimiter: u8,
    name_field: Option<String>,
    trim: bool,
}

impl DatabaseBuilder {
    /// Construct a new database builder
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            name_field: None,
            trim: true,
        }
    }

    pub fn delimiter(&mut self, delimiter: u8) -> &mut Self {
        self.delimiter = delimiter;
        self
    }

    /// Header of the name column. Without it the first column is the name.
    pub fn name_field(&mut self, name_field: &str) -> &mut Self {
        self.name_field = Some(name_field.to_owned());
        self
    }

    /// Strip whitespace around every field before parsing.
    pub fn trim(&mut self, trim: bool) -> &mut Self {
        self.trim = trim;
        self
    }

    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<ProfileDatabase> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading profile database");
        self.from_reader(File::open(path)?)
    }

    pub fn from_reader<R: Read>(&self, reader: R) -> Result<ProfileDatabase> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .trim(if self.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        if headers.is_empty() {
            return Err(Error::MissingHeader);
        }

        let name_idx = match &self.name_field {
            Some(name_field) => headers
                .iter()
                .position(|h| h == name_field)
                .ok_or_else(|| Error::MissingField {
                    record: None,
                    field: name_field.clone(),
                })?,
            None => 0,
        };
        let fields: Vec<&str> = headers.iter().collect();
        let loci: Vec<Locus> = fields
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != name_idx)
            .map(|(_, s)| s.to_string())
            .collect();

        let mut rows = vec![];
        for (idx, row) in rdr.into_records().enumerate() {
            let row = row?;
            let record = idx + 1;
            if row.len() > fields.len() {
                return Err(Error::TooManyFields {
                    record,
                    expected: fields.len(),
                    found: row.len(),
                });
            }

            let mut name = None;
            let mut counts = Vec::with_capacity(loci.len());
            for (i, field) in fields.iter().enumerate() {
                let value = row.get(i).ok_or_else(|| Error::MissingField {
                    record: Some(record),
                    field: field.to_string(),
                })?;
                if i == name_idx {
                    name = Some(value.to_string());
                    continue;
                }
                let count = value
                    .parse::<RepeatCount>()
                    .map_err(|source| Error::InvalidCount {
                        record,
                        field: field.to_string(),
                        value: value.to_string(),
                        source,
                    })?;
                counts.push(count);
            }
            // the header is non-empty, so the name column was visited
            rows.push((name.unwrap_or_default(), counts));
        }

        let database = ProfileDatabase::from_rows(loci, rows)?;
        debug!(
            profiles = database.len(),
            loci = database.loci().len(),
            "read profile database"
        );
        Ok(database)
    }
}

impl Default for DatabaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}
