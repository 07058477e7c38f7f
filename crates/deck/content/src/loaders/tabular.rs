//! CSV weapon tables.
//!
//! Card lists are maintained as spreadsheets with the columns
//! `name, type, strength, dexterity, intelligence, faith` (any order, header
//! row required). A `type` of `"<character> <category>"` restricts the card
//! to that character. Quoted fields may contain commas, `""` escapes and line
//! breaks; blank lines are skipped.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use deck_core::{Catalog, StatKind, StatVector, WeaponRecord, load_weapons};

use crate::loaders::{LoadResult, integrity_error, read_file};

const NAME: &str = "name";
const TYPE: &str = "type";

/// Loader for weapon tables in CSV form.
pub struct TabularWeaponLoader;

impl TabularWeaponLoader {
    /// Parse a CSV table into weapon records.
    pub fn parse(content: &str) -> LoadResult<Vec<WeaponRecord>> {
        let mut rows = split_records(content).into_iter();

        let Some((_, header)) = rows.next() else {
            return Ok(Vec::new());
        };
        let columns: HashMap<String, usize> = header
            .into_iter()
            .enumerate()
            .map(|(i, name)| (name.to_ascii_lowercase(), i))
            .collect();

        let column = |name: &str| {
            columns
                .get(name)
                .copied()
                .ok_or_else(|| anyhow::anyhow!("Missing column '{}' in weapon table", name))
        };
        let name_col = column(NAME)?;
        let type_col = column(TYPE)?;
        let stat_cols = StatKind::ALL.map(|stat| column(stat.as_ref()));
        let stat_cols: Vec<usize> = stat_cols.into_iter().collect::<LoadResult<_>>()?;

        rows.map(|(line, fields)| {
            parse_row(&fields, name_col, type_col, &stat_cols)
                .with_context(|| format!("Invalid weapon table row {}", line))
        })
        .collect()
    }

    /// Load a CSV table and add its cards to `catalog`.
    ///
    /// Owners are resolved against the characters already in `catalog`; an
    /// unknown owner fails the whole table. Returns the number of rows loaded.
    pub fn load(catalog: &mut Catalog, path: &Path) -> LoadResult<usize> {
        let content = read_file(path)?;
        let records = Self::parse(&content)
            .with_context(|| format!("Failed to parse weapon table {}", path.display()))?;

        let weapons = load_weapons(records, &catalog.registry())
            .map_err(|e| integrity_error(path, e))?;

        let count = weapons.len();
        for weapon in weapons {
            if let Some(previous) = catalog.insert_weapon(weapon) {
                tracing::debug!("{}: replaced '{}'", path.display(), previous.name());
            }
        }

        tracing::info!("Loaded {} weapons from {}", count, path.display());
        Ok(count)
    }
}

fn parse_row(
    fields: &[String],
    name_col: usize,
    type_col: usize,
    stat_cols: &[usize],
) -> LoadResult<WeaponRecord> {
    let field = |i: usize| {
        fields
            .get(i)
            .map(String::as_str)
            .ok_or_else(|| anyhow::anyhow!("expected at least {} fields, got {}", i + 1, fields.len()))
    };

    let name = field(name_col)?.to_string();
    let mut type_tokens = field(type_col)?.split_whitespace();
    let (character, kind) = match (type_tokens.next(), type_tokens.next()) {
        (Some(character), Some(kind)) => (Some(character.to_string()), kind.to_string()),
        (Some(kind), None) => (None, kind.to_string()),
        (None, _) => anyhow::bail!("empty type for '{}'", name),
    };

    let mut values = [0u32; StatKind::COUNT];
    for (value, (&col, stat)) in values.iter_mut().zip(stat_cols.iter().zip(StatKind::ALL)) {
        let raw = field(col)?;
        *value = raw
            .parse()
            .with_context(|| format!("invalid {} '{}' for '{}'", stat, raw, name))?;
    }

    Ok(WeaponRecord {
        name,
        kind,
        stats: StatVector::from(values),
        character,
    })
}

/// Splits CSV text into records, each tagged with the line it starts on.
///
/// Double-quoted fields may span lines and use `""` for a literal quote.
fn split_records(content: &str) -> Vec<(usize, Vec<String>)> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut line = 1;
    let mut start = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(take_field(&mut current)),
            '\r' if !quoted => {}
            '\n' if !quoted => {
                fields.push(take_field(&mut current));
                push_record(&mut records, start, std::mem::take(&mut fields));
                line += 1;
                start = line;
            }
            '\n' => {
                current.push(c);
                line += 1;
            }
            _ => current.push(c),
        }
    }
    fields.push(take_field(&mut current));
    push_record(&mut records, start, fields);
    records
}

fn take_field(current: &mut String) -> String {
    std::mem::take(current).trim().to_string()
}

fn push_record(records: &mut Vec<(usize, Vec<String>)>, line: usize, fields: Vec<String>) {
    // blank line
    if fields.len() == 1 && fields[0].is_empty() {
        return;
    }
    records.push((line, fields));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_quoted_fields() {
        let records = split_records(r#"a, "b, c" ,"say ""hi""",4"#);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].1, vec!["a", "b, c", r#"say "hi""#, "4"]);
    }

    #[test]
    fn quoted_fields_may_span_lines() {
        let table = "name,type,strength,dexterity,intelligence,faith\r\n\
                     \"moonlight\ngreatsword\",weapon,16,11,26,0\r\n\
                     \n\
                     club,weapon,x,0,0,0\n";
        let records = split_records(table);

        assert_eq!(records.len(), 3);
        assert_eq!(records[1].0, 2);
        assert_eq!(records[1].1[0], "moonlight\ngreatsword");
        assert_eq!(records[2].0, 5);

        let err = TabularWeaponLoader::parse(table).unwrap_err();
        assert!(format!("{:#}", err).contains("row 5"));
    }

    #[test]
    fn parses_owner_from_type_column() {
        let table = "name,type,strength,dexterity,intelligence,faith\n\
                     tiny being's ring,herald ring,0,0,0,15\n\
                     \n\
                     avelyn,weapon,30,30,0,0\n";
        let records = TabularWeaponLoader::parse(table).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].character.as_deref(), Some("herald"));
        assert_eq!(records[0].kind, "ring");
        assert_eq!(records[1].character, None);
        assert_eq!(records[1].stats, StatVector::new(30, 30, 0, 0));
    }

    #[test]
    fn columns_may_appear_in_any_order() {
        let table = "faith,intelligence,dexterity,strength,type,name\n1,2,3,4,spell,heal\n";
        let records = TabularWeaponLoader::parse(table).unwrap();

        assert_eq!(records[0].name, "heal");
        assert_eq!(records[0].stats, StatVector::new(4, 3, 2, 1));
    }

    #[test]
    fn reports_missing_columns_and_bad_numbers() {
        let missing = "name,type,strength,dexterity,intelligence\nx,ring,0,0,0\n";
        assert!(TabularWeaponLoader::parse(missing).is_err());

        let bad = "name,type,strength,dexterity,intelligence,faith\nx,ring,ten,0,0,0\n";
        let err = TabularWeaponLoader::parse(bad).unwrap_err();
        assert!(format!("{:#}", err).contains("row 2"));
    }

    #[test]
    fn empty_table_has_no_records() {
        assert!(TabularWeaponLoader::parse("").unwrap().is_empty());
    }
}
