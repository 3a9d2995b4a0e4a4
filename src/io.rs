use crate::matching::SwapOffer;
use crate::model::{Cell, MonthLength, Person, PersonId, Roster};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Import du planning depuis CSV: header ignoré, puis `id,j1,j2,...,jN` (N = longueur du mois).
pub fn import_roster_csv<P: AsRef<Path>>(
    path: P,
    month_length: MonthLength,
) -> anyhow::Result<Roster> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("reading {}", path.display()))?;
    read_roster_csv(file, month_length).with_context(|| format!("parsing {}", path.display()))
}

/// Variante sur un flux quelconque.
///
/// Chaque case est vide ou numérique (virgule décimale acceptée). Les lignes
/// entièrement vides sont ignorées ; des colonnes en trop sont tolérées si elles
/// sont vides.
pub fn read_roster_csv<R: Read>(reader: R, month_length: MonthLength) -> anyhow::Result<Roster> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut roster = Roster::new(month_length);

    for rec in rdr.records() {
        let rec = rec?;
        if rec.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        let line = rec.position().map_or(0, |p| p.line());
        let person = parse_row(&rec, month_length).with_context(|| format!("line {line}"))?;
        roster.people.push(person);
    }
    roster.validate()?;

    #[cfg(feature = "logging")]
    tracing::debug!(
        people = roster.people.len(),
        month_length = month_length.days(),
        "roster loaded"
    );

    Ok(roster)
}

fn parse_row(rec: &StringRecord, month_length: MonthLength) -> anyhow::Result<Person> {
    let id = rec.get(0).context("missing person id")?.trim();
    if id.is_empty() {
        bail!("empty person id");
    }
    let days = month_length.len();
    if rec.len() < days + 1 {
        bail!(
            "person {id}: expected {days} day cells, found {}",
            rec.len().saturating_sub(1)
        );
    }
    if let Some((col, _)) = rec
        .iter()
        .enumerate()
        .skip(days + 1)
        .find(|(_, f)| !f.trim().is_empty())
    {
        bail!("person {id}: unexpected value in column {}", col + 1);
    }

    let shifts = rec
        .iter()
        .skip(1)
        .take(days)
        .enumerate()
        .map(|(i, raw)| {
            parse_cell(raw).with_context(|| format!("person {id}, day {}", i + 1))
        })
        .collect::<anyhow::Result<Vec<Cell>>>()?;

    Ok(Person::new(PersonId::new(id), shifts))
}

fn parse_cell(raw: &str) -> anyhow::Result<Cell> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Cell::Empty);
    }
    let value: f64 = raw
        .replace(',', ".")
        .parse()
        .with_context(|| format!("expected a number or an empty cell, got {raw:?}"))?;
    if !value.is_finite() {
        bail!("expected a finite number, got {raw:?}");
    }
    Ok(Cell::Numeric(value))
}

/// Export JSON des propositions (jolie mise en forme)
pub fn export_offers_json<P: AsRef<Path>>(path: P, offers: &[SwapOffer]) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(offers)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des propositions: header `person,day`, une ligne par jour proposé
pub fn export_offers_csv<P: AsRef<Path>>(path: P, offers: &[SwapOffer]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["person", "day"])?;
    for offer in offers {
        for day in &offer.days {
            let day = day.to_string();
            w.write_record([offer.person.as_str(), day.as_str()])?;
        }
    }
    w.flush()?;
    Ok(())
}
