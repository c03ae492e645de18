use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use rusqlite::{params, Row};

use crate::db::{
    helpers::{
        parse_bleeding, parse_date, parse_mucus_color, parse_mucus_consistency,
        parse_mucus_type, parse_time, DATE_FORMAT, TIME_FORMAT,
    },
    Database,
};
use crate::models::{Mucus, Observation};

const SELECT_COLUMNS: &str = "SELECT id, date, time, bleeding, mucus_type, mucus_color,
        mucus_consistency, intercourse, notes
 FROM observations";

fn row_to_observation(row: &Row) -> Result<Observation> {
    let date: String = row.get("date")?;
    let time: String = row.get("time")?;
    let bleeding: String = row.get("bleeding")?;
    let mucus_type: String = row.get("mucus_type")?;
    let mucus_color: String = row.get("mucus_color")?;
    let mucus_consistency: String = row.get("mucus_consistency")?;

    Ok(Observation {
        id: row.get("id")?,
        date: parse_date(&date, "date")?,
        time: parse_time(&time, "time")?,
        bleeding: parse_bleeding(&bleeding)?,
        mucus: Mucus {
            kind: parse_mucus_type(&mucus_type)?,
            color: parse_mucus_color(&mucus_color)?,
            consistency: parse_mucus_consistency(&mucus_consistency)?,
        },
        intercourse: row.get("intercourse")?,
        notes: row.get("notes")?,
    })
}

impl Database {
    pub async fn insert_observation(&self, observation: &Observation) -> Result<()> {
        let record = observation.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO observations (id, date, time, bleeding, mucus_type, mucus_color,
                                           mucus_consistency, intercourse, notes, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    record.id,
                    record.date.format(DATE_FORMAT).to_string(),
                    record.time.format(TIME_FORMAT).to_string(),
                    record.bleeding.as_str(),
                    record.mucus.kind.as_str(),
                    record.mucus.color.as_str(),
                    record.mucus.consistency.as_str(),
                    record.intercourse,
                    record.notes,
                    Utc::now().to_rfc3339(),
                ],
            )
            .with_context(|| "failed to insert observation")?;
            Ok(())
        })
        .await
    }

    /// Delete one observation. Returns whether a row was removed.
    pub async fn delete_observation(&self, observation_id: &str) -> Result<bool> {
        let observation_id = observation_id.to_string();
        self.execute(move |conn| {
            let deleted = conn
                .execute(
                    "DELETE FROM observations WHERE id = ?1",
                    params![observation_id],
                )
                .with_context(|| "failed to delete observation")?;
            Ok(deleted > 0)
        })
        .await
    }

    /// All observations, by date and then insertion order.
    pub async fn list_observations(&self) -> Result<Vec<Observation>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY date ASC, rowid ASC"))?;

            let mut rows = stmt.query([])?;
            let mut observations = Vec::new();
            while let Some(row) = rows.next()? {
                observations.push(row_to_observation(row)?);
            }

            Ok(observations)
        })
        .await
    }

    pub async fn observations_on(&self, date: NaiveDate) -> Result<Vec<Observation>> {
        let date = date.format(DATE_FORMAT).to_string();
        self.execute(move |conn| {
            let mut stmt =
                conn.prepare(&format!("{SELECT_COLUMNS} WHERE date = ?1 ORDER BY rowid ASC"))?;

            let mut rows = stmt.query(params![date])?;
            let mut observations = Vec::new();
            while let Some(row) = rows.next()? {
                observations.push(row_to_observation(row)?);
            }

            Ok(observations)
        })
        .await
    }
}
