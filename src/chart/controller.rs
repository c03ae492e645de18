use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::charting::ChartingConfig;
use crate::db::Database;
use crate::models::{DayRecord, Observation, ObservationInput};
use crate::{log_error, log_info, log_warn};

use super::Chart;

const ENABLE_LOGS: bool = true;

/// Persisted chart. Each mutation writes the observation to the database
/// and then updates and rescans the in-memory chart while holding the
/// chart lock, so readers never see a half-applied change.
#[derive(Clone)]
pub struct ChartController {
    chart: Arc<Mutex<Chart>>,
    db: Database,
}

impl ChartController {
    pub async fn open(db: Database, config: ChartingConfig) -> Result<Self> {
        let observations = db
            .list_observations()
            .await
            .context("failed to load stored observations")?;
        let chart = Chart::from_observations(observations, config);

        log_info!(
            "Loaded chart with {} observations over {} days",
            chart.observation_count(),
            chart.days().len()
        );

        Ok(Self {
            chart: Arc::new(Mutex::new(chart)),
            db,
        })
    }

    pub async fn add_observation(&self, input: ObservationInput) -> Result<Observation> {
        let observation = input.into_observation(Uuid::new_v4().to_string());

        let mut chart = self.chart.lock().await;
        if let Err(err) = self.db.insert_observation(&observation).await {
            log_error!("Failed to store observation for {}: {err:#}", observation.date);
            return Err(err);
        }
        chart.add(observation.clone());

        log_info!(
            "Added observation {} on {}",
            observation.id,
            observation.date
        );
        Ok(observation)
    }

    /// Delete an observation. Unknown ids return `false` and leave the
    /// chart untouched.
    pub async fn delete_observation(&self, observation_id: &str) -> Result<bool> {
        let mut chart = self.chart.lock().await;
        let deleted = match self.db.delete_observation(observation_id).await {
            Ok(deleted) => deleted,
            Err(err) => {
                log_error!("Failed to delete observation {observation_id}: {err:#}");
                return Err(err);
            }
        };

        if !deleted {
            log_warn!("Observation {observation_id} not found; nothing deleted");
            return Ok(false);
        }

        if chart.remove(observation_id).is_none() {
            log_warn!("Observation {observation_id} was stored but missing from the chart");
        } else {
            log_info!("Deleted observation {observation_id}");
        }
        Ok(true)
    }

    pub async fn set_config(&self, config: ChartingConfig) {
        self.chart.lock().await.set_config(config);
    }

    pub async fn cycle_view(&self) -> Vec<DayRecord> {
        self.chart.lock().await.days().to_vec()
    }

    pub async fn month_view(&self, year: i32, month: u32) -> Vec<DayRecord> {
        self.chart.lock().await.month(year, month)
    }

    pub async fn observations_on(&self, date: NaiveDate) -> Vec<Observation> {
        self.chart.lock().await.observations_on(date).to_vec()
    }
}
