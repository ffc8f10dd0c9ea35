//! Time-bounded cache in front of a league source, one lifetime per data kind.

use crate::config::CacheConfig;
use crate::models::{PeriodResult, Team, TeamId};
use crate::source::{LeagueInfo, LeagueSource, Roster, SourceResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

struct Entry<T> {
    value: T,
    stored_at: Instant,
}

impl<T: Clone> Entry<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
        }
    }

    fn fresh(&self, ttl: Duration) -> Option<T> {
        (self.stored_at.elapsed() < ttl).then(|| self.value.clone())
    }
}

#[derive(Default)]
struct Store {
    league_info: Option<Entry<LeagueInfo>>,
    standings: Option<Entry<Vec<Team>>>,
    scoreboards: HashMap<u32, Entry<PeriodResult>>,
    team_points: HashMap<(TeamId, u32), Entry<Option<f64>>>,
    rosters: HashMap<(TeamId, u32), Entry<Option<Roster>>>,
}

/// Caches successful answers from `inner`; errors always go back to the source.
pub struct CachedSource {
    inner: Arc<dyn LeagueSource>,
    config: CacheConfig,
    store: RwLock<Store>,
}

impl CachedSource {
    pub fn new(inner: Arc<dyn LeagueSource>, config: CacheConfig) -> Self {
        Self {
            inner,
            config,
            store: RwLock::new(Store::default()),
        }
    }

    fn read<T>(&self, f: impl FnOnce(&Store) -> Option<T>) -> Option<T> {
        // A poisoned lock is treated as a cache miss.
        self.store.read().ok().and_then(|g| f(&*g))
    }

    fn write(&self, f: impl FnOnce(&mut Store)) {
        if let Ok(mut g) = self.store.write() {
            f(&mut *g);
        }
    }

    /// Drop everything.
    pub fn clear(&self) {
        self.write(|s| *s = Store::default());
        log::info!("League data cache cleared");
    }

    /// Drop expired entries. Returns how many were removed.
    pub fn evict_expired(&self) -> usize {
        let c = &self.config;
        let mut removed = 0;
        self.write(|s| {
            if s.league_info.as_ref().is_some_and(|e| e.stored_at.elapsed() >= c.league_info) {
                s.league_info = None;
                removed += 1;
            }
            if s.standings.as_ref().is_some_and(|e| e.stored_at.elapsed() >= c.standings) {
                s.standings = None;
                removed += 1;
            }
            let before = s.scoreboards.len() + s.team_points.len() + s.rosters.len();
            s.scoreboards.retain(|_, e| e.stored_at.elapsed() < c.scoreboards);
            s.team_points.retain(|_, e| e.stored_at.elapsed() < c.scoreboards);
            s.rosters.retain(|_, e| e.stored_at.elapsed() < c.rosters);
            removed += before - (s.scoreboards.len() + s.team_points.len() + s.rosters.len());
        });
        removed
    }
}

#[async_trait]
impl LeagueSource for CachedSource {
    async fn league_info(&self) -> SourceResult<LeagueInfo> {
        let ttl = self.config.league_info;
        if let Some(hit) = self.read(|s| s.league_info.as_ref()?.fresh(ttl)) {
            return Ok(hit);
        }
        let info = self.inner.league_info().await?;
        self.write(|s| s.league_info = Some(Entry::new(info.clone())));
        Ok(info)
    }

    async fn standings(&self) -> SourceResult<Vec<Team>> {
        let ttl = self.config.standings;
        if let Some(hit) = self.read(|s| s.standings.as_ref()?.fresh(ttl)) {
            return Ok(hit);
        }
        let teams = self.inner.standings().await?;
        self.write(|s| s.standings = Some(Entry::new(teams.clone())));
        Ok(teams)
    }

    async fn scoreboard(&self, period: u32) -> SourceResult<PeriodResult> {
        let ttl = self.config.scoreboards;
        if let Some(hit) = self.read(|s| s.scoreboards.get(&period)?.fresh(ttl)) {
            return Ok(hit);
        }
        let board = self.inner.scoreboard(period).await?;
        self.write(|s| {
            s.scoreboards.insert(period, Entry::new(board.clone()));
        });
        Ok(board)
    }

    async fn team_points(&self, team_id: &str, period: u32) -> SourceResult<Option<f64>> {
        let ttl = self.config.scoreboards;
        let key = (team_id.to_string(), period);
        if let Some(hit) = self.read(|s| s.team_points.get(&key)?.fresh(ttl)) {
            return Ok(hit);
        }
        let points = self.inner.team_points(team_id, period).await?;
        self.write(|s| {
            s.team_points.insert(key, Entry::new(points));
        });
        Ok(points)
    }

    async fn team_roster(&self, team_id: &str, period: u32) -> SourceResult<Option<Roster>> {
        let ttl = self.config.rosters;
        let key = (team_id.to_string(), period);
        if let Some(hit) = self.read(|s| s.rosters.get(&key)?.fresh(ttl)) {
            return Ok(hit);
        }
        let roster = self.inner.team_roster(team_id, period).await?;
        self.write(|s| {
            s.rosters.insert(key, Entry::new(roster.clone()));
        });
        Ok(roster)
    }
}
