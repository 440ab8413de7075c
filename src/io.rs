use crate::model::{Override, RotationConfig, ScheduledShift, UserId};
use anyhow::Context;
use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Charge une config de rotation JSON :
/// `{"users": ["a", "b"], "anchor": "...Z", "interval_days": 7}`
pub fn load_config_json<P: AsRef<Path>>(path: P) -> anyhow::Result<RotationConfig> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let config: RotationConfig =
        serde_json::from_slice(&data).with_context(|| "parsing rotation config")?;
    config.validate().map_err(anyhow::Error::msg)?;
    Ok(config)
}

/// Charge des overrides JSON : tableau de `{"user", "start", "end"}`.
pub fn load_overrides_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Override>> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let overrides: Vec<Override> =
        serde_json::from_slice(&data).with_context(|| "parsing overrides")?;
    Ok(overrides)
}

/// Import d'overrides depuis CSV : header `user,start,end` (RFC3339 UTC)
pub fn import_overrides_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Override>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let user = rec.get(0).context("missing user")?.trim();
        if user.is_empty() {
            anyhow::bail!("invalid override row (empty user)");
        }
        let start = rec.get(1).context("missing start")?.trim();
        let end = rec.get(2).context("missing end")?.trim();
        let start: DateTime<Utc> = start.parse().context("start RFC3339")?;
        let end: DateTime<Utc> = end.parse().context("end RFC3339")?;
        let ov = Override::new(UserId::new(user), start, end).map_err(anyhow::Error::msg)?;
        out.push(ov);
    }
    Ok(out)
}

/// Export JSON du planning (jolie mise en forme, écriture atomique)
pub fn export_schedule_json<P: AsRef<Path>>(
    path: P,
    schedule: &[ScheduledShift],
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_vec_pretty(schedule)?;
    let mut tmp = NamedTempFile::new_in(path.parent().unwrap_or_else(|| Path::new(".")))
        .with_context(|| "creating temp file")?;
    tmp.write_all(&json)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}

/// Export CSV du planning : header `user,start_at,end_at`
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    schedule: &[ScheduledShift],
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["user", "start_at", "end_at"])?;
    for s in schedule {
        w.write_record([s.user.as_str(), s.start_at.as_str(), s.end_at.as_str()])?;
    }
    w.flush()?;
    Ok(())
}
