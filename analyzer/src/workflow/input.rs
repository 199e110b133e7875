use anyhow::Context;
use gapcore::BitSchedule;
use std::fs;
use std::path::Path;

/// A validated schedule, optionally tagged with the user it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedSchedule {
    pub username: Option<String>,
    pub schedule: BitSchedule,
}

impl NamedSchedule {
    pub fn label(&self) -> &str {
        self.username.as_deref().unwrap_or("<anonymous>")
    }
}

/// Parses one schedule per line, either `schedule` or `username schedule`.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_schedules(contents: &str) -> anyhow::Result<Vec<NamedSchedule>> {
    let mut schedules = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (username, raw) = match (fields.next(), fields.next(), fields.next()) {
            (Some(raw), None, None) => (None, raw),
            (Some(username), Some(raw), None) => (Some(username.to_string()), raw),
            _ => anyhow::bail!("line {}: expected `[username] schedule`", index + 1),
        };
        let schedule = raw
            .parse::<BitSchedule>()
            .with_context(|| format!("line {}: invalid schedule", index + 1))?;
        schedules.push(NamedSchedule { username, schedule });
    }
    Ok(schedules)
}

pub fn load_schedules<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<NamedSchedule>> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading schedules {}", path_ref.display()))?;
    parse_schedules(&contents).with_context(|| format!("parsing schedules {}", path_ref.display()))
}
