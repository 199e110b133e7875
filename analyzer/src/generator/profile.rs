use crate::workflow::input::NamedSchedule;
use anyhow::Context;
use gapcore::schedule::{encode, SlotIndex, SCHEDULE_LENGTH};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating synthetic class schedules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize,
    /// Chance that any single slot holds a class.
    pub class_probability: f64,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 10,
            class_probability: 0.25,
            seed: 10,
        }
    }
}

fn random_slots(rng: &mut StdRng, class_probability: f64) -> Vec<SlotIndex> {
    (0..SCHEDULE_LENGTH)
        .filter(|_| rng.gen_bool(class_probability))
        .map(SlotIndex::from_position)
        .collect()
}

pub fn build_schedules(config: &GeneratorConfig) -> anyhow::Result<Vec<NamedSchedule>> {
    anyhow::ensure!(
        (0.0..=1.0).contains(&config.class_probability),
        "class probability {} is outside [0, 1]",
        config.class_probability
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.count)
        .map(|index| -> anyhow::Result<NamedSchedule> {
            let schedule = encode(random_slots(&mut rng, config.class_probability))
                .context("encoding generated schedule")?;
            Ok(NamedSchedule {
                username: Some(format!("my_user_{}", index + 1)),
                schedule,
            })
        })
        .collect()
}
