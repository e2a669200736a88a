use crate::error::RiffError;
use include_dir::{include_dir, Dir};
use rand::Rng;
use serde::Deserialize;

static CONTENT_DIR: Dir = include_dir!("src/content");

/// An immutable, named list of candidate strings, loaded once from the
/// embedded content files. Pools are hard-coded per game and never
/// mutated; selection state lives in `Sampler`.
#[derive(Deserialize, Clone, Debug)]
pub struct ContentPool {
    pub name: String,
    pub entries: Vec<String>,
}

impl ContentPool {
    /// Load a pool from the embedded `src/content` directory. A missing
    /// or malformed file is a packaging bug, reported as `Config`.
    pub fn load(file_name: &str) -> Result<Self, RiffError> {
        let raw = embedded_file(file_name)?;
        let pool: ContentPool = serde_json::from_str(raw)
            .map_err(|e| RiffError::config(format!("{file_name}: {e}")))?;
        if pool.entries.is_empty() {
            return Err(RiffError::config(format!("{file_name}: empty pool")));
        }
        Ok(pool)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One exchange in the week-6 dialogue: a boss line and the player's
/// response options. The boss score always moves opposite the employee
/// score, so only the employee delta is stored.
#[derive(Deserialize, Clone, Debug)]
pub struct DialogueBlock {
    pub boss: String,
    pub options: Vec<ResponseOption>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ResponseOption {
    pub text: String,
    pub employee_delta: i32,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DialogueScript {
    pub name: String,
    pub blocks: Vec<DialogueBlock>,
}

impl DialogueScript {
    pub fn load() -> Result<Self, RiffError> {
        let raw = embedded_file("dialogue.json")?;
        let script: DialogueScript = serde_json::from_str(raw)
            .map_err(|e| RiffError::config(format!("dialogue.json: {e}")))?;
        if script.blocks.is_empty() {
            return Err(RiffError::config("dialogue.json: no blocks"));
        }
        Ok(script)
    }
}

fn embedded_file(file_name: &str) -> Result<&'static str, RiffError> {
    CONTENT_DIR
        .get_file(file_name)
        .and_then(|f| f.contents_utf8())
        .ok_or_else(|| RiffError::config(format!("missing content file {file_name}")))
}

/// Draw-without-replacement over an index set into a borrowed pool.
///
/// A drawn item is never returned again within the same selection run;
/// `reset` restores full candidacy. Draws are uniform over the remaining
/// candidates, no weighting.
#[derive(Debug, Clone)]
pub struct Sampler {
    pool_name: &'static str,
    remaining: Vec<usize>,
}

impl Sampler {
    pub fn new(pool_name: &'static str, pool_size: usize) -> Self {
        Self {
            pool_name,
            remaining: (0..pool_size).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Draw one not-yet-drawn index, removing it from future candidacy.
    /// Asking for more unique items than the pool holds is a
    /// configuration bug, not a user error.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Result<usize, RiffError> {
        if self.remaining.is_empty() {
            return Err(RiffError::ExhaustedPool {
                pool: self.pool_name,
            });
        }
        let slot = rng.gen_range(0..self.remaining.len());
        Ok(self.remaining.swap_remove(slot))
    }

    pub fn reset(&mut self, pool_size: usize) {
        self.remaining = (0..pool_size).collect();
    }
}
