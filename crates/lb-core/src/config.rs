//! Draw settings: RNG seed and depth bound.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collection::TableCollection;
use crate::error::DrawError;
use crate::resolve::{Draw, MAX_DEPTH, resolve_bounded};

/// Configuration for drawing from tables.
#[derive(Debug, Clone)]
pub struct DrawConfig {
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Maximum tables visited per draw, including the starting table.
    pub max_depth: usize,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_depth: MAX_DEPTH,
        }
    }
}

impl DrawConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the depth bound. A bound of 0 makes every draw fail.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Build the RNG described by this config.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Draw once from `table_name` using `rng`.
    pub fn draw<'a>(
        &self,
        table_name: &str,
        tables: &'a TableCollection,
        rng: &mut StdRng,
    ) -> Result<Draw<'a>, DrawError> {
        resolve_bounded(table_name, tables, self.max_depth, || rng.random::<f64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;

    #[test]
    fn default_config() {
        let cfg = DrawConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.max_depth, 10);
    }

    #[test]
    fn builder_methods() {
        let cfg = DrawConfig::default().with_seed(123).with_max_depth(4);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.max_depth, 4);
    }

    #[test]
    fn zero_depth_is_kept_and_fails() {
        let tables = TableCollection::new().with_table("A", vec![Entry::leaf("a")]);
        let cfg = DrawConfig::default().with_seed(3).with_max_depth(0);
        assert_eq!(cfg.max_depth, 0);
        let mut rng = cfg.rng();
        assert_eq!(
            cfg.draw("A", &tables, &mut rng),
            Err(DrawError::MaxDepthExceeded)
        );
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let tables = TableCollection::new().with_table(
            "Dice",
            (1..=20).map(|n| Entry::leaf(n.to_string())).collect::<Vec<_>>(),
        );
        let cfg = DrawConfig::default().with_seed(7);

        let mut first = cfg.rng();
        let mut second = cfg.rng();
        for _ in 0..10 {
            let a = cfg.draw("Dice", &tables, &mut first).unwrap();
            let b = cfg.draw("Dice", &tables, &mut second).unwrap();
            assert_eq!(a.item, b.item);
        }
    }

    #[test]
    fn draw_respects_depth() {
        let tables = TableCollection::new()
            .with_table("A", vec![Entry::reference("B")])
            .with_table("B", vec![Entry::leaf("b")]);
        let cfg = DrawConfig::default().with_seed(1).with_max_depth(1);
        let mut rng = cfg.rng();
        assert_eq!(
            cfg.draw("A", &tables, &mut rng),
            Err(DrawError::MaxDepthExceeded)
        );
    }
}
