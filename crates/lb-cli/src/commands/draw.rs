use lb_core::DrawConfig;
use lb_store::Store;

pub fn run(
    store: &Store,
    name: &str,
    times: u32,
    seed: Option<u64>,
    max_depth: usize,
) -> Result<(), String> {
    let tables = super::load(store)?;

    let mut config = DrawConfig::default().with_max_depth(max_depth);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut rng = config.rng();
    tracing::debug!(table = name, seed = ?config.seed, max_depth = config.max_depth, times, "drawing");

    for _ in 0..times {
        let draw = config
            .draw(name, &tables, &mut rng)
            .map_err(|e| format!("cannot draw from \"{name}\": {e}"))?;
        println!("{}", draw.trace());
    }

    Ok(())
}
