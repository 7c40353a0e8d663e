use dicesim::defs::{d100, d6};
use dicesim::{
    expected_value, DicePool, Experiment, Result, Roll, RollExt, DEFAULT_EXPECTED_ROLLS,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dicesim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    three_d6()?;
    d100_variants()?;
    Ok(())
}

fn three_d6() -> Result<()> {
    let (d_1, d_2, d_3) = (d6(5), d6(21), d6(7));
    let pool = DicePool::three(d_1.clone(), d_2, d_3);

    info!("three d6");
    println!("d6");
    println!("{}", expected_value(&d_1, DEFAULT_EXPECTED_ROLLS)?);
    println!("3d6");
    println!("{}", expected_value(&pool, DEFAULT_EXPECTED_ROLLS)?);
    println!();
    Ok(())
}

fn d100_variants() -> Result<()> {
    let die = d100(1);
    let (d_1, d_2, d_3) = (d100(171), d100(19), d100(11));
    let pool = DicePool::three(d_1, d_2, d_3);
    let experiment = Experiment::default();

    report("d100", &die, &experiment)?;
    report("3d100", &pool, &experiment)?;
    report("penalty d100", &die.penalty(), &experiment)?;
    report("bonus d100", &die.bonus(), &experiment)?;
    report("double d100", &die.double(), &experiment)?;
    report("penalty 3d100", &pool.penalty(), &experiment)?;
    report("bonus 3d100", &pool.bonus(), &experiment)?;
    report("double 3d100", &pool.double(), &experiment)?;
    Ok(())
}

fn report(label: &str, source: &dyn Roll, experiment: &Experiment) -> Result<()> {
    info!(label, rolls = experiment.rolls(), "sampling");
    let mean = expected_value(source, DEFAULT_EXPECTED_ROLLS)?;
    let histogram = experiment.histogram(source)?;
    println!("{label}");
    println!("{mean}");
    println!("{histogram}");
    println!();
    Ok(())
}
