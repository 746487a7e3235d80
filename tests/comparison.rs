use bogozo_rs::comparison::Comparison;
use bogozo_rs::config::ExperimentConfig;
use bogozo_rs::results::Metric;
use bogozo_rs::{patterns, Error};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn config_validation() {
    assert!(matches!(
        ExperimentConfig::new(5, 4, 10),
        Err(Error::InvalidRange { down: 5, up: 4 })
    ));
    assert!(matches!(ExperimentConfig::new(1, 4, 0), Err(Error::NoAttempts)));

    let config = ExperimentConfig::new(2, 4, 3).unwrap();
    assert!(config.record_times);
    assert_eq!(config.seed, None);
    assert_eq!(config.sizes(), 2..=4);

    let config = config.with_seed(7).without_times();
    assert!(!config.record_times);
    assert_eq!(config.seed, Some(7));
}

#[test]
fn end_to_end() {
    init_logger();

    let config = ExperimentConfig::new(4, 5, 50).unwrap();
    let comparison = Comparison::run(&config).unwrap();

    for store in [&comparison.bogo, &comparison.bozo] {
        assert_eq!(store.sizes().collect::<Vec<_>>(), [4, 5]);

        for n in 4..=5 {
            for metric in Metric::ALL {
                assert_eq!(store.trial_count(n, metric), 50);
                assert!(store.values(n, metric).iter().all(|&v| v >= 0.0));
            }
        }
    }

    let (bogo_iters, bozo_iters) = comparison.averages(Metric::Iters).unwrap();
    assert_eq!(bogo_iters.len(), 2);
    assert_eq!(bozo_iters.len(), 2);

    let (bogo_times, bozo_times) = comparison.averages(Metric::Times).unwrap();
    assert!(bogo_times.iter().chain(&bozo_times).all(|&t| t >= 0.0));

    let (bogo_hist, bozo_hist) = comparison.histograms(5, Metric::Iters, 25).unwrap();
    assert_eq!(bogo_hist.total(), 50);
    assert_eq!(bozo_hist.total(), 50);
}

#[test]
fn seeded_runs_repeat() {
    init_logger();

    let config = ExperimentConfig::new(2, 4, 5)
        .unwrap()
        .with_seed(patterns::random_init_seed());

    let a = Comparison::run(&config).unwrap();
    let b = Comparison::run(&config).unwrap();

    for n in config.sizes() {
        assert_eq!(a.bogo.values(n, Metric::Iters), b.bogo.values(n, Metric::Iters));
        assert_eq!(a.bozo.values(n, Metric::Iters), b.bozo.values(n, Metric::Iters));
    }
}

#[test]
fn untimed_run() {
    init_logger();

    let config = ExperimentConfig::new(3, 3, 4).unwrap().without_times();
    let mut rng = patterns::seeded_rng(patterns::random_init_seed());
    let comparison = Comparison::run_with(&config, &mut rng).unwrap();

    assert_eq!(comparison.bogo.trial_count(3, Metric::Iters), 4);
    assert_eq!(comparison.bogo.trial_count(3, Metric::Times), 0);
    assert!(matches!(
        comparison.averages(Metric::Times),
        Err(Error::EmptyMetric { size: 3, metric: Metric::Times })
    ));
}

#[test]
fn trivial_sizes() {
    init_logger();

    let config = ExperimentConfig::new(0, 1, 3).unwrap().with_seed(1);
    let comparison = Comparison::run(&config).unwrap();

    let (bogo, bozo) = comparison.averages(Metric::Iters).unwrap();
    assert_eq!(bogo, [0.0, 0.0]);
    assert_eq!(bozo, [0.0, 0.0]);
}
