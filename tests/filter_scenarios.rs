use dht_filter::{
    ChannelId, Sample, SampleError, SensorBank, TrimmedMeanFilter, DEFAULT_FILTER_CONFIG,
    WINDOW_SIZE,
};

fn filter() -> TrimmedMeanFilter {
    TrimmedMeanFilter::new(DEFAULT_FILTER_CONFIG)
}

#[test]
fn ascending_fill_drops_first_and_last() {
    let mut filter = filter();
    let mut last = None;
    for t in 0..10 {
        last = Some(filter.update(Sample::new(t as f32, 50.0)).unwrap());
    }

    assert_eq!(last.unwrap().temperature, 4.5);
    assert_eq!(last.unwrap().humidity, 50.0);
    assert_eq!(filter.temperature_window().excluded(), (9, 0));
}

#[test]
fn constant_input_reports_the_constant() {
    let mut filter = filter();
    for _ in 0..WINDOW_SIZE {
        filter.update(Sample::new(10.0, 10.0)).unwrap();
    }

    assert_eq!(filter.output(), Some(Sample::new(10.0, 10.0)));
    let (max, min) = filter.temperature_window().excluded();
    assert_ne!(max, min);
}

#[test]
fn distinct_values_trim_one_max_one_min() {
    let temps = [21.5, 19.0, 35.0, 22.0, 20.5, 21.0, 8.0, 22.5, 20.0, 21.25];
    let hums = [40.0, 41.0, 39.5, 90.0, 42.0, 2.0, 40.5, 41.5, 43.0, 39.0];

    let mut filter = filter();
    for (&t, &h) in temps.iter().zip(hums.iter()) {
        filter.update(Sample::new(t, h)).unwrap();
    }

    let t_expected = (temps.iter().sum::<f32>() - 35.0 - 8.0) / 8.0;
    let h_expected = (hums.iter().sum::<f32>() - 90.0 - 2.0) / 8.0;
    let out = filter.output().unwrap();
    assert!((out.temperature - t_expected).abs() < 1e-4);
    assert!((out.humidity - h_expected).abs() < 1e-4);
}

#[test]
fn eleventh_sample_overwrites_slot_zero() {
    let mut filter = filter();
    for t in 0..10 {
        filter.update(Sample::new(t as f32, 50.0)).unwrap();
    }
    assert_eq!(filter.cursor(), 0);

    let out = filter.update(Sample::new(30.0, 50.0)).unwrap();

    assert_eq!(filter.temperature_window().values()[0], 30.0);
    assert_eq!(filter.temperature_window().values().len(), WINDOW_SIZE);
    assert_eq!(filter.cursor(), 1);
    // window is now 30,1..9: drop 30 and 1
    assert_eq!(out.temperature, (2..10).sum::<i32>() as f32 / 8.0);
}

#[test]
fn invalid_temperature_rejects_the_whole_sample() {
    let mut filter = filter();
    filter.update(Sample::new(20.0, 40.0)).unwrap();
    let before = filter.output();

    let err = filter.update(Sample::new(61.0, 50.0)).unwrap_err();

    assert_eq!(err, SampleError::OutOfRange(Sample::new(61.0, 50.0)));
    assert_eq!(filter.output(), before);
    assert_eq!(filter.humidity_window().values()[1], 0.0);
    assert_eq!(filter.cursor(), 1);
}

#[test]
fn rejection_message() {
    let err = SampleError::OutOfRange(Sample::new(61.0, 50.0));
    assert_eq!(err.to_string(), "sample out of range: 61 C, 50 %RH");
}

#[test]
fn primed_after_a_full_window() {
    let mut filter = filter();
    for i in 0..WINDOW_SIZE {
        assert!(!filter.is_primed());
        filter.update(Sample::new(20.0, 40.0)).unwrap();
        assert_eq!(filter.accepted() as usize, i + 1);
    }
    assert!(filter.is_primed());
}

#[test]
fn bank_reports_both_channels() {
    let bank = SensorBank::default();
    for _ in 0..WINDOW_SIZE {
        bank.submit(ChannelId::Primary, Sample::new(24.0, 55.0)).unwrap();
    }
    bank.submit(ChannelId::Secondary, Sample::new(24.0, 120.0)).unwrap_err();

    let [primary, secondary] = bank.reports();

    assert_eq!(primary.to_string(), "ch0 t=24.0 h=55.0 ok=10 rej=0");
    assert_eq!(secondary.to_string(), "ch1 t=- h=- ok=0 rej=1*");
}
