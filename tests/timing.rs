use std::thread;
use std::time::{Duration, Instant};

use bogozo_rs::timing::{elapsed_secs, timed, timeit};
use bogozo_rs::Error;

#[test]
fn timed_sleep() {
    let nap = Duration::from_millis(20);
    let (val, secs) = timed(|| {
        thread::sleep(nap);
        42
    })
    .unwrap();

    assert_eq!(val, 42);
    assert!(secs >= nap.as_secs_f64(), "secs: {secs}");
}

#[test]
fn timeit_keeps_side_effects() {
    let mut calls = Vec::new();
    let mut push = timeit(|(a, b): (i32, i32)| {
        calls.push(a + b);
        a * b
    });

    let (first, first_secs) = push((2, 3)).unwrap();
    let (second, second_secs) = push((4, 5)).unwrap();
    drop(push);

    assert_eq!((first, second), (6, 20));
    assert!(first_secs >= 0.0 && second_secs >= 0.0);
    assert_eq!(calls, [5, 9]);
}

#[test]
fn timeit_mutates_argument() {
    let mut v = vec![3, 1, 2];
    let mut sort = timeit(|v: &mut Vec<i32>| {
        v.sort_unstable();
        v.len()
    });

    let (len, _) = sort(&mut v).unwrap();
    drop(sort);

    assert_eq!(len, 3);
    assert_eq!(v, [1, 2, 3]);
}

#[test]
fn elapsed_backwards_is_fault() {
    let start = Instant::now();
    thread::sleep(Duration::from_millis(1));
    let end = Instant::now();

    assert!(elapsed_secs(start, end).unwrap() > 0.0);
    assert!(matches!(elapsed_secs(end, start), Err(Error::ClockFault)));
    assert_eq!(elapsed_secs(start, start).unwrap(), 0.0);
}
