// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use limits_core::LongDouble;
use limits_verify::check::{NumericTraitsCheck, verify};
use limits_verify::config::VerifierConfig;
use limits_verify::property::{Epsilon, FiniteMinMax, Infinity};
use limits_verify::space::{ExecutionSpace, Serial, Threads};
use limits_verify::suite::Suite;
use std::ffi::{
    c_char, c_int, c_long, c_longlong, c_schar, c_short, c_uchar, c_uint, c_ulong, c_ulonglong,
    c_ushort,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

macro_rules! check {
    ($space:expr, $t:ty, $p:ty) => {
        if let Err(err) = verify::<$t, $p, _>($space) {
            panic!("{err}");
        }
    };
}

fn numeric_traits_infinity<S: ExecutionSpace>(space: &S) {
    check!(space, f32, Infinity);
    check!(space, f64, Infinity);
    check!(space, LongDouble, Infinity);
}

fn numeric_traits_epsilon<S: ExecutionSpace>(space: &S) {
    check!(space, f32, Epsilon);
    check!(space, f64, Epsilon);
    check!(space, LongDouble, Epsilon);
}

fn numeric_traits_finite_min_max<S: ExecutionSpace>(space: &S) {
    check!(space, c_char, FiniteMinMax);
    check!(space, c_schar, FiniteMinMax);
    check!(space, c_uchar, FiniteMinMax);

    check!(space, c_short, FiniteMinMax);
    check!(space, c_ushort, FiniteMinMax);

    check!(space, c_int, FiniteMinMax);
    check!(space, c_uint, FiniteMinMax);

    check!(space, c_long, FiniteMinMax);
    check!(space, c_ulong, FiniteMinMax);

    check!(space, c_longlong, FiniteMinMax);
    check!(space, c_ulonglong, FiniteMinMax);

    check!(space, i128, FiniteMinMax);
    check!(space, u128, FiniteMinMax);
    check!(space, isize, FiniteMinMax);
    check!(space, usize, FiniteMinMax);

    check!(space, f32, FiniteMinMax);
    check!(space, f64, FiniteMinMax);
    check!(space, LongDouble, FiniteMinMax);
}

#[test]
fn test_serial_numeric_traits_infinity() {
    init_tracing();
    numeric_traits_infinity(&Serial);
}

#[test]
fn test_serial_numeric_traits_epsilon() {
    init_tracing();
    numeric_traits_epsilon(&Serial);
}

#[test]
fn test_serial_numeric_traits_finite_min_max() {
    init_tracing();
    numeric_traits_finite_min_max(&Serial);
}

#[test]
fn test_threads_numeric_traits_infinity() {
    init_tracing();
    numeric_traits_infinity(&Threads::with_workers(4).unwrap());
    numeric_traits_infinity(&Threads::global());
}

#[test]
fn test_threads_numeric_traits_epsilon() {
    init_tracing();
    numeric_traits_epsilon(&Threads::with_workers(4).unwrap());
    numeric_traits_epsilon(&Threads::global());
}

#[test]
fn test_threads_numeric_traits_finite_min_max() {
    init_tracing();
    numeric_traits_finite_min_max(&Threads::with_workers(4).unwrap());
    numeric_traits_finite_min_max(&Threads::global());
}

#[test]
fn test_long_double_infinity_has_zero_errors() {
    let space = Threads::with_workers(2).unwrap();
    assert_eq!(
        NumericTraitsCheck::<_, LongDouble, Infinity>::new(&space).errors(),
        0
    );
    assert_eq!(
        NumericTraitsCheck::<_, LongDouble, Infinity>::new(&Serial).errors(),
        0
    );
}

#[test]
fn test_worker_count_does_not_change_result() {
    for workers in [1, 2, 3, 8] {
        let space = Threads::with_workers(workers).unwrap();
        assert_eq!(NumericTraitsCheck::<_, f32, Epsilon>::new(&space).errors(), 0);
        assert_eq!(NumericTraitsCheck::<_, u64, FiniteMinMax>::new(&space).errors(), 0);
    }
}

#[test]
fn test_env_configured_suite() {
    init_tracing();
    let space = Threads::from_config(&VerifierConfig::from_env()).unwrap();
    let report = Suite::new(&space).run();
    assert!(report.passed(), "{}", report);
    assert!(report.into_result().is_ok());
}
